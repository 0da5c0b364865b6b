//! Sorting by a projected key: handles are moved, their key is re-derived
//! from the projection on every scatter pass.
//!
//! Three projection shapes are distinguished at the type level: a field
//! selector, a getter function, and a two-level table+index lookup. A
//! field selector and a getter are the same thing in Rust (both are just
//! `Fn(&V) -> K`), so they collapse into one [`Direct`] projection, leaving
//! [`TwoLevel`] as the second shape. [`Projection`] is sealed so no third
//! shape - and no user-authored composition of `TwoLevel` inside `TwoLevel`
//! - can ever implement it; third-level indirection is rejected at compile
//! time by construction rather than by a runtime check.

use crate::histogram::histogram;
use crate::mode::Mode;
use crate::offsets::build;
use crate::radix::RadixKey;
use crate::scatter::{scatter_copy, scatter_in_place};
use core::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Converts a handle `&V` into its `K`-typed key. Implemented only by
/// [`Direct`] and [`TwoLevel`] (see the module docs for why).
pub trait Projection<V, K>: sealed::Sealed {
    /// Reads the key out of `handle`. Must be pure and deterministic - the
    /// same handle re-read on a later pass must yield the same key.
    fn project(&self, handle: &V) -> K;
}

/// A one-level projection: a closure reading the key directly off the
/// handle, covering both the "field selector" and "getter function" forms.
pub struct Direct<F>(pub F);

impl<V, K, F: Fn(&V) -> K> sealed::Sealed for Direct<F> {}

impl<V, K, F: Fn(&V) -> K> Projection<V, K> for Direct<F> {
    fn project(&self, handle: &V) -> K {
        (self.0)(handle)
    }
}

/// A two-level projection: the handle selects a row index into `table`,
/// and `row_key` reads the key off that row.
pub struct TwoLevel<'t, V, Row, K, IndexOf, RowKey> {
    table: &'t [Row],
    index_of: IndexOf,
    row_key: RowKey,
    _marker: PhantomData<(V, K)>,
}

impl<'t, V, Row, K, IndexOf, RowKey> TwoLevel<'t, V, Row, K, IndexOf, RowKey>
where
    IndexOf: Fn(&V) -> usize,
    RowKey: Fn(&Row) -> K,
{
    pub fn new(table: &'t [Row], index_of: IndexOf, row_key: RowKey) -> Self {
        TwoLevel {
            table,
            index_of,
            row_key,
            _marker: PhantomData,
        }
    }
}

impl<'t, V, Row, K, IndexOf, RowKey> sealed::Sealed for TwoLevel<'t, V, Row, K, IndexOf, RowKey> {}

impl<'t, V, Row, K, IndexOf, RowKey> Projection<V, K> for TwoLevel<'t, V, Row, K, IndexOf, RowKey>
where
    IndexOf: Fn(&V) -> usize,
    RowKey: Fn(&Row) -> K,
{
    fn project(&self, handle: &V) -> K {
        (self.row_key)(&self.table[(self.index_of)(handle)])
    }
}

/// Sorts `handles` in place by the key `projection` derives from each one,
/// ping-ponging against `buffer`. The final result lands in `buffer` if
/// `move_to_buffer` is `true`, otherwise back in `handles`.
///
/// `REVERSE_ORDER` realises stability's reverse: reversing `handles` before
/// the stable ascending/descending scatter pipeline runs is equivalent to,
/// and simpler than, re-deriving reversed order inside every pass - a
/// stable sort over a reversed array emits each equal-key group in the
/// reverse of its original relative order, which is exactly what
/// `reverse_order` asks for, while leaving the relative order of
/// differently-keyed elements untouched.
pub fn sort_in_place<V, K, M, P, const REVERSE_SORT: bool, const REVERSE_ORDER: bool>(
    handles: &mut [V],
    buffer: &mut [V],
    projection: &P,
    move_to_buffer: bool,
) where
    V: Copy,
    K: RadixKey,
    M: Mode,
    P: Projection<V, K>,
{
    if REVERSE_ORDER {
        handles.reverse();
    }
    let width_bits = K::width_bits();
    let bytes = K::BYTES;
    let key_of = |h: &V| M::filter(projection.project(h).to_bits(), width_bits);

    let counts = histogram(handles, bytes, &key_of);
    let plan = build::<REVERSE_SORT>(&counts, bytes, handles.len() as u64);
    scatter_in_place(handles, buffer, &plan, bytes, move_to_buffer, key_of);
}

/// Sorts `handles` by the key `projection` derives from each one, reading
/// `handles` and writing the result to `output`; `scratch` is scratch the
/// same length as both. `handles` is never written to.
pub fn sort_copy<V, K, M, P, const REVERSE_SORT: bool, const REVERSE_ORDER: bool>(
    handles: &[V],
    output: &mut [V],
    scratch: &mut [V],
    projection: &P,
) where
    V: Copy,
    K: RadixKey,
    M: Mode,
    P: Projection<V, K>,
{
    let width_bits = K::width_bits();
    let bytes = K::BYTES;
    let key_of = |h: &V| M::filter(projection.project(h).to_bits(), width_bits);
    let n = handles.len();

    if REVERSE_ORDER {
        for (i, h) in handles.iter().enumerate() {
            scratch[n - 1 - i] = *h;
        }
        let counts = histogram(scratch, bytes, &key_of);
        let plan = build::<REVERSE_SORT>(&counts, bytes, n as u64);
        // `scratch` now plays the role of the (already-reversed) source;
        // ping-ponging it against `output` with `move_to_buffer = true`
        // lands the final result in `output`, never touching `handles`.
        scatter_in_place(scratch, output, &plan, bytes, true, key_of);
    } else {
        let counts = histogram(handles, bytes, &key_of);
        let plan = build::<REVERSE_SORT>(&counts, bytes, n as u64);
        scatter_copy(handles, output, scratch, &plan, bytes, key_of);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Handle {
        id: u32,
        key: i32,
    }

    #[test]
    fn direct_projection_sorts_by_field() {
        let mut handles = [
            Handle { id: 0, key: 3 },
            Handle { id: 1, key: -1 },
            Handle { id: 2, key: 0 },
        ];
        let mut buffer = handles;
        let proj = Direct(|h: &Handle| h.key);
        sort_in_place::<_, i32, crate::mode::Signed, _, false, false>(&mut handles, &mut buffer, &proj, false);
        let keys: Vec<i32> = handles.iter().map(|h| h.key).collect();
        assert_eq!(keys, vec![-1, 0, 3]);
    }

    #[test]
    fn two_level_projection_sorts_via_table() {
        let table = [10i32, -20, 5];
        let mut handles = [
            Handle { id: 0, key: 2 }, // table[2] = 5
            Handle { id: 1, key: 1 }, // table[1] = -20
            Handle { id: 2, key: 0 }, // table[0] = 10
        ];
        let mut buffer = handles;
        let proj = TwoLevel::new(&table[..], |h: &Handle| h.key as usize, |row: &i32| *row);
        sort_in_place::<_, i32, crate::mode::Signed, _, false, false>(&mut handles, &mut buffer, &proj, false);
        let sorted_keys: Vec<i32> = handles.iter().map(|h| table[h.key as usize]).collect();
        assert_eq!(sorted_keys, vec![-20, 5, 10]);
    }

    #[test]
    fn reverse_order_reverses_equal_key_groups() {
        let mut handles = [
            Handle { id: 0, key: 1 },
            Handle { id: 1, key: 1 },
            Handle { id: 2, key: 0 },
        ];
        let mut buffer = handles;
        let proj = Direct(|h: &Handle| h.key);
        sort_in_place::<_, i32, crate::mode::Signed, _, false, true>(&mut handles, &mut buffer, &proj, false);
        // key 0 group: [id 2]; key 1 group, source order [id0, id1], reversed -> [id1, id0]
        let ids: Vec<u32> = handles.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[test]
    fn sort_copy_never_mutates_handles() {
        let handles = [
            Handle { id: 0, key: 3 },
            Handle { id: 1, key: -1 },
        ];
        let snapshot = handles;
        let mut output = handles;
        let mut scratch = handles;
        let proj = Direct(|h: &Handle| h.key);
        sort_copy::<_, i32, crate::mode::Signed, _, false, false>(&handles, &mut output, &mut scratch, &proj);
        assert_eq!(handles, snapshot);
        let keys: Vec<i32> = output.iter().map(|h| h.key).collect();
        assert_eq!(keys, vec![-1, 3]);
    }

    #[test]
    fn sort_copy_with_reverse_order_never_mutates_handles() {
        let handles = [
            Handle { id: 0, key: 1 },
            Handle { id: 1, key: 1 },
            Handle { id: 2, key: 0 },
        ];
        let snapshot = handles;
        let mut output = handles;
        let mut scratch = handles;
        let proj = Direct(|h: &Handle| h.key);
        sort_copy::<_, i32, crate::mode::Signed, _, false, true>(&handles, &mut output, &mut scratch, &proj);
        assert_eq!(handles, snapshot);
        let ids: Vec<u32> = output.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }
}
