//! The public sort entry points: four operations,
//! each available for a direct element sort and for an
//! [`crate::indirect`] handle sort.
//!
//! | Function | Input aliasing | Result location |
//! |----------|----------------|------------------|
//! | [`sort_in_place_with_buffer`] / [`indirect_sort_in_place_with_buffer`] | reads & writes input | caller-chosen: input or buffer |
//! | [`sort_copy_with_buffer`] / [`indirect_sort_copy_with_buffer`] | reads input, writes output | always output |
//! | [`sort`] / [`indirect_sort`] | reads & writes input | input | (allocating)
//! | [`sort_copy`] / [`indirect_sort_copy`] | reads input, writes output | output | (allocating)
//!
//! The `*_with_buffer` forms are infallible under precondition (checked by
//! `debug_assert!` - undefined behaviour otherwise); this is the one place
//! in the crate that trusts caller-supplied lengths rather than returning
//! a `Result`, since the non-allocating kernels have a no-fail contract.
//! The allocating forms return [`Error::AllocationFailed`] if the scratch
//! allocator fails, making no observable change to the caller's arrays.

use std::alloc::Layout;

use crate::alloc::{AllocationHint, ScratchAllocator};
use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::histogram::histogram;
use crate::indirect::{self, Projection};
use crate::mode::Mode;
use crate::offsets::build;
use crate::radix::RadixKey;
use crate::scatter::{scatter_copy, scatter_in_place};

/// Runtime-to-const-generic dispatch: `$dir` is a [`Direction`] value;
/// binds `$rs`/`$ro` as `const bool`s matching it for the duration of
/// `$body`, then evaluates `$body`. Four monomorphizations are generated;
/// which one runs is chosen once, at the call boundary, never inside a
/// per-element loop.
macro_rules! dispatch_direction {
    ($dir:expr, |$rs:ident, $ro:ident| $body:expr) => {
        match ($dir.reverse_sort, $dir.reverse_order) {
            (false, false) => {
                const $rs: bool = false;
                const $ro: bool = false;
                $body
            }
            (false, true) => {
                const $rs: bool = false;
                const $ro: bool = true;
                $body
            }
            (true, false) => {
                const $rs: bool = true;
                const $ro: bool = false;
                $body
            }
            (true, true) => {
                const $rs: bool = true;
                const $ro: bool = true;
                $body
            }
        }
    };
}

fn direct_key_of<T: RadixKey, M: Mode>() -> impl Fn(&T) -> u64 {
    let width_bits = T::width_bits();
    move |v: &T| M::filter(v.to_bits(), width_bits)
}

/// Sorts `input` in place against `buffer`, landing the result in
/// `buffer` if `move_to_buffer` is `true`, otherwise back in `input`.
///
/// # Preconditions
/// `buffer.len() == input.len()`; `input` and `buffer` do not alias.
pub fn sort_in_place_with_buffer<T, M>(input: &mut [T], buffer: &mut [T], direction: Direction, move_to_buffer: bool)
where
    T: RadixKey,
    M: Mode,
{
    debug_assert_eq!(input.len(), buffer.len(), "input/buffer length mismatch");
    let key_of = direct_key_of::<T, M>();
    let bytes = T::BYTES;
    let counts = histogram(input, bytes, &key_of);
    dispatch_direction!(direction, |RS, RO| {
        let _ = RO; // direct sorts have no notion of handle order; only `reverse_sort` applies.
        let plan = build::<RS>(&counts, bytes, input.len() as u64);
        scatter_in_place(input, buffer, &plan, bytes, move_to_buffer, key_of);
    });
}

/// Sorts `input` by reading it and writing the result to `output`, using
/// `buffer` as scratch. `input` is never written to.
///
/// # Preconditions
/// `output.len() == buffer.len() == input.len()`; the three arrays do not
/// alias each other.
pub fn sort_copy_with_buffer<T, M>(input: &[T], output: &mut [T], buffer: &mut [T], direction: Direction)
where
    T: RadixKey,
    M: Mode,
{
    debug_assert_eq!(input.len(), output.len(), "input/output length mismatch");
    debug_assert_eq!(input.len(), buffer.len(), "input/buffer length mismatch");
    let key_of = direct_key_of::<T, M>();
    let bytes = T::BYTES;
    let counts = histogram(input, bytes, &key_of);
    dispatch_direction!(direction, |RS, RO| {
        let _ = RO;
        let plan = build::<RS>(&counts, bytes, input.len() as u64);
        scatter_copy(input, output, buffer, &plan, bytes, key_of);
    });
}

/// Sorts `input` in place, allocating its own scratch buffer from
/// `allocator` and freeing it before returning on every exit path.
pub fn sort<T, M>(input: &mut [T], direction: Direction, allocator: &impl ScratchAllocator) -> Result<()>
where
    T: RadixKey,
    M: Mode,
{
    let n = input.len();
    let layout = Layout::new::<T>();
    let ptr = allocator
        .allocate(n, layout, AllocationHint::Normal)
        .ok_or(Error::AllocationFailed)?;
    // SAFETY: `ptr` was just allocated for exactly `n` elements of `T` and
    // is dropped as a `&mut [T]` before `deallocate` is called below; the
    // sort never reads a slot before a scatter pass has written it.
    let buffer: &mut [T] = unsafe { std::slice::from_raw_parts_mut(ptr.as_ptr().cast::<T>(), n) };
    sort_in_place_with_buffer::<T, M>(input, buffer, direction, false);
    // SAFETY: `ptr`/`n`/`layout` match the `allocate` call above exactly.
    unsafe { allocator.deallocate(ptr, n, layout) };
    Ok(())
}

/// Sorts `input` by reading it and writing the result to `output`,
/// allocating its own scratch buffer from `allocator` and freeing it
/// before returning on every exit path. `input` is never written to.
pub fn sort_copy<T, M>(input: &[T], output: &mut [T], direction: Direction, allocator: &impl ScratchAllocator) -> Result<()>
where
    T: RadixKey,
    M: Mode,
{
    debug_assert_eq!(input.len(), output.len(), "input/output length mismatch");
    let n = input.len();
    let layout = Layout::new::<T>();
    let ptr = allocator
        .allocate(n, layout, AllocationHint::Normal)
        .ok_or(Error::AllocationFailed)?;
    let buffer: &mut [T] = unsafe { std::slice::from_raw_parts_mut(ptr.as_ptr().cast::<T>(), n) };
    sort_copy_with_buffer::<T, M>(input, output, buffer, direction);
    unsafe { allocator.deallocate(ptr, n, layout) };
    Ok(())
}

/// The [`crate::indirect`] counterpart of [`sort_in_place_with_buffer`]:
/// sorts `handles` in place by the key `projection` derives from each one.
pub fn indirect_sort_in_place_with_buffer<V, K, M, P>(
    handles: &mut [V],
    buffer: &mut [V],
    projection: &P,
    direction: Direction,
    move_to_buffer: bool,
) where
    V: Copy,
    K: RadixKey,
    M: Mode,
    P: Projection<V, K>,
{
    debug_assert_eq!(handles.len(), buffer.len(), "handles/buffer length mismatch");
    dispatch_direction!(direction, |RS, RO| {
        indirect::sort_in_place::<V, K, M, P, RS, RO>(handles, buffer, projection, move_to_buffer);
    });
}

/// The [`crate::indirect`] counterpart of [`sort_copy_with_buffer`]:
/// sorts `handles` by reading them and writing the result to `output`.
/// `handles` is never written to.
pub fn indirect_sort_copy_with_buffer<V, K, M, P>(
    handles: &[V],
    output: &mut [V],
    scratch: &mut [V],
    projection: &P,
    direction: Direction,
) where
    V: Copy,
    K: RadixKey,
    M: Mode,
    P: Projection<V, K>,
{
    debug_assert_eq!(handles.len(), output.len(), "handles/output length mismatch");
    debug_assert_eq!(handles.len(), scratch.len(), "handles/scratch length mismatch");
    dispatch_direction!(direction, |RS, RO| {
        indirect::sort_copy::<V, K, M, P, RS, RO>(handles, output, scratch, projection);
    });
}

/// The [`crate::indirect`] counterpart of [`sort`]: sorts `handles` in
/// place, allocating its own scratch buffer.
pub fn indirect_sort<V, K, M, P>(handles: &mut [V], projection: &P, direction: Direction, allocator: &impl ScratchAllocator) -> Result<()>
where
    V: Copy,
    K: RadixKey,
    M: Mode,
    P: Projection<V, K>,
{
    let n = handles.len();
    let layout = Layout::new::<V>();
    let ptr = allocator
        .allocate(n, layout, AllocationHint::Normal)
        .ok_or(Error::AllocationFailed)?;
    let buffer: &mut [V] = unsafe { std::slice::from_raw_parts_mut(ptr.as_ptr().cast::<V>(), n) };
    indirect_sort_in_place_with_buffer::<V, K, M, P>(handles, buffer, projection, direction, false);
    unsafe { allocator.deallocate(ptr, n, layout) };
    Ok(())
}

/// The [`crate::indirect`] counterpart of [`sort_copy`]: sorts `handles`
/// by reading them and writing the result to `output`, allocating its own
/// scratch buffer. `handles` is never written to.
pub fn indirect_sort_copy<V, K, M, P>(
    handles: &[V],
    output: &mut [V],
    projection: &P,
    direction: Direction,
    allocator: &impl ScratchAllocator,
) -> Result<()>
where
    V: Copy,
    K: RadixKey,
    M: Mode,
    P: Projection<V, K>,
{
    debug_assert_eq!(handles.len(), output.len(), "handles/output length mismatch");
    let n = handles.len();
    let layout = Layout::new::<V>();
    let ptr = allocator
        .allocate(n, layout, AllocationHint::Normal)
        .ok_or(Error::AllocationFailed)?;
    let scratch: &mut [V] = unsafe { std::slice::from_raw_parts_mut(ptr.as_ptr().cast::<V>(), n) };
    indirect_sort_copy_with_buffer::<V, K, M, P>(handles, output, scratch, projection, direction);
    unsafe { allocator.deallocate(ptr, n, layout) };
    Ok(())
}
