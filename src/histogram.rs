//! Single-pass byte-plane histogram.
//!
//! Generic over a `key_of` projection rather than [`crate::radix::RadixKey`]
//! directly, so the same counting pass serves both direct sorts (where
//! `key_of` is `|v| Mode::filter(v.to_bits(), width_bits)`) and
//! [`crate::indirect`] sorts (where it additionally projects a key out of
//! a handle first). This is the shared leaf both paths scatter against.

use crate::bits::byte_at;

/// The maximum number of byte planes any supported width needs (64 bits /
/// 8 = 8 planes). Histograms for narrower types simply leave the unused
/// trailing planes at zero.
pub const MAX_PLANES: usize = 8;

/// `counts[plane][byte]`: the number of elements whose filtered key has
/// `byte` in byte plane `plane`.
pub type Counts = [[u64; 256]; MAX_PLANES];

/// Builds the histogram for `data` over `bytes` byte planes (`bytes` is the
/// element's width in bytes, `1..=8`), applying `key_of` to obtain each
/// element's filtered 64-bit bit-carrier.
///
/// Writing the destination slot during this same pass would save a second
/// read, but is a performance optimisation only; this implementation reads
/// from the source array again during the scatter pass instead, keeping
/// the histogram pass a pure, side-effect-free count.
pub fn histogram<T>(data: &[T], bytes: usize, key_of: impl Fn(&T) -> u64) -> Counts {
    let mut counts: Counts = [[0u64; 256]; MAX_PLANES];
    for v in data {
        let f = key_of(v);
        for (plane, table) in counts.iter_mut().enumerate().take(bytes) {
            table[byte_at(f, plane) as usize] += 1;
        }
    }
    counts
}
