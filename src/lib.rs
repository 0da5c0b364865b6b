//! **rdxsort-core** - a stable, bidirectional, 8-bit LSD radix sort library
//! for arrays of scalar data.
//!
//! # Modules
//! | Module | Responsibility |
//! |--------|-----------------|
//! | [`radix`]     | Scalar element types and their unsigned bit-carrier representation |
//! | [`mode`]      | Key-space filters mapping signed/float/absolute orderings onto unsigned byte-lex order |
//! | [`direction`] | The `(reverse_sort, reverse_order)` direction pair |
//! | [`histogram`] | Single-pass byte-plane histogram |
//! | [`offsets`]   | Histogram-to-offsets prefix sum, runsteps, parity |
//! | [`scatter`]   | Bidirectional per-plane scatter pass |
//! | [`indirect`]  | Sorting handles by a projected key |
//! | [`alloc`]     | The scratch-allocator contract consumed by the allocating entry points |
//! | [`api`]       | The four public sort entry points |
//!
//! # Quick start
//! ```
//! use rdxsort_core::api::sort;
//! use rdxsort_core::alloc::DefaultAllocator;
//! use rdxsort_core::mode::Unsigned;
//! use rdxsort_core::direction::Direction;
//!
//! let mut data = vec![3u32, 1, 4, 1, 5, 9, 2, 6];
//! sort::<u32, Unsigned>(&mut data, Direction::ASCENDING, &DefaultAllocator).unwrap();
//! assert_eq!(data, vec![1, 1, 2, 3, 4, 5, 6, 9]);
//! ```
//!
//! Sorting is **stable** for equal filtered keys (see [`mode`] for what
//! "filtered key" means per element type) and never performs comparator
//! calls - everything here is counting sort over byte planes.

pub mod alloc;
pub mod api;
mod bits;
pub mod direction;
pub mod error;
pub mod histogram;
pub mod indirect;
pub mod mode;
pub mod offsets;
pub mod radix;
pub mod scatter;

pub use error::{Error, Result};
