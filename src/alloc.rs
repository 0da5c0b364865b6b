//! The scratch-allocator contract: an external collaborator the allocating
//! [`crate::api`] entry points consume to obtain and release the one
//! scratch buffer they need.
//!
//! Huge-page-backed allocators are out of scope here - the core does not
//! rely on the exact backing being honoured, so a caller wanting one
//! implements [`ScratchAllocator`] itself.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// A hint the caller may pass to request a particular backing for the
/// scratch allocation. [`DefaultAllocator`] accepts any hint and ignores
/// it, since it has only one backing (`std::alloc`) to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationHint {
    #[default]
    Normal,
    PreferHugePages,
}

/// The external allocator contract the allocating entry points depend on.
/// `allocate`/`deallocate` mirror `std::alloc::{alloc, dealloc}`'s
/// contract: `allocate` returns `None` on failure rather than aborting,
/// and a non-`None` return must be paired with exactly one matching
/// `deallocate` call using the same `len`/`element_layout`.
pub trait ScratchAllocator {
    /// Allocates room for `len` elements laid out as `element_layout`
    /// repeated, or `None` on failure.
    fn allocate(&self, len: usize, element_layout: Layout, hint: AllocationHint) -> Option<NonNull<u8>>;

    /// Releases a block previously returned by `allocate` with the same
    /// `len`/`element_layout`.
    ///
    /// # Safety
    /// `ptr` must have been returned by a prior `allocate` call on `self`
    /// with the same `len` and `element_layout`, and not already freed.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, len: usize, element_layout: Layout);
}

/// The default [`ScratchAllocator`], backed directly by `std::alloc`. No
/// huge-page support; `hint` is accepted and ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAllocator;

impl DefaultAllocator {
    fn array_layout(len: usize, element_layout: Layout) -> Option<Layout> {
        let stride = element_layout.pad_to_align().size();
        let size = stride.checked_mul(len)?;
        Layout::from_size_align(size, element_layout.align()).ok()
    }
}

impl ScratchAllocator for DefaultAllocator {
    fn allocate(&self, len: usize, element_layout: Layout, _hint: AllocationHint) -> Option<NonNull<u8>> {
        if len == 0 {
            return NonNull::new(element_layout.align() as *mut u8);
        }
        let layout = Self::array_layout(len, element_layout)?;
        // SAFETY: `layout` has nonzero size, checked above.
        let ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, len: usize, element_layout: Layout) {
        if len == 0 {
            return;
        }
        let layout = Self::array_layout(len, element_layout).expect("layout recomputation must match allocate's");
        // SAFETY: caller guarantees `ptr` came from a matching `allocate` call.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allocator_round_trips() {
        let alloc = DefaultAllocator;
        let layout = Layout::new::<u32>();
        let ptr = alloc.allocate(16, layout, AllocationHint::Normal).expect("allocation failed");
        unsafe {
            alloc.deallocate(ptr, 16, layout);
        }
    }

    #[test]
    fn default_allocator_handles_zero_length() {
        let alloc = DefaultAllocator;
        let layout = Layout::new::<u64>();
        let ptr = alloc.allocate(0, layout, AllocationHint::Normal).expect("zero-length allocation must succeed");
        unsafe {
            alloc.deallocate(ptr, 0, layout);
        }
    }
}
