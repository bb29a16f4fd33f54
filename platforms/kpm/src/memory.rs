// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Address translation and contiguous allocation interfaces.

pub use memory_addr::{PAGE_SIZE_4K, PhysAddr, VirtAddr, pa, va};

/// Memory services provided by the embedding kernel.
///
/// `alloc_contiguous` must return physically contiguous memory; the suspend
/// path relies on `v2p(start) .. v2p(start) + size` describing the whole
/// buffer.
pub trait MemoryIf {
    /// Converts a physical address to a linear (virtual) address.
    fn p2v(&self, paddr: PhysAddr) -> VirtAddr;

    /// Converts a linear (virtual) address back to physical.
    fn v2p(&self, vaddr: VirtAddr) -> PhysAddr;

    /// Allocates `size` bytes of physically contiguous memory with at least
    /// `align` alignment. Returns `None` when the allocator is exhausted.
    fn alloc_contiguous(&self, size: usize, align: usize) -> Option<VirtAddr>;

    /// Releases a buffer previously returned by [`alloc_contiguous`].
    ///
    /// [`alloc_contiguous`]: MemoryIf::alloc_contiguous
    fn dealloc_contiguous(&self, vaddr: VirtAddr, size: usize, align: usize);
}
