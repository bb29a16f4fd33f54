// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Scratch buffer for the preserved training space.
//!
//! The underlying allocator has no visibility into which physical pages the
//! memory controller currently maps as live DRAM windows, so a candidate
//! buffer may land exactly on the data it is supposed to preserve. Every
//! candidate is therefore checked against the preserved extent of each
//! enabled window and retried on overlap; transient fragmentation is the
//! expected cause, so a few retries beat failing outright.

use kpm::memory::{MemoryIf, PAGE_SIZE_4K, VirtAddr, va};

use crate::PmError;
use crate::window::{MemWindow, enabled_count};

/// Retry budget for finding a non-overlapping candidate.
const ALLOC_RETRIES: usize = 4;

const SCRATCH_ALIGN: usize = PAGE_SIZE_4K;

/// Owned scratch memory holding one training-space slot per enabled window,
/// in window-index order.
///
/// Exclusively owned by the suspend cycle that acquired it; released
/// explicitly with [`release`](ScratchBuffer::release) once restore is done.
pub struct ScratchBuffer {
    vaddr: VirtAddr,
    slot_size: usize,
    slots: usize,
}

impl ScratchBuffer {
    /// Acquires a buffer sized for the enabled windows in `windows`.
    ///
    /// Zero enabled windows yields an empty buffer without touching the
    /// allocator. Returns [`PmError::AllocFailed`] when the allocator is
    /// exhausted or no non-overlapping candidate turns up within the retry
    /// budget.
    pub fn acquire<H: MemoryIf + ?Sized>(
        hw: &H,
        windows: &[MemWindow],
        slot_size: usize,
    ) -> Result<Self, PmError> {
        let slots = enabled_count(windows);
        let total = slots * slot_size;
        if total == 0 {
            return Ok(Self {
                vaddr: va!(0),
                slot_size,
                slots: 0,
            });
        }

        for _ in 0..ALLOC_RETRIES {
            let Some(vaddr) = hw.alloc_contiguous(total, SCRATCH_ALIGN) else {
                warn!("Could not allocate space to store DDR training space");
                return Err(PmError::AllocFailed);
            };

            let base = hw.v2p(vaddr).as_usize();
            let clear = windows
                .iter()
                .filter_map(|w| w.base)
                .all(|win| !ranges_overlap(base, total, win.as_usize(), slot_size));
            if clear {
                return Ok(Self {
                    vaddr,
                    slot_size,
                    slots,
                });
            }
            hw.dealloc_contiguous(vaddr, total, SCRATCH_ALIGN);
        }

        warn!("Could not allocate space to store DDR training space");
        Err(PmError::AllocFailed)
    }

    /// Total size in bytes.
    pub fn size(&self) -> usize {
        self.slots * self.slot_size
    }

    /// Size of one window slot in bytes.
    pub fn slot_size(&self) -> usize {
        self.slot_size
    }

    /// Number of slots (one per enabled window).
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Start of slot `i`.
    pub fn slot(&self, i: usize) -> VirtAddr {
        debug_assert!(i < self.slots);
        va!(self.vaddr.as_usize() + i * self.slot_size)
    }

    /// Returns the buffer to the platform allocator.
    pub fn release<H: MemoryIf + ?Sized>(self, hw: &H) {
        if self.slots != 0 {
            hw.dealloc_contiguous(self.vaddr, self.size(), SCRATCH_ALIGN);
        }
    }
}

fn ranges_overlap(a_start: usize, a_len: usize, b_start: usize, b_len: usize) -> bool {
    a_start < b_start + b_len && b_start < a_start + a_len
}

#[cfg(test)]
mod tests {
    use super::ranges_overlap;

    #[test]
    fn overlap_is_exclusive_at_range_ends() {
        // Touching ranges do not overlap.
        assert!(!ranges_overlap(0x2800, 0x1000, 0x0, 0x2800));
        assert!(!ranges_overlap(0x0, 0x2800, 0x2800, 0x1000));
        // One byte inside does.
        assert!(ranges_overlap(0x27ff, 0x1000, 0x0, 0x2800));
        assert!(ranges_overlap(0x0, 0x2801, 0x2800, 0x1000));
        // Full containment does.
        assert!(ranges_overlap(0x100, 0x10, 0x0, 0x2800));
    }
}
