// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Save/restore of the DDR training space.
//!
//! The DDR3 training sequence that runs during power-up overwrites the first
//! [`TRAINING_SPACE_SIZE`] bytes of every enabled chip-select window, so
//! exactly that head is copied out before the transition and copied back
//! after it.

use kpm::memory::MemoryIf;
use kpm::regs::RegIf;

use crate::PmError;
use crate::regs::MAX_CS_COUNT;
use crate::scratch::ScratchBuffer;
use crate::window::{self, MemWindow};

/// Bytes preserved at the head of each enabled window.
pub const TRAINING_SPACE_SIZE: usize = 10 * 1024;

/// Copies the head of every enabled window into `buf`, one slot per window
/// in chip-select order.
///
/// A fault on an unmapped window base is fatal by design; there is no
/// recovery path at this level.
pub fn save<H: MemoryIf + ?Sized>(hw: &H, windows: &[MemWindow], buf: &mut ScratchBuffer) {
    info!("Storing training space");

    let mut slot = 0;
    for win in windows {
        let Some(base) = win.base else { continue };
        let src = hw.p2v(base);
        let dst = buf.slot(slot);
        unsafe {
            core::ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr(), buf.slot_size());
        }
        slot += 1;
    }
}

/// Copies every slot of `buf` back to its window, in the chip-select order
/// used at save time.
///
/// The windows are re-discovered from the controller and compared with
/// `saved`; copying against a changed layout would corrupt live memory, so a
/// mismatch aborts with [`PmError::WindowMismatch`] before touching anything.
pub fn restore<H: MemoryIf + RegIf + ?Sized>(
    hw: &H,
    saved: &[MemWindow; MAX_CS_COUNT],
    buf: &ScratchBuffer,
) -> Result<(), PmError> {
    info!("Restoring training space");

    let current = window::discover(hw);
    if current != *saved {
        error!("SDRAM window set changed across the power cycle: saved {saved:?}, found {current:?}");
        return Err(PmError::WindowMismatch);
    }

    let mut slot = 0;
    for win in saved {
        let Some(base) = win.base else { continue };
        let src = buf.slot(slot);
        let dst = hw.p2v(base);
        unsafe {
            core::ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr(), buf.slot_size());
        }
        slot += 1;
    }
    Ok(())
}
