// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Boot descriptor for the post-power-up boot path.
//!
//! The descriptor is the sole channel between the suspended kernel and the
//! boot code that runs before any kernel runtime exists, so the layout is a
//! flat, self-describing sequence of little-endian u32 words at a fixed
//! physical address:
//!
//! ```text
//! [magic][resume_entry_phys][(reg_addr, reg_val) x 8][sentinel]
//! ```
//!
//! The 8 pairs are the base/control registers of all four SDRAM windows,
//! recorded regardless of window enablement. The magic word doubles as the
//! layout version tag.

use kpm::memory::{MemoryIf, PhysAddr};
use kpm::regs::RegIf;
use static_assertions::const_assert_eq;

use crate::regs::{MAX_CS_COUNT, sdram_win_base_reg, sdram_win_ctrl_reg};

/// Fixed physical location of the descriptor.
pub const BOOT_INFO_ADDR: PhysAddr = PhysAddr::from_usize(0x3000);

/// Marks a valid suspend-to-RAM descriptor.
pub const BOOT_MAGIC_WORD: u32 = 0xDEAD_B002;

/// Terminates the register list; never a valid register address.
pub const REG_LIST_END: u32 = 0xFFFF_FFFF;

/// Total descriptor size in words: magic + entry + 8 pairs + sentinel.
pub const BOOT_INFO_WORDS: usize = 2 + MAX_CS_COUNT * 4 + 1;
const_assert_eq!(BOOT_INFO_WORDS, 19);

/// Cursor laying down the descriptor one word at a time.
struct DescriptorWriter {
    cursor: *mut u32,
}

impl DescriptorWriter {
    fn push(&mut self, word: u32) {
        unsafe {
            self.cursor.write_volatile(word.to_le());
            self.cursor = self.cursor.add(1);
        }
    }
}

/// Writes the descriptor: `resume_entry`, then the live values of the four
/// SDRAM window base/control register pairs for the boot code to replay.
pub fn write<H: MemoryIf + RegIf + ?Sized>(hw: &H, resume_entry: PhysAddr) {
    let mut w = DescriptorWriter {
        cursor: hw.p2v(BOOT_INFO_ADDR).as_mut_ptr() as *mut u32,
    };

    w.push(BOOT_MAGIC_WORD);
    w.push(resume_entry.as_usize() as u32);

    for cs in 0..MAX_CS_COUNT {
        for reg in [sdram_win_base_reg(cs), sdram_win_ctrl_reg(cs)] {
            w.push(reg.as_usize() as u32);
            w.push(hw.reg_read(reg));
        }
    }

    w.push(REG_LIST_END);
}
