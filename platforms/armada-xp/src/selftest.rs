// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! DDR self-refresh check.
//!
//! Fills a region with a self-describing pattern before power-down and
//! verifies it afterwards to confirm the DRAM actually entered self refresh.
//! Diagnostic only; enabled through [`PmCaps::selftest`].
//!
//! [`PmCaps::selftest`]: kpm::PmCaps

use kpm::memory::{MemoryIf, PhysAddr};

/// Writes the pattern: each u32 word holds its own physical address.
pub fn write_pattern<H: MemoryIf + ?Sized>(hw: &H, base: PhysAddr, size: usize) {
    info!("Writing self-refresh pattern at {base:?} + {size:#x}");

    let ptr = hw.p2v(base).as_mut_ptr() as *mut u32;
    for i in 0..size / 4 {
        let word = (base.as_usize() + i * 4) as u32;
        unsafe { ptr.add(i).write_volatile(word) };
    }
}

/// Verifies the pattern written by [`write_pattern`]; returns the number of
/// corrupted words.
pub fn check_pattern<H: MemoryIf + ?Sized>(hw: &H, base: PhysAddr, size: usize) -> usize {
    info!("Testing self-refresh pattern at {base:?} + {size:#x}");

    let ptr = hw.p2v(base).as_ptr() as *const u32;
    let mut bad = 0;
    for i in 0..size / 4 {
        let addr = base.as_usize() + i * 4;
        let word = unsafe { ptr.add(i).read_volatile() };
        if word != addr as u32 {
            warn!("Bad pattern {word:#x} at {addr:#x}");
            bad += 1;
        }
    }
    bad
}
