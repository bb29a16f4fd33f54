// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! SDRAM controller register map.

use kpm::memory::PhysAddr;

/// Physical base of the internal register window (default mapping).
pub const INTER_REGS_PHYS_BASE: usize = 0xD000_0000;

/// Number of SDRAM chip-select windows.
pub const MAX_CS_COUNT: usize = 4;

const SDRAM_WIN_BASE_OFF: usize = 0x20180;
const SDRAM_WIN_CTRL_OFF: usize = 0x20184;
const SDRAM_WIN_STRIDE: usize = 0x8;

/// Base-address register of chip-select window `cs`.
pub const fn sdram_win_base_reg(cs: usize) -> PhysAddr {
    PhysAddr::from_usize(INTER_REGS_PHYS_BASE + SDRAM_WIN_BASE_OFF + SDRAM_WIN_STRIDE * cs)
}

/// Control register of chip-select window `cs`.
pub const fn sdram_win_ctrl_reg(cs: usize) -> PhysAddr {
    PhysAddr::from_usize(INTER_REGS_PHYS_BASE + SDRAM_WIN_CTRL_OFF + SDRAM_WIN_STRIDE * cs)
}

bitflags::bitflags! {
    /// SDRAM window control register bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WinCtrl: u32 {
        /// The chip-select window is enabled.
        const ENABLE = 1 << 0;
    }
}
