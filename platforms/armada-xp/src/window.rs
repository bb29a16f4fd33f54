// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! SDRAM chip-select window discovery.

use kpm::memory::PhysAddr;
use kpm::regs::RegIf;

use crate::regs::{MAX_CS_COUNT, WinCtrl, sdram_win_base_reg, sdram_win_ctrl_reg};

/// One SDRAM chip-select window as currently programmed in the controller.
///
/// `base` is `None` when the chip select is disabled. The set of windows is
/// derived transiently from the controller registers; the design assumes the
/// power cycle does not change it (verified at restore time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemWindow {
    /// Chip-select index, `0..MAX_CS_COUNT`.
    pub index: usize,
    /// Physical base of the window, if enabled.
    pub base: Option<PhysAddr>,
}

impl MemWindow {
    #[inline]
    pub fn enabled(&self) -> bool {
        self.base.is_some()
    }
}

/// Reads the window base/control register pairs and reports the current
/// window layout, in chip-select order.
pub fn discover<H: RegIf + ?Sized>(hw: &H) -> [MemWindow; MAX_CS_COUNT] {
    let mut windows = [MemWindow { index: 0, base: None }; MAX_CS_COUNT];
    for (cs, win) in windows.iter_mut().enumerate() {
        win.index = cs;
        let ctrl = WinCtrl::from_bits_truncate(hw.reg_read(sdram_win_ctrl_reg(cs)));
        if ctrl.contains(WinCtrl::ENABLE) {
            let base = hw.reg_read(sdram_win_base_reg(cs));
            win.base = Some(PhysAddr::from_usize(base as usize));
        }
    }
    debug!("SDRAM windows: {windows:?}");
    windows
}

/// Number of enabled windows in `windows`.
pub fn enabled_count(windows: &[MemWindow]) -> usize {
    windows.iter().filter(|w| w.enabled()).count()
}
