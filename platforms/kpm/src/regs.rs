// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Controller register access interface.

use memory_addr::PhysAddr;

/// Memory-mapped controller register I/O.
pub trait RegIf {
    /// Reads the 32-bit register at physical address `reg`.
    fn reg_read(&self, reg: PhysAddr) -> u32;

    /// Writes the 32-bit register at physical address `reg`.
    fn reg_write(&self, reg: PhysAddr, value: u32);
}
