// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Platform capability descriptor.

use memory_addr::PhysAddr;

/// Optional hardware features, resolved once at platform bring-up.
///
/// The suspend path skips whatever is reported absent, so a platform that
/// never fills this in gets the minimal save/restore sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PmCaps {
    /// The cores carry FPU/SIMD state that must survive the power transition.
    pub fp_simd: bool,
    /// Secondary cores exist and must be resumed after power-up.
    pub smp: bool,
    /// DRAM self-refresh check region `(base, size)`; diagnostic only.
    pub selftest: Option<(PhysAddr, usize)>,
}
