// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! System-level power and core controls.

use memory_addr::PhysAddr;

pub trait SysIf {
    /// Triggers the hardware power-down.
    ///
    /// Does not return until the power-up path re-enters the caller. There is
    /// no cancellation: once triggered, the transition completes.
    fn power_down(&self);

    /// Reinitializes the boot core after power-up.
    fn cpu_reinit(&self);

    /// Restores the inter-core/cache interconnect configuration after a
    /// low-power state.
    fn fabric_restore(&self);

    /// Signals parked secondary cores to resume.
    fn resume_secondary_cpus(&self);

    /// Physical address of the low-level resume entry point recorded in the
    /// boot descriptor.
    fn resume_entry(&self) -> PhysAddr;
}
