// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Hardware interfaces consumed by the platform suspend/resume path.
//!
//! Each collaborator primitive lives behind its own trait so a platform (or a
//! test fixture) can implement exactly the seams it provides. A full platform
//! hands the suspend path a single [`PmHardware`] handle; exclusive use of
//! that handle for the duration of one suspend cycle is the caller's
//! obligation.
#![no_std]

pub mod cache;
pub mod caps;
pub mod cpu;
pub mod memory;
pub mod regs;
pub mod sys;

pub use caps::PmCaps;

/// The complete set of hardware services one suspend/resume cycle needs.
pub trait PmHardware:
    regs::RegIf + memory::MemoryIf + cache::CacheIf + cpu::FpuIf + sys::SysIf
{
    /// Capabilities resolved during platform bring-up.
    ///
    /// Optional units default to absent and are skipped by the suspend path.
    fn caps(&self) -> PmCaps {
        PmCaps::default()
    }
}
