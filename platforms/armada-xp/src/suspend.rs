// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Suspend/resume orchestration.
//!
//! One linear pass: RUNNING -> SAVING -> POWERED_DOWN -> RESTORING ->
//! RUNNING. All fallible work (scratch allocation) is front-loaded before the
//! power transition; once [`SysIf::power_down`] is triggered there is no
//! software recovery until the power-up path re-enters.
//!
//! The caller must park secondary cores before calling [`suspend`] and must
//! never have more than one suspend cycle in flight; the session state is
//! owned by the call, so the second requirement is an ownership fact within
//! this subsystem.
//!
//! [`SysIf::power_down`]: kpm::sys::SysIf::power_down

use kpm::PmHardware;

use crate::PmError;
use crate::regs::MAX_CS_COUNT;
use crate::scratch::ScratchBuffer;
use crate::training::{self, TRAINING_SPACE_SIZE};
use crate::window::{self, MemWindow};
use crate::{bootinfo, selftest};

/// State of one suspend cycle: the window layout captured at save time and
/// the scratch buffer holding the preserved training space.
struct SuspendSession {
    windows: [MemWindow; MAX_CS_COUNT],
    buf: ScratchBuffer,
}

impl SuspendSession {
    /// Discovers the window layout and acquires the scratch buffer. Nothing
    /// destructive happens here; a failure leaves the system running.
    fn prepare<H: PmHardware>(hw: &H) -> Result<Self, PmError> {
        let windows = window::discover(hw);
        let buf = ScratchBuffer::acquire(hw, &windows, TRAINING_SPACE_SIZE)?;
        Ok(Self { windows, buf })
    }
}

/// Performs a full suspend-to-RAM cycle.
///
/// Returns only after the save -> power-down -> power-up -> restore sequence
/// completes, or with [`PmError::AllocFailed`] if preparation fails before
/// anything destructive occurs. A post-resume [`PmError::WindowMismatch`]
/// means the training space was *not* restored and memory state is suspect.
pub fn suspend<H: PmHardware>(hw: &H) -> Result<(), PmError> {
    let caps = hw.caps();

    if caps.fp_simd {
        hw.fpu_save();
    }
    hw.l2_pm_enter();

    let mut session = match SuspendSession::prepare(hw) {
        Ok(session) => session,
        Err(e) => {
            // Unwind; the system stays running and the attempt is reported.
            hw.l2_pm_exit();
            if caps.fp_simd {
                hw.fpu_restore();
            }
            return Err(e);
        }
    };

    training::save(hw, &session.windows, &mut session.buf);
    bootinfo::write(hw, hw.resume_entry());

    if let Some((base, size)) = caps.selftest {
        selftest::write_pattern(hw, base, size);
    }

    // Control does not return from here until the power-up path re-enters.
    hw.power_down();

    if let Some((base, size)) = caps.selftest {
        let bad = selftest::check_pattern(hw, base, size);
        if bad != 0 {
            warn!("DDR self-refresh check: {bad} corrupted words");
        }
    }

    hw.cpu_reinit();
    hw.fabric_restore();
    let restored = training::restore(hw, &session.windows, &session.buf);
    hw.l2_pm_exit();
    if caps.smp {
        hw.resume_secondary_cpus();
    }
    if caps.fp_simd {
        hw.fpu_restore();
    }

    session.buf.release(hw);
    restored
}
