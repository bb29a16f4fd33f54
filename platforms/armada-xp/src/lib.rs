// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Suspend-to-RAM support for the ARMADA XP platform.
//!
//! The DDR3 re-training that runs during power-up overwrites the head of
//! every enabled SDRAM chip-select window, so the suspend path copies those
//! heads into a scratch buffer before the transition and copies them back
//! afterwards. A fixed-address boot descriptor tells the post-power-up boot
//! code which registers to reprogram and where to jump.
//!
//! The one entry point is [`suspend`]; everything else is the machinery
//! behind it.
#![no_std]

#[macro_use]
extern crate log;

pub mod bootinfo;
pub mod regs;
pub mod scratch;
pub mod selftest;
pub mod suspend;
pub mod training;
pub mod window;

pub use scratch::ScratchBuffer;
pub use suspend::suspend;
pub use training::TRAINING_SPACE_SIZE;
pub use window::MemWindow;

use core::fmt;

/// Errors the suspend path can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmError {
    /// No non-overlapping scratch buffer could be found within the retry
    /// budget; the suspend attempt was aborted before anything destructive
    /// happened.
    AllocFailed,
    /// The window set discovered at restore time differs from the one
    /// captured at save time; nothing was copied back and memory state must
    /// be treated as suspect.
    WindowMismatch,
}

impl fmt::Display for PmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed => write!(f, "no usable scratch buffer"),
            Self::WindowMismatch => write!(f, "window set changed across the power cycle"),
        }
    }
}
