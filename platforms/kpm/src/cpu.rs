// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Floating-point/vector unit state preservation.
//!
//! Only exercised when [`PmCaps::fp_simd`] is set; platforms without the unit
//! may implement these as no-ops.
//!
//! [`PmCaps::fp_simd`]: crate::PmCaps

pub trait FpuIf {
    /// Saves the FPU/SIMD context of the current core.
    fn fpu_save(&self);

    /// Restores the context captured by the last [`fpu_save`].
    ///
    /// [`fpu_save`]: FpuIf::fpu_save
    fn fpu_restore(&self);
}
