// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Second-level cache power-mode controls.

pub trait CacheIf {
    /// Prepares the L2 cache for loss of power.
    fn l2_pm_enter(&self);

    /// Leaves L2 power-save mode after the cache is powered again.
    fn l2_pm_exit(&self);
}
