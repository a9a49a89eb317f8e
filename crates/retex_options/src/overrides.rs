//! Presentation override settings

use retex_format::NativeFormat;
use serde::{Deserialize, Serialize};

use crate::present::{ColorSpace, PresentFormat};

/// Replace every back buffer's format with `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackBufferOverrideConfig {
    pub enabled: bool,
    pub target: NativeFormat,
}

impl BackBufferOverrideConfig {
    pub const DISABLED: Self = Self {
        enabled: false,
        target: NativeFormat::UNKNOWN,
    };
}

impl Default for BackBufferOverrideConfig {
    fn default() -> Self {
        Self::DISABLED
    }
}

/// Replace the presentation surface format and color space as one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwapChainOverrideConfig {
    pub enabled: bool,
    pub target_format: PresentFormat,
    pub target_color_space: ColorSpace,
}

impl SwapChainOverrideConfig {
    pub const DISABLED: Self = Self {
        enabled: false,
        target_format: PresentFormat::B8G8R8A8Unorm,
        target_color_space: ColorSpace::SrgbNonlinear,
    };
}

impl Default for SwapChainOverrideConfig {
    fn default() -> Self {
        Self::DISABLED
    }
}
