//! Swap chain format and color space override

use retex_options::{ColorSpace, PresentFormat, SwapChainOverrideConfig};

use crate::OverrideError;

/// The surface format and color space to present with, or `None` to keep
/// whatever the surface would otherwise use. Both halves come together.
#[inline]
pub fn resolve_swap_chain(config: &SwapChainOverrideConfig) -> Option<(PresentFormat, ColorSpace)> {
    config
        .enabled
        .then_some((config.target_format, config.target_color_space))
}

/// Check that an enabled override names a presentable pair. The native
/// format catalog plays no part; the surface defines what is legal.
pub fn validate_swap_chain(config: &SwapChainOverrideConfig) -> Result<(), OverrideError> {
    if !config.enabled || config.target_color_space.supports(config.target_format) {
        return Ok(());
    }

    Err(OverrideError::IncompatibleSwapChain {
        format: config.target_format,
        color_space: config.target_color_space,
    })
}
