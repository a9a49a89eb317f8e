use retex_format::{FormatClass, NativeFormat};
use retex_options::{ColorSpace, PresentFormat};
use thiserror::Error;

/// A configured override that would reinterpret pixel data. Reported once
/// while validating options; the override is then disabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    #[error(
        "back buffer override {target} ({target_class:?}) is incompatible with requested {requested} ({requested_class:?})"
    )]
    IncompatibleBackBuffer {
        requested: NativeFormat,
        requested_class: FormatClass,
        target: NativeFormat,
        target_class: FormatClass,
    },

    #[error("swap chain override {format:?} cannot be presented in color space {color_space:?}")]
    IncompatibleSwapChain {
        format: PresentFormat,
        color_space: ColorSpace,
    },
}
