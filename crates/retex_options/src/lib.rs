//! Retex Options Store
//!
//! Typed, defaulted options of the translation layer. Loaded once at
//! start-up, published as an immutable snapshot and read without locking
//! from then on.

pub mod error;
pub mod overrides;
pub mod present;
pub mod tuning;

use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use retex_format::{Catalog, CATALOG};
use serde::{Deserialize, Serialize};

pub use error::OptionsError;
pub use overrides::{BackBufferOverrideConfig, SwapChainOverrideConfig};
pub use present::{ColorSpace, PresentFormat};
pub use tuning::TuningOptions;

/// Layer options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub tuning: TuningOptions,
    /// Passed through to resource creation; gates whether callers consult
    /// format classes for render target upgrades at all.
    pub enable_render_target_upgrades: bool,
    pub back_buffer: BackBufferOverrideConfig,
    pub swap_chain: SwapChainOverrideConfig,
}

impl Options {
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        tracing::info!("Loading options from {}", path.display());
        let content = fs::read(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&content)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The format catalog ships with the layer and is not configurable.
    pub fn catalog(&self) -> &'static Catalog {
        &CATALOG
    }
}

/// Write-once holder for an options snapshot.
///
/// The first `publish` wins; readers on any thread observe the fully
/// initialized value or nothing.
pub struct OptionsCell {
    inner: OnceCell<Options>,
}

impl OptionsCell {
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    pub fn publish(&self, options: Options) -> Result<&Options, OptionsError> {
        self.inner
            .set(options)
            .map_err(|_| OptionsError::AlreadyPublished)?;
        self.inner.get().ok_or(OptionsError::AlreadyPublished)
    }

    pub fn get(&self) -> Option<&Options> {
        self.inner.get()
    }
}

impl Default for OptionsCell {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OptionsCell = OptionsCell::new();

/// Publish the process-wide options snapshot. Fails if already published.
pub fn publish(options: Options) -> Result<&'static Options, OptionsError> {
    GLOBAL.publish(options)
}

/// The process-wide snapshot, if published.
pub fn published() -> Option<&'static Options> {
    GLOBAL.get()
}
