//! Retex Format Catalog
//!
//! Classifies every native (DXGI) pixel format into a semantic family and
//! decides which families may stand in for each other:
//! - `Catalog` - fixed ordinal-indexed table, one entry per native format
//! - `classify` - raw ordinal lookup used by resource-creation paths
//! - `FormatClass` - semantic family plus the substitution compatibility rule

pub mod catalog;
pub mod class;
pub mod error;
pub mod native;

pub use catalog::{classify, try_classify, Catalog, CatalogEntry, CATALOG, FORMAT_COUNT};
pub use class::FormatClass;
pub use error::FormatError;
pub use native::NativeFormat;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
