//! Format catalog and classifier
//!
//! The catalog is a compile-time constant; nothing mutates it after
//! construction, so it is freely shared between threads.

use crate::native::ENTRIES;
use crate::{FormatClass, FormatError, NativeFormat};

/// Number of native format ordinals defined by DXGI (`UNKNOWN` through
/// `B4G4R4A4_UNORM`).
pub const FORMAT_COUNT: usize = 116;

/// One catalog slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub format: NativeFormat,
    pub name: &'static str,
    pub class: FormatClass,
    // Per-format upgrade targets would live here; only the two coarse
    // presentation overrides are wired up.
}

/// Ordinal-indexed table with exactly one entry per native format.
#[derive(Debug)]
pub struct Catalog {
    entries: [CatalogEntry; FORMAT_COUNT],
}

// Slot `i` must describe ordinal `i`.
const _: () = {
    let mut i = 0;
    while i < FORMAT_COUNT {
        assert!(ENTRIES[i].format.index() == i, "catalog entries out of order");
        i += 1;
    }
};

/// The shipped catalog.
pub static CATALOG: Catalog = Catalog { entries: ENTRIES };

impl Catalog {
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        FORMAT_COUNT
    }

    /// Look up the entry for a raw ordinal.
    ///
    /// Ordinals outside `0..FORMAT_COUNT` are a caller defect and are
    /// reported as [`FormatError::OutOfRange`], never as `Unknown`.
    pub fn lookup(&self, ordinal: i32) -> Result<&CatalogEntry, FormatError> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| self.entries.get(index))
            .ok_or(FormatError::OutOfRange {
                ordinal,
                count: FORMAT_COUNT,
            })
    }

    /// Entry for an already validated format.
    #[inline]
    pub fn entry(&self, format: NativeFormat) -> &CatalogEntry {
        &self.entries[format.index()]
    }

    /// Find a format by its bare name (without the `DXGI_FORMAT_` prefix),
    /// ignoring ASCII case.
    pub fn find_by_name(&self, bare: &str) -> Option<NativeFormat> {
        self.entries
            .iter()
            .find(|entry| entry.name["DXGI_FORMAT_".len()..].eq_ignore_ascii_case(bare))
            .map(|entry| entry.format)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

/// Classify a raw ordinal, reporting out-of-range ordinals as errors.
pub fn try_classify(ordinal: i32) -> Result<FormatClass, FormatError> {
    CATALOG.lookup(ordinal).map(|entry| entry.class)
}

/// Classify a raw ordinal.
///
/// An out-of-range ordinal panics in debug builds. Release builds log the
/// defect and degrade to [`FormatClass::Unknown`] so a rendering path never
/// aborts on it; the resulting format is then ineligible for substitution.
pub fn classify(ordinal: i32) -> FormatClass {
    match try_classify(ordinal) {
        Ok(class) => class,
        Err(err) => {
            if cfg!(debug_assertions) {
                panic!("classify: {err}");
            }
            degrade(&err)
        }
    }
}

/// Release-build fallback for a failed lookup.
fn degrade(err: &FormatError) -> FormatClass {
    tracing::error!("classify: {err}, treating as Unknown");
    FormatClass::Unknown
}
