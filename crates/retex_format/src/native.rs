//! Native (DXGI) format identifiers
//!
//! The table below is the single source of truth for ordinals, names and
//! classes; the catalog is generated from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::{CatalogEntry, CATALOG, FORMAT_COUNT};
use crate::{FormatClass, FormatError};

const NAME_PREFIX: &str = "DXGI_FORMAT_";

/// A native format ordinal that is known to be inside the catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeFormat(i32);

macro_rules! format_name {
    ($ident:ident) => {
        concat!("DXGI_FORMAT_", stringify!($ident))
    };
    ($ident:ident, $name:literal) => {
        $name
    };
}

macro_rules! define_native_formats {
    (
        $(
            $ident:ident $(($name:literal))? = $ordinal:literal => $class:ident
        ),* $(,)?
    ) => {
        impl NativeFormat {
            $(
                pub const $ident: NativeFormat = NativeFormat($ordinal);
            )*
        }

        pub(crate) const ENTRIES: [CatalogEntry; FORMAT_COUNT] = [
            $(
                CatalogEntry {
                    format: NativeFormat($ordinal),
                    name: format_name!($ident $(, $name)?),
                    class: FormatClass::$class,
                },
            )*
        ];
    };
}

define_native_formats! {
    UNKNOWN = 0 => Unknown,
    R32G32B32A32_TYPELESS = 1 => Typeless,
    R32G32B32A32_FLOAT = 2 => SignedFloat,
    R32G32B32A32_UINT = 3 => UnsignedInt,
    R32G32B32A32_SINT = 4 => SignedInt,
    R32G32B32_TYPELESS = 5 => Typeless,
    R32G32B32_FLOAT = 6 => SignedFloat,
    R32G32B32_UINT = 7 => UnsignedInt,
    R32G32B32_SINT = 8 => SignedInt,
    R16G16B16A16_TYPELESS = 9 => Typeless,
    R16G16B16A16_FLOAT = 10 => SignedFloat,
    R16G16B16A16_UNORM = 11 => UnsignedNormalized,
    R16G16B16A16_UINT = 12 => UnsignedInt,
    R16G16B16A16_SNORM = 13 => SignedNormalized,
    R16G16B16A16_SINT = 14 => SignedInt,
    R32G32_TYPELESS = 15 => Typeless,
    R32G32_FLOAT = 16 => SignedFloat,
    R32G32_UINT = 17 => UnsignedInt,
    R32G32_SINT = 18 => SignedInt,
    R32G8X24_TYPELESS = 19 => Typeless,
    D32_FLOAT_S8X24_UINT = 20 => FloatUInt,
    R32_FLOAT_X8X24_TYPELESS = 21 => FloatTypeless,
    X32_TYPELESS_G8X24_UINT = 22 => TypelessUInt,
    R10G10B10A2_TYPELESS = 23 => Typeless,
    R10G10B10A2_UNORM = 24 => UnsignedNormalized,
    R10G10B10A2_UINT = 25 => UnsignedInt,
    R11G11B10_FLOAT = 26 => UnsignedFloat,
    R8G8B8A8_TYPELESS = 27 => Typeless,
    R8G8B8A8_UNORM = 28 => UnsignedNormalized,
    R8G8B8A8_UNORM_SRGB = 29 => UnsignedNormalizedSrgb,
    R8G8B8A8_UINT = 30 => UnsignedInt,
    R8G8B8A8_SNORM = 31 => SignedNormalized,
    R8G8B8A8_SINT = 32 => SignedInt,
    R16G16_TYPELESS = 33 => Typeless,
    R16G16_FLOAT = 34 => SignedFloat,
    R16G16_UNORM = 35 => UnsignedNormalized,
    R16G16_UINT = 36 => UnsignedInt,
    R16G16_SNORM = 37 => SignedNormalized,
    R16G16_SINT = 38 => SignedInt,
    R32_TYPELESS = 39 => Typeless,
    D32_FLOAT = 40 => SignedFloat,
    R32_FLOAT = 41 => SignedFloat,
    R32_UINT = 42 => UnsignedInt,
    R32_SINT = 43 => SignedInt,
    R24G8_TYPELESS = 44 => Typeless,
    D24_UNORM_S8_UINT = 45 => UnormUint,
    R24_UNORM_X8_TYPELESS = 46 => Typeless,
    X24_TYPELESS_G8_UINT = 47 => TypelessUInt,
    R8G8_TYPELESS = 48 => Typeless,
    R8G8_UNORM = 49 => UnsignedNormalized,
    R8G8_UINT = 50 => UnsignedInt,
    R8G8_SNORM = 51 => SignedNormalized,
    R8G8_SINT = 52 => SignedInt,
    R16_TYPELESS = 53 => Typeless,
    R16_FLOAT = 54 => SignedFloat,
    D16_UNORM = 55 => UnsignedNormalized,
    R16_UNORM = 56 => UnsignedNormalized,
    R16_UINT = 57 => UnsignedInt,
    R16_SNORM = 58 => SignedNormalized,
    R16_SINT = 59 => SignedInt,
    R8_TYPELESS = 60 => Typeless,
    R8_UNORM = 61 => UnsignedNormalized,
    R8_UINT = 62 => UnsignedInt,
    R8_SNORM = 63 => SignedNormalized,
    R8_SINT = 64 => SignedInt,
    A8_UNORM = 65 => UnsignedNormalized,
    R1_UNORM = 66 => Unsupported,
    R9G9B9E5_SHAREDEXP = 67 => UnsignedFloat,
    R8G8_B8G8_UNORM = 68 => UnsignedNormalized,
    G8R8_G8B8_UNORM = 69 => UnsignedNormalized,
    BC1_TYPELESS = 70 => Ignore,
    BC1_UNORM = 71 => Ignore,
    BC1_UNORM_SRGB = 72 => Ignore,
    BC2_TYPELESS = 73 => Ignore,
    BC2_UNORM = 74 => Ignore,
    BC2_UNORM_SRGB = 75 => Ignore,
    BC3_TYPELESS = 76 => Ignore,
    BC3_UNORM = 77 => Ignore,
    BC3_UNORM_SRGB = 78 => Ignore,
    BC4_TYPELESS = 79 => Ignore,
    BC4_UNORM = 80 => Ignore,
    BC4_SNORM = 81 => Ignore,
    BC5_TYPELESS = 82 => Ignore,
    BC5_UNORM = 83 => Ignore,
    BC5_SNORM = 84 => Ignore,
    B5G6R5_UNORM = 85 => UnsignedNormalized,
    B5G5R5A1_UNORM = 86 => UnsignedNormalized,
    B8G8R8A8_UNORM = 87 => UnsignedNormalized,
    B8G8R8X8_UNORM = 88 => UnsignedNormalized,
    R10G10B10_XR_BIAS_A2_UNORM = 89 => Unsupported,
    B8G8R8A8_TYPELESS = 90 => Typeless,
    B8G8R8A8_UNORM_SRGB = 91 => UnsignedNormalizedSrgb,
    B8G8R8X8_TYPELESS = 92 => Typeless,
    B8G8R8X8_UNORM_SRGB = 93 => UnsignedNormalizedSrgb,
    BC6H_TYPELESS = 94 => Ignore,
    BC6H_UF16 = 95 => Ignore,
    BC6H_SF16 = 96 => Ignore,
    BC7_TYPELESS = 97 => Ignore,
    BC7_UNORM = 98 => Ignore,
    BC7_UNORM_SRGB = 99 => Ignore,
    AYUV = 100 => Ignore,
    Y410 = 101 => Unsupported,
    Y416 = 102 => Unsupported,
    NV12 = 103 => Ignore,
    P010 = 104 => Unsupported,
    P016 = 105 => Unsupported,
    OPAQUE_420("DXGI_FORMAT_420_OPAQUE") = 106 => Ignore,
    YUY2 = 107 => Ignore,
    Y210 = 108 => Unsupported,
    Y216 = 109 => Unsupported,
    NV11 = 110 => Unsupported,
    AI44 = 111 => Unsupported,
    IA44 = 112 => Unsupported,
    P8 = 113 => Unsupported,
    A8P8 = 114 => Unsupported,
    B4G4R4A4_UNORM = 115 => UnsignedNormalized,
}

impl NativeFormat {
    /// Validate a raw ordinal against the catalog.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, FormatError> {
        CATALOG.lookup(ordinal).map(|entry| entry.format)
    }

    #[inline]
    pub const fn ordinal(self) -> i32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Full DXGI name, e.g. `DXGI_FORMAT_R8G8B8A8_UNORM`.
    pub fn name(self) -> &'static str {
        CATALOG.entry(self).name
    }

    pub fn class(self) -> FormatClass {
        CATALOG.entry(self).class
    }
}

impl fmt::Debug for NativeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.0)
    }
}

impl fmt::Display for NativeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NativeFormat {
    type Err = FormatError;

    /// Accepts `DXGI_FORMAT_B8G8R8A8_UNORM` or the bare `B8G8R8A8_UNORM`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let has_prefix = trimmed
            .get(..NAME_PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(NAME_PREFIX));
        let bare = if has_prefix {
            &trimmed[NAME_PREFIX.len()..]
        } else {
            trimmed
        };

        CATALOG
            .find_by_name(bare)
            .ok_or_else(|| FormatError::UnknownName {
                name: s.to_string(),
            })
    }
}

impl TryFrom<i32> for NativeFormat {
    type Error = FormatError;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl From<NativeFormat> for i32 {
    fn from(format: NativeFormat) -> Self {
        format.0
    }
}

impl Serialize for NativeFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Config representation: a name or a raw ordinal.
#[derive(Deserialize)]
#[serde(untagged)]
enum FormatRepr {
    Ordinal(i32),
    Name(String),
}

impl<'de> Deserialize<'de> for NativeFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match FormatRepr::deserialize(deserializer)? {
            FormatRepr::Ordinal(ordinal) => NativeFormat::from_ordinal(ordinal),
            FormatRepr::Name(name) => name.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
