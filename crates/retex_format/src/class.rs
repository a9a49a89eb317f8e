//! Semantic format families

use serde::{Deserialize, Serialize};

/// Semantic family a native format belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatClass {
    /// No defined meaning (e.g. `DXGI_FORMAT_UNKNOWN`).
    Unknown,
    /// Known to the API but not supported by the layer.
    Unsupported,
    /// Block-compressed or opaque video formats. Never substituted.
    Ignore,
    Typeless,
    SignedFloat,
    UnsignedFloat,
    UnsignedNormalized,
    SignedNormalized,
    UnsignedInt,
    SignedInt,
    UnsignedNormalizedSrgb,
    /// Typeless plane with a uint companion plane (`X24_TYPELESS_G8_UINT`).
    TypelessUInt,
    /// Float plane with a typeless companion plane (`R32_FLOAT_X8X24_TYPELESS`).
    FloatTypeless,
    /// Float depth with uint stencil.
    FloatUInt,
    /// Unorm depth with uint stencil.
    UnormUint,
}

impl FormatClass {
    /// Whether a format of this class may take part in any automatic
    /// substitution at all.
    pub const fn is_substitution_eligible(self) -> bool {
        !matches!(self, FormatClass::Ignore | FormatClass::Unsupported)
    }

    pub const fn is_typeless_family(self) -> bool {
        matches!(
            self,
            FormatClass::Typeless | FormatClass::TypelessUInt | FormatClass::FloatTypeless
        )
    }

    /// Whether a resource of class `self` may be replaced by a format of
    /// class `target` without reinterpreting its bits.
    ///
    /// Identical classes are compatible, except `Unknown` which carries no
    /// interpretation to share. A typeless companion class may also resolve
    /// to the concrete family of its defined plane:
    ///
    /// | source          | target          |
    /// |-----------------|-----------------|
    /// | `TypelessUInt`  | `UnsignedInt`   |
    /// | `FloatTypeless` | `SignedFloat`   |
    ///
    /// The relation is directional; a concrete source never widens to a
    /// typeless target.
    pub const fn is_compatible_with(self, target: FormatClass) -> bool {
        if !self.is_substitution_eligible() || !target.is_substitution_eligible() {
            return false;
        }

        match (self, target) {
            (FormatClass::Unknown, _) | (_, FormatClass::Unknown) => false,
            (FormatClass::TypelessUInt, FormatClass::UnsignedInt) => true,
            (FormatClass::FloatTypeless, FormatClass::SignedFloat) => true,
            (source, target) => source as u8 == target as u8,
        }
    }
}
