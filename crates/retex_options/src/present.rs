//! Presentation surface formats and color spaces
//!
//! Values mirror `VkFormat` / `VkColorSpaceKHR`. Only formats a swap chain
//! is realistically created with are listed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresentFormat {
    #[serde(rename = "VK_FORMAT_R8G8B8A8_UNORM")]
    R8G8B8A8Unorm,
    #[serde(rename = "VK_FORMAT_R8G8B8A8_SRGB")]
    R8G8B8A8Srgb,
    #[serde(rename = "VK_FORMAT_B8G8R8A8_UNORM")]
    B8G8R8A8Unorm,
    #[serde(rename = "VK_FORMAT_B8G8R8A8_SRGB")]
    B8G8R8A8Srgb,
    #[serde(rename = "VK_FORMAT_A2R10G10B10_UNORM_PACK32")]
    A2R10G10B10UnormPack32,
    #[serde(rename = "VK_FORMAT_A2B10G10R10_UNORM_PACK32")]
    A2B10G10R10UnormPack32,
    #[serde(rename = "VK_FORMAT_R16G16B16A16_SFLOAT")]
    R16G16B16A16Sfloat,
}

impl PresentFormat {
    /// Raw `VkFormat` value.
    pub const fn raw(self) -> i32 {
        match self {
            PresentFormat::R8G8B8A8Unorm => 37,
            PresentFormat::R8G8B8A8Srgb => 43,
            PresentFormat::B8G8R8A8Unorm => 44,
            PresentFormat::B8G8R8A8Srgb => 50,
            PresentFormat::A2R10G10B10UnormPack32 => 58,
            PresentFormat::A2B10G10R10UnormPack32 => 64,
            PresentFormat::R16G16B16A16Sfloat => 97,
        }
    }

    pub const fn is_ten_bit(self) -> bool {
        matches!(
            self,
            PresentFormat::A2R10G10B10UnormPack32 | PresentFormat::A2B10G10R10UnormPack32
        )
    }

    pub const fn is_half_float(self) -> bool {
        matches!(self, PresentFormat::R16G16B16A16Sfloat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    #[serde(rename = "VK_COLOR_SPACE_SRGB_NONLINEAR_KHR")]
    SrgbNonlinear,
    #[serde(rename = "VK_COLOR_SPACE_DISPLAY_P3_NONLINEAR_EXT")]
    DisplayP3Nonlinear,
    #[serde(rename = "VK_COLOR_SPACE_EXTENDED_SRGB_LINEAR_EXT")]
    ExtendedSrgbLinear,
    #[serde(rename = "VK_COLOR_SPACE_BT2020_LINEAR_EXT")]
    Bt2020Linear,
    #[serde(rename = "VK_COLOR_SPACE_HDR10_ST2084_EXT")]
    Hdr10St2084,
    #[serde(rename = "VK_COLOR_SPACE_PASS_THROUGH_EXT")]
    PassThrough,
    #[serde(rename = "VK_COLOR_SPACE_EXTENDED_SRGB_NONLINEAR_EXT")]
    ExtendedSrgbNonlinear,
}

impl ColorSpace {
    /// Raw `VkColorSpaceKHR` value.
    pub const fn raw(self) -> i32 {
        match self {
            ColorSpace::SrgbNonlinear => 0,
            ColorSpace::DisplayP3Nonlinear => 1_000_104_001,
            ColorSpace::ExtendedSrgbLinear => 1_000_104_002,
            ColorSpace::Bt2020Linear => 1_000_104_007,
            ColorSpace::Hdr10St2084 => 1_000_104_008,
            ColorSpace::PassThrough => 1_000_104_013,
            ColorSpace::ExtendedSrgbNonlinear => 1_000_104_014,
        }
    }

    /// Whether an image of `format` can carry this color space.
    ///
    /// The surface reports the pairs it actually exposes; this is the
    /// layer's own conservative pre-check, applied once to a configured
    /// override. It only rejects pairs that cannot encode the space:
    /// PQ-encoded HDR10 and the extended non-linear space need at least
    /// 10 bits per channel without sRGB encoding, and the linear spaces
    /// need half floats because unorm storage cannot hold values above 1.0.
    pub const fn supports(self, format: PresentFormat) -> bool {
        match self {
            ColorSpace::SrgbNonlinear | ColorSpace::DisplayP3Nonlinear | ColorSpace::PassThrough => true,
            ColorSpace::Hdr10St2084 | ColorSpace::ExtendedSrgbNonlinear => {
                format.is_ten_bit() || format.is_half_float()
            }
            ColorSpace::ExtendedSrgbLinear | ColorSpace::Bt2020Linear => format.is_half_float(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_follow_vulkan() {
        assert_eq!(PresentFormat::B8G8R8A8Unorm.raw(), 44);
        assert_eq!(PresentFormat::A2B10G10R10UnormPack32.raw(), 64);
        assert_eq!(ColorSpace::SrgbNonlinear.raw(), 0);
        assert_eq!(ColorSpace::Hdr10St2084.raw(), 1_000_104_008);
    }

    #[test]
    fn hdr10_needs_wide_formats() {
        assert!(ColorSpace::Hdr10St2084.supports(PresentFormat::A2B10G10R10UnormPack32));
        assert!(ColorSpace::Hdr10St2084.supports(PresentFormat::R16G16B16A16Sfloat));
        assert!(!ColorSpace::Hdr10St2084.supports(PresentFormat::B8G8R8A8Unorm));
        assert!(!ColorSpace::Hdr10St2084.supports(PresentFormat::B8G8R8A8Srgb));
    }

    #[test]
    fn scrgb_needs_half_float() {
        assert!(ColorSpace::ExtendedSrgbLinear.supports(PresentFormat::R16G16B16A16Sfloat));
        assert!(!ColorSpace::ExtendedSrgbLinear.supports(PresentFormat::A2R10G10B10UnormPack32));
        assert!(ColorSpace::SrgbNonlinear.supports(PresentFormat::R16G16B16A16Sfloat));
    }

    #[test]
    fn extended_nonlinear_accepts_ten_bit() {
        assert!(ColorSpace::ExtendedSrgbNonlinear.supports(PresentFormat::A2B10G10R10UnormPack32));
        assert!(ColorSpace::ExtendedSrgbNonlinear.supports(PresentFormat::R16G16B16A16Sfloat));
        assert!(!ColorSpace::ExtendedSrgbNonlinear.supports(PresentFormat::B8G8R8A8Unorm));
        assert!(!ColorSpace::Bt2020Linear.supports(PresentFormat::A2B10G10R10UnormPack32));
    }

    #[test]
    fn serde_uses_vulkan_names() {
        let json = serde_json::to_string(&ColorSpace::Hdr10St2084).unwrap();
        assert_eq!(json, "\"VK_COLOR_SPACE_HDR10_ST2084_EXT\"");

        let format: PresentFormat = serde_json::from_str("\"VK_FORMAT_A2B10G10R10_UNORM_PACK32\"").unwrap();
        assert_eq!(format, PresentFormat::A2B10G10R10UnormPack32);
    }
}
