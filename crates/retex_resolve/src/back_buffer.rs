//! Back buffer format override

use retex_format::NativeFormat;
use retex_options::BackBufferOverrideConfig;

use crate::OverrideError;

/// Pick the format a back buffer is created with.
///
/// An enabled override always wins. Compatibility is checked once by
/// [`validate_back_buffer`], not here.
#[inline]
pub fn resolve_back_buffer(requested: NativeFormat, config: &BackBufferOverrideConfig) -> NativeFormat {
    if config.enabled {
        config.target
    } else {
        requested
    }
}

/// Check an enabled override against the back buffer format it replaces.
pub fn validate_back_buffer(
    requested: NativeFormat,
    config: &BackBufferOverrideConfig,
) -> Result<(), OverrideError> {
    if !config.enabled {
        return Ok(());
    }

    let requested_class = requested.class();
    let target_class = config.target.class();
    if requested_class.is_compatible_with(target_class) {
        Ok(())
    } else {
        Err(OverrideError::IncompatibleBackBuffer {
            requested,
            requested_class,
            target: config.target,
            target_class,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retex_format::{FormatClass, CATALOG};

    fn enabled(target: NativeFormat) -> BackBufferOverrideConfig {
        BackBufferOverrideConfig {
            enabled: true,
            target,
        }
    }

    #[test]
    fn disabled_override_returns_requested() {
        for entry in CATALOG.iter() {
            let config = BackBufferOverrideConfig {
                enabled: false,
                target: NativeFormat::R32_SINT,
            };
            assert_eq!(resolve_back_buffer(entry.format, &config), entry.format);
        }
    }

    #[test]
    fn enabled_override_replaces_format() {
        let config = enabled(NativeFormat::B8G8R8A8_UNORM);
        assert_eq!(validate_back_buffer(NativeFormat::R8G8B8A8_UNORM, &config), Ok(()));
        assert_eq!(
            resolve_back_buffer(NativeFormat::R8G8B8A8_UNORM, &config),
            NativeFormat::B8G8R8A8_UNORM
        );
    }

    #[test]
    fn resolution_does_not_revalidate() {
        let config = enabled(NativeFormat::BC1_UNORM);
        assert_eq!(
            resolve_back_buffer(NativeFormat::R8G8B8A8_UNORM, &config),
            NativeFormat::BC1_UNORM
        );
    }

    #[test]
    fn rejects_class_mismatch() {
        let config = enabled(NativeFormat::R32_SINT);
        assert_eq!(
            validate_back_buffer(NativeFormat::R8G8B8A8_UNORM, &config),
            Err(OverrideError::IncompatibleBackBuffer {
                requested: NativeFormat::R8G8B8A8_UNORM,
                requested_class: FormatClass::UnsignedNormalized,
                target: NativeFormat::R32_SINT,
                target_class: FormatClass::SignedInt,
            })
        );
    }

    #[test]
    fn disabled_override_is_always_valid() {
        let config = BackBufferOverrideConfig {
            enabled: false,
            target: NativeFormat::BC7_UNORM,
        };
        assert_eq!(validate_back_buffer(NativeFormat::R8G8B8A8_UNORM, &config), Ok(()));
    }

    #[test]
    fn accepted_pairs_never_cross_numeric_families() {
        for source in CATALOG.iter() {
            for target in CATALOG.iter() {
                if validate_back_buffer(source.format, &enabled(target.format)).is_err() {
                    continue;
                }
                let same = source.class == target.class;
                let companion = matches!(
                    (source.class, target.class),
                    (FormatClass::TypelessUInt, FormatClass::UnsignedInt)
                        | (FormatClass::FloatTypeless, FormatClass::SignedFloat)
                );
                assert!(same || companion, "{} -> {}", source.name, target.name);
                assert!(source.class.is_substitution_eligible());
                assert!(target.class.is_substitution_eligible());
            }
        }
    }
}
