//! Validated override snapshot
//!
//! Built once from the published options. A rejected override is logged
//! and behaves as disabled from then on; the layer keeps running with the
//! application's formats.

use once_cell::sync::OnceCell;
use retex_format::NativeFormat;
use retex_options::{BackBufferOverrideConfig, ColorSpace, Options, PresentFormat, SwapChainOverrideConfig};

use crate::{resolve_back_buffer, resolve_swap_chain, validate_back_buffer, validate_swap_chain};

#[derive(Debug, Clone)]
pub struct Overrides {
    back_buffer: BackBufferOverrideConfig,
    /// Format the back buffer override was validated against.
    validated_source: NativeFormat,
    swap_chain: SwapChainOverrideConfig,
    render_target_upgrades: bool,
    mismatch_reported: OnceCell<()>,
}

impl Overrides {
    /// Validate the configured overrides against the back buffer format the
    /// application presents with.
    pub fn from_options(options: &Options, back_buffer: NativeFormat) -> Self {
        let back_buffer_config = match validate_back_buffer(back_buffer, &options.back_buffer) {
            Ok(()) => options.back_buffer,
            Err(err) => {
                tracing::warn!("{err}; back buffer override disabled");
                BackBufferOverrideConfig {
                    enabled: false,
                    ..options.back_buffer
                }
            }
        };

        let swap_chain_config = match validate_swap_chain(&options.swap_chain) {
            Ok(()) => options.swap_chain,
            Err(err) => {
                tracing::warn!("{err}; swap chain override disabled");
                SwapChainOverrideConfig {
                    enabled: false,
                    ..options.swap_chain
                }
            }
        };

        tracing::info!(
            back_buffer = back_buffer_config.enabled,
            swap_chain = swap_chain_config.enabled,
            render_target_upgrades = options.enable_render_target_upgrades,
            "Presentation overrides ready"
        );

        Self {
            back_buffer: back_buffer_config,
            validated_source: back_buffer,
            swap_chain: swap_chain_config,
            render_target_upgrades: options.enable_render_target_upgrades,
            mismatch_reported: OnceCell::new(),
        }
    }

    /// The format a back buffer of `requested` is created with.
    ///
    /// The override only replaces formats it is compatible with; any other
    /// request keeps its own format.
    pub fn back_buffer(&self, requested: NativeFormat) -> NativeFormat {
        if requested != self.validated_source && validate_back_buffer(requested, &self.back_buffer).is_err() {
            self.mismatch_reported.get_or_init(|| {
                tracing::warn!(
                    %requested,
                    validated = %self.validated_source,
                    target = %self.back_buffer.target,
                    "back buffer override does not apply to this format"
                );
            });
            return requested;
        }

        let resolved = resolve_back_buffer(requested, &self.back_buffer);
        tracing::debug!(%requested, %resolved, "back buffer format");
        resolved
    }

    pub fn swap_chain(&self) -> Option<(PresentFormat, ColorSpace)> {
        resolve_swap_chain(&self.swap_chain)
    }

    /// Uninterpreted; resource creation decides what it gates.
    pub fn render_target_upgrades_enabled(&self) -> bool {
        self.render_target_upgrades
    }

    pub fn back_buffer_config(&self) -> &BackBufferOverrideConfig {
        &self.back_buffer
    }

    pub fn swap_chain_config(&self) -> &SwapChainOverrideConfig {
        &self.swap_chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use retex_format::{classify, CATALOG, FORMAT_COUNT};

    fn options(back_buffer_target: NativeFormat, swap_chain: SwapChainOverrideConfig) -> Options {
        Options {
            back_buffer: BackBufferOverrideConfig {
                enabled: true,
                target: back_buffer_target,
            },
            swap_chain,
            enable_render_target_upgrades: true,
            ..Options::default()
        }
    }

    fn hdr10() -> SwapChainOverrideConfig {
        SwapChainOverrideConfig {
            enabled: true,
            target_format: PresentFormat::A2B10G10R10UnormPack32,
            target_color_space: ColorSpace::Hdr10St2084,
        }
    }

    #[test]
    fn accepted_overrides_apply() {
        let overrides = Overrides::from_options(&options(NativeFormat::B8G8R8A8_UNORM, hdr10()), NativeFormat::R8G8B8A8_UNORM);

        assert_eq!(overrides.back_buffer(NativeFormat::R8G8B8A8_UNORM), NativeFormat::B8G8R8A8_UNORM);
        assert_eq!(
            overrides.swap_chain(),
            Some((PresentFormat::A2B10G10R10UnormPack32, ColorSpace::Hdr10St2084))
        );
        assert!(overrides.render_target_upgrades_enabled());
    }

    #[test]
    fn incompatible_back_buffer_falls_back_to_disabled() {
        let overrides = Overrides::from_options(&options(NativeFormat::R32_SINT, hdr10()), NativeFormat::R8G8B8A8_UNORM);

        assert!(!overrides.back_buffer_config().enabled);
        assert_eq!(overrides.back_buffer(NativeFormat::R8G8B8A8_UNORM), NativeFormat::R8G8B8A8_UNORM);
        // the swap chain override is independent
        assert!(overrides.swap_chain().is_some());
    }

    #[test]
    fn override_skips_formats_it_cannot_replace() {
        let overrides = Overrides::from_options(&options(NativeFormat::B8G8R8A8_UNORM, hdr10()), NativeFormat::R8G8B8A8_UNORM);

        assert_eq!(overrides.back_buffer(NativeFormat::R32_SINT), NativeFormat::R32_SINT);
        assert_eq!(overrides.back_buffer(NativeFormat::BC1_UNORM), NativeFormat::BC1_UNORM);
        // reported once, still refused on repeat
        assert_eq!(overrides.back_buffer(NativeFormat::BC1_UNORM), NativeFormat::BC1_UNORM);
        assert_eq!(overrides.back_buffer(NativeFormat::R8G8B8A8_UNORM), NativeFormat::B8G8R8A8_UNORM);
        // another format of the same class is still replaced
        assert_eq!(overrides.back_buffer(NativeFormat::R10G10B10A2_UNORM), NativeFormat::B8G8R8A8_UNORM);
    }

    #[test]
    fn resolved_back_buffers_share_the_requested_class() {
        let overrides = Overrides::from_options(&options(NativeFormat::B8G8R8A8_UNORM, hdr10()), NativeFormat::R8G8B8A8_UNORM);

        for entry in CATALOG.iter() {
            let resolved = overrides.back_buffer(entry.format);
            if resolved != entry.format {
                assert!(entry.class.is_compatible_with(resolved.class()), "{}", entry.name);
            }
        }
    }

    #[test]
    fn incompatible_swap_chain_falls_back_to_disabled() {
        let bad = SwapChainOverrideConfig {
            enabled: true,
            target_format: PresentFormat::B8G8R8A8Unorm,
            target_color_space: ColorSpace::ExtendedSrgbLinear,
        };
        let overrides = Overrides::from_options(&options(NativeFormat::B8G8R8A8_UNORM, bad), NativeFormat::R8G8B8A8_UNORM);

        assert_eq!(overrides.swap_chain(), None);
        assert!(!overrides.swap_chain_config().enabled);
        assert_eq!(overrides.back_buffer(NativeFormat::R8G8B8A8_UNORM), NativeFormat::B8G8R8A8_UNORM);
    }

    #[test]
    fn default_options_change_nothing() {
        let overrides = Overrides::from_options(&Options::default(), NativeFormat::R8G8B8A8_UNORM);
        assert_eq!(overrides.back_buffer(NativeFormat::R10G10B10A2_UNORM), NativeFormat::R10G10B10A2_UNORM);
        assert_eq!(overrides.swap_chain(), None);
        assert!(!overrides.render_target_upgrades_enabled());
    }

    #[test]
    fn resolution_is_repeatable() {
        let overrides = Overrides::from_options(&options(NativeFormat::B8G8R8A8_UNORM, hdr10()), NativeFormat::R8G8B8A8_UNORM);
        let first = (overrides.back_buffer(NativeFormat::R8G8B8A8_UNORM), overrides.swap_chain());
        for _ in 0..8 {
            assert_eq!((overrides.back_buffer(NativeFormat::R8G8B8A8_UNORM), overrides.swap_chain()), first);
        }
    }

    #[test]
    fn concurrent_readers_agree() {
        let overrides = Overrides::from_options(&options(NativeFormat::B8G8R8A8_UNORM, hdr10()), NativeFormat::R8G8B8A8_UNORM);

        let results: Vec<_> = (0..FORMAT_COUNT as i32)
            .into_par_iter()
            .map(|ordinal| {
                (
                    classify(ordinal),
                    overrides.back_buffer(NativeFormat::R8G8B8A8_UNORM),
                    overrides.swap_chain(),
                )
            })
            .collect();

        for (ordinal, (class, back_buffer, swap_chain)) in results.into_iter().enumerate() {
            assert_eq!(class, classify(ordinal as i32));
            assert_eq!(back_buffer, NativeFormat::B8G8R8A8_UNORM);
            assert_eq!(swap_chain, overrides.swap_chain());
        }
    }
}
