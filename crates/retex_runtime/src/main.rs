//! Retex Runtime
//!
//! Runs the start-up path of the layer against an options file and reports
//! what presentation resources would be created with.
//!
//! Usage: `retex [options.json] [back-buffer-format]`

use anyhow::{Context, Result};
use retex_format::NativeFormat;
use retex_options::Options;
use retex_resolve::Overrides;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Retex v{}", retex_format::VERSION);

    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => Options::load(&path).with_context(|| format!("loading options from {path}"))?,
        None => {
            tracing::info!("No options file given, using defaults");
            Options::default()
        }
    };
    let requested = match args.next() {
        Some(name) => name
            .parse::<NativeFormat>()
            .with_context(|| format!("parsing back buffer format '{name}'"))?,
        None => NativeFormat::R8G8B8A8_UNORM,
    };

    let options = retex_options::publish(options).context("publishing options")?;

    let class = requested.class();
    tracing::info!(
        %requested,
        ?class,
        eligible = class.is_substitution_eligible(),
        consulted = options.enable_render_target_upgrades,
        "Back buffer format class"
    );

    let overrides = Overrides::from_options(options, requested);
    tracing::info!("Back buffer: {} -> {}", requested, overrides.back_buffer(requested));
    match overrides.swap_chain() {
        Some((format, color_space)) => tracing::info!(
            "Swap chain: {:?} ({}) in {:?} ({})",
            format,
            format.raw(),
            color_space,
            color_space.raw()
        ),
        None => tracing::info!("Swap chain: surface default"),
    }

    Ok(())
}
