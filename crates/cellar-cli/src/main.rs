//! # cellar
//!
//! Generates a random picture of cellar racks and writes it as SVG, PNG, or
//! the raw layout as JSON.

mod args;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cellar_core::CellarConfig;
use cellar_export::PngOptions;
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => CellarConfig::default(),
    };
    args.apply(&mut config);

    let format = args.export_format()?;

    let options = PngOptions {
        scale: args.scale,
        ..PngOptions::default()
    };

    log::info!("seed {}", args.seed);
    let mut rng = Pcg64::seed_from_u64(args.seed);
    let bytes = cellar_export::render_to(&config, &mut rng, format, &options)
        .with_context(|| format!("cannot render the cellar as {}", format))?;

    fs::write(&args.output, bytes).with_context(|| format!("cannot write {}", args.output.display()))?;
    log::info!("wrote {} to {}", format, args.output.display());

    Ok(())
}

fn load_config(path: &Path) -> Result<CellarConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("cannot read config {}", path.display()))?;
    let config = serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}
