//! Command-line arguments.

use std::path::PathBuf;

use cellar_core::{CellarConfig, ItemPlacement, WindowSize};
use cellar_export::ExportFormat;
use clap::{Parser, ValueEnum};

/// Seed of the classic picture.
pub const DEFAULT_SEED: u64 = 677;

#[derive(Debug, Parser)]
#[command(name = "cellar")]
#[command(about = "Generate a random picture of cellar racks, shelves, and goods")]
#[command(version)]
pub struct Args {
    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Margin on every side, as a fraction of the window size
    #[arg(long)]
    pub margin: Option<f64>,

    #[arg(long)]
    pub margin_top: Option<f64>,

    #[arg(long)]
    pub margin_bottom: Option<f64>,

    #[arg(long)]
    pub margin_left: Option<f64>,

    #[arg(long)]
    pub margin_right: Option<f64>,

    /// Divider thickness in pixels
    #[arg(short, long)]
    pub thickness: Option<f64>,

    /// Chance that a shelf holds an item
    #[arg(long)]
    pub item_probability: Option<f64>,

    /// Horizontal placement of items on their shelf
    #[arg(long, value_enum)]
    pub placement: Option<Placement>,

    /// Random seed
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output format; defaults to the output file's extension
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Pixels per window unit for PNG output
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Placement {
    Centered,
    Random,
}

impl From<Placement> for ItemPlacement {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Centered => ItemPlacement::Centered,
            Placement::Random => ItemPlacement::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Svg,
    Png,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Svg => ExportFormat::Svg,
            Format::Png => ExportFormat::Png,
            Format::Json => ExportFormat::Json,
        }
    }
}

impl Args {
    /// Overlay the flags given on the command line onto `config`.
    ///
    /// `--margin` applies first so the per-side flags can refine it.
    pub fn apply(&self, config: &mut CellarConfig) {
        if let Some(width) = self.width {
            config.window = WindowSize::new(width, config.window.height);
        }
        if let Some(height) = self.height {
            config.window = WindowSize::new(config.window.width, height);
        }

        let margins = &mut config.margins;
        if let Some(margin) = self.margin {
            margins.top = margin;
            margins.bottom = margin;
            margins.left = margin;
            margins.right = margin;
        }
        for (side, value) in [
            (&mut margins.top, self.margin_top),
            (&mut margins.bottom, self.margin_bottom),
            (&mut margins.left, self.margin_left),
            (&mut margins.right, self.margin_right),
        ] {
            if let Some(value) = value {
                *side = value;
            }
        }

        if let Some(thickness) = self.thickness {
            config.divider_thickness = thickness;
        }
        if let Some(probability) = self.item_probability {
            config.items.probability = probability;
        }
        if let Some(placement) = self.placement {
            config.items.placement = placement.into();
        }
    }

    /// The requested output format, falling back to the output extension.
    pub fn export_format(&self) -> Result<ExportFormat, cellar_core::ExportError> {
        match self.format {
            Some(format) => Ok(format.into()),
            None => ExportFormat::from_path(&self.output),
        }
    }
}
