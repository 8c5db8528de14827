//! Export formats for cellar pictures.
//!
//! Supported formats:
//! - SVG (vector, one element per render command)
//! - PNG (raster, via the software renderer)
//! - JSON (the generated layout itself)

#[cfg(feature = "svg")]
pub mod svg;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "json")]
pub mod json;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use cellar_core::ExportError;
use cellar_layout::Cellar;
use cellar_render_2d::Scene;
#[cfg(all(feature = "svg", feature = "png", feature = "json"))]
use {
    cellar_core::{CellarConfig, CellarError},
    cellar_render_2d::{build_scene, Theme},
    rand::Rng,
};

#[cfg(feature = "png")]
pub use png::PngOptions;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Json,
}

impl ExportFormat {
    /// Guess the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        ext.parse()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnsupportedFormat { format: other.to_string() }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Export a scene to SVG.
#[cfg(feature = "svg")]
pub fn export_svg(scene: &Scene) -> Result<String, ExportError> {
    svg::export(scene)
}

/// Export a scene to PNG.
#[cfg(feature = "png")]
pub fn export_png(scene: &Scene) -> Result<Vec<u8>, ExportError> {
    png::export(scene)
}

/// Export a scene to PNG with custom options.
#[cfg(feature = "png")]
pub fn export_png_with_options(scene: &Scene, options: &PngOptions) -> Result<Vec<u8>, ExportError> {
    png::export_with_options(scene, options)
}

/// Export the generated layout to JSON.
#[cfg(feature = "json")]
pub fn export_json(cellar: &Cellar) -> Result<String, ExportError> {
    json::export(cellar)
}

/// Encode a generated cellar in `format`.
#[cfg(all(feature = "svg", feature = "png", feature = "json"))]
pub fn export(cellar: &Cellar, format: ExportFormat, options: &PngOptions) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Svg => Ok(export_svg(&build_scene(cellar, &Theme::default()))?.into_bytes()),
        ExportFormat::Png => export_png_with_options(&build_scene(cellar, &Theme::default()), options),
        ExportFormat::Json => Ok(export_json(cellar)?.into_bytes()),
    }
}

/// Generate a cellar from `config` and encode it in `format`.
///
/// An invalid configuration fails with [`CellarError::Layout`] before
/// anything is drawn.
#[cfg(all(feature = "svg", feature = "png", feature = "json"))]
pub fn render_to<R: Rng + ?Sized>(
    config: &CellarConfig,
    rng: &mut R,
    format: ExportFormat,
    options: &PngOptions,
) -> Result<Vec<u8>, CellarError> {
    let cellar = cellar_layout::generate(config, rng)?;

    log::info!(
        "{} racks, {} shelves, {} items",
        cellar.racks.len(),
        cellar.shelves().count(),
        cellar.items().count()
    );

    Ok(export(&cellar, format, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_core::{CellarConfig, LayoutError, Margins, RenderError};
    use cellar_render_2d::{build_scene, Theme};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn default_scene() -> Scene {
        let cellar = cellar_layout::generate(&CellarConfig::default(), &mut Pcg64::seed_from_u64(677)).unwrap();
        build_scene(&cellar, &Theme::default())
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("out/cellar.svg")).unwrap(), ExportFormat::Svg);
        assert_eq!(ExportFormat::from_path(Path::new("cellar.PNG")).unwrap(), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("cellar.json")).unwrap(), ExportFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = ExportFormat::from_path(Path::new("cellar.bmp")).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat { ref format } if format == "bmp"));
        assert!(ExportFormat::from_path(Path::new("cellar")).is_err());
    }

    #[test]
    #[cfg(feature = "svg")]
    fn test_export_svg() {
        let scene = default_scene();
        let svg = export_svg(&scene).unwrap();
        let elements = svg.matches("<rect ").count() + svg.matches("<polygon ").count();
        assert_eq!(elements, scene.len());
    }

    #[test]
    #[cfg(feature = "png")]
    fn test_export_png() {
        let bytes = export_png(&default_scene()).unwrap();
        assert_eq!(&bytes[..4], &[137, 80, 78, 71]);
    }

    #[test]
    #[cfg(all(feature = "svg", feature = "png", feature = "json"))]
    fn test_render_to_every_format() {
        let config = CellarConfig::default();
        let options = PngOptions::default();
        let render = |format| render_to(&config, &mut Pcg64::seed_from_u64(677), format, &options).unwrap();

        assert!(String::from_utf8(render(ExportFormat::Svg)).unwrap().contains("<svg"));
        assert_eq!(&render(ExportFormat::Png)[..4], &[137, 80, 78, 71]);
        assert!(String::from_utf8(render(ExportFormat::Json)).unwrap().contains("\"racks\""));
    }

    #[test]
    #[cfg(all(feature = "svg", feature = "png", feature = "json"))]
    fn test_render_to_reports_layout_errors() {
        let config = CellarConfig {
            margins: Margins::new(0.15, 0.15, 0.6, 0.5),
            ..CellarConfig::default()
        };
        let err = render_to(&config, &mut Pcg64::seed_from_u64(677), ExportFormat::Svg, &PngOptions::default())
            .unwrap_err();
        assert!(matches!(err, CellarError::Layout(LayoutError::InvalidConfiguration { .. })));
    }

    #[test]
    #[cfg(all(feature = "svg", feature = "png", feature = "json"))]
    fn test_render_to_reports_oversized_png() {
        let options = PngOptions {
            scale: 1e6,
            ..PngOptions::default()
        };
        let err = render_to(&CellarConfig::default(), &mut Pcg64::seed_from_u64(677), ExportFormat::Png, &options)
            .unwrap_err();
        assert!(matches!(
            err,
            CellarError::Export(ExportError::Render(RenderError::SurfaceTooLarge { .. }))
        ));
    }
}
