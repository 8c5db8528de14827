//! PNG export for cellar scenes.

use std::io::Cursor;

use cellar_core::ExportError;
use cellar_render_2d::{Scene, SoftwareRenderer};
use image::{ImageFormat, RgbaImage};

/// Export options for PNG.
#[derive(Debug, Clone)]
pub struct PngOptions {
    /// Scale factor (1.0 = 1:1, 2.0 = 2x resolution).
    pub scale: f32,
    /// Background color as RGBA.
    pub background: [u8; 4],
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: [255, 255, 255, 255], // White
        }
    }
}

/// Export a scene to PNG.
pub fn export(scene: &Scene) -> Result<Vec<u8>, ExportError> {
    export_with_options(scene, &PngOptions::default())
}

/// Export a scene to PNG with custom options.
pub fn export_with_options(scene: &Scene, options: &PngOptions) -> Result<Vec<u8>, ExportError> {
    let mut renderer = SoftwareRenderer::for_scene(scene, options.scale)?;
    let [r, g, b, a] = options.background;
    renderer.clear(r, g, b, a);
    renderer.render(scene);

    let (width, height) = (renderer.width(), renderer.height());
    let bytes = encode_png(renderer.into_buffer(), width, height)?;

    log::info!("exported {}x{} PNG ({} bytes)", width, height, bytes.len());
    Ok(bytes)
}

/// Encode raw RGBA pixels as PNG.
fn encode_png(pixels: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let image = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| ExportError::Encode {
        reason: format!("pixel buffer does not match {}x{}", width, height),
    })?;

    let mut output = Cursor::new(Vec::new());
    image
        .write_to(&mut output, ImageFormat::Png)
        .map_err(|e| ExportError::Encode { reason: e.to_string() })?;

    Ok(output.into_inner())
}
