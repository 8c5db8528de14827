//! 2D rendering for cellar pictures.
//!
//! [`build_scene`] turns a generated [`Cellar`](cellar_layout::Cellar) into an
//! ordered [`Scene`] of rectangles and polygons. [`SoftwareRenderer`]
//! tessellates the scene with lyon and rasterizes it into an RGBA buffer for
//! headless output.

mod shapes;
pub mod primitives;
pub mod scene;

pub use primitives::*;
pub use scene::{build_scene, Theme};
pub use shapes::{Mesh, Tessellator, Vertex};

use cellar_core::RenderError;

/// Largest pixel buffer a renderer will allocate, in bytes.
pub const MAX_SURFACE_BYTES: usize = 1 << 30;

/// Software rasterizer for headless rendering.
pub struct SoftwareRenderer {
    width: u32,
    height: u32,
    scale: f32,
    buffer: Vec<u8>,
    tessellator: Tessellator,
}

impl SoftwareRenderer {
    /// Create a new software renderer with the given dimensions.
    ///
    /// Fails for an empty surface or one whose RGBA buffer would exceed
    /// [`MAX_SURFACE_BYTES`].
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSurface { width, height });
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .filter(|&len| len <= MAX_SURFACE_BYTES)
            .ok_or(RenderError::SurfaceTooLarge {
                width: width as u64,
                height: height as u64,
            })?;

        Ok(Self {
            width,
            height,
            scale: 1.0,
            buffer: vec![255; len], // RGBA, white background
            tessellator: Tessellator::new(),
        })
    }

    /// Create a renderer sized for `scene` at `scale` device pixels per unit.
    pub fn for_scene(scene: &Scene, scale: f32) -> Result<Self, RenderError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RenderError::InvalidScale { scale });
        }

        let width = (scene.width as f64 * scale as f64).round().max(0.0);
        let height = (scene.height as f64 * scale as f64).round().max(0.0);
        if width > u32::MAX as f64 || height > u32::MAX as f64 {
            return Err(RenderError::SurfaceTooLarge {
                width: width as u64,
                height: height as u64,
            });
        }

        let mut renderer = Self::new(width as u32, height as u32)?;
        renderer.scale = scale;
        Ok(renderer)
    }

    /// Clear the buffer to a solid color.
    pub fn clear(&mut self, r: u8, g: u8, b: u8, a: u8) {
        for chunk in self.buffer.chunks_exact_mut(4) {
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
            chunk[3] = a;
        }
    }

    /// Render a scene over the current buffer contents, back to front.
    pub fn render(&mut self, scene: &Scene) -> &[u8] {
        let mut mesh = Mesh::new();

        for command in &scene.commands {
            mesh.clear();

            match command {
                RenderCommand::Rect(rect) => self.tessellator.tessellate_rect(rect, &mut mesh),
                RenderCommand::Path(path) => self.tessellator.tessellate_path(path, &mut mesh),
            }

            self.rasterize_mesh(&mesh);
        }

        log::debug!(
            "rasterized {} commands into {}x{} pixels",
            scene.len(),
            self.width,
            self.height
        );

        &self.buffer
    }

    /// Rasterize a tessellated mesh to the buffer.
    fn rasterize_mesh(&mut self, mesh: &Mesh) {
        for triangle in mesh.indices.chunks_exact(3) {
            let [v0, v1, v2] = [triangle[0], triangle[1], triangle[2]].map(|i| self.scaled(&mesh.vertices[i as usize]));
            self.rasterize_triangle(&v0, &v1, &v2);
        }
    }

    fn scaled(&self, vertex: &Vertex) -> Vertex {
        Vertex::new(vertex.position[0] * self.scale, vertex.position[1] * self.scale, vertex.color)
    }

    /// Rasterize a single triangle using edge functions.
    fn rasterize_triangle(&mut self, v0: &Vertex, v1: &Vertex, v2: &Vertex) {
        let min_x = v0.position[0].min(v1.position[0]).min(v2.position[0]).max(0.0) as i32;
        let max_x = v0.position[0].max(v1.position[0]).max(v2.position[0]).min(self.width as f32 - 1.0) as i32;
        let min_y = v0.position[1].min(v1.position[1]).min(v2.position[1]).max(0.0) as i32;
        let max_y = v0.position[1].max(v1.position[1]).max(v2.position[1]).min(self.height as f32 - 1.0) as i32;

        let area = edge_function(v0.position, v1.position, v2.position);
        if area.abs() < 0.0001 {
            return; // Degenerate triangle
        }

        let inv_area = 1.0 / area;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = [x as f32 + 0.5, y as f32 + 0.5];

                let w0 = edge_function(v1.position, v2.position, p);
                let w1 = edge_function(v2.position, v0.position, p);
                let w2 = edge_function(v0.position, v1.position, p);

                // Either winding counts as inside.
                if !((w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0) || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0)) {
                    continue;
                }

                let (b0, b1, b2) = (w0 * inv_area, w1 * inv_area, w2 * inv_area);
                let channel = |c: usize| (v0.color[c] * b0 + v1.color[c] * b1 + v2.color[c] * b2).clamp(0.0, 1.0);
                let (r, g, b, a) = (channel(0), channel(1), channel(2), channel(3));

                let idx = (y as usize * self.width as usize + x as usize) * 4;
                if idx + 3 < self.buffer.len() {
                    let dst_r = self.buffer[idx] as f32 / 255.0;
                    let dst_g = self.buffer[idx + 1] as f32 / 255.0;
                    let dst_b = self.buffer[idx + 2] as f32 / 255.0;

                    self.buffer[idx] = blend(r, dst_r, a);
                    self.buffer[idx + 1] = blend(g, dst_g, a);
                    self.buffer[idx + 2] = blend(b, dst_b, a);
                    self.buffer[idx + 3] = 255;
                }
            }
        }
    }

    /// Get the buffer width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a reference to the raw pixel buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Take ownership of the raw pixel buffer.
    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }
}

/// Source-over blend of one channel, rounded to 8 bits.
#[inline]
fn blend(src: f32, dst: f32, alpha: f32) -> u8 {
    ((src * alpha + dst * (1.0 - alpha)) * 255.0).round() as u8
}

/// Edge function for triangle rasterization.
/// Returns positive if point p is to the left of edge (a, b).
#[inline]
fn edge_function(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    (p[0] - a[0]) * (b[1] - a[1]) - (p[1] - a[1]) * (b[0] - a[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_core::types::Color;
    use cellar_core::CellarConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn pixel(renderer: &SoftwareRenderer, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * renderer.width() as usize + x as usize) * 4;
        let buffer = renderer.buffer();
        [buffer[idx], buffer[idx + 1], buffer[idx + 2], buffer[idx + 3]]
    }

    #[test]
    fn test_software_renderer_new() {
        let renderer = SoftwareRenderer::new(100, 100).unwrap();
        assert_eq!(renderer.width(), 100);
        assert_eq!(renderer.height(), 100);
        assert_eq!(renderer.buffer().len(), 100 * 100 * 4);
    }

    #[test]
    fn test_software_renderer_clear() {
        let mut renderer = SoftwareRenderer::new(10, 10).unwrap();
        renderer.clear(255, 0, 0, 255);
        assert_eq!(pixel(&renderer, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&renderer, 9, 9), [255, 0, 0, 255]);
    }

    #[test]
    fn test_render_rect_scene() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.rect(RectPrimitive::new(10.0, 10.0, 30.0, 20.0).with_fill(Color::rgb(1.0, 0.0, 0.0)));

        let mut renderer = SoftwareRenderer::for_scene(&scene, 1.0).unwrap();
        renderer.render(&scene);

        assert_eq!(pixel(&renderer, 20, 15), [255, 0, 0, 255]);
        assert_eq!(pixel(&renderer, 5, 5), [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_scales_coordinates() {
        let mut scene = Scene::new(50.0, 50.0);
        scene.rect(RectPrimitive::new(10.0, 10.0, 10.0, 10.0).with_fill(Color::BLACK));

        let mut renderer = SoftwareRenderer::for_scene(&scene, 2.0).unwrap();
        renderer.render(&scene);

        assert_eq!(renderer.width(), 100);
        assert_eq!(renderer.height(), 100);
        assert_eq!(pixel(&renderer, 30, 30), [0, 0, 0, 255]);
        assert_eq!(pixel(&renderer, 15, 15), [255, 255, 255, 255]);
    }

    #[test]
    fn test_empty_surface_is_rejected() {
        let err = SoftwareRenderer::for_scene(&Scene::new(0.0, 10.0), 1.0).err().unwrap();
        assert!(matches!(err, RenderError::InvalidSurface { width: 0, height: 10 }));
    }

    #[test]
    fn test_bad_scale_is_rejected() {
        let scene = Scene::new(1600.0, 900.0);
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = SoftwareRenderer::for_scene(&scene, scale).err().unwrap();
            assert!(matches!(err, RenderError::InvalidScale { .. }), "{scale}: {err}");
        }
    }

    #[test]
    fn test_oversized_surface_is_rejected_before_allocating() {
        let scene = Scene::new(1600.0, 900.0);
        for scale in [30.0, 1e6, 1e30] {
            let err = SoftwareRenderer::for_scene(&scene, scale).err().unwrap();
            assert!(matches!(err, RenderError::SurfaceTooLarge { .. }), "{scale}: {err}");
        }
        assert!(matches!(
            SoftwareRenderer::new(u32::MAX, u32::MAX).err().unwrap(),
            RenderError::SurfaceTooLarge { .. }
        ));
    }

    #[test]
    fn test_render_generated_cellar_paints_panel() {
        let mut config = CellarConfig::default();
        config.items.probability = 0.0;
        let cellar = cellar_layout::generate(&config, &mut Pcg64::seed_from_u64(677)).unwrap();
        let scene = build_scene(&cellar, &Theme::default());

        let mut renderer = SoftwareRenderer::for_scene(&scene, 0.5).unwrap();
        renderer.render(&scene);

        // The window corner stays white; the top shelf of the first rack shows the panel.
        assert_eq!(pixel(&renderer, 2, 2), [255, 255, 255, 255]);
        assert_eq!(pixel(&renderer, 121, 68), [0xD3, 0xD3, 0xD3, 255]);
    }
}
