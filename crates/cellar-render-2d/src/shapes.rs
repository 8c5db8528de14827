//! Shape tessellation for 2D rendering.

use lyon::geom::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, StrokeOptions, StrokeTessellator, StrokeVertex,
    VertexBuffers,
};

use crate::primitives::{LineJoin, PathPrimitive, RectPrimitive, Stroke};

/// A vertex for rendering.
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Tessellated mesh ready for rasterization.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn append(&mut self, buffers: VertexBuffers<Vertex, u32>) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(buffers.vertices);
        self.indices.extend(buffers.indices.iter().map(|i| i + base));
    }
}

/// Tessellator for converting primitives to meshes.
pub struct Tessellator {
    fill_tessellator: FillTessellator,
    stroke_tessellator: StrokeTessellator,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl Tessellator {
    pub fn new() -> Self {
        Self {
            fill_tessellator: FillTessellator::new(),
            stroke_tessellator: StrokeTessellator::new(),
        }
    }

    /// Tessellate a rectangle.
    pub fn tessellate_rect(&mut self, rect: &RectPrimitive, mesh: &mut Mesh) {
        if let Some(fill) = rect.fill {
            let color = fill.to_array();
            let base = mesh.vertices.len() as u32;
            let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);

            mesh.vertices.push(Vertex::new(x, y, color));
            mesh.vertices.push(Vertex::new(x + w, y, color));
            mesh.vertices.push(Vertex::new(x + w, y + h, color));
            mesh.vertices.push(Vertex::new(x, y + h, color));

            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        if let Some(ref stroke) = rect.stroke {
            let path = build_polygon_path(&[
                [rect.x, rect.y],
                [rect.x + rect.width, rect.y],
                [rect.x + rect.width, rect.y + rect.height],
                [rect.x, rect.y + rect.height],
            ]);
            self.tessellate_stroke(&path, stroke, mesh);
        }
    }

    /// Tessellate a closed polygon.
    pub fn tessellate_path(&mut self, path_prim: &PathPrimitive, mesh: &mut Mesh) {
        if path_prim.points.len() < 3 {
            return;
        }

        let points: Vec<[f32; 2]> = path_prim.points.iter().map(|p| [p.x, p.y]).collect();
        let path = build_polygon_path(&points);

        if let Some(fill) = path_prim.fill {
            self.tessellate_fill(&path, fill.to_array(), mesh);
        }

        if let Some(ref stroke) = path_prim.stroke {
            self.tessellate_stroke(&path, stroke, mesh);
        }
    }

    fn tessellate_fill(&mut self, path: &Path, color: [f32; 4], mesh: &mut Mesh) {
        let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();

        let result = self.fill_tessellator.tessellate_path(
            path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                Vertex::new(vertex.position().x, vertex.position().y, color)
            }),
        );

        match result {
            Ok(()) => mesh.append(buffers),
            Err(e) => log::warn!("fill tessellation failed: {:?}", e),
        }
    }

    fn tessellate_stroke(&mut self, path: &Path, stroke: &Stroke, mesh: &mut Mesh) {
        let color = stroke.color.to_array();

        let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();

        let options = StrokeOptions::default()
            .with_line_width(stroke.width)
            .with_line_join(convert_line_join(stroke.line_join));

        let result = self.stroke_tessellator.tessellate_path(
            path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, |vertex: StrokeVertex| {
                Vertex::new(vertex.position().x, vertex.position().y, color)
            }),
        );

        match result {
            Ok(()) => mesh.append(buffers),
            Err(e) => log::warn!("stroke tessellation failed: {:?}", e),
        }
    }
}

fn build_polygon_path(points: &[[f32; 2]]) -> Path {
    let mut builder = Path::builder();

    if let Some((first, rest)) = points.split_first() {
        builder.begin(point(first[0], first[1]));
        for p in rest {
            builder.line_to(point(p[0], p[1]));
        }
        builder.close();
    }

    builder.build()
}

fn convert_line_join(join: LineJoin) -> lyon::tessellation::LineJoin {
    match join {
        LineJoin::Miter => lyon::tessellation::LineJoin::Miter,
        LineJoin::Round => lyon::tessellation::LineJoin::Round,
        LineJoin::Bevel => lyon::tessellation::LineJoin::Bevel,
    }
}
