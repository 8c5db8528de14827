//! Render primitives for 2D rendering.
//!
//! These are intermediate representations that get tessellated and rendered.

use cellar_core::types::Color;
use glam::Vec2;

/// A render command representing something to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw an axis-aligned rectangle
    Rect(RectPrimitive),
    /// Draw a closed polygon
    Path(PathPrimitive),
}

impl RenderCommand {
    pub fn fill(&self) -> Option<Color> {
        match self {
            RenderCommand::Rect(rect) => rect.fill,
            RenderCommand::Path(path) => path.fill,
        }
    }
}

/// A rectangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl RectPrimitive {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// A closed polygon through `points`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathPrimitive {
    pub points: Vec<Vec2>,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl PathPrimitive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polygon(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            points: points.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.points.push(Vec2::new(x, y));
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub line_join: LineJoin,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            line_join: LineJoin::Miter,
        }
    }
}

/// Line join style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_svg(&self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// An ordered list of render commands covering a `width` x `height` surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<RenderCommand>,
    pub width: f32,
    pub height: f32,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            commands: Vec::new(),
            width,
            height,
        }
    }

    pub fn rect(&mut self, rect: RectPrimitive) {
        self.commands.push(RenderCommand::Rect(rect));
    }

    pub fn path(&mut self, path: PathPrimitive) {
        self.commands.push(RenderCommand::Path(path));
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_keeps_command_order() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.rect(RectPrimitive::new(0.0, 0.0, 100.0, 50.0).with_fill(Color::WHITE));
        scene.path(
            PathPrimitive::new()
                .line_to(0.0, 10.0)
                .line_to(5.0, 0.0)
                .line_to(10.0, 10.0)
                .with_fill(Color::BLACK),
        );

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.commands[0].fill(), Some(Color::WHITE));
        assert!(matches!(&scene.commands[1], RenderCommand::Path(p) if p.points.len() == 3));
    }

    #[test]
    fn test_stroke_defaults_to_miter() {
        let stroke = Stroke::new(Color::BLACK, 1.0);
        assert_eq!(stroke.line_join, LineJoin::Miter);
        assert_eq!(stroke.line_join.as_svg(), "miter");
    }
}
