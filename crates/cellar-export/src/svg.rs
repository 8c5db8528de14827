//! SVG export for cellar scenes.

use std::fmt::Write;

use cellar_core::{types::Color, ExportError};
use cellar_render_2d::{PathPrimitive, RectPrimitive, RenderCommand, Scene, Stroke};

/// Export a scene to an SVG document sized to the scene.
pub fn export(scene: &Scene) -> Result<String, ExportError> {
    let width = scene.width.max(1.0);
    let height = scene.height.max(1.0);

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
        width, height, width, height
    ));

    let mut builder = SvgBuilder {
        svg: &mut svg,
        indent: 1,
    };

    for command in &scene.commands {
        match command {
            RenderCommand::Rect(rect) => builder.export_rect(rect)?,
            RenderCommand::Path(path) => builder.export_path(path)?,
        }
    }

    svg.push_str("</svg>\n");

    log::info!("exported {} commands as SVG ({} bytes)", scene.len(), svg.len());
    Ok(svg)
}

struct SvgBuilder<'a> {
    svg: &'a mut String,
    indent: usize,
}

impl<'a> SvgBuilder<'a> {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.svg.push_str("  ");
        }
    }

    fn export_rect(&mut self, rect: &RectPrimitive) -> Result<(), ExportError> {
        let mut attrs = vec![
            format!("x=\"{}\"", rect.x),
            format!("y=\"{}\"", rect.y),
            format!("width=\"{}\"", rect.width),
            format!("height=\"{}\"", rect.height),
        ];
        push_paint(&mut attrs, rect.fill, rect.stroke.as_ref());

        self.write_element("rect", &attrs)
    }

    fn export_path(&mut self, path: &PathPrimitive) -> Result<(), ExportError> {
        if path.points.len() < 3 {
            return Ok(());
        }

        let points = path
            .points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        let mut attrs = vec![format!("points=\"{}\"", points)];
        push_paint(&mut attrs, path.fill, path.stroke.as_ref());

        self.write_element("polygon", &attrs)
    }

    fn write_element(&mut self, name: &str, attrs: &[String]) -> Result<(), ExportError> {
        self.write_indent();
        writeln!(self.svg, "<{} {}/>", name, attrs.join(" ")).map_err(|e| ExportError::Encode {
            reason: e.to_string(),
        })
    }
}

fn push_paint(attrs: &mut Vec<String>, fill: Option<Color>, stroke: Option<&Stroke>) {
    match fill {
        Some(color) => {
            attrs.push(format!("fill=\"{}\"", color_to_svg(&color)));
            if color.a < 1.0 {
                attrs.push(format!("fill-opacity=\"{}\"", color.a));
            }
        }
        None => attrs.push("fill=\"none\"".to_string()),
    }

    if let Some(stroke) = stroke {
        attrs.push(format!("stroke=\"{}\"", color_to_svg(&stroke.color)));
        if stroke.color.a < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", stroke.color.a));
        }
        attrs.push(format!("stroke-width=\"{}\"", stroke.width));
        attrs.push(format!("stroke-linejoin=\"{}\"", stroke.line_join.as_svg()));
    }
}

fn color_to_svg(color: &Color) -> String {
    let (r, g, b, _) = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
