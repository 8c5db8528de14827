//! Scene building from generated cellars.

use cellar_core::types::{Color, Rect};
use cellar_layout::{Cellar, Item, ItemStyle, Rack};
use glam::Vec2;

use crate::primitives::{PathPrimitive, RectPrimitive, Scene, Stroke};

/// Fixed colors of everything the palette does not choose.
///
/// Racks, their dividers, and the uprights between them take the rack's own
/// color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Window behind the drawable region
    pub background: Color,
    /// Drawable region behind the racks
    pub panel: Color,
    pub outline: Color,
    pub outline_width: f32,
    pub jar_glass: Color,
    pub jar_lid: Color,
    pub jar_label: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            panel: Color::from_rgb8(0xD3, 0xD3, 0xD3),
            outline: Color::BLACK,
            outline_width: 1.0,
            jar_glass: Color::WHITE,
            jar_lid: Color::from_rgb8(0xA2, 0xA2, 0xA2),
            jar_label: Color::from_rgb8(0xFF, 0xE5, 0x7C),
        }
    }
}

/// Build a renderable scene from a generated cellar.
///
/// Commands are ordered back to front: window, region panel, then each rack
/// left to right with the upright on its left, its dividers, and its items.
pub fn build_scene(cellar: &Cellar, theme: &Theme) -> Scene {
    let mut scene = Scene::new(cellar.window.width as f32, cellar.window.height as f32);

    let mut builder = SceneBuilder {
        scene: &mut scene,
        theme,
    };

    builder.fill_rect(&Rect::new(0.0, 0.0, cellar.window.width as f64, cellar.window.height as f64), theme.background);
    builder.fill_rect(&cellar.region, theme.panel);

    let uprights = cellar.uprights();
    for (i, rack) in cellar.racks.iter().enumerate() {
        if let Some(upright) = i.checked_sub(1).and_then(|j| uprights.get(j)) {
            builder.fill_rect(upright, rack.color);
        }
        builder.build_rack(rack);
    }

    log::debug!("built scene with {} commands", scene.len());
    scene
}

struct SceneBuilder<'a> {
    scene: &'a mut Scene,
    theme: &'a Theme,
}

impl<'a> SceneBuilder<'a> {
    fn build_rack(&mut self, rack: &Rack) {
        for divider in rack.dividers() {
            self.fill_rect(&divider, rack.color);
        }

        for item in rack.shelves.iter().filter_map(|shelf| shelf.item.as_ref()) {
            self.build_item(item);
        }
    }

    fn build_item(&mut self, item: &Item) {
        let parts = Parts::new(&item.bounds);

        match item.style {
            ItemStyle::Jar { content } => {
                let (w, h) = (parts.w, parts.h);
                self.outlined(parts.rect(0.0, 0.0, w, h * 6.0 / 7.0), self.theme.jar_glass);
                self.scene
                    .rect(parts.rect(w / 10.0, h * 6.0 / 7.0, w * 4.0 / 5.0, h / 7.0).with_fill(self.theme.jar_lid));
                self.outlined(parts.rect(0.0, 0.0, w, h * 54.0 / 70.0), content);
                self.outlined(parts.rect(w / 4.0, h * 3.0 / 14.0, w / 2.0, h * 3.0 / 7.0), self.theme.jar_label);
            }
            ItemStyle::Salt { color } => {
                let (w, h) = (parts.w, parts.h);
                let triangle = parts.polygon(&[(0.0, 0.0), (w / 2.0, h), (w, 0.0)]);
                self.scene.path(triangle.with_fill(color).with_stroke(self.stroke()));
            }
            ItemStyle::Beer { glass, label, cap } => {
                let (w, h) = (parts.w, parts.h);
                let shoulder = h / 2.0 + w / 3.0;
                let neck = h * 11.0 / 12.0;
                let bottle = parts.polygon(&[
                    (0.0, 0.0),
                    (0.0, h / 2.0),
                    (w / 3.0, shoulder),
                    (w / 3.0, neck),
                    (w * 2.0 / 3.0, neck),
                    (w * 2.0 / 3.0, shoulder),
                    (w, h / 2.0),
                    (w, 0.0),
                ]);
                self.scene.path(bottle.with_fill(glass).with_stroke(self.stroke()));
                self.outlined(parts.rect(0.0, h / 6.0, w, h / 4.0), label);
                self.scene.rect(parts.rect(w / 3.0, neck, w / 3.0, h / 12.0).with_fill(cap));
            }
        }
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.scene.rect(
            RectPrimitive::new(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32).with_fill(color),
        );
    }

    fn outlined(&mut self, rect: RectPrimitive, fill: Color) {
        let stroke = self.stroke();
        self.scene.rect(rect.with_fill(fill).with_stroke(stroke));
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.theme.outline, self.theme.outline_width)
    }
}

/// Item-relative geometry, measured right and up from the bottom-left corner.
struct Parts {
    x: f64,
    bottom: f64,
    w: f64,
    h: f64,
}

impl Parts {
    fn new(bounds: &Rect) -> Self {
        Self {
            x: bounds.x,
            bottom: bounds.bottom(),
            w: bounds.width,
            h: bounds.height,
        }
    }

    fn rect(&self, dx: f64, up: f64, width: f64, height: f64) -> RectPrimitive {
        RectPrimitive::new(
            (self.x + dx) as f32,
            (self.bottom - up - height) as f32,
            width as f32,
            height as f32,
        )
    }

    fn polygon(&self, offsets: &[(f64, f64)]) -> PathPrimitive {
        PathPrimitive::polygon(
            offsets
                .iter()
                .map(|&(dx, up)| Vec2::new((self.x + dx) as f32, (self.bottom - up) as f32)),
        )
    }
}
