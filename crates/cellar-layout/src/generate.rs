//! The cellar generator.

use cellar_core::{CellarConfig, ItemKind, LayoutError, Rect};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use smallvec::SmallVec;

use crate::items::ItemSizing;
use crate::model::{Cellar, Rack, Shelf};
use crate::palette::{CellarPalette, Palette};
use crate::region::{count_range, drawable_region};

/// Generate a cellar with the classic palette.
pub fn generate<R: Rng + ?Sized>(config: &CellarConfig, rng: &mut R) -> Result<Cellar, LayoutError> {
    Generator::new(config).generate(rng)
}

/// Generates cellars from one configuration and palette.
///
/// All randomness comes from the source passed to [`Generator::generate`],
/// so equal seeds give equal cellars.
#[derive(Debug, Clone)]
pub struct Generator<'a, P = CellarPalette> {
    config: &'a CellarConfig,
    palette: P,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a CellarConfig) -> Self {
        Self::with_palette(config, CellarPalette)
    }
}

impl<'a, P: Palette> Generator<'a, P> {
    pub fn with_palette(config: &'a CellarConfig, palette: P) -> Self {
        Self { config, palette }
    }

    /// Run one generation.
    ///
    /// Fails with [`LayoutError::InvalidConfiguration`] before drawing any
    /// random value if the configuration leaves no room for a rack.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Cellar, LayoutError> {
        let region = drawable_region(self.config)?;
        let thickness = self.config.divider_thickness;
        let items = &self.config.items;

        let kinds = if items.probability > 0.0 {
            let weights = ItemKind::ALL.map(|kind| items.weights.weight(kind));
            Some(WeightedIndex::new(weights).map_err(|e| LayoutError::invalid(format!("item kind weights: {}", e)))?)
        } else {
            None
        };

        let rack_range = count_range(&self.config.racks, region.width, thickness);
        let rack_count = rack_range.sample(rng);

        let sizing = ItemSizing {
            width: if rack_count < rack_range.midpoint() { items.narrow } else { items.wide },
            height: items.height,
            placement: items.placement,
        };

        log::debug!(
            "region {:?}: {} racks drawn from {}..={}",
            region,
            rack_count,
            rack_range.min,
            rack_range.max
        );

        let rack_width = (region.width - (rack_count - 1) as f64 * thickness) / rack_count as f64;
        let mut racks = Vec::with_capacity(rack_count as usize);

        for i in 0..rack_count {
            let bounds = Rect::new(region.x + i as f64 * (rack_width + thickness), region.y, rack_width, region.height);
            let color = self.palette.rack_color(rng);
            let shelf_range = count_range(&self.config.shelves, bounds.height, thickness);
            let shelf_count = shelf_range.sample(rng);

            let mut rack = Rack {
                bounds,
                color,
                shelf_range,
                shelves: SmallVec::with_capacity(shelf_count as usize),
            };

            for slot in partition(&bounds, shelf_count, thickness) {
                let item = match &kinds {
                    Some(kinds) if rng.gen_bool(items.probability) => {
                        let kind = ItemKind::ALL[kinds.sample(rng)];
                        let style = self.palette.item_style(kind, rng);
                        Some(sizing.place(kind, style, &slot, rng))
                    }
                    _ => None,
                };
                rack.shelves.push(Shelf { bounds: slot, item });
            }

            log::trace!(
                "rack {} at {:?}: {} shelves, {} items",
                i,
                rack.bounds,
                rack.shelves.len(),
                rack.shelves.iter().filter(|s| s.item.is_some()).count()
            );
            racks.push(rack);
        }

        Ok(Cellar {
            window: self.config.window,
            region,
            divider_thickness: thickness,
            rack_range,
            racks,
        })
    }
}

/// Split a rack into `count` equal shelves with `thickness` gaps, top to bottom.
fn partition(rack: &Rect, count: u32, thickness: f64) -> impl Iterator<Item = Rect> {
    let height = (rack.height - (count - 1) as f64 * thickness) / count as f64;
    let (x, y, width) = (rack.x, rack.y, rack.width);
    (0..count).map(move |i| Rect::new(x, y + i as f64 * (height + thickness), width, height))
}
