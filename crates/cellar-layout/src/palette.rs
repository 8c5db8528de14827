//! Color generators for racks and items.

use cellar_core::{Color, ItemKind};
use rand::Rng;

use crate::model::ItemStyle;

/// Source of colors for generated racks and items.
pub trait Palette {
    /// Color of a rack's dividers.
    fn rack_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color;

    /// Colors for an item of the given kind.
    fn item_style<R: Rng + ?Sized>(&self, kind: ItemKind, rng: &mut R) -> ItemStyle;
}

/// The classic cellar colors: random racks, colorful jar contents, gray
/// salt, green or brown bottles.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellarPalette;

impl Palette for CellarPalette {
    fn rack_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        random_color(rng)
    }

    fn item_style<R: Rng + ?Sized>(&self, kind: ItemKind, rng: &mut R) -> ItemStyle {
        match kind {
            ItemKind::Jar => ItemStyle::Jar { content: random_color(rng) },
            ItemKind::Salt => ItemStyle::Salt { color: random_gray(rng) },
            ItemKind::Beer => {
                let glass = random_beer_glass(rng);
                let label = random_color(rng);
                // An odd cap now and then; matching caps look tidier.
                let cap = if rng.gen_ratio(1, 11) { random_color(rng) } else { label };
                ItemStyle::Beer { glass, label, cap }
            }
        }
    }
}

/// Any color of the full 8-bit RGB cube.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_rgb8(rng.gen(), rng.gen(), rng.gen())
}

/// A light gray, every channel in `0xCC..=0xFF`.
pub fn random_gray<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::gray8(rng.gen_range(0xCC..=0xFF))
}

/// Dark green or brown bottle glass with a little jitter.
pub fn random_beer_glass<R: Rng + ?Sized>(rng: &mut R) -> Color {
    if rng.gen_bool(0.5) {
        Color::from_rgb8(rng.gen_range(0x00..=0x10), rng.gen_range(0x70..=0x90), rng.gen_range(0x00..=0x10))
    } else {
        Color::from_rgb8(rng.gen_range(0x49..=0x69), rng.gen_range(0x2C..=0x4C), rng.gen_range(0x00..=0x2F))
    }
}
