//! Fitting items onto shelves.

use cellar_core::{FractionRange, ItemKind, ItemPlacement, Rect};
use rand::Rng;

use crate::model::{Item, ItemStyle};

/// Height of an equilateral triangle per unit of side length.
const TRIANGLE_RATIO: f64 = 0.866_025_403_784_438_6;

/// Size distribution for the items of one picture.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ItemSizing {
    pub width: FractionRange,
    pub height: FractionRange,
    pub placement: ItemPlacement,
}

impl ItemSizing {
    /// Fit an item of `kind` onto the floor of `shelf`.
    ///
    /// The result always lies inside `shelf`.
    pub fn place<R: Rng + ?Sized>(&self, kind: ItemKind, style: ItemStyle, shelf: &Rect, rng: &mut R) -> Item {
        let slot_width = shelf.width * rng.gen_range(self.width.min..=self.width.max);
        let slack = (shelf.width - slot_width).max(0.0);
        let slot_x = match self.placement {
            ItemPlacement::Centered => shelf.x + slack / 2.0,
            ItemPlacement::Random => shelf.x + rng.gen_range(0.0..=slack),
        };

        let (x, width, height) = match kind {
            ItemKind::Jar => {
                let height = shelf.height * rng.gen_range(self.height.min..=self.height.max);
                (slot_x, slot_width, height)
            }
            ItemKind::Salt => {
                let side = slot_width.min(shelf.height / TRIANGLE_RATIO);
                (slot_x + (slot_width - side) / 2.0, side, side * TRIANGLE_RATIO)
            }
            ItemKind::Beer => {
                if shelf.height > 2.0 * slot_width {
                    let height = rng.gen_range(2.0 * slot_width..=shelf.height);
                    (slot_x, slot_width, height)
                } else {
                    let width = shelf.height / 2.0;
                    (slot_x + (slot_width - width) / 2.0, width, shelf.height)
                }
            }
        };

        let height = height.min(shelf.height);
        Item {
            bounds: Rect::new(x, shelf.bottom() - height, width, height),
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_core::Color;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    const EPS: f64 = 1e-9;

    fn sizing(placement: ItemPlacement) -> ItemSizing {
        ItemSizing {
            width: FractionRange::new(0.12, 0.27),
            height: FractionRange::new(0.5, 1.0),
            placement,
        }
    }

    fn style(kind: ItemKind) -> ItemStyle {
        match kind {
            ItemKind::Jar => ItemStyle::Jar { content: Color::WHITE },
            ItemKind::Salt => ItemStyle::Salt { color: Color::WHITE },
            ItemKind::Beer => ItemStyle::Beer {
                glass: Color::BLACK,
                label: Color::WHITE,
                cap: Color::WHITE,
            },
        }
    }

    #[test]
    fn test_items_rest_on_shelf_floor_inside_shelf() {
        let shelf = Rect::new(100.0, 50.0, 200.0, 60.0);
        let mut rng = Pcg64::seed_from_u64(7);
        for kind in ItemKind::ALL {
            for _ in 0..100 {
                let item = sizing(ItemPlacement::Random).place(kind, style(kind), &shelf, &mut rng);
                assert!(shelf.contains_rect(&item.bounds, EPS), "{kind:?} {:?}", item.bounds);
                assert!((item.bounds.bottom() - shelf.bottom()).abs() < EPS);
                assert!(item.bounds.width > 0.0 && item.bounds.height > 0.0);
            }
        }
    }

    #[test]
    fn test_centered_jar_is_centered() {
        let shelf = Rect::new(0.0, 0.0, 300.0, 80.0);
        let mut rng = Pcg64::seed_from_u64(8);
        let item = sizing(ItemPlacement::Centered).place(ItemKind::Jar, style(ItemKind::Jar), &shelf, &mut rng);
        assert!((item.bounds.center_x() - shelf.center_x()).abs() < EPS);
        assert!(item.bounds.height >= 40.0 - EPS);
    }

    #[test]
    fn test_salt_shrinks_to_fit_low_shelf() {
        // A full-width slot would make a triangle far taller than 20px.
        let shelf = Rect::new(0.0, 0.0, 200.0, 20.0);
        let sizing = ItemSizing {
            width: FractionRange::new(1.0, 1.0),
            ..sizing(ItemPlacement::Centered)
        };
        let mut rng = Pcg64::seed_from_u64(9);
        let item = sizing.place(ItemKind::Salt, style(ItemKind::Salt), &shelf, &mut rng);
        assert!((item.bounds.height - 20.0).abs() < EPS);
        assert!((item.bounds.width - 20.0 / TRIANGLE_RATIO).abs() < EPS);
        assert!((item.bounds.center_x() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_beer_is_at_least_twice_as_tall_as_wide() {
        let shelf = Rect::new(0.0, 0.0, 100.0, 90.0);
        let mut rng = Pcg64::seed_from_u64(10);
        for _ in 0..100 {
            let item = sizing(ItemPlacement::Random).place(ItemKind::Beer, style(ItemKind::Beer), &shelf, &mut rng);
            assert!(item.bounds.height + EPS >= 2.0 * item.bounds.width);
        }
    }

    #[test]
    fn test_beer_narrows_on_low_shelf() {
        let shelf = Rect::new(0.0, 0.0, 400.0, 30.0);
        let mut rng = Pcg64::seed_from_u64(11);
        let item = sizing(ItemPlacement::Centered).place(ItemKind::Beer, style(ItemKind::Beer), &shelf, &mut rng);
        assert!((item.bounds.width - 15.0).abs() < EPS);
        assert!((item.bounds.height - 30.0).abs() < EPS);
    }
}
