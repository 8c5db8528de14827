//! Generated cellar structures.
//!
//! Everything here is built once by the generator and read by renderers.

use cellar_core::{Color, ItemKind, Rect, WindowSize};
use smallvec::SmallVec;

use crate::region::CountRange;

/// A complete generated picture: racks inside the drawable region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cellar {
    /// Window the picture was generated for
    pub window: WindowSize,
    /// Window shrunk by its margins
    pub region: Rect,
    /// Gap between neighbouring racks and between neighbouring shelves
    pub divider_thickness: f64,
    /// Range the rack count was drawn from
    pub rack_range: CountRange,
    /// Racks, left to right
    pub racks: Vec<Rack>,
}

impl Cellar {
    /// Gaps between neighbouring racks, left to right.
    pub fn uprights(&self) -> Vec<Rect> {
        self.racks
            .windows(2)
            .map(|pair| {
                let (left, right) = (&pair[0].bounds, &pair[1].bounds);
                Rect::new(left.right(), self.region.y, right.x - left.right(), self.region.height)
            })
            .collect()
    }

    /// All shelves of all racks.
    pub fn shelves(&self) -> impl Iterator<Item = &Shelf> {
        self.racks.iter().flat_map(|rack| rack.shelves.iter())
    }

    /// All placed items.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.shelves().filter_map(|shelf| shelf.item.as_ref())
    }
}

/// A vertical rack holding shelves stacked top to bottom.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rack {
    pub bounds: Rect,
    /// Color of the rack's dividers
    pub color: Color,
    /// Range the shelf count was drawn from
    pub shelf_range: CountRange,
    /// Shelves, top to bottom
    pub shelves: SmallVec<[Shelf; 16]>,
}

impl Rack {
    /// Divider boards between neighbouring shelves, top to bottom.
    pub fn dividers(&self) -> Vec<Rect> {
        self.shelves
            .windows(2)
            .map(|pair| {
                let (upper, lower) = (&pair[0].bounds, &pair[1].bounds);
                Rect::new(self.bounds.x, upper.bottom(), self.bounds.width, lower.y - upper.bottom())
            })
            .collect()
    }
}

/// One slot of a rack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shelf {
    pub bounds: Rect,
    pub item: Option<Item>,
}

/// Goods resting on a shelf floor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Tight box around everything drawn for the item
    pub bounds: Rect,
    pub style: ItemStyle,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        self.style.kind()
    }
}

/// Kind-specific colors of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ItemStyle {
    /// Preserve jar; `content` fills the glass.
    Jar { content: Color },
    /// Heap of salt.
    Salt { color: Color },
    /// Bottle with a paper label and a cap.
    Beer { glass: Color, label: Color, cap: Color },
}

impl ItemStyle {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemStyle::Jar { .. } => ItemKind::Jar,
            ItemStyle::Salt { .. } => ItemKind::Salt,
            ItemStyle::Beer { .. } => ItemKind::Beer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn shelf(y: f64, height: f64) -> Shelf {
        Shelf {
            bounds: Rect::new(10.0, y, 80.0, height),
            item: None,
        }
    }

    fn rack(x: f64, shelves: SmallVec<[Shelf; 16]>) -> Rack {
        Rack {
            bounds: Rect::new(x, 0.0, 80.0, 100.0),
            color: Color::BLACK,
            shelf_range: CountRange::new(1, 3),
            shelves,
        }
    }

    #[test]
    fn test_rack_dividers_fill_gaps_between_shelves() {
        let rack = rack(10.0, smallvec![shelf(0.0, 30.0), shelf(35.0, 30.0), shelf(70.0, 30.0)]);
        let dividers = rack.dividers();
        assert_eq!(dividers.len(), 2);
        assert_eq!(dividers[0], Rect::new(10.0, 30.0, 80.0, 5.0));
        assert_eq!(dividers[1], Rect::new(10.0, 65.0, 80.0, 5.0));
    }

    #[test]
    fn test_single_shelf_has_no_dividers() {
        let rack = rack(10.0, smallvec![shelf(0.0, 100.0)]);
        assert!(rack.dividers().is_empty());
    }

    #[test]
    fn test_uprights_between_racks() {
        let cellar = Cellar {
            window: WindowSize::new(200, 100),
            region: Rect::new(10.0, 0.0, 165.0, 100.0),
            divider_thickness: 5.0,
            rack_range: CountRange::new(2, 2),
            racks: vec![rack(10.0, smallvec![]), rack(95.0, smallvec![])],
        };
        assert_eq!(cellar.uprights(), vec![Rect::new(90.0, 0.0, 5.0, 100.0)]);
    }

    #[test]
    fn test_item_kind_follows_style() {
        let item = Item {
            bounds: Rect::default(),
            style: ItemStyle::Salt { color: Color::WHITE },
        };
        assert_eq!(item.kind(), ItemKind::Salt);
    }
}
