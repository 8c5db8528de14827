//! Layout generation for cellar pictures.
//!
//! This crate turns an immutable [`CellarConfig`] and a random source into a
//! [`Cellar`]: racks partitioning the drawable region, shelves partitioning
//! each rack, and at most one item per shelf.
//!
//! # Architecture
//!
//! 1. **Region**: the window shrunk by its margins
//! 2. **Racks**: equal columns separated by dividers
//! 3. **Shelves**: equal rows inside each rack separated by dividers
//! 4. **Items**: optional goods fitted onto each shelf floor
//!
//! # Example
//!
//! ```ignore
//! use cellar_layout::generate;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(677);
//! let cellar = generate(&CellarConfig::default(), &mut rng)?;
//!
//! for rack in &cellar.racks {
//!     println!("{:?}: {} shelves", rack.bounds, rack.shelves.len());
//! }
//! ```
//!
//! [`CellarConfig`]: cellar_core::CellarConfig

mod generate;
mod items;
mod model;
mod palette;
mod region;

pub use generate::{generate, Generator};
pub use model::{Cellar, Item, ItemStyle, Rack, Shelf};
pub use palette::{random_beer_glass, random_color, random_gray, CellarPalette, Palette};
pub use region::{count_range, drawable_region, CountRange};
