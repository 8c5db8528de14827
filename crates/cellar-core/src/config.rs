//! Immutable generation configuration.
//!
//! Every value here is read-only input to the generator. Defaults reproduce
//! the classic cellar picture: a 1600x900 window, 15% margins on every side,
//! 5px dividers.

use crate::errors::LayoutError;

/// Complete configuration for one generation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellarConfig {
    pub window: WindowSize,
    pub margins: Margins,
    /// Thickness in pixels of the gaps between racks and between shelves.
    pub divider_thickness: f64,
    /// Rack count rule, sized along the drawable width.
    pub racks: CountRule,
    /// Shelf count rule, sized along the rack height.
    pub shelves: CountRule,
    pub items: ItemConfig,
}

impl Default for CellarConfig {
    fn default() -> Self {
        Self {
            window: WindowSize::default(),
            margins: Margins::uniform(0.15),
            divider_thickness: 5.0,
            racks: CountRule::new(100.0, 250.0, 2),
            shelves: CountRule::new(40.0, 90.0, 3),
            items: ItemConfig::default(),
        }
    }
}

impl CellarConfig {
    /// Check every field that can be judged without computing the layout.
    ///
    /// Returns the first problem found as [`LayoutError::InvalidConfiguration`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(LayoutError::invalid(format!(
                "window size {}x{} has no area",
                self.window.width, self.window.height
            )));
        }

        self.margins.validate()?;

        if !self.divider_thickness.is_finite() || self.divider_thickness < 0.0 {
            return Err(LayoutError::invalid(format!(
                "divider thickness must be a non-negative number, got {}",
                self.divider_thickness
            )));
        }

        self.racks.validate("racks")?;
        self.shelves.validate("shelves")?;
        self.items.validate()
    }
}

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(1600, 900)
    }
}

/// Margins as fractions of the window size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    pub const fn uniform(fraction: f64) -> Self {
        Self {
            top: fraction,
            bottom: fraction,
            left: fraction,
            right: fraction,
        }
    }

    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let sides = [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ];
        for (side, value) in sides {
            if !(0.0..1.0).contains(&value) {
                return Err(LayoutError::invalid(format!(
                    "{} margin must be in [0, 1), got {}",
                    side, value
                )));
            }
        }

        if self.left + self.right >= 1.0 {
            return Err(LayoutError::invalid(format!(
                "left and right margins sum to {}% of the width",
                (self.left + self.right) * 100.0
            )));
        }
        if self.top + self.bottom >= 1.0 {
            return Err(LayoutError::invalid(format!(
                "top and bottom margins sum to {}% of the height",
                (self.top + self.bottom) * 100.0
            )));
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(0.15)
    }
}

/// How many equal slots fit along one axis.
///
/// For a span of `length` pixels split by `t`-pixel dividers the count range
/// is `[max((length + t) / (max_size + t), min_count), max((length + t) / (min_size + t), min_count)]`,
/// each end rounded down.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRule {
    /// Smallest slot size in pixels; bounds the count from above.
    pub min_size: f64,
    /// Largest slot size in pixels; bounds the count from below.
    pub max_size: f64,
    /// Floor applied to both ends of the range.
    pub min_count: u32,
}

impl CountRule {
    pub const fn new(min_size: f64, max_size: f64, min_count: u32) -> Self {
        Self { min_size, max_size, min_count }
    }

    fn validate(&self, what: &str) -> Result<(), LayoutError> {
        if !(self.min_size.is_finite() && self.min_size > 0.0) {
            return Err(LayoutError::invalid(format!(
                "{} minimum size must be positive, got {}",
                what, self.min_size
            )));
        }
        if !(self.max_size.is_finite() && self.max_size >= self.min_size) {
            return Err(LayoutError::invalid(format!(
                "{} maximum size {} is below the minimum {}",
                what, self.max_size, self.min_size
            )));
        }
        if self.min_count == 0 {
            return Err(LayoutError::invalid(format!("{} minimum count must be at least 1", what)));
        }
        Ok(())
    }
}

/// A closed range of fractions within `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FractionRange {
    pub min: f64,
    pub max: f64,
}

impl FractionRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, what: &str) -> Result<(), LayoutError> {
        let in_unit = |v: f64| v > 0.0 && v <= 1.0;
        if !in_unit(self.min) || !in_unit(self.max) || self.min > self.max {
            return Err(LayoutError::invalid(format!(
                "{} fractions must satisfy 0 < min <= max <= 1, got {}..{}",
                what, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// The kinds of goods stored on the shelves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemKind {
    Jar,
    Salt,
    Beer,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Jar, ItemKind::Salt, ItemKind::Beer];
}

/// Relative likelihood of each item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindWeights {
    pub jar: u32,
    pub salt: u32,
    pub beer: u32,
}

impl KindWeights {
    pub fn weight(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Jar => self.jar,
            ItemKind::Salt => self.salt,
            ItemKind::Beer => self.beer,
        }
    }
}

impl Default for KindWeights {
    fn default() -> Self {
        Self { jar: 2, salt: 1, beer: 2 }
    }
}

/// Horizontal placement of an item inside its shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemPlacement {
    Centered,
    #[default]
    Random,
}

/// Item distribution settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemConfig {
    /// Probability that a shelf holds an item.
    pub probability: f64,
    /// Item width as a fraction of shelf width, used when racks are wide
    /// (rack count below the midpoint of its range).
    pub narrow: FractionRange,
    /// Item width as a fraction of shelf width, used when racks are narrow.
    pub wide: FractionRange,
    /// Jar height as a fraction of shelf height.
    pub height: FractionRange,
    pub weights: KindWeights,
    pub placement: ItemPlacement,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            probability: 0.85,
            narrow: FractionRange::new(0.08, 0.18),
            wide: FractionRange::new(0.12, 0.27),
            height: FractionRange::new(0.5, 1.0),
            weights: KindWeights::default(),
            placement: ItemPlacement::default(),
        }
    }
}

impl ItemConfig {
    fn validate(&self) -> Result<(), LayoutError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(LayoutError::invalid(format!(
                "item probability must be in [0, 1], got {}",
                self.probability
            )));
        }
        self.narrow.validate("narrow item width")?;
        self.wide.validate("wide item width")?;
        self.height.validate("item height")?;

        if self.probability > 0.0 && ItemKind::ALL.iter().all(|k| self.weights.weight(*k) == 0) {
            return Err(LayoutError::invalid("at least one item kind needs a non-zero weight"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(err: LayoutError) -> String {
        match err {
            LayoutError::InvalidConfiguration { reason } => reason,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(CellarConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_horizontal_margins_covering_width_rejected() {
        let config = CellarConfig {
            margins: Margins::new(0.1, 0.1, 0.6, 0.5),
            ..CellarConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(reason(err).contains("left and right"));
    }

    #[test]
    fn test_vertical_margins_exactly_full_rejected() {
        let config = CellarConfig {
            margins: Margins::new(0.5, 0.5, 0.0, 0.0),
            ..CellarConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_margin_rejected() {
        let config = CellarConfig {
            margins: Margins::new(-0.1, 0.0, 0.0, 0.0),
            ..CellarConfig::default()
        };
        assert!(reason(config.validate().unwrap_err()).contains("top margin"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = CellarConfig {
            window: WindowSize::new(0, 900),
            ..CellarConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_thickness_rejected() {
        for thickness in [-1.0, f64::NAN, f64::INFINITY] {
            let config = CellarConfig {
                divider_thickness: thickness,
                ..CellarConfig::default()
            };
            assert!(config.validate().is_err(), "thickness {thickness} accepted");
        }
    }

    #[test]
    fn test_inverted_count_rule_rejected() {
        let config = CellarConfig {
            shelves: CountRule::new(90.0, 40.0, 3),
            ..CellarConfig::default()
        };
        assert!(reason(config.validate().unwrap_err()).contains("shelves"));
    }

    #[test]
    fn test_zero_min_count_rejected() {
        let config = CellarConfig {
            racks: CountRule::new(100.0, 250.0, 0),
            ..CellarConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_item_fraction_out_of_unit_rejected() {
        let mut config = CellarConfig::default();
        config.items.wide = FractionRange::new(0.5, 1.5);
        assert!(reason(config.validate().unwrap_err()).contains("wide item width"));
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let mut config = CellarConfig::default();
        config.items.probability = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_all_zero_weights_rejected_only_when_items_possible() {
        let mut config = CellarConfig::default();
        config.items.weights = KindWeights { jar: 0, salt: 0, beer: 0 };
        assert!(config.validate().is_err());

        config.items.probability = 0.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CellarConfig = serde_json::from_str(
            r#"{ "window": { "width": 1920, "height": 1080 }, "items": { "placement": "centered" } }"#,
        )
        .unwrap();
        assert_eq!(config.window, WindowSize::new(1920, 1080));
        assert_eq!(config.margins, Margins::uniform(0.15));
        assert_eq!(config.items.placement, ItemPlacement::Centered);
        assert_eq!(config.items.probability, 0.85);
    }
}
