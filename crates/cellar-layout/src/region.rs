//! Drawable region and count ranges.

use cellar_core::{CellarConfig, CountRule, LayoutError, Rect};
use rand::Rng;

/// Inclusive range of slot counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, count: u32) -> bool {
        (self.min..=self.max).contains(&count)
    }

    pub fn midpoint(&self) -> u32 {
        self.min + (self.max - self.min) / 2
    }

    /// Draw a count uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Compute the window area left after subtracting the margins.
///
/// Validates the configuration first, then rejects dividers at least as
/// thick as the region itself.
pub fn drawable_region(config: &CellarConfig) -> Result<Rect, LayoutError> {
    config.validate()?;

    let w = config.window.width as f64;
    let h = config.window.height as f64;
    let m = &config.margins;

    let region = Rect::new(w * m.left, h * m.top, w - w * m.left - w * m.right, h - h * m.top - h * m.bottom);

    if region.width <= 0.0 || region.height <= 0.0 {
        return Err(LayoutError::invalid(format!(
            "margins leave no drawable area ({}x{})",
            region.width, region.height
        )));
    }

    let t = config.divider_thickness;
    if t >= region.width || t >= region.height {
        return Err(LayoutError::invalid(format!(
            "divider thickness {}px leaves no room in a {}x{} region",
            t, region.width, region.height
        )));
    }

    Ok(region)
}

/// Range of slot counts for a span of `length` pixels.
///
/// The ends come from how many slots of `rule.max_size` and `rule.min_size`
/// fit with `thickness` gaps between them, floored at `rule.min_count`.
/// The upper end is then clamped so every slot keeps a positive size, and
/// the lower end never exceeds the upper end.
pub fn count_range(rule: &CountRule, length: f64, thickness: f64) -> CountRange {
    let fitting = |size: f64| ((length + thickness) / (size + thickness)).floor() as u32;

    let min = fitting(rule.max_size).max(rule.min_count);
    let max = fitting(rule.min_size).max(rule.min_count);

    let limit = max_positive_count(length, thickness);
    if max > limit {
        log::warn!(
            "clamping count range {}..={} to {} for a {}px span with {}px dividers",
            min,
            max,
            limit,
            length,
            thickness
        );
    }

    let max = max.min(limit);
    CountRange::new(min.min(max), max)
}

/// Largest `n` with `length - (n - 1) * thickness > 0`, at least 1.
fn max_positive_count(length: f64, thickness: f64) -> u32 {
    if thickness <= 0.0 {
        return u32::MAX;
    }

    let mut n = ((length / thickness).ceil() as u32).max(1);
    while n > 1 && length - (n - 1) as f64 * thickness <= 0.0 {
        n -= 1;
    }
    n
}
