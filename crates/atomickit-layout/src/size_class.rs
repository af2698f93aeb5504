//! Screen size ranges and the standard AtomicKit size classes.

/// Measured screen dimensions in both dp and raw pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenDimensions {
    pub width_dp: f32,
    pub height_dp: f32,
    pub width_px: u32,
    pub height_px: u32,
}

/// A screen size range with optional upper bounds and an optional predicate.
///
/// All values are in dp. A dimension matches when it falls inside the
/// min/max bounds and, if present, the predicate accepts it too.
#[derive(Debug, Clone, Copy)]
pub struct SizeRange {
    pub min_width: f32,
    pub max_width: Option<f32>,
    pub min_height: f32,
    pub max_height: Option<f32>,
    predicate: Option<fn(f32, f32) -> bool>,
}

impl SizeRange {
    pub const fn new(
        min_width: f32,
        max_width: Option<f32>,
        min_height: f32,
        max_height: Option<f32>,
    ) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
            predicate: None,
        }
    }

    /// Range bounded by width only.
    pub const fn width(min_width: f32, max_width: Option<f32>) -> Self {
        Self::new(min_width, max_width, 0.0, None)
    }

    /// Unbounded range classified purely by a predicate over (width, height).
    pub const fn with_predicate(predicate: fn(f32, f32) -> bool) -> Self {
        Self {
            min_width: 0.0,
            max_width: None,
            min_height: 0.0,
            max_height: None,
            predicate: Some(predicate),
        }
    }

    // Material-style width classes.
    pub const COMPACT: SizeRange = SizeRange::width(0.0, Some(600.0));
    pub const MEDIUM: SizeRange = SizeRange::width(600.0, Some(840.0));
    pub const EXPANDED: SizeRange = SizeRange::width(840.0, None);

    // Orientation.
    pub const PORTRAIT: SizeRange = SizeRange::with_predicate(|w, h| h > w);
    pub const LANDSCAPE: SizeRange = SizeRange::with_predicate(|w, h| w >= h);

    // Device types.
    pub const TABLET: SizeRange = SizeRange::width(600.0, Some(1200.0));
    pub const DESKTOP: SizeRange = SizeRange::new(1200.0, None, 720.0, None);

    // Aspect ratio classes.
    pub const TALL: SizeRange = SizeRange::with_predicate(|w, h| h / w > 1.9);
    pub const STANDARD: SizeRange = SizeRange::with_predicate(|w, h| {
        let ratio = h / w;
        (1.3..=1.9).contains(&ratio)
    });
    pub const WIDE: SizeRange = SizeRange::with_predicate(|w, h| w / h > 1.7);

    /// Whether the given dimensions (dp) fall inside this range.
    pub fn matches(&self, width_dp: f32, height_dp: f32) -> bool {
        let width_ok =
            width_dp >= self.min_width && self.max_width.map_or(true, |max| width_dp <= max);
        let height_ok =
            height_dp >= self.min_height && self.max_height.map_or(true, |max| height_dp <= max);
        let base = width_ok && height_ok;
        match self.predicate {
            Some(predicate) => base && predicate(width_dp, height_dp),
            None => base,
        }
    }

    /// Convenience over [`SizeRange::matches`] for measured dimensions.
    pub fn matches_dimensions(&self, dimensions: &ScreenDimensions) -> bool {
        self.matches(dimensions.width_dp, dimensions.height_dp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_classes_partition_typical_widths() {
        assert!(SizeRange::COMPACT.matches(400.0, 800.0));
        assert!(!SizeRange::COMPACT.matches(700.0, 800.0));
        assert!(SizeRange::MEDIUM.matches(700.0, 800.0));
        assert!(SizeRange::EXPANDED.matches(1000.0, 800.0));
    }

    #[test]
    fn orientation_is_decided_by_the_predicate() {
        assert!(SizeRange::PORTRAIT.matches(400.0, 800.0));
        assert!(!SizeRange::PORTRAIT.matches(800.0, 400.0));
        assert!(SizeRange::LANDSCAPE.matches(800.0, 400.0));
        // A square counts as landscape.
        assert!(SizeRange::LANDSCAPE.matches(500.0, 500.0));
    }

    #[test]
    fn desktop_requires_both_width_and_height() {
        assert!(SizeRange::DESKTOP.matches(1400.0, 900.0));
        assert!(!SizeRange::DESKTOP.matches(1400.0, 600.0));
    }

    #[test]
    fn aspect_classes_use_the_ratio() {
        assert!(SizeRange::TALL.matches(400.0, 900.0));
        assert!(SizeRange::STANDARD.matches(400.0, 700.0));
        assert!(SizeRange::WIDE.matches(900.0, 400.0));
    }

    #[test]
    fn measured_dimensions_classify_like_raw_values() {
        let phone = ScreenDimensions {
            width_dp: 400.0,
            height_dp: 800.0,
            width_px: 1080,
            height_px: 2160,
        };
        assert!(SizeRange::COMPACT.matches_dimensions(&phone));
        assert!(SizeRange::PORTRAIT.matches_dimensions(&phone));
        assert!(!SizeRange::TABLET.matches_dimensions(&phone));
    }
}
