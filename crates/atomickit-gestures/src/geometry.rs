//! Shared offset/threshold math for the gesture trackers.

/// Clamps a horizontal offset into the allowed band for its direction.
///
/// Positive offsets reveal the left panel and are clamped to `[0, left_max]`;
/// negative offsets reveal the right panel and are clamped to `[-right_max, 0]`.
/// A zero extent on either side pins the offset at center for that direction.
pub fn clamp_to_side(offset: f32, left_max: f32, right_max: f32) -> f32 {
    if offset > 0.0 {
        offset.clamp(0.0, left_max)
    } else if offset < 0.0 {
        offset.clamp(-right_max, 0.0)
    } else {
        offset
    }
}

/// Fraction of the swipe extent covered by `offset`, clamped to `[0, 1]`.
///
/// Returns 0 for an unmeasured (zero) extent so thresholds derived from it
/// stay unreachable.
pub fn reveal_progress(offset: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        (offset / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Picks the action slot nearest to the drag distance.
///
/// Linear interpolation over the index range, `round((count - 1) * progress)`,
/// clamped into `[0, count - 1]`. Not a hit-test of slot boundaries.
pub fn nearest_action_index(count: usize, progress: f32) -> usize {
    if count == 0 {
        return 0;
    }
    let raw = ((count - 1) as f32 * progress.clamp(0.0, 1.0)).round() as usize;
    raw.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_side_extents() {
        assert_eq!(clamp_to_side(120.0, 100.0, 80.0), 100.0);
        assert_eq!(clamp_to_side(-120.0, 100.0, 80.0), -80.0);
        assert_eq!(clamp_to_side(40.0, 100.0, 80.0), 40.0);
        assert_eq!(clamp_to_side(0.0, 100.0, 80.0), 0.0);
    }

    #[test]
    fn zero_extent_pins_offset_at_center() {
        assert_eq!(clamp_to_side(50.0, 0.0, 80.0), 0.0);
        assert_eq!(clamp_to_side(-50.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn progress_is_clamped_and_safe_for_zero_extent() {
        assert_eq!(reveal_progress(50.0, 100.0), 0.5);
        assert_eq!(reveal_progress(150.0, 100.0), 1.0);
        assert_eq!(reveal_progress(50.0, 0.0), 0.0);
    }

    #[test]
    fn index_selection_rounds_to_nearest() {
        // Two slots: anything past half the extent selects the far one.
        assert_eq!(nearest_action_index(2, 0.7), 1);
        assert_eq!(nearest_action_index(2, 0.4), 0);
        // Three slots: midpoint lands on the middle slot.
        assert_eq!(nearest_action_index(3, 0.5), 1);
        assert_eq!(nearest_action_index(3, 1.0), 2);
    }

    #[test]
    fn index_is_clamped_into_valid_range() {
        assert_eq!(nearest_action_index(1, 1.0), 0);
        assert_eq!(nearest_action_index(0, 0.5), 0);
    }
}
