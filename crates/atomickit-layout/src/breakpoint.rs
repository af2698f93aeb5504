//! Sorted width-breakpoint resolution.

use std::cmp::Ordering;

use log::debug;

/// An ascending list of `(min_width_dp, value)` breakpoints.
///
/// Resolution picks the last entry whose min width fits the measured width,
/// falling back to the first entry when the width is below every breakpoint.
#[derive(Debug, Clone)]
pub struct Breakpoints<T> {
    entries: Vec<(f32, T)>,
}

impl<T> Breakpoints<T> {
    pub fn new(mut entries: Vec<(f32, T)>) -> Self {
        entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the value for a measured width in dp.
    pub fn resolve(&self, width_dp: f32) -> Option<&T> {
        let entry = self
            .entries
            .iter()
            .rev()
            .find(|(min_width, _)| *min_width <= width_dp)
            .or_else(|| self.entries.first());
        if let Some((min_width, _)) = entry {
            debug!("width {width_dp} dp resolved to breakpoint {min_width}");
        }
        entry.map(|(_, value)| value)
    }
}

/// Default responsive-grid column counts: 1/2/3/4 columns at 0/600/900/1200 dp.
pub fn grid_columns() -> Breakpoints<usize> {
    Breakpoints::new(vec![(0.0, 1), (600.0, 2), (900.0, 3), (1200.0, 4)])
}
