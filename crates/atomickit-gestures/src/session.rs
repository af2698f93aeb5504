//! Lifecycle of a single pointer-down-to-pointer-up interaction.

/// Phase of a gesture session.
///
/// A session lives strictly within one continuous drag: `Idle` until the first
/// delta arrives, `Dragging` while deltas stream in, `Settling` once a resting
/// destination was chosen on release. Settling is fire-and-forget from the
/// tracker's perspective: the host animates toward the destination, and a new
/// drag may begin before that animation finishes (the host then seeds the
/// tracker with the live mid-animation offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

impl GesturePhase {
    pub fn is_dragging(self) -> bool {
        self == GesturePhase::Dragging
    }
}
