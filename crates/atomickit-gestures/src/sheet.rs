//! Dismissible bottom-sheet drag tracking.
//!
//! Maps vertical drag input plus a discrete visibility flag to a resting sheet
//! offset (0 = fully expanded, `sheet_height` = fully hidden) and a dismiss
//! decision. Dragging upward past the rest position meets resistance; dragging
//! downward far enough dismisses the sheet, possibly before the finger lifts.

use atomickit_motion::{MotionSpec, SpringSpec};
use log::debug;
use smallvec::SmallVec;

use crate::session::GesturePhase;

/// Damping applied to the accumulated offset when dragged past fully expanded.
pub const UPWARD_RESISTANCE: f32 = 0.5;

/// Fraction of the sheet height past which an in-progress drag dismisses
/// immediately, without waiting for release.
pub const MID_DRAG_DISMISS_FRACTION: f32 = 0.3;

/// Fraction of the sheet height past which a released drag dismisses.
///
/// Intentionally larger than [`MID_DRAG_DISMISS_FRACTION`]; the two thresholds
/// serve different moments of the gesture and must not be unified.
pub const RELEASE_DISMISS_FRACTION: f32 = 0.5;

/// Command or signal emitted by the sheet tracker for the host to execute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetEvent {
    /// Animate the sheet offset toward `target` with the given motion.
    AnimateTo { target: f32, spec: MotionSpec },
    /// The sheet was dismissed. Emitted at most once per gesture session.
    Dismissed,
}

/// Commands produced by one tracker operation, in emission order.
pub type SheetCommands = SmallVec<[SheetEvent; 2]>;

/// Drag interpreter for a dismissible bottom sheet.
///
/// The host feeds vertical deltas (positive = downward, toward hidden) and a
/// drag-end signal; the tracker answers with [`SheetEvent`]s. Thresholds are
/// skipped entirely while `sheet_height` is unmeasured (zero): the tracker
/// degrades to pure offset echoing until a measurement arrives.
pub struct SheetTracker {
    offset: f32,
    sheet_height: f32,
    visible: bool,
    dragging_enabled: bool,
    committed_to_dismiss: bool,
    phase: GesturePhase,
    motion: MotionSpec,
}

impl SheetTracker {
    /// Creates a hidden tracker with dragging enabled and no measured height.
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            sheet_height: 0.0,
            visible: false,
            dragging_enabled: true,
            committed_to_dismiss: false,
            phase: GesturePhase::Idle,
            motion: MotionSpec::Spring(SpringSpec::low_bouncy()),
        }
    }

    /// Overrides the motion spec attached to settle commands.
    pub fn with_motion(mut self, motion: MotionSpec) -> Self {
        self.motion = motion;
        self
    }

    /// Current tracked offset in pixels from the fully expanded rest position.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Enables or disables drag handling. While disabled the offset is frozen
    /// and drag input is ignored; visibility changes still apply.
    pub fn set_dragging_enabled(&mut self, enabled: bool) {
        self.dragging_enabled = enabled;
    }

    /// Measurement callback from the host layout. May arrive after a drag has
    /// already started; thresholds become effective from the next delta on.
    pub fn set_sheet_height(&mut self, height: f32) {
        self.sheet_height = height.max(0.0);
    }

    /// Shows or hides the sheet.
    ///
    /// Resets the tracked offset, cancels any in-progress drag session and
    /// emits the entrance/exit animation toward the new resting offset.
    /// A no-op when the visibility already matches.
    pub fn set_visible(&mut self, target: bool) -> SheetCommands {
        let mut commands = SheetCommands::new();
        if self.visible == target {
            return commands;
        }
        self.visible = target;
        self.offset = 0.0;
        self.committed_to_dismiss = false;
        self.phase = GesturePhase::Idle;
        let target_offset = if target { 0.0 } else { self.sheet_height };
        commands.push(SheetEvent::AnimateTo {
            target: target_offset,
            spec: self.motion,
        });
        commands
    }

    /// Marks the beginning of a drag session, overriding any in-flight settle.
    pub fn drag_start(&mut self) {
        if !self.accepts_drag() {
            return;
        }
        self.committed_to_dismiss = false;
        self.phase = GesturePhase::Dragging;
    }

    /// Seeds the tracked offset from the host's live (possibly mid-animation)
    /// value, so a drag that interrupts a settle continues from where the
    /// sheet actually is rather than from its eventual target.
    pub fn sync_offset(&mut self, live_offset: f32) {
        self.offset = live_offset;
    }

    /// Applies one drag delta.
    ///
    /// Offsets at or above the rest position (`new <= 0`) get
    /// [`UPWARD_RESISTANCE`] applied to the accumulated value, step by step.
    /// Downward movement is tracked directly, and crossing
    /// [`MID_DRAG_DISMISS_FRACTION`] of the measured height dismisses the
    /// sheet immediately, once per session.
    pub fn drag_by(&mut self, delta: f32) -> SheetCommands {
        let mut commands = SheetCommands::new();
        if !self.accepts_drag() || self.committed_to_dismiss {
            return commands;
        }
        self.phase = GesturePhase::Dragging;

        let new_offset = self.offset + delta;
        if new_offset <= 0.0 {
            self.offset = new_offset * UPWARD_RESISTANCE;
            return commands;
        }

        self.offset = new_offset;
        if self.sheet_height > 0.0 && self.offset > self.sheet_height * MID_DRAG_DISMISS_FRACTION {
            debug!(
                "sheet dismissed mid-drag at offset {} (height {})",
                self.offset, self.sheet_height
            );
            self.commit_dismiss(&mut commands);
        }
        commands
    }

    /// Resolves the gesture on release.
    ///
    /// Does nothing when a mid-drag dismissal already committed. Otherwise
    /// dismisses past [`RELEASE_DISMISS_FRACTION`] of the measured height, or
    /// settles back to fully expanded.
    pub fn drag_end(&mut self) -> SheetCommands {
        let mut commands = SheetCommands::new();
        if !self.dragging_enabled {
            return commands;
        }
        if self.committed_to_dismiss {
            self.phase = GesturePhase::Idle;
            return commands;
        }
        if !self.visible {
            return commands;
        }

        if self.sheet_height > 0.0 && self.offset > self.sheet_height * RELEASE_DISMISS_FRACTION {
            debug!(
                "sheet dismissed on release at offset {} (height {})",
                self.offset, self.sheet_height
            );
            self.commit_dismiss(&mut commands);
            self.phase = GesturePhase::Settling;
            return commands;
        }

        if self.offset == 0.0 {
            self.phase = GesturePhase::Idle;
            return commands;
        }

        self.offset = 0.0;
        commands.push(SheetEvent::AnimateTo {
            target: 0.0,
            spec: self.motion,
        });
        self.phase = GesturePhase::Settling;
        commands
    }

    fn accepts_drag(&self) -> bool {
        self.dragging_enabled && self.visible
    }

    fn commit_dismiss(&mut self, commands: &mut SheetCommands) {
        self.committed_to_dismiss = true;
        self.visible = false;
        commands.push(SheetEvent::Dismissed);
        commands.push(SheetEvent::AnimateTo {
            target: self.sheet_height,
            spec: self.motion,
        });
    }
}

impl Default for SheetTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
