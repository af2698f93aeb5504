//! Swipe-to-reveal action tracking for list rows.
//!
//! Maps horizontal drag input to a content offset among three resting zones
//! (left actions revealed, centered, right actions revealed). On release the
//! gesture resolves in two phases: a snap phase choosing the resting offset,
//! then an action-fire phase that selects the action nearest to the drag
//! distance and, having fired it, forces the row back to center.

use std::fmt;
use std::rc::Rc;

use atomickit_motion::{MotionSpec, SpringSpec};
use log::debug;
use smallvec::SmallVec;

use crate::geometry::{clamp_to_side, nearest_action_index, reveal_progress};
use crate::session::GesturePhase;

/// Default fraction of the swipe extent past which a release fires/reveals.
pub const DEFAULT_THRESHOLD_FRACTION: f32 = 0.4;

/// Which side of the row an action panel lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeSide {
    /// Revealed by dragging the content to the right (positive offsets).
    Left,
    /// Revealed by dragging the content to the left (negative offsets).
    Right,
}

/// One swipe-revealed command slot.
///
/// Icon and colors are host styling concerns; the slot carries an identity,
/// a relative width weight for proportional sizing, and the trigger callback.
#[derive(Clone)]
pub struct ActionSlot {
    pub id: u64,
    pub weight: f32,
    on_action: Rc<dyn Fn()>,
}

impl ActionSlot {
    pub fn new(id: u64, on_action: impl Fn() + 'static) -> Self {
        Self {
            id,
            weight: 1.0,
            on_action: Rc::new(on_action),
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Invokes the slot's trigger callback.
    pub fn fire(&self) {
        (self.on_action)();
    }
}

impl fmt::Debug for ActionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSlot")
            .field("id", &self.id)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Immutable swipe configuration owned by the calling view.
#[derive(Clone)]
pub struct SwipeConfig {
    /// Actions revealed when swiping from left to right, in panel order.
    pub left_actions: Vec<ActionSlot>,
    /// Actions revealed when swiping from right to left, in panel order.
    pub right_actions: Vec<ActionSlot>,
    /// Fraction of the swipe extent at which a release fires/reveals.
    pub threshold: f32,
    /// Motion attached to snap animations.
    pub motion: MotionSpec,
    /// Maximum swipe extent in pixels, or `None` to use the content width.
    pub max_swipe_extent: Option<f32>,
    /// When false, all gesture input is ignored and the offset stays put.
    pub enabled: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            left_actions: Vec::new(),
            right_actions: Vec::new(),
            threshold: DEFAULT_THRESHOLD_FRACTION,
            motion: MotionSpec::Spring(SpringSpec::swipe_snap()),
            max_swipe_extent: None,
            enabled: true,
        }
    }
}

impl SwipeConfig {
    /// Whether both action lists carry the same slots in the same order.
    ///
    /// Identity is the slot `id` sequence per side; changing it mid-gesture
    /// discards the session.
    fn same_action_identity(&self, other: &SwipeConfig) -> bool {
        fn ids(slots: &[ActionSlot]) -> impl Iterator<Item = u64> + '_ {
            slots.iter().map(|slot| slot.id)
        }
        ids(&self.left_actions).eq(ids(&other.left_actions))
            && ids(&self.right_actions).eq(ids(&other.right_actions))
    }
}

/// Command or signal emitted by the swipe tracker for the host to execute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// Animate the content offset toward `target` with the given motion.
    AnimateTo { target: f32, spec: MotionSpec },
    /// Move the content offset to `target` immediately, no animation.
    SnapTo { target: f32 },
    /// The action at `index` on `side` was triggered. At most once per release.
    ActionFired { side: SwipeSide, index: usize },
}

/// Commands produced by one tracker operation, in emission order.
pub type SwipeCommands = SmallVec<[SwipeEvent; 2]>;

/// Drag interpreter for a swipeable list row.
///
/// Positive offsets reveal the left action panel, negative offsets the right
/// one. The offset is always clamped to the side extents; a side with no
/// actions has extent zero, as does the whole row until the content width is
/// measured (thresholds stay unreachable until then).
pub struct SwipeTracker {
    config: SwipeConfig,
    content_width: f32,
    offset: f32,
    phase: GesturePhase,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            content_width: 0.0,
            offset: 0.0,
            phase: GesturePhase::Idle,
        }
    }

    /// Current content offset in pixels from center.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Reveal progress of the left panel, `[0, 1]`.
    pub fn left_progress(&self) -> f32 {
        reveal_progress(self.offset, self.left_max())
    }

    /// Reveal progress of the right panel, `[0, 1]`.
    pub fn right_progress(&self) -> f32 {
        reveal_progress(-self.offset, self.right_max())
    }

    /// Measurement callback from the host layout.
    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = width.max(0.0);
    }

    /// Replaces the configuration.
    ///
    /// When the action lists change identity (different set or order of
    /// slots), the offset snaps to center without animation and any gesture in
    /// progress is discarded. Other fields (threshold, motion, enabled) update
    /// in place without disturbing the session.
    pub fn set_config(&mut self, config: SwipeConfig) -> SwipeCommands {
        let mut commands = SwipeCommands::new();
        let identity_changed = !self.config.same_action_identity(&config);
        self.config = config;
        if identity_changed {
            debug!("swipe action lists changed, resetting offset");
            self.offset = 0.0;
            self.phase = GesturePhase::Idle;
            commands.push(SwipeEvent::SnapTo { target: 0.0 });
        }
        commands
    }

    /// Marks the beginning of a drag session, overriding any in-flight settle.
    pub fn drag_start(&mut self) {
        if !self.config.enabled {
            return;
        }
        self.phase = GesturePhase::Dragging;
    }

    /// Seeds the tracked offset from the host's live (possibly mid-animation)
    /// value when a new drag interrupts a settle animation.
    pub fn sync_offset(&mut self, live_offset: f32) {
        self.offset = live_offset;
    }

    /// Applies one drag delta, clamping to the side extents.
    ///
    /// Nothing fires during the drag; decisions happen on release.
    pub fn drag_by(&mut self, delta: f32) -> SwipeCommands {
        let commands = SwipeCommands::new();
        if !self.config.enabled {
            return commands;
        }
        self.phase = GesturePhase::Dragging;
        self.offset = clamp_to_side(self.offset + delta, self.left_max(), self.right_max());
        commands
    }

    /// Resolves the gesture on release.
    ///
    /// Snap phase: past the threshold the panel stays fully revealed,
    /// otherwise the row returns to center. Fire phase (evaluated on the
    /// pre-snap offset, against the same threshold): the nearest action
    /// fires and the row returns to center regardless of the snap outcome.
    /// A release already at center emits nothing.
    pub fn drag_end(&mut self) -> SwipeCommands {
        let mut commands = SwipeCommands::new();
        if !self.config.enabled {
            return commands;
        }

        let released_at = self.offset;
        if released_at == 0.0 {
            self.phase = GesturePhase::Idle;
            return commands;
        }

        let left_max = self.left_max();
        let right_max = self.right_max();
        let left_threshold = left_max * self.config.threshold;
        let right_threshold = right_max * self.config.threshold;

        // Snap phase: strict threshold comparison.
        let mut target = if released_at > 0.0 {
            if left_max > 0.0 && released_at > left_threshold {
                left_max
            } else {
                0.0
            }
        } else if right_max > 0.0 && -released_at > right_threshold {
            -right_max
        } else {
            0.0
        };

        // Fire phase: inclusive comparison against the same threshold, using
        // the pre-snap offset. Firing forces a return to center.
        if left_max > 0.0 && released_at >= left_threshold && released_at > 0.0 {
            let progress = reveal_progress(released_at, left_max);
            let index = nearest_action_index(self.config.left_actions.len(), progress);
            debug!("swipe fired left action {} at progress {}", index, progress);
            self.config.left_actions[index].fire();
            commands.push(SwipeEvent::ActionFired {
                side: SwipeSide::Left,
                index,
            });
            target = 0.0;
        } else if right_max > 0.0 && -released_at >= right_threshold && released_at < 0.0 {
            let progress = reveal_progress(-released_at, right_max);
            let index = nearest_action_index(self.config.right_actions.len(), progress);
            debug!("swipe fired right action {} at progress {}", index, progress);
            self.config.right_actions[index].fire();
            commands.push(SwipeEvent::ActionFired {
                side: SwipeSide::Right,
                index,
            });
            target = 0.0;
        }

        self.offset = target;
        commands.push(SwipeEvent::AnimateTo {
            target,
            spec: self.config.motion,
        });
        self.phase = GesturePhase::Settling;
        commands
    }

    fn max_extent(&self) -> f32 {
        self.config
            .max_swipe_extent
            .unwrap_or(self.content_width)
            .max(0.0)
    }

    fn left_max(&self) -> f32 {
        if self.config.left_actions.is_empty() {
            0.0
        } else {
            self.max_extent()
        }
    }

    fn right_max(&self) -> f32 {
        if self.config.right_actions.is_empty() {
            0.0
        } else {
            self.max_extent()
        }
    }
}

#[cfg(test)]
#[path = "tests/swipe_tests.rs"]
mod tests;
