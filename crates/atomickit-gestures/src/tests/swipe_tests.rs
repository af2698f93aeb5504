use super::*;

use std::cell::RefCell;
use std::rc::Rc;

/// Records the ids of fired actions for assertion.
fn recording_slot(id: u64, fired: &Rc<RefCell<Vec<u64>>>) -> ActionSlot {
    let fired = Rc::clone(fired);
    ActionSlot::new(id, move || fired.borrow_mut().push(id))
}

fn measured_tracker(config: SwipeConfig, width: f32) -> SwipeTracker {
    let mut tracker = SwipeTracker::new(config);
    tracker.set_content_width(width);
    tracker
}

fn animate_target(commands: &SwipeCommands) -> Option<f32> {
    commands.iter().find_map(|c| match c {
        SwipeEvent::AnimateTo { target, .. } => Some(*target),
        _ => None,
    })
}

fn fired_action(commands: &SwipeCommands) -> Option<(SwipeSide, usize)> {
    commands.iter().find_map(|c| match c {
        SwipeEvent::ActionFired { side, index } => Some((*side, *index)),
        _ => None,
    })
}

#[test]
fn round_trip_back_to_center_emits_nothing() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(-100.0);
    assert_eq!(tracker.offset(), -100.0);
    let _ = tracker.drag_by(100.0);
    assert_eq!(tracker.offset(), 0.0);

    let commands = tracker.drag_end();
    assert!(commands.is_empty(), "already at rest: no animation, no fire");
    assert!(fired.borrow().is_empty());
    assert_eq!(tracker.phase(), GesturePhase::Idle);
}

#[test]
fn proportional_index_picks_second_of_two_right_actions() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(10, &fired), recording_slot(11, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(-70.0);
    let commands = tracker.drag_end();

    // progress 0.7 -> round(1 * 0.7) = 1: the second action.
    assert_eq!(fired_action(&commands), Some((SwipeSide::Right, 1)));
    assert_eq!(*fired.borrow(), vec![11]);
    // Firing forces the return to center, overriding the full reveal.
    assert_eq!(animate_target(&commands), Some(0.0));
    assert_eq!(tracker.offset(), 0.0);
}

#[test]
fn below_threshold_snaps_back_without_firing() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired), recording_slot(2, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(-20.0);
    let commands = tracker.drag_end();

    assert_eq!(fired_action(&commands), None);
    assert!(fired.borrow().is_empty());
    assert_eq!(animate_target(&commands), Some(0.0));
}

#[test]
fn fire_overrides_the_reveal_snap() {
    // Dragged all the way: the snap phase alone would rest fully revealed,
    // but the fire phase shares the threshold and wins.
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        left_actions: vec![recording_slot(7, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(100.0);
    let commands = tracker.drag_end();

    assert_eq!(fired_action(&commands), Some((SwipeSide::Left, 0)));
    assert_eq!(animate_target(&commands), Some(0.0));
}

#[test]
fn release_exactly_at_threshold_fires() {
    // Snap uses a strict comparison, fire an inclusive one; at exactly the
    // threshold the snap says center and the fire still triggers.
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(-40.0);
    let commands = tracker.drag_end();

    assert_eq!(fired_action(&commands), Some((SwipeSide::Right, 0)));
    assert_eq!(animate_target(&commands), Some(0.0));
}

#[test]
fn empty_side_clamps_to_center() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(50.0); // no left actions: pinned at center
    assert_eq!(tracker.offset(), 0.0);
    let commands = tracker.drag_end();
    assert!(commands.is_empty());
    assert!(fired.borrow().is_empty());
}

#[test]
fn unmeasured_width_never_fires() {
    // Extent is zero until measured: the offset stays pinned and the
    // zero-valued threshold must not be treated as reached.
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        ..Default::default()
    };
    let mut tracker = SwipeTracker::new(config);

    tracker.drag_start();
    let _ = tracker.drag_by(-50.0);
    assert_eq!(tracker.offset(), 0.0);
    let commands = tracker.drag_end();
    assert!(commands.is_empty());
    assert!(fired.borrow().is_empty());
}

#[test]
fn explicit_max_extent_overrides_content_width() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        max_swipe_extent: Some(150.0),
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 300.0);

    tracker.drag_start();
    let _ = tracker.drag_by(-400.0);
    assert_eq!(tracker.offset(), -150.0);
}

#[test]
fn changing_action_identity_mid_gesture_resets_without_animation() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired), recording_slot(2, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(-60.0);

    // One action removed: identity changed.
    let new_config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        ..Default::default()
    };
    let commands = tracker.set_config(new_config);
    assert_eq!(commands.as_slice(), &[SwipeEvent::SnapTo { target: 0.0 }]);
    assert_eq!(tracker.offset(), 0.0);
    assert_eq!(tracker.phase(), GesturePhase::Idle);
}

#[test]
fn same_action_identity_updates_config_in_place() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(-30.0);

    let retuned = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        threshold: 0.2,
        ..Default::default()
    };
    let commands = tracker.set_config(retuned);
    assert!(commands.is_empty(), "same slots: session survives");
    assert_eq!(tracker.offset(), -30.0);
    assert_eq!(tracker.config().threshold, 0.2);
}

#[test]
fn disabling_mid_drag_freezes_the_offset() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![recording_slot(1, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config.clone(), 100.0);

    tracker.drag_start();
    let _ = tracker.drag_by(-30.0);

    let disabled = SwipeConfig {
        enabled: false,
        ..config.clone()
    };
    let _ = tracker.set_config(disabled);
    let ignored = tracker.drag_by(-20.0);
    assert!(ignored.is_empty());
    assert_eq!(tracker.offset(), -30.0);
    assert!(tracker.drag_end().is_empty());

    let _ = tracker.set_config(config);
    let _ = tracker.drag_by(-10.0);
    assert_eq!(tracker.offset(), -40.0);
}

#[test]
fn three_slots_interpolate_over_the_index_range() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        right_actions: vec![
            recording_slot(1, &fired),
            recording_slot(2, &fired),
            recording_slot(3, &fired),
        ],
        ..Default::default()
    };

    // Half the extent lands on the middle slot.
    let mut tracker = measured_tracker(config.clone(), 100.0);
    tracker.drag_start();
    let _ = tracker.drag_by(-50.0);
    let commands = tracker.drag_end();
    assert_eq!(fired_action(&commands), Some((SwipeSide::Right, 1)));

    // Full extent lands on the last slot.
    let mut tracker = measured_tracker(config, 100.0);
    tracker.drag_start();
    let _ = tracker.drag_by(-100.0);
    let commands = tracker.drag_end();
    assert_eq!(fired_action(&commands), Some((SwipeSide::Right, 2)));
}

#[test]
fn reveal_progress_tracks_the_dragged_side() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let config = SwipeConfig {
        left_actions: vec![recording_slot(1, &fired)],
        right_actions: vec![recording_slot(2, &fired)],
        ..Default::default()
    };
    let mut tracker = measured_tracker(config, 200.0);

    tracker.drag_start();
    let _ = tracker.drag_by(50.0);
    assert_eq!(tracker.left_progress(), 0.25);
    assert_eq!(tracker.right_progress(), 0.0);
}
