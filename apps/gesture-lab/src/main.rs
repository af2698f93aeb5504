//! Replays scripted pointer traces through the gesture trackers and logs
//! every command they emit, standing in for the AtomicKit demo screens.

use anyhow::Result;
use log::info;

use atomickit_gestures::{ActionSlot, SheetTracker, SwipeConfig, SwipeTracker};
use atomickit_layout::{grid_columns, AdaptiveNavConfig, ScreenDimensions, SizeRange};

fn replay_sheet(label: &str, deltas: &[f32], release: bool) {
    info!("--- sheet trace: {label} ---");
    let mut sheet = SheetTracker::new();
    sheet.set_sheet_height(480.0);
    for command in sheet.set_visible(true) {
        info!("sheet <- {command:?}");
    }

    sheet.drag_start();
    for &delta in deltas {
        for command in sheet.drag_by(delta) {
            info!("sheet <- {command:?} (offset {})", sheet.offset());
        }
    }
    if release {
        for command in sheet.drag_end() {
            info!("sheet <- {command:?}");
        }
    }
    info!("sheet resting offset: {}", sheet.offset());
}

fn replay_swipe(label: &str, config: SwipeConfig, deltas: &[f32]) {
    info!("--- swipe trace: {label} ---");
    let mut row = SwipeTracker::new(config);
    row.set_content_width(360.0);

    row.drag_start();
    for &delta in deltas {
        let _ = row.drag_by(delta);
    }
    info!(
        "released at offset {} (right progress {:.2})",
        row.offset(),
        row.right_progress()
    );
    for command in row.drag_end() {
        info!("swipe <- {command:?}");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // A timid drag that stays under every threshold snaps back.
    replay_sheet("timid drag, snaps back", &[40.0, 30.0, 20.0], true);
    // A determined downward drag dismisses before the finger lifts.
    replay_sheet("determined drag, dismisses mid-drag", &[90.0, 80.0], false);

    let delete = SwipeConfig {
        right_actions: vec![ActionSlot::new(1, || info!("delete fired"))],
        ..Default::default()
    };
    replay_swipe("swipe to delete", delete, &[-120.0, -80.0]);

    let archive_or_delete = SwipeConfig {
        right_actions: vec![
            ActionSlot::new(1, || info!("archive fired")),
            ActionSlot::new(2, || info!("delete fired")),
        ],
        max_swipe_extent: Some(100.0),
        ..Default::default()
    };
    replay_swipe("proportional pick of two actions", archive_or_delete, &[-70.0]);

    let nav = AdaptiveNavConfig::default();
    let columns = grid_columns();
    for (width, height) in [(360.0, 800.0), (720.0, 1024.0), (1280.0, 800.0)] {
        let dimensions = ScreenDimensions {
            width_dp: width,
            height_dp: height,
            width_px: (width * 2.0) as u32,
            height_px: (height * 2.0) as u32,
        };
        info!(
            "{width}x{height} dp -> nav {:?}, {} grid columns, compact: {}",
            nav.mode_for_width(width),
            columns.resolve(width).copied().unwrap_or(1),
            SizeRange::COMPACT.matches_dimensions(&dimensions)
        );
    }

    Ok(())
}
