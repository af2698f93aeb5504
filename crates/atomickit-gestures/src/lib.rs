//! Gesture-to-decision trackers for draggable AtomicKit surfaces.
//!
//! Two trackers share one contract: the host surface feeds them signed scalar
//! drag deltas while a pointer is down, then a single drag-end signal. The
//! tracker keeps the live offset of the surface and answers with commands
//! (snap here, animate there, an action fired, the sheet was dismissed) that
//! the host's rendering and animation layer executes. No pixels, curves or
//! input plumbing live here.
//!
//! - [`SheetTracker`] interprets vertical drags on a bottom sheet and decides
//!   between snap-back and dismissal.
//! - [`SwipeTracker`] interprets horizontal drags on a list row, revealing
//!   action panels and firing the action nearest to the drag distance.

pub mod geometry;
pub mod session;
pub mod sheet;
pub mod swipe;

pub use session::GesturePhase;
pub use sheet::{SheetCommands, SheetEvent, SheetTracker};
pub use swipe::{ActionSlot, SwipeCommands, SwipeConfig, SwipeEvent, SwipeSide, SwipeTracker};
