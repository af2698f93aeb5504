//! Responsive layout selection logic.
//!
//! Pure decision helpers: given measured screen dimensions (in dp), pick a
//! size class, a breakpoint value, or a navigation mode. Rendering the chosen
//! variant is the host's job.

pub mod breakpoint;
pub mod nav;
pub mod size_class;

pub use breakpoint::{grid_columns, Breakpoints};
pub use nav::{AdaptiveNavConfig, NavMode};
pub use size_class::{ScreenDimensions, SizeRange};
