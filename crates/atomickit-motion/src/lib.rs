//! Motion specifications attached to gesture settle commands.
//!
//! These are pure parameter carriers: the gesture trackers decide *where* a
//! surface should come to rest and hand the host one of these specs describing
//! *how* the host's animation system should get it there. No interpolation or
//! curve evaluation happens in this crate.

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy),
    /// > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
}

impl SpringSpec {
    /// Spring with default material design values.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
        }
    }

    /// Slightly bouncy, slow spring used for sheet entrance/exit.
    pub fn low_bouncy() -> Self {
        Self {
            damping_ratio: 0.75,
            stiffness: 200.0,
        }
    }

    /// Firm spring used for swipe snap animations.
    pub fn swipe_snap() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 800.0,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Fixed-duration animation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
}

impl TweenSpec {
    pub fn new(duration_millis: u64) -> Self {
        Self { duration_millis }
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            duration_millis: 300,
        }
    }
}

/// Motion specification for an animated settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionSpec {
    /// Physics-based spring animation.
    Spring(SpringSpec),
    /// Time-based tween animation.
    Tween(TweenSpec),
}

impl Default for MotionSpec {
    fn default() -> Self {
        MotionSpec::Spring(SpringSpec::default_spring())
    }
}
