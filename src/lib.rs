//! Prize Wheel - geometry and landing engine for a spinning prize wheel
//!
//! Core modules:
//! - `wheel`: Pure wheel math (slice paths, landing rotation, target selection) and the widget state
//! - `anim`: Easing curves and the animation driver capability
//! - `renderer`: SVG output for the presentation shell
//! - `platform`: Browser binding (wasm32 only)
//! - `settings`: Wheel configuration and presets

pub mod anim;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod wheel;

pub use error::{Result, WheelError};
pub use settings::{WheelConfig, WheelStyle};

use glam::DVec2;

/// Wheel configuration constants
pub mod consts {
    /// Slots on the reference wheel
    pub const SEGMENT_COUNT: usize = 8;
    /// Cosmetic full turns added to every spin
    pub const EXTRA_FULL_SPINS: u32 = 5;
    /// Spin animation length in seconds
    pub const SPIN_DURATION_S: f64 = 4.0;

    /// Fixed animation timestep (120 Hz)
    pub const ANIM_DT: f64 = 1.0 / 120.0;

    /// Default wheel dimensions (SVG user units)
    pub const OUTER_RADIUS: f64 = 150.0;
    pub const INNER_RADIUS: f64 = 60.0;
    pub const GAP_DEGREES: f64 = 2.0;
    /// Hub radius of a tapered wedge when no inner radius is given, as a fraction of the outer radius
    pub const DEFAULT_HUB_FRACTION: f64 = 0.08;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let mut r = angle % 360.0;
    if r < 0.0 {
        r += 360.0;
    }
    // Tiny negatives round up to exactly 360; -0.0 falls through as zero
    if r >= 360.0 || r == 0.0 { 0.0 } else { r }
}

/// Convert polar (r, degrees clockwise from up) to SVG cartesian (y down)
#[inline]
pub fn polar_to_cartesian(r: f64, degrees: f64) -> DVec2 {
    let theta = degrees.to_radians();
    DVec2::new(r * theta.sin(), -r * theta.cos())
}

/// Convert SVG cartesian (y down) to polar (r, degrees clockwise from up in [0, 360))
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), normalize_degrees(pos.x.atan2(-pos.y).to_degrees()))
}
