//! Landing rotation
//!
//! The wheel turns under a fixed pointer at 0°. Rotation is applied as a
//! decrease (counter-clockwise), so the wheel-local angle under the pointer
//! is `normalize(-rotation)`. A spin lands when that angle equals the center
//! of the target slice.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WheelError};
use crate::normalize_degrees;

/// Planned motion for one spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingPlan {
    /// Rotation when the spin was requested
    pub start_rotation: f64,
    /// Amount the rotation decreases by
    pub delta: f64,
    /// Rotation at rest
    pub target_rotation: f64,
    /// Slot that ends under the pointer
    pub target_index: usize,
}

/// Angular center of slot `index` on a wheel of `segment_count` slots
#[inline]
pub fn segment_center(index: usize, segment_count: usize) -> f64 {
    let seg = 360.0 / segment_count as f64;
    index as f64 * seg + seg / 2.0
}

/// Wheel-local angle currently under the pointer, in [0, 360)
#[inline]
pub fn pointer_angle(rotation: f64) -> f64 {
    normalize_degrees(-rotation)
}

/// Slot under the pointer for a rendered rotation.
///
/// Informational only: spin outcomes come from the plan, not from the angle
/// the animation happens to stop at.
pub fn segment_at_pointer(rotation: f64, segment_count: usize) -> Result<usize> {
    if segment_count == 0 {
        return Err(WheelError::InvalidSegmentCount);
    }
    let seg = 360.0 / segment_count as f64;
    let index = (pointer_angle(rotation) / seg).floor() as usize;
    Ok(index.min(segment_count - 1))
}

/// Compute the rotation that parks `target_index` under the pointer.
///
/// Works from any accumulated rotation: the current angle is reduced mod 360
/// before planning, so repeated spins never assume a canonical start.
/// `extra_full_spins` only adds whole turns.
pub fn compute_landing_rotation(
    current_rotation: f64,
    target_index: usize,
    segment_count: usize,
    extra_full_spins: u32,
) -> Result<LandingPlan> {
    if segment_count == 0 {
        return Err(WheelError::InvalidSegmentCount);
    }
    if target_index >= segment_count {
        return Err(WheelError::TargetOutOfRange {
            index: target_index,
            count: segment_count,
        });
    }
    if !current_rotation.is_finite() {
        return Err(WheelError::NonFiniteRotation(current_rotation));
    }

    let current = normalize_degrees(current_rotation);
    let delta = current + segment_center(target_index, segment_count) + extra_full_spins as f64 * 360.0;

    Ok(LandingPlan {
        start_rotation: current_rotation,
        delta,
        target_rotation: current_rotation - delta,
        target_index,
    })
}
