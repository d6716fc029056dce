//! Wheel engine
//!
//! Geometry, landing and selection are pure functions; `state` wraps them
//! into a widget that owns a rotation and an animation. Nothing in here
//! touches a platform:
//! - Seeded RNG only
//! - Angles in degrees, clockwise from the pointer
//! - Outcomes come from the plan, never from the rendered angle

pub mod geometry;
pub mod landing;
pub mod segment;
pub mod select;
pub mod state;

pub use geometry::{SlicePath, SliceShape, SliceSpec, TintPolicy, compute_slice_paths};
pub use landing::{LandingPlan, compute_landing_rotation, pointer_angle, segment_at_pointer, segment_center};
pub use segment::{SegmentItem, normalize_items};
pub use select::{SpinRng, select_random_target};
pub use state::{SpinOutcome, StopCallback, Wheel};
