//! Wheel widget state
//!
//! A `Wheel` owns its rotation exclusively. Rotation starts at 0, only spins
//! change it, and it accumulates across spins instead of wrapping.

use serde::{Deserialize, Serialize};

use super::geometry::{SlicePath, compute_slice_paths};
use super::landing::{LandingPlan, compute_landing_rotation, segment_at_pointer};
use super::segment::{SegmentItem, normalize_items};
use super::select::SpinRng;
use crate::anim::{Animator, FixedStepAnimator, Tween};
use crate::error::{Result, WheelError};
use crate::settings::{SpinPolicy, WheelConfig};

/// Result of one completed spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub selected_index: usize,
    /// Slot at that index, possibly an empty one
    pub selected_item: SegmentItem,
}

/// Completion callback: `(selected_index, selected_item)`
pub type StopCallback = Box<dyn FnMut(usize, &SegmentItem)>;

/// A prize wheel and its spin animation
pub struct Wheel<A: Animator = FixedStepAnimator> {
    config: WheelConfig,
    items: Vec<SegmentItem>,
    rotation: f64,
    animator: A,
    /// Outcome of the live spin, reported when it settles
    pending: Option<SpinOutcome>,
    rng: SpinRng,
    on_stop: Option<StopCallback>,
    spins_completed: u64,
}

impl Wheel<FixedStepAnimator> {
    /// Wheel with the default animator and a system-seeded random source
    pub fn new(config: WheelConfig, items: &[SegmentItem]) -> Result<Self> {
        Self::with_parts(config, items, FixedStepAnimator::new(), SpinRng::from_entropy())
    }

    /// Wheel with the default animator and an injected random source
    pub fn with_rng(config: WheelConfig, items: &[SegmentItem], rng: SpinRng) -> Result<Self> {
        Self::with_parts(config, items, FixedStepAnimator::new(), rng)
    }
}

impl<A: Animator> Wheel<A> {
    /// Wheel driven by a host-provided animator
    pub fn with_parts(config: WheelConfig, items: &[SegmentItem], animator: A, rng: SpinRng) -> Result<Self> {
        config.validate()?;
        let items = normalize_items(items, config.segment_count);
        log::debug!(
            "Wheel created: {} slots ({} empty)",
            items.len(),
            items.iter().filter(|i| i.is_empty()).count()
        );
        Ok(Self {
            config,
            items,
            rotation: 0.0,
            animator,
            pending: None,
            rng,
            on_stop: None,
            spins_completed: 0,
        })
    }

    /// Register the completion callback
    pub fn set_on_stop(&mut self, callback: impl FnMut(usize, &SegmentItem) + 'static) {
        self.on_stop = Some(Box::new(callback));
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Slots in angular order, always exactly `segment_count` long
    pub fn items(&self) -> &[SegmentItem] {
        &self.items
    }

    /// Current (live) rotation in degrees
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.animator.is_running()
    }

    /// Spins that ran to completion
    pub fn spins_completed(&self) -> u64 {
        self.spins_completed
    }

    /// Slice paths for rendering, tinted per the configured policy
    pub fn slices(&self) -> Result<Vec<SlicePath>> {
        compute_slice_paths(&self.config.slice_spec(), &self.config.tint, &self.items)
    }

    /// Slot the pointer is over at the current rendered angle
    pub fn pointer_index(&self) -> Result<usize> {
        segment_at_pointer(self.rotation, self.config.segment_count)
    }

    /// Spin to a uniformly random slot
    pub fn spin(&mut self) -> Result<LandingPlan> {
        self.check_policy()?;
        let target = self.rng.select(self.config.segment_count)?;
        self.spin_to(target)
    }

    /// Spin so that `target_index` comes to rest under the pointer.
    ///
    /// With `SpinPolicy::Retarget` a spin requested mid-flight starts from the
    /// live rotation and replaces the pending outcome.
    pub fn spin_to(&mut self, target_index: usize) -> Result<LandingPlan> {
        self.check_policy()?;
        let plan = compute_landing_rotation(
            self.rotation,
            target_index,
            self.config.segment_count,
            self.config.extra_full_spins,
        )?;

        if self.animator.is_running() {
            log::debug!("Retargeting live spin from {:.2}°", self.rotation);
        }
        log::debug!(
            "Spin planned: target={} delta={:.2} rotation {:.2} -> {:.2}",
            plan.target_index,
            plan.delta,
            plan.start_rotation,
            plan.target_rotation
        );

        self.pending = Some(SpinOutcome {
            selected_index: target_index,
            selected_item: self.items[target_index].clone(),
        });
        self.animator.animate(Tween::new(
            self.rotation,
            plan.target_rotation,
            self.config.spin_duration_s,
            self.config.ease,
        ));
        Ok(plan)
    }

    /// Advance the spin animation by `dt` seconds.
    ///
    /// Returns the outcome on the frame the spin settles, after handing it to
    /// the stop callback. The outcome is the planned one, never re-derived from
    /// the final angle.
    pub fn update(&mut self, dt: f64) -> Option<SpinOutcome> {
        let frame = self.animator.step(dt)?;
        self.rotation = frame.value;
        if !frame.finished {
            return None;
        }

        let outcome = self.pending.take()?;
        self.spins_completed += 1;
        log::info!(
            "Wheel stopped on slot {} ({})",
            outcome.selected_index,
            outcome.selected_item.label.as_deref().unwrap_or("empty")
        );
        if let Some(on_stop) = self.on_stop.as_mut() {
            on_stop(outcome.selected_index, &outcome.selected_item);
        }
        Some(outcome)
    }

    fn check_policy(&self) -> Result<()> {
        if self.config.spin_policy == SpinPolicy::IgnoreWhileSpinning && self.animator.is_running() {
            log::warn!("Spin ignored: wheel is already spinning");
            return Err(WheelError::AlreadySpinning);
        }
        Ok(())
    }
}

impl<A: Animator + std::fmt::Debug> std::fmt::Debug for Wheel<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wheel")
            .field("config", &self.config)
            .field("items", &self.items)
            .field("rotation", &self.rotation)
            .field("animator", &self.animator)
            .field("pending", &self.pending)
            .field("spins_completed", &self.spins_completed)
            .finish_non_exhaustive()
    }
}
