//! Spin animation
//!
//! The wheel does not own a timer. It hands a [`Tween`] to an [`Animator`]
//! and pulls frames out of it with `step(dt)`, so any host frame loop
//! (requestAnimationFrame, a native render loop, a test) can drive it.
//!
//! Only one tween is live per animator: starting a new one replaces the old
//! one without notifying it.

use serde::{Deserialize, Serialize};

use crate::consts::ANIM_DT;

/// How to map animation time into a normalized [0,1] parameter.
///
/// Spins decelerate, so only ease-out curves are offered. `OutBack` passes
/// the end value and settles back onto it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    OutQuad,
    #[default]
    OutCubic,
    OutQuart,
    OutBack,
}

impl Ease {
    #[inline]
    pub fn sample(self, x: f64) -> f64 {
        let t = x.clamp(0.0, 1.0);
        let u = 1.0 - t;
        match self {
            Ease::Linear => t,
            Ease::OutQuad => 1.0 - u * u,
            Ease::OutCubic => 1.0 - u.powi(3),
            Ease::OutQuart => 1.0 - u.powi(4),
            Ease::OutBack => {
                const OVERSHOOT: f64 = 1.70158;
                1.0 - (OVERSHOOT + 1.0) * u.powi(3) + OVERSHOOT * u * u
            }
        }
    }
}

/// A scalar interpolation from `from` to `to` over `duration_s` seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_s: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_s: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_s,
            ease,
        }
    }

    /// Value after `elapsed_s` seconds. Exactly `to` once the duration has passed.
    pub fn value_at(&self, elapsed_s: f64) -> f64 {
        if self.duration_s <= 0.0 || elapsed_s >= self.duration_s {
            return self.to;
        }
        let t = self.ease.sample(elapsed_s / self.duration_s);
        self.from + (self.to - self.from) * t
    }
}

/// One animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: f64,
    /// Set on the final frame only
    pub finished: bool,
}

/// Drives a tween from a host frame loop
pub trait Animator {
    /// Start interpolating, replacing any live tween
    fn animate(&mut self, tween: Tween);

    /// Whether a tween is live
    fn is_running(&self) -> bool;

    /// Advance by `dt` seconds. `None` when idle.
    ///
    /// The frame with `finished == true` is produced exactly once per tween
    /// that runs to completion, and carries the tween's end value.
    fn step(&mut self, dt: f64) -> Option<Frame>;
}

/// Animator that advances in fixed substeps
///
/// Frame deltas go into an accumulator and are consumed in whole `ANIM_DT`
/// steps. The backlog is always consumed, so a tween ends after its duration
/// whatever the host frame rate.
#[derive(Debug, Clone, Default)]
pub struct FixedStepAnimator {
    tween: Option<Tween>,
    elapsed_s: f64,
    accumulator: f64,
}

impl FixedStepAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds into the live tween
    pub fn elapsed(&self) -> f64 {
        self.elapsed_s
    }
}

impl Animator for FixedStepAnimator {
    fn animate(&mut self, tween: Tween) {
        self.tween = Some(tween);
        self.elapsed_s = 0.0;
        self.accumulator = 0.0;
    }

    fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    fn step(&mut self, dt: f64) -> Option<Frame> {
        let tween = self.tween?;

        self.accumulator += dt.max(0.0);
        let steps = (self.accumulator / ANIM_DT).floor();
        if steps >= 1.0 {
            self.elapsed_s += steps * ANIM_DT;
            self.accumulator -= steps * ANIM_DT;
        }

        // Tolerate float drift from summing fixed steps
        let finished = self.elapsed_s + 1e-9 >= tween.duration_s;
        if finished {
            self.tween = None;
            self.elapsed_s = 0.0;
            self.accumulator = 0.0;
            return Some(Frame {
                value: tween.to,
                finished: true,
            });
        }

        Some(Frame {
            value: tween.value_at(self.elapsed_s),
            finished: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        let all = [Ease::Linear, Ease::OutQuad, Ease::OutCubic, Ease::OutQuart, Ease::OutBack];
        for ease in all {
            assert!(ease.sample(0.0).abs() < 1e-12, "{ease:?}");
            assert!((ease.sample(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
            assert_eq!(ease.sample(-3.0), ease.sample(0.0));
        }
    }

    #[test]
    fn test_ease_out_front_loads_motion() {
        for ease in [Ease::OutQuad, Ease::OutCubic, Ease::OutQuart, Ease::OutBack] {
            assert!(ease.sample(0.5) > Ease::Linear.sample(0.5), "{ease:?}");
        }
    }

    #[test]
    fn test_out_back_overshoots_then_settles() {
        let peak = (1..100).map(|i| Ease::OutBack.sample(i as f64 / 100.0)).fold(0.0, f64::max);
        assert!(peak > 1.0);
        assert!((Ease::OutBack.sample(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tween_value() {
        let tween = Tween::new(0.0, -100.0, 2.0, Ease::Linear);
        assert!((tween.value_at(1.0) + 50.0).abs() < 1e-9);
        assert_eq!(tween.value_at(5.0), -100.0);
        let instant = Tween::new(3.0, 9.0, 0.0, Ease::Linear);
        assert_eq!(instant.value_at(0.0), 9.0);
    }

    #[test]
    fn test_idle_animator_yields_nothing() {
        let mut anim = FixedStepAnimator::new();
        assert!(!anim.is_running());
        assert_eq!(anim.step(0.1), None);
    }

    #[test]
    fn test_finishes_exactly_once_on_end_value() {
        let mut anim = FixedStepAnimator::new();
        anim.animate(Tween::new(0.0, -1957.5, 0.5, Ease::OutCubic));

        let mut finished = 0;
        let mut last = 0.0;
        for _ in 0..600 {
            if let Some(frame) = anim.step(1.0 / 60.0) {
                if frame.finished {
                    finished += 1;
                }
                last = frame.value;
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(last, -1957.5);
        assert!(!anim.is_running());
    }

    #[test]
    fn test_values_move_monotonically_toward_target() {
        let mut anim = FixedStepAnimator::new();
        anim.animate(Tween::new(10.0, -500.0, 1.0, Ease::OutCubic));
        let mut prev = 10.0;
        while let Some(frame) = anim.step(1.0 / 30.0) {
            assert!(frame.value <= prev);
            prev = frame.value;
            if frame.finished {
                break;
            }
        }
        assert_eq!(prev, -500.0);
    }

    #[test]
    fn test_retarget_restarts_clock() {
        let mut anim = FixedStepAnimator::new();
        anim.animate(Tween::new(0.0, -360.0, 1.0, Ease::Linear));
        let mid = anim.step(0.5).unwrap();
        assert!(!mid.finished);

        anim.animate(Tween::new(mid.value, -720.0, 1.0, Ease::Linear));
        assert_eq!(anim.elapsed(), 0.0);
        let next = anim.step(ANIM_DT).unwrap();
        assert!(next.value < mid.value);
        assert!(!next.finished);
    }

    #[test]
    fn test_slow_host_keeps_duration() {
        // 10 fps host, 4 s spin
        let mut anim = FixedStepAnimator::new();
        anim.animate(Tween::new(0.0, -1957.5, 4.0, Ease::OutCubic));
        let dt = 0.1;
        let mut frames = 0u32;
        loop {
            let frame = anim.step(dt).unwrap();
            frames += 1;
            if frame.finished {
                assert_eq!(frame.value, -1957.5);
                break;
            }
            assert!(frames < 1000);
        }
        let wall = frames as f64 * dt;
        assert!(wall >= 4.0 - 1e-9 && wall <= 4.0 + dt + 1e-9, "settled after {wall}s");
    }

    #[test]
    fn test_long_stall_consumes_whole_backlog() {
        let mut anim = FixedStepAnimator::new();
        anim.animate(Tween::new(0.0, 1.0, 10.0, Ease::Linear));
        let frame = anim.step(5.0).unwrap();
        assert!(!frame.finished);
        assert!((anim.elapsed() - 5.0).abs() <= ANIM_DT);
        assert!((frame.value - 0.5).abs() <= ANIM_DT);

        let last = anim.step(5.0).unwrap();
        assert!(last.finished);
        assert_eq!(last.value, 1.0);
    }
}
