//! Slice geometry for the wheel face
//!
//! Each slot is drawn as a closed SVG path centered on the origin. Slice `i`
//! owns the angular range `[i * s, (i + 1) * s)` with `s = 360 / N`, measured
//! clockwise from the pointer, and is inset by half the gap on each side.
//!
//! Two outlines are supported:
//! - annulus: outer arc, radial edge, inner arc back (a donut slice)
//! - tapered: outer arc, edges converging on a small hub, rounded tip

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::segment::SegmentItem;
use crate::consts::DEFAULT_HUB_FRACTION;
use crate::error::{Result, WheelError};
use crate::polar_to_cartesian;

/// Fill used when a tint policy has nothing better to offer
pub const DEFAULT_FILL: &str = "#CCCCCC";

/// Outline of a single slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SliceShape {
    /// Bounded by two concentric arcs and two radial edges
    #[default]
    Annulus,
    /// Narrows toward the hub and ends in a rounded tip
    Tapered,
}

/// Inputs to slice generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceSpec {
    pub segment_count: usize,
    pub outer_radius: f64,
    /// Inner arc radius (annulus) or hub radius (tapered); 0 gives a pie slice
    pub inner_radius: f64,
    /// Total angular gap between neighbouring slices
    pub gap_degrees: f64,
    pub shape: SliceShape,
}

impl SliceSpec {
    /// Reject inputs outside the geometric contract
    pub fn validate(&self) -> Result<()> {
        if self.segment_count == 0 {
            return Err(WheelError::InvalidSegmentCount);
        }
        let radii_ok = self.outer_radius.is_finite()
            && self.inner_radius.is_finite()
            && self.inner_radius >= 0.0
            && self.inner_radius < self.outer_radius;
        if !radii_ok {
            return Err(WheelError::InvalidRadii {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        let span = self.segment_angle();
        if !self.gap_degrees.is_finite() || self.gap_degrees < 0.0 || self.gap_degrees >= span {
            return Err(WheelError::InvalidGap {
                gap: self.gap_degrees,
                span,
            });
        }
        Ok(())
    }

    /// Angular width of one segment in degrees
    #[inline]
    pub fn segment_angle(&self) -> f64 {
        360.0 / self.segment_count as f64
    }

    /// Radius where tapered edges stop
    pub fn hub_radius(&self) -> f64 {
        if self.inner_radius > 0.0 {
            self.inner_radius
        } else {
            self.outer_radius * DEFAULT_HUB_FRACTION
        }
    }

    /// Drawn angular range of slice `index` after the gap inset
    pub fn slice_span(&self, index: usize) -> (f64, f64) {
        let span = self.segment_angle();
        let inset = self.gap_degrees / 2.0;
        (index as f64 * span + inset, (index + 1) as f64 * span - inset)
    }
}

/// How slices pick their fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TintPolicy {
    /// Cycle through colors by slice index
    Alternating { colors: Vec<String> },
    /// Use each item's own color
    ItemColor { fallback: String },
}

impl Default for TintPolicy {
    fn default() -> Self {
        TintPolicy::Alternating {
            colors: vec!["#FFD166".to_string(), "#EF476F".to_string()],
        }
    }
}

impl TintPolicy {
    pub fn tint(&self, index: usize, item: Option<&SegmentItem>) -> String {
        match self {
            TintPolicy::Alternating { colors } => {
                if colors.is_empty() {
                    DEFAULT_FILL.to_string()
                } else {
                    colors[index % colors.len()].clone()
                }
            }
            TintPolicy::ItemColor { fallback } => item
                .and_then(|item| item.color.clone())
                .unwrap_or_else(|| fallback.clone()),
        }
    }
}

/// One rendered slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicePath {
    pub index: usize,
    /// Drawn start angle (degrees, after gap inset)
    pub start_degrees: f64,
    /// Drawn end angle (degrees, after gap inset)
    pub end_degrees: f64,
    /// Whether the outer arc takes the major sweep
    pub large_arc: bool,
    /// Closed SVG path data
    pub d: String,
    pub fill: String,
    /// Where a label glyph sits: mid-angle, halfway across the band
    pub label_anchor: DVec2,
}

impl SlicePath {
    /// Angular width actually drawn
    #[inline]
    pub fn span_degrees(&self) -> f64 {
        self.end_degrees - self.start_degrees
    }

    /// Mid-angle of the slice
    #[inline]
    pub fn mid_degrees(&self) -> f64 {
        (self.start_degrees + self.end_degrees) / 2.0
    }
}

/// Build the N slice paths for a wheel face.
///
/// `items` only feeds the tint policy and may be shorter than the segment count.
pub fn compute_slice_paths(
    spec: &SliceSpec,
    tint: &TintPolicy,
    items: &[SegmentItem],
) -> Result<Vec<SlicePath>> {
    spec.validate()?;

    let paths = (0..spec.segment_count)
        .map(|index| {
            let (start, end) = spec.slice_span(index);
            let large_arc = end - start > 180.0;
            let (d, band_inner) = match spec.shape {
                SliceShape::Annulus => (
                    annulus_path(start, end, spec.outer_radius, spec.inner_radius, large_arc),
                    spec.inner_radius,
                ),
                SliceShape::Tapered => {
                    let hub = spec.hub_radius();
                    (tapered_path(start, end, spec.outer_radius, hub, large_arc), hub)
                }
            };
            let mid = (start + end) / 2.0;

            SlicePath {
                index,
                start_degrees: start,
                end_degrees: end,
                large_arc,
                d,
                fill: tint.tint(index, items.get(index)),
                label_anchor: polar_to_cartesian((spec.outer_radius + band_inner) / 2.0, mid),
            }
        })
        .collect();

    Ok(paths)
}

/// Donut slice: outer arc clockwise, edge in, inner arc back
fn annulus_path(start: f64, end: f64, outer: f64, inner: f64, large_arc: bool) -> String {
    let mut cmds = vec![format!("M {}", point(outer, start))];
    push_arc(&mut cmds, outer, start, end, large_arc, true);
    if inner > 0.0 {
        cmds.push(format!("L {}", point(inner, end)));
        push_arc(&mut cmds, inner, end, start, large_arc, false);
    } else {
        cmds.push("L 0 0".to_string());
    }
    cmds.push("Z".to_string());
    cmds.join(" ")
}

/// Wedge narrowing onto the hub with a rounded tip
fn tapered_path(start: f64, end: f64, outer: f64, hub: f64, large_arc: bool) -> String {
    let mut cmds = vec![format!("M {}", point(outer, start))];
    push_arc(&mut cmds, outer, start, end, large_arc, true);
    cmds.push(format!("L {}", point(hub, end)));

    let half = (end - start) / 2.0;
    match tip_cap(hub, half) {
        Some((radius, _)) => {
            // Minor arc bulging toward the center
            cmds.push(format!("A {r} {r} 0 0 1 {}", point(hub, start), r = num(radius)));
        }
        None if half < 90.0 => cmds.push(format!("L {}", point(hub, start))),
        // Too wide for a convex tip; follow the hub circle instead
        None => push_arc(&mut cmds, hub, end, start, large_arc, false),
    }
    cmds.push("Z".to_string());
    cmds.join(" ")
}

/// Rounded tip joining the two hub points of a slice with half-width `half` degrees.
///
/// Returns `(arc_radius, depth)`, where depth is how far the tip bulges past the
/// chord toward the center. The tip never reaches past half the chord's distance
/// to the center. `None` when no convex tip fits.
fn tip_cap(hub: f64, half: f64) -> Option<(f64, f64)> {
    if half >= 90.0 {
        return None;
    }
    let half = half.to_radians();
    let chord = 2.0 * hub * half.sin();
    let depth = (chord / 2.0).min(hub * half.cos() * 0.5);
    if depth <= f64::EPSILON * hub.max(1.0) {
        return None;
    }
    let radius = (chord * chord / 4.0 + depth * depth) / (2.0 * depth);
    Some((radius, depth))
}

/// Append an arc from `from` to `to` degrees on a circle of `radius`.
///
/// A full turn cannot be expressed as one SVG arc (the endpoints coincide), so
/// it is split in two halves.
fn push_arc(cmds: &mut Vec<String>, radius: f64, from: f64, to: f64, large_arc: bool, clockwise: bool) {
    let r = num(radius);
    let sweep = if clockwise { 1 } else { 0 };
    if (to - from).abs() >= 360.0 - 1e-9 {
        let mid = (from + to) / 2.0;
        cmds.push(format!("A {r} {r} 0 0 {sweep} {}", point(radius, mid)));
        cmds.push(format!("A {r} {r} 0 0 {sweep} {}", point(radius, to)));
    } else {
        let large = if large_arc { 1 } else { 0 };
        cmds.push(format!("A {r} {r} 0 {large} {sweep} {}", point(radius, to)));
    }
}

fn point(radius: f64, degrees: f64) -> String {
    let p = polar_to_cartesian(radius, degrees);
    format!("{} {}", num(p.x), num(p.y))
}

/// Path number: 3 decimals, trailing zeros trimmed, no negative zero
pub(crate) fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}
