//! Wheel configuration and presets
//!
//! Stored as JSON. Fields missing from a config file take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::anim::Ease;
use crate::consts::*;
use crate::error::{Result, WheelError};
use crate::wheel::{SliceShape, SliceSpec, TintPolicy};

/// Visual style presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WheelStyle {
    /// Ring of donut slices around an open hub
    #[default]
    Donut,
    /// Tapered petals meeting near the center
    Petal,
}

impl WheelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            WheelStyle::Donut => "Donut",
            WheelStyle::Petal => "Petal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "donut" | "ring" => Some(WheelStyle::Donut),
            "petal" | "tapered" => Some(WheelStyle::Petal),
            _ => None,
        }
    }

    /// Slice outline for this style
    pub fn shape(&self) -> SliceShape {
        match self {
            WheelStyle::Donut => SliceShape::Annulus,
            WheelStyle::Petal => SliceShape::Tapered,
        }
    }

    /// Inner (or hub) radius as a fraction of the outer radius
    pub fn inner_fraction(&self) -> f64 {
        match self {
            WheelStyle::Donut => INNER_RADIUS / OUTER_RADIUS,
            WheelStyle::Petal => DEFAULT_HUB_FRACTION,
        }
    }

    /// Gap between slices
    pub fn gap_degrees(&self) -> f64 {
        match self {
            WheelStyle::Donut => GAP_DEGREES,
            WheelStyle::Petal => GAP_DEGREES * 2.0,
        }
    }
}

/// What to do with a spin request while a spin is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpinPolicy {
    /// Restart from the live rotation toward the new target
    #[default]
    Retarget,
    /// Reject until the wheel settles
    IgnoreWhileSpinning,
}

/// Wheel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Style preset the geometry was derived from
    pub style: WheelStyle,

    // === Geometry ===
    /// Number of slots
    pub segment_count: usize,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub gap_degrees: f64,
    pub shape: SliceShape,
    pub tint: TintPolicy,

    // === Spin ===
    /// Cosmetic whole turns per spin
    pub extra_full_spins: u32,
    /// Animation length in seconds
    pub spin_duration_s: f64,
    pub ease: Ease,
    pub spin_policy: SpinPolicy,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            style: WheelStyle::Donut,

            // Geometry
            segment_count: SEGMENT_COUNT,
            outer_radius: OUTER_RADIUS,
            inner_radius: INNER_RADIUS,
            gap_degrees: GAP_DEGREES,
            shape: SliceShape::Annulus,
            tint: TintPolicy::default(),

            // Spin
            extra_full_spins: EXTRA_FULL_SPINS,
            spin_duration_s: SPIN_DURATION_S,
            ease: Ease::OutCubic,
            spin_policy: SpinPolicy::Retarget,
        }
    }
}

impl WheelConfig {
    /// Create a config from a style preset (applies preset defaults)
    pub fn from_preset(style: WheelStyle) -> Self {
        let mut config = Self::default();
        config.apply_preset(style);
        config
    }

    /// Apply a style preset (updates style-dependent geometry)
    pub fn apply_preset(&mut self, style: WheelStyle) {
        self.style = style;
        self.shape = style.shape();
        self.inner_radius = self.outer_radius * style.inner_fraction();
        self.gap_degrees = style.gap_degrees();
    }

    /// Geometry inputs for slice generation
    pub fn slice_spec(&self) -> SliceSpec {
        SliceSpec {
            segment_count: self.segment_count,
            outer_radius: self.outer_radius,
            inner_radius: self.inner_radius,
            gap_degrees: self.gap_degrees,
            shape: self.shape,
        }
    }

    /// Check every field a spin depends on
    pub fn validate(&self) -> Result<()> {
        self.slice_spec().validate()?;
        if !self.spin_duration_s.is_finite() || self.spin_duration_s <= 0.0 {
            return Err(WheelError::InvalidDuration(self.spin_duration_s));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded wheel config from {}", path.display());
        Ok(config)
    }

    /// Write this config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Wheel config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_wheel() {
        let config = WheelConfig::default();
        assert_eq!(config.segment_count, 8);
        assert_eq!(config.extra_full_spins, 5);
        assert_eq!(config.spin_policy, SpinPolicy::Retarget);
        assert_eq!(config.ease, Ease::OutCubic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_style_round_trip_names() {
        for style in [WheelStyle::Donut, WheelStyle::Petal] {
            assert_eq!(WheelStyle::from_str(style.as_str()), Some(style));
        }
        assert_eq!(WheelStyle::from_str("TAPERED"), Some(WheelStyle::Petal));
        assert_eq!(WheelStyle::from_str("square"), None);
    }

    #[test]
    fn test_petal_preset() {
        let config = WheelConfig::from_preset(WheelStyle::Petal);
        assert_eq!(config.shape, SliceShape::Tapered);
        assert!((config.inner_radius - 12.0).abs() < 1e-9);
        assert!((config.gap_degrees - 4.0).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = WheelConfig::from_json(r#"{ "segment_count": 12, "spin_policy": "ignore_while_spinning" }"#).unwrap();
        assert_eq!(config.segment_count, 12);
        assert_eq!(config.spin_policy, SpinPolicy::IgnoreWhileSpinning);
        assert_eq!(config.outer_radius, OUTER_RADIUS);
    }

    #[test]
    fn test_tint_policy_json() {
        let config = WheelConfig::from_json(r##"{ "tint": { "kind": "item_color", "fallback": "#fff" } }"##).unwrap();
        assert_eq!(
            config.tint,
            TintPolicy::ItemColor {
                fallback: "#fff".to_string()
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = WheelConfig::from_preset(WheelStyle::Petal);
        let back = WheelConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            WheelConfig::from_json(r#"{ "segment_count": 0 }"#),
            Err(WheelError::InvalidSegmentCount)
        ));
        assert!(matches!(
            WheelConfig::from_json(r#"{ "spin_duration_s": 0.0 }"#),
            Err(WheelError::InvalidDuration(_))
        ));
        assert!(matches!(WheelConfig::from_json("{ nope"), Err(WheelError::Config(_))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("prize-wheel-config-{}.json", std::process::id()));
        let config = WheelConfig {
            segment_count: 6,
            ..WheelConfig::default()
        };
        config.save(&path).unwrap();
        let loaded = WheelConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            WheelConfig::load("/definitely/not/here.json"),
            Err(WheelError::Io(_))
        ));
    }
}
