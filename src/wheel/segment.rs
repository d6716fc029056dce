//! Wheel slots
//!
//! Index order is angular order: slot 0 starts at the pointer and the rest
//! follow clockwise.

use serde::{Deserialize, Serialize};

/// One slot on the wheel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentItem {
    /// Opaque identifier, unique among non-empty slots
    pub id: String,
    /// Display glyph; `None` means the slot holds no prize
    #[serde(default)]
    pub label: Option<String>,
    /// Display tint (cosmetic only)
    #[serde(default)]
    pub color: Option<String>,
}

impl SegmentItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            color: None,
        }
    }

    /// Empty padding slot for position `index`
    pub fn empty(index: usize) -> Self {
        Self {
            id: format!("empty-{index}"),
            label: None,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// True for a "no prize" slot
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
    }
}

/// Fit an item list to exactly `count` slots.
///
/// Short lists are right-padded with empty slots, long lists keep their first
/// `count` items. This is a normalization, not an error.
pub fn normalize_items(items: &[SegmentItem], count: usize) -> Vec<SegmentItem> {
    let mut slots: Vec<SegmentItem> = items.iter().take(count).cloned().collect();
    for index in slots.len()..count {
        slots.push(SegmentItem::empty(index));
    }
    slots
}
