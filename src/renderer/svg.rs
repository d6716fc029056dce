//! Standalone SVG output
//!
//! The wheel face goes in a group rotated by the live rotation; the pointer
//! is drawn outside that group so it stays fixed at the top.

use crate::wheel::geometry::num;
use crate::wheel::{SegmentItem, SlicePath};

/// Presentation knobs for [`render_svg`]
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Outer radius of the wheel face (sets the view box)
    pub radius: f64,
    /// Space around the wheel, in SVG units
    pub margin: f64,
    pub background: Option<String>,
    pub pointer_color: String,
    pub label_color: String,
    pub label_size: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            radius: crate::consts::OUTER_RADIUS,
            margin: 24.0,
            background: None,
            pointer_color: "#FFFFFF".to_string(),
            label_color: "#1B1B1B".to_string(),
            label_size: 22.0,
        }
    }
}

/// Render a complete SVG document for a wheel at `rotation` degrees
pub fn render_svg(slices: &[SlicePath], items: &[SegmentItem], rotation: f64, options: &SvgOptions) -> String {
    let extent = options.radius + options.margin;
    let size = num(extent * 2.0);
    let mut out = Vec::with_capacity(slices.len() * 2 + 6);

    out.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{min} {min} {size} {size}" width="{size}" height="{size}">"#,
        min = num(-extent),
    ));
    if let Some(background) = &options.background {
        out.push(format!(
            r#"<rect x="{min}" y="{min}" width="{size}" height="{size}" fill="{}"/>"#,
            escape(background),
            min = num(-extent),
        ));
    }

    out.push(format!(r#"<g class="wheel" transform="rotate({})">"#, num(rotation)));
    for slice in slices {
        out.push(format!(
            r#"<path class="slice" data-index="{}" d="{}" fill="{}"/>"#,
            slice.index,
            slice.d,
            escape(&slice.fill)
        ));
        let label = items.get(slice.index).and_then(|item| item.label.as_deref());
        if let Some(label) = label {
            let x = num(slice.label_anchor.x);
            let y = num(slice.label_anchor.y);
            // Keep glyphs upright relative to their slice
            out.push(format!(
                r#"<text x="{x}" y="{y}" transform="rotate({} {x} {y})" text-anchor="middle" dominant-baseline="central" font-size="{}" fill="{}">{}</text>"#,
                num(slice.mid_degrees()),
                num(options.label_size),
                escape(&options.label_color),
                escape(label)
            ));
        }
    }
    out.push("</g>".to_string());

    // Downward-pointing triangle just above the rim
    let tip = -options.radius + options.margin * 0.25;
    let base = -extent + options.margin * 0.1;
    let half = options.margin * 0.5;
    out.push(format!(
        r#"<path class="pointer" d="M {} {} L {} {} L 0 {} Z" fill="{}"/>"#,
        num(-half),
        num(base),
        num(half),
        num(base),
        num(tip),
        escape(&options.pointer_color)
    ));
    out.push("</svg>".to_string());
    out.join("\n")
}

/// Escape text for use in SVG attributes and content
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
