//! SVG rendering module
//!
//! Turns slice paths and a rotation into markup the presentation shell can show.

pub mod svg;

pub use svg::{SvgOptions, render_svg};
