//! Platform abstraction layer
//!
//! The engine itself is platform-free. This module holds the host bindings:
//! - `web`: wasm-bindgen handle for browser/webview shells (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;
