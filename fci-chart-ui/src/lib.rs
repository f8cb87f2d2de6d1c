//! Shared Dioxus components and D3.js bridge for FCI chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, plus the `ChartScale` enum
//! - `i18n`: explicit translation lookup for user-facing strings
//! - `tooltip`: hover payload formatting shared with the JS tooltip layer
//! - `strips`: per-district strip chart derivation
//! - `components`: Reusable RSX components (toggle, containers, etc.)

pub mod js_bridge;
pub mod state;
pub mod i18n;
pub mod tooltip;
pub mod strips;
pub mod components;
