//! Shared Dioxus components and chart/map bridge for the tankage dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js bar charts and Leaflet maps via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, cards, containers, etc.)
//! - `format`: on-screen number formatting
//! - `series`: JSON payloads for the chart and map scripts

pub mod components;
pub mod format;
pub mod js_bridge;
pub mod series;
pub mod state;
