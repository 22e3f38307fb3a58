//! Shared Dioxus components and D3.js bridge for the Budget Explorer.
//!
//! This crate provides:
//! - `loader`: browser fetch of the dataset and palette files
//! - `js_bridge`: Rust wrappers for the D3.js renderers via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (menus, sidebar, readouts, etc.)

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod state;
