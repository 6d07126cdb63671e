//! Shared Dioxus components and D3.js bridge for the Gantt chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js Gantt renderer via `js_sys::eval()`
//! - `data_source`: fetching chart rows with the browser's `fetch`
//! - `controller`: the shared owner of the live chart instance
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (pickers, chart, containers, etc.)

pub mod components;
pub mod controller;
pub mod data_source;
pub mod js_bridge;
pub mod state;
