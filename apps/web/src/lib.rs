//! VectorInk Web UI
//!
//! A pure Rust drawing page built with Leptos.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;

pub use app::App;
