//! Terminal dashboard.
//!
//! # Submodules
//!
//! - [`app`] - Application state and the event loop
//! - [`keymap`] - Global hotkeys
//! - [`screens`] - One renderer per page
//! - [`theme`] - Colors

pub mod app;
pub mod keymap;
pub mod screens;
pub mod theme;

pub use app::{run_dashboard, App};
