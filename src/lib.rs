//! JMA forecast TUI
//!
//! Browse the Japan Meteorological Agency region catalog and view the
//! multi-day forecast of an office. The library exposes the modules for
//! testing; `main.rs` wires them to the terminal.

pub mod action;
pub mod api;
pub mod catalog;
pub mod components;
pub mod effect;
pub mod forecast;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;
