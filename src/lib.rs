//! Tools Dashboard - a terminal dashboard of AI tools
//!
//! Shows a fixed catalog of tools as cards and lets the user add their own
//! tools to a second, session-only list through a small form.

pub mod browser;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod tui;

pub use error::{DashboardError, Result};
