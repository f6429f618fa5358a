//! Domain types for the tools dashboard
//!
//! - Tool: a named link record (name, description, url)
//! - Field: which of the three Tool fields a form input edits

pub mod tool;

pub use tool::{Field, Tool};
