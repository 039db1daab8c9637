//! Renderers for normalized error maps
//!
//! Presentation stays here so the extraction and classification code only
//! ever deals with `ErrorMap` values.

use crate::types::ErrorMap;

/// Simple trait for rendering an error map in a specific format
pub trait OutputRenderer {
    /// Render the error map to a string
    fn render(&self, errors: &ErrorMap) -> String;
}

pub mod json;
pub mod table;

pub use json::JsonRenderer;
pub use table::{TableBuilder, TableRenderer};
