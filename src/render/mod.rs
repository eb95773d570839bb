//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod text;

use crate::error::{Error, Result};
use crate::model::FunctionDescriptor;
use serde::Serialize;

/// Functions extracted from one input, tagged with where they came from.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub functions: Vec<FunctionDescriptor>,
}

/// Trait for rendering extraction results into a specific output format.
pub trait Renderer {
    fn render(&self, report: &[FileReport]) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}
