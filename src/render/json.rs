//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the report directly; each function also carries its
//! documentation status so consumers don't have to recompute it.

use super::{FileReport, Renderer};
use crate::model::{DocStatus, FunctionDescriptor};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    functions: Vec<JsonFunction<'a>>,
}

#[derive(Serialize)]
struct JsonFunction<'a> {
    status: DocStatus,
    #[serde(flatten)]
    function: &'a FunctionDescriptor,
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &[FileReport]) -> String {
        let files: Vec<JsonFile<'_>> = report
            .iter()
            .map(|file| JsonFile {
                path: &file.path,
                functions: file
                    .functions
                    .iter()
                    .map(|function| JsonFunction {
                        status: function.status(),
                        function,
                    })
                    .collect(),
            })
            .collect();

        // Plain data with string keys; serialization cannot fail.
        let mut out = serde_json::to_string_pretty(&files).unwrap_or_default();
        out.push('\n');
        out
    }
}
