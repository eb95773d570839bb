//! Plain text renderer — one line per function, then a summary.

use super::{FileReport, Renderer};
use crate::model::{DocStatus, FunctionDescriptor, ParameterRecord};

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &[FileReport]) -> String {
        let mut out = String::new();
        let (mut documented, mut missing, mut stale) = (0, 0, 0);

        for file in report {
            for func in &file.functions {
                out.push_str(&format!("{}:{}  {}  {}\n", file.path, func.line, func.name, status_text(func)));
                match func.status() {
                    DocStatus::Documented => documented += 1,
                    DocStatus::Missing => missing += 1,
                    DocStatus::Stale => stale += 1,
                }
            }
        }

        let total = documented + missing + stale;
        out.push_str(&format!(
            "{} function{}: {} documented, {} missing, {} stale\n",
            total,
            if total == 1 { "" } else { "s" },
            documented,
            missing,
            stale
        ));
        out
    }
}

fn status_text(func: &FunctionDescriptor) -> String {
    match func.status() {
        DocStatus::Documented => "documented".to_string(),
        DocStatus::Missing => "missing".to_string(),
        DocStatus::Stale => format!(
            "stale (doc: {}; code: {})",
            name_list(&func.doc_params),
            name_list(&func.declared_params)
        ),
    }
}

fn name_list(params: &[ParameterRecord]) -> String {
    if params.is_empty() {
        return "-".to_string();
    }
    params
        .iter()
        .map(|p| format!("${}", p.name))
        .collect::<Vec<_>>()
        .join(", ")
}
