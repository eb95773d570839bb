//! Data model for extracted functions — format-agnostic.

use serde::Serialize;

/// A single function found in PHP source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    pub name: String,
    /// Raw `/** ... */` block directly above the declaration
    pub doc_comment: Option<String>,
    /// Declaration, a newline, then the brace-balanced body
    pub body: String,
    pub body_state: BodyState,
    /// `: Type` annotation after the parameter list
    pub return_type: Option<String>,
    /// Byte offset of the declaration in the scanned text
    pub offset: usize,
    /// 1-based line of the declaration
    pub line: usize,
    pub declared_params: Vec<ParameterRecord>,
    /// @param entries, in comment order
    pub doc_params: Vec<ParameterRecord>,
}

impl FunctionDescriptor {
    pub fn has_doc_comment(&self) -> bool {
        self.doc_comment.is_some()
    }

    /// Whether the @param tags name the declared parameters in order.
    pub fn params_match(&self) -> bool {
        crate::parser::params::params_are_the_same(&self.declared_params, &self.doc_params)
    }

    /// Documented, but the doc block no longer matches the signature.
    pub fn is_stale(&self) -> bool {
        self.has_doc_comment() && !self.params_match()
    }

    pub fn status(&self) -> DocStatus {
        if !self.has_doc_comment() {
            DocStatus::Missing
        } else if self.params_match() {
            DocStatus::Documented
        } else {
            DocStatus::Stale
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStatus {
    Documented,
    Missing,
    /// @param names disagree with the declaration
    Stale,
}

/// One formal parameter, from either the declaration or a @param tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Without the `$` sigil
    pub name: String,
    /// Trimmed default expression; always `None` for @param records
    pub default: Option<String>,
}

/// How the brace scan for a function body ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyState {
    /// The outer closing brace was found.
    Closed,
    /// End of text reached before the braces balanced; the body is partial.
    Unterminated,
    /// `;` before any `{` — interface or abstract declaration.
    Absent,
}
