//! Declaration scanner.
//!
//! Finds `function` declarations with a single multiline regex, together with
//! the doc block sitting directly above each one. Declarations inside string
//! literals or ordinary comments are matched too; there is no tokenizer here.

use regex::Regex;
use std::sync::LazyLock;

// Doc block body may not contain `*/`, so one block never swallows the next.
static RE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?ms)^\s*(/\*\*(?:[^*]|\*+[^*/])*\*+/)?\s*",
        r"((?:(?:public|private|protected)\s+)?(?:static\s+)?",
        r"function\s+(\w+)\s*\(([^)]*)\)",
        r"(?:\s*:\s?([?\w\\|]+))?)"
    ))
    .unwrap()
});

/// Raw match region for one declaration, borrowed from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationMatch<'a> {
    pub doc_comment: Option<&'a str>,
    /// Modifiers through the optional return type
    pub declaration: &'a str,
    /// Byte offset where `declaration` starts
    pub start: usize,
    /// Byte offset just past `declaration`
    pub end: usize,
    pub name: &'a str,
    /// Text between the parentheses, untouched
    pub params: &'a str,
    pub return_type: Option<&'a str>,
}

/// All declarations in `text`, leftmost-first, in document order.
pub fn scan(text: &str) -> Vec<DeclarationMatch<'_>> {
    RE_DECLARATION
        .captures_iter(text)
        .filter_map(|caps| {
            let decl = caps.get(2)?;
            Some(DeclarationMatch {
                doc_comment: caps.get(1).map(|m| m.as_str()),
                declaration: decl.as_str(),
                start: decl.start(),
                end: decl.end(),
                name: caps.get(3)?.as_str(),
                params: caps.get(4).map_or("", |m| m.as_str()),
                return_type: caps.get(5).map(|m| m.as_str()),
            })
        })
        .collect()
}
