//! Parameter lists from declarations and from @param tags.

use crate::model::ParameterRecord;
use regex::Regex;
use std::sync::LazyLock;

// Type (optionally nullable), $name, and a default that runs to the next comma.
static RE_DECLARED_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(\?\w+|\w+)\s+)?\$(\w+)(?:\s*=\s*([^,]+))?").unwrap()
});

static RE_DOC_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@param\s+(\S+)\s+\$(\S+)").unwrap());

/// Parse the raw text between a declaration's parentheses.
///
/// A default containing a comma (`$a = [1, 2]`) is cut at that comma.
pub fn declared(param_list: &str) -> Vec<ParameterRecord> {
    RE_DECLARED_PARAM
        .captures_iter(param_list)
        .map(|caps| ParameterRecord {
            ty: caps.get(1).map(|m| m.as_str().to_string()),
            name: caps[2].to_string(),
            default: caps.get(3).map(|m| m.as_str().trim().to_string()),
        })
        .collect()
}

/// Parse `@param type $name` lines out of a doc block.
pub fn documented(doc_comment: Option<&str>) -> Vec<ParameterRecord> {
    let Some(doc) = doc_comment else {
        return Vec::new();
    };

    RE_DOC_PARAM
        .captures_iter(doc)
        .map(|caps| ParameterRecord {
            ty: Some(caps[1].to_string()),
            name: caps[2].to_string(),
            default: None,
        })
        .collect()
}

/// Same length and the same name at every position. Types and defaults are
/// not compared.
pub fn params_are_the_same(declared: &[ParameterRecord], documented: &[ParameterRecord]) -> bool {
    declared.len() == documented.len()
        && declared
            .iter()
            .zip(documented)
            .all(|(code, doc)| code.name == doc.name)
}
