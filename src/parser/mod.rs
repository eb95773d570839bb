//! Function extraction from PHP source.
//!
//! Regex-driven: [`scan`] finds declarations, [`body`] balances braces,
//! [`params`] reads parameter lists from code and from doc blocks. Nothing
//! here understands PHP strings or comments, and no state survives between
//! calls.

pub mod body;
pub mod params;
pub mod scan;

use crate::error::{Error, Result};
use crate::model::{BodyState, FunctionDescriptor};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Extract every function declared in `code`, in document order.
pub fn get_functions_from_string(code: &str) -> Vec<FunctionDescriptor> {
    scan::scan(code)
        .into_iter()
        .map(|decl| {
            let found = body::extract_body(code, decl.start);
            if found.state() == BodyState::Unterminated {
                warn!(
                    function = decl.name,
                    offset = decl.start,
                    "function body never closes; keeping partial body"
                );
            }

            let mut body = String::with_capacity(decl.declaration.len() + found.text().len() + 1);
            body.push_str(decl.declaration);
            if !found.text().is_empty() {
                body.push('\n');
                body.push_str(found.text());
            }

            FunctionDescriptor {
                name: decl.name.to_string(),
                doc_comment: decl.doc_comment.map(str::to_string),
                body,
                body_state: found.state(),
                return_type: decl.return_type.map(str::to_string),
                offset: decl.start,
                line: line_of(code, decl.start),
                declared_params: params::declared(decl.params),
                doc_params: params::documented(decl.doc_comment),
            }
        })
        .collect()
}

/// Read a whole file and extract its functions.
pub fn get_functions_from_file(path: &Path) -> Result<Vec<FunctionDescriptor>> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let code = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let functions = get_functions_from_string(&code);
    debug!(path = %path.display(), count = functions.len(), "extracted functions");
    Ok(functions)
}

/// 1-based line number of a byte offset.
pub fn line_of(code: &str, offset: usize) -> usize {
    let end = offset.min(code.len());
    code.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"<?php

class Calculator
{
    /**
     * Adds two numbers.
     *
     * @param int $a
     * @param int $b
     * @return int
     */
    public function add(int $a, int $b): int
    {
        if ($a < 0) {
            return 0;
        }
        return $a + $b;
    }

    private static function scale($value, $factor = 2)
    {
        return $value * $factor;
    }

    /**
     * @param string $b
     * @param string $a
     */
    protected function swap($a, $b) { return [$b, $a]; }
}
"#;

    #[test]
    fn functions_in_document_order() {
        let names: Vec<_> = get_functions_from_string(SAMPLE)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["add", "scale", "swap"]);
    }

    #[test]
    fn doc_comment_association() {
        let functions = get_functions_from_string(SAMPLE);
        let add = &functions[0];
        assert!(add.has_doc_comment());
        assert!(add.doc_comment.as_deref().unwrap().contains("Adds two numbers."));
        assert_eq!(add.doc_params.len(), 2);

        let scale = &functions[1];
        assert_eq!(scale.doc_comment, None);
        assert!(scale.doc_params.is_empty());
    }

    #[test]
    fn body_ends_at_outer_brace() {
        let functions = get_functions_from_string(SAMPLE);
        let add = &functions[0];
        assert!(add.body.starts_with("public function add(int $a, int $b): int\n{"));
        assert!(add.body.ends_with("return $a + $b;\n    }"));
        assert_eq!(add.body_state, BodyState::Closed);
        assert_eq!(add.return_type.as_deref(), Some("int"));
    }

    #[test]
    fn declared_params_and_defaults() {
        let functions = get_functions_from_string(SAMPLE);
        let scale = &functions[1];
        assert_eq!(scale.declared_params.len(), 2);
        assert_eq!(scale.declared_params[0].default, None);
        assert_eq!(scale.declared_params[1].default.as_deref(), Some("2"));
    }

    #[test]
    fn staleness() {
        let functions = get_functions_from_string(SAMPLE);
        assert!(functions[0].params_match());
        assert!(!functions[0].is_stale());
        // undocumented is missing, not stale
        assert!(!functions[1].is_stale());
        assert!(functions[2].is_stale());
    }

    #[test]
    fn extraction_is_repeatable() {
        assert_eq!(get_functions_from_string(SAMPLE), get_functions_from_string(SAMPLE));
    }

    #[test]
    fn default_containing_semicolon_does_not_hide_body() {
        let functions = get_functions_from_string("function f($sep = ';') { return $sep; }");
        assert_eq!(functions[0].body_state, BodyState::Closed);
        assert!(functions[0].body.ends_with("{ return $sep; }"));
    }

    #[test]
    fn default_with_call_and_semicolon_keeps_body() {
        let functions =
            get_functions_from_string("function f($a = array(), $sep = ';') { return 1; }");
        assert_eq!(functions[0].body_state, BodyState::Closed);
        assert_eq!(functions[0].body, "function f($a = array()\n{ return 1; }");
        assert_eq!(functions[0].declared_params.len(), 1);
    }

    #[test]
    fn interface_method_has_no_body() {
        let code = "interface I\n{\n    public function run(int $n): void;\n}\n";
        let functions = get_functions_from_string(code);
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].body_state, BodyState::Absent);
        assert_eq!(functions[0].body, "public function run(int $n): void");
    }

    #[test]
    fn unterminated_body_is_kept_partial() {
        let functions = get_functions_from_string("function f() {\n    if (1) {\n");
        assert_eq!(functions[0].body_state, BodyState::Unterminated);
        assert_eq!(functions[0].body, "function f()\n{\n    if (1) {\n");
    }

    #[test]
    fn offset_points_at_declaration() {
        let functions = get_functions_from_string(SAMPLE);
        let offset = functions[1].offset;
        assert!(SAMPLE[offset..].starts_with("private static function scale"));
        assert_eq!(functions[1].line, 20);
        assert_eq!(line_of(SAMPLE, 0), 1);
    }

    #[test]
    fn reads_from_file() {
        let mut file = NamedTempFile::with_suffix(".php").unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let functions = get_functions_from_file(file.path()).unwrap();
        assert_eq!(functions, get_functions_from_string(SAMPLE));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = get_functions_from_file(Path::new("/nonexistent/nothing.php")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(err.to_string().starts_with("File not found: "));
    }
}
