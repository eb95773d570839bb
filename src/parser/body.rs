//! Brace-balancing body extraction.
//!
//! Counts `{` and `}` from a start offset until they balance. Braces inside
//! string literals and comments are counted like any other, so a body such as
//! `{ return "}"; }` ends early.

use crate::model::BodyState;

/// Result of scanning for a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyScan<'a> {
    /// From the opening brace through its matching close, inclusive.
    Closed(&'a str),
    /// Text ran out first; everything from the opening brace onwards.
    Unterminated(&'a str),
    /// A `;` came before any `{`.
    Absent,
}

impl<'a> BodyScan<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            BodyScan::Closed(span) | BodyScan::Unterminated(span) => span,
            BodyScan::Absent => "",
        }
    }

    pub fn state(&self) -> BodyState {
        match self {
            BodyScan::Closed(_) => BodyState::Closed,
            BodyScan::Unterminated(_) => BodyState::Unterminated,
            BodyScan::Absent => BodyState::Absent,
        }
    }
}

/// Scan `text` from byte offset `start` for the brace-balanced body.
///
/// `start` is where the declaration begins. Until the body opens, parentheses
/// are tracked so that `;`, `{` and `}` inside the parameter list are ignored,
/// and a `}` with no `{` before it is skipped. An unbalanced body is returned
/// as-is rather than reported as an error.
pub fn extract_body(text: &str, start: usize) -> BodyScan<'_> {
    let Some(rest) = text.get(start..) else {
        return BodyScan::Absent;
    };

    let mut parens = 0usize;
    let mut open = 0usize;
    let mut close = 0usize;
    let mut body_start = None;

    for (i, b) in rest.bytes().enumerate() {
        if body_start.is_none() {
            match b {
                b'(' => parens += 1,
                b')' => parens = parens.saturating_sub(1),
                b';' if parens == 0 => return BodyScan::Absent,
                b'{' if parens == 0 => {
                    open = 1;
                    body_start = Some(i);
                }
                _ => {}
            }
            continue;
        }

        match b {
            b'{' => open += 1,
            b'}' => close += 1,
            _ => {}
        }

        if open == close {
            let from = body_start.unwrap_or(i);
            return BodyScan::Closed(&rest[from..=i]);
        }
    }

    match body_start {
        Some(from) => BodyScan::Unterminated(&rest[from..]),
        None => BodyScan::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_body() {
        let text = "function f() { return 1; }\nfunction g() {}";
        assert_eq!(extract_body(text, 0), BodyScan::Closed("{ return 1; }"));
    }

    #[test]
    fn nested_braces_end_at_outer_close() {
        let text = "function f($x) {\n    if ($x) {\n        return 1;\n    }\n    return 2;\n}\ntrailing }";
        let body = extract_body(text, 0);
        assert_eq!(
            body,
            BodyScan::Closed("{\n    if ($x) {\n        return 1;\n    }\n    return 2;\n}")
        );
    }

    #[test]
    fn skips_return_type_before_brace() {
        let text = "function f(): int\n{\n    return 1;\n}";
        assert_eq!(extract_body(text, 0).text(), "{\n    return 1;\n}");
    }

    #[test]
    fn starts_from_offset() {
        let text = "function a() { }\nfunction b() { return 2; }";
        let start = text.find("function b").unwrap();
        assert_eq!(extract_body(text, start).text(), "{ return 2; }");
    }

    #[test]
    fn unterminated_returns_partial_text() {
        let text = "function f() {\n    if (true) {\n        x();\n    }\n";
        let body = extract_body(text, 0);
        assert_eq!(body.state(), BodyState::Unterminated);
        assert_eq!(body.text(), "{\n    if (true) {\n        x();\n    }\n");
    }

    #[test]
    fn semicolon_before_brace_means_no_body() {
        let text = "public function f(): void;\npublic function g() { }";
        assert_eq!(extract_body(text, 0), BodyScan::Absent);
    }

    #[test]
    fn semicolon_inside_parameter_list_is_ignored() {
        let text = "function f($a = array(), $sep = ';') { return 1; }";
        assert_eq!(extract_body(text, 0), BodyScan::Closed("{ return 1; }"));
    }

    #[test]
    fn braces_inside_parameter_list_are_ignored() {
        let text = "function f($open = '{', $close = '}') { return $open; }";
        assert_eq!(extract_body(text, 0).text(), "{ return $open; }");
    }

    #[test]
    fn close_before_open_is_skipped() {
        let text = "function f()\n}\n{ x(); }";
        assert_eq!(extract_body(text, 0), BodyScan::Closed("{ x(); }"));
    }

    #[test]
    fn no_brace_at_all() {
        assert_eq!(extract_body("function f()", 0), BodyScan::Absent);
        assert_eq!(extract_body("abc", 10), BodyScan::Absent);
    }

    #[test]
    fn braces_in_strings_are_counted() {
        let text = "function f() { return \"}\"; }";
        assert_eq!(extract_body(text, 0).text(), "{ return \"}");
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let text = "function é() { $s = 'ü'; }";
        assert_eq!(extract_body(text, 0).text(), "{ $s = 'ü'; }");
    }
}
