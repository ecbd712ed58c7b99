use regex::Regex;
use std::sync::OnceLock;

/// Remove comment delimiters so the remaining text can be parsed as markdown.
///
/// Four patterns are deleted wherever they occur, tried in this order at each
/// position: `/// `, `///`, an opening `/*` or `/**` at the end of a line, and a
/// closing `*/` together with the newline directly before it.
pub fn strip_comment_syntax(comment: &str) -> String {
    static COMMENT_SYNTAX: OnceLock<Regex> = OnceLock::new();
    let regex = COMMENT_SYNTAX.get_or_init(|| {
        Regex::new(r"(/// )|(///)|(/\*\*?\n)|(\n?\*/)").expect("Invalid comment syntax regex")
    });
    regex.replace_all(comment, "").into_owned()
}
