//! Line classification for the `declare -f` dump format.
//!
//! Recognition matches the literal text bash prints: a header line is the
//! function name, a single space, then `()` at the end of the line (bash
//! adds a trailing space), and the body is wrapped in lines holding a
//! lone `{` or `}`. Supporting another shell's dump format would mean
//! extending the predicates in this module.

/// Classification of one line of the dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A function header; carries the function name
    Header(&'a str),

    /// A lone `{` or `}` wrapping a function body; formatting only
    Delimiter,

    /// Literal body content for the currently open function
    Body(&'a str),
}

/// Classify a single line of the dump.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(name) = header_name(line) {
        LineKind::Header(name)
    } else if is_block_delimiter(line) {
        LineKind::Delimiter
    } else {
        LineKind::Body(line)
    }
}

/// Extract the function name from a header line, if it is one.
///
/// The first `(` on the line must start a terminal `()` preceded by a
/// space; the name is everything before the first space. A header-like
/// line missing the separating space (such as `greet()`) is not
/// recognized and falls through to body handling.
#[must_use]
pub fn header_name(line: &str) -> Option<&str> {
    let line = line.trim_end();
    let paren = line.find('(')?;
    if &line[paren..] != "()" || !line[..paren].ends_with(' ') {
        return None;
    }
    line.split(' ').next().filter(|name| !name.is_empty())
}

/// Whether the line is one of the `{` / `}` lines wrapping a function
/// body. Only a line whose entire trimmed content is the single brace
/// counts; braces embedded in longer lines are body content.
#[must_use]
pub fn is_block_delimiter(line: &str) -> bool {
    matches!(line.trim(), "{" | "}")
}
