use crate::color::ColorScheme;
use crate::Position;
use std::fmt;

/// Widest context snippet attached to an error before it is trimmed around
/// the caret.
const CONTEXT_MAX: usize = 72;

/// One lexical or syntactic problem found in the input.
///
/// The parser never bails out on bad Cypher: whatever it could make sense
/// of becomes the tree, and every problem it stepped over is recorded as an
/// `Error` on the same [`SyntaxTree`](crate::SyntaxTree). Inspect the error
/// list before trusting the tree:
///
/// ## Example
/// ```rust
/// use cypher_parser::Parser;
///
/// let input = "MATCH (a:Person)-[:KNOWS]->(b) RETURN b.name";
/// let parser = Parser::new(input);
/// let tree = parser.parse();
///
/// assert!(tree.errors().is_empty());
/// ```
///
/// Each error carries the position of the offending token, the offending
/// text itself, and a one-line context snippet with a caret offset pointing
/// at the position within the snippet. [`Error::render`] produces the
/// conventional three-line report from those parts.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) data: String,
    pub(crate) index: usize,
    pub(crate) position: Position,
    pub(crate) context: String,
    pub(crate) context_offset: usize,
    pub(crate) is_limit: bool,
}

impl Error {
    /// Create a new instance of `Error` located at `position`, with the
    /// context snippet extracted from `source`.
    pub(crate) fn syntax<S: Into<String>>(
        message: S,
        data: String,
        position: Position,
        source: &str,
    ) -> Self {
        let (context, context_offset) = context_around(source, position.offset);
        Self {
            message: message.into(),
            data,
            index: position.offset,
            position,
            context,
            context_offset,
            is_limit: false,
        }
    }

    /// An error at the end of input.
    pub(crate) fn eof<S: Into<String>>(message: S, position: Position, source: &str) -> Self {
        Self::syntax(message, String::from("EOF"), position, source)
    }

    /// An error for a limit that was reached while lexing or parsing.
    pub(crate) fn limit<S: Into<String>>(message: S, position: Position, source: &str) -> Self {
        let mut err = Self::syntax(message, String::new(), position, source);
        err.is_limit = true;
        err
    }

    /// The offending source text: the token (or unlexable region) the
    /// error was raised against, or `"EOF"` when input ran out.
    pub fn data(&self) -> &str {
        self.data.as_ref()
    }

    /// Byte offset of the error in the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// What went wrong, in words.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// The line/column position of the error.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The source line the error occurred on, possibly trimmed around the
    /// offending position when the line is very wide.
    pub fn context(&self) -> &str {
        self.context.as_ref()
    }

    /// Byte offset into [`Error::context`] where a caret should point.
    pub fn context_offset(&self) -> usize {
        self.context_offset
    }

    /// Whether this error was caused by a lexing or parsing limit, rather
    /// than by the input itself.
    pub fn is_limit(&self) -> bool {
        self.is_limit
    }

    /// Render the conventional three-line report: message with position,
    /// context snippet, caret.
    ///
    /// The `error_message` and `error_context` elements of `colors` wrap
    /// the respective parts; [`ColorScheme::none`] yields plain text.
    pub fn render(&self, colors: &ColorScheme) -> String {
        let mut out = String::new();
        out.push_str(&colors.error_message.begin);
        out.push_str(&self.message);
        out.push_str(&colors.error_message.end);
        out.push_str(&format!(" ({})\n", self.position));
        out.push_str(&colors.error_context.begin);
        out.push_str(&self.context);
        out.push_str(&colors.error_context.end);
        out.push('\n');
        let pad = self.context[..self.context_offset.min(self.context.len())]
            .chars()
            .count();
        for _ in 0..pad {
            out.push(' ');
        }
        out.push_str("^\n");
        out
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.index;
        let end = self.index + self.data.len();

        if self.data == "EOF" {
            write!(
                f,
                "ERROR@{}:{} {:?} {}",
                start, start, self.message, self.data
            )
        } else {
            write!(
                f,
                "ERROR@{}:{} {:?} {}",
                start, end, self.message, self.data
            )
        }
    }
}

/// Extract the line containing `index` and the caret offset within it,
/// trimming wide lines around the caret.
fn context_around(source: &str, index: usize) -> (String, usize) {
    let index = floor_char_boundary(source, index.min(source.len()));
    let start = source[..index]
        .rfind(['\n', '\r'])
        .map_or(0, |at| at + 1);
    let end = source[index..]
        .find(['\n', '\r'])
        .map_or(source.len(), |at| index + at);
    let line = &source[start..end];
    let caret = index - start;

    if line.len() <= CONTEXT_MAX {
        return (line.to_string(), caret);
    }

    let half = CONTEXT_MAX / 2;
    let mut from = floor_char_boundary(line, caret.saturating_sub(half));
    let mut to = floor_char_boundary(line, (caret + half).min(line.len()));
    if to - from < CONTEXT_MAX {
        if from == 0 {
            to = floor_char_boundary(line, CONTEXT_MAX.min(line.len()));
        } else {
            from = floor_char_boundary(line, to.saturating_sub(CONTEXT_MAX));
        }
    }

    let mut context = String::new();
    let mut offset = caret - from;
    if from > 0 {
        context.push_str("...");
        offset += 3;
    }
    context.push_str(&line[from..to]);
    if to < line.len() {
        context.push_str("...");
    }
    (context, offset)
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_the_containing_line() {
        let source = "RETURN 1;\nRETURN 1 +;\nRETURN 2;";
        let (context, offset) = context_around(source, 20);
        assert_eq!(context, "RETURN 1 +;");
        assert_eq!(offset, 10);
    }

    #[test]
    fn context_of_first_line() {
        let (context, offset) = context_around("RETURN 1 +;", 10);
        assert_eq!(context, "RETURN 1 +;");
        assert_eq!(offset, 10);
    }

    #[test]
    fn wide_lines_trim_around_the_caret() {
        let mut source = String::new();
        source.push_str(&"x".repeat(200));
        source.push('?');
        source.push_str(&"y".repeat(200));
        let (context, offset) = context_around(&source, 200);
        assert!(context.starts_with("..."));
        assert!(context.ends_with("..."));
        assert_eq!(context.as_bytes()[offset], b'?');
    }

    #[test]
    fn render_points_a_caret() {
        let err = Error::syntax(
            "expected an expression, got ;",
            ";".to_string(),
            Position {
                offset: 10,
                line: 1,
                column: 11,
            },
            "RETURN 1 +;",
        );
        let report = err.render(&ColorScheme::none());
        assert_eq!(
            report,
            "expected an expression, got ; (line 1, column 11 (offset: 10))\nRETURN 1 +;\n          ^\n"
        );
    }
}
