//! Colorization schemes for rendered output.
//!
//! A scheme maps each rendered element to a pair of begin/end escape
//! strings. The printer and [`Error::render`](crate::Error::render) wrap
//! every element they emit in the pair for that element; the
//! [`ColorScheme::none`] scheme wraps everything in empty strings and so
//! emits plain text.

/// A begin/end escape pair for one rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPair {
    pub begin: String,
    pub end: String,
}

impl ColorPair {
    fn new(begin: &str, end: &str) -> Self {
        Self {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }
}

/// A mapping from rendered element to escape pair.
///
/// Schemes are plain values: cloning is cheap enough and one scheme may be
/// reused across any number of parses and renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorScheme {
    pub error_message: ColorPair,
    pub error_context: ColorPair,
    pub ast_ordinal: ColorPair,
    pub ast_range: ColorPair,
    pub ast_indent: ColorPair,
    pub ast_type: ColorPair,
    pub ast_desc: ColorPair,
}

const RESET: &str = "\x1b[0m";

impl ColorScheme {
    /// The no-op scheme: every element is emitted bare.
    pub fn none() -> Self {
        Self::default()
    }

    /// ANSI terminal colors.
    pub fn ansi() -> Self {
        Self {
            error_message: ColorPair::new("\x1b[1;31m", RESET),
            error_context: ColorPair::new("\x1b[31m", RESET),
            ast_ordinal: ColorPair::new("\x1b[33m", RESET),
            ast_range: ColorPair::new("\x1b[90m", RESET),
            ast_indent: ColorPair::new("\x1b[90m", RESET),
            ast_type: ColorPair::new("\x1b[36m", RESET),
            ast_desc: ColorPair::new("", ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty() {
        let scheme = ColorScheme::none();
        assert_eq!(scheme.ast_ordinal.begin, "");
        assert_eq!(scheme.ast_ordinal.end, "");
    }

    #[test]
    fn ansi_pairs_reset() {
        let scheme = ColorScheme::ansi();
        assert_eq!(scheme.error_message.end, RESET);
        assert!(scheme.error_message.begin.starts_with("\x1b["));
    }
}
