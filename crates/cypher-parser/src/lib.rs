//! An error-tolerant parser for the Cypher graph query language, producing
//! a lossless, queryable syntax tree.
//!
//! Parsing never fails outright: lexical and syntactic errors are recorded
//! on the returned [`SyntaxTree`] alongside whatever directives did parse,
//! and the parser resynchronizes at statement boundaries. The tree keeps
//! every byte of the input, so positions are exact and the source can be
//! reconstructed from the tree.
//!
//! ```rust
//! use cypher_parser::Parser;
//!
//! let tree = Parser::new("MATCH (n:Person) RETURN n.name;").parse();
//! assert!(tree.errors().is_empty());
//! assert_eq!(tree.document().directives().count(), 1);
//! ```
//!
//! The typed accessors live in [`ast`]; the structural AST dump with
//! per-node ordinals is produced by [`SyntaxTree::print`].

mod color;
mod error;
mod lexer;
mod limit;
mod parser;
mod position;
mod printer;

#[cfg(test)]
mod tests;

pub mod ast;

pub use crate::color::{ColorPair, ColorScheme};
pub use crate::error::Error;
pub use crate::lexer::{Lexer, Token, TokenKind};
pub use crate::limit::LimitTracker;
pub use crate::parser::{Directives, Parser, SyntaxKind, SyntaxTree};
pub use crate::position::Position;
pub use crate::printer::Ordinals;

pub use crate::parser::{SyntaxElement, SyntaxNode, SyntaxNodeChildren, SyntaxNodePtr, SyntaxToken};

use std::io;

/// The library's version, as recorded in its manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Failure to obtain source text from a reader. Parse errors are never
/// reported this way; they live on the [`SyntaxTree`].
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read input")]
    Io(#[from] io::Error),
}

/// Read the whole of `input` and parse it.
///
/// The input is borrowed only for the duration of the call. I/O failures,
/// including invalid UTF-8, abort the parse and are returned as
/// [`ReadError`].
pub fn parse_reader<R: io::Read>(mut input: R) -> Result<SyntaxTree, ReadError> {
    let mut source = String::new();
    input.read_to_string(&mut source)?;
    Ok(Parser::new(&source).parse())
}
