use std::fmt;
use std::io;

use rowan::GreenNodeBuilder;

use super::CypherLanguage;
use crate::ast;
use crate::color::ColorScheme;
use crate::printer;
use crate::{Error, LimitTracker, SyntaxElement, SyntaxKind, SyntaxNode};

/// The result of one parse: the tree plus everything the parse recorded.
///
/// The tree is lossless: the text of the root node is exactly the input the
/// parser consumed. A `SyntaxTree` is immutable once returned and may be
/// shared freely across threads for reading; dropping it frees every node
/// it owns.
#[derive(Clone)]
pub struct SyntaxTree {
    pub(crate) ast: SyntaxNode,
    pub(crate) errors: Vec<Error>,
    pub(crate) recursion_limit: LimitTracker,
    pub(crate) token_limit: LimitTracker,
}

impl SyntaxTree {
    /// Everything that went wrong during the parse, ordered by source
    /// position.
    pub fn errors(&self) -> &[Error] {
        self.errors.as_ref()
    }

    /// Whether at least one directive parsed successfully.
    pub fn is_success(&self) -> bool {
        self.document().directives().next().is_some()
    }

    /// The root as a typed node, the entry point for walking directives.
    pub fn document(&self) -> ast::CypherInput {
        ast::CypherInput {
            syntax: self.ast.clone(),
        }
    }

    /// The untyped root node.
    pub fn syntax(&self) -> &SyntaxNode {
        &self.ast
    }

    /// The high-water mark and limit of parser recursion.
    pub fn recursion_limit(&self) -> LimitTracker {
        self.recursion_limit
    }

    /// The high-water mark and limit of tokens consumed.
    pub fn token_limit(&self) -> LimitTracker {
        self.token_limit
    }

    /// Render the structural AST dump: one line per node with its ordinal,
    /// range, kind and detail, children indented below their parent.
    ///
    /// `width` softly bounds the line length: detail strings that would
    /// exceed it are truncated with an ellipsis, structural information
    /// never is. `0` means unlimited. `colors` wraps every rendered element
    /// in the scheme's begin/end strings.
    pub fn print<W: io::Write>(
        &self,
        out: &mut W,
        width: usize,
        colors: &ColorScheme,
    ) -> io::Result<()> {
        printer::print_tree(out, &self.ast, width, colors)
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print(f: &mut fmt::Formatter<'_>, indent: usize, element: SyntaxElement) -> fmt::Result {
            let kind: SyntaxKind = element.kind();
            write!(f, "{:indent$}", "", indent = indent)?;
            match element {
                rowan::NodeOrToken::Node(node) => {
                    writeln!(f, "- {:?}@{:?}", kind, node.text_range())?;
                    for child in node.children_with_tokens() {
                        print(f, indent + 4, child)?;
                    }
                    Ok(())
                }
                rowan::NodeOrToken::Token(token) => {
                    writeln!(f, "- {:?}@{:?} {:?}", kind, token.text_range(), token.text())
                }
            }
        }

        print(f, 0, self.ast.clone().into())?;
        for err in &self.errors {
            writeln!(f, "- {err:?}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct SyntaxTreeBuilder {
    builder: GreenNodeBuilder<'static>,
}

impl SyntaxTreeBuilder {
    /// A builder with nothing in it yet.
    pub(crate) fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
        }
    }

    /// Open a node of `kind`; everything added from here on becomes its
    /// child until the matching `finish_node`.
    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        debug_assert!(
            kind.is_node(),
            "cannot start a node of token kind {kind:?}"
        );
        self.builder.start_node(rowan::SyntaxKind(kind as u16));
    }

    /// Close the innermost open node; its parent takes new children again.
    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(crate) fn checkpoint(&self) -> rowan::Checkpoint {
        self.builder.checkpoint()
    }

    /// Wrap everything built since `checkpoint` in a new node of `kind` and
    /// make it current.
    pub(crate) fn wrap_node(&mut self, checkpoint: rowan::Checkpoint, kind: SyntaxKind) {
        self.builder
            .start_node_at(checkpoint, rowan::SyntaxKind(kind as u16));
    }

    /// Append one leaf token to the innermost open node.
    pub(crate) fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.builder.token(rowan::SyntaxKind(kind as u16), text);
    }

    pub(crate) fn finish(
        self,
        mut errors: Vec<Error>,
        recursion_limit: LimitTracker,
        token_limit: LimitTracker,
    ) -> SyntaxTree {
        // position order, ties by insertion
        errors.sort_by_key(|err| err.index());
        SyntaxTree {
            ast: rowan::SyntaxNode::<CypherLanguage>::new_root(self.builder.finish()),
            errors,
            recursion_limit,
            token_limit,
        }
    }
}
