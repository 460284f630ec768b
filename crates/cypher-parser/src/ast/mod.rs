//! Typed accessors over the syntax tree.
//!
//! Each struct here wraps a [`SyntaxNode`] of one kind and exposes its
//! named slots as getter methods; each enum groups the kinds that may fill
//! one slot (for example any clause of a query). Wrapping costs nothing at
//! runtime — a typed node is the underlying syntax node, just with a kind
//! the type system can rely on.
//!
//! ## Example
//! ```rust
//! use cypher_parser::{ast, Parser};
//!
//! let tree = Parser::new("MATCH (n:Person) RETURN n.name;").parse();
//! assert!(tree.errors().is_empty());
//!
//! for directive in tree.document().directives() {
//!     let ast::Directive::Statement(statement) = directive else {
//!         continue;
//!     };
//!     let Some(ast::StatementBody::Query(query)) = statement.body() else {
//!         continue;
//!     };
//!     for clause in query.clauses() {
//!         if let ast::Clause::Match(clause) = clause {
//!             let pattern = clause.pattern().expect("MATCH has a pattern");
//!             assert_eq!(pattern.parts().count(), 1);
//!         }
//!     }
//! }
//! ```

mod node_ext;
mod nodes;

use std::marker::PhantomData;

use crate::{SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken};

pub use node_ext::{FloatValueError, IntValueError};
pub use nodes::*;

/// Implemented by every typed node: a kind test, a checked conversion
/// from a raw [`SyntaxNode`], and access back to it.
pub trait AstNode {
    fn can_cast(kind: SyntaxKind) -> bool
    where
        Self: Sized;

    fn cast(syntax: SyntaxNode) -> Option<Self>
    where
        Self: Sized;

    fn syntax(&self) -> &SyntaxNode;

    /// The source text this node spans.
    fn source_string(&self) -> String {
        self.syntax().to_string()
    }
}

/// Walks a node's children, yielding only those that cast to `N`.
#[derive(Debug, Clone)]
pub struct AstChildren<N> {
    inner: SyntaxNodeChildren,
    ph: PhantomData<N>,
}

impl<N> AstChildren<N> {
    fn new(parent: &SyntaxNode) -> Self {
        AstChildren {
            inner: parent.children(),
            ph: PhantomData,
        }
    }
}

impl<N: AstNode> Iterator for AstChildren<N> {
    type Item = N;
    fn next(&mut self) -> Option<N> {
        self.inner.find_map(N::cast)
    }
}

/// Generate the struct and `AstNode` boilerplate for a node of one kind.
macro_rules! ast_node {
    ($(#[$doc:meta])* $name:ident, $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            pub(crate) syntax: $crate::SyntaxNode,
        }

        impl $crate::ast::AstNode for $name {
            fn can_cast(kind: $crate::SyntaxKind) -> bool {
                kind == $crate::SyntaxKind::$kind
            }

            fn cast(syntax: $crate::SyntaxNode) -> Option<Self> {
                Self::can_cast(syntax.kind()).then_some(Self { syntax })
            }

            fn syntax(&self) -> &$crate::SyntaxNode {
                &self.syntax
            }
        }
    };
}

/// Generate an enum over several node types filling the same slot, with an
/// `AstNode` impl dispatching on kind.
macro_rules! ast_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($variant),)+
        }

        impl $crate::ast::AstNode for $name {
            fn can_cast(kind: $crate::SyntaxKind) -> bool {
                $(<$variant as $crate::ast::AstNode>::can_cast(kind))||+
            }

            fn cast(syntax: $crate::SyntaxNode) -> Option<Self> {
                $(
                    if <$variant as $crate::ast::AstNode>::can_cast(syntax.kind()) {
                        return <$variant as $crate::ast::AstNode>::cast(syntax)
                            .map(Self::$variant);
                    }
                )+
                None
            }

            fn syntax(&self) -> &$crate::SyntaxNode {
                match self {
                    $(Self::$variant(node) => node.syntax(),)+
                }
            }
        }
    };
}

pub(crate) use {ast_enum, ast_node};

pub(crate) mod support {
    use super::{AstChildren, AstNode, SyntaxKind, SyntaxNode, SyntaxToken};

    pub(crate) fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
        parent.children().find_map(N::cast)
    }

    pub(crate) fn children<N: AstNode>(parent: &SyntaxNode) -> AstChildren<N> {
        AstChildren::new(parent)
    }

    pub(crate) fn nth_child<N: AstNode>(parent: &SyntaxNode, n: usize) -> Option<N> {
        parent.children().filter_map(N::cast).nth(n)
    }

    pub(crate) fn token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
        parent
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|it| it.kind() == kind)
    }

    pub(crate) fn has_token(parent: &SyntaxNode, kind: SyntaxKind) -> bool {
        token(parent, kind).is_some()
    }

    /// The first `N`-castable child after the first token of kind `anchor`.
    /// Distinguishes same-typed slots separated by keywords, like the SKIP
    /// and LIMIT expressions of a RETURN.
    pub(crate) fn child_after<N: AstNode>(parent: &SyntaxNode, anchor: SyntaxKind) -> Option<N> {
        parent
            .children_with_tokens()
            .skip_while(|it| it.as_token().map(|t| t.kind()) != Some(anchor))
            .filter_map(|it| it.into_node())
            .find_map(N::cast)
    }

    /// The first `N`-castable child before the first token of kind
    /// `anchor`; when the anchor is absent the whole child list counts.
    pub(crate) fn child_before<N: AstNode>(parent: &SyntaxNode, anchor: SyntaxKind) -> Option<N> {
        parent
            .children_with_tokens()
            .take_while(|it| it.as_token().map(|t| t.kind()) != Some(anchor))
            .filter_map(|it| it.into_node())
            .find_map(N::cast)
    }

    /// The first `N`-castable child strictly between the first `after`
    /// token and the first following `before` token.
    pub(crate) fn child_between<N: AstNode>(
        parent: &SyntaxNode,
        after: SyntaxKind,
        before: SyntaxKind,
    ) -> Option<N> {
        parent
            .children_with_tokens()
            .skip_while(|it| it.as_token().map(|t| t.kind()) != Some(after))
            .take_while(|it| it.as_token().map(|t| t.kind()) != Some(before))
            .filter_map(|it| it.into_node())
            .find_map(N::cast)
    }
}
