use crate::SyntaxKind;

/// An interior node of the immutable tree; its children are further nodes
/// and tokens.
pub type SyntaxNode = rowan::SyntaxNode<CypherLanguage>;
/// A leaf of the tree, carrying source text.
pub type SyntaxToken = rowan::SyntaxToken<CypherLanguage>;
/// Either a node or a token.
pub type SyntaxElement = rowan::SyntaxElement<CypherLanguage>;
/// Iterator over a node's child nodes.
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<CypherLanguage>;
/// A stable, hashable pointer to a node within its tree.
pub type SyntaxNodePtr = rowan::ast::SyntaxNodePtr<CypherLanguage>;

/// Ties the Cypher [`SyntaxKind`] set to rowan's untyped tree machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CypherLanguage {}

impl rowan::Language for CypherLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= (SyntaxKind::__LAST as u16));
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind.into())
    }
}
