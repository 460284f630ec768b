use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// Identifier
///
/// ```txt
/// Identifier
///     Name
///     `Quoted Name`    (embedded backticks doubled)
/// ```
pub(crate) fn identifier(p: &mut Parser) {
    match p.peek() {
        Some(TokenKind::Name) => {
            let guard = p.start_node(SyntaxKind::IDENTIFIER);
            p.bump(S![ident]);
            guard.finish_node();
        }
        Some(TokenKind::QuotedName) => {
            let guard = p.start_node(SyntaxKind::IDENTIFIER);
            p.bump(SyntaxKind::QUOTED_IDENT);
            guard.finish_node();
        }
        _ => p.err("expected an identifier"),
    }
}

/// A property name; any name token is accepted, including keywords.
pub(crate) fn prop_name(p: &mut Parser) {
    name_node(p, SyntaxKind::PROP_NAME, "expected a property name");
}

pub(crate) fn index_name(p: &mut Parser) {
    name_node(p, SyntaxKind::INDEX_NAME, "expected an index name");
}

/// Label
///
/// ```txt
/// Label
///     : Name
/// ```
pub(crate) fn label(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::LABEL);
    p.expect(T![:], S![:]);
    bump_name(p, "expected a label name");
    guard.finish_node();
}

/// Relationship type; the leading colon is absent for the alternatives in
/// `[:KNOWS|LIKES]`.
pub(crate) fn reltype(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::RELTYPE);
    if p.at(T![:]) {
        p.bump(S![:]);
    }
    bump_name(p, "expected a relationship type");
    guard.finish_node();
}

/// A function name, possibly namespaced: `toUpper`, `db.labels`.
pub(crate) fn function_name(p: &mut Parser) {
    dotted_name(p, SyntaxKind::FUNCTION_NAME, "expected a function name");
}

/// A procedure name, possibly namespaced: `db.labels`.
pub(crate) fn proc_name(p: &mut Parser) {
    dotted_name(p, SyntaxKind::PROC_NAME, "expected a procedure name");
}

fn dotted_name(p: &mut Parser, kind: SyntaxKind, missing: &str) {
    let guard = p.start_node(kind);
    bump_name(p, missing);
    while p.at(T![.]) && p.peek_n(2) == Some(TokenKind::Name) {
        p.bump(S![.]);
        p.bump(S![ident]);
    }
    guard.finish_node();
}

fn name_node(p: &mut Parser, kind: SyntaxKind, missing: &str) {
    let guard = p.start_node(kind);
    bump_name(p, missing);
    guard.finish_node();
}

fn bump_name(p: &mut Parser, missing: &str) {
    match p.peek() {
        Some(TokenKind::Name) => p.bump(S![ident]),
        Some(TokenKind::QuotedName) => p.bump(SyntaxKind::QUOTED_IDENT),
        _ => p.err(missing),
    }
}
