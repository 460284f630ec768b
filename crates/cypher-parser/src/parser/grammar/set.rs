use crate::parser::grammar::{expression, name};
use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// SET clause
///
/// ```txt
/// Set
///     SET SetItem, ...
/// SetItem
///     PropertyExpression = Expression      (set one property)
///     Identifier = Expression              (replace all properties)
///     Identifier += Expression             (merge properties)
///     Identifier Label+                    (add labels)
/// ```
pub(crate) fn set_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::SET);
    p.bump_kw(S![set]);
    set_items(p);
    guard.finish_node();
}

pub(crate) fn set_items(p: &mut Parser) {
    set_item(p);
    while p.at(T![,]) {
        p.bump(S![,]);
        set_item(p);
    }
}

fn set_item(p: &mut Parser) {
    let simple_name = matches!(p.peek(), Some(TokenKind::Name | TokenKind::QuotedName));
    if simple_name && p.peek_n(2) == Some(TokenKind::Colon) {
        let guard = p.start_node(SyntaxKind::SET_LABELS);
        name::identifier(p);
        while p.at(T![:]) {
            name::label(p);
        }
        guard.finish_node();
    } else if simple_name && p.peek_n(2) == Some(TokenKind::Eq) {
        let guard = p.start_node(SyntaxKind::SET_ALL_PROPERTIES);
        name::identifier(p);
        p.bump(S![=]);
        expression::expression(p);
        guard.finish_node();
    } else if simple_name && p.peek_n(2) == Some(TokenKind::PlusEq) {
        let guard = p.start_node(SyntaxKind::MERGE_PROPERTIES);
        name::identifier(p);
        p.bump(S![+=]);
        expression::expression(p);
        guard.finish_node();
    } else {
        // the lhs must stop before `=`, which full expressions would
        // consume as equality
        let guard = p.start_node(SyntaxKind::SET_PROPERTY);
        expression::property_expression(p);
        p.expect(T![=], S![=]);
        expression::expression(p);
        guard.finish_node();
    }
}
