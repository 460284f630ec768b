use crate::parser::grammar::{expression, name};
use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// DELETE clause
///
/// ```txt
/// Delete
///     DETACH? DELETE Expression, ...
/// ```
pub(crate) fn delete_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::DELETE);
    if p.at_kw("DETACH") {
        p.bump_kw(S![detach]);
    }
    p.expect_kw("DELETE", S![delete]);
    expression::expression(p);
    while p.at(T![,]) {
        p.bump(S![,]);
        expression::expression(p);
    }
    guard.finish_node();
}

/// REMOVE clause
///
/// ```txt
/// Remove
///     REMOVE RemoveItem, ...
/// RemoveItem
///     Identifier Label+            (remove labels)
///     PropertyExpression           (remove a property)
/// ```
pub(crate) fn remove_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::REMOVE);
    p.bump_kw(S![remove]);
    remove_item(p);
    while p.at(T![,]) {
        p.bump(S![,]);
        remove_item(p);
    }
    guard.finish_node();
}

fn remove_item(p: &mut Parser) {
    let simple_name = matches!(p.peek(), Some(TokenKind::Name | TokenKind::QuotedName));
    if simple_name && p.peek_n(2) == Some(TokenKind::Colon) {
        let guard = p.start_node(SyntaxKind::REMOVE_LABELS);
        name::identifier(p);
        while p.at(T![:]) {
            name::label(p);
        }
        guard.finish_node();
    } else {
        let guard = p.start_node(SyntaxKind::REMOVE_PROPERTY);
        expression::property_expression(p);
        guard.finish_node();
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Clause, RemoveItem};
    use crate::parser::grammar::utils::first_clause;

    #[test]
    fn detach_delete() {
        let Clause::Delete(delete) = first_clause("DETACH DELETE n, m;") else {
            panic!("expected DELETE");
        };
        assert!(delete.detach());
        assert_eq!(delete.expressions().count(), 2);
    }

    #[test]
    fn remove_items() {
        let Clause::Remove(remove) = first_clause("REMOVE n:Admin, n.age;") else {
            panic!("expected REMOVE");
        };
        let items: Vec<_> = remove.items().collect();
        assert_eq!(items.len(), 2);
        let RemoveItem::RemoveLabels(labels) = &items[0] else {
            panic!("expected labels");
        };
        assert_eq!(labels.identifier().unwrap().name(), "n");
        let RemoveItem::RemoveProperty(property) = &items[1] else {
            panic!("expected a property");
        };
        assert!(property.property().is_some());
    }
}
