use crate::parser::grammar::{expression, name};
use crate::{Parser, SyntaxKind, S, T};

/// RETURN clause
///
/// ```txt
/// Return
///     RETURN DISTINCT? ProjectionBody
/// ProjectionBody
///     (* | Projection, ...) OrderBy? (SKIP Expression)? (LIMIT Expression)?
/// Projection
///     Expression (AS Identifier)?
/// ```
pub(crate) fn return_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::RETURN);
    p.bump_kw(S![return]);
    projection_body(p);
    guard.finish_node();
}

/// WITH clause; a RETURN body plus an optional predicate.
pub(crate) fn with_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::WITH);
    p.bump_kw(S![with]);
    projection_body(p);
    expression::where_predicate(p);
    guard.finish_node();
}

/// UNWIND clause
///
/// ```txt
/// Unwind
///     UNWIND Expression AS Identifier
/// ```
pub(crate) fn unwind_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::UNWIND);
    p.bump_kw(S![unwind]);
    expression::expression(p);
    p.expect_kw("AS", S![as]);
    name::identifier(p);
    guard.finish_node();
}

fn projection_body(p: &mut Parser) {
    if p.at_kw("DISTINCT") {
        p.bump_kw(S![distinct]);
    }

    if p.at(T![*]) {
        p.bump(S![*]);
        if p.at(T![,]) {
            p.bump(S![,]);
            projections(p);
        }
    } else {
        projections(p);
    }

    if p.at_kw("ORDER") {
        order_by(p);
    }
    if p.at_kw("SKIP") {
        p.bump_kw(S![skip]);
        expression::expression(p);
    }
    if p.at_kw("LIMIT") {
        p.bump_kw(S![limit]);
        expression::expression(p);
    }
}

fn projections(p: &mut Parser) {
    projection(p);
    while p.at(T![,]) {
        p.bump(S![,]);
        projection(p);
    }
}

pub(crate) fn projection(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::PROJECTION);
    expression::expression(p);
    if p.at_kw("AS") {
        p.bump_kw(S![as]);
        name::identifier(p);
    }
    guard.finish_node();
}

fn order_by(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::ORDER_BY);
    p.bump_kw(S![order]);
    p.expect_kw("BY", S![by]);
    sort_item(p);
    while p.at(T![,]) {
        p.bump(S![,]);
        sort_item(p);
    }
    guard.finish_node();
}

fn sort_item(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::SORT_ITEM);
    expression::expression(p);
    if p.at_kw("ASC") {
        p.bump_kw(S![asc]);
    } else if p.at_kw("ASCENDING") {
        p.bump_kw(S![ascending]);
    } else if p.at_kw("DESC") {
        p.bump_kw(S![desc]);
    } else if p.at_kw("DESCENDING") {
        p.bump_kw(S![descending]);
    }
    guard.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::ast::{AstNode, Clause};
    use crate::parser::grammar::utils::first_clause;
    use crate::SyntaxKind;

    #[test]
    fn return_with_alias_order_skip_limit() {
        let Clause::Return(ret) = first_clause(
            "RETURN DISTINCT n.name AS name ORDER BY n.age DESC, n.name SKIP 5 LIMIT 10;",
        ) else {
            panic!("expected RETURN");
        };
        assert!(ret.distinct());
        assert!(!ret.include_existing());
        let projections: Vec<_> = ret.projections().collect();
        assert_eq!(projections.len(), 1);
        assert_eq!(projections[0].alias().unwrap().name(), "name");
        assert_eq!(
            projections[0].expression().unwrap().syntax().kind(),
            SyntaxKind::PROPERTY_OPERATOR
        );

        let order_by = ret.order_by().expect("ORDER BY");
        let items: Vec<_> = order_by.items().collect();
        assert_eq!(items.len(), 2);
        assert!(!items[0].ascending());
        assert!(items[1].ascending());

        assert_eq!(ret.skip().unwrap().syntax().text(), "5");
        assert_eq!(ret.limit().unwrap().syntax().text(), "10");
    }

    #[test]
    fn return_star() {
        let Clause::Return(ret) = first_clause("RETURN *;") else {
            panic!("expected RETURN");
        };
        assert!(ret.include_existing());
        assert_eq!(ret.projections().count(), 0);
    }

    #[test]
    fn with_where() {
        let Clause::With(with) = first_clause("WITH n, count(*) AS c WHERE c > 1 RETURN c;")
        else {
            panic!("expected WITH");
        };
        assert_eq!(with.projections().count(), 2);
        assert!(with.predicate().is_some());
    }

    #[test]
    fn unwind() {
        let Clause::Unwind(unwind) = first_clause("UNWIND [1, 2] AS x RETURN x;") else {
            panic!("expected UNWIND");
        };
        assert_eq!(unwind.alias().unwrap().name(), "x");
        assert_eq!(
            unwind.expression().unwrap().syntax().kind(),
            SyntaxKind::COLLECTION
        );
    }
}
