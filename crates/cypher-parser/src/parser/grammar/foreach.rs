use crate::parser::grammar::{expression, name, query};
use crate::{Parser, SyntaxKind, S, T};

/// FOREACH clause
///
/// ```txt
/// Foreach
///     FOREACH ( Identifier IN Expression | Clause+ )
/// ```
pub(crate) fn foreach_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::FOREACH);
    p.bump_kw(S![foreach]);
    p.expect(T!['('], S!['(']);
    name::identifier(p);
    p.expect_kw("IN", S![in]);
    expression::expression(p);
    p.expect(T![|], S![|]);
    if !query::clause(p) {
        p.err("expected an updating clause");
    }
    while query::clause(p) {}
    p.expect(T![')'], S![')']);
    guard.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::ast::Clause;
    use crate::parser::grammar::utils::first_clause;

    #[test]
    fn foreach_runs_clauses_over_a_list() {
        let Clause::Foreach(foreach) =
            first_clause("FOREACH (x IN [1, 2, 3] | SET n.count = x CREATE (m {v: x}));")
        else {
            panic!("expected FOREACH");
        };
        assert_eq!(foreach.identifier().unwrap().name(), "x");
        assert!(foreach.expression().is_some());
        assert_eq!(foreach.clauses().count(), 2);
    }

    #[test]
    fn nested_foreach() {
        let Clause::Foreach(outer) =
            first_clause("FOREACH (xs IN lists | FOREACH (x IN xs | DELETE x));")
        else {
            panic!("expected FOREACH");
        };
        assert_eq!(outer.clauses().count(), 1);
    }
}
