use crate::parser::grammar::pattern;
use crate::{Parser, SyntaxKind, S};

/// CREATE clause
///
/// ```txt
/// Create
///     CREATE UNIQUE? Pattern
/// ```
pub(crate) fn create_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::CREATE);
    p.bump_kw(S![create]);
    if p.at_kw("UNIQUE") {
        p.bump_kw(S![unique]);
    }
    pattern::pattern(p);
    guard.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::ast::Clause;
    use crate::parser::grammar::utils::first_clause;

    #[test]
    fn create_unique() {
        let Clause::Create(create) = first_clause("CREATE UNIQUE (a)-[:KNOWS]->(b);") else {
            panic!("expected CREATE");
        };
        assert!(create.unique());
        assert!(create.pattern().is_some());
    }

    #[test]
    fn create_plain() {
        let Clause::Create(create) = first_clause("CREATE (a {name: 'A'});") else {
            panic!("expected CREATE");
        };
        assert!(!create.unique());
    }
}
