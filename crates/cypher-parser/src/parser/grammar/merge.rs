use crate::parser::grammar::{pattern, set};
use crate::{Parser, SyntaxKind, S};

/// MERGE clause
///
/// ```txt
/// Merge
///     MERGE PatternPart MergeAction*
/// MergeAction
///     ON MATCH SET SetItem, ...
///     ON CREATE SET SetItem, ...
/// ```
pub(crate) fn merge_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::MERGE);
    p.bump_kw(S![merge]);
    pattern::pattern_part(p);
    while p.at_kw("ON") {
        merge_action(p);
    }
    guard.finish_node();
}

fn merge_action(p: &mut Parser) {
    if p.at_kw_n(2, "MATCH") {
        let guard = p.start_node(SyntaxKind::ON_MATCH);
        p.bump_kw(S![on]);
        p.bump_kw(S![match]);
        p.expect_kw("SET", S![set]);
        set::set_items(p);
        guard.finish_node();
    } else if p.at_kw_n(2, "CREATE") {
        let guard = p.start_node(SyntaxKind::ON_CREATE);
        p.bump_kw(S![on]);
        p.bump_kw(S![create]);
        p.expect_kw("SET", S![set]);
        set::set_items(p);
        guard.finish_node();
    } else {
        p.err_and_pop("expected ON MATCH or ON CREATE");
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Clause, MergeAction, SetItem};
    use crate::parser::grammar::utils::first_clause;

    #[test]
    fn merge_with_actions() {
        let Clause::Merge(merge) = first_clause(
            "MERGE (n:Person {name: 'X'}) ON CREATE SET n.created = 1 ON MATCH SET n.seen = 2;",
        ) else {
            panic!("expected MERGE");
        };
        assert!(merge.path().is_some());
        let actions: Vec<_> = merge.actions().collect();
        assert_eq!(actions.len(), 2);
        let MergeAction::OnCreate(on_create) = &actions[0] else {
            panic!("expected ON CREATE first");
        };
        let items: Vec<_> = on_create.items().collect();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], SetItem::SetProperty(_)));
        assert!(matches!(actions[1], MergeAction::OnMatch(_)));
    }

    #[test]
    fn merge_named_path() {
        let Clause::Merge(merge) = first_clause("MERGE p = (a)-[:R]->(b) RETURN p;") else {
            panic!("expected MERGE");
        };
        assert!(merge.path().is_some());
    }
}
