use crate::parser::grammar::{atom, expression, name};
use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// START clause
///
/// ```txt
/// Start
///     START StartPoint, ... (WHERE Expression)?
/// StartPoint
///     Identifier = node ( * )                       all nodes scan
///     Identifier = node ( Integer, ... )            node id lookup
///     Identifier = node ( Parameter )               node id lookup
///     Identifier = node : IndexName ( PropName = String )   index lookup
///     Identifier = node : IndexName ( String )      index query
///     Identifier = rel ...                          (same forms)
/// ```
pub(crate) fn start_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::START);
    p.bump_kw(S![start]);
    start_point(p);
    while p.at(T![,]) {
        p.bump(S![,]);
        start_point(p);
    }
    expression::where_predicate(p);
    guard.finish_node();
}

fn start_point(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    name::identifier(p);
    p.expect(T![=], S![=]);

    let node = p.at_kw("NODE");
    let rel = p.at_kw("REL") || p.at_kw("RELATIONSHIP");
    if !node && !rel {
        p.err("expected a node or relationship lookup");
        return;
    }

    let kind = classify(p, node);
    let guard = checkpoint.wrap_node(kind);

    if node {
        p.bump_kw(S![node]);
    } else if p.at_kw("REL") {
        p.bump_kw(S![rel]);
    } else {
        p.bump_kw(S![relationship]);
    }

    if p.at(T![:]) {
        p.bump(S![:]);
        name::index_name(p);
        p.expect(T!['('], S!['(']);
        if matches!(
            kind,
            SyntaxKind::NODE_INDEX_LOOKUP | SyntaxKind::REL_INDEX_LOOKUP
        ) {
            name::prop_name(p);
            p.expect(T![=], S![=]);
            lookup_value(p);
        } else {
            lookup_value(p);
        }
        p.expect(T![')'], S![')']);
    } else {
        p.expect(T!['('], S!['(']);
        if p.at(T![*]) {
            p.bump(S![*]);
        } else if p.at(TokenKind::Dollar) || p.at(TokenKind::LCurly) {
            atom::atom(p);
        } else {
            atom::integer(p);
            while p.at(T![,]) {
                p.bump(S![,]);
                atom::integer(p);
            }
        }
        p.expect(T![')'], S![')']);
    }

    guard.finish_node();
}

/// A start point's shape is visible a few tokens ahead; pick its node kind
/// before anything is consumed.
fn classify(p: &mut Parser, node: bool) -> SyntaxKind {
    if p.peek_n(2) == Some(T![:]) {
        // `node:index(...)`: a string or parameter query, or `key = value`
        let lookup = p.peek_n(5) == Some(TokenKind::Name) && p.peek_n(6) == Some(T![=]);
        match (node, lookup) {
            (true, true) => SyntaxKind::NODE_INDEX_LOOKUP,
            (true, false) => SyntaxKind::NODE_INDEX_QUERY,
            (false, true) => SyntaxKind::REL_INDEX_LOOKUP,
            (false, false) => SyntaxKind::REL_INDEX_QUERY,
        }
    } else if p.peek_n(3) == Some(T![*]) {
        if node {
            SyntaxKind::ALL_NODES_SCAN
        } else {
            SyntaxKind::ALL_RELS_SCAN
        }
    } else if node {
        SyntaxKind::NODE_ID_LOOKUP
    } else {
        SyntaxKind::REL_ID_LOOKUP
    }
}

fn lookup_value(p: &mut Parser) {
    match p.peek() {
        Some(TokenKind::StringValue) => atom::string(p),
        Some(TokenKind::Dollar | TokenKind::LCurly) => atom::atom(p),
        _ => p.err("expected a string or parameter"),
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Clause, StartPoint};
    use crate::parser::grammar::utils::first_clause;

    fn points(input: &str) -> Vec<StartPoint> {
        let Clause::Start(start) = first_clause(input) else {
            panic!("expected START");
        };
        start.points().collect()
    }

    #[test]
    fn id_lookups_and_scans() {
        let points = points("START a = node(1, 2), b = node(*), r = rel(7) RETURN a;");
        assert_eq!(points.len(), 3);
        let StartPoint::NodeIdLookup(lookup) = &points[0] else {
            panic!("expected a node id lookup");
        };
        assert_eq!(lookup.identifier().unwrap().name(), "a");
        assert_eq!(lookup.ids().count(), 2);
        assert!(matches!(points[1], StartPoint::AllNodesScan(_)));
        assert!(matches!(points[2], StartPoint::RelIdLookup(_)));
    }

    #[test]
    fn index_lookup_and_query() {
        let points =
            points("START a = node:people(name = 'Alice'), b = node:people('na*') RETURN a;");
        let StartPoint::NodeIndexLookup(lookup) = &points[0] else {
            panic!("expected an index lookup");
        };
        assert_eq!(lookup.index_name().unwrap().name(), "people");
        assert_eq!(lookup.prop_name().unwrap().name(), "name");
        let StartPoint::NodeIndexQuery(query) = &points[1] else {
            panic!("expected an index query");
        };
        assert_eq!(query.index_name().unwrap().name(), "people");
    }
}
