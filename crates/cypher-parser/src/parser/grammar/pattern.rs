use crate::parser::grammar::{atom, name};
use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// Pattern
///
/// ```txt
/// Pattern
///     PatternPart, ...
/// PatternPart
///     Identifier = AnonPattern
///     AnonPattern
/// AnonPattern
///     shortestPath ( PatternPath )
///     allShortestPaths ( PatternPath )
///     PatternPath
/// PatternPath
///     NodePattern (RelPattern NodePattern)*
/// ```
pub(crate) fn pattern(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::PATTERN);
    pattern_part(p);
    while p.at(T![,]) {
        p.bump(S![,]);
        pattern_part(p);
    }
    guard.finish_node();
}

pub(crate) fn pattern_part(p: &mut Parser) {
    if matches!(p.peek(), Some(TokenKind::Name | TokenKind::QuotedName))
        && p.peek_n(2) == Some(TokenKind::Eq)
    {
        let guard = p.start_node(SyntaxKind::NAMED_PATH);
        name::identifier(p);
        p.bump(S![=]);
        anon_pattern(p);
        guard.finish_node();
    } else {
        anon_pattern(p);
    }
}

fn anon_pattern(p: &mut Parser) {
    if p.at_kw("SHORTESTPATH") || p.at_kw("ALLSHORTESTPATHS") {
        shortest_path(p);
    } else {
        pattern_path(p);
    }
}

pub(crate) fn shortest_path(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::SHORTEST_PATH);
    if p.at_kw("SHORTESTPATH") {
        p.bump_kw(S![shortestpath]);
    } else {
        p.bump_kw(S![allshortestpaths]);
    }
    p.expect(T!['('], S!['(']);
    pattern_path(p);
    p.expect(T![')'], S![')']);
    guard.finish_node();
}

pub(crate) fn pattern_path(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::PATTERN_PATH);
    node_pattern(p);
    while at_rel_start(p) {
        rel_pattern(p);
        node_pattern(p);
    }
    guard.finish_node();
}

/// A relationship continues the path only as `<-`, `-[`, `--` or `->`;
/// anything else after a node pattern belongs to the surrounding grammar.
fn at_rel_start(p: &mut Parser) -> bool {
    match p.peek() {
        Some(T![<]) => p.peek_n(2) == Some(T![-]),
        Some(T![-]) => matches!(p.peek_n(2), Some(T!['['] | T![-] | T![>])),
        _ => false,
    }
}

/// `( Identifier? Label* Properties? )`
fn node_pattern(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::NODE_PATTERN);
    p.expect(T!['('], S!['(']);
    if matches!(p.peek(), Some(TokenKind::Name | TokenKind::QuotedName)) {
        name::identifier(p);
    }
    while p.at(T![:]) {
        name::label(p);
    }
    properties(p);
    p.expect(T![')'], S![')']);
    guard.finish_node();
}

/// `<-[ Identifier? RelTypes? Range? Properties? ]->` and its shorter
/// forms, down to a bare `--`.
fn rel_pattern(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::REL_PATTERN);
    if p.at(T![<]) {
        p.bump(S![<]);
    }
    p.expect(T![-], S![-]);

    if p.at(T!['[']) {
        p.bump(S!['[']);
        if matches!(p.peek(), Some(TokenKind::Name | TokenKind::QuotedName)) {
            name::identifier(p);
        }
        if p.at(T![:]) {
            name::reltype(p);
            while p.at(T![|]) {
                p.bump(S![|]);
                name::reltype(p);
            }
        }
        if p.at(T![*]) {
            range(p);
        }
        properties(p);
        p.expect(T![']'], S![']']);
    }

    p.expect(T![-], S![-]);
    if p.at(T![>]) {
        p.bump(S![>]);
    }
    guard.finish_node();
}

/// `*`, `*2`, `*1..3`, `*..3`
fn range(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::RANGE);
    p.bump(S![*]);
    if p.at(TokenKind::Int) {
        atom::integer(p);
    }
    if p.at(T![..]) {
        p.bump(S![..]);
        if p.at(TokenKind::Int) {
            atom::integer(p);
        }
    }
    guard.finish_node();
}

fn properties(p: &mut Parser) {
    match p.peek() {
        Some(TokenKind::LCurly) => atom::curly_atom(p),
        Some(TokenKind::Dollar) => atom::parameter(p),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{AstNode, Clause, PathElement, PatternPart, RelDirection};
    use crate::parser::grammar::utils::first_clause;

    fn parts(input: &str) -> Vec<PatternPart> {
        let Clause::Match(clause) = first_clause(input) else {
            panic!("expected MATCH");
        };
        clause.pattern().expect("a pattern").parts().collect()
    }

    #[test]
    fn node_pattern_pieces() {
        let parts = parts("MATCH (n:Person:Actor {name: 'Alice'}) RETURN n;");
        let PatternPart::PatternPath(path) = &parts[0] else {
            panic!("expected a plain path");
        };
        let elements: Vec<_> = path.elements().collect();
        assert_eq!(elements.len(), 1);
        let PathElement::NodePattern(node) = &elements[0] else {
            panic!("expected a node pattern");
        };
        assert_eq!(node.identifier().unwrap().name(), "n");
        let labels: Vec<String> = node.labels().map(|label| label.name()).collect();
        assert_eq!(labels, vec!["Person", "Actor"]);
        assert!(node.properties().is_some());
    }

    #[test]
    fn rel_pattern_directions() {
        let parts = parts("MATCH (a)-->(b)<--(c)--(d) RETURN a;");
        let PatternPart::PatternPath(path) = &parts[0] else {
            panic!("expected a path");
        };
        let directions: Vec<_> = path
            .elements()
            .filter_map(|element| match element {
                PathElement::RelPattern(rel) => Some(rel.direction()),
                PathElement::NodePattern(_) => None,
            })
            .collect();
        assert_eq!(
            directions,
            vec![
                RelDirection::Outbound,
                RelDirection::Inbound,
                RelDirection::Bidirectional
            ]
        );
    }

    #[test]
    fn rel_detail() {
        let parts = parts("MATCH (a)-[r:KNOWS|LIKES*1..3 {since: 2020}]->(b) RETURN r;");
        let PatternPart::PatternPath(path) = &parts[0] else {
            panic!("expected a path");
        };
        let rel = path
            .elements()
            .find_map(|element| match element {
                PathElement::RelPattern(rel) => Some(rel),
                PathElement::NodePattern(_) => None,
            })
            .expect("a rel pattern");
        assert_eq!(rel.identifier().unwrap().name(), "r");
        let types: Vec<String> = rel.reltypes().map(|reltype| reltype.name()).collect();
        assert_eq!(types, vec!["KNOWS", "LIKES"]);
        let range = rel.varlength().expect("a range");
        assert_eq!(range.start().unwrap().text(), "1");
        assert_eq!(range.end().unwrap().text(), "3");
        assert!(rel.properties().is_some());
    }

    #[test]
    fn named_and_shortest_paths() {
        let parts = parts("MATCH p = shortestPath((a)-[*]->(b)), q = (c)--(d) RETURN p;");
        assert_eq!(parts.len(), 2);
        let PatternPart::NamedPath(named) = &parts[0] else {
            panic!("expected a named path");
        };
        assert_eq!(named.identifier().unwrap().name(), "p");
        let inner = named.path().expect("inner path");
        assert_eq!(inner.syntax().kind(), crate::SyntaxKind::SHORTEST_PATH);
        assert!(matches!(parts[1], PatternPart::NamedPath(_)));
    }

    #[test]
    fn unbounded_varlength() {
        let parts = parts("MATCH (a)-[*]->(b) RETURN a;");
        let PatternPart::PatternPath(path) = &parts[0] else {
            panic!("expected a path");
        };
        let rel = path
            .elements()
            .find_map(|element| match element {
                PathElement::RelPattern(rel) => Some(rel),
                PathElement::NodePattern(_) => None,
            })
            .unwrap();
        let range = rel.varlength().expect("a range");
        assert!(range.start().is_none());
        assert!(range.end().is_none());
    }
}
