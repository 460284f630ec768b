//! Whole-tree properties and end-to-end scenarios.

use crate::ast::{AstNode, Clause, Directive, StatementBody};
use crate::{ast, Ordinals, Parser, SyntaxKind, SyntaxNode};
use pretty_assertions::assert_eq;

const CORPUS: &[&str] = &[
    "RETURN 1;",
    "MATCH (n:Person) RETURN n.name;",
    "OPTIONAL MATCH (a)-[r:KNOWS*1..3]->(b) WHERE a.age > 21 RETURN a, r, b;",
    "CREATE CONSTRAINT ON (n:Book) ASSERT n.isbn IS UNIQUE;",
    "CREATE INDEX ON :Person(name, age);",
    "MERGE (n:Counter {id: 1}) ON CREATE SET n.count = 0 ON MATCH SET n.count = n.count + 1;",
    "START a = node(1, 2), b = rel:idx(key = 'v') WHERE a.live RETURN a;",
    "USING PERIODIC COMMIT 500 LOAD CSV WITH HEADERS FROM 'file:///x.csv' AS line \
     FIELDTERMINATOR ',' CREATE (n {name: line.name});",
    "WITH DISTINCT n, count(*) AS c ORDER BY c DESC SKIP 1 LIMIT 10 WHERE c > 2 RETURN *;",
    "UNWIND [1, 2, 3] AS x FOREACH (y IN [x] | SET n.v = y) RETURN x;",
    "RETURN CASE n.eyes WHEN 'blue' THEN 1 ELSE 2 END, reduce(acc = 0, x IN xs | acc + x);",
    "RETURN [x IN range(0, 10) WHERE x % 2 = 0 | x ^ 2], [(a)-->(b) | b.name];",
    "RETURN {name: 'Alice', tags: ['a', 'b'], deep: {p: $param}};",
    "CALL db.index.search('idx', $q) YIELD node, score RETURN node;",
    "MATCH p = shortestPath((a)-[*..5]->(b)) RETURN length(p);",
    "RETURN 1 UNION ALL RETURN 2;",
    "// a comment\n:play movies\nEXPLAIN RETURN 1;",
    "DETACH DELETE n; REMOVE n:Label, n.prop; SET n += {a: 1};",
];

fn kinds_tree(node: &SyntaxNode) -> String {
    let mut out = String::new();
    fn walk(node: &SyntaxNode, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{:?}\n", node.kind()));
        for child in node.children() {
            walk(&child, depth + 1, out);
        }
    }
    walk(node, 0, &mut out);
    out
}

#[test]
fn tree_text_reconstructs_the_input() {
    for input in CORPUS {
        let tree = Parser::new(input).parse();
        assert_eq!(
            tree.syntax().text().to_string(),
            **input,
            "lossless parse of {input:?}"
        );
    }
}

#[test]
fn reparsing_the_tree_text_is_structurally_identical() {
    for input in CORPUS {
        let first = Parser::new(input).parse();
        let second = Parser::new(&first.syntax().text().to_string()).parse();
        assert_eq!(
            kinds_tree(first.syntax()),
            kinds_tree(second.syntax()),
            "structural round-trip of {input:?}"
        );
    }
}

#[test]
fn child_ranges_nest_within_parents() {
    for input in CORPUS {
        let tree = Parser::new(input).parse();
        for node in tree.syntax().descendants() {
            let range = node.text_range();
            for child in node.children() {
                let child_range = child.text_range();
                assert!(
                    range.contains_range(child_range),
                    "{child_range:?} outside {range:?} in {input:?}"
                );
            }
        }
    }
}

#[test]
fn ordinals_are_dense_and_unique() {
    for input in CORPUS {
        let tree = Parser::new(input).parse();
        let ordinals = Ordinals::of(tree.syntax());
        let mut seen = vec![false; ordinals.len()];
        for node in tree.syntax().descendants().skip(1) {
            let ordinal = ordinals.get(&node).expect("every node has an ordinal") as usize;
            assert!(!seen[ordinal], "duplicate ordinal in {input:?}");
            seen[ordinal] = true;
        }
        assert!(seen.iter().all(|seen| *seen), "gap in ordinals of {input:?}");
    }
}

#[test]
fn errors_are_ordered_by_position() {
    let tree = Parser::new("RETURN 1 +; MATCH (n RETURN x; RETURN ~;").parse();
    let errors = tree.errors();
    assert!(errors.len() >= 2);
    for pair in errors.windows(2) {
        assert!(pair[0].index() <= pair[1].index());
    }
}

#[test]
fn named_slots_point_into_the_children_list() {
    let tree = Parser::new("CREATE CONSTRAINT ON (n:Book) ASSERT n.isbn IS UNIQUE;").parse();
    let Directive::Statement(statement) = tree.document().directives().next().unwrap() else {
        panic!("expected a statement");
    };
    let StatementBody::CreateUniqueNodePropConstraint(constraint) = statement.body().unwrap()
    else {
        panic!("expected a unique constraint");
    };

    let children: Vec<SyntaxNode> = constraint.syntax().children().collect();
    let identifier = constraint.identifier().unwrap();
    let label = constraint.label().unwrap();
    let expression = constraint.expression().unwrap();
    assert!(children.contains(identifier.syntax()));
    assert!(children.contains(label.syntax()));
    assert!(children.contains(expression.syntax()));

    assert!(identifier.syntax().kind().is_a(SyntaxKind::EXPRESSION));
    assert!(expression.syntax().kind().is_a(SyntaxKind::EXPRESSION));
}

#[test]
fn scenario_return_integer() {
    let tree = Parser::new("RETURN 1;").parse();
    assert_eq!(tree.errors(), &[]);
    let directives: Vec<_> = tree.document().directives().collect();
    assert_eq!(directives.len(), 1);
    let Directive::Statement(statement) = &directives[0] else {
        panic!("expected a statement");
    };
    let StatementBody::Query(query) = statement.body().unwrap() else {
        panic!("expected a query");
    };
    let Clause::Return(ret) = query.clauses().next().unwrap() else {
        panic!("expected RETURN");
    };
    let projection = ret.projections().next().unwrap();
    let value = ast::Integer::cast(projection.expression().unwrap().syntax().clone()).unwrap();
    assert_eq!(value.value(), Ok(1));
}

#[test]
fn scenario_match_return_property() {
    let tree = Parser::new("MATCH (n:Person) RETURN n.name;").parse();
    assert_eq!(tree.errors(), &[]);
    let Directive::Statement(statement) = tree.document().directives().next().unwrap() else {
        panic!("expected a statement");
    };
    let StatementBody::Query(query) = statement.body().unwrap() else {
        panic!("expected a query");
    };
    let clauses: Vec<_> = query.clauses().collect();
    let Clause::Match(match_clause) = &clauses[0] else {
        panic!("expected MATCH");
    };
    let pattern = match_clause.pattern().unwrap();
    let ast::PatternPart::PatternPath(path) = pattern.parts().next().unwrap() else {
        panic!("expected a plain path");
    };
    let node = path.nodes().next().unwrap();
    assert_eq!(node.identifier().unwrap().name(), "n");
    assert_eq!(node.labels().next().unwrap().name(), "Person");

    let Clause::Return(ret) = &clauses[1] else {
        panic!("expected RETURN");
    };
    let projection = ret.projections().next().unwrap();
    let property =
        ast::PropertyOperator::cast(projection.expression().unwrap().syntax().clone()).unwrap();
    let base = ast::Identifier::cast(property.expression().unwrap().syntax().clone()).unwrap();
    assert_eq!(base.name(), "n");
    assert_eq!(property.prop_name().unwrap().name(), "name");
}

#[test]
fn scenario_unique_constraint() {
    let tree = Parser::new("CREATE CONSTRAINT ON (n:Book) ASSERT n.isbn IS UNIQUE;").parse();
    assert_eq!(tree.errors(), &[]);
    let Directive::Statement(statement) = tree.document().directives().next().unwrap() else {
        panic!("expected a statement");
    };
    let StatementBody::CreateUniqueNodePropConstraint(constraint) = statement.body().unwrap()
    else {
        panic!("expected a unique constraint");
    };
    assert_eq!(constraint.identifier().unwrap().name(), "n");
    assert_eq!(constraint.label().unwrap().name(), "Book");
    assert_eq!(
        constraint.expression().unwrap().syntax().text().to_string(),
        "n.isbn"
    );
}

#[test]
fn scenario_incomplete_expression() {
    let tree = Parser::new("RETURN 1 +;").parse();
    assert_eq!(tree.document().directives().count(), 0);
    assert!(!tree.is_success());
    let errors = tree.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].index(), 10);
    assert_eq!(errors[0].position().column, 11);
    assert_eq!(errors[0].context(), "RETURN 1 +;");
    assert_eq!(errors[0].context_offset(), 10);
    assert_eq!(&errors[0].context()[errors[0].context_offset()..], ";");
}

#[test]
fn scenario_leading_comment() {
    let tree = Parser::new("// hello\nRETURN 1;").parse();
    assert_eq!(tree.errors(), &[]);
    let directives: Vec<_> = tree.document().directives().collect();
    assert_eq!(directives.len(), 2);
    let Directive::LineComment(comment) = &directives[0] else {
        panic!("expected a comment first");
    };
    assert_eq!(comment.text(), " hello");
    assert!(matches!(directives[1], Directive::Statement(_)));
}

#[test]
fn scenario_unicode_escape() {
    let tree = Parser::new(r#"RETURN "a\u0041";"#).parse();
    assert_eq!(tree.errors(), &[]);
    let Directive::Statement(statement) = tree.document().directives().next().unwrap() else {
        panic!("expected a statement");
    };
    let StatementBody::Query(query) = statement.body().unwrap() else {
        panic!("expected a query");
    };
    let Clause::Return(ret) = query.clauses().next().unwrap() else {
        panic!("expected RETURN");
    };
    let projection = ret.projections().next().unwrap();
    let literal =
        ast::StringLiteral::cast(projection.expression().unwrap().syntax().clone()).unwrap();
    assert_eq!(literal.value(), "aA");
}

#[test]
fn parse_reader_round_trip() {
    let tree = crate::parse_reader("RETURN 1;".as_bytes()).unwrap();
    assert!(tree.is_success());
}

#[test]
fn parse_reader_rejects_invalid_utf8() {
    let err = crate::parse_reader(&[0xff, 0xfe, b'a'][..]).unwrap_err();
    assert!(matches!(err, crate::ReadError::Io(_)));
}

#[test]
fn results_are_immutable_once_returned() {
    let tree = Parser::new("MATCH (n) RETURN n;").parse();
    let before = format!("{tree:?}");
    let _ = tree.document().directives().count();
    let _ = tree.errors();
    assert_eq!(format!("{tree:?}"), before);
}
