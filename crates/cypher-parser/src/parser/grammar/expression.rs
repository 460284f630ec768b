use crate::parser::grammar::{atom, name};
use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// Expression, by descending precedence:
///
/// ```txt
/// OR < XOR < AND < NOT < comparison < string/list predicates
///    < + - < * / % < ^ < unary + - < subscript/slice/property/labels < atom
/// ```
///
/// Binary operators build left-nested BINARY_OPERATOR nodes, except `^`
/// which nests to the right and comparison chains which collapse into a
/// single COMPARISON node.
pub(crate) fn expression(p: &mut Parser) {
    let Some(_guard) = p.recursion_guard() else {
        return;
    };
    or_expression(p);
}

/// `WHERE Expression`, used by MATCH, WITH, START and the comprehensions.
/// The predicate is attached to the enclosing node; WHERE itself builds no
/// node.
pub(crate) fn where_predicate(p: &mut Parser) {
    if p.at_kw("WHERE") {
        p.bump_kw(S![where]);
        expression(p);
    }
}

/// A restricted expression for slots that a full expression would overrun:
/// SET and REMOVE targets, where `=` already means assignment.
pub(crate) fn property_expression(p: &mut Parser) {
    let Some(_guard) = p.recursion_guard() else {
        return;
    };
    postfix_expression(p);
}

fn or_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    xor_expression(p);
    while p.at_kw("OR") {
        let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
        p.bump_kw(S![or]);
        xor_expression(p);
        guard.finish_node();
    }
}

fn xor_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    and_expression(p);
    while p.at_kw("XOR") {
        let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
        p.bump_kw(S![xor]);
        and_expression(p);
        guard.finish_node();
    }
}

fn and_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    not_expression(p);
    while p.at_kw("AND") {
        let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
        p.bump_kw(S![and]);
        not_expression(p);
        guard.finish_node();
    }
}

fn not_expression(p: &mut Parser) {
    if p.at_kw("NOT") {
        let Some(_guard) = p.recursion_guard() else {
            return;
        };
        let guard = p.start_node(SyntaxKind::UNARY_OPERATOR);
        p.bump_kw(S![not]);
        not_expression(p);
        guard.finish_node();
    } else {
        comparison_expression(p);
    }
}

/// A chain like `a < b <= c` becomes one COMPARISON node over all three
/// operands.
fn comparison_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    string_predicate_expression(p);

    let mut guard = None;
    loop {
        let op = match p.peek() {
            Some(T![=]) => S![=],
            Some(T![<>]) => S![<>],
            Some(T![<]) => S![<],
            Some(T![<=]) => S![<=],
            Some(T![>]) => S![>],
            Some(T![>=]) => S![>=],
            _ => break,
        };
        if guard.is_none() {
            guard = Some(checkpoint.wrap_node(SyntaxKind::COMPARISON));
        }
        p.bump(op);
        string_predicate_expression(p);
    }
    if let Some(guard) = guard {
        guard.finish_node();
    }
}

/// STARTS WITH, ENDS WITH, CONTAINS, `=~`, IN, and the postfix
/// IS NULL / IS NOT NULL.
fn string_predicate_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    additive_expression(p);
    loop {
        if p.at_kw("STARTS") {
            let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
            p.bump_kw(S![starts]);
            p.expect_kw("WITH", S![with]);
            additive_expression(p);
            guard.finish_node();
        } else if p.at_kw("ENDS") {
            let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
            p.bump_kw(S![ends]);
            p.expect_kw("WITH", S![with]);
            additive_expression(p);
            guard.finish_node();
        } else if p.at_kw("CONTAINS") {
            let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
            p.bump_kw(S![contains]);
            additive_expression(p);
            guard.finish_node();
        } else if p.at_kw("IN") {
            let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
            p.bump_kw(S![in]);
            additive_expression(p);
            guard.finish_node();
        } else if p.at(T![=~]) {
            let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
            p.bump(S![=~]);
            additive_expression(p);
            guard.finish_node();
        } else if p.at_kw("IS") && p.at_kw_n(2, "NULL") {
            let guard = checkpoint.wrap_node(SyntaxKind::UNARY_OPERATOR);
            p.bump_kw(S![is]);
            p.bump_kw(S![null]);
            guard.finish_node();
        } else if p.at_kw("IS") && p.at_kw_n(2, "NOT") && p.at_kw_n(3, "NULL") {
            let guard = checkpoint.wrap_node(SyntaxKind::UNARY_OPERATOR);
            p.bump_kw(S![is]);
            p.bump_kw(S![not]);
            p.bump_kw(S![null]);
            guard.finish_node();
        } else {
            break;
        }
    }
}

fn additive_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    multiplicative_expression(p);
    loop {
        let op = match p.peek() {
            Some(T![+]) => S![+],
            Some(T![-]) => S![-],
            _ => break,
        };
        let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
        p.bump(op);
        multiplicative_expression(p);
        guard.finish_node();
    }
}

fn multiplicative_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    power_expression(p);
    loop {
        let op = match p.peek() {
            Some(T![*]) => S![*],
            Some(T![/]) => S![/],
            Some(T![%]) => S![%],
            _ => break,
        };
        let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
        p.bump(op);
        power_expression(p);
        guard.finish_node();
    }
}

/// `^` nests to the right: `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
fn power_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    unary_expression(p);
    if p.at(T![^]) {
        let Some(_limit) = p.recursion_guard() else {
            return;
        };
        let guard = checkpoint.wrap_node(SyntaxKind::BINARY_OPERATOR);
        p.bump(S![^]);
        power_expression(p);
        guard.finish_node();
    }
}

fn unary_expression(p: &mut Parser) {
    let op = match p.peek() {
        Some(T![+]) => S![+],
        Some(T![-]) => S![-],
        _ => {
            postfix_expression(p);
            return;
        }
    };
    let Some(_limit) = p.recursion_guard() else {
        return;
    };
    let guard = p.start_node(SyntaxKind::UNARY_OPERATOR);
    p.bump(op);
    unary_expression(p);
    guard.finish_node();
}

pub(crate) fn postfix_expression(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    atom::atom(p);
    loop {
        if p.at(T![.]) {
            let guard = checkpoint.wrap_node(SyntaxKind::PROPERTY_OPERATOR);
            p.bump(S![.]);
            name::prop_name(p);
            guard.finish_node();
        } else if p.at(T!['[']) {
            let kind = if slice_ahead(p) {
                SyntaxKind::SLICE_OPERATOR
            } else {
                SyntaxKind::SUBSCRIPT_OPERATOR
            };
            let guard = checkpoint.wrap_node(kind);
            p.bump(S!['[']);
            if kind == SyntaxKind::SLICE_OPERATOR {
                if !p.at(T![..]) {
                    expression(p);
                }
                p.expect(T![..], S![..]);
                if !p.at(T![']']) {
                    expression(p);
                }
            } else {
                expression(p);
            }
            p.expect(T![']'], S![']']);
            guard.finish_node();
        } else if p.at(T![:]) {
            let guard = checkpoint.wrap_node(SyntaxKind::LABELS_OPERATOR);
            while p.at(T![:]) {
                name::label(p);
            }
            guard.finish_node();
        } else {
            break;
        }
    }
}

/// Whether the bracket at the current token closes after a `..` at depth
/// one, i.e. is a slice rather than a subscript.
fn slice_ahead(p: &mut Parser) -> bool {
    let mut depth = 0usize;
    for n in 1..=128 {
        match p.peek_n(n) {
            Some(T!['['] | T!['('] | T!['{']) => depth += 1,
            Some(T![']'] | T![')'] | T!['}']) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return false;
                }
            }
            Some(T![..]) if depth == 1 => return true,
            Some(T![;]) | Some(TokenKind::Eof) | None => return false,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::ast::{AstNode, Clause, Expression};
    use crate::parser::grammar::utils::first_clause;
    use crate::SyntaxKind;

    pub(crate) fn parse_expression(input: &str) -> Expression {
        let source = format!("RETURN {input};");
        let Clause::Return(ret) = first_clause(&source) else {
            panic!("expected RETURN");
        };
        ret.projections()
            .next()
            .expect("one projection")
            .expression()
            .expect("an expression")
    }

    fn binary(expression: &Expression) -> crate::ast::BinaryOperator {
        crate::ast::BinaryOperator::cast(expression.syntax().clone())
            .unwrap_or_else(|| panic!("expected a binary operator: {expression:?}"))
    }

    #[test]
    fn precedence_or_and_comparison() {
        // ((a) OR ((b) AND (c = d)))
        let expression = parse_expression("a OR b AND c = d");
        let or = binary(&expression);
        assert_eq!(or.operator(), "OR");
        assert_eq!(or.left().unwrap().syntax().text(), "a");
        let and = binary(&or.right().unwrap());
        assert_eq!(and.operator(), "AND");
        assert_eq!(
            and.right().unwrap().syntax().kind(),
            SyntaxKind::COMPARISON
        );
    }

    #[test]
    fn arithmetic_precedence_and_associativity() {
        // (a + (b * c)), left-assoc: ((a + b) + c) for same level
        let expression = parse_expression("1 + 2 * 3");
        let plus = binary(&expression);
        assert_eq!(plus.operator(), "+");
        assert_eq!(binary(&plus.right().unwrap()).operator(), "*");

        let expression = parse_expression("1 - 2 - 3");
        let outer = binary(&expression);
        assert_eq!(outer.right().unwrap().syntax().text(), "3");
        assert_eq!(binary(&outer.left().unwrap()).operator(), "-");
    }

    #[test]
    fn power_is_right_associative() {
        let expression = parse_expression("2 ^ 3 ^ 2");
        let outer = binary(&expression);
        assert_eq!(outer.left().unwrap().syntax().text(), "2");
        assert_eq!(binary(&outer.right().unwrap()).operator(), "^");
    }

    #[test]
    fn comparison_chains_collapse() {
        let expression = parse_expression("1 < 2 <= 3");
        let comparison =
            crate::ast::Comparison::cast(expression.syntax().clone()).expect("a comparison");
        assert_eq!(comparison.length(), 2);
        assert_eq!(comparison.operands().count(), 3);
        assert_eq!(comparison.operators(), vec!["<", "<="]);
    }

    #[test]
    fn string_predicates() {
        let expression = parse_expression("name STARTS WITH 'A'");
        assert_eq!(binary(&expression).operator(), "STARTS WITH");

        let expression = parse_expression("1 IN [1, 2]");
        assert_eq!(binary(&expression).operator(), "IN");

        let expression = parse_expression("name =~ '.*a'");
        assert_eq!(binary(&expression).operator(), "=~");
    }

    #[test]
    fn is_null_is_postfix_unary() {
        let expression = parse_expression("n.missing IS NULL");
        let unary =
            crate::ast::UnaryOperator::cast(expression.syntax().clone()).expect("unary");
        assert_eq!(unary.operator(), "IS NULL");
        assert_eq!(
            unary.argument().unwrap().syntax().kind(),
            SyntaxKind::PROPERTY_OPERATOR
        );

        let expression = parse_expression("n.missing IS NOT NULL");
        let unary =
            crate::ast::UnaryOperator::cast(expression.syntax().clone()).expect("unary");
        assert_eq!(unary.operator(), "IS NOT NULL");
    }

    #[test]
    fn not_and_negation() {
        let expression = parse_expression("NOT NOT true");
        let outer = crate::ast::UnaryOperator::cast(expression.syntax().clone()).expect("unary");
        assert_eq!(outer.operator(), "NOT");
        let inner = outer.argument().unwrap();
        assert_eq!(inner.syntax().kind(), SyntaxKind::UNARY_OPERATOR);

        let expression = parse_expression("-1");
        let minus = crate::ast::UnaryOperator::cast(expression.syntax().clone()).expect("unary");
        assert_eq!(minus.operator(), "-");
    }

    #[test]
    fn postfix_operators() {
        let expression = parse_expression("a.b.c");
        assert_eq!(expression.syntax().kind(), SyntaxKind::PROPERTY_OPERATOR);

        let expression = parse_expression("list[0]");
        assert_eq!(expression.syntax().kind(), SyntaxKind::SUBSCRIPT_OPERATOR);

        let expression = parse_expression("list[1..3]");
        assert_eq!(expression.syntax().kind(), SyntaxKind::SLICE_OPERATOR);

        let expression = parse_expression("list[..2]");
        let slice = crate::ast::SliceOperator::cast(expression.syntax().clone()).unwrap();
        assert!(slice.start().is_none());
        assert_eq!(slice.end().unwrap().syntax().text(), "2");

        let expression = parse_expression("n:Person:Actor");
        let labels = crate::ast::LabelsOperator::cast(expression.syntax().clone()).unwrap();
        assert_eq!(labels.labels().count(), 2);
    }

    #[test]
    fn nested_subscript_of_slice() {
        let expression = parse_expression("m[a[0]..b[1]]");
        assert_eq!(expression.syntax().kind(), SyntaxKind::SLICE_OPERATOR);
    }
}
