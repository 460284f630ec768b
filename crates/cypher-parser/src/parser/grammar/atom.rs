use crate::parser::grammar::{expression, name, pattern};
use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// The atoms of the expression grammar: literals, identifiers, parameters,
/// containers, comprehensions, CASE, function application, and pattern
/// expressions.
pub(crate) fn atom(p: &mut Parser) {
    match p.peek() {
        Some(TokenKind::Int) => integer(p),
        Some(TokenKind::Float) => float(p),
        Some(TokenKind::StringValue) => string(p),
        Some(TokenKind::Dollar) => parameter(p),
        Some(TokenKind::LParen) => paren_or_pattern(p),
        Some(TokenKind::LBracket) => bracket_atom(p),
        Some(TokenKind::LCurly) => curly_atom(p),
        Some(TokenKind::Name) => name_atom(p),
        Some(TokenKind::QuotedName) => name::identifier(p),
        _ => p.err("expected an expression"),
    }
}

pub(crate) fn integer(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::INTEGER);
    p.expect(TokenKind::Int, SyntaxKind::INT_NUMBER);
    guard.finish_node();
}

pub(crate) fn float(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::FLOAT);
    p.bump(SyntaxKind::FLOAT_NUMBER);
    guard.finish_node();
}

pub(crate) fn string(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::STRING);
    p.bump(SyntaxKind::STRING_VALUE);
    guard.finish_node();
}

/// `$name`, `$0`
pub(crate) fn parameter(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::PARAMETER);
    p.bump(SyntaxKind::DOLLAR);
    match p.peek() {
        Some(TokenKind::Name) => p.bump(S![ident]),
        Some(TokenKind::QuotedName) => p.bump(SyntaxKind::QUOTED_IDENT),
        Some(TokenKind::Int) => p.bump(SyntaxKind::INT_NUMBER),
        _ => p.err("expected a parameter name"),
    }
    guard.finish_node();
}

fn name_atom(p: &mut Parser) {
    let applied = p.peek_n(2) == Some(T!['(']) || dotted_apply_ahead(p);
    if p.at_kw("TRUE") && !applied {
        literal(p, SyntaxKind::TRUE, S![true]);
    } else if p.at_kw("FALSE") && !applied {
        literal(p, SyntaxKind::FALSE, S![false]);
    } else if p.at_kw("NULL") && !applied {
        literal(p, SyntaxKind::NULL, S![null]);
    } else if p.at_kw("CASE") {
        case_expression(p);
    } else if p.at_kw("FILTER") && p.peek_n(2) == Some(T!['(']) {
        filter_like(p, SyntaxKind::FILTER, S![filter], false);
    } else if p.at_kw("EXTRACT") && p.peek_n(2) == Some(T!['(']) {
        filter_like(p, SyntaxKind::EXTRACT, S![extract], true);
    } else if p.at_kw("ALL") && p.peek_n(2) == Some(T!['(']) {
        filter_like(p, SyntaxKind::ALL, S![all], false);
    } else if p.at_kw("ANY") && p.peek_n(2) == Some(T!['(']) {
        filter_like(p, SyntaxKind::ANY, S![any], false);
    } else if p.at_kw("NONE") && p.peek_n(2) == Some(T!['(']) {
        filter_like(p, SyntaxKind::NONE, S![none], false);
    } else if p.at_kw("SINGLE") && p.peek_n(2) == Some(T!['(']) {
        filter_like(p, SyntaxKind::SINGLE, S![single], false);
    } else if p.at_kw("REDUCE") && p.peek_n(2) == Some(T!['(']) {
        reduce_expression(p);
    } else if (p.at_kw("SHORTESTPATH") || p.at_kw("ALLSHORTESTPATHS"))
        && p.peek_n(2) == Some(T!['('])
    {
        pattern::shortest_path(p);
    } else if applied {
        apply(p);
    } else {
        name::identifier(p);
    }
}

fn literal(p: &mut Parser, kind: SyntaxKind, keyword: SyntaxKind) {
    let guard = p.start_node(kind);
    p.bump_kw(keyword);
    guard.finish_node();
}

/// Function application lookahead through namespaced names: `db.labels(`.
fn dotted_apply_ahead(p: &Parser) -> bool {
    let mut n = 1;
    loop {
        if p.peek_n(n) != Some(TokenKind::Name) {
            return false;
        }
        match p.peek_n(n + 1) {
            Some(T![.]) => n += 2,
            Some(T!['(']) => return true,
            _ => return false,
        }
    }
}

/// `name(args)` or `name(*)`; `DISTINCT` may prefix the arguments.
fn apply(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    name::function_name(p);
    let all = p.peek_n(2) == Some(T![*]) && p.peek_n(3) == Some(T![')']);
    let kind = if all {
        SyntaxKind::APPLY_ALL_OPERATOR
    } else {
        SyntaxKind::APPLY_OPERATOR
    };
    let guard = checkpoint.wrap_node(kind);
    p.bump(S!['(']);
    if all {
        p.bump(S![*]);
    } else {
        if p.at_kw("DISTINCT") {
            p.bump_kw(S![distinct]);
        }
        if !p.at(T![')']) {
            expression::expression(p);
            while p.at(T![,]) {
                p.bump(S![,]);
                expression::expression(p);
            }
        }
    }
    p.expect(T![')'], S![')']);
    guard.finish_node();
}

/// `CASE value WHEN a THEN x ... ELSE y END` or the searched form without
/// the leading value.
fn case_expression(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::CASE);
    p.bump_kw(S![case]);
    if !p.at_kw("WHEN") {
        expression::expression(p);
    }
    while p.at_kw("WHEN") {
        p.bump_kw(S![when]);
        expression::expression(p);
        p.expect_kw("THEN", S![then]);
        expression::expression(p);
    }
    if p.at_kw("ELSE") {
        p.bump_kw(S![else]);
        expression::expression(p);
    }
    p.expect_kw("END", S![end]);
    guard.finish_node();
}

/// `filter(x IN list WHERE pred)` and friends; EXTRACT allows a trailing
/// `| expr` evaluation.
fn filter_like(p: &mut Parser, kind: SyntaxKind, keyword: SyntaxKind, eval: bool) {
    let guard = p.start_node(kind);
    p.bump_kw(keyword);
    p.expect(T!['('], S!['(']);
    name::identifier(p);
    p.expect_kw("IN", S![in]);
    expression::expression(p);
    expression::where_predicate(p);
    if eval && p.at(T![|]) {
        p.bump(S![|]);
        expression::expression(p);
    }
    p.expect(T![')'], S![')']);
    guard.finish_node();
}

/// `reduce(acc = init, x IN list | expr)`
fn reduce_expression(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::REDUCE);
    p.bump_kw(S![reduce]);
    p.expect(T!['('], S!['(']);
    name::identifier(p);
    p.expect(T![=], S![=]);
    expression::expression(p);
    p.expect(T![,], S![,]);
    name::identifier(p);
    p.expect_kw("IN", S![in]);
    expression::expression(p);
    p.expect(T![|], S![|]);
    expression::expression(p);
    p.expect(T![')'], S![')']);
    guard.finish_node();
}

/// `(` starts either a parenthesized expression or a pattern expression
/// such as `(a)-[:KNOWS]->(b)`.
fn paren_or_pattern(p: &mut Parser) {
    if pattern_ahead(p, 1) {
        pattern::pattern_path(p);
    } else {
        p.bump(S!['(']);
        expression::expression(p);
        p.expect(T![')'], S![')']);
    }
}

/// Whether a node pattern starts at token `from`: its parenthesis must
/// look like `(ident? (: | { | $ | ))` and the matching close must be
/// followed by a relationship: `<-`, `-[`, `--` or `->`. A lone dash or
/// angle after the parenthesis is arithmetic, not a pattern.
pub(crate) fn pattern_ahead(p: &Parser, from: usize) -> bool {
    if p.peek_n(from) != Some(T!['(']) {
        return false;
    }
    let plausible_inner = match p.peek_n(from + 1) {
        Some(TokenKind::Name | TokenKind::QuotedName) => matches!(
            p.peek_n(from + 2),
            Some(T![:] | T!['{'] | T![')'] | TokenKind::Dollar)
        ),
        Some(T![:] | T!['{'] | T![')'] | TokenKind::Dollar) => true,
        _ => false,
    };
    if !plausible_inner {
        return false;
    }

    let mut depth = 0usize;
    for n in from..from + 64 {
        match p.peek_n(n) {
            Some(T!['(']) => depth += 1,
            Some(T![')']) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return rel_follows(p, n + 1);
                }
            }
            Some(T![;]) | Some(TokenKind::Eof) | None => return false,
            _ => {}
        }
    }
    false
}

fn rel_follows(p: &Parser, at: usize) -> bool {
    match p.peek_n(at) {
        Some(T![<]) => p.peek_n(at + 1) == Some(T![-]),
        Some(T![-]) => matches!(p.peek_n(at + 1), Some(T!['['] | T![-] | T![>])),
        _ => false,
    }
}

/// `[` starts a list literal, a list comprehension, or a pattern
/// comprehension.
fn bracket_atom(p: &mut Parser) {
    if p.peek_n(2) == Some(TokenKind::Name) && p.at_kw_n(3, "IN") {
        list_comprehension(p);
    } else if pattern_ahead(p, 2)
        || (p.peek_n(2) == Some(TokenKind::Name)
            && p.peek_n(3) == Some(TokenKind::Eq)
            && pattern_ahead(p, 4))
    {
        pattern_comprehension(p);
    } else {
        collection(p);
    }
}

fn list_comprehension(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::LIST_COMPREHENSION);
    p.bump(S!['[']);
    name::identifier(p);
    p.bump_kw(S![in]);
    expression::expression(p);
    expression::where_predicate(p);
    if p.at(T![|]) {
        p.bump(S![|]);
        expression::expression(p);
    }
    p.expect(T![']'], S![']']);
    guard.finish_node();
}

fn pattern_comprehension(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::PATTERN_COMPREHENSION);
    p.bump(S!['[']);
    if p.at(TokenKind::Name) && p.peek_n(2) == Some(TokenKind::Eq) {
        name::identifier(p);
        p.bump(S![=]);
    }
    pattern::pattern_path(p);
    expression::where_predicate(p);
    p.expect(T![|], S![|]);
    expression::expression(p);
    p.expect(T![']'], S![']']);
    guard.finish_node();
}

fn collection(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::COLLECTION);
    p.bump(S!['[']);
    if !p.at(T![']']) {
        expression::expression(p);
        while p.at(T![,]) {
            p.bump(S![,]);
            expression::expression(p);
        }
    }
    p.expect(T![']'], S![']']);
    guard.finish_node();
}

/// `{` starts a map literal or a legacy `{param}` reference.
pub(crate) fn curly_atom(p: &mut Parser) {
    let legacy_param = matches!(
        p.peek_n(2),
        Some(TokenKind::Name | TokenKind::QuotedName | TokenKind::Int)
    ) && p.peek_n(3) == Some(T!['}']);
    if legacy_param {
        let guard = p.start_node(SyntaxKind::PARAMETER);
        p.bump(S!['{']);
        match p.peek() {
            Some(TokenKind::Name) => p.bump(S![ident]),
            Some(TokenKind::QuotedName) => p.bump(SyntaxKind::QUOTED_IDENT),
            _ => p.bump(SyntaxKind::INT_NUMBER),
        }
        p.bump(S!['}']);
        guard.finish_node();
    } else {
        map(p);
    }
}

fn map(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::MAP);
    p.bump(S!['{']);
    if !p.at(T!['}']) {
        map_entry(p);
        while p.at(T![,]) {
            p.bump(S![,]);
            map_entry(p);
        }
    }
    p.expect(T!['}'], S!['}']);
    guard.finish_node();
}

fn map_entry(p: &mut Parser) {
    name::prop_name(p);
    p.expect(T![:], S![:]);
    expression::expression(p);
}

#[cfg(test)]
mod tests {
    use crate::ast::{AstNode, Expression};
    use crate::parser::grammar::expression::tests::parse_expression;
    use crate::SyntaxKind;

    fn kind_of(input: &str) -> SyntaxKind {
        parse_expression(input).syntax().kind()
    }

    #[test]
    fn literals() {
        assert_eq!(kind_of("1"), SyntaxKind::INTEGER);
        assert_eq!(kind_of("0x1F"), SyntaxKind::INTEGER);
        assert_eq!(kind_of("1.5"), SyntaxKind::FLOAT);
        assert_eq!(kind_of("'s'"), SyntaxKind::STRING);
        assert_eq!(kind_of("true"), SyntaxKind::TRUE);
        assert_eq!(kind_of("FALSE"), SyntaxKind::FALSE);
        assert_eq!(kind_of("null"), SyntaxKind::NULL);
        assert_eq!(kind_of("name"), SyntaxKind::IDENTIFIER);
    }

    #[test]
    fn parameters() {
        assert_eq!(kind_of("$param"), SyntaxKind::PARAMETER);
        assert_eq!(kind_of("$0"), SyntaxKind::PARAMETER);
        assert_eq!(kind_of("{legacy}"), SyntaxKind::PARAMETER);
        let param = crate::ast::Parameter::cast(parse_expression("$param").syntax().clone())
            .expect("a parameter");
        assert_eq!(param.name(), "param");
    }

    #[test]
    fn containers() {
        assert_eq!(kind_of("[1, 2, 3]"), SyntaxKind::COLLECTION);
        assert_eq!(kind_of("[]"), SyntaxKind::COLLECTION);
        assert_eq!(kind_of("{a: 1, b: 'x'}"), SyntaxKind::MAP);
        assert_eq!(kind_of("{}"), SyntaxKind::MAP);

        let map =
            crate::ast::Map::cast(parse_expression("{a: 1, b: 'x'}").syntax().clone()).unwrap();
        let keys: Vec<String> = map.keys().map(|key| key.name()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.values().count(), 2);
    }

    #[test]
    fn parenthesized_expressions_are_not_patterns() {
        assert_eq!(kind_of("(1 + 2) * 3"), SyntaxKind::BINARY_OPERATOR);
        assert_eq!(kind_of("(name)"), SyntaxKind::IDENTIFIER);
    }

    #[test]
    fn pattern_expressions() {
        assert_eq!(kind_of("(a)-[:KNOWS]->(b)"), SyntaxKind::PATTERN_PATH);
        assert_eq!(kind_of("(a)--(b)"), SyntaxKind::PATTERN_PATH);
    }

    #[test]
    fn lone_dash_after_parenthesis_is_arithmetic() {
        assert_eq!(kind_of("(a) < 3"), SyntaxKind::COMPARISON);
        assert_eq!(kind_of("(a)-5"), SyntaxKind::BINARY_OPERATOR);
    }

    #[test]
    fn comprehensions() {
        assert_eq!(
            kind_of("[x IN list WHERE x > 2 | x * 2]"),
            SyntaxKind::LIST_COMPREHENSION
        );
        assert_eq!(
            kind_of("[(a)-->(b) | b.name]"),
            SyntaxKind::PATTERN_COMPREHENSION
        );
        assert_eq!(
            kind_of("[p = (a)-->(b) WHERE a.x | p]"),
            SyntaxKind::PATTERN_COMPREHENSION
        );

        let comprehension = crate::ast::ListComprehension::cast(
            parse_expression("[x IN list WHERE x > 2 | x * 2]").syntax().clone(),
        )
        .unwrap();
        assert_eq!(comprehension.identifier().unwrap().name(), "x");
        assert!(comprehension.predicate().is_some());
        assert!(comprehension.eval().is_some());
    }

    #[test]
    fn functions() {
        assert_eq!(kind_of("toUpper(name)"), SyntaxKind::APPLY_OPERATOR);
        assert_eq!(kind_of("db.labels()"), SyntaxKind::APPLY_OPERATOR);
        assert_eq!(kind_of("count(*)"), SyntaxKind::APPLY_ALL_OPERATOR);

        let apply = crate::ast::ApplyOperator::cast(
            parse_expression("collect(DISTINCT n.name)").syntax().clone(),
        )
        .unwrap();
        assert!(apply.distinct());
        assert_eq!(apply.func_name().unwrap().name(), "collect");
        assert_eq!(apply.args().count(), 1);
    }

    #[test]
    fn predicates_and_reduce() {
        assert_eq!(kind_of("all(x IN xs WHERE x > 0)"), SyntaxKind::ALL);
        assert_eq!(kind_of("any(x IN xs WHERE x > 0)"), SyntaxKind::ANY);
        assert_eq!(kind_of("none(x IN xs WHERE x > 0)"), SyntaxKind::NONE);
        assert_eq!(kind_of("single(x IN xs WHERE x > 0)"), SyntaxKind::SINGLE);
        assert_eq!(kind_of("filter(x IN xs WHERE x > 0)"), SyntaxKind::FILTER);
        assert_eq!(
            kind_of("extract(x IN xs | x.name)"),
            SyntaxKind::EXTRACT
        );

        let reduce = crate::ast::Reduce::cast(
            parse_expression("reduce(acc = 0, x IN xs | acc + x)").syntax().clone(),
        )
        .unwrap();
        assert_eq!(reduce.accumulator().unwrap().name(), "acc");
        assert_eq!(reduce.identifier().unwrap().name(), "x");
        assert!(reduce.init().is_some());
        assert!(reduce.expression().is_some());
        assert!(reduce.eval().is_some());
    }

    #[test]
    fn case_expressions() {
        let case = crate::ast::Case::cast(
            parse_expression("CASE n.eyes WHEN 'blue' THEN 1 WHEN 'brown' THEN 2 ELSE 3 END")
                .syntax()
                .clone(),
        )
        .unwrap();
        assert!(case.operand().is_some());
        assert_eq!(case.alternatives().len(), 2);
        assert!(case.default().is_some());

        let searched = crate::ast::Case::cast(
            parse_expression("CASE WHEN n.age > 18 THEN 'adult' ELSE 'minor' END")
                .syntax()
                .clone(),
        )
        .unwrap();
        assert!(searched.operand().is_none());
        assert_eq!(searched.alternatives().len(), 1);
    }

    #[test]
    fn keywords_can_still_be_function_names() {
        // `exists` has no keyword meaning in expression position
        assert_eq!(kind_of("exists(n.prop)"), SyntaxKind::APPLY_OPERATOR);
    }

    #[test]
    fn shortest_path_expression() {
        assert_eq!(
            kind_of("shortestPath((a)-[*]->(b))"),
            SyntaxKind::SHORTEST_PATH
        );
    }

    #[test]
    fn expression_wrapper_casts_any_expression_kind() {
        let expression = parse_expression("1 + 2");
        assert!(Expression::cast(expression.syntax().clone()).is_some());
        let not_expression = parse_expression("1").syntax().parent().unwrap();
        assert!(Expression::cast(not_expression).is_none());
    }
}
