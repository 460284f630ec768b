use crate::parser::grammar::{expression, name, pattern};
use crate::{Parser, SyntaxKind, S, T};

/// MATCH clause
///
/// ```txt
/// Match
///     OPTIONAL? MATCH Pattern MatchHint* (WHERE Expression)?
/// MatchHint
///     USING INDEX Identifier Label ( PropName )
///     USING JOIN ON Identifier, ...
///     USING SCAN Identifier Label
/// ```
pub(crate) fn match_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::MATCH);
    if p.at_kw("OPTIONAL") {
        p.bump_kw(S![optional]);
    }
    p.expect_kw("MATCH", S![match]);
    pattern::pattern(p);
    while p.at_kw("USING") {
        match_hint(p);
    }
    expression::where_predicate(p);
    guard.finish_node();
}

fn match_hint(p: &mut Parser) {
    if p.at_kw_n(2, "INDEX") {
        let guard = p.start_node(SyntaxKind::USING_INDEX);
        p.bump_kw(S![using]);
        p.bump_kw(S![index]);
        name::identifier(p);
        name::label(p);
        p.expect(T!['('], S!['(']);
        name::prop_name(p);
        p.expect(T![')'], S![')']);
        guard.finish_node();
    } else if p.at_kw_n(2, "JOIN") {
        let guard = p.start_node(SyntaxKind::USING_JOIN);
        p.bump_kw(S![using]);
        p.bump_kw(S![join]);
        p.expect_kw("ON", S![on]);
        name::identifier(p);
        while p.at(T![,]) {
            p.bump(S![,]);
            name::identifier(p);
        }
        guard.finish_node();
    } else if p.at_kw_n(2, "SCAN") {
        let guard = p.start_node(SyntaxKind::USING_SCAN);
        p.bump_kw(S![using]);
        p.bump_kw(S![scan]);
        name::identifier(p);
        name::label(p);
        guard.finish_node();
    } else {
        p.err_and_pop("expected a USING INDEX, USING JOIN or USING SCAN hint");
    }
}
