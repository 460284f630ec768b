use crate::parser::grammar::{
    atom, call, create, delete, foreach, load_csv, match_, merge, set, start, with,
};
use crate::{Parser, SyntaxKind, TokenKind, S};

/// Query
///
/// ```txt
/// Query
///     QueryOption* Clause+ (UNION ALL? Clause+)*
/// QueryOption
///     USING PERIODIC COMMIT Integer?
/// ```
///
/// UNION is kept in the clause list, so `RETURN 1 UNION RETURN 2` is one
/// QUERY with clauses `[RETURN, UNION, RETURN]`.
pub(crate) fn query(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::QUERY);

    while p.at_kw("USING") && p.at_kw_n(2, "PERIODIC") {
        using_periodic_commit(p);
    }

    let mut clauses = 0;
    while clause(p) {
        clauses += 1;
    }
    if clauses == 0 {
        p.err("expected a query clause");
    }

    guard.finish_node();
}

/// Parse one clause if the current token starts one.
pub(crate) fn clause(p: &mut Parser) -> bool {
    if p.at_kw("MATCH") || (p.at_kw("OPTIONAL") && p.at_kw_n(2, "MATCH")) {
        match_::match_clause(p);
    } else if p.at_kw("UNION") {
        union(p);
    } else if p.at_kw("CREATE") {
        create::create_clause(p);
    } else if p.at_kw("MERGE") {
        merge::merge_clause(p);
    } else if p.at_kw("DELETE") || (p.at_kw("DETACH") && p.at_kw_n(2, "DELETE")) {
        delete::delete_clause(p);
    } else if p.at_kw("REMOVE") {
        delete::remove_clause(p);
    } else if p.at_kw("SET") {
        set::set_clause(p);
    } else if p.at_kw("WITH") {
        with::with_clause(p);
    } else if p.at_kw("UNWIND") {
        with::unwind_clause(p);
    } else if p.at_kw("FOREACH") {
        foreach::foreach_clause(p);
    } else if p.at_kw("LOAD") {
        load_csv::load_csv_clause(p);
    } else if p.at_kw("START") {
        start::start_clause(p);
    } else if p.at_kw("RETURN") {
        with::return_clause(p);
    } else if p.at_kw("CALL") {
        call::call_clause(p);
    } else {
        return false;
    }
    true
}

fn union(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::UNION);
    p.bump_kw(S![union]);
    if p.at_kw("ALL") {
        p.bump_kw(S![all]);
    }
    guard.finish_node();
}

fn using_periodic_commit(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::USING_PERIODIC_COMMIT);
    p.bump_kw(S![using]);
    p.bump_kw(S![periodic]);
    p.expect_kw("COMMIT", S![commit]);
    if p.at(TokenKind::Int) {
        atom::integer(p);
    }
    guard.finish_node();
}
