use crate::parser::grammar::{command, statement};
use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// Keywords the parser synchronizes on after a syntax error: anything that
/// can start a directive or a clause.
const SYNC_KEYWORDS: &[&str] = &[
    "CALL",
    "CREATE",
    "CYPHER",
    "DELETE",
    "DETACH",
    "DROP",
    "EXPLAIN",
    "FOREACH",
    "LOAD",
    "MATCH",
    "MERGE",
    "OPTIONAL",
    "PROFILE",
    "REMOVE",
    "RETURN",
    "SET",
    "START",
    "UNION",
    "UNWIND",
    "USING",
    "WITH",
];

/// The top-level rule: a sequence of directives separated by `;`, where a
/// directive is a statement, a client command, or a comment.
pub(crate) fn cypher_input(p: &mut Parser) {
    let root = p.start_node(SyntaxKind::CYPHER_INPUT);
    loop {
        p.flush_top_level_ignored();
        match p.peek() {
            None | Some(TokenKind::Eof) => break,
            Some(T![;]) => p.bump(S![;]),
            _ => directive(p),
        }
    }
    root.finish_node();
}

/// One directive. If parsing it records any error, the partial tree is
/// wrapped in an `ERROR` node (so it does not count as a directive) and the
/// parser synchronizes to the next `;` or directive-start keyword.
pub(crate) fn directive(p: &mut Parser) {
    let start_index = p.peek_token().map(|token| token.index());
    let checkpoint = p.checkpoint_node();
    let before = p.error_count();

    if p.at(TokenKind::Colon) {
        command::command(p);
    } else {
        statement::statement(p);
    }

    if p.error_count() > before {
        let guard = checkpoint.wrap_node(SyntaxKind::ERROR);
        if p.peek_token().map(|token| token.index()) == start_index {
            // always make progress, even when the error is at a token we
            // would otherwise synchronize on
            bump_junk(p);
        }
        synchronize(p);
        guard.finish_node();
    } else if p.at(T![;]) {
        p.bump(S![;]);
    }
}

/// Skip to the next statement terminator or directive-start keyword.
fn synchronize(p: &mut Parser) {
    loop {
        match p.peek() {
            None | Some(TokenKind::Eof) => break,
            Some(T![;]) => {
                p.bump(S![;]);
                break;
            }
            Some(TokenKind::Colon) => break,
            Some(TokenKind::Name)
                if SYNC_KEYWORDS.iter().any(|keyword| p.at_kw(keyword)) =>
            {
                break;
            }
            _ => bump_junk(p),
        }
    }
}

fn bump_junk(p: &mut Parser) {
    if p.at(TokenKind::Eof) || p.peek().is_none() {
        return;
    }
    p.push_ignored();
    let token = p.pop();
    p.push_token(SyntaxKind::ERROR, token);
    p.skip_ignored();
}
