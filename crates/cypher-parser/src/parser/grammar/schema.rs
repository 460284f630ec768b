use crate::parser::grammar::{expression, name};
use crate::{Parser, SyntaxKind, TokenKind, S, T};

/// Schema command
///
/// ```txt
/// SchemaCommand
///     CREATE INDEX ON Label ( PropName, ... )
///     DROP INDEX ON Label ( PropName, ... )
///     CREATE CONSTRAINT ON ( Identifier Label ) ASSERT Expression IS UNIQUE
///     CREATE CONSTRAINT ON ( Identifier Label ) ASSERT exists ( Expression )
///     CREATE CONSTRAINT ON () - [ Identifier RelType ] - () ASSERT exists ( Expression )
///     DROP CONSTRAINT ...    (same forms)
/// ```
pub(crate) fn schema_command(p: &mut Parser) {
    let create = p.at_kw("CREATE");
    if p.at_kw_n(2, "INDEX") {
        index_command(p, create);
    } else {
        constraint_command(p, create);
    }
}

fn index_command(p: &mut Parser, create: bool) {
    let kind = if create {
        SyntaxKind::CREATE_NODE_PROPS_INDEX
    } else {
        SyntaxKind::DROP_NODE_PROPS_INDEX
    };
    let guard = p.start_node(kind);
    p.bump_kw(if create { S![create] } else { S![drop] });
    p.bump_kw(S![index]);
    p.expect_kw("ON", S![on]);
    name::label(p);
    p.expect(T!['('], S!['(']);
    name::prop_name(p);
    while p.at(T![,]) {
        p.bump(S![,]);
        name::prop_name(p);
    }
    p.expect(T![')'], S![')']);
    guard.finish_node();
}

/// The exact node kind depends on the tail of the command, so the pieces
/// are parsed first and wrapped once the form is known.
fn constraint_command(p: &mut Parser, create: bool) {
    let checkpoint = p.checkpoint_node();
    p.bump_kw(if create { S![create] } else { S![drop] });
    p.expect_kw("CONSTRAINT", S![constraint]);
    p.expect_kw("ON", S![on]);
    p.expect(T!['('], S!['(']);

    let rel_form = p.at(T![')']);
    if rel_form {
        p.bump(S![')']);
        if p.at(T![<]) {
            p.bump(S![<]);
        }
        p.expect(T![-], S![-]);
        p.expect(T!['['], S!['[']);
        if matches!(p.peek(), Some(TokenKind::Name | TokenKind::QuotedName)) {
            name::identifier(p);
        }
        name::reltype(p);
        p.expect(T![']'], S![']']);
        p.expect(T![-], S![-]);
        if p.at(T![>]) {
            p.bump(S![>]);
        }
        p.expect(T!['('], S!['(']);
        p.expect(T![')'], S![')']);
    } else {
        name::identifier(p);
        name::label(p);
        p.expect(T![')'], S![')']);
    }

    p.expect_kw("ASSERT", S![assert]);
    let unique = if p.at_kw("EXISTS") {
        p.bump_kw(S![exists]);
        p.expect(T!['('], S!['(']);
        expression::expression(p);
        p.expect(T![')'], S![')']);
        false
    } else {
        expression::expression(p);
        p.expect_kw("IS", S![is]);
        p.expect_kw("UNIQUE", S![unique]);
        true
    };

    let kind = match (create, rel_form, unique) {
        (true, false, true) => SyntaxKind::CREATE_UNIQUE_NODE_PROP_CONSTRAINT,
        (false, false, true) => SyntaxKind::DROP_UNIQUE_NODE_PROP_CONSTRAINT,
        (true, false, false) => SyntaxKind::CREATE_NODE_PROP_EXISTENCE_CONSTRAINT,
        (false, false, false) => SyntaxKind::DROP_NODE_PROP_EXISTENCE_CONSTRAINT,
        (true, true, _) => SyntaxKind::CREATE_REL_PROP_EXISTENCE_CONSTRAINT,
        (false, true, _) => SyntaxKind::DROP_REL_PROP_EXISTENCE_CONSTRAINT,
    };
    checkpoint.wrap_node(kind).finish_node();
}
