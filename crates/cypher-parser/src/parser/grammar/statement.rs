use crate::parser::grammar::{bump_as_data, query, schema};
use crate::{Parser, SyntaxKind, TokenKind, S};

/// Statement
///
/// ```txt
/// Statement
///     StatementOption* StatementBody
/// StatementOption
///     CYPHER Version? (Name = Value)*
///     EXPLAIN
///     PROFILE
/// StatementBody
///     Query
///     SchemaCommand
/// ```
pub(crate) fn statement(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::STATEMENT);

    loop {
        if p.at_kw("CYPHER") {
            cypher_option(p);
        } else if p.at_kw("EXPLAIN") {
            let option = p.start_node(SyntaxKind::EXPLAIN_OPTION);
            p.bump_kw(S![explain]);
            option.finish_node();
        } else if p.at_kw("PROFILE") {
            let option = p.start_node(SyntaxKind::PROFILE_OPTION);
            p.bump_kw(S![profile]);
            option.finish_node();
        } else {
            break;
        }
    }

    if p.at_kw("DROP")
        || (p.at_kw("CREATE") && (p.at_kw_n(2, "INDEX") || p.at_kw_n(2, "CONSTRAINT")))
    {
        schema::schema_command(p);
    } else {
        query::query(p);
    }

    guard.finish_node();
}

/// `CYPHER 2.3 planner=cost ...`
fn cypher_option(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::CYPHER_OPTION);
    p.bump_kw(S![cypher]);

    if matches!(p.peek(), Some(TokenKind::Int | TokenKind::Float)) {
        value_string(p);
    }

    while p.at(TokenKind::Name) && p.peek_n(2) == Some(TokenKind::Eq) {
        cypher_option_param(p);
    }

    guard.finish_node();
}

fn cypher_option_param(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::CYPHER_OPTION_PARAM);
    value_string(p);
    p.bump(S![=]);
    if matches!(
        p.peek(),
        Some(TokenKind::Name | TokenKind::Int | TokenKind::Float | TokenKind::StringValue)
    ) {
        value_string(p);
    } else {
        p.err("expected an option value");
    }
    guard.finish_node();
}

/// Wrap the current value token in a STRING node; option names, versions
/// and values are all plain strings to the parser.
fn value_string(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::STRING);
    bump_as_data(p);
    guard.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::ast::{AstNode, Directive, StatementBody};
    use crate::parser::grammar::utils::check_ok;

    fn statement(input: &str) -> crate::ast::Statement {
        let tree = check_ok(input);
        let directive = tree.document().directives().next().expect("one directive");
        match directive {
            Directive::Statement(statement) => statement,
            other => panic!("expected a statement, got {other:?}"),
        }
    }

    #[test]
    fn explain_and_profile_options() {
        let statement = statement("EXPLAIN PROFILE RETURN 1;");
        assert_eq!(statement.options().count(), 2);
        assert!(matches!(
            statement.body(),
            Some(StatementBody::Query(_))
        ));
    }

    #[test]
    fn cypher_option_with_version_and_params() {
        let statement = statement("CYPHER 2.3 planner=cost RETURN 1;");
        let options: Vec<_> = statement.options().collect();
        assert_eq!(options.len(), 1);
        let crate::ast::StatementOption::CypherOption(option) = &options[0] else {
            panic!("expected a CYPHER option");
        };
        assert_eq!(option.version().unwrap().syntax().text(), "2.3");
        let params: Vec<_> = option.params().collect();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name().unwrap().syntax().text(), "planner");
        assert_eq!(params[0].value().unwrap().syntax().text(), "cost");
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let statement = statement("match (n) return n;");
        assert!(matches!(
            statement.body(),
            Some(StatementBody::Query(_))
        ));
    }
}
