use crate::parser::grammar::{atom, expression, name};
use crate::{Parser, SyntaxKind, TokenKind, S};

/// LOAD CSV clause
///
/// ```txt
/// LoadCsv
///     LOAD CSV (WITH HEADERS)? FROM Expression AS Identifier
///         (FIELDTERMINATOR String)?
/// ```
pub(crate) fn load_csv_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::LOAD_CSV);
    p.bump_kw(S![load]);
    p.expect_kw("CSV", S![csv]);
    if p.at_kw("WITH") {
        p.bump_kw(S![with]);
        p.expect_kw("HEADERS", S![headers]);
    }
    p.expect_kw("FROM", S![from]);
    expression::expression(p);
    p.expect_kw("AS", S![as]);
    name::identifier(p);
    if p.at_kw("FIELDTERMINATOR") {
        p.bump_kw(S![fieldterminator]);
        if p.at(TokenKind::StringValue) {
            atom::string(p);
        } else {
            p.err("expected a field terminator string");
        }
    }
    guard.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::ast::{AstNode, Clause};
    use crate::parser::grammar::utils::first_clause;

    #[test]
    fn load_csv_with_headers() {
        let Clause::LoadCsv(load) = first_clause(
            "LOAD CSV WITH HEADERS FROM 'file:///people.csv' AS line FIELDTERMINATOR ';' RETURN line;",
        ) else {
            panic!("expected LOAD CSV");
        };
        assert!(load.with_headers());
        let url = load.url().expect("a url expression");
        let url = crate::ast::StringLiteral::cast(url.syntax().clone()).expect("a string url");
        assert_eq!(url.value(), "file:///people.csv");
        assert_eq!(load.identifier().unwrap().name(), "line");
        assert_eq!(load.field_terminator().unwrap().value(), ";");
    }

    #[test]
    fn load_csv_plain() {
        let Clause::LoadCsv(load) = first_clause("LOAD CSV FROM $url AS line RETURN line;")
        else {
            panic!("expected LOAD CSV");
        };
        assert!(!load.with_headers());
        assert!(load.field_terminator().is_none());
    }
}
