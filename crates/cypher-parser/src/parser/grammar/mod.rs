pub(crate) mod cypher;
pub(crate) mod expression;

mod atom;
mod call;
mod command;
mod create;
mod delete;
mod foreach;
mod load_csv;
mod match_;
mod merge;
mod name;
mod pattern;
mod query;
mod schema;
mod set;
mod start;
mod statement;
mod with;

use crate::{Parser, SyntaxKind, TokenKind};

/// Consume the current token as data, keeping its natural syntax kind.
/// Used where a grammar slot accepts an arbitrary value token, such as
/// client command arguments and query option values.
pub(crate) fn bump_as_data(p: &mut Parser) {
    let Some(kind) = p.peek() else { return };
    let syntax = match kind {
        TokenKind::Name => SyntaxKind::IDENT,
        TokenKind::QuotedName => SyntaxKind::QUOTED_IDENT,
        TokenKind::Int => SyntaxKind::INT_NUMBER,
        TokenKind::Float => SyntaxKind::FLOAT_NUMBER,
        TokenKind::StringValue => SyntaxKind::STRING_VALUE,
        TokenKind::Semicolon => SyntaxKind::SEMICOLON,
        TokenKind::Colon => SyntaxKind::COLON,
        TokenKind::Comma => SyntaxKind::COMMA,
        TokenKind::Dot => SyntaxKind::DOT,
        TokenKind::DotDot => SyntaxKind::DOT_DOT,
        TokenKind::LParen => SyntaxKind::L_PAREN,
        TokenKind::RParen => SyntaxKind::R_PAREN,
        TokenKind::LBracket => SyntaxKind::L_BRACK,
        TokenKind::RBracket => SyntaxKind::R_BRACK,
        TokenKind::LCurly => SyntaxKind::L_CURLY,
        TokenKind::RCurly => SyntaxKind::R_CURLY,
        TokenKind::Plus => SyntaxKind::PLUS,
        TokenKind::PlusEq => SyntaxKind::PLUS_EQ,
        TokenKind::Minus => SyntaxKind::MINUS,
        TokenKind::Star => SyntaxKind::STAR,
        TokenKind::Slash => SyntaxKind::SLASH,
        TokenKind::Percent => SyntaxKind::PERCENT,
        TokenKind::Caret => SyntaxKind::CARET,
        TokenKind::Eq => SyntaxKind::EQ,
        TokenKind::NotEq => SyntaxKind::NOT_EQ,
        TokenKind::Lt => SyntaxKind::LT,
        TokenKind::LtEq => SyntaxKind::LT_EQ,
        TokenKind::Gt => SyntaxKind::GT,
        TokenKind::GtEq => SyntaxKind::GT_EQ,
        TokenKind::RegexMatch => SyntaxKind::REGEX_MATCH,
        TokenKind::Pipe => SyntaxKind::PIPE,
        TokenKind::Dollar => SyntaxKind::DOLLAR,
        TokenKind::Whitespace | TokenKind::Comment | TokenKind::Error | TokenKind::Eof => {
            return;
        }
    };
    p.bump(syntax);
}

#[cfg(test)]
pub(crate) mod utils {
    /// Compare the parse tree dump of `input` against `expected`.
    pub(crate) fn check_tree(input: &str, expected: &str) {
        use pretty_assertions::assert_eq;
        let parser = crate::Parser::new(input);
        let tree = parser.parse();
        let actual = format!("{tree:?}");
        assert_eq!(actual.trim(), expected.trim());
    }

    /// Parse and assert there are no errors, returning the tree.
    pub(crate) fn check_ok(input: &str) -> crate::SyntaxTree {
        let tree = crate::Parser::new(input).parse();
        assert_eq!(tree.errors(), &[], "unexpected errors for {input:?}");
        tree
    }

    /// Parse error-free input consisting of a single query statement and
    /// return the typed query node.
    pub(crate) fn single_query(input: &str) -> crate::ast::Query {
        use crate::ast::{Directive, StatementBody};
        let tree = check_ok(input);
        match tree.document().directives().next().expect("one directive") {
            Directive::Statement(statement) => match statement.body().expect("body") {
                StatementBody::Query(query) => query,
                other => panic!("expected a query, got {other:?}"),
            },
            other => panic!("expected a statement, got {other:?}"),
        }
    }

    /// The first clause of a single-query input.
    pub(crate) fn first_clause(input: &str) -> crate::ast::Clause {
        single_query(input).clauses().next().expect("one clause")
    }
}
