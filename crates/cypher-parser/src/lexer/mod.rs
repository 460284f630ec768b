mod cursor;
mod token;
mod token_kind;

pub use token::Token;
pub use token_kind::TokenKind;

use crate::limit::LimitTracker;
use crate::position::PositionTracker;
use crate::Error;
use cursor::Cursor;

/// Parses Cypher source text into tokens, lazily.
///
/// The lexer is lossless: concatenating the text of every token it emits,
/// including whitespace and comments, reconstructs the input exactly.
/// Lexical errors are yielded as `Err` items carrying the offending text,
/// and lexing resumes at the next plausible token boundary.
///
/// ## Example
/// ```rust
/// use cypher_parser::Lexer;
///
/// let (tokens, errors) = Lexer::new("MATCH (n) RETURN n.name").lex();
/// assert!(errors.is_empty());
/// let rebuilt: String = tokens.iter().map(|token| token.data()).collect();
/// assert_eq!(rebuilt, "MATCH (n) RETURN n.name");
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    index: usize,
    tracker: PositionTracker,
    finished: bool,
    pub(crate) limit_tracker: LimitTracker,
}

impl<'a> Lexer<'a> {
    /// Create a lexer for `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            tracker: PositionTracker::new(),
            finished: false,
            limit_tracker: LimitTracker::default(),
        }
    }

    /// Abort lexing with an error after `limit` tokens.
    pub(crate) fn with_limit(mut self, limit: usize) -> Self {
        self.limit_tracker = LimitTracker::new(limit);
        self
    }

    /// Lex the whole input eagerly, partitioning tokens and errors.
    pub fn lex(self) -> (Vec<Token<'a>>, Vec<Error>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for item in self {
            match item {
                Ok(token) => tokens.push(token),
                Err(error) => errors.push(error),
            }
        }
        (tokens, errors)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.index >= self.input.len() {
            self.finished = true;
            // the EOF token counts against the limit too
            self.limit_tracker.consume();
            return Some(Ok(Token {
                kind: TokenKind::Eof,
                data: "",
                index: self.index,
                position: self.tracker.position(),
            }));
        }

        self.limit_tracker.consume();
        if self.limit_tracker.limited() {
            self.finished = true;
            return Some(Err(Error::limit(
                "token limit reached, aborting lexing",
                self.tracker.position(),
                self.input,
            )));
        }

        let mut cursor = Cursor::new(&self.input[self.index..]);
        let kind = cursor.advance();
        let len = cursor.len_consumed();
        debug_assert!(len > 0, "lexer must always make progress");

        let data = &self.input[self.index..self.index + len];
        let index = self.index;
        let position = self.tracker.position();
        self.index += len;
        self.tracker.advance_str(data);

        match cursor.err.take() {
            Some(message) => Some(Err(Error::syntax(
                message,
                data.to_string(),
                position,
                self.input,
            ))),
            None => Some(Ok(Token {
                kind,
                data,
                index,
                position,
            })),
        }
    }
}

impl Cursor<'_> {
    fn advance(&mut self) -> TokenKind {
        let c = self.bump().unwrap();

        match c {
            '/' if self.first() == '/' => self.line_comment(),
            '/' if self.first() == '*' => self.block_comment(),
            '/' => TokenKind::Slash,
            c if is_whitespace(c) => {
                self.eat_while(is_whitespace);
                TokenKind::Whitespace
            }
            c if is_name_start(c) => {
                self.eat_while(is_name_continue);
                TokenKind::Name
            }
            '`' => self.quoted_name(),
            c if c.is_ascii_digit() => self.number(c),
            '"' | '\'' => self.string_value(c),
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '.' if self.first() == '.' => {
                self.bump();
                TokenKind::DotDot
            }
            '.' if self.first().is_ascii_digit() => self.number(c),
            '.' => TokenKind::Dot,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LCurly,
            '}' => TokenKind::RCurly,
            '+' if self.first() == '=' => {
                self.bump();
                TokenKind::PlusEq
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '=' if self.first() == '~' => {
                self.bump();
                TokenKind::RegexMatch
            }
            '=' => TokenKind::Eq,
            '<' if self.first() == '=' => {
                self.bump();
                TokenKind::LtEq
            }
            '<' if self.first() == '>' => {
                self.bump();
                TokenKind::NotEq
            }
            '<' => TokenKind::Lt,
            '>' if self.first() == '=' => {
                self.bump();
                TokenKind::GtEq
            }
            '>' => TokenKind::Gt,
            '|' => TokenKind::Pipe,
            '$' => TokenKind::Dollar,
            c => {
                self.add_err(format!("Unexpected character `{c}`"));
                self.eat_while(|c| !is_token_boundary(c));
                TokenKind::Error
            }
        }
    }

    fn line_comment(&mut self) -> TokenKind {
        self.bump(); // second slash
        self.eat_while(|c| !matches!(c, '\n' | '\r'));
        TokenKind::Comment
    }

    fn block_comment(&mut self) -> TokenKind {
        self.bump(); // the star
        loop {
            self.eat_while(|c| c != '*');
            if self.is_eof() {
                self.add_err("Unterminated block comment");
                break;
            }
            self.bump();
            if self.first() == '/' {
                self.bump();
                break;
            }
        }
        TokenKind::Comment
    }

    /// Backtick-quoted identifier; an embedded backtick is written doubled.
    fn quoted_name(&mut self) -> TokenKind {
        loop {
            self.eat_while(|c| c != '`');
            if self.is_eof() {
                self.add_err("Unterminated quoted identifier");
                break;
            }
            self.bump();
            if self.first() == '`' {
                self.bump();
                continue;
            }
            break;
        }
        TokenKind::QuotedName
    }

    fn number(&mut self, first: char) -> TokenKind {
        if first == '0' && matches!(self.first(), 'x' | 'X') {
            self.bump();
            if !self.first().is_ascii_hexdigit() {
                self.add_err("Invalid hexadecimal literal");
            }
            self.eat_while(|c| c.is_ascii_hexdigit());
            return TokenKind::Int;
        }

        let mut float = first == '.';
        if float {
            self.eat_while(|c| c.is_ascii_digit());
        } else {
            self.eat_while(|c| c.is_ascii_digit());
            // `1..2` must stay Int DotDot Int
            if self.first() == '.' && self.second().is_ascii_digit() {
                self.bump();
                self.eat_while(|c| c.is_ascii_digit());
                float = true;
            }
        }

        if matches!(self.first(), 'e' | 'E') {
            if self.second().is_ascii_digit() {
                self.bump();
                self.eat_while(|c| c.is_ascii_digit());
                float = true;
            } else if matches!(self.second(), '+' | '-') && self.third().is_ascii_digit() {
                self.bump();
                self.bump();
                self.eat_while(|c| c.is_ascii_digit());
                float = true;
            } else if is_name_continue(self.second()) || matches!(self.second(), '+' | '-') {
                self.bump();
                if matches!(self.first(), '+' | '-') {
                    self.bump();
                }
                self.add_err("Invalid scientific notation literal");
                float = true;
            }
        }

        if float {
            TokenKind::Float
        } else {
            TokenKind::Int
        }
    }

    fn string_value(&mut self, quote: char) -> TokenKind {
        loop {
            match self.bump() {
                None => {
                    self.add_err("Unterminated string");
                    break;
                }
                Some('\\') => match self.bump() {
                    None => {
                        self.add_err("Unterminated string");
                        break;
                    }
                    Some(escaped) => self.check_escape(escaped),
                },
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }
        TokenKind::StringValue
    }

    fn check_escape(&mut self, escaped: char) {
        match escaped {
            'n' | 't' | 'r' | 'b' | 'f' | '\\' | '\'' | '"' | '/' => {}
            'u' => self.check_unicode_escape(4),
            'U' => self.check_unicode_escape(8),
            other => self.add_err(format!("Invalid escape sequence `\\{other}`")),
        }
    }

    fn check_unicode_escape(&mut self, digits: usize) {
        for _ in 0..digits {
            if !self.first().is_ascii_hexdigit() {
                self.add_err(format!(
                    "Invalid unicode escape, expected {digits} hex digits"
                ));
                return;
            }
            self.bump();
        }
    }
}

fn is_whitespace(c: char) -> bool {
    // from rust's lexer:
    matches!(
        c,
        '\u{0009}'   // \t
        | '\u{000A}' // \n
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
        | '\u{0020}' // space
        | '\u{FEFF}' // BOM
        | '\u{0085}'
        | '\u{200E}'
        | '\u{200F}'
        | '\u{2028}'
        | '\u{2029}'
    )
}

fn is_name_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn is_token_boundary(c: char) -> bool {
    is_whitespace(c)
        || is_name_start(c)
        || c.is_ascii_digit()
        || matches!(
            c,
            ';' | ':'
                | ','
                | '.'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '+'
                | '-'
                | '*'
                | '/'
                | '%'
                | '^'
                | '='
                | '<'
                | '>'
                | '|'
                | '$'
                | '"'
                | '\''
                | '`'
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::T;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let (tokens, errors) = Lexer::new(input).lex();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        tokens
            .iter()
            .map(|token| token.kind())
            .filter(|kind| !kind.is_trivia())
            .collect()
    }

    #[test]
    fn punctuation_and_operators() {
        assert_eq!(
            kinds("<= >= <> =~ += .. . ;"),
            vec![
                T![<=],
                T![>=],
                T![<>],
                T![=~],
                T![+=],
                T![..],
                T![.],
                T![;],
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(
            kinds("1 12.5 0x1F 017 1e5 1.5e-3 .5"),
            vec![
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Int,
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn range_does_not_eat_dots() {
        assert_eq!(
            kinds("1..2"),
            vec![TokenKind::Int, T![..], TokenKind::Int, TokenKind::Eof]
        );
    }

    #[test]
    fn strings_and_escapes() {
        assert_eq!(
            kinds(r#" "aA" 'it\'s' "#),
            vec![TokenKind::StringValue, TokenKind::StringValue, TokenKind::Eof]
        );
    }

    #[test]
    fn backtick_names_with_doubling() {
        let (tokens, errors) = Lexer::new("`a``b` x").lex();
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind(), TokenKind::QuotedName);
        assert_eq!(tokens[0].data(), "`a``b`");
    }

    #[test]
    fn comments() {
        let (tokens, errors) = Lexer::new("// line\n/* block */ RETURN").lex();
        assert!(errors.is_empty());
        let comments: Vec<_> = tokens
            .iter()
            .filter(|token| token.kind() == TokenKind::Comment)
            .map(|token| token.data())
            .collect();
        assert_eq!(comments, vec!["// line", "/* block */"]);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let (_, errors) = Lexer::new("RETURN 'abc").lex();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "Unterminated string");
        assert_eq!(errors[0].data(), "'abc");
        assert_eq!(errors[0].index(), 7);
    }

    #[test]
    fn unexpected_characters_resync_at_boundary() {
        let (tokens, errors) = Lexer::new("RETURN ~~ 1").lex();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].data(), "~~");
        assert!(tokens.iter().any(|token| token.kind() == TokenKind::Int));
    }

    #[test]
    fn token_positions_track_lines() {
        let (tokens, _) = Lexer::new("RETURN\n  1").lex();
        let int = tokens
            .iter()
            .find(|token| token.kind() == TokenKind::Int)
            .unwrap();
        assert_eq!(int.index(), 9);
        assert_eq!(int.position().line, 2);
        assert_eq!(int.position().column, 3);
    }

    #[test]
    fn round_trips_the_input() {
        let input = "MATCH (n:Person {name: 'Alice'})-[:KNOWS*1..2]->(m)\nRETURN m // done";
        let (tokens, errors) = Lexer::new(input).lex();
        assert!(errors.is_empty());
        let rebuilt: String = tokens.iter().map(|token| token.data()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn token_limit_aborts() {
        let (tokens, errors) = Lexer::new("RETURN 1, 2, 3, 4, 5").with_limit(3).lex();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_limit());
        assert!(tokens.len() <= 3);
    }
}
