use crate::ast;
use crate::{SyntaxKind, SyntaxNode, SyntaxToken};
use ordered_float::OrderedFloat;
use std::num::IntErrorKind;

/// Failure to interpret an INTEGER literal's text as a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntValueError {
    #[error("integer literal out of range")]
    Overflow,
    #[error("invalid digit in integer literal")]
    InvalidDigit,
}

/// Failure to interpret a FLOAT literal's text as a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FloatValueError {
    #[error("invalid float literal")]
    Invalid,
}

fn data_token(syntax: &SyntaxNode) -> Option<SyntaxToken> {
    syntax
        .children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|token| {
            matches!(
                token.kind(),
                SyntaxKind::IDENT
                    | SyntaxKind::QUOTED_IDENT
                    | SyntaxKind::INT_NUMBER
                    | SyntaxKind::FLOAT_NUMBER
                    | SyntaxKind::STRING_VALUE
                    | SyntaxKind::COMMENT
            )
        })
}

/// Strip the backticks of a quoted name and fold doubled backticks.
fn unquote_name(text: &str) -> String {
    let inner = text
        .strip_prefix('`')
        .map(|rest| rest.strip_suffix('`').unwrap_or(rest))
        .unwrap_or(text);
    inner.replace("``", "`")
}

fn name_of(syntax: &SyntaxNode) -> String {
    match data_token(syntax) {
        Some(token) if token.kind() == SyntaxKind::QUOTED_IDENT => unquote_name(token.text()),
        Some(token) => token.text().to_string(),
        None => String::new(),
    }
}

impl ast::Identifier {
    /// The identifier's name, with backtick quoting removed.
    pub fn name(&self) -> String {
        name_of(&self.syntax)
    }
}

impl ast::Parameter {
    /// The parameter's name: `name` for `$name` and `{name}`, `0` for `$0`.
    pub fn name(&self) -> String {
        name_of(&self.syntax)
    }
}

impl ast::Label {
    pub fn name(&self) -> String {
        name_of(&self.syntax)
    }
}

impl ast::RelType {
    pub fn name(&self) -> String {
        name_of(&self.syntax)
    }
}

impl ast::PropName {
    pub fn name(&self) -> String {
        name_of(&self.syntax)
    }
}

impl ast::IndexName {
    pub fn name(&self) -> String {
        name_of(&self.syntax)
    }
}

impl ast::FunctionName {
    /// The full, possibly dotted name: `db.labels`.
    pub fn name(&self) -> String {
        dotted_name(&self.syntax)
    }
}

impl ast::ProcName {
    pub fn name(&self) -> String {
        dotted_name(&self.syntax)
    }
}

fn dotted_name(syntax: &SyntaxNode) -> String {
    syntax
        .children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|token| !token.kind().is_trivia())
        .map(|token| token.text().to_string())
        .collect()
}

impl ast::Command {
    /// The command's name, without the leading colon.
    pub fn name(&self) -> Option<String> {
        self.syntax
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|token| token.kind() == SyntaxKind::IDENT)
            .map(|token| token.text().to_string())
    }
}

impl ast::LineComment {
    /// The comment text after the `//` marker.
    pub fn text(&self) -> String {
        let raw = raw_text(&self.syntax);
        raw.strip_prefix("//").unwrap_or(&raw).to_string()
    }
}

impl ast::BlockComment {
    /// The comment text between the `/*` and `*/` markers.
    pub fn text(&self) -> String {
        let raw = raw_text(&self.syntax);
        let inner = raw.strip_prefix("/*").unwrap_or(&raw);
        inner.strip_suffix("*/").unwrap_or(inner).to_string()
    }
}

fn raw_text(syntax: &SyntaxNode) -> String {
    data_token(syntax)
        .map(|token| token.text().to_string())
        .unwrap_or_default()
}

impl ast::StringLiteral {
    /// The literal's source text, quotes and escapes included.
    pub fn text(&self) -> String {
        raw_text(&self.syntax)
    }

    /// The string's value, with quotes removed and escape sequences
    /// decoded. Tokens in string position that are not quoted (client
    /// command arguments, option values) are returned verbatim. Escape
    /// sequences the lexer already reported as invalid pass through
    /// unchanged.
    pub fn value(&self) -> String {
        let text = self.text();
        let Some(quote) = text.chars().next().filter(|c| matches!(c, '\'' | '"')) else {
            return text;
        };
        let inner = &text[1..];
        let inner = inner.strip_suffix(quote).unwrap_or(inner);

        let mut value = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                value.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('r') => value.push('\r'),
                Some('b') => value.push('\u{0008}'),
                Some('f') => value.push('\u{000C}'),
                Some('\\') => value.push('\\'),
                Some('\'') => value.push('\''),
                Some('"') => value.push('"'),
                Some('/') => value.push('/'),
                Some('u') => unescape_unicode(&mut chars, 4, &mut value),
                Some('U') => unescape_unicode(&mut chars, 8, &mut value),
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => value.push('\\'),
            }
        }
        value
    }
}

fn unescape_unicode(chars: &mut std::str::Chars<'_>, digits: usize, out: &mut String) {
    let hex: String = chars.clone().take(digits).collect();
    let decoded = (hex.len() == digits)
        .then(|| u32::from_str_radix(&hex, 16).ok())
        .flatten()
        .and_then(char::from_u32);
    match decoded {
        Some(c) => {
            out.push(c);
            for _ in 0..digits {
                chars.next();
            }
        }
        None => {
            out.push('\\');
            out.push(if digits == 4 { 'u' } else { 'U' });
        }
    }
}

impl ast::Integer {
    /// The literal's source text.
    pub fn text(&self) -> String {
        raw_text(&self.syntax)
    }

    /// The literal's value; hexadecimal `0x…` and octal `0…` notations
    /// are honored.
    pub fn value(&self) -> Result<i64, IntValueError> {
        let text = self.text();
        let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
        {
            i64::from_str_radix(hex, 16)
        } else if text.len() > 1 && text.starts_with('0') {
            i64::from_str_radix(&text[1..], 8)
        } else {
            text.parse::<i64>()
        };
        parsed.map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => IntValueError::Overflow,
            _ => IntValueError::InvalidDigit,
        })
    }
}

impl ast::Float {
    /// The literal's source text.
    pub fn text(&self) -> String {
        raw_text(&self.syntax)
    }

    pub fn value(&self) -> Result<OrderedFloat<f64>, FloatValueError> {
        self.text()
            .parse::<f64>()
            .map(OrderedFloat)
            .map_err(|_| FloatValueError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{AstNode, IntValueError};
    use crate::parser::grammar::expression::tests::parse_expression;

    fn string_value(literal: &str) -> String {
        let expression = parse_expression(literal);
        crate::ast::StringLiteral::cast(expression.syntax().clone())
            .expect("a string literal")
            .value()
    }

    fn int_value(literal: &str) -> Result<i64, IntValueError> {
        let expression = parse_expression(literal);
        crate::ast::Integer::cast(expression.syntax().clone())
            .expect("an integer literal")
            .value()
    }

    #[test]
    fn unicode_escapes_decode() {
        assert_eq!(string_value(r#""a\u0041""#), "aA");
        assert_eq!(string_value(r#""\u00E9""#), "é");
        assert_eq!(string_value(r#""\U0001F600""#), "😀");
    }

    #[test]
    fn simple_escapes_decode() {
        assert_eq!(string_value(r#""a\tb\nc""#), "a\tb\nc");
        assert_eq!(string_value(r#"'it\'s'"#), "it's");
        assert_eq!(string_value(r#""back\\slash""#), "back\\slash");
    }

    #[test]
    fn integer_radixes() {
        assert_eq!(int_value("42"), Ok(42));
        assert_eq!(int_value("0x1F"), Ok(31));
        assert_eq!(int_value("017"), Ok(15));
        assert_eq!(int_value("0"), Ok(0));
    }

    #[test]
    fn invalid_octal_digit() {
        assert_eq!(int_value("089"), Err(IntValueError::InvalidDigit));
    }

    #[test]
    fn integer_overflow() {
        assert_eq!(
            int_value("99999999999999999999"),
            Err(IntValueError::Overflow)
        );
    }

    #[test]
    fn float_value() {
        let expression = parse_expression("1.5e3");
        let float = crate::ast::Float::cast(expression.syntax().clone()).unwrap();
        assert_eq!(float.value().unwrap().into_inner(), 1500.0);
        assert_eq!(float.text(), "1.5e3");
    }

    #[test]
    fn quoted_identifier_round_trips() {
        let expression = parse_expression("`weird ``name`");
        let identifier = crate::ast::Identifier::cast(expression.syntax().clone()).unwrap();
        assert_eq!(identifier.name(), "weird `name");
    }

    #[test]
    fn unicode_identifier_in_backticks() {
        let expression = parse_expression("`名前`");
        let identifier = crate::ast::Identifier::cast(expression.syntax().clone()).unwrap();
        assert_eq!(identifier.name(), "名前");
    }
}
