/// The kind of a lexer [`Token`](crate::Token).
///
/// Keywords are not distinguished here: Cypher keywords are
/// case-insensitive, so they are lexed as [`TokenKind::Name`] and matched
/// by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Comment,
    Name,
    QuotedName,
    Int,
    Float,
    StringValue,

    Semicolon,   // ;
    Colon,       // :
    Comma,       // ,
    Dot,         // .
    DotDot,      // ..
    LParen,      // (
    RParen,      // )
    LBracket,    // [
    RBracket,    // ]
    LCurly,      // {
    RCurly,      // }
    Plus,        // +
    PlusEq,      // +=
    Minus,       // -
    Star,        // *
    Slash,       // /
    Percent,     // %
    Caret,       // ^
    Eq,          // =
    NotEq,       // <>
    Lt,          // <
    LtEq,        // <=
    Gt,          // >
    GtEq,        // >=
    RegexMatch,  // =~
    Pipe,        // |
    Dollar,      // $

    /// A region the lexer could not match; always accompanied by an error.
    Error,
    Eof,
}

impl TokenKind {
    pub(crate) fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Shorthand for punctuation [`TokenKind`]s.
#[macro_export]
macro_rules! T {
    [;] => { $crate::TokenKind::Semicolon };
    [:] => { $crate::TokenKind::Colon };
    [,] => { $crate::TokenKind::Comma };
    [.] => { $crate::TokenKind::Dot };
    [..] => { $crate::TokenKind::DotDot };
    ['('] => { $crate::TokenKind::LParen };
    [')'] => { $crate::TokenKind::RParen };
    ['['] => { $crate::TokenKind::LBracket };
    [']'] => { $crate::TokenKind::RBracket };
    ['{'] => { $crate::TokenKind::LCurly };
    ['}'] => { $crate::TokenKind::RCurly };
    [+] => { $crate::TokenKind::Plus };
    [+=] => { $crate::TokenKind::PlusEq };
    [-] => { $crate::TokenKind::Minus };
    [*] => { $crate::TokenKind::Star };
    [/] => { $crate::TokenKind::Slash };
    [%] => { $crate::TokenKind::Percent };
    [^] => { $crate::TokenKind::Caret };
    [=] => { $crate::TokenKind::Eq };
    [<>] => { $crate::TokenKind::NotEq };
    [<] => { $crate::TokenKind::Lt };
    [<=] => { $crate::TokenKind::LtEq };
    [>] => { $crate::TokenKind::Gt };
    [>=] => { $crate::TokenKind::GtEq };
    [=~] => { $crate::TokenKind::RegexMatch };
    [|] => { $crate::TokenKind::Pipe };
}
