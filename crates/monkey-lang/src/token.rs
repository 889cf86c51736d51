//! Token vocabulary for the Monkey lexer and parser.
//!
//! A [`Token`] is a `(kind, literal)` pair. `literal` is the exact source
//! slice for identifiers, integers, and string contents; for operators and
//! keywords it is the canonical spelling (`"+"`, `"fn"`, `"true"`, ...).
//!
//! Punctuation and keyword classification both go through static lookup
//! tables built once with [`once_cell::sync::Lazy`], mirroring the
//! `STATIC_TOKENS` / `KEYWORDS` dictionaries of the reference
//! implementation rather than hand-written `match` chains.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// The closed alphabet of token kinds Monkey source reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers + literals
    Ident,
    Int,
    Str,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A lexical token: its kind plus the literal source text it was read from.
///
/// EOF's literal is the NUL character, matching the sentinel the lexer uses
/// internally to detect end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// An `EOF` token; its literal is the NUL character.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "\u{0}")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?}, {:?})", self.kind, self.literal)
    }
}

/// Punctuation strings (one or two characters) mapped to their prebuilt
/// token. Populated once on first access.
pub(crate) static PUNCTUATION: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    use TokenKind::*;
    HashMap::from([
        ("=", Assign),
        ("+", Plus),
        ("-", Minus),
        ("!", Bang),
        ("*", Asterisk),
        ("/", Slash),
        ("<", Lt),
        (">", Gt),
        (",", Comma),
        (";", Semicolon),
        (":", Colon),
        ("(", LParen),
        (")", RParen),
        ("{", LBrace),
        ("}", RBrace),
        ("[", LBracket),
        ("]", RBracket),
        ("==", Eq),
        ("!=", NotEq),
    ])
});

/// Keyword text mapped to its token kind. Anything not found here that
/// starts with a letter/underscore is an `IDENT`.
pub(crate) static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    use TokenKind::*;
    HashMap::from([
        ("fn", Function),
        ("let", Let),
        ("true", True),
        ("false", False),
        ("if", If),
        ("else", Else),
        ("return", Return),
    ])
});

/// Looks up `literal` (one or two characters) in the punctuation table.
pub(crate) fn lookup_punctuation(literal: &str) -> Option<TokenKind> {
    PUNCTUATION.get(literal).copied()
}

/// Classifies an identifier-shaped literal as a keyword or plain `IDENT`.
pub(crate) fn lookup_ident(literal: &str) -> TokenKind {
    KEYWORDS.get(literal).copied().unwrap_or(TokenKind::Ident)
}
