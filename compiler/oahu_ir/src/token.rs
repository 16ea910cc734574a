//! Token types produced by the lexer.

use std::fmt;

use crate::{Name, Span};

/// A token with its source position.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
}

impl Token {
    #[inline]
    pub fn new(span: Span, kind: TokenKind) -> Self {
        Token { span, kind }
    }
}

/// Literal constant carried by a [`TokenKind::Value`] token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    String(String),
    Null,
    Unit,
}

impl Literal {
    /// Match one of the literal constant words (`true`, `false`, `null`, `unit`).
    ///
    /// Unlike keywords these are case-sensitive.
    pub fn from_word(word: &str) -> Option<Literal> {
        match word {
            "true" => Some(Literal::Bool(true)),
            "false" => Some(Literal::Bool(false)),
            "null" => Some(Literal::Null),
            "unit" => Some(Literal::Unit),
            _ => None,
        }
    }
}

/// Token kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Keywords
    And,
    Or,
    Let,
    Var,
    Mut,
    Fun,
    Class,
    Object,
    Enum,
    If,
    Else,
    When,
    For,
    While,
    Do,
    Loop,
    Break,
    Continue,
    Return,
    Throw,
    Try,
    Catch,
    Finally,
    Exit,

    // Symbols
    /// `=`
    Eq,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `%=`
    PercentEq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Bang,
    /// `@`
    At,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `.`
    Dot,
    /// `?`
    Question,
    /// `??`
    DoubleQuestion,
    /// `:`
    Colon,
    /// `#`
    Pound,
    /// `->`
    Arrow,

    /// Literal constant.
    Value(Literal),
    /// Identifier.
    Name(Name),
    /// `;`, carriage return, or newline.
    EndOfLine,
    EndOfFile,
}

impl TokenKind {
    /// Source text of a keyword or symbol; a category name otherwise.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Let => "let",
            TokenKind::Var => "var",
            TokenKind::Mut => "mut",
            TokenKind::Fun => "fun",
            TokenKind::Class => "class",
            TokenKind::Object => "object",
            TokenKind::Enum => "enum",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::When => "when",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Loop => "loop",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Return => "return",
            TokenKind::Throw => "throw",
            TokenKind::Try => "try",
            TokenKind::Catch => "catch",
            TokenKind::Finally => "finally",
            TokenKind::Exit => "exit",
            TokenKind::Eq => "=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::At => "@",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Dot => ".",
            TokenKind::Question => "?",
            TokenKind::DoubleQuestion => "??",
            TokenKind::Colon => ":",
            TokenKind::Pound => "#",
            TokenKind::Arrow => "->",
            TokenKind::Value(_) => "Value",
            TokenKind::Name(_) => "Name",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::EndOfFile => "EndOfFile",
        }
    }

    /// Check whether two kinds are the same variant, ignoring payloads.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
