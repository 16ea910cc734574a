//! Lexer for O'ahu.
//!
//! Converts source text into a lazy token sequence. Each call to
//! [`Lexer::next_token`] skips blanks and comments, then lexes one token by
//! maximal munch. Once the input is exhausted the lexer keeps yielding
//! [`TokenKind::EndOfFile`].
//!
//! `;`, `\r` and `\n` all produce [`TokenKind::EndOfLine`]; the parser
//! decides where line ends are significant.

mod cursor;
mod escape;
mod keywords;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use cursor::Cursor;
use oahu_ir::{Literal, StringInterner, Token, TokenKind};
use tracing::trace;

/// Lazy tokenizer over one source text.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    /// Set once the first `EndOfFile` has been produced.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, interner: &'a StringInterner) -> Self {
        Lexer {
            cursor: Cursor::new(text),
            interner,
            exhausted: false,
        }
    }

    /// True until the end-of-file token has been produced.
    #[inline]
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Lex the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        while let Some(c) = self.cursor.current() {
            if c == ' ' || c == '\t' {
                self.cursor.bump();
                continue;
            }

            if self.cursor.starts_with("//") {
                self.cursor.skip_line();
                continue;
            }

            if self.cursor.starts_with("/*") {
                self.skip_block_comment()?;
                continue;
            }

            let token = if c.is_ascii_digit() {
                self.number()?
            } else if is_word_start(c) {
                self.word()
            } else if c == '"' {
                self.string()?
            } else {
                self.operator(c)?
            };

            trace!(kind = %token.kind, span = ?token.span, "token");
            return Ok(token);
        }

        self.exhausted = true;
        Ok(Token::new(self.cursor.here(), TokenKind::EndOfFile))
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        self.cursor.eat_str("/*");
        if self.cursor.skip_through("*/") {
            Ok(())
        } else {
            Err(LexError::early_end_of_file(self.cursor.here()))
        }
    }

    fn number(&mut self) -> Result<Token, LexError> {
        if self.cursor.starts_with("0b") {
            return self.radix_number("0b", 2, |c| matches!(c, '0' | '1' | '_'));
        }
        if self.cursor.starts_with("0x") {
            return self.radix_number("0x", 16, |c| c.is_ascii_hexdigit() || c == '_');
        }
        self.decimal()
    }

    /// Binary or hex literal: an integer converted to a number.
    fn radix_number(
        &mut self,
        prefix: &str,
        radix: u32,
        is_digit: fn(char) -> bool,
    ) -> Result<Token, LexError> {
        let start = self.cursor.here();
        self.cursor.eat_str(prefix);

        let mut digits = String::new();
        // The first digit is taken unconditionally so `0b2` reports `2`.
        if let Some(c) = self.cursor.bump() {
            digits.push(c);
        }
        self.cursor.take_while(&mut digits, is_digit);

        let span = self.cursor.span_from(start);
        let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
        #[expect(
            clippy::cast_precision_loss,
            reason = "literals wider than 53 bits round like any f64"
        )]
        let value = i64::from_str_radix(&cleaned, radix)
            .map(|n| n as f64)
            .map_err(|_| LexError::invalid_number(format!("{prefix}{digits}"), span))?;

        Ok(Token::new(span, TokenKind::Value(Literal::Number(value))))
    }

    fn decimal(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.here();
        let mut text = String::new();
        self.cursor.take_while(&mut text, is_decimal_digit);

        if self.cursor.current() == Some('.')
            && self.cursor.peek_nth(1).is_some_and(is_decimal_digit)
        {
            text.push('.');
            self.cursor.bump();
            self.cursor.take_while(&mut text, is_decimal_digit);
        }

        if matches!(self.cursor.current(), Some('e' | 'E')) {
            // Marker, then one character (normally the sign), then digits.
            for _ in 0..2 {
                if let Some(c) = self.cursor.bump() {
                    text.push(c);
                }
            }
            self.cursor.take_while(&mut text, is_decimal_digit);
        }

        let span = self.cursor.span_from(start);
        let cleaned: String = text.chars().filter(|&c| c != '_').collect();
        let value = cleaned
            .parse::<f64>()
            .map_err(|_| LexError::invalid_number(text, span))?;

        Ok(Token::new(span, TokenKind::Value(Literal::Number(value))))
    }

    fn word(&mut self) -> Token {
        let start = self.cursor.here();
        let mut text = String::new();
        self.cursor.take_while(&mut text, is_word_continue);
        let span = self.cursor.span_from(start);

        if let Some(keyword) = keywords::lookup(&text) {
            return Token::new(span, keyword);
        }
        if let Some(literal) = Literal::from_word(&text) {
            return Token::new(span, TokenKind::Value(literal));
        }
        Token::new(span, TokenKind::Name(self.interner.intern(&text)))
    }

    fn string(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.here();
        self.cursor.eat('"');

        let mut value = String::new();
        loop {
            match self.cursor.bump() {
                None => return Err(LexError::early_end_of_file(self.cursor.here())),
                Some('"') => break,
                Some('\\') => value.push(escape::read_escape(&mut self.cursor)?),
                Some(c) => value.push(c),
            }
        }

        let span = self.cursor.span_from(start);
        Ok(Token::new(span, TokenKind::Value(Literal::String(value))))
    }

    fn operator(&mut self, c: char) -> Result<Token, LexError> {
        let start = self.cursor.here();
        self.cursor.bump();

        let kind = match c {
            '+' => self.with_eq(TokenKind::PlusEq, TokenKind::Plus),
            '-' => {
                if self.cursor.eat('=') {
                    TokenKind::MinusEq
                } else if self.cursor.eat('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '*' => self.with_eq(TokenKind::StarEq, TokenKind::Star),
            '/' => self.with_eq(TokenKind::SlashEq, TokenKind::Slash),
            '%' => self.with_eq(TokenKind::PercentEq, TokenKind::Percent),
            '<' => self.with_eq(TokenKind::LtEq, TokenKind::Lt),
            '>' => self.with_eq(TokenKind::GtEq, TokenKind::Gt),
            '=' => self.with_eq(TokenKind::EqEq, TokenKind::Eq),
            '!' => self.with_eq(TokenKind::NotEq, TokenKind::Bang),
            '?' => {
                if self.cursor.eat('?') {
                    TokenKind::DoubleQuestion
                } else {
                    TokenKind::Question
                }
            }
            '@' => TokenKind::At,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '#' => TokenKind::Pound,
            ';' | '\r' | '\n' => TokenKind::EndOfLine,
            _ => return Err(LexError::illegal_character(c, start)),
        };

        Ok(Token::new(self.cursor.span_from(start), kind))
    }

    /// Longest match for `<op>=`.
    #[inline]
    fn with_eq(&mut self, compound: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.eat('=') {
            compound
        } else {
            single
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens through the first `EndOfFile`, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        self.has_next().then(|| self.next_token())
    }
}

/// Lex an entire source into tokens, ending with `EndOfFile`.
pub fn tokenize(text: &str, interner: &StringInterner) -> Result<Vec<Token>, LexError> {
    Lexer::new(text, interner).collect()
}

#[inline]
fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
fn is_word_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline]
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}
