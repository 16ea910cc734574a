//! Token cursor over a lazily lexed stream.
//!
//! Holds one token of lookahead. Advancing pulls the next token from the
//! lexer only while the lexer reports more input, so once the end of file
//! is reached it stays current.

use oahu_ir::{Span, Token, TokenKind};
use oahu_lexer::Lexer;

use crate::ParseError;

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first token.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Cursor { lexer, current })
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    /// Check whether the current token is of `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current.kind.same_kind(kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(&TokenKind::EndOfFile)
    }

    /// Move to the next token, returning the one just left.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        let next = if self.lexer.has_next() {
            self.lexer.next_token()?
        } else {
            self.current.clone()
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it is of `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a token of `kind` or fail.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(ParseError::invalid_token(
                self.current.kind.clone(),
                kind.clone(),
                self.current.span,
            ))
        }
    }

    /// Skip any run of end-of-line tokens.
    pub fn skip_newlines(&mut self) -> Result<(), ParseError> {
        while self.check(&TokenKind::EndOfLine) {
            self.advance()?;
        }
        Ok(())
    }
}
