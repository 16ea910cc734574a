//! Recursive descent parser for O'ahu.
//!
//! Pulls tokens from the lexer one at a time (one token of lookahead) and
//! builds a tree-shaped [`Program`]. Statements are parsed by recursive
//! descent; expressions by a precedence chain from assignment down to
//! terminals.
//!
//! Parse errors are fatal. Naming warnings (`_`, `__`) are collected on
//! [`ParseOutput`] and never stop the parse.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind, ParseWarning};

use oahu_ir::ast::Program;
use oahu_ir::{Name, Span, StringInterner, Token, TokenKind};
use oahu_lexer::Lexer;

/// A parsed program plus the warnings found on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub warnings: Vec<ParseWarning>,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    warnings: Vec<ParseWarning>,
    /// Names of the classes being declared, innermost last. Used for the
    /// link paths of the functions inside them.
    class_path: Vec<Name>,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned on the first token of `text`.
    pub fn new(text: &'a str, interner: &'a StringInterner) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(Lexer::new(text, interner))?,
            interner,
            warnings: Vec::new(),
            class_path: Vec::new(),
        })
    }

    /// Parse every top-level statement up to the end of file.
    pub fn parse_program(mut self) -> Result<ParseOutput, ParseError> {
        let mut stmts = Vec::new();

        self.skip_newlines()?;
        while !self.is_at_end() {
            stmts.push(self.parse_stmt()?);
            self.skip_newlines()?;
        }

        Ok(ParseOutput {
            program: Program { stmts },
            warnings: self.warnings,
        })
    }

    #[inline]
    fn current_kind(&self) -> &TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Result<Token, ParseError> {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn skip_newlines(&mut self) -> Result<(), ParseError> {
        self.cursor.skip_newlines()
    }

    /// Consume a token of `kind`, then any line ends after it.
    fn expect_line(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        let token = self.expect(kind)?;
        self.skip_newlines()?;
        Ok(token)
    }

    /// Consume a token of `kind` if present, then any line ends after it.
    fn eat_line(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        if self.eat(kind)? {
            self.skip_newlines()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a name token.
    fn expect_name(&mut self) -> Result<(Name, Span), ParseError> {
        match *self.current_kind() {
            TokenKind::Name(name) => {
                let span = self.current_span();
                self.advance()?;
                Ok((name, span))
            }
            _ => Err(ParseError::invalid_token(
                self.current_kind().clone(),
                TokenKind::Name(Name::EMPTY),
                self.current_span(),
            )),
        }
    }

    /// Consume a name being declared, rejecting reserved names and warning
    /// about underscore-only ones.
    fn declared_name(&mut self) -> Result<(Name, Span), ParseError> {
        let (name, span) = self.expect_name()?;
        self.validate_name(name, span)?;
        Ok((name, span))
    }

    fn validate_name(&mut self, name: Name, span: Span) -> Result<(), ParseError> {
        let text = self.interner.lookup(name);

        if name.is_reserved() {
            return Err(ParseError::reserved_name(text, span));
        }

        if !text.is_empty() && text.chars().all(|c| c == '_') {
            let warning = if text.len() == 1 {
                ParseWarning::DiscardedName { span }
            } else {
                ParseWarning::VagueName { span }
            };
            tracing::debug!(?span, name = text, "underscore name");
            self.warnings.push(warning);
        }

        Ok(())
    }

    /// `@label` after a loop keyword.
    fn parse_label(&mut self) -> Result<Option<Name>, ParseError> {
        if self.eat(&TokenKind::At)? {
            Ok(Some(self.expect_name()?.0))
        } else {
            Ok(None)
        }
    }

    /// Run `f`, tagging any error it returns with `context`.
    fn in_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|err| err.in_context(context))
    }

    /// Link path of a function named `name` declared at the current depth.
    fn link_path(&self, name: Name) -> String {
        let class = self
            .class_path
            .last()
            .map_or("", |&class| self.interner.lookup(class));
        format!("{class}.{}", self.interner.lookup(name))
    }
}

/// Parse `text` into a program.
pub fn parse(text: &str, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    Parser::new(text, interner)?.parse_program()
}

#[cfg(test)]
mod tests;
