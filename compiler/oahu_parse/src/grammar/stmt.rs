//! Statement parsing.

use oahu_ir::ast::{Declaration, Expr, ForLoop, Names, Stmt, StmtKind};
use oahu_ir::{Name, TokenKind};
use oahu_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        trace!(token = %self.current_kind(), span = ?self.current_span(), "statement");

        match self.current_kind() {
            TokenKind::Let | TokenKind::Var => {
                self.in_context(ErrorContext::Declaration, Self::parse_declaration)
            }
            TokenKind::While => self.in_context(ErrorContext::WhileLoop, Self::parse_while),
            TokenKind::Do => self.in_context(ErrorContext::DoLoop, Self::parse_do),
            TokenKind::Loop => self.in_context(ErrorContext::Loop, Self::parse_loop),
            TokenKind::For => self.in_context(ErrorContext::ForLoop, Self::parse_for),
            TokenKind::Break => self.parse_jump(StmtKind::Break),
            TokenKind::Continue => self.parse_jump(StmtKind::Continue),
            // `catch` doubles as `throw` in statement position.
            TokenKind::Throw | TokenKind::Catch => self.parse_throw(),
            TokenKind::Return => self.parse_exit_value(StmtKind::Return),
            TokenKind::Exit => self.parse_exit_value(StmtKind::Exit),
            TokenKind::Fun => self.in_context(ErrorContext::Function, Self::parse_fun),
            TokenKind::Class => self.in_context(ErrorContext::Class, Self::parse_class),
            TokenKind::Object => self.in_context(ErrorContext::Object, Self::parse_object),
            TokenKind::Enum => self.in_context(ErrorContext::Enum, Self::parse_enum),
            TokenKind::LBrace => self.parse_stmt_body(),
            _ => self.parse_expression_stmt(),
        }
    }

    /// A loop or function body: a `{ }` block or a single statement.
    pub(crate) fn parse_stmt_body(&mut self) -> Result<Stmt, ParseError> {
        let span = self.current_span();

        if self.eat_line(&TokenKind::LBrace)? {
            let stmts = self.parse_stmts_until_brace()?;
            return Ok(Stmt::new(span, StmtKind::Block(stmts)));
        }

        self.parse_stmt()
    }

    /// Statements up to and including the closing `}`.
    pub(crate) fn parse_stmts_until_brace(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.eat(&TokenKind::RBrace)? {
            stmts.push(self.parse_stmt()?);
            self.skip_newlines()?;
        }
        Ok(stmts)
    }

    /// `let|var [mut] (name | (n1, n2, ...)) = expr`
    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let span = self.current_span();
        let constant = self.eat(&TokenKind::Let)?;
        if !constant {
            self.expect(&TokenKind::Var)?;
        }
        let mutable = self.eat(&TokenKind::Mut)?;

        let (destructured, names) = self.parse_binding_names()?;

        self.expect_line(&TokenKind::Eq)?;
        let value = self.parse_expr()?;

        Ok(Stmt::new(
            span,
            StmtKind::Declaration(Box::new(Declaration {
                constant,
                mutable,
                destructured,
                names,
                value,
            })),
        ))
    }

    /// `name` or `(n1, n2, ...)`, returning whether the names were
    /// parenthesized.
    pub(crate) fn parse_binding_names(&mut self) -> Result<(bool, Names), ParseError> {
        let mut names = Names::new();

        if self.eat(&TokenKind::LParen)? {
            loop {
                names.push(self.declared_name()?.0);
                if !self.eat(&TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(&TokenKind::RParen)?;
            return Ok((true, names));
        }

        names.push(self.declared_name()?.0);
        Ok((false, names))
    }

    /// `while [@label] (cond) body`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let span = self.expect(&TokenKind::While)?.span;
        let label = self.parse_label()?;

        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;

        let body = Box::new(self.parse_stmt_body()?);

        Ok(Stmt::new(
            span,
            StmtKind::While {
                label,
                condition,
                body,
            },
        ))
    }

    /// `do [@label] body while (cond)`
    fn parse_do(&mut self) -> Result<Stmt, ParseError> {
        let span = self.expect(&TokenKind::Do)?.span;
        let label = self.parse_label()?;

        let body = Box::new(self.parse_stmt_body()?);
        self.skip_newlines()?;

        self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;

        Ok(Stmt::new(
            span,
            StmtKind::Do {
                label,
                body,
                condition,
            },
        ))
    }

    /// `loop [@label] [(count)] body`
    fn parse_loop(&mut self) -> Result<Stmt, ParseError> {
        let span = self.expect(&TokenKind::Loop)?.span;
        let label = self.parse_label()?;

        let count = if self.eat(&TokenKind::LParen)? {
            let count = self.parse_expr()?;
            self.expect(&TokenKind::RParen)?;
            Some(count)
        } else {
            None
        };

        let body = Box::new(self.parse_stmt_body()?);

        Ok(Stmt::new(span, StmtKind::Loop { label, count, body }))
    }

    /// `for [@label] ((name | (n1, ...)) : expr) body`
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let span = self.expect(&TokenKind::For)?.span;
        let label = self.parse_label()?;

        self.expect(&TokenKind::LParen)?;
        let (destructured, names) = self.parse_binding_names()?;
        self.expect(&TokenKind::Colon)?;
        let iterable = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;

        let body = self.parse_stmt_body()?;

        Ok(Stmt::new(
            span,
            StmtKind::For(Box::new(ForLoop {
                label,
                destructured,
                names,
                iterable,
                body,
            })),
        ))
    }

    /// `break [@label]` / `continue [@label]`
    fn parse_jump(&mut self, make: fn(Option<Name>) -> StmtKind) -> Result<Stmt, ParseError> {
        let span = self.advance()?.span;
        let label = self.parse_label()?;
        Ok(Stmt::new(span, make(label)))
    }

    /// `throw expr`
    fn parse_throw(&mut self) -> Result<Stmt, ParseError> {
        let span = self.advance()?.span;
        let value = self.parse_expr()?;
        Ok(Stmt::new(span, StmtKind::Throw(value)))
    }

    /// `return [expr]` / `exit [expr]`; the value is omitted at a line end,
    /// a closing brace, or the end of file.
    fn parse_exit_value(&mut self, make: fn(Expr) -> StmtKind) -> Result<Stmt, ParseError> {
        let span = self.advance()?.span;

        let value = match self.current_kind() {
            TokenKind::EndOfLine | TokenKind::RBrace | TokenKind::EndOfFile => Expr::empty(),
            _ => self.parse_expr()?,
        };

        Ok(Stmt::new(span, make(value)))
    }

    fn parse_expression_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.current_span();
        let expr = self.parse_expr()?;
        Ok(Stmt::new(span, StmtKind::Expression(expr)))
    }
}
