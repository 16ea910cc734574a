//! Expression bodies and the conditional and `try` expressions.

use oahu_ir::ast::{Expr, ExprKind, Try, When, WhenBranch};
use oahu_ir::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `{ expr* }` or a single body item.
    pub(crate) fn parse_expr_body(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();

        if self.eat_line(&TokenKind::LBrace)? {
            let mut exprs = Vec::new();
            while !self.eat(&TokenKind::RBrace)? {
                exprs.push(self.parse_body_item()?);
                self.skip_newlines()?;
            }
            return Ok(Expr::new(span, ExprKind::Block(exprs)));
        }

        self.parse_body_item()
    }

    /// An expression, or a statement wrapped as one.
    fn parse_body_item(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::Let
            | TokenKind::Var
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::Loop
            | TokenKind::For
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Return
            | TokenKind::Throw
            | TokenKind::Exit
            | TokenKind::Fun
            | TokenKind::Class
            | TokenKind::Object
            | TokenKind::Enum => {
                let span = self.current_span();
                let stmt = self.parse_stmt()?;
                Ok(Expr::new(span, ExprKind::Statement(Box::new(stmt))))
            }
            _ => self.parse_expr(),
        }
    }

    /// `if (cond) body [else body]`
    pub(crate) fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let span = self.expect(&TokenKind::If)?.span;

        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;

        let body = self.parse_expr_body()?;
        self.skip_newlines()?;

        let else_body = if self.eat(&TokenKind::Else)? {
            Some(Box::new(self.parse_expr_body()?))
        } else {
            None
        };

        Ok(Expr::new(
            span,
            ExprKind::If {
                condition: Box::new(condition),
                body: Box::new(body),
                else_body,
            },
        ))
    }

    /// `when [(subject)] { cond -> body ... [else -> body] }`
    pub(crate) fn parse_when(&mut self) -> Result<Expr, ParseError> {
        let span = self.expect(&TokenKind::When)?.span;

        let subject = if self.eat(&TokenKind::LParen)? {
            let (name, _) = self.expect_name()?;
            self.expect(&TokenKind::RParen)?;
            Some(name)
        } else {
            None
        };

        self.expect_line(&TokenKind::LBrace)?;

        let mut branches = Vec::new();
        let mut else_body = None;

        while !self.check(&TokenKind::RBrace) {
            if self.eat(&TokenKind::Else)? {
                self.expect_line(&TokenKind::Arrow)?;
                else_body = Some(self.parse_expr_body()?);
                self.skip_newlines()?;
                if !self.check(&TokenKind::RBrace) {
                    return Err(ParseError::early_else_branch(self.current_span()));
                }
                break;
            }

            let branch_span = self.current_span();
            let condition = self.parse_expr()?;
            self.expect_line(&TokenKind::Arrow)?;
            let body = self.parse_expr_body()?;
            branches.push(WhenBranch {
                span: branch_span,
                condition,
                body,
            });
            self.skip_newlines()?;
        }

        self.expect(&TokenKind::RBrace)?;

        Ok(Expr::new(
            span,
            ExprKind::When(Box::new(When {
                subject,
                branches,
                else_body,
            })),
        ))
    }

    /// `try body [catch [(name)] body] [finally body]`
    pub(crate) fn parse_try(&mut self) -> Result<Expr, ParseError> {
        let span = self.expect(&TokenKind::Try)?.span;

        let body = self.parse_expr_body()?;
        self.skip_newlines()?;

        let mut error = None;
        let mut catch_body = None;
        if self.eat(&TokenKind::Catch)? {
            if self.eat(&TokenKind::LParen)? {
                error = Some(self.declared_name()?.0);
                self.expect(&TokenKind::RParen)?;
            }
            catch_body = Some(self.parse_expr_body()?);
            self.skip_newlines()?;
        }

        let finally_body = if self.eat(&TokenKind::Finally)? {
            Some(self.parse_expr_body()?)
        } else {
            None
        };

        Ok(Expr::new(
            span,
            ExprKind::Try(Box::new(Try {
                body,
                error,
                catch_body,
                finally_body,
            })),
        ))
    }
}
