//! Terminal expressions: literals, names, groups, lists and lambdas.

use std::rc::Rc;

use oahu_ir::ast::{Comprehension, Expr, ExprKind, FunDecl, Param, Stmt, StmtKind};
use oahu_ir::{Name, Span, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_terminal(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::Value(literal) => {
                let literal = literal.clone();
                let span = self.advance()?.span;
                Ok(Expr::new(span, ExprKind::Value(literal)))
            }
            TokenKind::Name(_) => {
                let (name, span) = self.expect_name()?;
                Ok(Expr::new(span, ExprKind::Name(name)))
            }
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::LBracket => self.in_context(ErrorContext::List, Self::parse_list),
            TokenKind::Colon => self.in_context(ErrorContext::Lambda, Self::parse_lambda),
            TokenKind::If => self.in_context(ErrorContext::If, Self::parse_if),
            TokenKind::When => self.in_context(ErrorContext::When, Self::parse_when),
            TokenKind::Try => self.in_context(ErrorContext::Try, Self::parse_try),
            found => Err(ParseError::invalid_terminal(found.clone(), self.current_span())),
        }
    }

    /// `[a, b, ...]` or `[element for (names) : iterable if condition]`.
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let span = self.expect_line(&TokenKind::LBracket)?.span;
        let mut elements = Vec::new();

        if !self.check(&TokenKind::RBracket) {
            loop {
                elements.push(self.parse_expr()?);
                if !self.eat_line(&TokenKind::Comma)? {
                    break;
                }
            }
            self.skip_newlines()?;

            if elements.len() == 1 && self.check(&TokenKind::For) {
                let element = elements.remove(0);
                return self.parse_comprehension(span, element);
            }
        }

        self.expect(&TokenKind::RBracket)?;
        Ok(Expr::new(span, ExprKind::List(elements)))
    }

    fn parse_comprehension(
        &mut self,
        span: Span,
        element: Expr,
    ) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::For)?;
        let (destructured, names) = self.parse_binding_names()?;
        self.expect(&TokenKind::Colon)?;
        let iterable = self.parse_expr()?;
        self.skip_newlines()?;

        let condition = if self.eat(&TokenKind::If)? {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.skip_newlines()?;
        self.expect(&TokenKind::RBracket)?;

        Ok(Expr::new(
            span,
            ExprKind::Comprehension(Box::new(Comprehension {
                element,
                destructured,
                names,
                iterable,
                condition,
            })),
        ))
    }

    /// `: a, b -> body`, or `:: body` without parameters.
    fn parse_lambda(&mut self) -> Result<Expr, ParseError> {
        let span = self.expect(&TokenKind::Colon)?.span;
        let mut params = Vec::new();

        if !self.eat(&TokenKind::Colon)? {
            loop {
                let (name, name_span) = self.expect_name()?;
                params.push(Param {
                    span: name_span,
                    constant: None,
                    mutable: false,
                    variadic: false,
                    name,
                    default: None,
                });
                if !self.eat(&TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(&TokenKind::Arrow)?;
        }

        let body = self.parse_expr_body()?;
        let decl = FunDecl {
            span,
            path: String::new(),
            linked: false,
            name: Name::EMPTY,
            params,
            body: Stmt::new(body.span, StmtKind::Return(body)),
        };

        Ok(Expr::new(span, ExprKind::Lambda(Rc::new(decl))))
    }
}
