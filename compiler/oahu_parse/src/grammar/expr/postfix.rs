//! Postfix operations: `.member`, `[args]` and `(args)`, chained.

use oahu_ir::ast::{Arg, Expr, ExprKind};
use oahu_ir::TokenKind;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_terminal()?;

        loop {
            let span = self.current_span();
            let kind = match self.current_kind() {
                TokenKind::Dot => {
                    self.advance()?;
                    let (member, _) = self.expect_name()?;
                    ExprKind::Member {
                        target: Box::new(expr),
                        member,
                    }
                }
                TokenKind::LBracket => {
                    self.advance()?;
                    let args = self.in_context(ErrorContext::Arguments, Self::parse_index_args)?;
                    ExprKind::Index {
                        target: Box::new(expr),
                        args,
                    }
                }
                TokenKind::LParen => {
                    self.advance()?;
                    let args = self.in_context(ErrorContext::Arguments, Self::parse_call_args)?;
                    ExprKind::Invoke {
                        target: Box::new(expr),
                        args,
                    }
                }
                _ => return Ok(expr),
            };
            expr = Expr::new(span, kind);
        }
    }

    /// Index arguments after `[`, through `]`: `[*] expr`, comma separated.
    fn parse_index_args(&mut self) -> Result<Vec<Arg>, ParseError> {
        let mut args = Vec::new();
        self.skip_newlines()?;

        if self.eat(&TokenKind::RBracket)? {
            return Ok(args);
        }

        loop {
            let span = self.current_span();
            let spread = self.eat(&TokenKind::Star)?;
            let expr = self.parse_expr()?;
            args.push(Arg {
                span,
                spread,
                name: None,
                expr,
            });
            if !self.eat_line(&TokenKind::Comma)? {
                break;
            }
        }

        self.skip_newlines()?;
        self.expect(&TokenKind::RBracket)?;
        Ok(args)
    }

    /// Call arguments after `(`, through `)`: `[*] [name =] expr`.
    pub(crate) fn parse_call_args(&mut self) -> Result<Vec<Arg>, ParseError> {
        let mut args = Vec::new();
        self.skip_newlines()?;

        if self.eat(&TokenKind::RParen)? {
            return Ok(args);
        }

        loop {
            let span = self.current_span();
            let spread = self.eat(&TokenKind::Star)?;
            let mut expr = self.parse_spread()?;
            let mut name = None;

            if self.eat(&TokenKind::Eq)? {
                let Some(arg_name) = expr.as_name() else {
                    return Err(ParseError::invalid_argument_name(expr.span));
                };
                name = Some(arg_name);
                expr = self.parse_spread()?;
            }

            args.push(Arg {
                span,
                spread,
                name,
                expr,
            });
            if !self.eat_line(&TokenKind::Comma)? {
                break;
            }
        }

        self.skip_newlines()?;
        self.expect(&TokenKind::RParen)?;
        Ok(args)
    }
}
