//! Expression parsing.
//!
//! Precedence, lowest to highest:
//!
//! 1. assignment `= += -= *= /= %=` (right associative)
//! 2. spread prefix `*`
//! 3. `or`, then `and`
//! 4. equality `== !=`, then comparison `< <= > >=`
//! 5. additive `+ -`, then multiplicative `* / %`
//! 6. prefix `- ! #`
//! 7. postfix `.member`, `[args]`, `(args)`
//! 8. terminals
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point (`parse_expr`) and the binary precedence chain
//! - `operators.rs`: operator matching helpers
//! - `postfix.rs`: member access, index, invocation, argument lists
//! - `primary.rs`: literals, names, groups, lists, lambdas
//! - `blocks.rs`: expression bodies, `if`, `when`, `try`

mod blocks;
mod operators;
mod postfix;
mod primary;

use oahu_ir::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use oahu_ir::{Span, TokenKind};
use oahu_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow on deeply
    /// nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `name = value`, or a compound assignment desugared to
    /// `name = name OP value`.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_spread()?;

        if self.check(&TokenKind::Eq) {
            let op_span = self.advance()?.span;
            let target = left
                .as_name()
                .ok_or_else(|| ParseError::invalid_assignment_target(left.span))?;
            let value = self.parse_expr()?;
            return Ok(Expr::new(
                op_span,
                ExprKind::Assign {
                    target,
                    value: Box::new(value),
                },
            ));
        }

        if let Some(op) = self.match_compound_assign_op() {
            let op_span = self.advance()?.span;
            let target = left
                .as_name()
                .ok_or_else(|| ParseError::invalid_assignment_target(left.span))?;
            let right = self.parse_expr()?;
            let value = binary(op_span, op, left, right);
            return Ok(Expr::new(
                op_span,
                ExprKind::Assign {
                    target,
                    value: Box::new(value),
                },
            ));
        }

        Ok(left)
    }

    /// `*expr`: spread a list or string into its items.
    pub(crate) fn parse_spread(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Star) {
            let span = self.advance()?.span;
            let operand = self.parse_or()?;
            return Ok(unary(span, UnaryOp::Spread, operand));
        }
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.check(&TokenKind::Or) {
            let span = self.advance()?.span;
            let right = self.parse_and()?;
            left = binary(span, BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while self.check(&TokenKind::And) {
            let span = self.advance()?.span;
            let right = self.parse_equality()?;
            left = binary(span, BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        while let Some(op) = self.match_equality_op() {
            let span = self.advance()?.span;
            let right = self.parse_comparison()?;
            left = binary(span, op, left, right);
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            let span = self.advance()?.span;
            let right = self.parse_additive()?;
            left = binary(span, op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            let span = self.advance()?.span;
            let right = self.parse_multiplicative()?;
            left = binary(span, op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;
        while let Some(op) = self.match_multiplicative_op() {
            let span = self.advance()?.span;
            let right = self.parse_prefix()?;
            left = binary(span, op, left, right);
        }
        Ok(left)
    }

    /// `- ! #` prefixes, which nest: `--x`, `!#xs`.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_prefix_op() {
            let span = self.advance()?.span;
            let operand = ensure_sufficient_stack(|| self.parse_prefix())?;
            return Ok(unary(span, op, operand));
        }
        self.parse_postfix()
    }
}

#[inline]
fn unary(span: Span, op: UnaryOp, operand: Expr) -> Expr {
    Expr::new(
        span,
        ExprKind::Unary {
            op,
            operand: Box::new(operand),
        },
    )
}

#[inline]
fn binary(span: Span, op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::new(
        span,
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
    )
}
