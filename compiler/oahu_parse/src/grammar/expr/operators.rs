//! Operator Matching Helpers
//!
//! Map the current token to the operator it introduces at each precedence
//! level, without consuming it.

use oahu_ir::ast::{BinaryOp, UnaryOp};
use oahu_ir::TokenKind;

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_compound_assign_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::PlusEq => Some(BinaryOp::Add),
            TokenKind::MinusEq => Some(BinaryOp::Subtract),
            TokenKind::StarEq => Some(BinaryOp::Multiply),
            TokenKind::SlashEq => Some(BinaryOp::Divide),
            TokenKind::PercentEq => Some(BinaryOp::Modulus),
            _ => None,
        }
    }

    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Equal),
            TokenKind::NotEq => Some(BinaryOp::NotEqual),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Lt => Some(BinaryOp::Less),
            TokenKind::LtEq => Some(BinaryOp::LessEqual),
            TokenKind::Gt => Some(BinaryOp::Greater),
            TokenKind::GtEq => Some(BinaryOp::GreaterEqual),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Subtract),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Multiply),
            TokenKind::Slash => Some(BinaryOp::Divide),
            TokenKind::Percent => Some(BinaryOp::Modulus),
            _ => None,
        }
    }

    pub(crate) fn match_prefix_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Negative),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Pound => Some(UnaryOp::Size),
            _ => None,
        }
    }
}
