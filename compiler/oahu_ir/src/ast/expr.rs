//! Expression nodes.

use std::rc::Rc;

use super::{BinaryOp, FunDecl, Names, Stmt, UnaryOp};
use crate::{Literal, Name, Span};

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

impl Expr {
    #[inline]
    pub fn new(span: Span, kind: ExprKind) -> Self {
        Expr { span, kind }
    }

    /// The empty expression (a missing `return`/`exit` value).
    #[inline]
    pub fn empty() -> Self {
        Expr::new(Span::NONE, ExprKind::Empty)
    }

    /// The bare name this expression consists of, if any.
    #[inline]
    pub fn as_name(&self) -> Option<Name> {
        match self.kind {
            ExprKind::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Evaluates to unit.
    Empty,
    Value(Literal),
    Name(Name),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `name = value`; compound assignments are desugared into this.
    Assign {
        target: Name,
        value: Box<Expr>,
    },
    /// `target.member`
    Member {
        target: Box<Expr>,
        member: Name,
    },
    /// `target[args]`
    Index {
        target: Box<Expr>,
        args: Vec<Arg>,
    },
    /// `target(args)`
    Invoke {
        target: Box<Expr>,
        args: Vec<Arg>,
    },
    List(Vec<Expr>),
    Comprehension(Box<Comprehension>),
    Lambda(Rc<FunDecl>),
    /// `{ expr* }` with its own scope; yields the last value.
    Block(Vec<Expr>),
    If {
        condition: Box<Expr>,
        body: Box<Expr>,
        else_body: Option<Box<Expr>>,
    },
    When(Box<When>),
    Try(Box<Try>),
    /// A statement in expression position (inside expression blocks).
    Statement(Box<Stmt>),
}

/// A call or index argument.
#[derive(Clone, Debug, PartialEq)]
pub struct Arg {
    pub span: Span,
    /// Prefixed with `*`.
    pub spread: bool,
    /// `name = expr`
    pub name: Option<Name>,
    pub expr: Expr,
}

impl Arg {
    pub fn positional(expr: Expr) -> Self {
        Arg {
            span: expr.span,
            spread: false,
            name: None,
            expr,
        }
    }
}

/// `[element for (names) : iterable if condition]`
#[derive(Clone, Debug, PartialEq)]
pub struct Comprehension {
    pub element: Expr,
    pub destructured: bool,
    pub names: Names,
    pub iterable: Expr,
    pub condition: Option<Expr>,
}

/// `when (subject) { condition -> body ... else -> body }`
#[derive(Clone, Debug, PartialEq)]
pub struct When {
    pub subject: Option<Name>,
    pub branches: Vec<WhenBranch>,
    pub else_body: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhenBranch {
    pub span: Span,
    pub condition: Expr,
    pub body: Expr,
}

/// `try body catch (error) body finally body`
#[derive(Clone, Debug, PartialEq)]
pub struct Try {
    pub body: Expr,
    pub error: Option<Name>,
    pub catch_body: Option<Expr>,
    pub finally_body: Option<Expr>,
}
