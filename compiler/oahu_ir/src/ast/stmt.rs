//! Statement nodes and declarations.

use std::rc::Rc;

use super::{Arg, Expr, Names};
use crate::{Name, Span};

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub span: Span,
    pub kind: StmtKind,
}

impl Stmt {
    #[inline]
    pub fn new(span: Span, kind: StmtKind) -> Self {
        Stmt { span, kind }
    }

    /// The empty statement (body of a linked function).
    #[inline]
    pub fn empty() -> Self {
        Stmt::new(Span::NONE, StmtKind::Empty)
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Empty,
    Expression(Expr),
    Declaration(Box<Declaration>),
    Block(Vec<Stmt>),
    While {
        label: Option<Name>,
        condition: Expr,
        body: Box<Stmt>,
    },
    Do {
        label: Option<Name>,
        body: Box<Stmt>,
        condition: Expr,
    },
    /// `loop (count) body`; unbounded without a count.
    Loop {
        label: Option<Name>,
        count: Option<Expr>,
        body: Box<Stmt>,
    },
    For(Box<ForLoop>),
    Break(Option<Name>),
    Continue(Option<Name>),
    Throw(Expr),
    Return(Expr),
    Exit(Expr),
    Fun(Rc<FunDecl>),
    Class(Rc<ClassDecl>),
    /// `object Name { ... }`: a class instantiated once at declaration.
    Object(Rc<ClassDecl>),
    Enum(Rc<EnumDecl>),
}

/// `let|var [mut] name = value` or `let|var [mut] (a, b) = value`
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub constant: bool,
    pub mutable: bool,
    pub destructured: bool,
    pub names: Names,
    pub value: Expr,
}

/// `for @label ((a, b) : iterable) body`
#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub label: Option<Name>,
    pub destructured: bool,
    pub names: Names,
    pub iterable: Expr,
    pub body: Stmt,
}

/// A function or class parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub span: Span,
    /// Class parameters only: `Some(true)` for `let`, `Some(false)` for `var`.
    /// Parameters with a marker become instance members.
    pub constant: Option<bool>,
    pub mutable: bool,
    pub variadic: bool,
    pub name: Name,
    pub default: Option<Expr>,
}

/// Function declaration, shared by `fun` statements and lambdas.
#[derive(Clone, Debug, PartialEq)]
pub struct FunDecl {
    pub span: Span,
    /// Dotted link path: `<class>.<name>`, or `.<name>` at top level.
    pub path: String,
    /// Backed by a native implementation.
    pub linked: bool,
    pub name: Name,
    pub params: Vec<Param>,
    pub body: Stmt,
}

/// Class declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDecl {
    pub span: Span,
    /// Link path of a native class constructor.
    pub path: String,
    pub linked: bool,
    pub name: Name,
    pub params: Vec<Param>,
    /// `: Base(args)`
    pub base: Option<Expr>,
    pub init: Vec<Stmt>,
}

/// `enum Name(params) { A(args), B }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDecl {
    pub span: Span,
    pub class: Rc<ClassDecl>,
    pub entries: Vec<EnumEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumEntry {
    pub span: Span,
    pub name: Name,
    pub args: Vec<Arg>,
    pub ordinal: usize,
}
