//! Abstract syntax tree.
//!
//! Tree-shaped: every node owns its children, and declarations that outlive
//! a single evaluation (functions, classes, enums) sit behind `Rc` so runtime
//! values can share them without copying the body.

mod expr;
mod ops;
mod stmt;

use smallvec::SmallVec;

pub use expr::{Arg, Comprehension, Expr, ExprKind, Try, When, WhenBranch};
pub use ops::{BinaryOp, UnaryOp};
pub use stmt::{ClassDecl, Declaration, EnumDecl, EnumEntry, ForLoop, FunDecl, Param, Stmt, StmtKind};

/// Names bound by a declaration, loop, or comprehension (usually one or two).
pub type Names = SmallVec<[crate::Name; 2]>;

/// A parsed program: top-level statements in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}
