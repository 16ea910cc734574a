//! Function and class values.

use std::fmt;
use std::rc::Rc;

use oahu_ir::ast::{ClassDecl, FunDecl};

use crate::environment::ScopeRef;
use crate::linker::{NativeClass, NativeFunction};

/// A function produced by evaluating a declaration or a lambda.
///
/// Captures the scope it was defined in. A linked function also carries the
/// native it was bound to when the declaration ran.
pub struct FunctionValue {
    /// Declared name; empty for lambdas.
    pub name: &'static str,
    pub decl: Rc<FunDecl>,
    pub scope: ScopeRef,
    pub native: Option<NativeFunction>,
}

/// A class produced by evaluating a class, object or enum declaration.
pub struct ClassValue {
    pub name: &'static str,
    pub decl: Rc<ClassDecl>,
    pub scope: ScopeRef,
    pub native: Option<NativeClass>,
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "<fun>")
        } else {
            write!(f, "<fun {}>", self.name)
        }
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class {}>", self.name)
    }
}

impl fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
