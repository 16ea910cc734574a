//! RAII scope guards for the interpreter's environment.
//!
//! [`ScopedInterpreter`] pops the scope it pushed when dropped, so every
//! early return through `?` (runtime errors and unwinding signals alike)
//! leaves the scope stack balanced.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::ScopeRef;

/// Guard that pops the environment scope on drop.
///
/// Derefs to the interpreter, so evaluation goes straight through it.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a child of the current scope until the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_child();
        ScopedInterpreter { interpreter: self }
    }

    /// Push a child of `parent` until the guard drops.
    pub fn scoped_under(&mut self, parent: ScopeRef) -> ScopedInterpreter<'_> {
        self.env.push_child_of(parent);
        ScopedInterpreter { interpreter: self }
    }

    /// Make `scope` itself the current scope until the guard drops.
    pub fn scoped_in(&mut self, scope: ScopeRef) -> ScopedInterpreter<'_> {
        self.env.push_scope(scope);
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` in a child of the current scope.
    pub fn with_scope<T>(&mut self, f: impl FnOnce(&mut Interpreter) -> T) -> T {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
