//! Environment for variable scoping.
//!
//! Scopes form a tree through shared parent links. The [`Environment`]
//! keeps a stack of the scopes currently being evaluated in; the top of the
//! stack is where declarations land, and lookup walks outward from it
//! through parent links (not through the stack).
//!
//! Instance scopes carry an [`InstanceFrame`]. Lookup in an instance scope
//! tries its own members, then its base instance's members, then its parent.

mod primitive_cache;

pub use primitive_cache::PrimitiveCache;

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use oahu_ir::Name;
use rustc_hash::FxHashMap;

use crate::value::{ClassValue, Instance, InstanceLink, Value};

/// Single-threaded shared mutable cell for scope contents.
#[derive(Debug)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub type ScopeRef = LocalScope<Scope>;

/// A named reference cell.
///
/// Constancy is fixed when the reference is created.
#[derive(Clone, Debug)]
pub struct Reference {
    pub constant: bool,
    pub mutable: bool,
    pub value: Value,
}

impl Reference {
    pub fn new(constant: bool, mutable: bool, value: Value) -> Self {
        Reference {
            constant,
            mutable,
            value,
        }
    }

    /// An immutable constant, as used for declarations the runtime makes.
    pub fn constant(value: Value) -> Self {
        Reference::new(true, false, value)
    }
}

/// Why an assignment failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssignError {
    Constant,
    Undefined,
}

/// Instance data attached to an instance scope.
pub(crate) struct InstanceFrame {
    pub(crate) class: Rc<ClassValue>,
    pub(crate) base: Option<Instance>,
    pub(crate) link: Option<InstanceLink>,
}

/// A single scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Reference>,
    parent: Option<ScopeRef>,
    frame: Option<InstanceFrame>,
}

impl Scope {
    /// A root scope.
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: ScopeRef) -> Self {
        Scope {
            parent: Some(parent),
            ..Scope::default()
        }
    }

    pub(crate) fn instance(frame: InstanceFrame, parent: ScopeRef) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
            frame: Some(frame),
        }
    }

    pub fn parent(&self) -> Option<&ScopeRef> {
        self.parent.as_ref()
    }

    pub(crate) fn frame(&self) -> Option<&InstanceFrame> {
        self.frame.as_ref()
    }

    pub(crate) fn frame_mut(&mut self) -> Option<&mut InstanceFrame> {
        self.frame.as_mut()
    }

    /// Insert into this scope only. Returns `false` if `name` already exists here.
    pub fn declare(&mut self, name: Name, reference: Reference) -> bool {
        if self.bindings.contains_key(&name) {
            return false;
        }
        self.bindings.insert(name, reference);
        true
    }

    /// Value bound in this scope itself.
    pub fn get_own(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).map(|r| r.value.clone())
    }

    pub fn contains_own(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Look up a name, walking outward. The first match wins.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.get_own(name) {
            return Some(value);
        }
        if let Some(value) = self.base().and_then(|base| base.member(name)) {
            return Some(value);
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Assign to an existing name, walking outward.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        match self.assign_own(name, value.clone()) {
            Err(AssignError::Undefined) => {}
            done => return done,
        }
        if let Some(base) = self.base() {
            match base.assign_member(name, value.clone()) {
                Err(AssignError::Undefined) => {}
                done => return done,
            }
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(AssignError::Undefined),
        }
    }

    pub(crate) fn assign_own(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        match self.bindings.get_mut(&name) {
            Some(reference) if reference.constant => Err(AssignError::Constant),
            Some(reference) => {
                reference.value = value;
                Ok(())
            }
            None => Err(AssignError::Undefined),
        }
    }

    fn base(&self) -> Option<Instance> {
        self.frame.as_ref().and_then(|frame| frame.base.clone())
    }
}

/// The nearest instance scope at or above `scope`.
pub fn nearest_instance(scope: &ScopeRef) -> Option<Instance> {
    let mut current = scope.clone();
    loop {
        if let Some(instance) = Instance::from_scope(&current) {
            return Some(instance);
        }
        let parent = current.borrow().parent()?.clone();
        current = parent;
    }
}

/// Stack of active scopes over a persistent global scope.
pub struct Environment {
    global: ScopeRef,
    stack: Vec<ScopeRef>,
}

impl Environment {
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            stack: vec![global.clone()],
            global,
        }
    }

    pub fn global(&self) -> &ScopeRef {
        &self.global
    }

    /// The scope declarations currently land in.
    pub fn current(&self) -> &ScopeRef {
        self.stack.last().unwrap_or(&self.global)
    }

    /// Number of active scopes, the global one included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Make an existing scope the top.
    pub fn push_scope(&mut self, scope: ScopeRef) {
        self.stack.push(scope);
    }

    /// Push a child of `parent`.
    pub fn push_child_of(&mut self, parent: ScopeRef) {
        self.stack.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Push a child of the current top.
    pub fn push_child(&mut self) {
        let parent = self.current().clone();
        self.push_child_of(parent);
    }

    /// Pop the top scope. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Declare in the top scope. Returns `false` if the name already exists there.
    pub fn declare(&mut self, name: Name, reference: Reference) -> bool {
        self.current().borrow_mut().declare(name, reference)
    }

    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current().borrow().lookup(name)
    }

    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        self.current().borrow_mut().assign(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
