//! Class instances.
//!
//! An instance is a scope: its members are the bindings made while its
//! class initializer ran. The scope also records the class, the base
//! instance (if the class has one) and an optional native payload.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use oahu_ir::Name;

use super::{ClassValue, Value};
use crate::environment::{AssignError, InstanceFrame, LocalScope, Reference, Scope, ScopeRef};

/// Native payload attached to an instance.
#[derive(Clone)]
pub enum InstanceLink {
    /// The primitive a wrapper instance stands for.
    Primitive(Value),
    /// State owned by a native class, such as the buffer of a `Builder`.
    Native(Rc<dyn Any>),
}

impl fmt::Debug for InstanceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceLink::Primitive(value) => write!(f, "Primitive({value:?})"),
            InstanceLink::Native(_) => write!(f, "Native(..)"),
        }
    }
}

/// A class instance. Clones share the same member scope.
#[derive(Clone)]
pub struct Instance {
    scope: ScopeRef,
    class: Rc<ClassValue>,
}

impl Instance {
    /// Create an instance scope under `parent`.
    pub(crate) fn new(
        class: Rc<ClassValue>,
        base: Option<Instance>,
        link: Option<InstanceLink>,
        parent: ScopeRef,
    ) -> Self {
        let frame = InstanceFrame {
            class: Rc::clone(&class),
            base,
            link,
        };
        Instance {
            scope: LocalScope::new(Scope::instance(frame, parent)),
            class,
        }
    }

    /// Rebuild the handle of an instance scope.
    pub(crate) fn from_scope(scope: &ScopeRef) -> Option<Self> {
        let class = Rc::clone(&scope.borrow().frame()?.class);
        Some(Instance {
            scope: scope.clone(),
            class,
        })
    }

    pub fn scope(&self) -> &ScopeRef {
        &self.scope
    }

    pub fn class(&self) -> &Rc<ClassValue> {
        &self.class
    }

    pub fn class_name(&self) -> &'static str {
        self.class.name
    }

    pub fn base(&self) -> Option<Instance> {
        self.scope.borrow().frame().and_then(|frame| frame.base.clone())
    }

    pub fn link(&self) -> Option<InstanceLink> {
        self.scope.borrow().frame().and_then(|frame| frame.link.clone())
    }

    pub(crate) fn set_link(&self, link: InstanceLink) {
        if let Some(frame) = self.scope.borrow_mut().frame_mut() {
            frame.link = Some(link);
        }
    }

    /// The wrapped primitive, for wrapper instances.
    pub fn primitive(&self) -> Option<Value> {
        match self.link()? {
            InstanceLink::Primitive(value) => Some(value),
            InstanceLink::Native(_) => None,
        }
    }

    /// Look `name` up among this instance's members, then its base chain.
    pub fn member(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.scope.borrow().get_own(name) {
            return Some(value);
        }
        self.base()?.member(name)
    }

    /// Assign an existing member here or along the base chain.
    pub(crate) fn assign_member(&self, name: Name, value: Value) -> Result<(), AssignError> {
        match self.scope.borrow_mut().assign_own(name, value.clone()) {
            Err(AssignError::Undefined) => {}
            done => return done,
        }
        match self.base() {
            Some(base) => base.assign_member(name, value),
            None => Err(AssignError::Undefined),
        }
    }

    /// Add a member, returning `false` if it already exists.
    pub fn define(&self, name: Name, reference: Reference) -> bool {
        self.scope.borrow_mut().declare(name, reference)
    }

    pub fn ptr_eq(&self, other: &Instance) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primitive() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "<{} instance>", self.class.name),
        }
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance({})", self.class.name)
    }
}
