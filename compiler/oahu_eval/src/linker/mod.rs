//! Native links.
//!
//! A [`Link`] is a named provider of native code: a prelude source that
//! declares `@`-marked functions and classes, plus the natives those
//! declarations bind to. Functions are keyed by dotted path (`.print`,
//! `String.upper`); classes by name (`Builder`).
//!
//! The [`Linker`] knows every available link and the registry of natives
//! from the links imported so far. Linked declarations resolve against the
//! registry when they are evaluated.

mod core_link;

pub use core_link::CoreLink;

use std::any::Any;
use std::rc::Rc;

use oahu_ir::Source;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::errors::{invalid_link_argument, EvalError, LinkError};
use crate::value::{Instance, InstanceLink, Table, Value};
use crate::Interpreter;

/// Native function body.
pub type NativeFn = fn(&mut Interpreter, LinkData) -> Result<Value, EvalError>;

/// Native class constructor: builds the opaque state for a new instance.
pub type NativeConstructor = fn(&mut Interpreter, &Instance) -> Result<Rc<dyn Any>, EvalError>;

/// A registered native function.
#[derive(Copy, Clone)]
pub struct NativeFunction {
    pub arity: usize,
    pub call: NativeFn,
}

/// A registered native class.
#[derive(Copy, Clone)]
pub struct NativeClass {
    pub construct: NativeConstructor,
}

/// What a native function receives: the receiver instance, if any, and the
/// evaluated arguments in parameter order.
pub struct LinkData {
    pub instance: Option<Instance>,
    pub args: Vec<Value>,
}

impl LinkData {
    /// Argument `index`, or unit if absent.
    pub fn arg(&self, index: usize) -> Value {
        self.args.get(index).cloned().unwrap_or_default()
    }

    pub fn number(&self, index: usize, param: &str) -> Result<f64, EvalError> {
        let arg = self.arg(index);
        arg.as_number().ok_or_else(|| invalid_link_argument(&arg, param))
    }

    pub fn boolean(&self, index: usize, param: &str) -> Result<bool, EvalError> {
        let arg = self.arg(index);
        arg.as_bool().ok_or_else(|| invalid_link_argument(&arg, param))
    }

    pub fn string(&self, index: usize, param: &str) -> Result<Rc<str>, EvalError> {
        match self.arg(index) {
            Value::String(s) => Ok(s),
            other => Err(invalid_link_argument(&other, param)),
        }
    }

    pub fn list(&self, index: usize, param: &str) -> Result<Table, EvalError> {
        match self.arg(index) {
            Value::List(table) => Ok(table),
            other => Err(invalid_link_argument(&other, param)),
        }
    }

    pub fn receiver(&self, path: &str) -> Result<&Instance, EvalError> {
        self.instance
            .as_ref()
            .ok_or_else(|| LinkError::MissingReceiver(path.to_string()).into())
    }

    /// The primitive wrapped by the receiver.
    pub fn receiver_primitive(&self, path: &str) -> Result<Value, EvalError> {
        self.receiver(path)?
            .primitive()
            .ok_or_else(|| LinkError::MissingReceiver(path.to_string()).into())
    }

    /// The native state of the receiver, downcast to `T`.
    pub fn receiver_state<T: 'static>(&self, path: &str) -> Result<Rc<T>, EvalError> {
        match self.receiver(path)?.link() {
            Some(InstanceLink::Native(state)) => state
                .downcast::<T>()
                .map_err(|_| LinkError::MissingReceiver(path.to_string()).into()),
            _ => Err(LinkError::MissingReceiver(path.to_string()).into()),
        }
    }
}

/// Where a link's natives are registered. The first registration of a
/// path wins.
pub struct Registry<'a> {
    functions: &'a mut FxHashMap<String, NativeFunction>,
    classes: &'a mut FxHashMap<String, NativeClass>,
}

impl Registry<'_> {
    pub fn function(&mut self, path: &str, arity: usize, call: NativeFn) {
        self.functions
            .entry(path.to_string())
            .or_insert(NativeFunction { arity, call });
    }

    pub fn class(&mut self, name: &str, construct: NativeConstructor) {
        self.classes
            .entry(name.to_string())
            .or_insert(NativeClass { construct });
    }
}

/// A named provider of natives.
pub trait Link {
    fn name(&self) -> &'static str;

    /// Declarations of this link's natives, evaluated on import.
    fn prelude(&self) -> Source;

    fn register(&self, registry: &mut Registry<'_>);

    /// Release anything the link holds. Called once when the linker closes.
    fn close(&self) {}
}

/// Registry of available links and imported natives.
pub struct Linker {
    available: Vec<Box<dyn Link>>,
    used: Vec<&'static str>,
    functions: FxHashMap<String, NativeFunction>,
    classes: FxHashMap<String, NativeClass>,
}

impl Linker {
    /// A linker offering the standard links.
    pub fn new() -> Self {
        let mut linker = Linker {
            available: Vec::new(),
            used: Vec::new(),
            functions: FxHashMap::default(),
            classes: FxHashMap::default(),
        };
        linker.add_link(Box::new(CoreLink));
        linker
    }

    /// Make `link` available for import. Returns `false` if a link with the
    /// same name is already available.
    pub fn add_link(&mut self, link: Box<dyn Link>) -> bool {
        if self.available.iter().any(|l| l.name() == link.name()) {
            return false;
        }
        self.available.push(link);
        true
    }

    pub fn is_imported(&self, name: &str) -> bool {
        self.used.contains(&name)
    }

    /// Register the natives of link `name` and return its prelude.
    ///
    /// Returns `Ok(None)` if the link was already imported.
    pub fn import_link(&mut self, name: &str) -> Result<Option<Source>, LinkError> {
        if self.is_imported(name) {
            return Ok(None);
        }

        let link = self
            .available
            .iter()
            .find(|link| link.name() == name)
            .ok_or_else(|| LinkError::MissingLink(name.to_string()))?;

        link.register(&mut Registry {
            functions: &mut self.functions,
            classes: &mut self.classes,
        });
        self.used.push(link.name());

        debug!(
            link = name,
            functions = self.functions.len(),
            classes = self.classes.len(),
            "imported link"
        );
        Ok(Some(link.prelude()))
    }

    pub fn function(&self, path: &str) -> Result<NativeFunction, LinkError> {
        self.functions
            .get(path)
            .copied()
            .ok_or_else(|| LinkError::MissingFunction(path.to_string()))
    }

    pub fn class(&self, name: &str) -> Result<NativeClass, LinkError> {
        self.classes
            .get(name)
            .copied()
            .ok_or_else(|| LinkError::MissingClass(name.to_string()))
    }

    /// Close every imported link and clear the registry.
    pub fn close(&mut self) {
        for name in self.used.drain(..) {
            if let Some(link) = self.available.iter().find(|link| link.name() == name) {
                link.close();
            }
        }
        self.functions.clear();
        self.classes.clear();
    }
}

impl Default for Linker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
