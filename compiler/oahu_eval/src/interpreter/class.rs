//! Classes, objects, enums and instantiation.
//!
//! Instantiating a class builds three layers of scope: a parameter scope
//! under the class's defining scope, the instance scope under that, and the
//! base instance (if any) reachable from the instance frame. Initializer
//! statements run with the instance scope on top, so their declarations
//! become members.

use std::rc::Rc;

use oahu_ir::ast::{ClassDecl, EnumDecl, Param, Stmt};
use oahu_ir::{Name, Span};
use tracing::debug;

use super::Interpreter;
use crate::environment::Reference;
use crate::errors::{invalid_base, redefined_name, unhandled_redirect, EvalError};
use crate::value::{ClassValue, Instance, InstanceLink};
use crate::{ControlAction, EvalResult, Value};

impl Interpreter {
    /// A class value closing over the current scope.
    fn make_class(&self, decl: &Rc<ClassDecl>) -> Result<Rc<ClassValue>, EvalError> {
        let native = if decl.linked {
            Some(self.linker.class(&decl.path)?)
        } else {
            None
        };
        Ok(Rc::new(ClassValue {
            name: self.name_str(decl.name),
            decl: Rc::clone(decl),
            scope: self.env.current().clone(),
            native,
        }))
    }

    pub(super) fn exec_class(&mut self, decl: &Rc<ClassDecl>, stmt: &Stmt) -> EvalResult<()> {
        let class = self.make_class(decl)?;
        self.bind(decl.name, Reference::constant(Value::Class(class)), stmt.span)
    }

    /// `object Name { ... }` binds the one instance of an anonymous class.
    pub(super) fn exec_object(&mut self, decl: &Rc<ClassDecl>, stmt: &Stmt) -> EvalResult<()> {
        let class = self.make_class(decl)?;
        let instance = self.invoke_class(&class, &[], stmt.span)?;
        let value = Value::Instance(instance);
        self.bind(decl.name, Reference::constant(value), stmt.span)
    }

    /// `enum Name { A, B }` binds a namespace instance holding one instance
    /// per entry, each with `name` and `ordinal` members.
    pub(super) fn exec_enum(&mut self, decl: &Rc<EnumDecl>, stmt: &Stmt) -> EvalResult<()> {
        let class = self.make_class(&decl.class)?;
        let namespace = Instance::new(Rc::clone(&class), None, None, self.env.current().clone());

        for entry in &decl.entries {
            let instance = self.invoke_class(&class, &entry.args, entry.span)?;
            let name = Value::string(self.name_str(entry.name));
            instance.define(Name::NAME, Reference::constant(name));
            instance.define(Name::ORDINAL, Reference::constant(Value::from_size(entry.ordinal)));

            if !namespace.define(entry.name, Reference::constant(Value::Instance(instance))) {
                return Err(redefined_name(self.name_str(entry.name), entry.span).into());
            }
        }

        let value = Value::Instance(namespace);
        self.bind(decl.class.name, Reference::constant(value), stmt.span)
    }

    /// Create an instance of `class` from already-evaluated arguments.
    ///
    /// `primitive` is the value a wrapper instance stands for.
    pub(crate) fn instantiate(
        &mut self,
        class: &Rc<ClassValue>,
        args: Vec<Value>,
        primitive: Option<Value>,
        span: Span,
    ) -> EvalResult<Instance> {
        debug!(class = class.name, "instantiate");
        let decl = Rc::clone(&class.decl);

        let mut params = self.scoped_under(class.scope.clone());
        params.bind_params(&decl.params, args, span)?;
        let param_scope = params.env.current().clone();

        let base = match &decl.base {
            Some(expr) => match params.eval_expr(expr)? {
                Value::Instance(base) => Some(base),
                Value::Null => None,
                other => return Err(invalid_base(&other, expr.span).into()),
            },
            None => None,
        };
        let link = primitive
            .map(InstanceLink::Primitive)
            .or_else(|| base.as_ref().and_then(Instance::link));
        let instance = Instance::new(Rc::clone(class), base.clone(), link, param_scope.clone());

        {
            let mut inner = params.scoped_in(instance.scope().clone());

            for param in &decl.params {
                if let Some(constant) = param.constant {
                    if let Some(value) = param_scope.borrow().get_own(param.name) {
                        instance.define(param.name, Reference::new(constant, param.mutable, value));
                    }
                }
            }

            if let Some(native) = class.native {
                let state =
                    (native.construct)(&mut inner, &instance).map_err(|err| err.or_span(span))?;
                instance.set_link(InstanceLink::Native(state));
            }

            for stmt in &decl.init {
                match inner.exec_stmt(stmt) {
                    Ok(()) => {}
                    Err(
                        signal @ (ControlAction::Break(_)
                        | ControlAction::Continue(_)
                        | ControlAction::Return(_)),
                    ) => return Err(unhandled_redirect(signal, stmt.span).into()),
                    Err(signal) => return Err(signal),
                }
            }
        }

        instance.define(Name::THIS, Reference::constant(Value::Instance(instance.clone())));
        if let Some(base) = base {
            instance.define(Name::BASE, Reference::constant(Value::Instance(base)));
        }
        Ok(instance)
    }

    /// Bind evaluated arguments to parameters in the current scope.
    pub(super) fn bind_params(
        &mut self,
        params: &[Param],
        args: Vec<Value>,
        span: Span,
    ) -> EvalResult<()> {
        for (param, value) in params.iter().zip(args) {
            self.bind(param.name, Reference::new(true, param.mutable, value), span)?;
        }
        Ok(())
    }
}
