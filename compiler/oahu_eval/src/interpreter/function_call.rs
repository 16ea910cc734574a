//! Calls: argument resolution, receivers, user and native functions.

use std::rc::Rc;

use oahu_ir::ast::{Arg, Expr, ExprKind};
use oahu_ir::{Callable, Resolved, Span};

use super::Interpreter;
use crate::errors::{
    not_callable, not_spreadable, undefined_member, unhandled_redirect, unresolved_arguments,
    EvalError, LinkError,
};
use crate::linker::LinkData;
use crate::value::{ClassValue, FunctionValue, Instance};
use crate::{ControlAction, EvalResult, Value};

impl Interpreter {
    /// `target(args)`.
    ///
    /// Calling through a member access uses the accessed instance as the
    /// receiver; any other function call uses the nearest instance the
    /// function closed over.
    pub(super) fn eval_invoke(&mut self, target: &Expr, args: &[Arg], span: Span) -> EvalResult {
        let (callee, receiver) = match &target.kind {
            ExprKind::Member {
                target: object,
                member,
            } => {
                let object = self.eval_expr(object)?;
                let instance = self.instance_of(&object, target.span)?;
                let callee = instance
                    .as_ref()
                    .and_then(|instance| instance.member(*member))
                    .ok_or_else(|| undefined_member(&object, self.name_str(*member), target.span))?;
                (callee, instance)
            }
            _ => {
                let callee = self.eval_expr(target)?;
                let receiver = match &callee {
                    Value::Function(function) => Self::implicit_receiver(function),
                    _ => None,
                };
                (callee, receiver)
            }
        };

        match callee {
            Value::Function(function) => {
                let values = self.resolve_call_args(&*function.decl, function.name, args, span)?;
                self.call_function(&function, receiver, values, span)
            }
            Value::Class(class) => self.invoke_class(&class, args, span).map(Value::Instance),
            other => Err(not_callable(&other, target.span).into()),
        }
    }

    /// Resolve `args` against `callable` and evaluate them in the caller's
    /// scope. A variadic parameter receives a fresh list.
    fn resolve_call_args(
        &mut self,
        callable: &dyn Callable,
        name: &str,
        args: &[Arg],
        span: Span,
    ) -> EvalResult<Vec<Value>> {
        let resolved = callable.resolve(args).ok_or_else(|| {
            let name = if name.is_empty() { "<fun>" } else { name };
            unresolved_arguments(name, span)
        })?;

        let mut values = Vec::with_capacity(resolved.len());
        for slot in resolved {
            match slot {
                Resolved::Expr(expr) => values.push(self.eval_expr(expr)?),
                Resolved::Vararg(items) => {
                    let mut collected = Vec::with_capacity(items.len());
                    for item in items {
                        let value = self.eval_expr(item.expr)?;
                        if item.spread {
                            let spread = value
                                .spread()
                                .ok_or_else(|| not_spreadable(&value, item.expr.span))?;
                            collected.extend(spread);
                        } else {
                            collected.push(value);
                        }
                    }
                    values.push(Value::list(collected));
                }
            }
        }
        Ok(values)
    }

    /// `Class(args)`: resolve the arguments and build an instance.
    pub(super) fn invoke_class(
        &mut self,
        class: &Rc<ClassValue>,
        args: &[Arg],
        span: Span,
    ) -> EvalResult<Instance> {
        let decl = Rc::clone(&class.decl);
        let values = self.resolve_call_args(&*decl, class.name, args, span)?;
        self.instantiate(class, values, None, span)
    }

    /// Call `function` with evaluated arguments.
    ///
    /// The body runs in a fresh scope under the function's closure. A native
    /// function receives the arguments and receiver directly.
    #[tracing::instrument(level = "debug", skip_all, fields(function = function.name))]
    pub fn call_function(
        &mut self,
        function: &Rc<FunctionValue>,
        receiver: Option<Instance>,
        args: Vec<Value>,
        span: Span,
    ) -> EvalResult {
        if let Some(native) = function.native {
            if args.len() != native.arity {
                return Err(EvalError::from(LinkError::ArityMismatch {
                    path: function.decl.path.clone(),
                    expected: native.arity,
                    received: args.len(),
                })
                .into());
            }
            let data = LinkData {
                instance: receiver,
                args,
            };
            return (native.call)(self, data).map_err(|err| err.or_span(span).into());
        }

        let decl = Rc::clone(&function.decl);
        let mut scoped = self.scoped_under(function.scope.clone());
        scoped.bind_params(&decl.params, args, span)?;

        match scoped.exec_stmt(&decl.body) {
            Ok(()) => Ok(Value::Unit),
            Err(ControlAction::Return(value)) => Ok(value),
            Err(signal @ (ControlAction::Break(_) | ControlAction::Continue(_))) => {
                Err(unhandled_redirect(signal, decl.body.span).into())
            }
            Err(signal) => Err(signal),
        }
    }
}
