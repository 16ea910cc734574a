//! Expression evaluation.

use std::rc::Rc;

use oahu_ir::ast::{Arg, BinaryOp, Comprehension, Expr, ExprKind, FunDecl, Try, UnaryOp, When};
use oahu_ir::{Name, Span};
use oahu_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::environment::{nearest_instance, AssignError, Reference};
use crate::errors::{
    invalid_condition, invalid_left_operand, invalid_right_operand, invalid_unary_operand,
    not_spreadable, reassigned_constant, undefined_member, undefined_name,
};
use crate::operators::{evaluate_binary, Operand};
use crate::unary_operators::evaluate_unary;
use crate::value::{FunctionValue, Instance};
use crate::{ControlAction, EvalResult, Value};

impl Interpreter {
    /// Evaluate an expression.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Empty => Ok(Value::Unit),
            ExprKind::Value(literal) => Ok(Value::from(literal)),
            ExprKind::Name(name) => self.eval_name(*name, expr.span),
            ExprKind::Unary { op, operand } => self.eval_unary(*op, operand, expr.span),
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right),
            ExprKind::Assign { target, value } => self.eval_assign(*target, value, expr.span),
            ExprKind::Member { target, member } => {
                let target = self.eval_expr(target)?;
                self.member_of(&target, *member, expr.span)
            }
            ExprKind::Index { target, args } => self.eval_index(target, args, expr.span),
            ExprKind::Invoke { target, args } => self.eval_invoke(target, args, expr.span),
            ExprKind::List(elements) => {
                let items = elements
                    .iter()
                    .map(|element| self.eval_expr(element))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::list(items))
            }
            ExprKind::Comprehension(comprehension) => self.eval_comprehension(comprehension),
            ExprKind::Lambda(decl) => Ok(self.make_function(decl)),
            ExprKind::Block(exprs) => self.with_scope(|scoped| {
                let mut last = Value::Unit;
                for expr in exprs {
                    last = scoped.eval_expr(expr)?;
                }
                Ok(last)
            }),
            ExprKind::If {
                condition,
                body,
                else_body,
            } => {
                if self.eval_condition(condition)? {
                    self.eval_expr(body)
                } else if let Some(else_body) = else_body {
                    self.eval_expr(else_body)
                } else {
                    Ok(Value::Unit)
                }
            }
            ExprKind::When(when) => self.eval_when(when, expr.span),
            ExprKind::Try(try_expr) => self.eval_try(try_expr),
            ExprKind::Statement(stmt) => {
                self.exec_stmt(stmt)?;
                Ok(Value::Unit)
            }
        }
    }

    fn eval_name(&mut self, name: Name, span: Span) -> EvalResult {
        self.env
            .lookup(name)
            .ok_or_else(|| undefined_name(self.name_str(name), span).into())
    }

    fn eval_unary(&mut self, op: UnaryOp, operand: &Expr, span: Span) -> EvalResult {
        let value = self.eval_expr(operand)?;
        evaluate_unary(&value, op).ok_or_else(|| {
            if op == UnaryOp::Spread {
                not_spreadable(&value, operand.span).into()
            } else {
                invalid_unary_operand(&value, op, span).into()
            }
        })
    }

    fn eval_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> EvalResult {
        let lhs = self.eval_expr(left)?;

        if matches!(op, BinaryOp::Or | BinaryOp::And) {
            match (op, &lhs) {
                (BinaryOp::Or, Value::Bool(true)) | (BinaryOp::And, Value::Bool(false)) => {
                    return Ok(lhs);
                }
                (_, Value::Bool(_)) => {}
                _ => return Err(invalid_left_operand(&lhs, op, left.span).into()),
            }
        }

        let rhs = self.eval_expr(right)?;
        evaluate_binary(&lhs, &rhs, op).map_err(|operand| match operand {
            Operand::Left => invalid_left_operand(&lhs, op, left.span).into(),
            Operand::Right => invalid_right_operand(&rhs, op, right.span).into(),
        })
    }

    fn eval_assign(&mut self, target: Name, value: &Expr, span: Span) -> EvalResult {
        let value = self.eval_expr(value)?;
        match self.env.assign(target, value.clone()) {
            Ok(()) => Ok(value),
            Err(AssignError::Undefined) => Err(undefined_name(self.name_str(target), span).into()),
            Err(AssignError::Constant) => Err(reassigned_constant(span).into()),
        }
    }

    /// `target.member`. Primitives are wrapped first.
    pub(crate) fn member_of(&mut self, target: &Value, member: Name, span: Span) -> EvalResult {
        let instance = self.instance_of(target, span)?;
        instance
            .and_then(|instance| instance.member(member))
            .ok_or_else(|| undefined_member(target, self.name_str(member), span).into())
    }

    /// The instance to look members up in: the value itself, or the
    /// wrapper of a primitive.
    pub(crate) fn instance_of(&mut self, value: &Value, span: Span) -> EvalResult<Option<Instance>> {
        match value {
            Value::Instance(instance) => Ok(Some(instance.clone())),
            Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::List(_) => {
                self.wrap_primitive(value, span)
            }
            _ => Ok(None),
        }
    }

    /// Evaluate arguments, expanding spread ones.
    pub(crate) fn eval_spread_args(&mut self, args: &[Arg]) -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.eval_expr(&arg.expr)?;
            if arg.spread {
                let items = value
                    .spread()
                    .ok_or_else(|| not_spreadable(&value, arg.span))?;
                values.extend(items);
            } else {
                values.push(value);
            }
        }
        Ok(values)
    }

    fn eval_comprehension(&mut self, comprehension: &Comprehension) -> EvalResult {
        let iterable = self.eval_expr(&comprehension.iterable)?;
        let items = iterable
            .spread()
            .ok_or_else(|| not_spreadable(&iterable, comprehension.iterable.span))?;

        let mut results = Vec::new();
        for item in items {
            let element = self.with_scope(|scoped| {
                scoped.bind_names(
                    &comprehension.names,
                    comprehension.destructured,
                    item,
                    true,
                    false,
                    comprehension.iterable.span,
                )?;
                if let Some(condition) = &comprehension.condition {
                    if !scoped.eval_condition(condition)? {
                        return Ok(None);
                    }
                }
                scoped.eval_expr(&comprehension.element).map(Some)
            })?;
            results.extend(element);
        }
        Ok(Value::list(results))
    }

    pub(crate) fn make_function(&self, decl: &Rc<FunDecl>) -> Value {
        Value::Function(Rc::new(FunctionValue {
            name: self.name_str(decl.name),
            decl: Rc::clone(decl),
            scope: self.env.current().clone(),
            native: None,
        }))
    }

    /// Evaluate a condition that must be boolean.
    pub(crate) fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        let value = self.eval_expr(condition)?;
        value
            .as_bool()
            .ok_or_else(|| invalid_condition(&value, condition.span).into())
    }

    fn eval_when(&mut self, when: &When, span: Span) -> EvalResult {
        let subject = match when.subject {
            Some(name) => Some(self.eval_name(name, span)?),
            None => None,
        };

        for branch in &when.branches {
            let matched = match &subject {
                Some(subject) => *subject == self.eval_expr(&branch.condition)?,
                None => self.eval_condition(&branch.condition)?,
            };
            if matched {
                return self.eval_expr(&branch.body);
            }
        }

        match &when.else_body {
            Some(body) => self.eval_expr(body),
            None => Ok(Value::Unit),
        }
    }

    /// `try`/`catch`/`finally`. Runtime errors are not caught and skip
    /// `finally`.
    fn eval_try(&mut self, try_expr: &Try) -> EvalResult {
        let result = match (self.eval_expr(&try_expr.body), &try_expr.catch_body) {
            (Err(ControlAction::Throw(payload)), Some(catch_body)) => self.with_scope(|scoped| {
                if let Some(name) = try_expr.error {
                    scoped.bind(name, Reference::constant(payload), catch_body.span)?;
                }
                scoped.eval_expr(catch_body)
            }),
            (result, _) => result,
        };

        if matches!(result, Err(ControlAction::Error(_))) {
            return result;
        }

        if let Some(finally_body) = &try_expr.finally_body {
            self.eval_expr(finally_body)?;
        }
        result
    }

    /// Receiver for a call through `target` that is not a member access:
    /// the nearest instance the callee closed over.
    pub(crate) fn implicit_receiver(function: &FunctionValue) -> Option<Instance> {
        nearest_instance(&function.scope)
    }
}
