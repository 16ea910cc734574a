//! Statement execution and loops.

use std::rc::Rc;

use oahu_ir::ast::{Declaration, Expr, ForLoop, FunDecl, Stmt, StmtKind};
use oahu_ir::Name;
use oahu_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Interpreter;
use crate::environment::Reference;
use crate::errors::{invalid_loop_count, not_spreadable, EvalError};
use crate::value::FunctionValue;
use crate::{ControlAction, EvalResult, Value};

/// What a loop does after one pass of its body.
enum LoopStep {
    Next,
    Stop,
}

impl Interpreter {
    /// Execute a statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<()> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match &stmt.kind {
            StmtKind::Empty => Ok(()),
            StmtKind::Expression(expr) => self.eval_expr(expr).map(drop),
            StmtKind::Declaration(decl) => self.exec_declaration(decl, stmt),
            StmtKind::Block(stmts) => self.with_scope(|scoped| {
                stmts.iter().try_for_each(|stmt| scoped.exec_stmt(stmt))
            }),
            StmtKind::While {
                label,
                condition,
                body,
            } => self.exec_while(*label, condition, body),
            StmtKind::Do {
                label,
                body,
                condition,
            } => self.exec_do(*label, body, condition),
            StmtKind::Loop { label, count, body } => self.exec_loop(*label, count.as_ref(), body),
            StmtKind::For(for_loop) => self.exec_for(for_loop),
            StmtKind::Break(label) => Err(ControlAction::Break(*label)),
            StmtKind::Continue(label) => Err(ControlAction::Continue(*label)),
            StmtKind::Throw(expr) => Err(ControlAction::Throw(self.eval_expr(expr)?)),
            StmtKind::Return(expr) => Err(ControlAction::Return(self.eval_expr(expr)?)),
            StmtKind::Exit(expr) => Err(ControlAction::Exit(self.eval_expr(expr)?)),
            StmtKind::Fun(decl) => self.exec_fun(decl, stmt),
            StmtKind::Class(decl) => self.exec_class(decl, stmt),
            StmtKind::Object(decl) => self.exec_object(decl, stmt),
            StmtKind::Enum(decl) => self.exec_enum(decl, stmt),
        }
    }

    fn exec_declaration(&mut self, decl: &Declaration, stmt: &Stmt) -> EvalResult<()> {
        let value = self.eval_expr(&decl.value)?;
        self.bind_names(
            &decl.names,
            decl.destructured,
            value,
            decl.constant,
            decl.mutable,
            stmt.span,
        )
    }

    /// Bind a function value. A linked function resolves its native now.
    fn exec_fun(&mut self, decl: &Rc<FunDecl>, stmt: &Stmt) -> EvalResult<()> {
        let native = if decl.linked {
            Some(self.linker.function(&decl.path).map_err(EvalError::from)?)
        } else {
            None
        };
        trace!(name = self.name_str(decl.name), linked = decl.linked, "declare function");

        let function = Value::Function(Rc::new(FunctionValue {
            name: self.name_str(decl.name),
            decl: Rc::clone(decl),
            scope: self.env.current().clone(),
            native,
        }));
        self.bind(decl.name, Reference::constant(function), stmt.span)
    }

    /// Map a body's outcome onto the loop labelled `own`.
    fn loop_step(outcome: EvalResult<()>, own: Option<Name>) -> EvalResult<LoopStep> {
        match outcome {
            Ok(()) => Ok(LoopStep::Next),
            Err(ControlAction::Break(label)) if ControlAction::targets(label, own) => {
                Ok(LoopStep::Stop)
            }
            Err(ControlAction::Continue(label)) if ControlAction::targets(label, own) => {
                Ok(LoopStep::Next)
            }
            Err(signal) => Err(signal),
        }
    }

    /// One pass of a loop body, in a fresh scope.
    fn exec_pass(&mut self, body: &Stmt) -> EvalResult<()> {
        self.with_scope(|scoped| scoped.exec_stmt(body))
    }

    fn exec_while(&mut self, label: Option<Name>, condition: &Expr, body: &Stmt) -> EvalResult<()> {
        while self.eval_condition(condition)? {
            let outcome = self.exec_pass(body);
            if let LoopStep::Stop = Self::loop_step(outcome, label)? {
                break;
            }
        }
        Ok(())
    }

    fn exec_do(&mut self, label: Option<Name>, body: &Stmt, condition: &Expr) -> EvalResult<()> {
        loop {
            let outcome = self.exec_pass(body);
            if let LoopStep::Stop = Self::loop_step(outcome, label)? {
                break;
            }
            if !self.eval_condition(condition)? {
                break;
            }
        }
        Ok(())
    }

    /// `loop (n)` runs `floor(n)` times; `loop` runs until a break.
    fn exec_loop(&mut self, label: Option<Name>, count: Option<&Expr>, body: &Stmt) -> EvalResult<()> {
        let limit = match count {
            Some(expr) => {
                let value = self.eval_expr(expr)?;
                let n = value
                    .as_number()
                    .ok_or_else(|| invalid_loop_count(&value, expr.span))?;
                Some(n.floor())
            }
            None => None,
        };

        let mut passes = 0.0;
        while limit.map_or(true, |limit| passes < limit) {
            passes += 1.0;
            let outcome = self.exec_pass(body);
            if let LoopStep::Stop = Self::loop_step(outcome, label)? {
                break;
            }
        }
        Ok(())
    }

    /// One fresh scope per element, with the names bound as constants.
    fn exec_for(&mut self, for_loop: &ForLoop) -> EvalResult<()> {
        let iterable = self.eval_expr(&for_loop.iterable)?;
        let items = iterable
            .spread()
            .ok_or_else(|| not_spreadable(&iterable, for_loop.iterable.span))?;

        for item in items {
            let outcome = self.with_scope(|scoped| {
                scoped.bind_names(
                    &for_loop.names,
                    for_loop.destructured,
                    item,
                    true,
                    false,
                    for_loop.iterable.span,
                )?;
                scoped.exec_stmt(&for_loop.body)
            });
            if let LoopStep::Stop = Self::loop_step(outcome, for_loop.label)? {
                break;
            }
        }
        Ok(())
    }
}
