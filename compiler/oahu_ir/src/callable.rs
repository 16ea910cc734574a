//! Argument resolution shared by function and class invocation.
//!
//! Maps a call's argument list onto a callable's declared parameters,
//! producing one [`Resolved`] entry per parameter:
//!
//! 1. More arguments than parameters fails unless the last parameter is variadic.
//! 2. Named arguments go to the parameter with that name (unknown names fail).
//! 3. Remaining non-variadic slots take positional arguments in order, or
//!    their default once positionals run out.
//! 4. Leftover positionals collect into the variadic slot.
//! 5. Any slot still empty takes its default; a slot with no default fails.

use crate::ast::{Arg, ClassDecl, Expr, FunDecl, Param};

/// Anything invocable with an argument list.
pub trait Callable {
    fn params(&self) -> &[Param];

    /// Number of declared parameters.
    fn arity(&self) -> usize {
        self.params().len()
    }

    /// Resolve call arguments against the declared parameters.
    ///
    /// Returns `None` when the arguments cannot be mapped.
    fn resolve<'a>(&'a self, args: &'a [Arg]) -> Option<Vec<Resolved<'a>>> {
        resolve_args(self.params(), args)
    }
}

impl Callable for FunDecl {
    fn params(&self) -> &[Param] {
        &self.params
    }
}

impl Callable for ClassDecl {
    fn params(&self) -> &[Param] {
        &self.params
    }
}

/// The argument bound to one parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved<'a> {
    /// A single argument or default expression.
    Expr(&'a Expr),
    /// Trailing positionals collected for the variadic parameter.
    Vararg(Vec<VarargItem<'a>>),
}

/// One item of a [`Resolved::Vararg`].
#[derive(Clone, Debug, PartialEq)]
pub struct VarargItem<'a> {
    pub spread: bool,
    pub expr: &'a Expr,
}

/// Resolve `args` against `params`. See the module docs for the slot order.
pub fn resolve_args<'a>(params: &'a [Param], args: &'a [Arg]) -> Option<Vec<Resolved<'a>>> {
    let variadic_last = params.last().is_some_and(|p| p.variadic);

    if args.len() > params.len() && !variadic_last {
        return None;
    }

    let mut slots: Vec<Option<Resolved<'a>>> = params.iter().map(|_| None).collect();

    for arg in args {
        if let Some(name) = arg.name {
            let index = params.iter().position(|p| p.name == name)?;
            slots[index] = Some(Resolved::Expr(&arg.expr));
        }
    }

    let mut positional = args.iter().filter(|arg| arg.name.is_none());

    for (slot, param) in slots.iter_mut().zip(params) {
        if slot.is_some() || param.variadic {
            continue;
        }
        if let Some(arg) = positional.next() {
            *slot = Some(Resolved::Expr(&arg.expr));
        } else if let Some(default) = &param.default {
            *slot = Some(Resolved::Expr(default));
        }
    }

    let leftovers: Vec<VarargItem<'a>> = positional
        .map(|arg| VarargItem {
            spread: arg.spread,
            expr: &arg.expr,
        })
        .collect();

    if variadic_last {
        if let Some(last) = slots.last_mut() {
            match last {
                None => *last = Some(Resolved::Vararg(leftovers)),
                Some(_) if !leftovers.is_empty() => return None,
                Some(_) => {}
            }
        }
    } else if !leftovers.is_empty() {
        return None;
    }

    for (slot, param) in slots.iter_mut().zip(params) {
        if slot.is_none() {
            *slot = param.default.as_ref().map(Resolved::Expr);
        }
    }

    slots.into_iter().collect()
}

#[cfg(test)]
mod tests;
