use super::*;
use crate::ast::ExprKind;
use crate::{Literal, Name, Span, StringInterner};
use pretty_assertions::assert_eq;

fn num(n: f64) -> Expr {
    Expr::new(Span::NONE, ExprKind::Value(Literal::Number(n)))
}

fn param(interner: &StringInterner, text: &str) -> Param {
    // `*name`, `name=default`, or `name`
    let (variadic, rest) = match text.strip_prefix('*') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (name, default) = match rest.split_once('=') {
        Some((name, value)) => (name, Some(num(value.parse().unwrap_or_default()))),
        None => (rest, None),
    };
    Param {
        span: Span::NONE,
        constant: None,
        mutable: false,
        variadic,
        name: interner.intern(name),
        default,
    }
}

fn arg(interner: &StringInterner, text: &str) -> Arg {
    // `*value`, `name=value`, or `value`
    let (spread, rest) = match text.strip_prefix('*') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (name, value) = match rest.split_once('=') {
        Some((name, value)) => (Some(interner.intern(name)), value),
        None => (None, rest),
    };
    Arg {
        span: Span::NONE,
        spread,
        name,
        expr: num(value.parse().unwrap_or_default()),
    }
}

fn render(resolved: &Resolved<'_>) -> String {
    fn value(expr: &Expr) -> String {
        match &expr.kind {
            ExprKind::Value(Literal::Number(n)) => n.to_string(),
            other => format!("{other:?}"),
        }
    }
    match resolved {
        Resolved::Expr(expr) => value(expr),
        Resolved::Vararg(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| {
                    let prefix = if item.spread { "*" } else { "" };
                    format!("{prefix}{}", value(item.expr))
                })
                .collect();
            format!("[{}]", items.join(", "))
        }
    }
}

fn check(params: &[&str], args: &[&str]) -> Option<Vec<String>> {
    let interner = StringInterner::new();
    let params: Vec<Param> = params.iter().map(|p| param(&interner, p)).collect();
    let args: Vec<Arg> = args.iter().map(|a| arg(&interner, a)).collect();
    resolve_args(&params, &args).map(|slots| slots.iter().map(render).collect())
}

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(ToString::to_string).collect())
}

#[test]
fn test_resolution_table() {
    let cases: &[(&str, &[&str], &[&str], Option<Vec<String>>)] = &[
        ("all positional", &["a", "b"], &["1", "2"], strings(&["1", "2"])),
        ("all named", &["a", "b"], &["b=2", "a=1"], strings(&["1", "2"])),
        ("mixed", &["a", "b", "c"], &["b=5", "1", "3"], strings(&["1", "5", "3"])),
        ("default fills gap", &["a", "b=2"], &["1"], strings(&["1", "2"])),
        (
            "named then variadic overflow",
            &["a", "b=2", "*c"],
            &["a=5", "10", "20", "30"],
            strings(&["5", "10", "[20, 30]"]),
        ),
        ("empty vararg", &["a", "*rest"], &["1"], strings(&["1", "[]"])),
        ("spread marks kept", &["*xs"], &["*1", "2"], strings(&["[*1, 2]"])),
        ("missing required", &["a", "b"], &["1"], None),
        ("too many without variadic", &["a"], &["1", "2"], None),
        ("unknown name", &["a"], &["z=1"], None),
        ("no params no args", &[], &[], strings(&[])),
    ];

    for (label, params, args, expected) in cases {
        assert_eq!(&check(params, args), expected, "case: {label}");
    }
}

#[test]
fn test_callable_arity() {
    let interner = StringInterner::new();
    let decl = FunDecl {
        span: Span::NONE,
        path: ".f".to_string(),
        linked: false,
        name: interner.intern("f"),
        params: vec![param(&interner, "a"), param(&interner, "*b")],
        body: crate::ast::Stmt::empty(),
    };
    assert_eq!(decl.arity(), 2);
    let args = [arg(&interner, "1")];
    assert!(decl.resolve(&args).is_some());
    assert_eq!(decl.name, interner.intern("f"));
    assert_ne!(decl.name, Name::EMPTY);
}
