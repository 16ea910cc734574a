use super::*;
use pretty_assertions::assert_eq;

struct MathLink;

fn double(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::Number(data.number(0, "Math.double@x")? * 2.0))
}

impl Link for MathLink {
    fn name(&self) -> &'static str {
        "math"
    }

    fn prelude(&self) -> Source {
        Source::new("math", "fun @double(x)")
    }

    fn register(&self, registry: &mut Registry<'_>) {
        registry.function(".double", 1, double);
        // Already registered by core; the first registration is kept.
        registry.function(".print", 3, double);
    }
}

#[test]
fn test_core_is_available_not_imported() {
    let linker = Linker::new();
    assert!(!linker.is_imported("core"));
    assert_eq!(linker.function(".print").err(), Some(LinkError::MissingFunction(".print".into())));
}

#[test]
fn test_import_returns_prelude_once() {
    let mut linker = Linker::new();
    let prelude = linker.import_link("core");
    assert!(matches!(prelude, Ok(Some(_))));
    assert!(linker.is_imported("core"));
    assert!(matches!(linker.import_link("core"), Ok(None)));
    assert!(linker.function(".println").is_ok());
    assert!(linker.function("String.upper").is_ok());
    assert!(linker.class("Builder").is_ok());
}

#[test]
fn test_missing_link() {
    let mut linker = Linker::new();
    assert_eq!(
        linker.import_link("nope").err(),
        Some(LinkError::MissingLink("nope".into()))
    );
}

#[test]
fn test_first_registration_wins() {
    let mut linker = Linker::new();
    assert!(linker.add_link(Box::new(MathLink)));
    assert!(!linker.add_link(Box::new(MathLink)));

    assert!(linker.import_link("core").is_ok());
    assert!(linker.import_link("math").is_ok());
    assert_eq!(linker.function(".print").map(|f| f.arity).ok(), Some(1));
    assert_eq!(linker.function(".double").map(|f| f.arity).ok(), Some(1));
}

#[test]
fn test_close_clears_registry() {
    let mut linker = Linker::new();
    assert!(linker.import_link("core").is_ok());
    linker.close();
    assert!(!linker.is_imported("core"));
    assert_eq!(linker.class("Builder").err(), Some(LinkError::MissingClass("Builder".into())));
}

#[test]
fn test_link_data_arguments() {
    let data = LinkData {
        instance: None,
        args: vec![Value::Number(1.0), Value::string("s")],
    };
    assert_eq!(data.number(0, "p"), Ok(1.0));
    assert_eq!(data.string(1, "p").ok().as_deref(), Some("s"));
    assert_eq!(data.arg(5), Value::Unit);
    assert_eq!(
        data.boolean(1, "f@flag"),
        Err(LinkError::InvalidArgument {
            argument: "s".into(),
            param: "f@flag".into()
        }
        .into())
    );
    assert_eq!(
        data.receiver("List.pop").err(),
        Some(LinkError::MissingReceiver("List.pop".into()).into())
    );
}
