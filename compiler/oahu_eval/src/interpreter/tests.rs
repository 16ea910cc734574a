//! End-to-end interpreter tests: source in, value and output out.

use oahu_diagnostic::{Diagnostic, Stage};
use oahu_ir::{SharedInterner, Source};
use pretty_assertions::assert_eq;

use super::*;
use crate::print_handler::buffer_handler;

fn interpreter() -> (Interpreter, SharedPrintHandler) {
    let output = buffer_handler();
    let interpreter = Interpreter::builder(SharedInterner::new())
        .print_handler(output.clone())
        .build();
    match interpreter {
        Ok(interpreter) => (interpreter, output),
        Err(diagnostic) => panic!("core prelude failed: {}", diagnostic.message),
    }
}

fn run(text: &str) -> (Result<RunResult, Diagnostic>, String) {
    let (mut interpreter, output) = interpreter();
    let result = interpreter.run_source(&Source::repl(text));
    (result, output.output())
}

/// Run `text` and return the display form of its value.
fn repr(text: &str) -> String {
    match run(text).0 {
        Ok(result) => result.repr(),
        Err(diagnostic) => panic!("unexpected error: {}", diagnostic.message),
    }
}

/// Run `text` and return the error message it fails with.
fn error(text: &str) -> Diagnostic {
    match run(text).0 {
        Ok(result) => panic!("expected an error, got {}", result.repr()),
        Err(diagnostic) => diagnostic,
    }
}

#[test]
fn test_trailing_expression_is_result() {
    assert_eq!(repr("let x = 3\nlet y = 4\nx + y"), "7.0");
    assert_eq!(repr("let x = 3"), "unit");
}

#[test]
fn test_println_output() {
    let (result, output) = run("println(\"a\" + 1)\nprint(true)\nprintln()");
    assert!(result.is_ok());
    assert_eq!(output, "a1.0\ntrue\n");
}

#[test]
fn test_block_shadowing() {
    let (result, output) = run("let x = 1\n{\n let x = 2\n println(x)\n}\nx");
    assert_eq!(result.map(|r| r.repr()).ok().as_deref(), Some("1.0"));
    assert_eq!(output, "2.0\n");
}

#[test]
fn test_reassignment() {
    assert_eq!(repr("var x = 1\nx += 2\nx"), "3.0");
    assert_eq!(error("let x = 1\nx = 2").message, "Constant cannot be reassigned");
    assert_eq!(error("y = 2").message, "Name 'y' has not been defined");
}

#[test]
fn test_redefinition_and_undefined_names() {
    assert_eq!(
        error("let x = 1\nlet x = 2").message,
        "Name 'x' has already been defined"
    );
    let diagnostic = error("x + y");
    assert_eq!(diagnostic.message, "Name 'x' has not been defined");
    assert_eq!(diagnostic.stage, Stage::Runtime);
}

#[test]
fn test_discarded_names_are_not_bound() {
    assert_eq!(repr("let _ = 1\nlet _ = 2\n3"), "3.0");
    assert_eq!(error("let _ = 1\n_").message, "Name '_' has not been defined");
}

#[test]
fn test_invalid_operands() {
    assert_eq!(
        error("true + 1").message,
        "Left operand 'true' for binary ADD operator is invalid"
    );
    assert_eq!(
        error("1 < \"a\"").message,
        "Right operand 'a' for binary LESS operator is invalid"
    );
    assert_eq!(
        error("-true").message,
        "Operand 'true' for unary NEGATIVE operator is invalid"
    );
    assert_eq!(
        error("1 and true").message,
        "Left operand '1.0' for binary AND operator is invalid"
    );
}

#[test]
fn test_logic_short_circuits() {
    assert_eq!(repr("false and undefined"), "false");
    assert_eq!(repr("true or undefined"), "true");
}

#[test]
fn test_for_over_range() {
    assert_eq!(
        repr("var total = 0\nfor (i : range(0, 5)) { total += i }\ntotal"),
        "10.0"
    );
    assert_eq!(repr("var s = \"\"\nfor (c : \"abc\") s = c + s\ns"), "cba");
}

#[test]
fn test_for_destructuring() {
    assert_eq!(
        repr("var total = 0\nfor ((a, b) : [[1, 2], [3, 4]]) total += a * b\ntotal"),
        "14.0"
    );
}

#[test]
fn test_labelled_break() {
    let source = "var n = 0
while @outer (true) {
    loop {
        n += 1
        if (n == 3) break @outer
    }
}
n";
    assert_eq!(repr(source), "3.0");
}

#[test]
fn test_continue() {
    let source = "var odd = 0
for (i : range(0, 6)) {
    if (i % 2 == 0) continue
    odd += 1
}
odd";
    assert_eq!(repr(source), "3.0");
}

#[test]
fn test_do_and_counted_loops() {
    assert_eq!(repr("var i = 0\ndo { i += 1 } while (i < 3)\ni"), "3.0");
    assert_eq!(repr("var i = 5\ndo { i += 1 } while (false)\ni"), "6.0");
    assert_eq!(repr("var c = 0\nloop (2.7) c += 1\nc"), "2.0");
    assert_eq!(error("loop (\"x\") 1").message, "Loop count 'x' is not a number");
}

#[test]
fn test_condition_must_be_boolean() {
    assert_eq!(error("if (1) 2").message, "Condition '1.0' is not a boolean");
    assert_eq!(error("while (null) {}").message, "Condition 'null' is not a boolean");
}

#[test]
fn test_unhandled_redirects() {
    assert_eq!(error("break").message, "Break was not handled");
    assert_eq!(error("fun f() { continue }\nf()").message, "Continue was not handled");
}

#[test]
fn test_try_catch_finally() {
    let source = "var log = \"\"
let r = try {
    throw \"boom\"
} catch (e) {
    log += \"c:\" + e
    1
} finally {
    log += \";f\"
}
println(log)
r";
    let (result, output) = run(source);
    assert_eq!(result.map(|r| r.repr()).ok().as_deref(), Some("1.0"));
    assert_eq!(output, "c:boom;f\n");
}

#[test]
fn test_throw_escapes_functions() {
    let source = "fun fail() {\n throw 42\n}\ntry { fail() } catch (e) { e }";
    assert_eq!(repr(source), "42.0");
}

#[test]
fn test_uncaught_throw() {
    assert_eq!(error("throw 5").message, "Thrown value '5.0' was not caught");
}

#[test]
fn test_runtime_error_skips_finally() {
    let (result, output) = run("try { missing } finally { println(\"f\") }");
    assert!(result.is_err());
    assert_eq!(output, "");
}

#[test]
fn test_functions_and_defaults() {
    assert_eq!(repr("fun add(a, b = 10) = a + b\nadd(1)"), "11.0");
    assert_eq!(repr("fun add(a, b = 10) = a + b\nadd(b = 1, a = 2)"), "3.0");
    assert_eq!(repr("fun sum(*xs) {\n var t = 0\n for (x : xs) t += x\n return t\n}\nsum(1, 2, *[3, 4])"), "10.0");
    assert_eq!(repr("fun f() {\n return\n}\nf()"), "unit");
}

#[test]
fn test_unresolved_arguments() {
    assert_eq!(
        error("fun f(a) = a\nf(1, 2)").message,
        "Arguments for 'f' could not be resolved"
    );
    assert_eq!(error("3()").message, "Value '3.0' is not callable");
}

#[test]
fn test_lambdas_and_closures() {
    assert_eq!(repr("let double = : x -> x * 2\ndouble(4)"), "8.0");
    let source = "fun makeCounter() {
    var count = 0
    return :: {
        count += 1
        count
    }
}
let next = makeCounter()
next()
next()";
    assert_eq!(repr(source), "2.0");
}

#[test]
fn test_comprehension() {
    assert_eq!(repr("[x * 2 for x : [1, 2, 3] if x > 1]"), "[4.0, 6.0]");
    assert_eq!(repr("[a + b for (a, b) : [[1, 2], [3, 4]]]"), "[3.0, 7.0]");
}

#[test]
fn test_when() {
    let source = "let x = 2
when (x) {
    1 -> \"one\"
    2 -> \"two\"
    else -> \"many\"
}";
    assert_eq!(repr(source), "two");
    assert_eq!(repr("when {\n false -> 1\n else -> 2\n}"), "2.0");
    assert_eq!(repr("when {\n false -> 1\n}"), "unit");
}

#[test]
fn test_destructuring_declarations() {
    assert_eq!(repr("let (a, b) = [1, 2]\na + b"), "3.0");
    assert_eq!(repr("let (a, b) = \"xyz\"\nb + a"), "yx");
    assert_eq!(
        error("let (a, b, c) = [1]").message,
        "Expected at least 3 values to destructure; found 1"
    );
    assert_eq!(error("let (a, b) = 1").message, "Value '1.0' is not spreadable");
}

#[test]
fn test_indexing() {
    assert_eq!(repr("let xs = [10, 20]\nxs[1]"), "20.0");
    assert_eq!(repr("\"hey\"[0]"), "h");
    assert_eq!(repr("[[1, 2], [3, 4]][1, 0]"), "3.0");
    assert_eq!(error("[1][-1]").message, "Index cannot be negative");
    assert_eq!(error("[1][3]").message, "Index '3.0' is out of bounds for size '1'");
    assert_eq!(error("true[0]").message, "Value 'true' is not indexable");
}

#[test]
fn test_unary_operators() {
    assert_eq!(repr("#\"hello\""), "5.0");
    assert_eq!(repr("#[1, 2, 3]"), "3.0");
    assert_eq!(repr("-\"abc\""), "cba");
    assert_eq!(repr("!false"), "true");
}

#[test]
fn test_class_members_and_methods() {
    let source = "class Point(let x, let y) {
    fun sum() = x + y
}
let p = Point(1, 2)
p.sum() + p.x";
    assert_eq!(repr(source), "4.0");
}

#[test]
fn test_plain_params_are_not_members() {
    let source = "class Box(size) {
    let double = size * 2
}
let b = Box(3)
b.double";
    assert_eq!(repr(source), "6.0");
    assert_eq!(
        error("class Box(size)\nBox(3).size").message,
        "Member 'size' of value '<Box instance>' is undefined"
    );
}

#[test]
fn test_mutable_members() {
    let source = "class Counter {
    var n = 0
    fun bump() {
        n += 1
    }
}
let c = Counter()
c.bump()
c.bump()
c.n";
    assert_eq!(repr(source), "2.0");
}

#[test]
fn test_inheritance() {
    let source = "class Animal(let name) {
    fun speak() = name + \" speaks\"
}
class Dog(name) : Animal(name) {
    fun bark() = speak() + \" loudly\"
}
let d = Dog(\"Rex\")
println(d.speak())
d.bark()";
    let (result, output) = run(source);
    assert_eq!(result.map(|r| r.repr()).ok().as_deref(), Some("Rex speaks loudly"));
    assert_eq!(output, "Rex speaks\n");
}

#[test]
fn test_this_and_base() {
    let source = "class A {
    fun who() = \"A\"
}
class B : A() {
    fun me() = this
    fun parent() = base
}
let b = B()
b.me() == b and b.parent().who() == \"A\"";
    assert_eq!(repr(source), "true");
}

#[test]
fn test_class_name() {
    assert_eq!(repr("class Point : Any()\nPoint().className()"), "Point");
    assert_eq!(repr("let n = 5\nn.className()"), "Number");
    assert_eq!(repr("class Point\nPoint"), "<class Point>");
}

#[test]
fn test_object() {
    assert_eq!(repr("object Config {\n let debug = false\n}\nConfig.debug"), "false");
}

#[test]
fn test_enum_entries() {
    let source = "enum Planet(let mass) {
    Mercury(1)
    Venus(2), Earth(3)
}
println(Planet.Venus.name)
Planet.Earth.ordinal + Planet.Earth.mass";
    let (result, output) = run(source);
    assert_eq!(result.map(|r| r.repr()).ok().as_deref(), Some("5.0"));
    assert_eq!(output, "Venus\n");
}

#[test]
fn test_primitive_members() {
    assert_eq!(repr("\"abc\".upper()"), "ABC");
    assert_eq!(repr("[1, 2].size()"), "2.0");
    assert_eq!(repr("let t = true\nt.xor(true)"), "false");
    assert_eq!(repr("let n = 7.9\nn.floor().toString()"), "7");
    assert_eq!(repr("let n = 1\nn.div(0)"), "NaN");
    assert_eq!(repr("\"a,b,c\".split(\",\")"), "[a, b, c]");
    assert_eq!(repr("[1, 2, 3].join(\"-\")"), "1.0-2.0-3.0");
    assert_eq!(repr("\"team\".contains(\"ea\")"), "true");
}

#[test]
fn test_list_wrapper_mutates_shared_table() {
    assert_eq!(repr("let xs = [1]\nxs.push(2)\nxs"), "[1.0, 2.0]");
    assert_eq!(repr("let xs = [1, 2]\nxs.set(0, 9)\nxs.pop()\nxs"), "[9.0]");
    assert_eq!(repr("let xs = []\nxs.pop()"), "null");
    assert_eq!(repr("let xs = []\nxs.set(\"k\", 1)\nxs[\"k\"]"), "1.0");
}

#[test]
fn test_string_format() {
    assert_eq!(repr("\"{0} and {1}\".format(\"x\", 2)"), "x and 2.0");
    let diagnostic = error("\"{2}\".format(1)");
    assert_eq!(diagnostic.message, "String format position '2' has no argument");
    assert_eq!(diagnostic.stage, Stage::Linker);
}

#[test]
fn test_string_get_out_of_bounds() {
    assert_eq!(repr("\"ab\".get(1)"), "b");
    assert_eq!(error("\"ab\".get(5)").message, "String index '5.0' out of bounds");
}

#[test]
fn test_builder() {
    assert_eq!(
        repr("let b = Builder()\nb.append(\"a\").append(1)\nb.build()"),
        "a1.0"
    );
}

#[test]
fn test_missing_native() {
    let diagnostic = error("fun @nope()");
    assert_eq!(diagnostic.message, "Link for function '.nope' is unavailable");
    assert_eq!(diagnostic.span, None);
}

#[test]
fn test_str_and_range_step() {
    assert_eq!(repr("str(1) + \"!\""), "1.0!");
    assert_eq!(repr("range(0, 10, 4)"), "[0.0, 4.0, 8.0]");
    assert_eq!(
        error("range(0, 1, 0)").message,
        "Argument '0.0' for link function parameter '.range@step' is invalid"
    );
}

#[test]
fn test_return_and_exit_end_the_run() {
    let (result, output) = run("return 5\nprintln(\"no\")");
    assert_eq!(
        result.ok(),
        Some(RunResult {
            value: Value::Number(5.0),
            exited: false
        })
    );
    assert_eq!(output, "");

    let (result, _) = run("exit 3");
    assert_eq!(result.ok().and_then(|r| r.exit_code()), Some(3));
    let (result, _) = run("exit");
    assert_eq!(result.ok().and_then(|r| r.exit_code()), Some(0));
}

#[test]
fn test_state_persists_between_runs() {
    let (mut interpreter, _) = interpreter();
    assert!(interpreter.run_source(&Source::repl("let x = 1")).is_ok());
    let result = interpreter.run_source(&Source::repl("x + 1"));
    assert_eq!(result.map(|r| r.repr()).ok().as_deref(), Some("2.0"));
    assert_eq!(interpreter.global("x"), Some(Value::Number(1.0)));
}

#[test]
fn test_failed_run_leaves_global_scope_on_top() {
    let (mut interpreter, _) = interpreter();
    assert!(interpreter
        .run_source(&Source::repl("fun f() {\n let y = 1\n missing\n}\nf()"))
        .is_err());
    assert!(interpreter.run_source(&Source::repl("let y = 2")).is_ok());
    assert_eq!(interpreter.global("y"), Some(Value::Number(2.0)));
}

#[test]
fn test_duplicate_link_import_warns() {
    let (mut interpreter, _) = interpreter();
    assert!(interpreter.import_link("core").is_ok());
    let warnings = interpreter.take_warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "Link 'core' has already been imported");
    assert!(!warnings[0].is_error());
}

#[test]
fn test_missing_link_import() {
    let (mut interpreter, _) = interpreter();
    let err = interpreter.import_link("gfx").err();
    assert_eq!(err.map(|d| d.message), Some("Link for file 'gfx' is unavailable".to_string()));
}

#[test]
fn test_parse_warnings_are_collected() {
    let (mut interpreter, _) = interpreter();
    assert!(interpreter.run_source(&Source::repl("let _ = 1")).is_ok());
    assert_eq!(interpreter.take_warnings().len(), 1);
    assert!(interpreter.take_warnings().is_empty());
}

#[test]
fn test_without_prelude() {
    let interpreter = Interpreter::builder(SharedInterner::new())
        .print_handler(buffer_handler())
        .prelude(false)
        .build();
    let Ok(mut interpreter) = interpreter else {
        panic!("building without a prelude cannot fail");
    };
    let result = interpreter.run_source(&Source::repl("\"a\".upper()"));
    assert_eq!(
        result.err().map(|d| d.message),
        Some("Member 'upper' of value 'a' is undefined".to_string())
    );
}

#[test]
fn test_deep_recursion() {
    let source = "fun depth(n) = if (n == 0) 0 else 1 + depth(n - 1)\ndepth(5000)";
    assert_eq!(repr(source), "5000.0");
}

#[test]
fn test_oversized_string_repetition_is_an_error() {
    let diagnostic = error("\"ab\" * 1e19");
    assert_eq!(
        diagnostic.message,
        "Right operand '1.0E19' for binary MULTIPLY operator is invalid"
    );
    assert_eq!(diagnostic.stage, Stage::Runtime);
    assert_eq!(repr("\"ab\" * 2"), "abab");
}

#[test]
fn test_base_must_be_an_instance_or_null() {
    assert_eq!(error("class A : 5\nA()").message, "Base '5.0' is not an instance");
    assert_eq!(repr("class A : null\nA()"), "<A instance>");
}

#[test]
fn test_loop_passes_get_fresh_scopes() {
    assert_eq!(repr("var i = 0\nwhile (i < 2) let y = i + (i = i + 1)\ni"), "2.0");
    assert_eq!(repr("var c = 0\nloop (3) let z = (c = c + 1)\nc"), "3.0");
}

#[test]
fn test_self_containing_list() {
    assert_eq!(repr("var xs = [1]\nxs.push(xs)\nxs"), "[1.0, (this Collection)]");
    assert_eq!(repr("var xs = [1]\nxs.push(xs)\nvar ys = [1]\nys.push(ys)\nxs == ys"), "true");
}
