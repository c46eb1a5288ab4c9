use std::fs;

use lainoa::{Environment, Value, run};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demos_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ln"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match run(&source, &path.display().to_string(), &Environment::new()) {
            Ok(Value::Error(e)) => panic!("Demo {path:?} failed: {e}"),
            Ok(_) => {},
            Err(errors) => panic!("Demo {path:?} does not parse: {errors:?}"),
        }
    }

    assert!(count > 0, "No demos found in demos/");
}

fn eval(src: &str) -> Value {
    run(src, "test.ln", &Environment::new()).unwrap_or_else(|errors| {
                                                 panic!("Script does not parse: {errors:?}")
                                             })
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    assert_eq!(eval(src), expected.into(), "script: {src}");
}

fn assert_error(src: &str, message: &str) {
    match eval(src) {
        Value::Error(e) => {
            assert!(e.to_string().contains(message),
                    "expected an error containing {message:?}, got {e:?}")
        },
        other => panic!("Script succeeded with {other} but was expected to fail"),
    }
}

fn assert_inspect(src: &str, expected: &str) {
    assert_eq!(eval(src).to_string(), expected, "script: {src}");
}

#[test]
fn integer_arithmetic() {
    assert_value("5 + 5 + 5 + 5 - 10", 10_i64);
    assert_value("2 * (5 + 10)", 30_i64);
    assert_value("-50 + 100 + -50", 0_i64);
    assert_value("20 + 2 * -10", 0_i64);
    assert_value("50 / 2 * 2 + 10", 60_i64);
    assert_value("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50_i64);
    assert_value("+7", 7_i64);
    assert_value("9223372036854775807 + 1", i64::MIN);
    assert_error("10 / (5 - 5)", "division by zero: 10 / 0");
}

#[test]
fn comparisons_and_truthiness() {
    assert_value("3 + 4 * 5 == 3 * 1 + 4 * 5", true);
    assert_value("1 < 2", true);
    assert_value("1 > 2", false);
    assert_value("(1 < 2) == true", true);
    assert_value("true != false", true);
    assert_value("!5", false);
    assert_value("!!5", true);
    assert_value("!0", false);
    assert_value("!nil", true);
    assert_value("nil == nil", true);
    assert_value("nil == false", false);
    assert_value("1 == \"1\"", false);
}

#[test]
fn strings() {
    assert_value(r#""Hello" + " " + "World!""#, "Hello World!");
    assert_value(r#""a" == "a""#, true);
    assert_value(r#""a" != "a""#, false);
    assert_error(r#""a" - "b""#, "unknown operator: STRING - STRING");
    assert_inspect(r#""quoted""#, r#""quoted""#);
}

#[test]
fn operator_errors() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
}

#[test]
fn conditionals() {
    assert_value("if (true) { 10 }", 10_i64);
    assert_value("if (0) { 10 }", 10_i64);
    assert_value("if (1 > 2) { 10 } else { 20 }", 20_i64);
    assert_value("if (nil) { 10 }", Value::Nil);
    assert_value("if (false) { 10 }", Value::Nil);
}

#[test]
fn branches_get_their_own_scope() {
    assert_error("if (true) { let inside = 1; } inside", "identifier not found: inside");
    assert_value("if (true) { let y = 1; } if (true) { let y = 2; y }", 2_i64);
}

#[test]
fn return_stops_evaluation() {
    assert_value("return 10; 9;", 10_i64);
    assert_value("9; return 2 * 5; 9;", 10_i64);
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10_i64);
    assert_value("let f = fun(x) { return x; x + 10; }; f(10)", 10_i64);
}

#[test]
fn return_inside_an_operand_unwinds_to_the_call() {
    assert_value("let f = fun() { 1 + if (true) { return 5 } }; f()", 5_i64);
    assert_value("let f = fun() { let a = [if (true) { return 5 }]; 0 }; f()", 5_i64);
    assert_value("let f = fun() { puts(if (true) { return 5 }); 0 }; f()", 5_i64);
    assert_value("let f = fun() { -if (true) { return 5 } }; f()", 5_i64);
    assert_value("let f = fun() { [1][if (true) { return 5 }] }; f()", 5_i64);
    assert_value("let f = fun() { if (if (true) { return 5 }) { 1 } }; f()", 5_i64);
}

#[test]
fn return_inside_an_assignment_leaves_the_binding_alone() {
    let env = Environment::new();

    run("let x = 0;", "test.ln", &env).unwrap();
    let result = run("let f = fun() { x = if (true) { return 7 }; 0 }; f()", "test.ln", &env);

    assert_eq!(result.unwrap(), Value::Integer(7));
    assert_eq!(run("x = if (true) { return 8 }", "test.ln", &env).unwrap(), Value::Integer(8));
    assert_eq!(run("x", "test.ln", &env).unwrap(), Value::Integer(0));
}

#[test]
fn let_and_assignment() {
    assert_value("let a = 5; a;", 5_i64);
    assert_value("let a = 5 * 5; a;", 25_i64);
    assert_value("let a = 5; let b = a; let c = a + b + 5; c;", 15_i64);
    assert_value("let x = 5", 5_i64);
    assert_value("let a = 5; a = a + 1; a", 6_i64);
    assert_value("let a = 1; let b = 2; a = b = 7; a + b", 14_i64);
    assert_error("let x = 1; let x = 2;", "already bound");
    assert_error("x = 1;", "doesn't exist");
}

#[test]
fn errors_stop_the_program() {
    let env = Environment::new();

    let result = run("let a = 1; missing; a = 5;", "test.ln", &env).unwrap();

    assert!(matches!(result, Value::Error(_)));
    assert_eq!(run("a", "test.ln", &env).unwrap(), Value::Integer(1));
}

#[test]
fn environment_persists_between_runs() {
    let env = Environment::new();

    run("let x = 2;", "repl", &env).unwrap();

    assert_eq!(run("x * 3", "repl", &env).unwrap(), Value::Integer(6));
}

#[test]
fn functions_and_closures() {
    assert_value("let identity = fun(x) { x; }; identity(5);", 5_i64);
    assert_value("let add = fun(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20_i64);
    assert_value("fun(x) { x; }(5)", 5_i64);
    assert_value("fun(a) { a }(1, 2)", 1_i64);
    assert_value("let make = fun(n) { fun(m) { n + m } }; make(5)(10)", 15_i64);
    assert_value("let counter = 0; \
                  let inc = fun() { counter = counter + 1 }; \
                  inc(); inc(); counter",
                 2_i64);
    assert_inspect("fun(x) { x + 1 }", "fun(x) { (x + 1) }");
}

#[test]
fn recursion() {
    assert_value("let fact = fun(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }; fact(5)",
                 120_i64);
}

#[test]
fn currying() {
    assert_value("let mul = fun(a, b, c, d) { a * b * c * d }; mul(5, 10)(3)(2)", 300_i64);
    assert_value("let add = fun(a, b) { a + b }; let inc = add(1); inc(41) + inc(1)", 44_i64);
    assert_inspect("let add = fun(a, b) { a + b }; add(1)", "curried fun(b) { (a + b) }");
}

#[test]
fn parameters_cannot_shadow_visible_names() {
    assert_error("let x = 1; let f = fun(x) { x }; f(2)", "already bound identifier `x`");
    assert_error("let outer = fun(n) { let inner = fun(n) { n }; inner(1) }; outer(2)",
                 "already bound identifier `n`");
}

#[test]
fn curried_parameters_cannot_shadow_visible_names() {
    assert_error("let b = 1; let f = fun(a, b) { a }; f(1)(2)", "already bound identifier `b`");
    assert_error("let f = fun(a, a) { a }; f(1)(2)", "already bound identifier `a`");
    assert_error("let f = fun(a, b) { fun(a) { a } }; f(1)(2)(3)",
                 "already bound identifier `a`");
}

#[test]
fn calling_non_functions() {
    assert_error("5(1)", "expected 5 to be a function, got INTEGER");
    assert_error("let a = [1]; a(0)", "expected [1] to be a function, got ARRAY");
}

#[test]
fn arrays_and_indexing() {
    assert_inspect("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_value("let a = [1, 2, 3]; a[0] + a[1] + a[2]", 6_i64);
    assert_value("[1, 2, 3][1 + 1]", 3_i64);
    assert_value("[1, 2, 3][5]", Value::Nil);
    assert_value("[1, 2, 3][-1]", Value::Nil);
    assert_error(r#"[1, 2, 3]["x"]"#, "expected INTEGER as index for array, got STRING");
    assert_error("1[0]", "type INTEGER doesn't support index operations");
}

#[test]
fn array_equality_is_identity() {
    assert_value("let a = [1]; a == a", true);
    assert_value("[1] == [1]", false);
    assert_value("let f = fun() { 1 }; f == f", true);
}

#[test]
fn builtins() {
    assert_value(r#"len("")"#, 0_i64);
    assert_value(r#"len("four")"#, 4_i64);
    assert_value(r#"len("héllo")"#, 5_i64);
    assert_value("len([1, 2, 3])", 3_i64);
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error(r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1");
    assert_value("to_string(42)", "42");
    assert_value("head([1, 2])", 1_i64);
    assert_value("head([])", Value::Nil);
    assert_inspect("rest([1, 2, 3])", "[2, 3]");
    assert_value("rest([])", Value::Nil);
    assert_value(r#"puts("printed")"#, "printed");
    assert_error("puts([1])", "argument to `puts` not supported, got ARRAY");
    assert_inspect("len", "builtin function len");
}

#[test]
fn push_builds_a_new_array() {
    assert_inspect("let a = [1, 2]; let b = push(a, 3); [a, b]", "[[1, 2], [1, 2, 3]]");
    assert_error("push(1, 2)", "argument to `push` must be ARRAY, got INTEGER");
}

#[test]
fn builtins_can_be_shadowed() {
    assert_value("let len = fun(x) { 42 }; len([1])", 42_i64);
}

#[test]
fn parse_errors_prevent_evaluation() {
    let errors = run("let 5; puts(1)", "test.ln", &Environment::new()).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("expected next token to be IDENT"));
}
