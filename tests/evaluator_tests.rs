use monkey_lang::environment::Environment;
use monkey_lang::evaluator::eval_program;
use monkey_lang::object::Value;
use monkey_lang::parser::test_helper::check_parser_errors;
use monkey_lang::{Lexer, Parser};

fn eval(input: &str) -> Value {
    let l = Lexer::new(input.to_string());
    let mut p = Parser::new(l);
    let program = p.parse_program();
    check_parser_errors(&p);
    let env = Environment::new();
    eval_program(&program, &env)
}

fn assert_integer(result: &Value, expected: i64) {
    match result {
        Value::Integer(i) => assert_eq!(*i, expected),
        other => panic!("expected Integer({}), got {:?}", expected, other),
    }
}

fn assert_error(result: &Value, expected: &str) {
    match result {
        Value::Error(msg) => assert_eq!(msg, expected),
        other => panic!("expected Error({:?}), got {:?}", expected, other),
    }
}

#[test]
fn test_integer_arithmetic_with_precedence() {
    assert_integer(&eval("5 + 5 * 2;"), 15);
}

#[test]
fn test_if_else_with_bound_condition() {
    let result = eval("let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };");
    assert_integer(&result, 10);
}

#[test]
fn test_nested_closures() {
    let result =
        eval("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);");
    assert_integer(&result, 5);
}

#[test]
fn test_recursive_array_map() {
    let result = eval(
        "let map = fn(arr, f) { let iter = fn(arr, acc) { if (len(arr) == 0) { acc } else { iter(rest(arr), push(acc, f(first(arr)))) } }; iter(arr, []); }; map([1,2,3], fn(x){ x*2 });",
    );
    match result {
        Value::Array(elements) => {
            assert_eq!(elements.len(), 3);
            assert_integer(&elements[0], 2);
            assert_integer(&elements[1], 4);
            assert_integer(&elements[2], 6);
        }
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn test_string_concatenation() {
    match eval(r#""Hello" + " " + "World""#) {
        Value::String(s) => assert_eq!(s, "Hello World"),
        other => panic!("expected String, got {:?}", other),
    }
}

#[test]
fn test_hash_literal_indexed_by_computed_key() {
    let result = eval(
        r#"let two = "two"; {"one": 10 - 9, two: 1 + 1, "thr" + "ee": 6 / 2, 4: 4, true: 5, false: 6}[two]"#,
    );
    assert_integer(&result, 2);
}

#[test]
fn test_type_mismatch_error() {
    assert_error(&eval("5 + true;"), "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn test_identifier_not_found_error() {
    assert_error(&eval("foobar;"), "identifier not found: foobar");
}

#[test]
fn test_return_bubbles_through_nested_blocks() {
    let result = eval("if (10 > 1) { if (10 > 1) { return 10; } return 1; }");
    assert_integer(&result, 10);
}

#[test]
fn test_hash_key_restriction_on_function_value() {
    assert_error(
        &eval("{fn(x){x}: 1}[fn(x){x}]"),
        "unusable as hash key: FUNCTION",
    );
}

#[test]
fn test_division_by_zero_is_an_error() {
    assert_error(&eval("10 / 0;"), "division by zero");
}

#[test]
fn test_wrong_number_of_arguments_is_an_error() {
    let result = eval("let f = fn(x, y) { x + y }; f(1);");
    assert_error(&result, "wrong number of arguments: got 1, want 2");
}
