//! The fixed table of native functions, resolved after environment lookup
//! fails for an identifier (see `evaluator::eval_identifier`).

use crate::object::Value;

/// Looks up a builtin by name. Returns `None` if `name` isn't one.
pub fn lookup(name: &str) -> Option<Value> {
    match name {
        "len" => Some(Value::Builtin(len)),
        "first" => Some(Value::Builtin(first)),
        "last" => Some(Value::Builtin(last)),
        "rest" => Some(Value::Builtin(rest)),
        "push" => Some(Value::Builtin(push)),
        "puts" => Some(Value::Builtin(puts)),
        _ => None,
    }
}

fn wrong_args(got: usize, want: usize) -> Value {
    Value::Error(format!("wrong number of arguments. got={}, want={}", got, want))
}

fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_args(args.len(), 1);
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::Error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_args(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => Value::Error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_args(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => Value::Error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_args(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(elements[1..].to_vec())
            }
        }
        other => Value::Error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_args(args.len(), 2);
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut new_elements = elements.clone();
            new_elements.push(args[1].clone());
            Value::Array(new_elements)
        }
        other => Value::Error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn puts(args: &[Value]) -> Value {
    for arg in args {
        println!("{}", arg);
    }
    Value::Null
}
