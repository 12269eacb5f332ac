//! Tree-walking evaluator: walks the AST against an `Environment` and
//! produces `Value`s.
//!
//! Mirrors the parser's dispatch-by-variant shape rather than the
//! `Result`-propagating style `yokurang-crafting-interpreters-rs` uses for
//! its interpreter: runtime failures here are ordinary `Value::Error`
//! values, short-circuited by hand at every combinator, since Monkey has
//! no exceptions.

pub mod builtins;

use crate::ast::expression::{
    ArrayLiteral, CallExpression, FunctionLiteral, HashLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, PrefixExpression,
};
use crate::ast::statement::BlockStatement;
use crate::ast::{Expression, Program, Statement};
use crate::environment::Environment;
use crate::object::Value;
use std::collections::HashMap;

/// Evaluates a whole program: a `ReturnValue` is unwrapped here (and only
/// here, besides a function-call boundary), since `Program` is the
/// outermost scope a `return` can bubble to.
pub fn eval_program(program: &Program, env: &Environment) -> Value {
    let mut result = Value::Null;
    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match result {
            Value::ReturnValue(inner) => return *inner,
            Value::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(stmt: &Statement, env: &Environment) -> Value {
    match stmt {
        Statement::Let(let_stmt) => {
            let value = eval_expression(&let_stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.set(let_stmt.name.value.clone(), value);
            Value::Null
        }
        Statement::Return(return_stmt) => {
            let value = eval_expression(&return_stmt.value, env);
            if value.is_error() {
                return value;
            }
            Value::ReturnValue(Box::new(value))
        }
        Statement::Expression(expr_stmt) => eval_expression(&expr_stmt.value, env),
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

/// Evaluates a block's statements in order. Unlike `eval_program`, a
/// `ReturnValue` or `Error` is returned **without unwrapping**, so an
/// enclosing block or `Program` still sees it and can propagate further.
fn eval_block_statement(block: &BlockStatement, env: &Environment) -> Value {
    let mut result = Value::Null;
    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_expression(expr: &Expression, env: &Environment) -> Value {
    match expr {
        Expression::IntegerLiteral(lit) => Value::Integer(lit.value),
        Expression::BooleanLiteral(lit) => Value::Boolean(lit.value),
        Expression::StringLiteral(lit) => Value::String(lit.value.clone()),
        Expression::Identifier(ident) => eval_identifier(ident, env),
        Expression::PrefixExpression(prefix) => eval_prefix_expr(prefix, env),
        Expression::InfixExpression(infix) => eval_infix_expr(infix, env),
        Expression::IfExpression(if_expr) => eval_if_expression(if_expr, env),
        Expression::FunctionLiteral(func) => eval_function_literal(func, env),
        Expression::CallExpression(call) => eval_call_expression(call, env),
        Expression::ArrayLiteral(array) => eval_array_literal(array, env),
        Expression::IndexExpression(index) => eval_index_expr(index, env),
        Expression::HashLiteral(hash) => eval_hash_literal(hash, env),
    }
}

fn eval_identifier(ident: &Identifier, env: &Environment) -> Value {
    if let Some(value) = env.get(&ident.value) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(&ident.value) {
        return builtin;
    }
    Value::Error(format!("identifier not found: {}", ident.value))
}

fn eval_prefix_expr(prefix: &PrefixExpression, env: &Environment) -> Value {
    let right = eval_expression(&prefix.right, env);
    if right.is_error() {
        return right;
    }
    match prefix.operator.as_str() {
        "!" => Value::Boolean(!right.is_truthy()),
        "-" => match right {
            Value::Integer(i) => Value::Integer(-i),
            other => Value::Error(format!("unknown operator: -{}", other.type_name())),
        },
        op => Value::Error(format!("unknown operator: {}{}", op, right.type_name())),
    }
}

fn eval_infix_expr(infix: &InfixExpression, env: &Environment) -> Value {
    let left = eval_expression(&infix.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&infix.right, env);
    if right.is_error() {
        return right;
    }
    eval_infix_operator(&infix.operator, left, right)
}

fn eval_infix_operator(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        (Value::Boolean(l), Value::Boolean(r)) => match operator {
            "==" => Value::Boolean(l == r),
            "!=" => Value::Boolean(l != r),
            op => Value::Error(format!(
                "unknown operator: {} {} {}",
                left.type_name(),
                op,
                right.type_name()
            )),
        },
        _ if left.type_name() != right.type_name() => Value::Error(format!(
            "type mismatch: {} {} {}",
            left.type_name(),
            operator,
            right.type_name()
        )),
        _ => Value::Error(format!(
            "unknown operator: {} {} {}",
            left.type_name(),
            operator,
            right.type_name()
        )),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Value::Error("division by zero".to_string())
            } else {
                Value::Integer(left.wrapping_div(right))
            }
        }
        "<" => Value::Boolean(left < right),
        ">" => Value::Boolean(left > right),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        op => Value::Error(format!("unknown operator: INTEGER {} INTEGER", op)),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::String(format!("{}{}", left, right)),
        op => Value::Error(format!("unknown operator: STRING {} STRING", op)),
    }
}

fn eval_if_expression(if_expr: &IfExpression, env: &Environment) -> Value {
    let condition = eval_expression(&if_expr.condition, env);
    if condition.is_error() {
        return condition;
    }
    if condition.is_truthy() {
        eval_block_statement(&if_expr.consequence, env)
    } else if let Some(alternative) = &if_expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        Value::Null
    }
}

fn eval_function_literal(func: &FunctionLiteral, env: &Environment) -> Value {
    Value::Function {
        parameters: func.parameters.clone(),
        body: func.body.clone(),
        env: env.clone(),
    }
}

fn eval_call_expression(call: &CallExpression, env: &Environment) -> Value {
    let function = eval_expression(&call.function, env);
    if function.is_error() {
        return function;
    }
    let arguments = match eval_expressions(&call.arguments, env) {
        Ok(args) => args,
        Err(err) => return err,
    };
    apply_function(function, arguments)
}

/// Evaluates each expression left-to-right, short-circuiting on the first
/// `Error` by returning it as `Err`.
fn eval_expressions(exprs: &[Expression], env: &Environment) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn apply_function(function: Value, arguments: Vec<Value>) -> Value {
    match function {
        Value::Function {
            parameters,
            body,
            env,
        } => {
            if parameters.len() != arguments.len() {
                return Value::Error(format!(
                    "wrong number of arguments: got {}, want {}",
                    arguments.len(),
                    parameters.len()
                ));
            }
            let call_env = Environment::new_enclosed(&env);
            for (param, arg) in parameters.iter().zip(arguments.into_iter()) {
                call_env.set(param.value.clone(), arg);
            }
            match eval_block_statement(&body, &call_env) {
                Value::ReturnValue(inner) => *inner,
                other => other,
            }
        }
        Value::Builtin(native) => native(&arguments),
        other => Value::Error(format!("not a function: {}", other.type_name())),
    }
}

fn eval_array_literal(array: &ArrayLiteral, env: &Environment) -> Value {
    match eval_expressions(&array.elements, env) {
        Ok(elements) => Value::Array(elements),
        Err(err) => err,
    }
}

fn eval_index_expr(index_expr: &IndexExpression, env: &Environment) -> Value {
    let left = eval_expression(&index_expr.left, env);
    if left.is_error() {
        return left;
    }
    let index = eval_expression(&index_expr.index, env);
    if index.is_error() {
        return index;
    }
    eval_index_operator(left, index)
}

fn eval_index_operator(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Value::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        (Value::Hash(pairs), key) => match key.hash_key() {
            Some(hash_key) => pairs
                .get(&hash_key)
                .map(|(_, v)| v.clone())
                .unwrap_or(Value::Null),
            None => Value::Error(format!("unusable as hash key: {}", key.type_name())),
        },
        _ => Value::Error(format!("index operator not supported: {}", left.type_name())),
    }
}

fn eval_hash_literal(hash: &HashLiteral, env: &Environment) -> Value {
    let mut pairs = HashMap::new();
    for (key_expr, value_expr) in &hash.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let hash_key = match key.hash_key() {
            Some(hk) => hk,
            None => return Value::Error(format!("unusable as hash key: {}", key.type_name())),
        };
        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }
        pairs.insert(hash_key, (key, value));
    }
    Value::Hash(pairs)
}
