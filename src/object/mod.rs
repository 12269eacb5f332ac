//! Runtime value types produced and consumed by the evaluator.
//!
//! Values are represented as a tagged enum (no trait-object polymorphism),
//! matching the AST's own struct-per-variant-plus-thin-enum shape.

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;
use std::collections::HashMap;
use std::fmt;

/// A native function pluggable into the global environment.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    /// Wraps the value of a `return` until it reaches a function call boundary
    /// or the top of the program.
    ReturnValue(Box<Value>),
    /// An in-band runtime failure. Propagates through any containing
    /// evaluation instead of unwinding the Rust call stack.
    Error(String),
    Function {
        parameters: Vec<Identifier>,
        body: BlockStatement,
        env: Environment,
    },
    Builtin(BuiltinFn),
    Array(Vec<Value>),
    Hash(HashMap<HashKey, (Value, Value)>),
}

impl Value {
    /// The type-name string used in error messages (part of the contract
    /// callers of the interpreter can rely on, e.g. `Error("type mismatch:
    /// INTEGER + BOOLEAN")`).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function { .. } => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    /// `Null` and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Computes this value's hash key, or `None` if it cannot be used as one.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(i) => Some(HashKey::Integer(*i)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::String(s) => Some(HashKey::String(s.clone())),
            _ => None,
        }
    }
}

/// The restricted set of value types usable as hash keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),
            Value::ReturnValue(inner) => write!(f, "{}", inner),
            Value::Error(msg) => write!(f, "ERROR: {}", msg),
            Value::Function {
                parameters, body, ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {}", params.join(", "), body)
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Array(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Hash(pairs) => {
                let items: Vec<String> = pairs
                    .values()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect();
                write!(f, "{{{}}}", items.join(", "))
            }
        }
    }
}
