//! Lexically scoped environment mapping identifiers to values.
//!
//! Backed by `Rc<RefCell<..>>` rather than an owning `Box` parent pointer:
//! a closure's captured environment must be shared, not copied, across every
//! call to that closure (and across nested closures defined within it), so
//! cloning an `Environment` clones the handle, not the scope.

use crate::object::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Scope {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

/// A lexical scope. Cheap to clone (bumps a reference count).
#[derive(Debug, Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates a fresh, parentless (global) environment.
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(Scope::default())))
    }

    /// Creates a child scope whose outer pointer is `outer`. Used for a
    /// function call's activation record: `outer` is the function's
    /// *captured* environment, not the caller's.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Walks outward through enclosing scopes looking for `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.store.get(name) {
            return Some(value.clone());
        }
        scope.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds `name` to `value` in the current scope only.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}
