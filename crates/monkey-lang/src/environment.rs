//! Lexical scoping.
//!
//! The reference implementation's `Environment` is a `dict` plus an
//! optional `outer` pointer; `get` walks outward through `outer` until it
//! finds a binding or runs out of parents. That shape is kept here, but a
//! function literal must retain a *live* reference to the frame it closed
//! over even after the call that created it returns, so a flat scope stack
//! (as the teacher's `ScopeStack` uses) won't do: `Environment` wraps its
//! data in `Rc<RefCell<_>>` so cloning an `Environment` shares the same
//! underlying store rather than copying it.

use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

struct EnvironmentData {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

/// A lexical scope. Cheap to clone: clones share the same underlying
/// bindings, which is exactly what a captured closure environment needs.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

impl Environment {
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            store: HashMap::new(),
            outer: None,
        })))
    }

    /// A child scope nested inside `outer`, used for function call frames
    /// and block-local bindings.
    pub fn new_enclosed(outer: Environment) -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            store: HashMap::new(),
            outer: Some(outer),
        })))
    }

    /// Looks up `name`, walking outward through enclosing scopes.
    pub fn get(&self, name: &str) -> Option<Object> {
        let data = self.0.borrow();
        match data.store.get(name) {
            Some(value) => Some(value.clone()),
            None => data.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in this frame only; never touches an enclosing scope.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment(..)")
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
