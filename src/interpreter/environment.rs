use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// One level of the scope chain.
struct Scope {
    store: RefCell<HashMap<String, Value>>,
    outer: Option<Environment>,
}

/// A handle to a chain of scopes, innermost first.
///
/// Cloning the handle is cheap and shares the scopes, which is how function
/// values capture their defining environment. New scopes are only ever
/// pushed on top of an existing chain; ancestors keep their shape and only
/// their slots change through [`Environment::rebind`].
///
/// A name is visible in at most one scope of any chain: [`Environment::bind`]
/// refuses names that are already visible anywhere below, so there is no
/// shadowing.
///
/// # Example
/// ```
/// use lainoa::interpreter::{environment::Environment, value::core::Value};
///
/// let global = Environment::new();
/// global.bind("x", Value::Integer(1)).unwrap();
///
/// let inner = global.push_scope();
/// assert!(inner.bind("x", Value::Integer(2)).is_err());
///
/// inner.rebind("x", Value::Integer(3)).unwrap();
/// assert_eq!(global.lookup("x"), Some(Value::Integer(3)));
/// ```
#[derive(Clone)]
pub struct Environment(Rc<Scope>);

impl Environment {
    /// Creates an environment with a single, empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Scope { store: RefCell::new(HashMap::new()),
                             outer: None, }))
    }

    /// Returns a new environment whose innermost scope is empty and whose
    /// outer chain is `self`.
    #[must_use]
    pub fn push_scope(&self) -> Self {
        Self(Rc::new(Scope { store: RefCell::new(HashMap::new()),
                             outer: Some(self.clone()), }))
    }

    /// Returns the chain without its innermost scope, or `None` for the
    /// outermost scope.
    #[must_use]
    pub fn pop_scope(&self) -> Option<Self> {
        self.0.outer.clone()
    }

    /// Looks `name` up from the innermost scope outwards.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scopes()
            .find_map(|scope| scope.store.borrow().get(name).cloned())
    }

    /// Binds `name` in the innermost scope.
    ///
    /// # Errors
    /// [`RuntimeError::AlreadyBound`] if `name` is visible anywhere in the
    /// chain.
    pub fn bind(&self, name: &str, value: Value) -> Result<(), RuntimeError> {
        if self.contains(name) {
            tracing::trace!(name, "refusing to re-bind");
            return Err(RuntimeError::AlreadyBound { name: name.to_string() });
        }

        self.0.store.borrow_mut().insert(name.to_string(), value);
        Ok(())
    }

    /// Overwrites the slot of `name` in the nearest scope that holds it.
    ///
    /// # Errors
    /// [`RuntimeError::NotBound`] if no scope in the chain holds `name`.
    pub fn rebind(&self, name: &str, value: Value) -> Result<(), RuntimeError> {
        for scope in self.scopes() {
            if let Some(slot) = scope.store.borrow_mut().get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }

        tracing::trace!(name, "refusing to assign unbound name");
        Err(RuntimeError::NotBound { name:  name.to_string(),
                                     value: value.to_string(), })
    }

    /// Whether `name` is visible from this scope.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scopes().any(|scope| scope.store.borrow().contains_key(name))
    }

    fn scopes(&self) -> impl Iterator<Item = &Scope> {
        std::iter::successors(Some(&*self.0), |scope| scope.outer.as_ref().map(|env| &*env.0))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the names bound at each level, innermost first. Values are left out
/// since closures stored in a scope usually point back at it.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for scope in self.scopes() {
            let store = scope.store.borrow();
            let mut names: Vec<&str> = store.keys().map(String::as_str).collect();
            names.sort_unstable();
            list.entry(&names);
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_outwards() {
        let global = Environment::new();
        global.bind("a", Value::Integer(1)).unwrap();
        let inner = global.push_scope();
        inner.bind("b", Value::Integer(2)).unwrap();

        assert_eq!(inner.lookup("a"), Some(Value::Integer(1)));
        assert_eq!(inner.lookup("b"), Some(Value::Integer(2)));
        assert_eq!(global.lookup("b"), None);
        assert_eq!(format!("{inner:?}"), r#"[["b"], ["a"]]"#);
    }

    #[test]
    fn bind_refuses_visible_names() {
        let global = Environment::new();
        global.bind("x", Value::Integer(1)).unwrap();

        assert_eq!(global.bind("x", Value::Integer(2)),
                   Err(RuntimeError::AlreadyBound { name: "x".to_string() }));
        assert_eq!(global.push_scope().push_scope().bind("x", Value::Nil),
                   Err(RuntimeError::AlreadyBound { name: "x".to_string() }));
    }

    #[test]
    fn sibling_scopes_do_not_see_each_other() {
        let global = Environment::new();
        let left = global.push_scope();
        let right = global.push_scope();

        left.bind("x", Value::Integer(1)).unwrap();
        right.bind("x", Value::Integer(2)).unwrap();

        assert_eq!(left.lookup("x"), Some(Value::Integer(1)));
        assert_eq!(right.lookup("x"), Some(Value::Integer(2)));
    }

    #[test]
    fn rebind_updates_the_owning_scope() {
        let global = Environment::new();
        global.bind("counter", Value::Integer(0)).unwrap();
        let inner = global.push_scope();

        inner.rebind("counter", Value::Integer(5)).unwrap();

        assert_eq!(global.lookup("counter"), Some(Value::Integer(5)));
        assert!(inner.pop_scope().is_some());
        assert!(global.pop_scope().is_none());
    }

    #[test]
    fn rebind_of_unbound_name_fails() {
        let error = Environment::new().rebind("y", Value::Integer(1)).unwrap_err();

        assert!(error.to_string().contains("doesn't exist"));
        assert!(error.to_string().contains("let y = 1"));
    }

    #[test]
    fn debug_lists_names_per_scope() {
        let global = Environment::new();
        global.bind("b", Value::Nil).unwrap();
        global.bind("a", Value::Nil).unwrap();
        let inner = global.push_scope();
        inner.bind("c", Value::Nil).unwrap();

        assert_eq!(format!("{inner:?}"), r#"[["c"], ["a", "b"]]"#);
    }
}
