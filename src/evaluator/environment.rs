//! A lexical scope chain, restructured from the original's back-pointer
//! chain (each scope holding a raw pointer to its parent) into an arena:
//! scopes live in one `Vec` and reference each other by index. This avoids
//! the self-referential-pointer shape that back-pointer scopes require and
//! follows the "Environment chain as an arena" recommendation.

use std::collections::HashMap;

use crate::error::RuntimeError;
use crate::lexer::{LiteralValue, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

struct Scope {
    bindings: HashMap<String, LiteralValue>,
    parent: Option<ScopeId>,
}

/// An arena of scope frames plus a cursor naming the currently active one.
pub struct Environment {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope {
                bindings: HashMap::new(),
                parent: None,
            }],
            current: ScopeId(0),
        }
    }

    pub fn current(&self) -> ScopeId {
        self.current
    }

    /// Pushes a new child scope of `current` and makes it current, returning
    /// its id so the caller can restore the previous cursor afterward.
    pub fn push_child(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            bindings: HashMap::new(),
            parent: Some(self.current),
        });
        self.current = id;
        id
    }

    /// Restores the active cursor. The popped scope's frame stays in the
    /// arena (it may still be referenced by a closure's parent chain in a
    /// future extension); only the cursor moves.
    pub fn restore(&mut self, scope: ScopeId) {
        self.current = scope;
    }

    pub fn define(&mut self, name: &str, value: LiteralValue, position: Position) -> Result<(), RuntimeError> {
        let scope = &mut self.scopes[self.current.0];
        if scope.bindings.contains_key(name) {
            return Err(RuntimeError {
                message: format!("variable '{name}' is already defined"),
                position,
            });
        }
        scope.bindings.insert(name.to_owned(), value);
        Ok(())
    }

    pub fn assign(&mut self, name: &str, value: LiteralValue, position: Position) -> Result<(), RuntimeError> {
        let mut cursor = Some(self.current);
        while let Some(id) = cursor {
            let scope = &mut self.scopes[id.0];
            if scope.bindings.contains_key(name) {
                scope.bindings.insert(name.to_owned(), value);
                return Ok(());
            }
            cursor = scope.parent;
        }
        Err(RuntimeError {
            message: format!("variable '{name}' is undefined"),
            position,
        })
    }

    pub fn get(&self, name: &str, position: Position) -> Result<LiteralValue, RuntimeError> {
        let mut cursor = Some(self.current);
        while let Some(id) = cursor {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.bindings.get(name) {
                return Ok(value.clone());
            }
            cursor = scope.parent;
        }
        Err(RuntimeError {
            message: format!("variable '{name}' is undefined"),
            position,
        })
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Guarantees a pushed scope is released on every exit path out of a block,
/// faults included, mirroring the original `ScopedReplace` guard.
pub struct ScopeGuard<'a> {
    environment: &'a mut Environment,
    outer: ScopeId,
}

impl<'a> ScopeGuard<'a> {
    pub fn enter(environment: &'a mut Environment) -> Self {
        let outer = environment.current();
        environment.push_child();
        Self { environment, outer }
    }

    pub fn environment(&mut self) -> &mut Environment {
        self.environment
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.environment.restore(self.outer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> Position {
        Position::default()
    }

    #[test]
    fn define_then_get_round_trips() {
        let mut env = Environment::new();
        env.define("x", LiteralValue::Number(1.0), pos()).unwrap();
        assert_eq!(env.get("x", pos()).unwrap(), LiteralValue::Number(1.0));
    }

    #[test]
    fn redefining_in_the_same_scope_is_a_fault() {
        let mut env = Environment::new();
        env.define("x", LiteralValue::Null, pos()).unwrap();
        let err = env.define("x", LiteralValue::Null, pos()).unwrap_err();
        assert_eq!(err.message, "variable 'x' is already defined");
    }

    #[test]
    fn undefined_lookup_is_a_fault() {
        let env = Environment::new();
        let err = env.get("missing", pos()).unwrap_err();
        assert_eq!(err.message, "variable 'missing' is undefined");
    }

    #[test]
    fn child_scope_sees_parent_bindings() {
        let mut env = Environment::new();
        env.define("x", LiteralValue::Number(1.0), pos()).unwrap();
        {
            let mut guard = ScopeGuard::enter(&mut env);
            assert_eq!(
                guard.environment().get("x", pos()).unwrap(),
                LiteralValue::Number(1.0)
            );
        }
    }

    #[test]
    fn shadowing_in_a_child_scope_does_not_affect_the_parent() {
        let mut env = Environment::new();
        env.define("x", LiteralValue::Number(1.0), pos()).unwrap();
        {
            let mut guard = ScopeGuard::enter(&mut env);
            guard
                .environment()
                .define("x", LiteralValue::Number(2.0), pos())
                .unwrap();
            assert_eq!(
                guard.environment().get("x", pos()).unwrap(),
                LiteralValue::Number(2.0)
            );
        }
        assert_eq!(env.get("x", pos()).unwrap(), LiteralValue::Number(1.0));
    }

    #[test]
    fn assign_through_child_scope_updates_the_defining_scope() {
        let mut env = Environment::new();
        env.define("x", LiteralValue::Number(1.0), pos()).unwrap();
        {
            let mut guard = ScopeGuard::enter(&mut env);
            guard
                .environment()
                .assign("x", LiteralValue::Number(5.0), pos())
                .unwrap();
        }
        assert_eq!(env.get("x", pos()).unwrap(), LiteralValue::Number(5.0));
    }

    #[test]
    fn scope_is_restored_after_the_guard_drops() {
        let mut env = Environment::new();
        let outer = env.current();
        {
            let mut guard = ScopeGuard::enter(&mut env);
            assert_ne!(guard.environment().current(), outer);
        }
        assert_eq!(env.current(), outer);
    }
}
