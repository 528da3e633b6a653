//! Environment for variable bindings in the interpreter.
//!
//! A single flat scope: there are no child scopes and no parent lookup.
//! One `Environment` is owned per independent evaluation context.

use rustc_hash::FxHashMap;

use crate::errors::{undefined_variable, EvalResult};
use crate::value::Value;

/// Constants a host typically seeds before first use.
pub const DEFAULT_CONSTANTS: [(&str, Value); 3] = [
    ("true", Value::Bool(true)),
    ("false", Value::Bool(false)),
    ("null", Value::Null),
];

/// Name-to-value binding store.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    /// Variable bindings (`FxHashMap` for faster hashing of short names).
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Create an environment pre-populated with `bindings`.
    pub fn with_bindings<N, I>(bindings: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        Environment {
            bindings: bindings
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// Create an environment seeded with `true`, `false` and `null`.
    pub fn with_constants() -> Self {
        Self::with_bindings(DEFAULT_CONSTANTS)
    }

    /// Define a variable, overwriting any prior binding.
    ///
    /// Returns the stored value.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Value {
        self.bindings.insert(name.into(), value.clone());
        value
    }

    /// Look up a variable by name.
    ///
    /// Fails only when the name has no entry; a binding to `Null` is found.
    #[inline]
    pub fn lookup(&self, name: &str) -> EvalResult {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| undefined_variable(name))
    }

    /// Borrow a binding without failing.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
