use crate::consts;
use levenshtein::levenshtein;
use std::collections::HashMap;
use super::builtin::{self, Builtin, BUILTINS};

/// A context to use when evaluating an expression, containing the variables that can be used
/// within the expression.
///
/// Functions are always the builtin functions; they cannot be defined by expressions.
#[derive(Debug, Clone)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: consts::ALL
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context, without even the named constants.
    ///
    /// Consider using the [`Default`] implementation instead.
    pub fn new() -> Ctxt {
        Ctxt { vars: HashMap::new() }
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Get a builtin function by name.
    pub fn get_func(&self, name: &str) -> Option<&'static Builtin> {
        builtin::get(name)
    }

    /// Returns all functions with a name similar to the given name, sorted by name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&'static str> {
        let mut similar = BUILTINS
            .keys()
            .copied()
            .filter(|n| levenshtein(n, name) < 2)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}
