//! The builtin functions that can be called from an expression.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The kind of the function parameter; either required or optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Required,
    Optional,
}

/// A function parameter to a builtin function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinParam {
    /// The name of the parameter.
    pub name: &'static str,

    /// Whether the parameter is required or optional.
    pub kind: ParamKind,
}

/// A builtin function.
#[derive(Clone, Copy, Debug)]
pub struct Builtin {
    /// The name of the function.
    pub name: &'static str,

    /// The function's signature, indicating all parameters and whether they are required or
    /// optional. Optional parameters always come last.
    pub sig: &'static [BuiltinParam],

    /// Evaluates the function. The number of arguments is checked against [`Builtin::sig`] before
    /// this is called.
    pub func: fn(&[f64]) -> f64,
}

impl Builtin {
    /// Returns the number of required parameters.
    pub fn required(&self) -> usize {
        self.sig.iter().filter(|param| param.kind == ParamKind::Required).count()
    }

    /// Returns the signature as a string, such as `log(n, base?)`, used for error messages.
    pub fn sig_str(&self) -> String {
        let params = self.sig
            .iter()
            .map(|param| match param.kind {
                ParamKind::Required => param.name.to_string(),
                ParamKind::Optional => format!("{}?", param.name),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.name, params)
    }
}

const N: &[BuiltinParam] = &[BuiltinParam { name: "n", kind: ParamKind::Required }];
const N_BASE: &[BuiltinParam] = &[
    BuiltinParam { name: "n", kind: ParamKind::Required },
    BuiltinParam { name: "base", kind: ParamKind::Optional },
];

/// Generates a [`Builtin`] for each unary `f64` method with the same name.
macro_rules! unary_builtins {
    ($($name:ident)*) => {
        [$(
            Builtin {
                name: stringify!($name),
                sig: N,
                func: |args| f64::$name(args[0]),
            },
        )*]
    };
}

/// `log(n)` is the natural logarithm; `log(n, base)` uses the given base.
fn log(args: &[f64]) -> f64 {
    match args.get(1) {
        Some(base) => args[0].ln() / base.ln(),
        None => args[0].ln(),
    }
}

/// All builtin functions, keyed by name.
pub static BUILTINS: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    let methods = unary_builtins!(
        sin cos tan asin acos atan sinh cosh tanh
        sqrt cbrt abs exp log10 log2 floor ceil round
    );
    let others = [
        Builtin { name: "sec", sig: N, func: |args| args[0].cos().recip() },
        Builtin { name: "csc", sig: N, func: |args| args[0].sin().recip() },
        Builtin { name: "cot", sig: N, func: |args| args[0].tan().recip() },
        Builtin { name: "log", sig: N_BASE, func: log },
    ];

    methods
        .into_iter()
        .chain(others)
        .map(|builtin| (builtin.name, builtin))
        .collect()
});

/// Returns the builtin function with the given name, if it exists.
pub fn get(name: &str) -> Option<&'static Builtin> {
    BUILTINS.get(name)
}

/// Computes `n!` by repeated multiplication. `n` must be a non-negative integer; values above
/// `170` overflow to infinity.
pub fn factorial(n: f64) -> f64 {
    let mut result: f64 = 1.0;
    let mut i = 2.0;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(get("sin").map(|b| b.name), Some("sin"));
        assert!(get("sinn").is_none());
    }

    #[test]
    fn signature() {
        let log = get("log").unwrap();
        assert_eq!(log.required(), 1);
        assert_eq!(log.sig_str(), "log(n, base?)");
    }

    #[test]
    fn log_with_base() {
        let log = get("log").unwrap();
        assert!(((log.func)(&[8.0, 2.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert!(factorial(171.0).is_infinite());
    }
}
