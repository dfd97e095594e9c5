//! The flattened expression tree used for symbolic manipulation.

mod display;

use cas_error::Error;
use cas_parser::parser::{
    ast::{Call, Expr as AstExpr, Literal},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::numerical::Eval;
use std::ops::{Add, Mul, Neg};
use super::error::UnsupportedExpression;

/// A single term / factor, such as a number, variable, or function call.
#[derive(Debug, Clone)]
pub enum Primary {
    Number(f64),
    Symbol(String),
    Call(String, Vec<SymExpr>),
}

impl PartialEq for Primary {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Primary::Number(lhs), Primary::Number(rhs)) => lhs == rhs,
            (Primary::Symbol(lhs), Primary::Symbol(rhs)) => lhs == rhs,
            (Primary::Call(lhs_name, lhs_args), Primary::Call(rhs_name, rhs_args)) => {
                lhs_name == rhs_name && lhs_args == rhs_args
            },
            _ => false,
        }
    }
}

/// An expression, represented as a flat tree of terms and factors.
///
/// Two expressions are equal if they are **strictly equal**: they have the same structure, and the
/// terms of sums and the factors of products are the same up to reordering. `x + y` and `y + x`
/// are equal, while `2x` and `x + x` are not, even though they are mathematically equivalent.
#[derive(Debug, Clone)]
pub enum SymExpr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<SymExpr>),

    /// Multiple factors multiplied together.
    Mul(Vec<SymExpr>),

    /// An expression raised to the power of another expression.
    Exp(Box<SymExpr>, Box<SymExpr>),
}

/// Returns true if both lists contain the same expressions, regardless of order.
fn same_elements(lhs: &[SymExpr], rhs: &[SymExpr]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut used = vec![false; rhs.len()];
    lhs.iter().all(|item| {
        let found = rhs.iter()
            .enumerate()
            .find(|(i, other)| !used[*i] && *other == item)
            .map(|(i, _)| i);
        match found {
            Some(i) => {
                used[i] = true;
                true
            },
            None => false,
        }
    })
}

impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SymExpr::Primary(lhs), SymExpr::Primary(rhs)) => lhs == rhs,
            (SymExpr::Add(lhs), SymExpr::Add(rhs))
                | (SymExpr::Mul(lhs), SymExpr::Mul(rhs)) => same_elements(lhs, rhs),
            (SymExpr::Exp(lhs_base, lhs_exp), SymExpr::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            _ => false,
        }
    }
}

impl SymExpr {
    /// Creates a number.
    pub fn num(n: f64) -> Self {
        SymExpr::Primary(Primary::Number(n))
    }

    /// Creates a symbol with the given name.
    pub fn sym(name: impl Into<String>) -> Self {
        SymExpr::Primary(Primary::Symbol(name.into()))
    }

    /// Creates a call to the function with the given name.
    pub fn call(name: impl Into<String>, args: Vec<SymExpr>) -> Self {
        SymExpr::Primary(Primary::Call(name.into(), args))
    }

    /// Creates `base ^ exp`.
    pub fn pow(base: SymExpr, exp: SymExpr) -> Self {
        SymExpr::Exp(Box::new(base), Box::new(exp))
    }

    /// Creates `self ^ -1`.
    pub fn recip(self) -> Self {
        SymExpr::pow(self, SymExpr::num(-1.0))
    }

    /// Returns the number if the expression is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SymExpr::Primary(Primary::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns the symbol name if the expression is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            SymExpr::Primary(Primary::Symbol(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is the given number.
    pub fn is_number(&self, n: f64) -> bool {
        self.as_number() == Some(n)
    }

    /// If the expression is an [`SymExpr::Add`] or [`SymExpr::Mul`] with zero or one elements,
    /// reduces it to the additive / multiplicative identity, or the single element.
    pub fn downgrade(self) -> Self {
        match self {
            SymExpr::Add(mut terms) if terms.len() <= 1 => terms.pop().unwrap_or(SymExpr::num(0.0)),
            SymExpr::Mul(mut factors) if factors.len() <= 1 => {
                factors.pop().unwrap_or(SymExpr::num(1.0))
            },
            expr => expr,
        }
    }

    /// Returns true if the expression contains the given symbol anywhere.
    pub fn depends_on(&self, var: &str) -> bool {
        match self {
            SymExpr::Primary(Primary::Number(_)) => false,
            SymExpr::Primary(Primary::Symbol(name)) => name == var,
            SymExpr::Primary(Primary::Call(_, args)) => args.iter().any(|arg| arg.depends_on(var)),
            SymExpr::Add(exprs) | SymExpr::Mul(exprs) => exprs.iter().any(|expr| expr.depends_on(var)),
            SymExpr::Exp(base, exp) => base.depends_on(var) || exp.depends_on(var),
        }
    }

    /// If the expression is visibly negative (a negative number, or a product whose leading
    /// factor is a negative number), returns its negation.
    pub fn negated(&self) -> Option<SymExpr> {
        match self {
            SymExpr::Primary(Primary::Number(n)) if *n < 0.0 => Some(SymExpr::num(-n)),
            SymExpr::Mul(factors) => {
                let (first, rest) = factors.split_first()?;
                let n = first.as_number().filter(|n| *n < 0.0)?;
                if n == -1.0 {
                    Some(SymExpr::Mul(rest.to_vec()).downgrade())
                } else {
                    let mut factors = factors.clone();
                    factors[0] = SymExpr::num(-n);
                    Some(SymExpr::Mul(factors))
                }
            },
            _ => None,
        }
    }
}

impl Add for SymExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (SymExpr::Primary(Primary::Number(lhs)), SymExpr::Primary(Primary::Number(rhs))) => {
                SymExpr::num(lhs + rhs)
            },
            (SymExpr::Add(mut lhs), SymExpr::Add(rhs)) => {
                lhs.extend(rhs);
                SymExpr::Add(lhs)
            },
            (SymExpr::Add(mut terms), other) => {
                terms.push(other);
                SymExpr::Add(terms)
            },
            (other, SymExpr::Add(mut terms)) => {
                terms.insert(0, other);
                SymExpr::Add(terms)
            },
            (lhs, rhs) => SymExpr::Add(vec![lhs, rhs]),
        }
    }
}

impl Mul for SymExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (SymExpr::Primary(Primary::Number(lhs)), SymExpr::Primary(Primary::Number(rhs))) => {
                SymExpr::num(lhs * rhs)
            },
            (SymExpr::Mul(mut lhs), SymExpr::Mul(rhs)) => {
                lhs.extend(rhs);
                SymExpr::Mul(lhs)
            },
            (SymExpr::Mul(mut factors), other) => {
                factors.push(other);
                SymExpr::Mul(factors)
            },
            (other, SymExpr::Mul(mut factors)) => {
                factors.insert(0, other);
                SymExpr::Mul(factors)
            },
            (lhs, rhs) => SymExpr::Mul(vec![lhs, rhs]),
        }
    }
}

impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            SymExpr::Primary(Primary::Number(n)) => SymExpr::num(-n),
            expr => SymExpr::num(-1.0) * expr,
        }
    }
}

/// Creates the error returned when an expression has no symbolic counterpart.
fn unsupported(expr: &AstExpr, what: &'static str) -> Error {
    Error::new(vec![expr.span()], UnsupportedExpression { what })
}

/// Converts an expression with no symbolic form to its numeric value. Only expressions without
/// variables have one.
fn constant(expr: &AstExpr, what: &'static str) -> Result<SymExpr, Error> {
    expr.eval_default()
        .map(SymExpr::num)
        .map_err(|_| unsupported(expr, what))
}

impl TryFrom<&Call> for SymExpr {
    type Error = Error;

    fn try_from(call: &Call) -> Result<Self, Self::Error> {
        let args = call.args
            .iter()
            .map(SymExpr::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SymExpr::call(call.name.name.clone(), args))
    }
}

impl TryFrom<&AstExpr> for SymExpr {
    type Error = Error;

    fn try_from(expr: &AstExpr) -> Result<Self, Self::Error> {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Ok(SymExpr::num(num.value)),
            AstExpr::Literal(Literal::Symbol(sym)) => Ok(SymExpr::sym(sym.name.clone())),
            AstExpr::Paren(paren) => SymExpr::try_from(paren.innermost()),
            AstExpr::Call(call) => SymExpr::try_from(call),
            AstExpr::Unary(unary) if unary.op.kind == UnaryOpKind::Factorial => {
                constant(expr, "a factorial")
            },
            AstExpr::Unary(unary) => {
                let operand = SymExpr::try_from(&*unary.operand)?;
                match unary.op.kind {
                    UnaryOpKind::Neg => Ok(-operand),
                    _ => Ok(operand),
                }
            },
            AstExpr::Binary(bin) if bin.op.kind == BinOpKind::Mod => constant(expr, "a remainder"),
            AstExpr::Binary(bin) => {
                let lhs = SymExpr::try_from(&*bin.lhs)?;
                let rhs = SymExpr::try_from(&*bin.rhs)?;
                match bin.op.kind {
                    BinOpKind::Exp => Ok(SymExpr::pow(lhs, rhs)),
                    BinOpKind::Mul => Ok(lhs * rhs),
                    BinOpKind::Div => Ok(lhs * rhs.recip()),
                    BinOpKind::Sub => Ok(lhs + -rhs),
                    _ => Ok(lhs + rhs),
                }
            },
            AstExpr::Assign(_) => Err(unsupported(expr, "an assignment")),
        }
    }
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn convert(source: &str) -> Result<SymExpr, Error> {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        SymExpr::try_from(&ast)
    }

    fn x() -> SymExpr {
        SymExpr::sym("x")
    }

    #[test]
    fn flattens_sums_and_products() {
        assert_eq!(convert("x + (1 + x)").unwrap(), SymExpr::Add(vec![
            x(),
            SymExpr::num(1.0),
            x(),
        ]));
        assert_eq!(convert("2x * (3x)").unwrap(), SymExpr::Mul(vec![
            SymExpr::num(2.0),
            x(),
            SymExpr::num(3.0),
            x(),
        ]));
    }

    #[test]
    fn rewrites_subtraction_and_division() {
        assert_eq!(convert("x - 3").unwrap(), SymExpr::Add(vec![x(), SymExpr::num(-3.0)]));
        assert_eq!(convert("1 / x").unwrap(), SymExpr::Mul(vec![
            SymExpr::num(1.0),
            SymExpr::pow(x(), SymExpr::num(-1.0)),
        ]));
        assert_eq!(convert("-x").unwrap(), SymExpr::Mul(vec![SymExpr::num(-1.0), x()]));
    }

    #[test]
    fn constant_numbers_fold() {
        assert_eq!(convert("2 + 3").unwrap(), SymExpr::num(5.0));
        assert_eq!(convert("-(4)").unwrap(), SymExpr::num(-4.0));
    }

    #[test]
    fn strict_equality_ignores_order() {
        assert_eq!(convert("x + sin(x)").unwrap(), convert("sin(x) + x").unwrap());
        assert_ne!(convert("2x").unwrap(), convert("x + x").unwrap());
    }

    #[test]
    fn unsupported_expressions() {
        let err = convert("x!").unwrap_err();
        assert_eq!(err.to_string(), "cannot manipulate a factorial symbolically");
        assert_eq!(err.spans, vec![0..2]);

        assert!(convert("x % 2").is_err());
        assert!(convert("x = 2").is_err());
    }

    #[test]
    fn constant_subtrees_become_numbers() {
        assert_eq!(convert("3!").unwrap(), SymExpr::num(6.0));
        assert_eq!(convert("5 % 2").unwrap(), SymExpr::num(1.0));
        assert_eq!(convert("x + 3!").unwrap(), SymExpr::Add(vec![x(), SymExpr::num(6.0)]));
    }

    #[test]
    fn dependence_on_variable() {
        assert!(convert("sin(2x) + 1").unwrap().depends_on("x"));
        assert!(!convert("y^2 + pi").unwrap().depends_on("x"));
    }
}
