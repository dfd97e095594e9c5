use cas_error::Error;
use crate::numerical::{
    ctxt::Ctxt,
    error::{UndefinedFunction, UndefinedVariable},
};
use crate::symbolic::expr::{Primary, SymExpr};
use super::{call::check_args, Eval};

/// Symbolic expressions carry no source spans, so errors produced here are unspanned.
impl Eval for SymExpr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            SymExpr::Primary(Primary::Number(n)) => Ok(*n),
            SymExpr::Primary(Primary::Symbol(name)) => ctxt.get_var(name)
                .ok_or_else(|| Error::unspanned(UndefinedVariable { name: name.clone() })),
            SymExpr::Primary(Primary::Call(name, args)) => {
                let Some(builtin) = ctxt.get_func(name) else {
                    return Err(Error::unspanned(UndefinedFunction {
                        name: name.clone(),
                        suggestions: ctxt.get_similar_funcs(name),
                    }));
                };

                check_args(builtin, args.len(), Vec::new)?;

                let args = args.iter()
                    .map(|arg| arg.eval(ctxt))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((builtin.func)(&args))
            },
            SymExpr::Add(terms) => terms.iter()
                .map(|term| term.eval(ctxt))
                .sum(),
            SymExpr::Mul(factors) => factors.iter()
                .map(|factor| factor.eval(ctxt))
                .product(),
            SymExpr::Exp(base, exp) => Ok(base.eval(ctxt)?.powf(exp.eval(ctxt)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_with_variables() {
        let expr = SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::num(3.0), SymExpr::pow(SymExpr::sym("x"), SymExpr::num(2.0))]),
            SymExpr::call("abs", vec![SymExpr::num(-1.0)]),
        ]);
        let mut ctxt = Ctxt::default();
        ctxt.add_var("x", 2.0);
        assert_eq!(expr.eval(&mut ctxt).unwrap(), 13.0);
    }

    #[test]
    fn unspanned_errors() {
        let err = SymExpr::sym("y").eval_default().unwrap_err();
        assert_eq!(err.to_string(), "`y` is not defined");
        assert!(err.spans.is_empty());
    }
}
