use cas_error::Error;
use cas_parser::parser::ast::literal::Literal;
use crate::numerical::{ctxt::Ctxt, error::UndefinedVariable};
use super::Eval;

impl Eval for Literal {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Literal::Number(num) => Ok(num.value),
            Literal::Symbol(sym) => ctxt.get_var(&sym.name).ok_or_else(|| {
                Error::new(vec![sym.span.clone()], UndefinedVariable {
                    name: sym.name.clone(),
                })
            }),
        }
    }
}
