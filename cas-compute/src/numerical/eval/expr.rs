use cas_error::Error;
use cas_parser::parser::ast::{assign::Assign, expr::Expr, paren::Paren};
use crate::numerical::ctxt::Ctxt;
use super::Eval;

impl Eval for Expr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Assign(assign) => assign.eval(ctxt),
        }
    }
}

impl Eval for Paren {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        self.innermost().eval(ctxt)
    }
}

/// Binds the value to the target variable, and evaluates to the value.
impl Eval for Assign {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let value = self.value.eval(ctxt)?;
        ctxt.add_var(&self.target.name, value);
        Ok(value)
    }
}
