use cas_error::Error;
use cas_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::numerical::{builtin::factorial, ctxt::Ctxt, error::InvalidFactorial, fmt::fmt_number};
use super::Eval;

impl Eval for Unary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;
        match self.op.kind {
            UnaryOpKind::Neg => Ok(-operand),
            UnaryOpKind::Pos => Ok(operand),
            UnaryOpKind::Factorial => {
                if operand < 0.0 || operand.fract() != 0.0 || !operand.is_finite() {
                    return Err(Error::new(vec![self.operand.span()], InvalidFactorial {
                        value: fmt_number(operand),
                    }));
                }
                Ok(factorial(operand))
            },
        }
    }
}
