use cas_error::Error;
use cas_parser::parser::{ast::binary::Binary, token::op::BinOpKind};
use crate::numerical::ctxt::Ctxt;
use super::Eval;

/// The remainder of `lhs / rhs`, taking the sign of the divisor. The remainder of division by zero
/// is the dividend itself.
fn modulo(lhs: f64, rhs: f64) -> f64 {
    if rhs == 0.0 {
        lhs
    } else {
        lhs - rhs * (lhs / rhs).floor()
    }
}

/// Applies the operator to the evaluated operands.
pub(crate) fn eval_operator(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOpKind::Exp => lhs.powf(rhs),
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => lhs / rhs,
        BinOpKind::Mod => modulo(lhs, rhs),
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
    }
}

impl Eval for Binary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let lhs = self.lhs.eval(ctxt)?;
        let rhs = self.rhs.eval(ctxt)?;
        Ok(eval_operator(self.op.kind, lhs, rhs))
    }
}
