use cas_error::Error;
use cas_parser::parser::ast::call::Call;
use crate::numerical::{
    builtin::Builtin,
    ctxt::Ctxt,
    error::{MissingArgument, TooManyArguments, UndefinedFunction},
};
use std::ops::Range;
use super::Eval;

/// Checks the number of arguments against the signature of the builtin function.
///
/// Errors point at the function name and the parentheses of the call.
pub(crate) fn check_args(
    builtin: &Builtin,
    given: usize,
    spans: impl FnOnce() -> Vec<Range<usize>>,
) -> Result<(), Error> {
    if given > builtin.sig.len() {
        return Err(Error::new(spans(), TooManyArguments {
            name: builtin.name.to_string(),
            signature: builtin.sig_str(),
            given,
        }));
    }

    let required = builtin.required();
    if given < required {
        return Err(Error::new(spans(), MissingArgument {
            name: builtin.name.to_string(),
            signature: builtin.sig_str(),
            index: given,
            given,
        }));
    }

    Ok(())
}

impl Eval for Call {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let Some(builtin) = ctxt.get_func(&self.name.name) else {
            return Err(Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: self.name.name.clone(),
                suggestions: ctxt.get_similar_funcs(&self.name.name),
            }));
        };

        check_args(builtin, self.args.len(), || self.outer_span().to_vec())?;

        let args = self.args
            .iter()
            .map(|arg| arg.eval(ctxt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((builtin.func)(&args))
    }
}
