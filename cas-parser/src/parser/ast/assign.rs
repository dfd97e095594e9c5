use cas_error::Error;
use crate::parser::{
    ast::{expr::Expr, literal::LitSym},
    token::Assign as AssignToken,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

/// An assignment of a value to a variable, such as `x = 5`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// The variable being assigned to.
    pub target: LitSym,

    /// The value to assign.
    pub value: Box<Expr>,

    /// The region of the source code that this assignment expression was parsed from.
    pub span: Range<usize>,
}

impl Assign {
    /// Returns the span of the assignment expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Assign {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let target = input.try_parse::<LitSym>()?;
        input.try_parse::<AssignToken>()?;
        let value = input.try_parse::<Expr>()?;

        // use `target` here before it is moved into the struct
        let span = target.span.start..value.span().end;
        Ok(Self {
            target,
            value: Box::new(value),
            span,
        })
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}
