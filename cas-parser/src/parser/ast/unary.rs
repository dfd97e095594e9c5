use cas_error::Error;
use crate::parser::{
    ast::{binary::Binary, expr::{Expr, Primary}},
    error::NonFatal,
    token::op::{Associativity, UnaryOp},
    Parser,
};
use std::{fmt, ops::Range};

/// Attempt to parse a unary operator with the correct associativity. Returns a non-fatal error if
/// the operator is not of the correct associativity.
fn try_parse_unary_op(input: &mut Parser, associativity: Associativity) -> Result<UnaryOp, Error> {
    input.try_parse_then::<UnaryOp, _>(|op, input| {
        if op.associativity() == associativity {
            Ok(())
        } else {
            Err(input.error(NonFatal))
        }
    })
}

/// A unary expression, such as `-x` or `2!`. Unary expressions can include nested expressions.
///
/// Unary expressions do not directly implement [`Parse`]. Left-associative operators such as `!`
/// appear after their operand, so parsing the operand first and then looking for operators avoids
/// re-parsing the operand when no operator is present. Use [`Unary::parse_or_lower`] instead.
///
/// [`Parse`]: crate::parser::Parse
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The operand of the unary expression (left or right, depending on the associativity).
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parse the operand of a right-associative unary operator that has already been parsed.
    ///
    /// The operand extends over every following operator that binds tighter than the unary
    /// operator, so `-x^2` is parsed as `-(x^2)`.
    fn parse_right(input: &mut Parser, op: UnaryOp) -> Result<Self, Error> {
        let start_span = op.span.start;
        let operand = input.nested(|input| {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op.precedence())
        })?;
        let end_span = operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span: start_span..end_span,
        })
    }

    /// Parse a primary expression, followed by any number of left-associative unary operators.
    ///
    /// If no operator follows, the primary expression is returned as-is.
    fn parse_left_or_operand(input: &mut Parser) -> Result<Expr, Error> {
        let operand = input.try_parse::<Primary>()?;
        let start_span = operand.span().start;
        let mut result = Expr::from(operand);

        while let Ok(op) = try_parse_unary_op(input, Associativity::Left) {
            input.deepen()?;
            let end_span = op.span.end;
            result = Expr::Unary(Self {
                operand: Box::new(result),
                op,
                span: start_span..end_span,
            });
        }

        Ok(result)
    }

    /// Parses a unary expression, or lower precedence expressions.
    ///
    /// Once a prefix operator has been found, any error in its operand is returned as-is.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        if let Ok(op) = try_parse_unary_op(input, Associativity::Right) {
            return Self::parse_right(input, op).map(Expr::Unary);
        }
        Self::parse_left_or_operand(input)
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op.associativity() {
            Associativity::Left => {
                self.operand.fmt(f)?;
                self.op.fmt(f)
            },
            Associativity::Right => {
                self.op.fmt(f)?;
                self.operand.fmt(f)
            },
        }
    }
}
