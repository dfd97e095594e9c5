use cas_error::Error;
use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::NonFatal,
    token::op::{Associativity, BinOp, BinOpKind, Precedence},
    Parser,
};
use std::{fmt, ops::Range};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns true if the next token can start an operand of implicit multiplication, as in
    /// `2x`, `3(x + 1)`, or `x sin(x)`.
    fn implicit_operand_follows(input: &Parser) -> bool {
        input.peek_token().is_some_and(|token| token.kind.starts_primary())
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// If we are parsing the expression `1 + 2 * 3`, we will first parse the left-hand-side `1`,
    /// then the operator `+`, then the right-hand-side `2`. However, the operator after `2` has
    /// higher precedence than `+`, so `2 * 3` must become the right-hand-side of the `1 +` node.
    /// This works by calling into [`Self::parse_expr`] again, with `rhs` as the left-hand-side,
    /// accepting only operators that bind tighter than `op`.
    ///
    /// Right-associative operators (`^`) also accept operators of the same precedence, so that
    /// `2^3^4` becomes `2^(3^4)`.
    fn complete_rhs(input: &mut Parser, op: &BinOp, rhs: Expr) -> Result<Expr, Error> {
        let precedence = match op.associativity() {
            Associativity::Left => op.precedence().tighter(),
            Associativity::Right => op.precedence(),
        };
        input.nested(|input| Self::parse_expr(input, rhs, precedence))
    }

    /// After parsing the left-hand-side of a potential binary expression, parse ahead to see if
    /// there are binary operators with at least the given precedence, and their right-hand-sides.
    ///
    /// When there is no operator but another operand follows, implicit multiplication is
    /// assumed, as long as multiplication is allowed at the given precedence.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let explicit = input.try_parse_then::<BinOp, _>(|op, input| {
                if op.precedence() >= precedence {
                    Ok(())
                } else {
                    Err(input.error(NonFatal))
                }
            });

            let mut op = match explicit {
                Ok(op) => op,
                Err(_) if precedence <= Precedence::Factor && Self::implicit_operand_follows(input) => {
                    BinOp {
                        kind: BinOpKind::Mul,
                        implicit: true,
                        span: lhs.span().end..lhs.span().end,
                    }
                },
                Err(_) => break,
            };

            input.deepen()?;
            let rhs = Unary::parse_or_lower(input)?;
            let rhs = Self::complete_rhs(input, &op, rhs)?;

            if op.implicit {
                op.span = lhs.span().end..rhs.span().start;
            }

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.lhs.fmt(f)?;
        self.op.fmt(f)?;
        self.rhs.fmt(f)
    }
}
