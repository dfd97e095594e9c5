use cas_error::Error;
use crate::{
    parser::{
        ast::{
            assign::Assign,
            binary::Binary,
            call::Call,
            literal::Literal,
            paren::Paren,
            unary::Unary,
        },
        error::{ExpressionTooDeep, UnexpectedEof, UnexpectedToken},
        token::op::Precedence,
        Parse,
        Parser,
        MAX_DEPTH,
    },
    return_if_ok,
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// Represents any kind of expression that can appear in a math question.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(-1)`.
    Call(Call),

    /// A unary operation, such as `-1` or `3!`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// An assignment of a variable, such as `x = 1`.
    Assign(Assign),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
            Expr::Assign(assign) => assign.span(),
        }
    }

    /// Returns the number of levels in the expression tree. A literal has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((expr, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            match expr {
                Expr::Literal(_) => {},
                Expr::Paren(paren) => stack.push((&*paren.expr, depth + 1)),
                Expr::Call(call) => stack.extend(call.args.iter().map(|arg| (arg, depth + 1))),
                Expr::Unary(unary) => stack.push((&*unary.operand, depth + 1)),
                Expr::Binary(binary) => {
                    stack.push((&*binary.lhs, depth + 1));
                    stack.push((&*binary.rhs, depth + 1));
                },
                Expr::Assign(assign) => stack.push((&*assign.value, depth + 1)),
            }
        }

        deepest
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let outermost = input.is_outermost();
        let expr = input.nested(|input| {
            let _ = return_if_ok!(input.try_parse::<Assign>().map(Self::Assign));
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, Precedence::Any)
        })?;

        // long operator chains deepen the tree without deepening the parser
        if outermost && expr.depth() > MAX_DEPTH {
            return Err(Error::new(vec![expr.span()], ExpressionTooDeep));
        }

        Ok(expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Assign(assign) => assign.fmt(f),
        }
    }
}

/// The token kinds that can begin a [`Primary`] expression.
const PRIMARY_START: &[TokenKind] = &[TokenKind::Number, TokenKind::Name, TokenKind::OpenParen];

/// Represents a primary expression: the operands that operators apply to.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(-1)`.
    Call(Call),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
            Primary::Call(call) => call.span(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let Some((kind, span)) = input.peek_token().map(|token| (token.kind, token.span.clone())) else {
            return Err(Error::new(vec![input.eof_span()], UnexpectedEof));
        };

        match kind {
            TokenKind::Name => match input.try_parse::<Call>() {
                Ok(call) => Ok(Self::Call(call)),
                // `name(` that is not a valid call is not a valid product either
                Err(err) if Call::starts_here(input) => Err(err),
                Err(_) => input.try_parse::<Literal>().map(Self::Literal),
            },
            TokenKind::Number => input.try_parse::<Literal>().map(Self::Literal),
            TokenKind::OpenParen => input.try_parse::<Paren>().map(Self::Paren),
            found => Err(Error::new(vec![span], UnexpectedToken {
                expected: PRIMARY_START,
                found,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
            Primary::Call(call) => Self::Call(call),
        }
    }
}
