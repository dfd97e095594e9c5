use cas_error::Error;
use crate::{
    parser::{
        error::UnexpectedToken,
        token::{Name, Number},
        Parse,
        Parser,
    },
    return_if_ok,
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// A number literal, such as `2`, `3.5`, or `.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let number = input.try_parse::<Number>()?;

        // the tokenizer only produces digit sequences with at most one `.`, and a trailing or
        // leading `.` is accepted by `f64::from_str`
        let value = number.lexeme.parse::<f64>().map_err(|_| {
            Error::new(vec![number.span.clone()], UnexpectedToken {
                expected: &[TokenKind::Number],
                found: TokenKind::Number,
            })
        })?;

        Ok(Self {
            value,
            span: number.span,
        })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol / identifier literal, such as `x` or `pi`. Symbols are used to represent variables and
/// constants, and the names of functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<Name>().map(|name| Self {
            name: name.lexeme,
            span: name.span,
        })
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents a literal value in an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// A symbol / identifier literal.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = return_if_ok!(input.try_parse::<LitNum>().map(Literal::Number));
        input.try_parse::<LitSym>().map(Literal::Symbol)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}
