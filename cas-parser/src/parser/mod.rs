pub mod ast;
pub mod error;
pub mod token;

use cas_error::{Error, ErrorKind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Returns the value of the given expression if it is [`Ok`], otherwise evaluates to the error.
/// Used to try several parsing functions in order.
#[macro_export]
macro_rules! return_if_ok {
    ($expr:expr) => {
        match $expr {
            Ok(value) => return Ok(value),
            Err(err) => err,
        }
    };
}

/// The deepest an expression may nest, counting parentheses, operators, and function calls.
/// Anything deeper is rejected with [`error::ExpressionTooDeep`].
pub const MAX_DEPTH: usize = 64;

/// A high-level parser for math expressions. This is the type to use to parse an arbitrary piece
/// of text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// How deep the parser currently is in the expression.
    depth: usize,

    /// The span at which [`MAX_DEPTH`] was exceeded. Once set, all further nesting fails.
    too_deep: Option<Range<usize>>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
            too_deep: None,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    pub fn skip_whitespace(&mut self) {
        while self.current_token().is_some_and(|token| token.is_whitespace()) {
            self.cursor += 1;
        }
    }

    /// Returns the next non-whitespace token without moving the cursor.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.peek_tokens().next()
    }

    /// Returns the remaining non-whitespace tokens without moving the cursor.
    pub fn peek_tokens(&self) -> impl Iterator<Item = &Token<'source>> {
        self.tokens[self.cursor..].iter().filter(|token| !token.is_whitespace())
    }

    /// Goes one level deeper into the expression. The level is kept until the enclosing
    /// [`Parser::nested`] call returns.
    ///
    /// Returns an error if this would exceed [`MAX_DEPTH`]. The error is sticky: every later call
    /// fails too, so that backtracking does not retry a doomed parse.
    pub fn deepen(&mut self) -> Result<(), Error> {
        if self.too_deep.is_none() && self.depth >= MAX_DEPTH {
            self.too_deep = Some(self.span());
        }

        match &self.too_deep {
            Some(span) => Err(Error::new(vec![span.clone()], error::ExpressionTooDeep)),
            None => {
                self.depth += 1;
                Ok(())
            },
        }
    }

    /// Parses one level deeper with the given function, restoring the depth afterwards.
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let depth = self.depth;
        let result = match self.deepen() {
            Ok(()) => f(self),
            Err(err) => Err(err),
        };
        self.depth = depth;
        result
    }

    /// Returns true if the parser is not inside any expression.
    pub fn is_outermost(&self) -> bool {
        self.depth == 0
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(error::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token.
    ///
    /// Parsing stops at the first value that fails to parse after a delimiter; that error is
    /// returned, since a dangling delimiter is never valid.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    self.cursor = start;
                    return Err(err);
                },
            }

            match self.peek_token() {
                Some(token) if token.kind == delimiter => {
                    self.skip_whitespace();
                    self.cursor += 1;
                },
                _ => return Ok(values),
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. The cursor is restored if parsing fails.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = |input: &mut Parser<'source>| -> Result<T, Error> {
            let value = T::parse(input)?;
            predicate(&value, input)?;
            Ok(value)
        };

        match compute(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    ///
    /// A leftover `=` means the text before it was not a valid assignment target, and a leftover
    /// `)` has no matching `(`; both get dedicated errors. An expression nested deeper than
    /// [`MAX_DEPTH`] is always reported as such, whatever else went wrong.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self);
        if let Some(span) = &self.too_deep {
            return Err(Error::new(vec![span.clone()], error::ExpressionTooDeep));
        }
        let value = value?;
        self.skip_whitespace();

        match self.current_token().map(|token| token.kind) {
            None => Ok(value),
            Some(TokenKind::Assign) => Err(self.error(error::InvalidAssignment)),
            Some(TokenKind::CloseParen) => Err(self.error(error::UnclosedParenthesis { opening: false })),
            Some(_) => Err(self.error(error::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        assign::Assign,
        binary::Binary,
        call::Call,
        expr::Expr,
        literal::{Literal, LitNum, LitSym},
        paren::Paren,
        unary::Unary,
    };
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    fn num(value: f64, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Number(LitNum { value, span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    fn bin(lhs: Expr, kind: BinOpKind, implicit: bool, op_span: Range<usize>, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op: BinOp { kind, implicit, span: op_span },
            rhs: Box::new(rhs),
            span,
        })
    }

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    fn parse_err(source: &str) -> Error {
        Parser::new(source).try_parse_full::<Expr>().unwrap_err()
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16"), num(16.0, 0..2));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14"), num(3.14, 0..4));
        assert_eq!(parse(".5"), num(0.5, 0..2));
        assert_eq!(parse("3."), num(3.0, 0..2));
    }

    #[test]
    fn literal_symbol() {
        assert_eq!(parse("pi"), sym("pi", 0..2));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(parse("  x \n"), sym("x", 2..3));
    }

    #[test]
    fn binary_left_associativity() {
        assert_eq!(
            parse("3 * x * 5"),
            bin(
                bin(num(3.0, 0..1), BinOpKind::Mul, false, 2..3, sym("x", 4..5)),
                BinOpKind::Mul,
                false,
                6..7,
                num(5.0, 8..9),
            ),
        );
    }

    #[test]
    fn binary_right_associativity() {
        assert_eq!(
            parse("2^3^4"),
            bin(
                num(2.0, 0..1),
                BinOpKind::Exp,
                false,
                1..2,
                bin(num(3.0, 2..3), BinOpKind::Exp, false, 3..4, num(4.0, 4..5)),
            ),
        );
    }

    #[test]
    fn binary_precedence() {
        assert_eq!(
            parse("1 + 2 * 3"),
            bin(
                num(1.0, 0..1),
                BinOpKind::Add,
                false,
                2..3,
                bin(num(2.0, 4..5), BinOpKind::Mul, false, 6..7, num(3.0, 8..9)),
            ),
        );
        assert_eq!(
            parse("1 * 2 - 3"),
            bin(
                bin(num(1.0, 0..1), BinOpKind::Mul, false, 2..3, num(2.0, 4..5)),
                BinOpKind::Sub,
                false,
                6..7,
                num(3.0, 8..9),
            ),
        );
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(
            parse("3x^2"),
            bin(
                num(3.0, 0..1),
                BinOpKind::Mul,
                true,
                1..1,
                bin(sym("x", 1..2), BinOpKind::Exp, false, 2..3, num(2.0, 3..4)),
            ),
        );
    }

    #[test]
    fn implicit_multiplication_with_paren() {
        assert_eq!(
            parse("2(x + 1)"),
            bin(
                num(2.0, 0..1),
                BinOpKind::Mul,
                true,
                1..1,
                Expr::Paren(Paren {
                    expr: Box::new(bin(sym("x", 2..3), BinOpKind::Add, false, 4..5, num(1.0, 6..7))),
                    span: 1..8,
                }),
            ),
        );
    }

    #[test]
    fn implicit_multiplication_binds_tighter_than_add() {
        assert_eq!(
            parse("1 + 2x"),
            bin(
                num(1.0, 0..1),
                BinOpKind::Add,
                false,
                2..3,
                bin(num(2.0, 4..5), BinOpKind::Mul, true, 5..5, sym("x", 5..6)),
            ),
        );
    }

    #[test]
    fn neg_binds_looser_than_exp() {
        assert_eq!(
            parse("-x^2"),
            Expr::Unary(Unary {
                operand: Box::new(bin(sym("x", 1..2), BinOpKind::Exp, false, 2..3, num(2.0, 3..4))),
                op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
                span: 0..4,
            }),
        );
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(
            parse("2^-1"),
            bin(
                num(2.0, 0..1),
                BinOpKind::Exp,
                false,
                1..2,
                Expr::Unary(Unary {
                    operand: Box::new(num(1.0, 3..4)),
                    op: UnaryOp { kind: UnaryOpKind::Neg, span: 2..3 },
                    span: 2..4,
                }),
            ),
        );
    }

    #[test]
    fn factorial_chain() {
        assert_eq!(
            parse("3!!"),
            Expr::Unary(Unary {
                operand: Box::new(Expr::Unary(Unary {
                    operand: Box::new(num(3.0, 0..1)),
                    op: UnaryOp { kind: UnaryOpKind::Factorial, span: 1..2 },
                    span: 0..2,
                })),
                op: UnaryOp { kind: UnaryOpKind::Factorial, span: 2..3 },
                span: 0..3,
            }),
        );
    }

    #[test]
    fn function_call() {
        assert_eq!(
            parse("log(8, 2)"),
            Expr::Call(Call {
                name: LitSym { name: "log".to_string(), span: 0..3 },
                args: vec![num(8.0, 4..5), num(2.0, 7..8)],
                span: 0..9,
                paren_span: 3..9,
            }),
        );
    }

    #[test]
    fn function_call_no_args() {
        assert_eq!(
            parse("f()"),
            Expr::Call(Call {
                name: LitSym { name: "f".to_string(), span: 0..1 },
                args: vec![],
                span: 0..3,
                paren_span: 1..3,
            }),
        );
    }

    #[test]
    fn assignment() {
        assert_eq!(
            parse("x = 2y"),
            Expr::Assign(Assign {
                target: LitSym { name: "x".to_string(), span: 0..1 },
                value: Box::new(bin(num(2.0, 4..5), BinOpKind::Mul, true, 5..5, sym("y", 5..6))),
                span: 0..6,
            }),
        );
    }

    #[test]
    fn display_round_trips_source_shape() {
        assert_eq!(parse("3x^2 + sin(x) / (1 - x)").to_string(), "3x^2 + sin(x) / (1 - x)");
        assert_eq!(parse("-2!").to_string(), "-2!");
    }

    #[test]
    fn error_empty_input() {
        let err = parse_err("");
        assert_eq!(err.to_string(), "unexpected end of input");
    }

    #[test]
    fn error_dangling_operator() {
        let err = parse_err("2 +");
        assert_eq!(err.to_string(), "unexpected end of input");
        assert_eq!(err.spans, vec![3..3]);
    }

    #[test]
    fn error_unclosed_paren() {
        let err = parse_err("(1 + 2");
        assert_eq!(err.to_string(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn error_unopened_paren() {
        let err = parse_err("1 + 2)");
        assert_eq!(err.to_string(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn error_empty_paren() {
        let err = parse_err("2 * ()");
        assert_eq!(err.to_string(), "missing expression inside parenthesis");
    }

    #[test]
    fn error_invalid_assignment() {
        let err = parse_err("2x + 3 = 4");
        assert_eq!(err.to_string(), "invalid assignment");
        assert_eq!(err.spans, vec![7..8]);
    }

    #[test]
    fn nesting_within_limit() {
        let source = format!("{}x{}", "(".repeat(40), ")".repeat(40));
        assert_eq!(parse(&source).depth(), 41);

        let sum = vec!["1"; 50].join(" + ");
        assert_eq!(parse(&sum).depth(), 50);
    }

    #[test]
    fn error_deep_parentheses() {
        let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = parse_err(&source);
        assert_eq!(err.to_string(), "expression is nested too deeply");
    }

    #[test]
    fn error_long_chains() {
        let sum = vec!["1"; 10_000].join("+");
        assert_eq!(parse_err(&sum).to_string(), "expression is nested too deeply");

        let negations = format!("{}1", "-".repeat(10_000));
        assert_eq!(parse_err(&negations).to_string(), "expression is nested too deeply");

        let factorials = format!("3{}", "!".repeat(10_000));
        assert_eq!(parse_err(&factorials).to_string(), "expression is nested too deeply");
    }

    #[test]
    fn error_deep_tree_from_short_chains() {
        // every group adds about 20 levels to the tree while the parser itself stays shallow
        let group = vec!["1"; 20].join(" + ");
        let mut source = group.clone();
        for _ in 0..5 {
            source = format!("({}) + {}", source, group);
        }
        assert_eq!(parse_err(&source).to_string(), "expression is nested too deeply");
    }

    #[test]
    fn error_nested_calls_fail_once() {
        let source = format!("{}1 +{}", "f(".repeat(40), ")".repeat(40));
        assert_eq!(parse_err(&source).to_string(), "unexpected token");
    }

    #[test]
    fn error_unknown_symbol() {
        let err = parse_err("2 + $");
        assert_eq!(err.to_string(), "unexpected token");
        assert_eq!(err.spans, vec![4..5]);
    }
}
