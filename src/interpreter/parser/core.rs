use std::mem;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind, TokenStream},
};

/// Binding power of operators, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting point of every expression.
    Lowest,
    /// `x = value`
    Assign,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `-x`, `!x` and `+x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// The precedence of `kind` when it appears in infix position. Tokens
    /// that never continue an expression map to [`Precedence::Lowest`].
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Assign => Self::Assign,
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// An error-recovering Pratt parser.
///
/// The parser looks at two tokens at a time: `current`, the token the active
/// production is positioned on, and `peek`, the one right after it. Failed
/// productions record a [`ParseError`] and yield `None`; the statement loop
/// then moves on so later mistakes are reported in the same pass.
pub struct Parser<T: TokenStream> {
    tokens:             T,
    pub(super) current: Token,
    pub(super) peek:    Token,
    errors:             Vec<ParseError>,
}

impl<T: TokenStream> Parser<T> {
    /// Creates a parser, priming `current` and `peek` from `tokens`.
    pub fn new(mut tokens: T) -> Self {
        let current = Self::pull(&mut tokens);
        let peek = Self::pull(&mut tokens);
        Self { tokens,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Pulls the next token that is not a comment.
    fn pull(tokens: &mut T) -> Token {
        loop {
            let token = tokens.next_token();
            if token.kind != TokenKind::Comment {
                return token;
            }
        }
    }

    /// Advances by one token.
    pub(super) fn next_token(&mut self) {
        let next = Self::pull(&mut self.tokens);
        self.current = mem::replace(&mut self.peek, next);
    }

    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the next token is `kind`; otherwise records an
    /// [`ParseError::UnexpectedToken`] and returns `None`.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.record(ParseError::UnexpectedToken { expected: kind,
                                                      found:    self.peek.kind,
                                                      position: self.peek.position.clone(), });
            None
        }
    }

    /// Records a parse error.
    pub(super) fn record(&mut self, error: ParseError) {
        tracing::debug!(position = %error.position(), %error, "parse error");
        self.errors.push(error);
    }

    /// Parses statements until the end of input.
    ///
    /// Statements whose production failed are left out of the program; their
    /// errors are available through [`Parser::into_errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Program { statements }
    }

    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// The prefix handler for the current token produces the left operand;
    /// then, while the next token is an infix operator stronger than
    /// `precedence`, it is consumed and folded into the left operand. Right
    /// operands recurse at the operator's own precedence, which makes every
    /// binary operator left-associative.
    ///
    /// # Parameters
    /// - `precedence`: The binding power of the operator to the left of this
    ///   expression, or [`Precedence::Lowest`].
    ///
    /// # Returns
    /// The expression, or `None` if a sub-production failed.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Consumes the parser, returning the collected errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

/// Parses a whole token stream.
///
/// # Parameters
/// - `tokens`: Any token source, usually a
///   [`Lexer`](crate::interpreter::lexer::Lexer).
///
/// # Returns
/// The (possibly partial) program and every error found. The program should
/// not be evaluated when the error list is not empty.
///
/// # Example
/// ```
/// use lainoa::interpreter::{lexer::Lexer, parser::parse};
///
/// let (program, errors) = parse(Lexer::new("let x = 1 + 2 * 3;", "example.ln"));
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub fn parse<T: TokenStream>(tokens: T) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.into_errors())
}

