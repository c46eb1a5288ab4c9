use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenStream},
        parser::core::{Parser, Precedence},
    },
};

impl<T: TokenStream> Parser<T> {
    /// Parses a comma-separated list of expressions closed by `end`.
    ///
    /// Shared by call arguments and array literals. The parser must be
    /// positioned on the opening delimiter and finishes on `end`. An
    /// immediately encountered `end` produces an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? end`
    pub(super) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(items)
    }

    /// Parses the parameter names of a function literal, positioned on `(`.
    ///
    /// A parameter that is not an identifier is recorded as
    /// [`ParseError::InvalidParameter`] and kept by its literal text so the
    /// remaining parameters are still checked.
    pub(super) fn parse_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.parameter_name());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.parameter_name());
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    fn parameter_name(&mut self) -> String {
        if !self.current_is(TokenKind::Ident) {
            self.record(ParseError::InvalidParameter { found:    self.current.literal.clone(),
                                                       position: self.current.position.clone(), });
        }
        self.current.literal.clone()
    }
}
