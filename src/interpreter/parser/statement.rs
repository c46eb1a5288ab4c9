use crate::{
    ast::Statement,
    interpreter::{
        lexer::{TokenKind, TokenStream},
        parser::core::{Parser, Precedence},
    },
};

impl<T: TokenStream> Parser<T> {
    /// Parses the statement starting at the current token.
    ///
    /// Grammar:
    /// ```text
    ///     statement := "let" IDENT "=" expression ";"?
    ///                | "return" expression ";"?
    ///                | expression ";"?
    /// ```
    /// On return the parser is positioned on the last token of the statement.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.current.literal.clone();
        self.expect_peek(TokenKind::Assign)?;

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Expression { expr })
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
