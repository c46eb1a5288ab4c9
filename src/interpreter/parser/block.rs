use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenStream},
        parser::core::Parser,
    },
};

impl<T: TokenStream> Parser<T> {
    /// Parses a block delimited by braces.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// The parser must be positioned on the opening brace and finishes on
    /// the closing one. Reaching the end of input first is reported as
    /// [`ParseError::UnterminatedBlock`], but the statements read so far are
    /// still returned.
    pub(super) fn parse_block(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        if !self.current_is(TokenKind::RBrace) {
            self.record(ParseError::UnterminatedBlock { found:    self.current.kind,
                                                        position: self.current.position.clone(), });
        }

        BlockStatement { statements }
    }
}
