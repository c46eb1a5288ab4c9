use std::rc::Rc;

use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenStream},
        parser::core::{Parser, Precedence},
    },
};

impl<T: TokenStream> Parser<T> {
    /// Dispatches on the current token to the matching prefix handler.
    ///
    /// A token with no handler is recorded as
    /// [`ParseError::NoPrefixOperation`].
    pub(super) fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Ident => Some(Expr::Identifier { name: self.current.literal.clone() }),
            TokenKind::Int => self.parse_integer(),
            TokenKind::Str => Some(Expr::StringLiteral(self.current.literal.clone())),
            TokenKind::True => Some(Expr::BooleanLiteral(true)),
            TokenKind::False => Some(Expr::BooleanLiteral(false)),
            TokenKind::Nil => Some(Expr::NilLiteral),
            TokenKind::Bang => self.parse_prefix_operation(PrefixOperator::Not),
            TokenKind::Minus => self.parse_prefix_operation(PrefixOperator::Negate),
            TokenKind::Plus => self.parse_prefix_operation(PrefixOperator::Plus),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => {
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Some(Expr::ArrayLiteral { elements })
            },
            _ => {
                self.record(ParseError::NoPrefixOperation { token:    self.current.literal.clone(),
                                                            position: self.current.position.clone(), });
                None
            },
        }
    }

    fn parse_integer(&mut self) -> Option<Expr> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral(value)),
            Err(_) => {
                self.record(ParseError::InvalidInteger { literal:  self.current.literal.clone(),
                                                         position: self.current.position.clone(), });
                None
            },
        }
    }

    fn parse_prefix_operation(&mut self, operator: PrefixOperator) -> Option<Expr> {
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix { operator,
                            operand: Box::new(operand) })
    }

    /// Parses `( expression )`. Grouping leaves no trace in the tree.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Some(expr)
    }

    /// Parses a conditional expression.
    ///
    /// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
    fn parse_if(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Parses a function literal.
    ///
    /// Grammar: `function := "fun" "(" (IDENT ("," IDENT)*)? ")" block`
    fn parse_function_literal(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(Expr::Function { parameters: Rc::from(parameters),
                              body:       Rc::new(body), })
    }
}
