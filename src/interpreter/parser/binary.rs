use crate::{
    ast::{Expr, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenStream},
        parser::core::{Parser, Precedence},
    },
};

impl<T: TokenStream> Parser<T> {
    /// Dispatches on the current token, an operator following `left`, to the
    /// matching infix handler.
    ///
    /// Only called for tokens with a precedence above
    /// [`Precedence::Lowest`], so every other token is unreachable here and
    /// simply hands `left` back.
    pub(super) fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let operator = match self.current.kind {
            TokenKind::LParen => return self.parse_call(left),
            TokenKind::LBracket => return self.parse_index(left),
            TokenKind::Assign => return self.parse_assign(left),
            TokenKind::Plus => InfixOperator::Add,
            TokenKind::Minus => InfixOperator::Sub,
            TokenKind::Asterisk => InfixOperator::Mul,
            TokenKind::Slash => InfixOperator::Div,
            TokenKind::Lt => InfixOperator::Less,
            TokenKind::Gt => InfixOperator::Greater,
            TokenKind::Eq => InfixOperator::Equal,
            TokenKind::NotEq => InfixOperator::NotEqual,
            _ => return Some(left),
        };

        let precedence = Precedence::of(self.current.kind);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix { left: Box::new(left),
                           operator,
                           right: Box::new(right) })
    }

    fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expr::Call { callee: Box::new(callee),
                          arguments })
    }

    fn parse_index(&mut self, collection: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Some(Expr::Index { collection: Box::new(collection),
                           index:      Box::new(index), })
    }

    /// Parses `name = value`. The value binds as loosely as possible, so
    /// `a = b = c` assigns right to left.
    fn parse_assign(&mut self, target: Expr) -> Option<Expr> {
        let position = self.current.position.clone();
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        match target {
            Expr::Identifier { name } => Some(Expr::Assign { name,
                                                             value: Box::new(value) }),
            other => {
                self.record(ParseError::InvalidAssignmentTarget { target: other.to_string(),
                                                                  position });
                None
            },
        }
    }
}
