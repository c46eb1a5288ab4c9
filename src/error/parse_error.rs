use thiserror::Error;

use crate::interpreter::lexer::{Position, TokenKind};

/// Represents all errors that can be recorded while parsing.
///
/// The `Display` form is the bare message; use [`ParseError::position`] to
/// find out where in the source the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The kind the grammar asked for.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// Where the unexpected token starts.
        position: Position,
    },
    /// No expression can start with this token.
    #[error("prefix operation `{token}` not recognized")]
    NoPrefixOperation {
        /// The literal text of the token.
        token:    String,
        /// Where the token starts.
        position: Position,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("could not parse `{literal}` as integer")]
    InvalidInteger {
        /// The literal text of the integer.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// A function parameter list contained something other than a name.
    #[error("function parameters can only be identifiers, found `{found}` instead")]
    InvalidParameter {
        /// The literal text found in place of an identifier.
        found:    String,
        /// Where the parameter starts.
        position: Position,
    },
    /// A block ran into the end of the input before its closing `}`.
    #[error("expected }} at the end of the block, got {found} instead")]
    UnterminatedBlock {
        /// The token found instead of `}`.
        found:    TokenKind,
        /// Where that token starts.
        position: Position,
    },
    /// The left side of `=` is not an identifier.
    #[error("can't assign to `{target}`, only identifiers can be assigned")]
    InvalidAssignmentTarget {
        /// Canonical text of the expression on the left of `=`.
        target:   String,
        /// Where the `=` is.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::NoPrefixOperation { position, .. }
            | Self::InvalidInteger { position, .. }
            | Self::InvalidParameter { position, .. }
            | Self::UnterminatedBlock { position, .. }
            | Self::InvalidAssignmentTarget { position, .. } => position,
        }
    }

    /// Renders the error prefixed by its position, e.g.
    /// `main.ln:3: expected next token to be IDENT, got INT instead`.
    #[must_use]
    pub fn report(&self) -> String {
        format!("{}: {self}", self.position())
    }
}
