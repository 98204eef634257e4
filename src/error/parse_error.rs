use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur while validating a token stream.
///
/// Positions are byte offsets into the expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no tokens at all.
    #[error("Error: Empty expression.")]
    EmptyExpression,
    /// Found a token that may not follow the one before it.
    #[error("Error at offset {position}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// An operator or `(` was the last token.
    #[error("Error at offset {position}: Unexpected end of input after '{token}'.")]
    UnexpectedEndOfInput {
        /// The dangling token.
        token:    String,
        /// Where the dangling token starts.
        position: usize,
    },
    /// A binary operator or `)` opened the expression.
    #[error("Error at offset {position}: '{token}' is missing its left operand.")]
    MissingLeftOperand {
        /// The offending token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// A `)` had no `(` to close.
    #[error("Error at offset {position}: Unmatched closing parenthesis.")]
    UnmatchedClosingParen {
        /// Where the `)` starts.
        position: usize,
    },
    /// A `(` was never closed.
    #[error("Error at offset {position}: Opening parenthesis is never closed.")]
    UnclosedParen {
        /// Where the innermost unclosed `(` starts.
        position: usize,
    },
    /// A digit run could not be read as a number, e.g. `1.2.3` or `.`.
    #[error("Error at offset {position}: Invalid number '{literal}'.")]
    InvalidNumber {
        /// The digit run as written.
        literal:  String,
        /// Where the digit run starts.
        position: usize,
    },
    /// An operator is directly followed by the literal numeral `0`.
    #[error("Error at offset {position}: Operator followed by a literal zero.")]
    DivideByZero {
        /// Where the `0` starts.
        position: usize,
    },
}

impl ParseError {
    /// Classifies the error for display.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivideByZero { .. } => ErrorKind::DivideByZero,
            _ => ErrorKind::Syntax,
        }
    }
}
