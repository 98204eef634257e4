use std::fmt;

use thiserror::Error;

/// Validation errors.
///
/// Defines every structural problem the validator can detect in a token
/// stream: misplaced operators, unbalanced parentheses, malformed numerals and
/// the literal division-by-zero check.
pub mod parse_error;
/// Evaluation errors.
///
/// Errors raised while running the operator/operand stacks.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The two classes of failure an evaluation can report.
///
/// `Display` renders the text a calculator screen shows for each class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Any structural problem with the expression.
    Syntax,
    /// An operator directly followed by a literal `0`.
    DivideByZero,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "Syntax Error"),
            Self::DivideByZero => write!(f, "Math Error"),
        }
    }
}

/// Any error produced by [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The token stream failed validation.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use infix_eval::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("5÷0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivideByZero);
    /// assert_eq!(err.kind().to_string(), "Math Error");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(RuntimeError::UnknownOperator { .. }) => ErrorKind::Syntax,
        }
    }
}
