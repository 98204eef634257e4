//! # infix-eval
//!
//! infix-eval evaluates arithmetic written the way it is typed on a pocket
//! calculator: numbers, `+ − × ÷ ^`, prefix `-` for negation and
//! parentheses, with `2(3+4)` read as `2 × (3+4)`.
//!
//! Evaluation runs three stages in order: the lexer splits the text into raw
//! tokens, the validator checks and normalizes them, and the evaluator
//! reduces them with an operator stack. Nothing is kept between calls.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::{core::Evaluator, precedence::OperatorTable},
        lexer::{RawToken, tokenize},
        validator::validate,
    },
    token::Token,
};

/// Provides error types for validation and evaluation.
///
/// Every failure carries the byte offset of the token that caused it, and
/// classifies into one of two [`ErrorKind`](error::ErrorKind)s: a syntax
/// error or a division by a literal zero.
///
/// # Responsibilities
/// - Defines error enums for the validator and the evaluator.
/// - Maps every error onto the text a calculator display shows.
pub mod error;
/// Runs the three evaluation stages.
///
/// This module holds the lexer, the validator and the evaluator. Each stage
/// is a plain function of its input, and they are chained by
/// [`Calculator`].
pub mod interpreter;
/// Defines the tokens shared by every stage.
///
/// Declares the operator kinds, their glyphs and arithmetic, and the
/// validated `Token` the evaluator consumes.
pub mod token;
/// General helpers.
///
/// Currently the rendering of results for display.
pub mod util;

/// Evaluates expressions with a fixed operator table.
///
/// A `Calculator` holds no state besides its [`OperatorTable`], so one value
/// can be shared and reused freely.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    operators: OperatorTable,
}

impl Calculator {
    /// Creates a calculator with the standard precedence ranks.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_operators(OperatorTable::STANDARD)
    }

    /// Creates a calculator with custom precedence ranks.
    #[must_use]
    pub const fn with_operators(operators: OperatorTable) -> Self {
        Self { operators }
    }

    /// The operator table this calculator evaluates with.
    #[must_use]
    pub const fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Splits `source` into raw tokens. See
    /// [`tokenize`](interpreter::lexer::tokenize).
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn tokenize(&self, source: &str) -> Vec<(RawToken, usize)> {
        tokenize(source)
    }

    /// Tokenizes and validates `source`, returning the token stream the
    /// evaluator would run.
    ///
    /// # Errors
    /// Returns the first validation problem found.
    pub fn validate(&self, source: &str) -> Result<Vec<(Token, usize)>, Error> {
        Ok(validate(&self.tokenize(source))?)
    }

    /// Evaluates an already validated token stream.
    ///
    /// # Errors
    /// Returns an error if the stream contains an unknown symbol.
    pub fn evaluate_tokens(&self, tokens: &[(Token, usize)]) -> Result<f64, Error> {
        Ok(Evaluator::new(&self.operators).run(tokens)?)
    }

    /// Evaluates an expression.
    ///
    /// # Errors
    /// Returns an error if the expression is malformed, or if an operator is
    /// directly followed by the literal numeral `0`.
    ///
    /// # Examples
    /// ```
    /// use infix_eval::Calculator;
    ///
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.evaluate("3×4−2"), Ok(10.0));
    /// assert_eq!(calculator.evaluate("2(3+4)"), Ok(14.0));
    /// ```
    pub fn evaluate(&self, source: &str) -> Result<f64, Error> {
        let tokens = self.validate(source)?;
        self.evaluate_tokens(&tokens)
    }
}

/// Evaluates an expression with the standard operator table.
///
/// Exponentiation shares its rank with negation and reduces left to right,
/// so `2^3^2` is `64`. A zero divisor that is not a literal `0`, as in
/// `2÷(5−5)`, divides by zero in floating point and yields an infinity or
/// `NaN` instead of an error.
///
/// # Errors
/// Returns an error whose [`kind`](error::Error::kind) is
/// [`Syntax`](error::ErrorKind::Syntax) for malformed input and
/// [`DivideByZero`](error::ErrorKind::DivideByZero) when any operator is
/// directly followed by the literal numeral `0`.
///
/// # Examples
/// ```
/// use infix_eval::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2^3^2"), Ok(64.0));
/// assert_eq!(evaluate("-(1+2)×2"), Ok(-6.0));
/// assert!(evaluate("2÷(5−5)").unwrap().is_infinite());
///
/// assert_eq!(evaluate("(1+2").unwrap_err().kind(), ErrorKind::Syntax);
/// assert_eq!(evaluate("5+0").unwrap_err().kind(), ErrorKind::DivideByZero);
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    Calculator::new().evaluate(source)
}
