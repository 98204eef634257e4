use thiserror::Error;

/// Represents the errors the evaluator can raise.
///
/// Numeric edge cases (infinities, `NaN`) are results, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A symbol outside the calculator's operator set reached evaluation.
    #[error("Error at offset {position}: Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The symbol as written.
        symbol:   char,
        /// Where the symbol starts.
        position: usize,
    },
}
