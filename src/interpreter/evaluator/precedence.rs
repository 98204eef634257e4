use crate::token::{BinaryOperator, UnaryOperator};

/// Precedence ranks for every operator.
///
/// Operators fall into three tiers: additive (`+`, `−`), multiplicative
/// (`×`, `÷`) and power (`^` together with unary `-`). A higher rank binds
/// tighter. Operators of equal rank reduce left to right, and because `^`
/// shares its tier with negation, `2^3^2` is `(2^3)^2`.
///
/// The table is plain data; a [`Calculator`](crate::Calculator) is built
/// with one and never changes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OperatorTable {
    additive:       u8,
    multiplicative: u8,
    power:          u8,
}

impl OperatorTable {
    /// The standard ranks: `+ −` = 1, `× ÷` = 2, `^ -` = 3.
    pub const STANDARD: Self = Self { additive:       1,
                                      multiplicative: 2,
                                      power:          3, };

    /// Creates a table with custom ranks.
    ///
    /// # Parameters
    /// - `additive`: Rank of `+` and `−`.
    /// - `multiplicative`: Rank of `×` and `÷`.
    /// - `power`: Rank of `^` and unary `-`.
    #[must_use]
    pub const fn new(additive: u8, multiplicative: u8, power: u8) -> Self {
        Self { additive,
               multiplicative,
               power }
    }

    /// Returns the rank of a binary operator.
    ///
    /// # Example
    /// ```
    /// use infix_eval::{interpreter::evaluator::precedence::OperatorTable,
    ///                  token::BinaryOperator};
    ///
    /// let table = OperatorTable::STANDARD;
    /// assert!(table.binary(BinaryOperator::Multiply) > table.binary(BinaryOperator::Add));
    /// assert_eq!(table.binary(BinaryOperator::Power), 3);
    /// ```
    #[must_use]
    pub const fn binary(&self, op: BinaryOperator) -> u8 {
        match op {
            BinaryOperator::Add | BinaryOperator::Subtract => self.additive,
            BinaryOperator::Multiply | BinaryOperator::Divide => self.multiplicative,
            BinaryOperator::Power => self.power,
        }
    }

    /// Returns the rank of a unary operator.
    #[must_use]
    pub const fn unary(&self, op: UnaryOperator) -> u8 {
        match op {
            UnaryOperator::Negate => self.power,
        }
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
