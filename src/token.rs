use std::fmt;

/// Glyph for addition.
pub const PLUS_SIGN: char = '+';
/// Glyph for subtraction (U+2212 MINUS SIGN).
pub const MINUS_SIGN: char = '−';
/// Glyph for multiplication (U+00D7).
pub const MULTIPLICATION_SIGN: char = '×';
/// Glyph for division (U+00F7).
pub const DIVISION_SIGN: char = '÷';
/// Glyph for exponentiation.
pub const POWER_SIGN: char = '^';
/// Glyph for unary negation (ASCII hyphen-minus).
pub const NEGATIVE_SIGN: char = '-';
/// Opening parenthesis.
pub const LPAREN: char = '(';
/// Closing parenthesis.
pub const RPAREN: char = ')';

/// Represents a binary operator.
///
/// Binary operators take a left and a right operand, e.g. `3 × 4`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`−`)
    Subtract,
    /// Multiplication (`×`)
    Multiply,
    /// Division (`÷`)
    Divide,
    /// Exponentiation (`^`)
    Power,
}

/// Represents a unary operator.
///
/// The only unary operator is prefix negation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl BinaryOperator {
    /// Applies the operator to `x` and `y` as `x op y`.
    ///
    /// Division and exponentiation follow IEEE-754 semantics: dividing by a
    /// zero that slipped past validation yields an infinity or `NaN` rather
    /// than an error.
    ///
    /// # Example
    /// ```
    /// use infix_eval::token::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Subtract.apply(7.0, 2.0), 5.0);
    /// assert_eq!(BinaryOperator::Power.apply(2.0, 10.0), 1024.0);
    /// assert!(BinaryOperator::Divide.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Add => x + y,
            Self::Subtract => x - y,
            Self::Multiply => x * y,
            Self::Divide => x / y,
            Self::Power => x.powf(y),
        }
    }

    /// The glyph this operator is written with.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => PLUS_SIGN,
            Self::Subtract => MINUS_SIGN,
            Self::Multiply => MULTIPLICATION_SIGN,
            Self::Divide => DIVISION_SIGN,
            Self::Power => POWER_SIGN,
        }
    }
}

impl UnaryOperator {
    /// Applies the operator to a single operand.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Negate => -x,
        }
    }

    /// The glyph this operator is written with.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Negate => NEGATIVE_SIGN,
        }
    }
}

/// A validated token.
///
/// Produced by the validator from the raw tokens of the lexer: numerals are
/// parsed to `f64`, and implicit multiplications have been inserted. A
/// sequence of these is what the evaluator consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// A binary operator.
    Binary(BinaryOperator),
    /// A prefix unary operator.
    Unary(UnaryOperator),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A character outside the calculator's symbol set. The validator lets
    /// it through and the evaluator rejects it as an unknown operator.
    Unknown(char),
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Binary(op) => write!(f, "{op}"),
            Self::Unary(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "{LPAREN}"),
            Self::RParen => write!(f, "{RPAREN}"),
            Self::Unknown(c) => write!(f, "{c}"),
        }
    }
}

/// Renders a token stream as space separated glyphs.
///
/// Useful to inspect what the validator made of an input, e.g. where an
/// implicit multiplication was inserted.
///
/// # Example
/// ```
/// use infix_eval::Calculator;
/// use infix_eval::token::format_tokens;
///
/// let calculator = Calculator::new();
/// let tokens = calculator.validate("2(3+4)").unwrap();
/// assert_eq!(format_tokens(&tokens), "2 × ( 3 + 4 )");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[(Token, usize)]) -> String {
    tokens.iter()
          .map(|(token, _)| token.to_string())
          .collect::<Vec<_>>()
          .join(" ")
}
