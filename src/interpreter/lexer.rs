use std::fmt;

use log::{debug, trace};
use logos::Logos;

use crate::token::{BinaryOperator, LPAREN, RPAREN, UnaryOperator};

/// Represents a lexical token in the source input, before validation.
///
/// Numerals are kept as the raw digit run. Whether `1.2.3` or a lone `.` is a
/// number is decided later, when the validator parses it.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum RawToken {
    /// A greedy run of digits and decimal points, such as `3.14`, `.5` or
    /// `1.2.3`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_owned())]
    Numeral(String),
    /// `+`, `−`, `×`, `÷` and `^`
    #[token("+", |_| BinaryOperator::Add)]
    #[token("−", |_| BinaryOperator::Subtract)]
    #[token("×", |_| BinaryOperator::Multiply)]
    #[token("÷", |_| BinaryOperator::Divide)]
    #[token("^", |_| BinaryOperator::Power)]
    Binary(BinaryOperator),
    /// `-`
    #[token("-", |_| UnaryOperator::Negate)]
    Unary(UnaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other single character, kept verbatim.
    #[regex(r"[^0-9.()+\-−×÷^]", |lex| lex.slice().chars().next())]
    Unknown(char),
}

impl RawToken {
    /// Returns `true` if this is the literal numeral `0`.
    #[must_use]
    pub fn is_literal_zero(&self) -> bool {
        matches!(self, Self::Numeral(n) if n == "0")
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeral(literal) => write!(f, "{literal}"),
            Self::Binary(op) => write!(f, "{op}"),
            Self::Unary(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "{LPAREN}"),
            Self::RParen => write!(f, "{RPAREN}"),
            Self::Unknown(c) => write!(f, "{c}"),
        }
    }
}

/// Splits an input string into raw tokens.
///
/// Never fails: characters outside the symbol set come out as
/// [`RawToken::Unknown`] and are left for later stages to reject. Each token
/// is paired with the byte offset of its first character.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The raw tokens in input order.
///
/// # Example
/// ```
/// use infix_eval::{
///     interpreter::lexer::{RawToken, tokenize},
///     token::BinaryOperator,
/// };
///
/// let tokens = tokenize("12+x");
/// assert_eq!(tokens,
///            vec![(RawToken::Numeral("12".into()), 0),
///                 (RawToken::Binary(BinaryOperator::Add), 2),
///                 (RawToken::Unknown('x'), 3)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(RawToken, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        let token = match token {
            Ok(tok) => tok,
            // Unreachable: the `Unknown` class matches every character
            // outside the symbol set.
            Err(()) => {
                let c = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                RawToken::Unknown(c)
            },
        };
        trace!("token {token:?} at offset {position}");
        tokens.push((token, position));
    }

    debug!("tokenized {} characters into {} tokens", source.len(), tokens.len());
    tokens
}
