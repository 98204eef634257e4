use log::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::lexer::RawToken,
    token::{BinaryOperator, Token},
};

/// Result type used by the validator.
pub type ParseResult<T> = Result<T, ParseError>;

/// Checks a raw token stream and turns it into evaluator input.
///
/// Walks the tokens once, looking at most one token ahead and one behind:
///
/// - a numeral must be last or be followed by a binary operator, `(` or `)`;
/// - a binary operator needs a token before it and a numeral, `-` or `(`
///   after it. If that next token is the literal numeral `0` the error is
///   [`ParseError::DivideByZero`], whatever the operator;
/// - `-` must be followed by a numeral or `(`;
/// - `(` must be followed by a numeral, `-` or `(`. When it directly follows
///   a numeral or `)`, a multiplication is inserted in front of it;
/// - `)` may not open the expression, may only be followed by a binary
///   operator, `(` or `)`, and must close an open `(`;
/// - unknown symbols are passed through untouched.
///
/// Validation stops at the first problem.
///
/// # Parameters
/// - `tokens`: Raw tokens with their byte offsets, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The validated tokens, numerals parsed, with the same offsets. Inserted
/// multiplications take the offset of the `(` they precede.
///
/// # Example
/// ```
/// use infix_eval::{
///     interpreter::{lexer::tokenize, validator::validate},
///     token::{BinaryOperator, Token},
/// };
///
/// let tokens = validate(&tokenize("2(3)")).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Binary(BinaryOperator::Multiply), 1),
///                 (Token::LParen, 1),
///                 (Token::Number(3.0), 2),
///                 (Token::RParen, 3)]);
/// ```
pub fn validate(tokens: &[(RawToken, usize)]) -> ParseResult<Vec<(Token, usize)>> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut validated = Vec::with_capacity(tokens.len());
    let mut open_parens: Vec<usize> = Vec::new();

    for (index, (token, position)) in tokens.iter().enumerate() {
        let position = *position;
        let prev = index.checked_sub(1).map(|i| &tokens[i]);
        let next = tokens.get(index + 1);

        let validated_token = match token {
            RawToken::Numeral(literal) => {
                if let Some(next) = next
                   && !matches!(next.0,
                                RawToken::Binary(_) | RawToken::LParen | RawToken::RParen)
                {
                    return Err(unexpected(next));
                }
                Token::Number(parse_numeral(literal, position)?)
            },
            RawToken::Binary(op) => {
                if prev.is_none() {
                    return Err(ParseError::MissingLeftOperand { token: token.to_string(),
                                                                position });
                }
                let next = next.ok_or_else(|| end_of_input(token, position))?;
                if !starts_operand(&next.0) {
                    return Err(unexpected(next));
                }
                if next.0.is_literal_zero() {
                    return Err(ParseError::DivideByZero { position: next.1 });
                }
                Token::Binary(*op)
            },
            RawToken::Unary(op) => {
                let next = next.ok_or_else(|| end_of_input(token, position))?;
                if !matches!(next.0, RawToken::Numeral(_) | RawToken::LParen) {
                    return Err(unexpected(next));
                }
                Token::Unary(*op)
            },
            RawToken::LParen => {
                let next = next.ok_or_else(|| end_of_input(token, position))?;
                if !starts_operand(&next.0) {
                    return Err(unexpected(next));
                }
                if let Some((RawToken::Numeral(_) | RawToken::RParen, _)) = prev {
                    trace!("implicit multiplication before offset {position}");
                    validated.push((Token::Binary(BinaryOperator::Multiply), position));
                }
                open_parens.push(position);
                Token::LParen
            },
            RawToken::RParen => {
                if prev.is_none() {
                    return Err(ParseError::MissingLeftOperand { token: token.to_string(),
                                                                position });
                }
                if let Some(next) = next
                   && !matches!(next.0,
                                RawToken::Binary(_) | RawToken::RParen | RawToken::LParen)
                {
                    return Err(unexpected(next));
                }
                if open_parens.pop().is_none() {
                    return Err(ParseError::UnmatchedClosingParen { position });
                }
                Token::RParen
            },
            RawToken::Unknown(c) => Token::Unknown(*c),
        };

        validated.push((validated_token, position));
    }

    if let Some(&position) = open_parens.last() {
        return Err(ParseError::UnclosedParen { position });
    }

    debug!("validated {} raw tokens into {} tokens", tokens.len(), validated.len());
    Ok(validated)
}

/// Parses a digit run.
///
/// Runs with more than one decimal point, or made only of decimal points,
/// are rejected.
///
/// # Errors
/// Returns [`ParseError::InvalidNumber`] if `literal` is not a decimal
/// number.
fn parse_numeral(literal: &str, position: usize) -> ParseResult<f64> {
    literal.parse()
           .map_err(|_| ParseError::InvalidNumber { literal: literal.to_owned(),
                                                    position })
}

/// Returns `true` for tokens that may begin the right-hand side of an
/// operator: a numeral, `-` or `(`.
const fn starts_operand(token: &RawToken) -> bool {
    matches!(token, RawToken::Numeral(_) | RawToken::Unary(_) | RawToken::LParen)
}

fn unexpected((token, position): &(RawToken, usize)) -> ParseError {
    ParseError::UnexpectedToken { token:    token.to_string(),
                                  position: *position, }
}

fn end_of_input(token: &RawToken, position: usize) -> ParseError {
    ParseError::UnexpectedEndOfInput { token: token.to_string(),
                                       position }
}
