use log::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::precedence::OperatorTable,
    token::{BinaryOperator, Token, UnaryOperator},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An entry of the operator stack.
///
/// `LParen` only delimits a parenthesised scope and is never applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pending {
    /// A binary operator waiting for its right operand to be reduced.
    Binary(BinaryOperator),
    /// A prefix operator waiting for its operand to be reduced.
    Unary(UnaryOperator),
    /// Scope marker pushed by `(`.
    LParen,
}

/// Evaluation state for one token stream.
///
/// Holds the operand stack and the operator stack. A fresh `Evaluator` is
/// built for every evaluation and consumed by [`Evaluator::run`].
pub struct Evaluator<'t> {
    /// Precedence ranks used to decide when to reduce.
    table:     &'t OperatorTable,
    /// Operators and `(` markers not yet applied.
    operators: Vec<Pending>,
    /// Values waiting to be consumed by an operator.
    operands:  Vec<f64>,
}

impl<'t> Evaluator<'t> {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub const fn new(table: &'t OperatorTable) -> Self {
        Self { table,
               operators: Vec::new(),
               operands: Vec::new() }
    }

    /// Reduces a validated token stream to a number.
    ///
    /// Numbers go to the operand stack and `(` to the operator stack. A
    /// binary operator first applies every stacked operator of equal or
    /// higher rank down to the nearest `(`, then is stacked itself. A unary
    /// operator is stacked directly: nothing to its left is waiting for it.
    /// `)` applies operators back to its `(` and drops the marker. Whatever
    /// remains is applied at the end.
    ///
    /// # Parameters
    /// - `tokens`: Output of the validator.
    ///
    /// # Returns
    /// The value of the expression. Infinities and `NaN` are valid results.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownOperator`] when an unrecognized symbol
    /// is reached.
    ///
    /// # Panics
    /// If the stream breaks the validator's guarantees and an operator runs
    /// out of operands.
    pub fn run(mut self, tokens: &[(Token, usize)]) -> EvalResult<f64> {
        for (token, position) in tokens {
            trace!("eval {token} with operands {:?} and operators {:?}",
                   self.operands,
                   self.operators);
            match token {
                Token::Number(value) => self.operands.push(*value),
                Token::LParen => self.operators.push(Pending::LParen),
                Token::Unary(op) => self.operators.push(Pending::Unary(*op)),
                Token::Binary(op) => {
                    let rank = self.table.binary(*op);
                    while self.top_rank().is_some_and(|top| top >= rank) {
                        apply_top(&mut self.operators, &mut self.operands);
                    }
                    self.operators.push(Pending::Binary(*op));
                },
                Token::RParen => {
                    while self.operators.last().is_some_and(|top| *top != Pending::LParen) {
                        apply_top(&mut self.operators, &mut self.operands);
                    }
                    self.operators.pop();
                },
                Token::Unknown(symbol) => {
                    return Err(RuntimeError::UnknownOperator { symbol:   *symbol,
                                                               position: *position, });
                },
            }
        }

        while !self.operators.is_empty() {
            apply_top(&mut self.operators, &mut self.operands);
        }

        let result = pop_operand(&mut self.operands);
        debug_assert!(self.operands.is_empty(), "operands left over: {:?}", self.operands);
        debug!("evaluated {} tokens to {result}", tokens.len());
        Ok(result)
    }

    /// Rank of the operator on top of the stack, or `None` when the stack is
    /// empty or its top is a `(` marker.
    fn top_rank(&self) -> Option<u8> {
        match self.operators.last()? {
            Pending::Binary(op) => Some(self.table.binary(*op)),
            Pending::Unary(op) => Some(self.table.unary(*op)),
            Pending::LParen => None,
        }
    }
}

/// Pops the top operator and applies it to the operand stack.
///
/// A unary operator replaces the top operand with its result. A binary
/// operator pops `y`, then `x`, and pushes `x op y`.
///
/// # Panics
/// If the top of `operators` is a `(` marker or there are not enough
/// operands. Neither happens for validated input.
pub fn apply_top(operators: &mut Vec<Pending>, operands: &mut Vec<f64>) {
    let result = match operators.pop() {
        Some(Pending::Unary(op)) => op.apply(pop_operand(operands)),
        Some(Pending::Binary(op)) => {
            let y = pop_operand(operands);
            let x = pop_operand(operands);
            op.apply(x, y)
        },
        Some(Pending::LParen) | None => unreachable!("no operator to apply"),
    };
    operands.push(result);
}

fn pop_operand(operands: &mut Vec<f64>) -> f64 {
    let Some(value) = operands.pop() else {
        unreachable!("operand stack underflow")
    };
    value
}

/// Evaluates a validated token stream with the given precedence table.
///
/// # Errors
/// See [`Evaluator::run`].
///
/// # Example
/// ```
/// use infix_eval::{
///     interpreter::evaluator::{core::evaluate, precedence::OperatorTable},
///     token::{BinaryOperator, Token},
/// };
///
/// let tokens = [(Token::Number(3.0), 0),
///               (Token::Binary(BinaryOperator::Multiply), 1),
///               (Token::Number(4.0), 2)];
/// assert_eq!(evaluate(&tokens, &OperatorTable::STANDARD), Ok(12.0));
/// ```
pub fn evaluate(tokens: &[(Token, usize)], table: &OperatorTable) -> EvalResult<f64> {
    Evaluator::new(table).run(tokens)
}
