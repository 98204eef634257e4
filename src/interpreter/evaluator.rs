/// The operator/operand stack machine.
///
/// Consumes a validated token stream and reduces it to a single number,
/// resolving precedence with an operator stack.
pub mod core;

/// Operator precedence table.
///
/// Holds the rank of every operator; injected into the evaluator.
pub mod precedence;
