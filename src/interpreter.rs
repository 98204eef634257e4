/// The evaluator module reduces validated tokens to a number.
///
/// It runs the classic two-stack algorithm: an operand stack of numbers and
/// an operator stack whose precedence comes from an
/// [`OperatorTable`](evaluator::precedence::OperatorTable).
///
/// # Responsibilities
/// - Resolves operator precedence and left-to-right grouping.
/// - Applies the arithmetic with IEEE-754 semantics.
/// - Rejects symbols that are not operators.
pub mod evaluator;
/// The lexer module tokenizes source text for validation.
///
/// The lexer reads the raw expression and produces numerals, operators,
/// parentheses and unknown characters, each with its byte offset. This is
/// the first stage of evaluation and never fails.
pub mod lexer;
/// The validator module checks and normalizes raw tokens.
///
/// The validator enforces which token may follow which, balances
/// parentheses, parses numerals and inserts the multiplications implied by
/// juxtaposition such as `2(3)`.
///
/// # Responsibilities
/// - Rejects malformed token sequences with a located error.
/// - Flags operators directly followed by a literal `0`.
/// - Produces the token stream the evaluator relies on.
pub mod validator;
