use std::fs;

use infix_eval::{
    Calculator, evaluate,
    error::{Error, ErrorKind, ParseError, RuntimeError},
    interpreter::evaluator::precedence::OperatorTable,
    util::num::format_number,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let actual = match evaluate(&expression) {
                Ok(value) => format_number(value),
                Err(e) => e.kind().to_string(),
            };
            assert_eq!(actual,
                       expected,
                       "case {} in {:?} failed: {}",
                       i + 1,
                       path,
                       expression);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once("=>"))
           .map(|(expression, expected)| {
               (expression.trim().to_owned(), expected.trim().to_owned())
           })
           .collect()
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() <= 1e-12 * expected.abs().max(1.0),
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_error(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("{src} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src} failed with {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2", 3.0);
    assert_value("7×9", 63.0);
    assert_value("8−5", 3.0);
    assert_value("10÷4", 2.5);
    assert_value("2^10", 1024.0);
    assert_value("3×4−2", 10.0);
    assert_value("2+3×4", 14.0);
    assert_value("20÷5÷2", 2.0);
    assert_value("10−4−3", 3.0);
}

#[test]
fn decimals() {
    assert_value("0.5+0.25", 0.75);
    assert_value(".5×4", 2.0);
    assert_value("3.×2", 6.0);
    assert_value("1.5^2", 2.25);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)×4", 20.0);
    assert_value("2×(3+4)", 14.0);
    assert_value("((1+2)×(3+4))", 21.0);
    assert_value("(((7)))", 7.0);
    assert_value("2^(1+2)", 8.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("2(3+4)", 14.0);
    assert_eq!(evaluate("2(3+4)"), evaluate("2×(3+4)"));
    assert_value("(1+2)(3+4)", 21.0);
    assert_value("2(3)(4)", 24.0);
    assert_value("1+2(3)", 7.0);
    assert_value("2^2(3)", 12.0);
}

#[test]
fn power_chains_reduce_left_to_right() {
    assert_value("2^3^2", 64.0);
    assert_value("2^(3^2)", 512.0);
    assert_value("4^0.5^2", 4.0);
}

#[test]
fn negation() {
    assert_value("-5", -5.0);
    assert_value("-5+3", -2.0);
    assert_value("2×-3", -6.0);
    assert_value("-(2+3)", -5.0);
    assert_value("-2^2", 4.0);
    assert_value("2+-3×4", -10.0);
    assert_value("(-1)(-1)", 1.0);
}

#[test]
fn negated_exponent() {
    assert_value("2^-1", 0.5);
    assert_value("10^-2×3", 0.03);
}

#[test]
fn non_literal_zero_divisor_is_not_an_error() {
    assert_eq!(evaluate("2÷(5−5)"), Ok(f64::INFINITY));
    assert_eq!(evaluate("-2÷(5−5)"), Ok(f64::NEG_INFINITY));
    assert!(evaluate("(5−5)÷(5−5)").unwrap().is_nan());
    assert_eq!(evaluate("5÷0.0"), Ok(f64::INFINITY));
}

#[test]
fn literal_zero_after_operator_is_math_error() {
    assert_error("5÷0", ErrorKind::DivideByZero);
    assert_error("5+0", ErrorKind::DivideByZero);
    assert_error("5−0", ErrorKind::DivideByZero);
    assert_error("5×0", ErrorKind::DivideByZero);
    assert_error("5^0", ErrorKind::DivideByZero);
    assert_value("0+5", 5.0);
    assert_value("5+00", 5.0);
    assert_value("5×(0)", 0.0);
}

#[test]
fn unmatched_parentheses_are_syntax_errors() {
    assert_error("(1+2", ErrorKind::Syntax);
    assert_error("1+2)", ErrorKind::Syntax);
    assert_error("((1)", ErrorKind::Syntax);
    assert_error(")(", ErrorKind::Syntax);
    assert_error("()", ErrorKind::Syntax);
}

#[test]
fn dangling_operators_are_syntax_errors() {
    assert_error("1+", ErrorKind::Syntax);
    assert_error("+1", ErrorKind::Syntax);
    assert_error("1+×2", ErrorKind::Syntax);
    assert_error("-", ErrorKind::Syntax);
    assert_error("--1", ErrorKind::Syntax);
    assert_error("2(", ErrorKind::Syntax);
}

#[test]
fn adjacency_is_a_syntax_error() {
    assert_error("2-3", ErrorKind::Syntax);
    assert_error("(2)3", ErrorKind::Syntax);
    assert_error("(2)-3", ErrorKind::Syntax);
    assert_error("2 3", ErrorKind::Syntax);
}

#[test]
fn malformed_numerals_are_syntax_errors() {
    assert_error("1.2.3", ErrorKind::Syntax);
    assert_error(".", ErrorKind::Syntax);
    assert_error("1+..", ErrorKind::Syntax);
}

#[test]
fn unknown_symbols_are_syntax_errors() {
    assert_error("x", ErrorKind::Syntax);
    assert_error("2*3", ErrorKind::Syntax);
    assert_error(" 2", ErrorKind::Syntax);
}

#[test]
fn empty_input_is_a_syntax_error() {
    assert_eq!(evaluate(""), Err(Error::Parse(ParseError::EmptyExpression)));
}

#[test]
fn errors_carry_the_offending_offset() {
    assert_eq!(evaluate("1+2)"),
               Err(Error::Parse(ParseError::UnmatchedClosingParen { position: 3 })));
    assert_eq!(evaluate("(1+2"),
               Err(Error::Parse(ParseError::UnclosedParen { position: 0 })));
    assert_eq!(evaluate("+1"),
               Err(Error::Parse(ParseError::MissingLeftOperand { token:    "+".into(),
                                                                 position: 0, })));
    assert_eq!(evaluate("1+"),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput { token:    "+".into(),
                                                                   position: 1, })));
    // `÷` is two bytes long.
    assert_eq!(evaluate("5÷0"),
               Err(Error::Parse(ParseError::DivideByZero { position: 3 })));
    assert_eq!(evaluate("1.2.3"),
               Err(Error::Parse(ParseError::InvalidNumber { literal:  "1.2.3".into(),
                                                            position: 0, })));
    assert_eq!(evaluate("a+1"),
               Err(Error::Runtime(RuntimeError::UnknownOperator { symbol:   'a',
                                                                  position: 0, })));
}

#[test]
fn error_kinds_render_display_text() {
    assert_eq!(ErrorKind::Syntax.to_string(), "Syntax Error");
    assert_eq!(ErrorKind::DivideByZero.to_string(), "Math Error");
    let e = evaluate("(1").unwrap_err();
    assert_eq!(e.to_string(), "Error at offset 0: Opening parenthesis is never closed.");
    let e = evaluate("5+0").unwrap_err();
    assert_eq!(e.to_string(), "Error at offset 2: Operator followed by a literal zero.");
}

#[test]
fn evaluation_is_repeatable() {
    let calculator = Calculator::new();
    for src in ["2(3+4)", "1+2)", "5÷0", "2÷(5−5)"] {
        assert_eq!(calculator.evaluate(src), calculator.evaluate(src));
    }
}

#[test]
fn custom_operator_table() {
    // Addition binding tighter than multiplication.
    let calculator = Calculator::with_operators(OperatorTable::new(2, 1, 3));
    assert_eq!(calculator.evaluate("2×3+4"), Ok(14.0));
    assert_eq!(Calculator::new().evaluate("2×3+4"), Ok(10.0));
    assert_eq!(Calculator::default(), Calculator::new());
}
