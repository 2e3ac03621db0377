use approx::assert_abs_diff_eq;
use softmath::{
    error::{ParseError, RuntimeError},
    evaluate, get_result,
};

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn value_of(src: &str) -> f64 {
    match evaluate(src) {
        Ok(Some(v)) => v,
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn runtime_error_of(src: &str) -> RuntimeError {
    let err = evaluate(src).expect_err("script should fail");
    match err.downcast::<RuntimeError>() {
        Ok(e) => *e,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
    }
}

fn parse_error_of(src: &str) -> ParseError {
    let err = evaluate(src).expect_err("script should fail");
    match err.downcast::<ParseError>() {
        Ok(e) => *e,
        Err(e) => panic!("Expected a parse error, got: {e}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(value_of("let x = 1 + 2\nx"), 3.0);
    assert_eq!(value_of("let x = 7 * 9\nx"), 63.0);
    assert_eq!(value_of("let x = 8 - 5\nx"), 3.0);
    assert_eq!(value_of("let x = 10 / 4\nx"), 2.5);
    assert_eq!(value_of("let x = 3"), 3.0);
}

#[test]
fn operator_precedence() {
    assert_eq!(value_of("1 + 2 * 3"), 7.0);
    assert_eq!(value_of("(1 + 2) * 3"), 9.0);
    assert_eq!(value_of("10 - 4 - 3"), 3.0);
    assert_eq!(value_of("2 * 3 ^ 2"), 18.0);
}

#[test]
fn exponent_is_right_associative() {
    assert_eq!(value_of("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(value_of("(2 ^ 3) ^ 2"), 64.0);
}

#[test]
fn negation_binds_looser_than_exponent() {
    assert_eq!(value_of("-2 ^ 2"), -4.0);
    assert_eq!(value_of("(-2) ^ 2"), 4.0);
    assert_eq!(value_of("2 ^ -1"), 0.5);
    assert_eq!(value_of("--3"), 3.0);
}

#[test]
fn remainder_operator() {
    assert_eq!(value_of("7 % 3"), 1.0);
    assert_eq!(value_of("-7 % 3"), -1.0);
    assert_eq!(value_of("7.5 % 2"), 1.5);
    assert!(value_of("1 % 0").is_nan());
}

#[test]
fn absolute_value_bars() {
    assert_eq!(value_of("|-3.5|"), 3.5);
    assert_eq!(value_of("|2 - 5| * 2"), 6.0);
    assert_eq!(value_of("let x = -4\n|x|"), 4.0);
}

#[test]
fn constants() {
    assert_eq!(value_of("pi"), std::f64::consts::PI);
    assert_eq!(value_of("tau"), std::f64::consts::TAU);
    assert_eq!(value_of("e"), std::f64::consts::E);
    assert_eq!(value_of("inf"), f64::INFINITY);
    assert_eq!(value_of("-inf"), f64::NEG_INFINITY);
    assert!(value_of("nan").is_nan());
}

#[test]
fn division_follows_ieee_rules() {
    assert_eq!(value_of("1 / 0"), f64::INFINITY);
    assert_eq!(value_of("-1 / 0"), f64::NEG_INFINITY);
    assert!(value_of("0 / 0").is_nan());
}

#[test]
fn rounding_builtins() {
    assert_eq!(value_of("floor(-2.7)"), -3.0);
    assert_eq!(value_of("floor(2.7)"), 2.0);
    assert_eq!(value_of("ceil(2.1)"), 3.0);
    assert_eq!(value_of("ceil(-2.1)"), -2.0);
    assert_eq!(value_of("fabs(-0.25)"), 0.25);
    assert_eq!(value_of("fmod(7.5, 2)"), 1.5);
}

#[test]
fn integer_abs_builtin() {
    assert_eq!(value_of("abs(-5)"), 5.0);
    assert_eq!(value_of("abs(5)"), 5.0);
    assert_eq!(value_of("abs(0)"), 0.0);

    assert!(matches!(runtime_error_of("abs(2.5)"), RuntimeError::RealIsFractional { line: 1 }));
    assert!(matches!(runtime_error_of("abs(1e10)"), RuntimeError::LiteralTooLarge { line: 1 }));
    assert!(matches!(runtime_error_of("abs(-1e10)"), RuntimeError::LiteralTooSmall { line: 1 }));
    assert!(matches!(runtime_error_of("abs(nan)"), RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn transcendental_builtins() {
    assert_abs_diff_eq!(value_of("sqrt(16)"), 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("exp(1)"), std::f64::consts::E, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("ln(e)"), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("log(e ^ 2)"), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("log(8, 2)"), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("log(1000, 10)"), 3.0, epsilon = 1e-12);
    assert_eq!(value_of("pow(2, 10)"), 1024.0);
    assert_eq!(value_of("2 ^ 10"), 1024.0);
}

#[test]
fn trigonometric_builtins() {
    assert_abs_diff_eq!(value_of("sin(pi / 2)"), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("cos(pi)"), -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("tan(pi / 4)"), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("atan(1) * 4"), std::f64::consts::PI, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("asin(1)"), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("acos(0)"), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(value_of("let x = 0.3\nsin(x) ^ 2 + cos(x) ^ 2"), 1.0, epsilon = 1e-9);
}

#[test]
fn domain_problems_are_values_not_errors() {
    assert!(value_of("sqrt(-1)").is_nan());
    assert!(value_of("asin(2)").is_nan());
    assert_eq!(value_of("ln(0)"), f64::NEG_INFINITY);
    assert_eq!(value_of("pow(0, -3)"), f64::INFINITY);
    assert_eq!(value_of("exp(-inf)"), 0.0);
    assert!(value_of("sin(inf)").is_nan());
}

#[test]
fn classification_builtins() {
    assert_eq!(value_of("isnan(nan)"), 1.0);
    assert_eq!(value_of("isnan(1)"), 0.0);
    assert_eq!(value_of("isinf(-inf)"), 1.0);
    assert_eq!(value_of("isinf(1e308)"), 0.0);
    assert_eq!(value_of("isfinite(1 / 0)"), 0.0);
    assert_eq!(value_of("isfinite(-0.5)"), 1.0);
}

#[test]
fn comments_and_blank_lines() {
    assert_eq!(value_of("// leading comment\n\n1 + 1 // trailing\n\n"), 2.0);
    assert_eq!(value_of("/* spans\nseveral\nlines */ 3 * 3"), 9.0);
    assert_eq!(evaluate("").unwrap(), None);
    assert_eq!(evaluate("// only a comment").unwrap(), None);
}

#[test]
fn print_returns_its_argument() {
    assert_eq!(value_of("print(2.5) + 1"), 3.5);
}

#[test]
fn unknown_names() {
    assert!(matches!(runtime_error_of("x + 1"), RuntimeError::UnknownVariable { line: 1, .. }));
    assert!(matches!(runtime_error_of("1\n\ngamma(3)"),
                     RuntimeError::UnknownFunction { line: 3, .. }));
}

#[test]
fn argument_count_is_checked() {
    assert!(matches!(runtime_error_of("sin(1, 2)"),
                     RuntimeError::ArgumentCountMismatch { found: 2, .. }));
    assert!(matches!(runtime_error_of("pow(2)"),
                     RuntimeError::ArgumentCountMismatch { found: 1, .. }));
    assert!(matches!(runtime_error_of("log(1, 2, 3)"),
                     RuntimeError::ArgumentCountMismatch { found: 3, .. }));
}

#[test]
fn variables_cannot_be_redeclared() {
    assert!(matches!(runtime_error_of("let x = 1\nlet x = 2"),
                     RuntimeError::VariableShadowing { line: 2, .. }));
}

#[test]
fn reserved_names_cannot_be_declared() {
    assert!(matches!(parse_error_of("let pi = 3"), ParseError::IdentifierReserved { .. }));
    assert!(matches!(parse_error_of("let sqrt = 3"), ParseError::IdentifierReserved { .. }));
}

#[test]
fn malformed_scripts() {
    assert_failure("sin(1");
    assert_failure("(1 + 2");
    assert_failure("1 +");
    assert_failure("let = 4");
    assert_failure("let x 4");

    assert!(matches!(parse_error_of("|2"), ParseError::ExpectedPipe { .. }));
    assert!(matches!(parse_error_of("(1 + 2"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_error_of("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error_of("2 $ 3"), ParseError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn unfinished_scripts_point_at_their_line() {
    let err = parse_error_of("let a = 1\nsin(a, 2");
    assert!(matches!(err, ParseError::ExpectedClosingParen { line: 2 }));
    assert_eq!(err.line(), 2);

    let err = parse_error_of("1\n\nlet");
    assert!(matches!(err, ParseError::UnexpectedEndOfInput { line: 3 }));

    let err = parse_error_of("let 5 = 2");
    assert!(matches!(err, ParseError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn parse_errors_name_the_offending_input() {
    assert_eq!(parse_error_of("2 $ 3").to_string(), "Error on line 1: Did not expect '$'.");
    assert_eq!(parse_error_of("let pi = 3").to_string(),
               "Error on line 1: 'pi' is a constant or builtin and cannot be declared.");
}

#[test]
fn empty_argument_lists_reach_the_arity_check() {
    assert!(matches!(runtime_error_of("sqrt()"),
                     RuntimeError::ArgumentCountMismatch { found: 0, .. }));
}

#[test]
fn errors_report_line_numbers() {
    let err = evaluate("let a = 1\nlet b = 2\nc").expect_err("script should fail");
    assert_eq!(err.to_string(), "Error on line 3: Unknown variable 'c'.");
}

#[test]
fn whole_scripts_run() {
    assert_success("let r = 2\nlet area = pi * r ^ 2\nprint(area)");
    assert_success("let x = 0.5\nlet y = asin(x) + acos(x)\ny");
    assert_failure("let y = x + 1");
}
