use std::f64::consts::{E, FRAC_PI_2, PI};

use softmath::{
    abs, acos, asin, atan, ceil, cos, exp, fabs, floor, fmod, log, pow, sin, sqrt, tan,
};

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;
const NAN: f64 = f64::NAN;

/// Compares two values, treating NaN as equal to NaN.
fn same(actual: f64, expected: f64) -> bool {
    if expected.is_nan() { actual.is_nan() } else { actual == expected }
}

fn check_unary(name: &str, f: fn(f64) -> f64, table: &[(f64, f64)]) {
    for &(x, expected) in table {
        let actual = f(x);
        assert!(same(actual, expected), "{name}({x}) = {actual}, expected {expected}");
    }
}

fn check_binary(name: &str, f: fn(f64, f64) -> f64, table: &[(f64, f64, f64)]) {
    for &(x, y, expected) in table {
        let actual = f(x, y);
        assert!(same(actual, expected), "{name}({x}, {y}) = {actual}, expected {expected}");
    }
}

#[test]
fn integer_abs() {
    assert_eq!(abs(-5), 5);
    assert_eq!(abs(5), 5);
    assert_eq!(abs(0), 0);
    assert_eq!(abs(i32::MAX), i32::MAX);
    assert_eq!(abs(-i32::MAX), i32::MAX);
    assert_eq!(abs(i32::MIN), i32::MIN);
}

#[test]
fn fabs_table() {
    check_unary("fabs",
                fabs,
                &[(-2.5, 2.5), (2.5, 2.5), (0.0, 0.0), (NEG_INF, INF), (INF, INF), (NAN, NAN)]);
}

#[test]
fn floor_table() {
    check_unary("floor",
                floor,
                &[(2.7, 2.0),
                  (-2.7, -3.0),
                  (-0.5, -1.0),
                  (0.5, 0.0),
                  (-3.0, -3.0),
                  (1e300, 1e300),
                  (-1e300, -1e300),
                  (4_503_599_627_370_497.0, 4_503_599_627_370_497.0),
                  (INF, INF),
                  (NEG_INF, NEG_INF),
                  (NAN, NAN)]);
}

#[test]
fn ceil_table() {
    check_unary("ceil",
                ceil,
                &[(2.1, 3.0),
                  (-2.1, -2.0),
                  (-0.5, 0.0),
                  (0.5, 1.0),
                  (3.0, 3.0),
                  (1e300, 1e300),
                  (INF, INF),
                  (NEG_INF, NEG_INF),
                  (NAN, NAN)]);
}

#[test]
fn fmod_table() {
    check_binary("fmod",
                 fmod,
                 &[(7.0, 3.0, 1.0),
                   (-7.0, 3.0, -1.0),
                   (7.5, 2.0, 1.5),
                   (1.0, 0.0, NAN),
                   (INF, 2.0, NAN),
                   (NEG_INF, 2.0, NAN),
                   (INF, INF, NAN),
                   (NAN, INF, NAN),
                   (-5.5, INF, -5.5),
                   (5.5, NEG_INF, 5.5),
                   (NAN, 2.0, NAN),
                   (2.0, NAN, NAN)]);
}

#[test]
fn sqrt_table() {
    check_unary("sqrt",
                sqrt,
                &[(4.0, 2.0),
                  (0.0, 0.0),
                  (-1.0, NAN),
                  (NEG_INF, NAN),
                  (INF, INF),
                  (NAN, NAN)]);
    assert!(sqrt(-0.0).is_sign_negative());
}

#[test]
fn exp_table() {
    check_unary("exp",
                exp,
                &[(0.0, 1.0),
                  (INF, INF),
                  (NEG_INF, 0.0),
                  (710.0, INF),
                  (-746.0, 0.0),
                  (NAN, NAN)]);
}

#[test]
fn log_table() {
    check_unary("log",
                log,
                &[(1.0, 0.0),
                  (E, 1.0),
                  (0.0, NEG_INF),
                  (-0.0, NEG_INF),
                  (-1.0, NAN),
                  (NEG_INF, NAN),
                  (INF, INF),
                  (NAN, NAN)]);
}

#[test]
fn pow_table() {
    check_binary("pow",
                 pow,
                 &[(0.0, NAN, NAN),
                   (0.0, -3.0, INF),
                   (0.0, -0.5, INF),
                   (INF, -2.0, 0.0),
                   (INF, -0.5, 0.0),
                   (-1.0, NEG_INF, 1.0),
                   (1.0, NAN, 1.0),
                   (1.0, INF, 1.0),
                   (NAN, 0.0, 1.0),
                   (INF, 0.0, 1.0),
                   (0.0, 5.0, 0.0),
                   (0.0, INF, 0.0),
                   (INF, 2.0, INF),
                   (NEG_INF, 3.0, NEG_INF),
                   (NEG_INF, 2.0, INF),
                   (2.0, INF, INF),
                   (0.5, INF, 0.0),
                   (NAN, 1.0, NAN),
                   (2.0, NAN, NAN),
                   (10.0, -2.0, 0.01),
                   (2.0, -1.0, 0.5)]);
}

#[test]
fn trig_rejects_non_finite_input() {
    for x in [INF, NEG_INF, NAN] {
        assert!(sin(x).is_nan(), "sin({x})");
        assert!(cos(x).is_nan(), "cos({x})");
        assert!(tan(x).is_nan(), "tan({x})");
    }
    assert_eq!(sin(0.0), 0.0);
}

#[test]
fn atan_table() {
    check_unary("atan",
                atan,
                &[(0.0, 0.0), (INF, FRAC_PI_2), (NEG_INF, -FRAC_PI_2), (NAN, NAN)]);
}

#[test]
fn asin_table() {
    check_unary("asin",
                asin,
                &[(0.0, 0.0),
                  (1.0, FRAC_PI_2),
                  (-1.0, -FRAC_PI_2),
                  (1.000_000_1, NAN),
                  (-1.5, NAN),
                  (INF, NAN),
                  (NEG_INF, NAN),
                  (NAN, NAN)]);
}

#[test]
fn acos_table() {
    check_unary("acos",
                acos,
                &[(1.0, 0.0),
                  (-1.0, PI),
                  (0.0, FRAC_PI_2),
                  (1.5, NAN),
                  (-1.000_000_1, NAN),
                  (INF, NAN),
                  (NAN, NAN)]);
}

#[test]
fn signed_zeros_are_preserved() {
    let negative_zero_results = [("sin", sin(-0.0)),
                                 ("tan", tan(-0.0)),
                                 ("atan", atan(-0.0)),
                                 ("asin", asin(-0.0)),
                                 ("floor", floor(-0.0)),
                                 ("ceil", ceil(-0.0)),
                                 ("ceil", ceil(-0.5)),
                                 ("ceil", ceil(-0.999)),
                                 ("sqrt", sqrt(-0.0)),
                                 ("fmod", fmod(-0.0, 3.0)),
                                 ("fmod", fmod(-6.0, 3.0))];
    for (name, value) in negative_zero_results {
        assert!(value == 0.0 && value.is_sign_negative(), "{name} gave {value}");
    }

    for value in [sin(0.0), floor(0.5), ceil(0.0), atan(0.0), fmod(6.0, 3.0)] {
        assert!(value == 0.0 && value.is_sign_positive(), "got {value}");
    }
    assert_eq!(floor(-0.5), -1.0);
    assert_eq!(ceil(0.5), 1.0);
}
