use approx::{assert_abs_diff_eq, assert_relative_eq};
use softmath::{
    SoftFloat, acos, asin, atan, ceil, cos, exp, floor, fmod, is_finite, is_infinite, is_nan, log, pow,
    sin, sqrt, tan,
};

/// `count` evenly spaced samples from `start` to `end`, both included.
fn samples(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let last = (count - 1) as f64;
    (0..count).map(move |i| start + (end - start) * (i as f64) / last)
}

const MAGNITUDES: &[f64] = &[1e-300, 1e-100, 1e-10, 1e-3, 0.1, 0.5, 1.0, 2.0, 3.0, 10.0, 12345.678,
                             1e10, 1e100, 1e300];

#[test]
fn exactly_one_classification_holds() {
    let values = [0.0,
                  -0.0,
                  1.0,
                  -1.0,
                  f64::MIN_POSITIVE,
                  5e-324,
                  f64::MAX,
                  f64::MIN,
                  f64::INFINITY,
                  f64::NEG_INFINITY,
                  f64::NAN];

    for x in values {
        let holding = [is_finite(x), is_infinite(x), is_nan(x)].iter()
                                                               .filter(|&&b| b)
                                                               .count();
        assert_eq!(holding, 1, "classification of {x}");
        assert_eq!(is_finite(x), x.is_finite(), "is_finite({x})");
        assert_eq!(is_infinite(x), x.is_infinite(), "is_infinite({x})");
        assert_eq!(is_nan(x), x.is_nan(), "is_nan({x})");
    }
}

#[test]
fn sqrt_squares_back() {
    for &x in MAGNITUDES {
        let root = sqrt(x);
        assert_relative_eq!(root * root, x, max_relative = 1e-9);
    }
    assert_eq!(sqrt(0.0), 0.0);
}

#[test]
fn sqrt_matches_std() {
    for &x in MAGNITUDES {
        assert_relative_eq!(sqrt(x), x.sqrt(), max_relative = 1e-12);
    }
}

#[test]
fn exp_inverts_log() {
    for &x in MAGNITUDES {
        assert_relative_eq!(exp(log(x)), x, max_relative = 1e-6);
    }
}

#[test]
fn exp_matches_std() {
    for x in samples(-700.0, 700.0, 281) {
        assert_relative_eq!(exp(x), x.exp(), max_relative = 1e-10);
    }
}

#[test]
fn log_matches_std() {
    for &x in MAGNITUDES {
        assert_abs_diff_eq!(log(x), x.ln(), epsilon = 1e-10);
    }
}

const SUBNORMALS: &[f64] = &[5e-324, 1e-320, 2.5e-315, 1e-310, 2.2e-308];

#[test]
fn pythagorean_identity() {
    for x in samples(-100.0, 100.0, 401) {
        let s = sin(x);
        let c = cos(x);
        assert_abs_diff_eq!(s * s + c * c, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn pythagorean_identity_for_large_angles() {
    for magnitude in [1e6, 1e10, 1e15, 1e17, 1e20, 1e100, 1e300] {
        for x in [magnitude, -magnitude, magnitude * 1.234_567] {
            let s = sin(x);
            let c = cos(x);
            assert_abs_diff_eq!(s * s + c * c, 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn sqrt_of_subnormals_matches_std() {
    for &x in SUBNORMALS {
        assert_relative_eq!(sqrt(x), x.sqrt(), max_relative = 1e-12);
    }
}

#[test]
fn log_of_subnormals_matches_std() {
    for &x in SUBNORMALS {
        assert_abs_diff_eq!(log(x), x.ln(), epsilon = 1e-10);
    }
}

#[test]
fn sin_and_cos_match_std() {
    for x in samples(-10.0, 10.0, 201) {
        assert_abs_diff_eq!(sin(x), x.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(cos(x), x.cos(), epsilon = 1e-12);
    }
}

#[test]
fn tan_matches_std() {
    for x in samples(-1.5, 1.5, 61) {
        assert_relative_eq!(tan(x), x.tan(), max_relative = 1e-9, epsilon = 1e-12);
    }
}

#[test]
fn atan_inverts_tan() {
    for x in samples(-1.5, 1.5, 61) {
        assert_abs_diff_eq!(atan(tan(x)), x, epsilon = 1e-6);
    }
    assert_abs_diff_eq!(atan(tan(1.5707)), 1.5707, epsilon = 1e-6);
}

#[test]
fn atan_matches_std() {
    for x in samples(-100.0, 100.0, 401) {
        assert_abs_diff_eq!(atan(x), x.atan(), epsilon = 1e-12);
    }
    for x in [0.999_999, 1.0, 1.000_001, 1e10, -1e10] {
        assert_abs_diff_eq!(atan(x), x.atan(), epsilon = 1e-12);
    }
}

#[test]
fn asin_and_acos_match_std() {
    for x in samples(-0.999, 0.999, 199) {
        assert_abs_diff_eq!(asin(x), x.asin(), epsilon = 1e-9);
        assert_abs_diff_eq!(acos(x), x.acos(), epsilon = 1e-9);
    }
}

#[test]
fn asin_and_acos_are_complementary() {
    for x in samples(-1.0, 1.0, 41) {
        assert_abs_diff_eq!(asin(x) + acos(x), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }
}

#[test]
fn integral_powers_are_exact() {
    assert_eq!(pow(2.0, 10.0), 1024.0);
    assert_eq!(pow(3.0, 4.0), 81.0);
    assert_eq!(pow(-2.0, 3.0), -8.0);
    assert_eq!(pow(-2.0, 4.0), 16.0);
    assert_eq!(pow(2.0, -2.0), 0.25);
    assert_eq!(pow(10.0, 2.0), 100.0);
}

#[test]
fn integral_powers_around_the_squaring_limit_match_std() {
    for exponent in [63.0, 64.0, 65.0, -64.0, -65.0] {
        assert_relative_eq!(pow(1.5, exponent), 1.5_f64.powf(exponent), max_relative = 1e-12);
        assert_relative_eq!(pow(-1.5, exponent), (-1.5_f64).powf(exponent), max_relative = 1e-12);
    }
}

#[test]
fn large_integral_powers_keep_their_accuracy() {
    let base = 1.000_000_1_f64;
    for exponent in [2_147_483_648.0, 2_147_483_649.0, 1e6] {
        assert_relative_eq!(pow(base, exponent), base.powf(exponent), max_relative = 1e-10);
    }
}

#[test]
fn fractional_powers_match_std() {
    for base in [0.5, 2.0, 3.7, 10.0, 123.456] {
        for exponent in [-2.5, -0.5, 0.5, 1.5, 3.25] {
            assert_relative_eq!(pow(base, exponent), base.powf(exponent), max_relative = 1e-9);
        }
    }
}

#[test]
fn negative_bases_take_the_sign_of_odd_exponents() {
    assert_relative_eq!(pow(-8.0, 1.0 / 3.0), -2.0, max_relative = 1e-12);
    assert!(pow(-2.0, 0.5) < 0.0);
}

#[test]
fn floor_and_ceil_bracket_the_value() {
    for x in samples(-50.0, 50.0, 333) {
        let low = floor(x);
        let high = ceil(x);
        assert!(low <= x && x < low + 1.0, "floor({x}) = {low}");
        assert!(high - 1.0 < x && x <= high, "ceil({x}) = {high}");
        assert_eq!(low, x.floor());
        assert_eq!(high, x.ceil());
    }
}

#[test]
fn fmod_keeps_the_sign_of_the_dividend() {
    assert_abs_diff_eq!(fmod(5.3, 2.0), 1.3, epsilon = 1e-9);
    assert_eq!(fmod(-7.0, 3.0), -1.0);
    assert_eq!(fmod(7.0, -3.0), 1.0);
    assert_eq!(fmod(-7.5, 2.0), -1.5);
}

#[test]
fn fmod_is_exact_for_huge_quotients() {
    for (x, y) in [(1e300, 3.0), (-1e300, 3.0), (1e20, 0.1), (-1e20, 0.1), (f64::MAX, 1.5)] {
        assert_eq!(fmod(x, y), x % y, "fmod({x}, {y})");
    }
}

#[test]
fn extension_trait_forwards_to_the_free_functions() {
    let x = 0.6_f64;

    assert_eq!(x.soft_sqrt(), sqrt(x));
    assert_eq!(x.soft_exp(), exp(x));
    assert_eq!(x.soft_log(), log(x));
    assert_eq!(x.soft_pow(2.5), pow(x, 2.5));
    assert_eq!(x.soft_sin(), sin(x));
    assert_eq!(x.soft_cos(), cos(x));
    assert_eq!(x.soft_tan(), tan(x));
    assert_eq!(x.soft_asin(), asin(x));
    assert_eq!(x.soft_acos(), acos(x));
    assert_eq!(x.soft_atan(), atan(x));
    assert_eq!((-x).soft_fabs(), x);
    assert_eq!(x.soft_floor(), 0.0);
    assert_eq!(x.soft_ceil(), 1.0);
    assert_eq!(7.5_f64.soft_fmod(2.0), 1.5);
    assert!(f64::NAN.soft_is_nan());
    assert!(f64::INFINITY.soft_is_infinite());
    assert!(x.soft_is_finite());
}
