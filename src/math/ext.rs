use crate::math::{classify, elementary, exp, inverse_trig, log, pow, sqrt, trig};

/// Method-call access to the library's routines on `f64`.
///
/// Every method forwards to the free function of the same name; the `soft_`
/// prefix keeps them from colliding with the inherent `f64` methods.
///
/// # Example
/// ```
/// use softmath::SoftFloat;
///
/// let x = 2.0_f64;
/// assert_eq!(x.soft_pow(10.0), 1024.0);
/// assert!((x.soft_sqrt().soft_pow(2.0) - 2.0).abs() < 1e-12);
/// assert!(f64::NAN.soft_is_nan());
/// ```
pub trait SoftFloat: Sized {
    /// See [`classify::is_finite`].
    fn soft_is_finite(self) -> bool;
    /// See [`classify::is_infinite`].
    fn soft_is_infinite(self) -> bool;
    /// See [`classify::is_nan`].
    fn soft_is_nan(self) -> bool;
    /// See [`elementary::fabs`].
    fn soft_fabs(self) -> Self;
    /// See [`elementary::floor`].
    fn soft_floor(self) -> Self;
    /// See [`elementary::ceil`].
    fn soft_ceil(self) -> Self;
    /// See [`elementary::fmod`].
    fn soft_fmod(self, divisor: Self) -> Self;
    /// See [`sqrt::sqrt`].
    fn soft_sqrt(self) -> Self;
    /// See [`exp::exp`].
    fn soft_exp(self) -> Self;
    /// See [`log::log`].
    fn soft_log(self) -> Self;
    /// See [`pow::pow`].
    fn soft_pow(self, exponent: Self) -> Self;
    /// See [`trig::sin`].
    fn soft_sin(self) -> Self;
    /// See [`trig::cos`].
    fn soft_cos(self) -> Self;
    /// See [`trig::tan`].
    fn soft_tan(self) -> Self;
    /// See [`inverse_trig::asin`].
    fn soft_asin(self) -> Self;
    /// See [`inverse_trig::acos`].
    fn soft_acos(self) -> Self;
    /// See [`inverse_trig::atan`].
    fn soft_atan(self) -> Self;
}

impl SoftFloat for f64 {
    fn soft_is_finite(self) -> bool {
        classify::is_finite(self)
    }
    fn soft_is_infinite(self) -> bool {
        classify::is_infinite(self)
    }
    fn soft_is_nan(self) -> bool {
        classify::is_nan(self)
    }
    fn soft_fabs(self) -> Self {
        elementary::fabs(self)
    }
    fn soft_floor(self) -> Self {
        elementary::floor(self)
    }
    fn soft_ceil(self) -> Self {
        elementary::ceil(self)
    }
    fn soft_fmod(self, divisor: Self) -> Self {
        elementary::fmod(self, divisor)
    }
    fn soft_sqrt(self) -> Self {
        sqrt::sqrt(self)
    }
    fn soft_exp(self) -> Self {
        exp::exp(self)
    }
    fn soft_log(self) -> Self {
        log::log(self)
    }
    fn soft_pow(self, exponent: Self) -> Self {
        pow::pow(self, exponent)
    }
    fn soft_sin(self) -> Self {
        trig::sin(self)
    }
    fn soft_cos(self) -> Self {
        trig::cos(self)
    }
    fn soft_tan(self) -> Self {
        trig::tan(self)
    }
    fn soft_asin(self) -> Self {
        inverse_trig::asin(self)
    }
    fn soft_acos(self) -> Self {
        inverse_trig::acos(self)
    }
    fn soft_atan(self) -> Self {
        inverse_trig::atan(self)
    }
}
