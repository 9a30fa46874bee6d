//! Complex arithmetic for phasor calculations.
//!
//! [`Complex`] is a plain `(real, imag)` value type. Every operation returns a
//! new value; nothing is mutated in place. Division is the only partial
//! operation and reports a zero-magnitude divisor as
//! [`PhasorError::DivisionByZero`] instead of producing `NaN` or a silent zero.
//!
//! Angles at the public boundary are in degrees, matching how phasors are
//! written by hand (`5.00 ∠ 53.13°`).

mod operation;

pub use operation::{Operation, CALCULATOR_EXPONENT};

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{PhasorError, Result};

/// A complex number in rectangular form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

/// A complex number in polar form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Distance from the origin
    pub magnitude: f64,
    /// Angle from the positive real axis, in degrees within (-180, 180]
    pub angle_degrees: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Complex = Complex { real: 0.0, imag: 0.0 };
    /// `1 + 0i`
    pub const ONE: Complex = Complex { real: 1.0, imag: 0.0 };

    /// Create a complex number from its rectangular parts.
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// A purely real value.
    pub const fn from_real(real: f64) -> Self {
        Self { real, imag: 0.0 }
    }

    /// Build from a magnitude and an angle in degrees.
    pub fn from_polar(magnitude: f64, angle_degrees: f64) -> Self {
        let theta = angle_degrees.to_radians();
        Self::new(magnitude * theta.cos(), magnitude * theta.sin())
    }

    /// `(a+c) + (b+d)i`
    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.real + other.real, self.imag + other.imag)
    }

    /// `(a-c) + (b-d)i`
    pub fn subtract(self, other: Complex) -> Complex {
        Complex::new(self.real - other.real, self.imag - other.imag)
    }

    /// `(ac-bd) + (ad+bc)i`
    pub fn multiply(self, other: Complex) -> Complex {
        let (a, b, c, d) = (self.real, self.imag, other.real, other.imag);
        Complex::new(a * c - b * d, a * d + b * c)
    }

    /// Divide by `other`.
    ///
    /// Scales by the larger divisor part (Smith's method) so that divisors
    /// near either end of the f64 range neither underflow to a false zero
    /// nor overflow to a zero quotient.
    ///
    /// Returns [`PhasorError::DivisionByZero`] only when `other` is exactly
    /// `0 + 0i`.
    pub fn divide(self, other: Complex) -> Result<Complex> {
        let (a, b, c, d) = (self.real, self.imag, other.real, other.imag);
        if c == 0.0 && d == 0.0 {
            return Err(PhasorError::DivisionByZero);
        }
        if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Ok(Complex::new((a + b * r) / den, (b - a * r) / den))
        } else {
            let r = c / d;
            let den = c * r + d;
            Ok(Complex::new((a * r + b) / den, (b * r - a) / den))
        }
    }

    /// `a - bi`
    pub fn conjugate(self) -> Complex {
        Complex::new(self.real, -self.imag)
    }

    /// Raise to a non-negative integer power via De Moivre's formula.
    ///
    /// The value is taken to polar form `(r, θ)` and `(rⁿ, nθ)` is converted
    /// back to rectangular form.
    pub fn powi(self, n: u32) -> Complex {
        let r = self.magnitude();
        let theta = self.imag.atan2(self.real);
        let new_r = r.powi(n as i32);
        let new_theta = theta * n as f64;
        Complex::new(new_r * new_theta.cos(), new_r * new_theta.sin())
    }

    /// Euclidean norm `√(real² + imag²)`, without intermediate overflow.
    pub fn magnitude(self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Argument in degrees, normalized to (-180, 180].
    pub fn angle_degrees(self) -> f64 {
        let deg = self.imag.atan2(self.real).to_degrees();
        if deg <= -180.0 {
            deg + 360.0
        } else {
            deg
        }
    }

    /// Convert to polar form.
    pub fn to_polar(self) -> Polar {
        Polar {
            magnitude: self.magnitude(),
            angle_degrees: self.angle_degrees(),
        }
    }

    /// Both parts are finite.
    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

/// Convert rectangular parts to polar form.
pub fn to_polar(real: f64, imag: f64) -> Polar {
    Complex::new(real, imag).to_polar()
}

impl Polar {
    /// Convert back to rectangular form.
    pub fn to_rectangular(self) -> Complex {
        Complex::from_polar(self.magnitude, self.angle_degrees)
    }
}

impl From<Polar> for Complex {
    fn from(p: Polar) -> Self {
        p.to_rectangular()
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Complex::from_real(real)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        self.subtract(rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        self.multiply(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.real, -self.imag)
    }
}

impl std::iter::Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, Complex::add)
    }
}

impl fmt::Display for Complex {
    /// Rectangular form with two decimals, e.g. `3.00 - 4.00j`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.imag >= 0.0 { '+' } else { '-' };
        write!(f, "{:.2} {} {:.2}j", self.real, sign, self.imag.abs())
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ∠ {:.2}°", self.magnitude, self.angle_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const Z1: Complex = Complex::new(3.0, 4.0);
    const Z2: Complex = Complex::new(2.0, -1.0);

    #[test]
    fn test_basic_operations() {
        assert_eq!(Z1.add(Z2), Complex::new(5.0, 3.0));
        assert_eq!(Z1.subtract(Z2), Complex::new(1.0, 5.0));
        assert_eq!(Z1.multiply(Z2), Complex::new(10.0, 5.0));
        assert_eq!(Z1.conjugate(), Complex::new(3.0, -4.0));
    }

    #[test]
    fn test_divide() {
        let q = Z1.divide(Z2).unwrap();
        assert_abs_diff_eq!(q.real, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(q.imag, 2.2, epsilon = 1e-12);
    }

    #[test]
    fn test_divide_by_zero_is_error() {
        let err = Z1.divide(Complex::ZERO).unwrap_err();
        assert!(matches!(err, PhasorError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_tiny_divisor() {
        // c² + d² underflows here, but the divisor is not zero
        let q = Complex::from_real(120.0).divide(Complex::new(1e-170, 0.0)).unwrap();
        assert_abs_diff_eq!(q.real / 1.2e172, 1.0, epsilon = 1e-12);
        assert_eq!(q.imag, 0.0);

        let q = Complex::new(1e-170, 1e-170).divide(Complex::new(0.0, 1e-170)).unwrap();
        assert_abs_diff_eq!(q.real, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.imag, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_divide_by_huge_divisor() {
        // c² + d² overflows here, the quotient must not collapse to zero
        let q = Complex::new(3e200, 4e200).divide(Complex::new(1e200, 0.0)).unwrap();
        assert_abs_diff_eq!(q.real, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.imag, 4.0, epsilon = 1e-12);

        let q = Complex::ONE.divide(Complex::new(1e200, 1e200)).unwrap();
        assert_abs_diff_eq!(q.real * 2e200, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.imag * 2e200, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_magnitude_extremes() {
        assert_abs_diff_eq!(Complex::new(3e200, 4e200).magnitude() / 5e200, 1.0, epsilon = 1e-12);
        assert!(Complex::new(1e-170, 0.0).magnitude() > 0.0);
    }

    #[test]
    fn test_square() {
        // (3+4i)² = 9 - 16 + 24i
        let sq = Z1.powi(2);
        assert_abs_diff_eq!(sq.real, -7.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sq.imag, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_power_zero_is_one() {
        let p = Z2.powi(0);
        assert_abs_diff_eq!(p.real, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.imag, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_polar() {
        let p = to_polar(3.0, 4.0);
        assert_abs_diff_eq!(p.magnitude, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.angle_degrees, 53.130102354, epsilon = 1e-6);
        assert_eq!(p.to_string(), "5.00 ∠ 53.13°");
    }

    #[test]
    fn test_negative_real_axis_is_plus_180() {
        let p = Complex::new(-1.0, -0.0).to_polar();
        assert_abs_diff_eq!(p.angle_degrees, 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Z1.to_string(), "3.00 + 4.00j");
        assert_eq!(Z2.to_string(), "2.00 - 1.00j");
    }

    #[test]
    fn test_operator_overloads() {
        assert_eq!(Z1 + Z2, Z1.add(Z2));
        assert_eq!(Z1 - Z2, Z1.subtract(Z2));
        assert_eq!(Z1 * Z2, Z1.multiply(Z2));
        assert_eq!(-Z1, Complex::new(-3.0, -4.0));
        let total: Complex = [Z1, Z2, Complex::ONE].into_iter().sum();
        assert_eq!(total, Complex::new(6.0, 3.0));
    }
}
