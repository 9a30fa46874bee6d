//! Linear passive components: Resistor, Capacitor, Inductor.
//!
//! Two conventions are supported for reactive parts, selected by
//! [`ReactanceMode`]:
//!
//! - `Coefficient`: the stored value already is the signed reactance in ohms.
//!   Capacitors are created negative, inductors positive. Frequency is
//!   ignored.
//! - `FrequencyAware`: the stored value is the physical capacitance (F) or
//!   inductance (H) and the reactance is derived from ω = 2πf:
//!   X_C = -1/(ωC), X_L = ωL.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::complex::Complex;
use crate::error::PhasorError;

/// How capacitor and inductor values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReactanceMode {
    /// Values are pre-computed reactances in ohms
    #[default]
    Coefficient,
    /// Values are farads / henries, scaled by the excitation frequency
    FrequencyAware,
}

impl FromStr for ReactanceMode {
    type Err = PhasorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coefficient" | "reactance" => Ok(ReactanceMode::Coefficient),
            "physical" | "frequency" | "frequency-aware" => Ok(ReactanceMode::FrequencyAware),
            _ => Err(PhasorError::invalid_input("reactance mode", s)),
        }
    }
}

impl fmt::Display for ReactanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactanceMode::Coefficient => f.write_str("coefficient"),
            ReactanceMode::FrequencyAware => f.write_str("physical"),
        }
    }
}

/// ω = 2πf
pub fn angular_frequency(frequency_hz: f64) -> f64 {
    2.0 * PI * frequency_hz
}

/// Z_R = R + 0i
pub(crate) fn resistor_impedance(resistance: f64) -> Complex {
    Complex::from_real(resistance)
}

/// Capacitor impedance. `None` when ωC = 0 in frequency-aware mode.
pub(crate) fn capacitor_impedance(value: f64, omega: f64, mode: ReactanceMode) -> Option<Complex> {
    match mode {
        ReactanceMode::Coefficient => Some(Complex::new(0.0, value)),
        ReactanceMode::FrequencyAware => {
            let omega_c = omega * value;
            if omega_c == 0.0 {
                None
            } else {
                Some(Complex::new(0.0, -1.0 / omega_c))
            }
        }
    }
}

/// Inductor impedance.
pub(crate) fn inductor_impedance(value: f64, omega: f64, mode: ReactanceMode) -> Complex {
    match mode {
        ReactanceMode::Coefficient => Complex::new(0.0, value),
        ReactanceMode::FrequencyAware => Complex::new(0.0, omega * value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_mode_ignores_frequency() {
        let a = inductor_impedance(3.0, angular_frequency(50.0), ReactanceMode::Coefficient);
        let b = inductor_impedance(3.0, angular_frequency(5e3), ReactanceMode::Coefficient);
        assert_eq!(a, b);
        assert_eq!(a, Complex::new(0.0, 3.0));
    }

    #[test]
    fn test_frequency_aware_reactances() {
        let omega = angular_frequency(60.0);
        // 100 mH at 60 Hz ≈ 37.699 Ω
        let zl = inductor_impedance(0.1, omega, ReactanceMode::FrequencyAware);
        assert!((zl.imag - 37.69911).abs() < 1e-4);

        // 100 µF at 60 Hz ≈ -26.526 Ω
        let zc = capacitor_impedance(100e-6, omega, ReactanceMode::FrequencyAware).unwrap();
        assert!((zc.imag + 26.52582).abs() < 1e-4);
        assert_eq!(zc.real, 0.0);
    }

    #[test]
    fn test_capacitor_open_at_dc() {
        assert!(capacitor_impedance(1e-6, 0.0, ReactanceMode::FrequencyAware).is_none());
        assert!(capacitor_impedance(0.0, 10.0, ReactanceMode::FrequencyAware).is_none());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(
            "physical".parse::<ReactanceMode>().unwrap(),
            ReactanceMode::FrequencyAware
        );
        assert_eq!(
            "Coefficient".parse::<ReactanceMode>().unwrap(),
            ReactanceMode::Coefficient
        );
        assert!("mesh".parse::<ReactanceMode>().is_err());
    }
}
