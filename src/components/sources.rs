//! Voltage and current sources.

use crate::complex::Complex;

/// Source excitation gathered over one solve.
///
/// Voltage source magnitudes are summed as real values; their phase angles
/// are kept on the component for display but do not rotate the sum.
/// Current sources are counted but not folded into the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Excitation {
    /// Sum of voltage source magnitudes (volts)
    pub total_voltage: f64,
    /// Number of voltage sources seen
    pub voltage_sources: usize,
    /// Number of current sources left out of the loop
    pub excluded_current_sources: usize,
}

impl Excitation {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a voltage source EMF.
    pub fn add_voltage(&mut self, volts: f64) {
        self.total_voltage += volts;
        self.voltage_sources += 1;
    }

    /// Record a current source that the series loop does not model.
    pub fn exclude_current(&mut self) {
        self.excluded_current_sources += 1;
    }

    /// The summed EMF as a phasor at 0°.
    pub fn voltage_phasor(&self) -> Complex {
        Complex::from_real(self.total_voltage)
    }
}

/// `magnitude ∠ phase` for a source; missing phase means 0°.
pub(crate) fn phasor(magnitude: f64, phase_degrees: Option<f64>) -> Complex {
    Complex::from_polar(magnitude, phase_degrees.unwrap_or(0.0))
}
