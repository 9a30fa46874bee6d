//! Flat series-loop aggregation.

use tracing::{debug, warn};

use crate::circuit::validate_components;
use crate::complex::Complex;
use crate::components::{angular_frequency, Component, Contribution, Excitation, ReactanceMode};
use crate::error::{PhasorError, Result};
use crate::DEFAULT_FREQUENCY_HZ;

use super::CircuitResult;

/// Configuration for a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Excitation frequency in Hz.
    pub frequency_hz: f64,
    /// How capacitor and inductor values are interpreted.
    pub reactance_mode: ReactanceMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            reactance_mode: ReactanceMode::default(),
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the excitation frequency (Hz).
    pub fn with_frequency(mut self, frequency_hz: f64) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Set the reactance convention.
    ///
    /// `Coefficient` reads capacitor/inductor values as ready-made
    /// reactances; `FrequencyAware` reads them as farads/henries.
    pub fn with_reactance_mode(mut self, mode: ReactanceMode) -> Self {
        self.reactance_mode = mode;
        self
    }

    /// Angular frequency ω = 2πf.
    pub fn omega(&self) -> f64 {
        angular_frequency(self.frequency_hz)
    }

    /// Check the frequency is usable under the selected mode.
    pub fn validate(&self) -> Result<()> {
        let f = self.frequency_hz;
        if !f.is_finite() || f < 0.0 {
            return Err(PhasorError::invalid_parameter(
                "frequency",
                format!("must be a finite, non-negative value in Hz (got {})", f),
            ));
        }
        if self.reactance_mode == ReactanceMode::FrequencyAware && f == 0.0 {
            return Err(PhasorError::invalid_parameter(
                "frequency",
                "physical reactances need a frequency above 0 Hz",
            ));
        }
        Ok(())
    }
}

/// Reduce the components to one series impedance and loop current.
///
/// Every passive component is summed as if in a single series loop, in slice
/// order, whatever the wiring. Voltage source magnitudes are summed into the
/// loop EMF. Current sources are left out.
///
/// # Errors
/// - [`PhasorError::EmptyCircuit`] if `components` is empty
/// - [`PhasorError::SingularImpedance`] if the summed impedance is zero
/// - [`PhasorError::InvalidInput`] / [`PhasorError::InvalidParameter`] for
///   non-finite values or an unusable frequency
pub fn solve(components: &[Component], config: &SolverConfig) -> Result<CircuitResult> {
    if components.is_empty() {
        return Err(PhasorError::EmptyCircuit);
    }
    config.validate()?;
    validate_components(components)?;

    let omega = config.omega();
    let mut total_impedance = Complex::ZERO;
    let mut excitation = Excitation::new();

    for component in components {
        match component.contribution(omega, config.reactance_mode)? {
            Contribution::Impedance(z) => total_impedance = total_impedance + z,
            Contribution::Voltage(v) => excitation.add_voltage(v),
            Contribution::Current(_) => excitation.exclude_current(),
        }
    }

    if excitation.excluded_current_sources > 0 {
        warn!(
            count = excitation.excluded_current_sources,
            "current sources are not included in the series loop"
        );
    }

    let total_voltage = excitation.total_voltage;
    let current = excitation
        .voltage_phasor()
        .divide(total_impedance)
        .map_err(|_| PhasorError::SingularImpedance {
            voltage: total_voltage,
        })?;

    let phase_degrees = total_impedance.angle_degrees();
    let phase = phase_degrees.to_radians();
    let current_magnitude = current.magnitude();
    let power_factor = phase.cos();
    let apparent_power = total_voltage * current_magnitude;

    let result = CircuitResult {
        impedance: total_impedance,
        impedance_magnitude: total_impedance.magnitude(),
        current,
        current_magnitude,
        phase_degrees,
        current_phase_degrees: current.angle_degrees(),
        power_factor,
        apparent_power,
        active_power: apparent_power * power_factor,
        reactive_power: apparent_power * phase.sin(),
        total_voltage,
    };

    check_finite(&result)?;

    debug!(
        components = components.len(),
        voltage_sources = excitation.voltage_sources,
        frequency_hz = config.frequency_hz,
        mode = %config.reactance_mode,
        impedance = %result.impedance,
        current = %result.current,
        "solved series loop"
    );

    Ok(result)
}

/// Reject results that overflowed f64 even though every input was finite.
fn check_finite(result: &CircuitResult) -> Result<()> {
    let overflow = |quantity: &str| {
        Err(PhasorError::NumericOverflow {
            quantity: quantity.to_string(),
        })
    };
    if !result.current.is_finite() || !result.current_magnitude.is_finite() {
        return overflow("current");
    }
    let powers = [
        result.apparent_power,
        result.active_power,
        result.reactive_power,
    ];
    if powers.iter().any(|p| !p.is_finite()) {
        return overflow("power");
    }
    Ok(())
}
