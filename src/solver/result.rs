//! Solve results.

use std::fmt;

use crate::complex::{Complex, Polar};

/// Sign of the loop's phase angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseCharacter {
    /// Current lags voltage (phase > 0)
    Inductive,
    /// Current leads voltage (phase < 0)
    Capacitive,
    /// Current in phase with voltage
    Resistive,
}

impl PhaseCharacter {
    /// Classify an impedance phase angle in degrees.
    pub fn from_phase(phase_degrees: f64) -> Self {
        if phase_degrees > 0.0 {
            PhaseCharacter::Inductive
        } else if phase_degrees < 0.0 {
            PhaseCharacter::Capacitive
        } else {
            PhaseCharacter::Resistive
        }
    }
}

impl fmt::Display for PhaseCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PhaseCharacter::Inductive => "Inductivo",
            PhaseCharacter::Capacitive => "Capacitivo",
            PhaseCharacter::Resistive => "Resistivo",
        };
        f.write_str(label)
    }
}

/// Snapshot produced by one successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitResult {
    /// Total series impedance (ohms)
    pub impedance: Complex,
    pub impedance_magnitude: f64,
    /// Loop current (amps)
    pub current: Complex,
    pub current_magnitude: f64,
    /// Impedance angle in degrees
    pub phase_degrees: f64,
    /// Current angle in degrees
    pub current_phase_degrees: f64,
    /// cos(phase)
    pub power_factor: f64,
    /// S = V·|I| (VA)
    pub apparent_power: f64,
    /// P = S·cos(phase) (W)
    pub active_power: f64,
    /// Q = S·sin(phase) (VAR)
    pub reactive_power: f64,
    /// Sum of voltage source magnitudes (volts)
    pub total_voltage: f64,
}

impl CircuitResult {
    /// Inductive, capacitive or resistive, by the sign of the phase.
    pub fn character(&self) -> PhaseCharacter {
        PhaseCharacter::from_phase(self.phase_degrees)
    }

    /// The single-loop KVL equation, e.g. `120V = I × (10.00 + 0.00j) Ω`.
    pub fn mesh_equation(&self) -> String {
        format!("{}V = I × ({}) Ω", self.total_voltage, self.impedance)
    }

    /// Source voltage phasor, referenced at 0°.
    pub fn voltage_phasor(&self) -> Polar {
        Complex::from_real(self.total_voltage).to_polar()
    }

    /// Loop current phasor.
    pub fn current_phasor(&self) -> Polar {
        Polar {
            magnitude: self.current_magnitude,
            angle_degrees: self.current_phase_degrees,
        }
    }

    /// Impedance in polar form.
    pub fn impedance_polar(&self) -> Polar {
        Polar {
            magnitude: self.impedance_magnitude,
            angle_degrees: self.phase_degrees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(PhaseCharacter::from_phase(12.0), PhaseCharacter::Inductive);
        assert_eq!(PhaseCharacter::from_phase(-0.5), PhaseCharacter::Capacitive);
        assert_eq!(PhaseCharacter::from_phase(0.0), PhaseCharacter::Resistive);
        assert_eq!(PhaseCharacter::Resistive.to_string(), "Resistivo");
        assert_eq!(PhaseCharacter::Inductive.to_string(), "Inductivo");
        assert_eq!(PhaseCharacter::Capacitive.to_string(), "Capacitivo");
    }
}
