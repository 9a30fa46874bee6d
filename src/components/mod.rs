//! Component models for single-loop circuit analysis.
//!
//! This module provides the seven component kinds a circuit can hold:
//! - Passive: Resistor, Capacitor, Inductor
//! - Voltage sources: DC and AC
//! - Current sources: DC and AC
//!
//! Each component maps to a [`Contribution`] to the loop: an impedance for
//! passive parts, an excitation for sources.

mod linear;
mod sources;

pub use linear::{angular_frequency, ReactanceMode};
pub use sources::Excitation;

use std::fmt;
use std::str::FromStr;

use crate::circuit::ComponentId;
use crate::complex::Complex;
use crate::error::{PhasorError, Result};

/// The closed set of component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Resistor (ohms)
    Resistor,
    /// Capacitor (signed reactance coefficient, or farads when frequency-aware)
    Capacitor,
    /// Inductor (reactance coefficient, or henries when frequency-aware)
    Inductor,
    /// DC voltage source (volts)
    VoltageSourceDc,
    /// AC voltage source (volts, with phase)
    VoltageSourceAc,
    /// DC current source (amps)
    CurrentSourceDc,
    /// AC current source (amps, with phase)
    CurrentSourceAc,
}

impl ComponentKind {
    /// Every kind, in toolbar order.
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Resistor,
        ComponentKind::Capacitor,
        ComponentKind::Inductor,
        ComponentKind::VoltageSourceDc,
        ComponentKind::VoltageSourceAc,
        ComponentKind::CurrentSourceDc,
        ComponentKind::CurrentSourceAc,
    ];

    /// Magnitude a freshly placed component starts with.
    pub fn default_value(self) -> f64 {
        match self {
            ComponentKind::Resistor => 10.0,
            // Capacitive reactance is negative by convention
            ComponentKind::Capacitor => -2.0,
            ComponentKind::Inductor => 1.0,
            ComponentKind::VoltageSourceDc | ComponentKind::VoltageSourceAc => 120.0,
            ComponentKind::CurrentSourceDc | ComponentKind::CurrentSourceAc => 10.0,
        }
    }

    /// Phase a freshly placed component starts with, if the kind has one.
    pub fn default_phase(self) -> Option<f64> {
        self.has_phase().then_some(0.0)
    }

    /// Only AC sources carry a phase angle.
    pub fn has_phase(self) -> bool {
        matches!(
            self,
            ComponentKind::VoltageSourceAc | ComponentKind::CurrentSourceAc
        )
    }

    /// Check if this kind is a source rather than a passive element.
    pub fn is_source(self) -> bool {
        !matches!(
            self,
            ComponentKind::Resistor | ComponentKind::Capacitor | ComponentKind::Inductor
        )
    }

    /// Unit symbol for the stored value.
    pub fn unit(self, mode: ReactanceMode) -> &'static str {
        match (self, mode) {
            (ComponentKind::Resistor, _) => "Ω",
            (ComponentKind::Capacitor, ReactanceMode::FrequencyAware) => "F",
            (ComponentKind::Inductor, ReactanceMode::FrequencyAware) => "H",
            (ComponentKind::Capacitor | ComponentKind::Inductor, ReactanceMode::Coefficient) => "Ω",
            (ComponentKind::VoltageSourceDc | ComponentKind::VoltageSourceAc, _) => "V",
            (ComponentKind::CurrentSourceDc | ComponentKind::CurrentSourceAc, _) => "A",
        }
    }

    /// Keyword used in circuit descriptions.
    pub fn keyword(self) -> &'static str {
        match self {
            ComponentKind::Resistor => "resistor",
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Inductor => "inductor",
            ComponentKind::VoltageSourceDc => "voltage_source_dc",
            ComponentKind::VoltageSourceAc => "voltage_source_ac",
            ComponentKind::CurrentSourceDc => "current_source_dc",
            ComponentKind::CurrentSourceAc => "current_source_ac",
        }
    }

    /// Parse a component kind from a description-name prefix.
    ///
    /// Multi-letter prefixes are checked first so `VAC1` is not read as a
    /// DC source named `AC1`.
    pub fn from_name_prefix(name: &str) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        if upper.starts_with("VAC") {
            Some(ComponentKind::VoltageSourceAc)
        } else if upper.starts_with("VDC") {
            Some(ComponentKind::VoltageSourceDc)
        } else if upper.starts_with("IAC") {
            Some(ComponentKind::CurrentSourceAc)
        } else if upper.starts_with("IDC") {
            Some(ComponentKind::CurrentSourceDc)
        } else {
            match upper.chars().next()? {
                'R' => Some(ComponentKind::Resistor),
                'C' => Some(ComponentKind::Capacitor),
                'L' => Some(ComponentKind::Inductor),
                'V' => Some(ComponentKind::VoltageSourceDc),
                'I' => Some(ComponentKind::CurrentSourceDc),
                _ => None,
            }
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.keyword())
    }
}

impl FromStr for ComponentKind {
    type Err = PhasorError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "resistor" | "r" => Ok(ComponentKind::Resistor),
            "capacitor" | "c" => Ok(ComponentKind::Capacitor),
            "inductor" | "l" => Ok(ComponentKind::Inductor),
            "voltage_source_dc" | "voltage_source" | "vdc" => Ok(ComponentKind::VoltageSourceDc),
            "voltage_source_ac" | "ac_source" | "vac" => Ok(ComponentKind::VoltageSourceAc),
            "current_source_dc" | "idc" => Ok(ComponentKind::CurrentSourceDc),
            "current_source_ac" | "current_source" | "iac" => Ok(ComponentKind::CurrentSourceAc),
            _ => Err(PhasorError::UnknownComponentType {
                component_type: s.to_string(),
                line: 0,
            }),
        }
    }
}

/// Schematic orientation. Presentation-only; never affects the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Horizontal, terminal 1 on the left
    #[default]
    Right,
    /// Vertical, terminal 1 on top
    Down,
    /// Horizontal, terminal 1 on the right
    Left,
    /// Vertical, terminal 1 at the bottom
    Up,
}

impl Orientation {
    /// Rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Right => 0,
            Orientation::Down => 90,
            Orientation::Left => 180,
            Orientation::Up => 270,
        }
    }

    /// The next orientation, 90° clockwise.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
            Orientation::Up => Orientation::Right,
        }
    }

    /// Arrow glyph pointing from terminal 1 to terminal 2.
    pub fn arrow(self) -> char {
        match self {
            Orientation::Right => '→',
            Orientation::Down => '↓',
            Orientation::Left => '←',
            Orientation::Up => '↑',
        }
    }
}

/// What a component adds to the series loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    /// Series impedance in ohms
    Impedance(Complex),
    /// Source EMF in volts
    Voltage(f64),
    /// Source current in amps (not summed by the series solver)
    Current(f64),
}

/// A component placed in a circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub kind: ComponentKind,
    /// Magnitude: ohms, reactance coefficient, farads/henries, volts or amps
    pub value: f64,
    /// Phase in degrees (AC sources only)
    pub phase: Option<f64>,
    pub orientation: Orientation,
}

impl Component {
    /// Create a component with its kind's default value and phase.
    pub fn new(id: ComponentId, kind: ComponentKind) -> Self {
        Self {
            id,
            kind,
            value: kind.default_value(),
            phase: kind.default_phase(),
            orientation: Orientation::default(),
        }
    }

    /// Create a component with an explicit value.
    pub fn with_value(id: ComponentId, kind: ComponentKind, value: f64) -> Self {
        Self {
            value,
            ..Self::new(id, kind)
        }
    }

    /// Set the phase, keeping the builder style of [`Component::with_value`].
    pub fn with_phase(mut self, phase: f64) -> Self {
        if self.kind.has_phase() {
            self.phase = Some(phase);
        }
        self
    }

    /// Compute what this component adds to the loop at angular frequency `omega`.
    pub fn contribution(&self, omega: f64, mode: ReactanceMode) -> Result<Contribution> {
        match self.kind {
            ComponentKind::Resistor => Ok(Contribution::Impedance(linear::resistor_impedance(
                self.value,
            ))),
            ComponentKind::Capacitor => {
                linear::capacitor_impedance(self.value, omega, mode)
                    .map(Contribution::Impedance)
                    .ok_or_else(|| {
                        PhasorError::invalid_parameter(
                            self.id.to_string(),
                            "capacitor is an open circuit (ωC = 0)",
                        )
                    })
            }
            ComponentKind::Inductor => Ok(Contribution::Impedance(linear::inductor_impedance(
                self.value, omega, mode,
            ))),
            ComponentKind::VoltageSourceDc | ComponentKind::VoltageSourceAc => {
                Ok(Contribution::Voltage(self.value))
            }
            ComponentKind::CurrentSourceDc | ComponentKind::CurrentSourceAc => {
                Ok(Contribution::Current(self.value))
            }
        }
    }

    /// The source as a phasor `value ∠ phase`. `None` for passive parts.
    pub fn source_phasor(&self) -> Option<Complex> {
        if self.kind.is_source() {
            Some(sources::phasor(self.value, self.phase))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Component::new(ComponentId(1), ComponentKind::Capacitor);
        assert_eq!(c.value, -2.0);
        assert_eq!(c.phase, None);

        let v = Component::new(ComponentId(2), ComponentKind::VoltageSourceAc);
        assert_eq!(v.value, 120.0);
        assert_eq!(v.phase, Some(0.0));
    }

    #[test]
    fn test_orientation_cycles() {
        let mut o = Orientation::default();
        for expected in [90, 180, 270, 0] {
            o = o.rotated();
            assert_eq!(o.degrees(), expected);
        }
    }

    #[test]
    fn test_name_prefixes() {
        assert_eq!(
            ComponentKind::from_name_prefix("VAC1"),
            Some(ComponentKind::VoltageSourceAc)
        );
        assert_eq!(
            ComponentKind::from_name_prefix("V1"),
            Some(ComponentKind::VoltageSourceDc)
        );
        assert_eq!(
            ComponentKind::from_name_prefix("IAC2"),
            Some(ComponentKind::CurrentSourceAc)
        );
        assert_eq!(
            ComponentKind::from_name_prefix("l_load"),
            Some(ComponentKind::Inductor)
        );
        assert_eq!(ComponentKind::from_name_prefix("Q1"), None);
    }

    #[test]
    fn test_contributions_coefficient_mode() {
        let omega = angular_frequency(60.0);
        let mode = ReactanceMode::Coefficient;
        let r = Component::with_value(ComponentId(1), ComponentKind::Resistor, 10.0);
        let c = Component::with_value(ComponentId(2), ComponentKind::Capacitor, -2.0);
        let v = Component::with_value(ComponentId(3), ComponentKind::VoltageSourceDc, 12.0);
        let i = Component::new(ComponentId(4), ComponentKind::CurrentSourceAc);

        assert_eq!(
            r.contribution(omega, mode).unwrap(),
            Contribution::Impedance(Complex::new(10.0, 0.0))
        );
        assert_eq!(
            c.contribution(omega, mode).unwrap(),
            Contribution::Impedance(Complex::new(0.0, -2.0))
        );
        assert_eq!(v.contribution(omega, mode).unwrap(), Contribution::Voltage(12.0));
        assert_eq!(i.contribution(omega, mode).unwrap(), Contribution::Current(10.0));
    }

    #[test]
    fn test_phase_ignored_for_passive() {
        let r = Component::new(ComponentId(1), ComponentKind::Resistor).with_phase(45.0);
        assert_eq!(r.phase, None);
        assert!(r.source_phasor().is_none());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            "ac_source".parse::<ComponentKind>().unwrap(),
            ComponentKind::VoltageSourceAc
        );
        for kind in ComponentKind::ALL {
            assert_eq!(kind.keyword().parse::<ComponentKind>().unwrap(), kind);
        }
        assert!("transistor".parse::<ComponentKind>().is_err());
    }
}
