//! Text reports for the CLI frontend.
//!
//! Renders calculator results and circuit solves to any [`Write`] sink.

use std::io::Write;

use crate::circuit::CircuitSession;
use crate::complex::{Complex, Operation, Polar};
use crate::error::{PhasorError, Result};
use crate::solver::{CircuitResult, SolverConfig};

fn output_error(e: std::io::Error) -> PhasorError {
    PhasorError::ReportOutputError {
        message: e.to_string(),
    }
}

/// Write one calculator evaluation.
pub fn write_calculation<W: Write>(
    out: &mut W,
    operation: Operation,
    z1: Complex,
    z2: Complex,
    result: Complex,
    show_polar: bool,
) -> Result<()> {
    let expression = if operation.is_binary() {
        format!("({}) {} ({})", z1, operation.symbol(), z2)
    } else {
        format!("({}){}", z1, operation.symbol())
    };

    writeln!(out, "{} = {}", expression, result).map_err(output_error)?;
    if show_polar {
        writeln!(out, "polar: {}", result.to_polar()).map_err(output_error)?;
    }
    Ok(())
}

/// Write a value in both rectangular and polar form.
pub fn write_polar<W: Write>(out: &mut W, z: Complex, polar: Polar) -> Result<()> {
    writeln!(out, "rectangular: {}", z).map_err(output_error)?;
    writeln!(out, "polar: {}", polar).map_err(output_error)?;
    writeln!(
        out,
        "magnitude: {:.4}, angle: {:.4}°",
        polar.magnitude, polar.angle_degrees
    )
    .map_err(output_error)
}

/// Write the full report for a solved circuit.
pub fn write_circuit_report<W: Write>(
    out: &mut W,
    session: &CircuitSession,
    config: &SolverConfig,
    result: &CircuitResult,
) -> Result<()> {
    let mode = config.reactance_mode;
    let mut lines = Vec::new();

    lines.push(format!(
        "Circuit: {} components, {} wires @ {} Hz ({} reactances)",
        session.components().len(),
        session.wires().len(),
        config.frequency_hz,
        mode
    ));
    for c in session.components() {
        let name = session.name_of(c.id).map(str::to_string).unwrap_or_else(|| c.id.to_string());
        let phase = c.phase.map(|p| format!(" ∠ {}°", p)).unwrap_or_default();
        let phasor = c
            .source_phasor()
            .filter(|_| c.kind.has_phase())
            .map(|z| format!(" = ({}) {}", z, c.kind.unit(mode)))
            .unwrap_or_default();
        lines.push(format!(
            "  {:<8} {:<18} {}{}{}{} {}",
            name,
            c.kind,
            c.value,
            c.kind.unit(mode),
            phase,
            phasor,
            c.orientation.arrow()
        ));
    }

    lines.push(String::new());
    lines.push(format!("Mesh 1: {}", result.mesh_equation()));
    lines.push(format!("Voltage:       {} V", result.voltage_phasor()));
    lines.push(format!(
        "Impedance:     {} Ω   ({} Ω)",
        result.impedance,
        result.impedance_polar()
    ));
    lines.push(format!(
        "Current:       {} A   ({} A)",
        result.current,
        result.current_phasor()
    ));
    lines.push(format!(
        "Phase angle:   {:.2}° ({})",
        result.phase_degrees,
        result.character()
    ));
    lines.push(format!("Power factor:  {:.4}", result.power_factor));
    lines.push(format!("Apparent power: {:.2} VA", result.apparent_power));
    lines.push(format!("Active power:   {:.2} W", result.active_power));
    lines.push(format!("Reactive power: {:.2} VAR", result.reactive_power));

    for line in lines {
        writeln!(out, "{}", line).map_err(output_error)?;
    }
    out.flush().map_err(output_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentKind;

    #[test]
    fn test_calculation_output() {
        let mut buf = Vec::new();
        let z1 = Complex::new(3.0, 4.0);
        let z2 = Complex::new(2.0, -1.0);
        let result = Operation::Add.apply(z1, z2).unwrap();
        write_calculation(&mut buf, Operation::Add, z1, z2, result, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("(3.00 + 4.00j) + (2.00 - 1.00j) = 5.00 + 3.00j"));
        assert!(text.contains("polar: 5.83 ∠ 30.96°"));
    }

    #[test]
    fn test_circuit_report() {
        let mut session = CircuitSession::new();
        session.add_component(ComponentKind::Resistor);
        session.add_component(ComponentKind::VoltageSourceAc);
        let config = SolverConfig::new().with_frequency(60.0);
        let result = session.solve(&config).unwrap().clone();

        let mut buf = Vec::new();
        write_circuit_report(&mut buf, &session, &config, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Mesh 1: 120V = I × (10.00 + 0.00j) Ω"));
        assert!(text.contains("Voltage:       120.00 ∠ 0.00° V"));
        assert!(text.contains("(Resistivo)"));
        assert!(text.contains("Active power:   1440.00 W"));
    }

    #[test]
    fn test_ac_source_line_shows_phasor() {
        let mut session = CircuitSession::new();
        session.add_component(ComponentKind::Resistor);
        let v = session.add_component(ComponentKind::VoltageSourceAc);
        session.update_phase(v, 90.0).unwrap();
        let config = SolverConfig::new();
        let result = session.solve(&config).unwrap().clone();

        let mut buf = Vec::new();
        write_circuit_report(&mut buf, &session, &config, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let source_line = text.lines().find(|l| l.contains("voltage_source_ac")).unwrap();
        assert!(source_line.contains("120V ∠ 90° = (0.00 + 120.00j) V"), "{}", source_line);
        let resistor_line = text.lines().find(|l| l.contains("resistor")).unwrap();
        assert!(!resistor_line.contains(" = "));
    }
}
