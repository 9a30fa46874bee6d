//! # Phasor Lab
//!
//! A complex-number calculator and single-loop AC circuit solver for
//! teaching phasor analysis.
//!
//! This library provides:
//! - Complex arithmetic with rectangular and polar forms
//! - An editable circuit session (components, wires, latest result)
//! - A series-loop solver computing impedance, current, phase and power
//! - A small text format for describing circuits
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`complex`] - Complex value type and calculator operations
//! - [`components`] - Component kinds and their impedance/excitation
//! - [`circuit`] - Session state, wiring and validation
//! - [`solver`] - Series-loop aggregation and results
//! - [`dsl`] - Parser for the circuit description format
//! - [`report`] - Text output (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! phasor calc divide 3 4 2 -1 --polar
//! phasor solve rlc.phl --frequency 60
//! ```
//!
//! ### Library
//!
//! ```
//! use phasor_lab::{CircuitSession, SolverConfig};
//! use phasor_lab::components::ComponentKind;
//!
//! let mut session = CircuitSession::new();
//! session.add_component(ComponentKind::Resistor);          // 10 Ω
//! session.add_component(ComponentKind::VoltageSourceAc);   // 120 V ∠ 0°
//!
//! let result = session.solve(&SolverConfig::new().with_frequency(60.0)).unwrap();
//! assert_eq!(result.character().to_string(), "Resistivo");
//! assert!((result.active_power - 1440.0).abs() < 1e-9);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuitSession } from 'phasor_lab';
//!
//! const session = new WasmCircuitSession();
//! session.add_component("resistor");
//! session.add_component("voltage_source_ac");
//! const result = session.solve(60);
//! ```
//!
//! ## Solution Method
//!
//! Every passive component is treated as part of one series loop:
//!
//! 1. Sum the impedances Z = Σ Z_k and the source EMFs V = Σ V_k
//! 2. Solve I = V / Z
//! 3. Derive phase, power factor and apparent/active/reactive power
//!
//! Wires are recorded for the schematic but do not change the result.

pub mod circuit;
pub mod complex;
pub mod components;
pub mod dsl;
pub mod error;
pub mod solver;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use circuit::CircuitSession;
pub use complex::{Complex, Polar};
pub use error::{PhasorError, Result};
pub use solver::{solve, CircuitResult, SolverConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{WasmCircuitResult, WasmCircuitSession};

/// Default excitation frequency in Hz
pub const DEFAULT_FREQUENCY_HZ: f64 = 60.0;
