//! Series-loop circuit solver.
//!
//! This module reduces a component list to one loop equation:
//!
//! ```text
//! V = I · Z,   Z = Σ Z_k   over every passive component k
//! ```
//!
//! where V is the sum of voltage source magnitudes. Wires are not consulted;
//! components are treated as one series loop whatever their connections.
//! From Z and I the solver derives:
//!
//! - phase φ = arg(Z), power factor cos φ
//! - apparent power S = V·|I|
//! - active power P = S·cos φ
//! - reactive power Q = S·sin φ

mod result;
mod series;

pub use result::{CircuitResult, PhaseCharacter};
pub use series::{solve, SolverConfig};
