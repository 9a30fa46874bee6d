//! Circuit session state and validation.
//!
//! This module provides the editable representation of a circuit. The
//! [`CircuitSession`] holds all placed components, the wires between their
//! terminals, and the latest solve result.

mod session;
mod types;
mod validate;

pub use session::CircuitSession;
pub use types::*;
pub use validate::{validate_components, validate_session};
