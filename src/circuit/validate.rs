//! Circuit validation.

use std::collections::HashSet;

use crate::components::Component;
use crate::error::{PhasorError, Result};

use super::{CircuitSession, ComponentId};

/// Validate component values before a solve.
///
/// Checks:
/// - Every value is finite
/// - Every phase, where present, is finite
pub fn validate_components(components: &[Component]) -> Result<()> {
    for component in components {
        if !component.value.is_finite() {
            return Err(PhasorError::invalid_input(
                format!("{} value", component.id),
                component.value.to_string(),
            ));
        }
        if let Some(phase) = component.phase {
            if !phase.is_finite() {
                return Err(PhasorError::invalid_input(
                    format!("{} phase", component.id),
                    phase.to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// Validate a session's wiring.
///
/// Checks:
/// - Every wire endpoint refers to a component in the session
/// - No wire joins a terminal to itself
///
/// Whether the wires form a closed loop is not checked.
pub fn validate_session(session: &CircuitSession) -> Result<()> {
    let live: HashSet<ComponentId> = session.components().iter().map(|c| c.id).collect();

    for wire in session.wires() {
        for end in [wire.from, wire.to] {
            if !live.contains(&end.component) {
                return Err(PhasorError::InvalidTopology {
                    message: format!("wire {} references missing component {}", wire.id, end.component),
                });
            }
        }
        if wire.from == wire.to {
            return Err(PhasorError::InvalidTopology {
                message: format!("wire {} connects terminal {} to itself", wire.id, wire.from),
            });
        }
    }

    validate_components(session.components())
}
