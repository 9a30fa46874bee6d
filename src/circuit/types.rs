//! Core identifier and wiring types.

use std::fmt;

use crate::error::{PhasorError, Result};

/// A unique identifier for a component placed in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u64);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// A unique identifier for a wire in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId(pub u64);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// One of the two terminals every component exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalNode {
    /// Terminal 1
    First,
    /// Terminal 2
    Second,
}

impl TerminalNode {
    /// The terminal number as shown to users (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            TerminalNode::First => 1,
            TerminalNode::Second => 2,
        }
    }
}

impl TryFrom<u8> for TerminalNode {
    type Error = PhasorError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            1 => Ok(TerminalNode::First),
            2 => Ok(TerminalNode::Second),
            _ => Err(PhasorError::InvalidTopology {
                message: format!("terminal number must be 1 or 2, got {}", n),
            }),
        }
    }
}

/// A specific terminal of a specific component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Terminal {
    pub component: ComponentId,
    pub node: TerminalNode,
}

impl Terminal {
    /// Create a terminal reference.
    pub fn new(component: ComponentId, node: TerminalNode) -> Self {
        Self { component, node }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.component, self.node.number())
    }
}

/// A connection between two component terminals.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub id: WireId,
    pub from: Terminal,
    pub to: Terminal,
}

impl Wire {
    /// Check whether either end of this wire is on the given component.
    pub fn touches(&self, component: ComponentId) -> bool {
        self.from.component == component || self.to.component == component
    }
}
