//! Abstract Syntax Tree types for circuit descriptions.

use crate::components::{ComponentKind, ReactanceMode};
use crate::solver::SolverConfig;

/// Complete AST representation of a parsed circuit description.
#[derive(Debug, Clone, Default)]
pub struct CircuitAst {
    /// All component instances, in source order
    pub components: Vec<ComponentDef>,
    /// All wires, in source order
    pub wires: Vec<WireDef>,
    /// Frequency from a `.freq` directive
    pub frequency_hz: Option<f64>,
    /// Reactance convention from a `.mode` directive
    pub reactance_mode: Option<ReactanceMode>,
}

impl CircuitAst {
    /// Create a new empty circuit AST.
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver configuration implied by the directives, defaults elsewhere.
    pub fn solver_config(&self) -> SolverConfig {
        let mut config = SolverConfig::new();
        if let Some(f) = self.frequency_hz {
            config = config.with_frequency(f);
        }
        if let Some(mode) = self.reactance_mode {
            config = config.with_reactance_mode(mode);
        }
        config
    }
}

/// A component definition from a description.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDef {
    /// Kind, derived from the name prefix
    pub kind: ComponentKind,
    /// Unique component name
    pub name: String,
    /// Magnitude; the kind's default when absent
    pub value: Option<f64>,
    /// Phase in degrees (AC sources only)
    pub phase: Option<f64>,
    /// Source line number for error reporting
    pub line: usize,
}

/// A named terminal, e.g. `R1:2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRef {
    pub component: String,
    pub node: u8,
}

/// A `.wire` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireDef {
    pub from: TerminalRef,
    pub to: TerminalRef,
    /// Source line number for error reporting
    pub line: usize,
}
