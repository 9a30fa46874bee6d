//! Error types for the Phasor Lab library.
//!
//! This module provides a unified error type [`PhasorError`] that covers
//! all error conditions that can occur during complex arithmetic, circuit
//! editing, circuit description parsing, and solving.

use thiserror::Error;

/// Result type alias using [`PhasorError`].
pub type Result<T> = std::result::Result<T, PhasorError>;

/// Unified error type for all Phasor Lab operations.
#[derive(Error, Debug)]
pub enum PhasorError {
    // ============ Arithmetic Errors ============
    /// Complex division by a zero-magnitude divisor
    #[error("Division by zero: divisor has zero magnitude")]
    DivisionByZero,

    /// Unknown calculator operation name
    #[error("Unknown operation '{name}' (expected add, subtract, multiply, divide, conjugate or power)")]
    UnknownOperation { name: String },

    // ============ Input Errors ============
    /// Non-numeric, missing or non-finite entry
    #[error("Invalid input for {field}: '{input}' is not a finite number")]
    InvalidInput { field: String, input: String },

    /// Value that parses but makes no sense for the target
    #[error("Invalid parameter for '{component}': {message}")]
    InvalidParameter { component: String, message: String },

    // ============ Circuit Errors ============
    /// Solve requested with no components placed
    #[error("No components to solve - add components to the circuit first")]
    EmptyCircuit,

    /// Total series impedance is zero, so the loop current is undefined
    #[error("Singular impedance: total impedance is zero (source voltage {voltage} V) - the loop is a short circuit")]
    SingularImpedance { voltage: f64 },

    /// Finite inputs produced a result outside the f64 range
    #[error("Numeric overflow: {quantity} is too large to represent")]
    NumericOverflow { quantity: String },

    /// Component id not present in the session
    #[error("Component {id} not found in circuit")]
    ComponentNotFound { id: String },

    /// Wire id not present in the session
    #[error("Wire {id} not found in circuit")]
    WireNotFound { id: String },

    /// Duplicate component name in a circuit description
    #[error("Duplicate component name '{name}'")]
    DuplicateComponent { name: String },

    /// Invalid wiring
    #[error("Invalid circuit topology: {message}")]
    InvalidTopology { message: String },

    // ============ Description Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown component type
    #[error("Unknown component type '{component_type}' at line {line}")]
    UnknownComponentType { component_type: String, line: usize },

    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a report
    #[error("Report output error: {message}")]
    ReportOutputError { message: String },
}

impl PhasorError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a component-not-found error
    pub fn component_not_found(id: impl std::fmt::Display) -> Self {
        Self::ComponentNotFound { id: id.to_string() }
    }
}
