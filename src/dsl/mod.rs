//! Text format for describing series circuits.
//!
//! The format is line-oriented and human-editable. It lets circuits be built
//! without the schematic editor: from the CLI, from tests, or pasted into the
//! browser.
//!
//! # Grammar Overview
//!
//! ```text
//! circuit     = { line }
//! line        = comment | directive | component | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = ".freq" value | ".mode" mode | ".wire" terminal terminal
//! component   = name [value] { param '=' value }
//! terminal    = name ':' ('1' | '2')
//! mode        = "coefficient" | "physical"
//! param       = "value" | "phase"
//!
//! value       = ['-'|'+'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+] [unit_suffix]
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! name        = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! # Component Kinds
//!
//! The kind is taken from the name prefix:
//!
//! | Prefix | Kind | Value |
//! |--------|------|-------|
//! | VAC | AC voltage source | volts, `phase=` degrees |
//! | VDC, V | DC voltage source | volts |
//! | IAC | AC current source | amps, `phase=` degrees |
//! | IDC, I | DC current source | amps |
//! | R | Resistor | ohms |
//! | C | Capacitor | reactance (Ω) or farads with `.mode physical` |
//! | L | Inductor | reactance (Ω) or henries with `.mode physical` |
//!
//! A component without a value gets its kind's default.
//!
//! # Example
//!
//! ```text
//! # Series RLC at mains frequency
//! .freq 60
//! VAC1 120 phase=0
//! R1   10
//! L1   4
//! C1   -8
//! .wire VAC1:2 R1:1
//! .wire R1:2   L1:1
//! .wire L1:2   C1:1
//! .wire C1:2   VAC1:1
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a circuit description string into an AST.
pub fn parse(input: &str) -> Result<CircuitAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a circuit description file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::PhasorError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
