//! Calculator operations over two complex operands.

use std::fmt;
use std::str::FromStr;

use super::Complex;
use crate::error::{PhasorError, Result};

/// Exponent used by the calculator's power operation.
pub const CALCULATOR_EXPONENT: u32 = 2;

/// One of the six calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Unary: ignores the second operand
    Conjugate,
    /// Unary: raises the first operand to [`CALCULATOR_EXPONENT`]
    Power,
}

impl Operation {
    /// Every operation, in calculator order.
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Conjugate,
        Operation::Power,
    ];

    /// Evaluate on `z1 = a + bi` and `z2 = c + di`.
    pub fn evaluate(self, a: f64, b: f64, c: f64, d: f64) -> Result<Complex> {
        self.apply(Complex::new(a, b), Complex::new(c, d))
    }

    /// Evaluate on two complex operands.
    pub fn apply(self, z1: Complex, z2: Complex) -> Result<Complex> {
        match self {
            Operation::Add => Ok(z1.add(z2)),
            Operation::Subtract => Ok(z1.subtract(z2)),
            Operation::Multiply => Ok(z1.multiply(z2)),
            Operation::Divide => z1.divide(z2),
            Operation::Conjugate => Ok(z1.conjugate()),
            Operation::Power => Ok(z1.powi(CALCULATOR_EXPONENT)),
        }
    }

    /// Whether the second operand is used.
    pub fn is_binary(self) -> bool {
        !matches!(self, Operation::Conjugate | Operation::Power)
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Conjugate => "conjugate",
            Operation::Power => "power",
        }
    }

    /// Infix symbol for display.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Conjugate => "*",
            Operation::Power => "^2",
        }
    }
}

impl FromStr for Operation {
    type Err = PhasorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" | "x" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            "conjugate" | "conj" => Ok(Operation::Conjugate),
            "power" | "pow" | "square" => Ok(Operation::Power),
            _ => Err(PhasorError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_reference_operands() {
        let expected = [
            (Operation::Add, Complex::new(5.0, 3.0)),
            (Operation::Subtract, Complex::new(1.0, 5.0)),
            (Operation::Multiply, Complex::new(10.0, 5.0)),
            (Operation::Conjugate, Complex::new(3.0, -4.0)),
        ];
        for (op, want) in expected {
            let got = op.evaluate(3.0, 4.0, 2.0, -1.0).unwrap();
            assert_eq!(got, want, "{}", op);
        }

        let q = Operation::Divide.evaluate(3.0, 4.0, 2.0, -1.0).unwrap();
        assert!((q.real - 0.4).abs() < 1e-12);
        assert!((q.imag - 2.2).abs() < 1e-12);
    }

    #[test]
    fn test_divide_by_zero_surfaces() {
        assert!(Operation::Divide.evaluate(1.0, 1.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_parse_names() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
        assert!("modulo".parse::<Operation>().is_err());
    }

    #[test]
    fn test_unary_operations_ignore_second_operand() {
        let a = Operation::Power.evaluate(1.0, 1.0, 7.0, 7.0).unwrap();
        let b = Operation::Power.evaluate(1.0, 1.0, 0.0, 0.0).unwrap();
        assert_eq!(a, b);
        assert!(!Operation::Conjugate.is_binary());
        assert!(Operation::Divide.is_binary());
    }
}
