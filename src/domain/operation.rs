// ============================================================
// Layer 3 — Operation
// ============================================================
// Names the six arithmetic operations so the layers above can
// pass "which operation" around as a value instead of a
// string, and applies one to a slice of operands.

use std::fmt;

use super::calculator;
use super::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
}

impl Operation {
    /// Every operation, in menu order
    #[cfg(test)]
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
    ];

    /// How many operands the operation consumes
    pub fn arity(self) -> usize {
        match self {
            Operation::SquareRoot => 1,
            _ => 2,
        }
    }

    /// Run the operation over `operands`.
    /// Fails with OperandCount unless the slice length equals `arity()`.
    pub fn apply(self, operands: &[f64]) -> Result<f64, CalcError> {
        let result = match (self, operands) {
            (Operation::Add,        [a, b]) => calculator::add(*a, *b),
            (Operation::Subtract,   [a, b]) => calculator::subtract(*a, *b),
            (Operation::Multiply,   [a, b]) => calculator::multiply(*a, *b),
            (Operation::Divide,     [a, b]) => calculator::divide(*a, *b)?,
            (Operation::Power,      [a, b]) => calculator::power(*a, *b),
            (Operation::SquareRoot, [x])    => calculator::sqrt(*x),
            _ => {
                return Err(CalcError::OperandCount {
                    expected: self.arity(),
                    found:    operands.len(),
                })
            }
        };

        Ok(result)
    }
}

/// Label shown in the result line, e.g. "Resultado (suma): 5"
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Add        => "suma",
            Operation::Subtract   => "resta",
            Operation::Multiply   => "multiplicación",
            Operation::Divide     => "división",
            Operation::Power      => "potencia",
            Operation::SquareRoot => "raíz cuadrada",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(Operation::SquareRoot.arity(), 1);
        for op in Operation::ALL.iter().filter(|op| **op != Operation::SquareRoot) {
            assert_eq!(op.arity(), 2);
        }
    }

    #[test]
    fn test_apply_dispatches() {
        assert_eq!(Operation::Add.apply(&[2.0, 3.0]), Ok(5.0));
        assert_eq!(Operation::Subtract.apply(&[2.0, 3.0]), Ok(-1.0));
        assert_eq!(Operation::Multiply.apply(&[2.0, 3.0]), Ok(6.0));
        assert_eq!(Operation::Divide.apply(&[3.0, 2.0]), Ok(1.5));
        assert_eq!(Operation::Power.apply(&[2.0, 3.0]), Ok(8.0));
        assert_eq!(Operation::SquareRoot.apply(&[9.0]), Ok(3.0));
    }

    #[test]
    fn test_apply_propagates_division_by_zero() {
        assert_eq!(
            Operation::Divide.apply(&[10.0, 0.0]),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_wrong_operand_count() {
        assert_eq!(
            Operation::SquareRoot.apply(&[1.0, 2.0]),
            Err(CalcError::OperandCount { expected: 1, found: 2 })
        );
        assert_eq!(
            Operation::Add.apply(&[]),
            Err(CalcError::OperandCount { expected: 2, found: 0 })
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Add.to_string(), "suma");
        assert_eq!(Operation::SquareRoot.to_string(), "raíz cuadrada");
    }
}
