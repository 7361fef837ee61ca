// ============================================================
// Layer 2 — CalculateUseCase
// ============================================================
// Runs one operation the user picked from the menu:
//
//   Step 1: Apply the operation     (Layer 3 - domain)
//   Step 2: Record what happened    (tracing)
//   Step 3: Hand back a Calculation for the shell to print
//
// The shell has already collected the operands, so nothing
// here touches the console.

use anyhow::Result;

use crate::domain::operation::Operation;

/// The outcome of one successful operation
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub result:    f64,
}

/// Stateless; one instance serves the whole session.
#[derive(Debug, Default)]
pub struct CalculateUseCase;

impl CalculateUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Apply `operation` to `operands`.
    /// Domain failures (division by zero) come back as the error.
    pub fn execute(&self, operation: Operation, operands: &[f64]) -> Result<Calculation> {
        let result = operation
            .apply(operands)
            .inspect_err(|e| tracing::warn!(%operation, ?operands, "Operation failed: {e}"))?;

        tracing::debug!(%operation, ?operands, result, "Operation completed");

        Ok(Calculation { operation, result })
    }
}
