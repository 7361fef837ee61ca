// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Every way a single calculation can go wrong.
//
// Only DivisionByZero is expected to reach the user as a
// message. InvalidNumericInput is recovered by re-prompting,
// and EndOfInput tells the shell the console has closed.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// The text typed by the user is not a number
    #[error("entrada no numérica: '{input}'")]
    InvalidNumericInput { input: String },

    /// The divisor is effectively zero
    #[error("No es posible dividir por cero.")]
    DivisionByZero,

    /// An operation was handed the wrong number of operands
    #[error("se esperaban {expected} operandos, se recibieron {found}")]
    OperandCount { expected: usize, found: usize },

    /// The input stream closed while waiting for the user
    #[error("fin de la entrada")]
    EndOfInput,
}
