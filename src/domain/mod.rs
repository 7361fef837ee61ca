// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure arithmetic and the types that describe it.
//
// Rules for this layer:
//   - NO console I/O
//   - NO logging
//   - Only plain functions, enums, and the error type
//
// Everything here can be unit tested without a terminal.

// The six arithmetic functions
pub mod calculator;

// Which operation to run, and how many operands it takes
pub mod operation;

// Typed failures of a calculation
pub mod error;
