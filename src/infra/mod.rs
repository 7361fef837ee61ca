// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns shared by the shell and the tests that are not
// arithmetic themselves:
//
//   number_format.rs — locale-independent parsing of operands
//                      and invariant rendering of results, so
//                      "12.5" means the same thing everywhere.

/// Operand parsing and result formatting
pub mod number_format;
