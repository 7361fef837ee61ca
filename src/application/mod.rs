// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Sits between the interactive shell (Layer 1) and the pure
// arithmetic (Layer 3).
//
// Rules for this layer:
//   - No printing or reading from the console
//   - No arithmetic of its own, only calls into the domain
//
// Think of this layer as the "director". The shell decides
// what to ask the user, this layer decides what to run.

// Runs a single arithmetic operation
pub mod calculate_use_case;
