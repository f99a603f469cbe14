//! Execution of the external fold solver binary.
//!
//! [`FoldSolver`] holds the configured binary path and wall-clock budget;
//! each [`FoldSolver::run`] call spawns one solver process in a fresh job
//! directory and turns its output into persisted artifacts.

pub mod runner;
pub mod subprocess;

pub use runner::{FoldSolver, SolverCapture, SolverError};
