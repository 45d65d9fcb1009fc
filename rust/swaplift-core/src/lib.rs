//! Swaplift Core
//!
//! A micro-benchmark for adjacent-pair swap techniques: generates random
//! `i32` workloads, runs every registered swap variant over the same array,
//! times each pass, checks the elevator invariant, and prints a ranked
//! report per array size.

pub mod cursor;
pub mod runner;
pub mod variant;
pub mod workload;

pub use runner::{run_matrix, BenchError, MatrixConfig, Timing};
pub use variant::Swapper;
