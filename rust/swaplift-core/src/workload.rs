//! Workload generation for the benchmark runner.

use rand::Rng;

/// A fresh sample of `len` integers, uniform over the full 32-bit range.
/// Deliberately unseeded: runs are not reproducible.
pub fn random_ints(len: usize) -> Vec<i32> {
    let mut data = vec![0i32; len];
    rand::thread_rng().fill(&mut data[..]);
    data
}
