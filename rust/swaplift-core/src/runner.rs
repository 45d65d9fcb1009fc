//! The benchmark runner: (repetition × size) matrix, timing, invariant
//! check, and ranked report.

use std::io::Write;
use std::time::Instant;

use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;

use crate::variant::Swapper;
use crate::workload;

#[derive(Debug, Error)]
pub enum BenchError {
    /// The elevator invariant failed: a full pass must deliver the
    /// original first element to the last slot. Signals a defective
    /// variant; the whole run aborts.
    #[error("swap elevator failed in {variant} (size {size}): first {first}, last {last}")]
    Elevator {
        variant: Swapper,
        size: usize,
        first: i32,
        last: i32,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shape of the benchmark matrix. `Default` is the full run: ten
/// repetitions over sizes 10^6 through 10^9.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub reps: u32,
    /// Smallest size exponent; size = 10^digits.
    pub min_digits: u32,
    /// Largest size exponent, inclusive.
    pub max_digits: u32,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        MatrixConfig {
            reps: 10,
            min_digits: 6,
            max_digits: 9,
        }
    }
}

/// One timed variant run, as ranked within its size group.
#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub rep: u32,
    pub variant: String,
    pub size: usize,
    pub elapsed_ms: f64,
    pub throughput_per_ms: f64,
}

/// Run the full matrix, writing the ranked report to `out` as it goes and
/// returning every collected timing.
///
/// Within one (repetition, size) pass a single sample array is shared by
/// every variant in enumeration order; it is intentionally NOT regenerated
/// between variants, so later variants start from whatever rotation the
/// earlier ones left behind. Only the elevator invariant is checked.
pub fn run_matrix<W: Write>(cfg: &MatrixConfig, out: &mut W) -> Result<Vec<Timing>, BenchError> {
    let mut all = Vec::new();
    for rep in 1..=cfg.reps {
        for digits in cfg.min_digits..=cfg.max_digits {
            let size = 10usize.pow(digits);
            let mut x = workload::random_ints(size);
            let mut timings: Vec<(Swapper, f64)> = Vec::with_capacity(Swapper::COUNT);
            for swapper in Swapper::iter() {
                let first = x[0];
                let begin = Instant::now();
                swapper.swap(&mut x);
                let elapsed_ms = begin.elapsed().as_secs_f64() * 1e3;
                let last = x[size - 1];
                if last != first {
                    return Err(BenchError::Elevator {
                        variant: swapper,
                        size,
                        first,
                        last,
                    });
                }
                timings.push((swapper, elapsed_ms));
            }
            timings.sort_by(|a, b| a.1.total_cmp(&b.1));
            writeln!(out, "---- for {size}")?;
            for &(swapper, elapsed_ms) in &timings {
                let throughput = size as f64 / elapsed_ms;
                writeln!(out, "{swapper}: {size}:  {elapsed_ms:.3} @{throughput:.1}/ms")?;
                all.push(Timing {
                    rep,
                    variant: swapper.to_string(),
                    size,
                    elapsed_ms,
                    throughput_per_ms: throughput,
                });
            }
            writeln!(out)?;
        }
    }
    Ok(all)
}
