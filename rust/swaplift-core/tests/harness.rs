//! End-to-end harness checks over a shrunk matrix.
//!
//! The default matrix is 10 repetitions over sizes 10^6..10^9, far too
//! heavy for a test run; the shapes checked here are size-independent.

use strum::EnumCount;
use swaplift_core::{run_matrix, MatrixConfig, Swapper};

fn run_to_text(cfg: &MatrixConfig) -> (Vec<swaplift_core::Timing>, String) {
    let mut sink = Vec::new();
    let timings = run_matrix(cfg, &mut sink).expect("matrix run failed");
    (timings, String::from_utf8(sink).expect("report is utf-8"))
}

#[test]
fn full_matrix_never_trips_the_elevator() {
    let cfg = MatrixConfig {
        reps: 3,
        min_digits: 1,
        max_digits: 3,
    };
    let (timings, _) = run_to_text(&cfg);
    // one record per (rep, size, variant)
    assert_eq!(timings.len(), 3 * 3 * Swapper::COUNT);
}

#[test]
fn report_has_one_ranked_line_per_variant_per_group() {
    let cfg = MatrixConfig {
        reps: 2,
        min_digits: 2,
        max_digits: 2,
    };
    let (_, text) = run_to_text(&cfg);

    let headers: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("---- for "))
        .collect();
    assert_eq!(headers.len(), 2);
    assert!(headers.iter().all(|h| *h == "---- for 100"), "{headers:?}");

    let ranked = text.lines().filter(|l| l.contains(": 100:  ")).count();
    assert_eq!(ranked, 2 * Swapper::COUNT);

    // a blank line closes every size group
    assert!(text.ends_with("\n\n"), "{text:?}");
}

#[test]
fn groups_are_ranked_ascending_by_elapsed_time() {
    let cfg = MatrixConfig {
        reps: 1,
        min_digits: 3,
        max_digits: 3,
    };
    let (_, text) = run_to_text(&cfg);

    let elapsed: Vec<f64> = text
        .lines()
        .filter(|l| l.contains(": 1000:  "))
        .map(|l| {
            let after = l.split(":  ").nth(1).expect("ranked line shape");
            let ms = after.split(' ').next().expect("elapsed field");
            ms.parse().expect("elapsed parses as f64")
        })
        .collect();
    assert_eq!(elapsed.len(), Swapper::COUNT);
    assert!(
        elapsed.windows(2).all(|w| w[0] <= w[1]),
        "not sorted: {elapsed:?}"
    );
}

#[test]
fn collected_timings_carry_throughput() {
    let cfg = MatrixConfig {
        reps: 1,
        min_digits: 2,
        max_digits: 3,
    };
    let (timings, _) = run_to_text(&cfg);
    for t in &timings {
        assert!(t.size == 100 || t.size == 1000, "{}", t.size);
        assert!(t.elapsed_ms >= 0.0);
        // size/ms; elapsed can round to ~0 on tiny arrays but never negative
        assert!(t.throughput_per_ms >= 0.0);
    }
    // variant names in records match the registered set
    let names: Vec<&str> = timings.iter().map(|t| t.variant.as_str()).collect();
    assert!(names.contains(&"xor_swap"));
    assert!(names.contains(&"buf_4way"));
}
