use serde::{Deserialize, Serialize};

use crate::score::ScoreSummary;

/// Relative change in test count between two runs. A baseline with no
/// tests has no defined ratio of change; that case is an explicit
/// variant rather than a substitute number, and display policy stays
/// with the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TestsImprovement {
    Pct(f64),
    Undefined,
}

/// Deltas between a baseline summary and a candidate summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub baseline_kill_rate: f64,
    pub candidate_kill_rate: f64,
    pub detection_improvement: f64,
    pub baseline_survival_rate: f64,
    pub candidate_survival_rate: f64,
    pub survival_improvement: f64,
    pub baseline_test_count: usize,
    pub candidate_test_count: usize,
    pub tests_improvement: TestsImprovement,
}

/// Pure single-pass comparison: detection improvement is the kill-rate
/// gain, survival improvement is the survival-rate drop (positive when
/// fewer mutants survive the candidate).
pub fn compare(baseline: &ScoreSummary, candidate: &ScoreSummary) -> Comparison {
    let tests_improvement = if baseline.test_count > 0 {
        let delta = candidate.test_count as f64 - baseline.test_count as f64;
        TestsImprovement::Pct(delta / baseline.test_count as f64 * 100.0)
    } else {
        TestsImprovement::Undefined
    };

    Comparison {
        baseline_kill_rate: baseline.kill_rate,
        candidate_kill_rate: candidate.kill_rate,
        detection_improvement: candidate.kill_rate - baseline.kill_rate,
        baseline_survival_rate: baseline.survival_rate,
        candidate_survival_rate: candidate.survival_rate,
        survival_improvement: baseline.survival_rate - candidate.survival_rate,
        baseline_test_count: baseline.test_count,
        candidate_test_count: candidate.test_count,
        tests_improvement,
    }
}
