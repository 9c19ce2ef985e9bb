use serde::{Deserialize, Serialize};

use crate::mutants::{Mutant, MutantStatus};

/// Aggregate result of one run. Rates are unrounded percentages over
/// the scored population (killed + survived); error mutants are kept
/// out of the identity and reported separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total_mutants: usize,
    pub survived_mutants: Vec<Mutant>,
    pub killed_mutants: Vec<Mutant>,
    pub errored_mutants: Vec<Mutant>,
    pub survival_rate: f64,
    pub kill_rate: f64,
    pub test_count: usize,
}

impl ScoreSummary {
    pub fn survived_count(&self) -> usize {
        self.survived_mutants.len()
    }

    pub fn killed_count(&self) -> usize {
        self.killed_mutants.len()
    }
}

/// Tabulate an oracle-annotated catalog into a summary. Zero scored
/// mutants means both rates are 0, never a division error. A mutant the
/// oracle never saw (status unset) is routed to the error bucket.
pub fn aggregate(mutants: Vec<Mutant>, test_count: usize) -> ScoreSummary {
    let total_mutants = mutants.len();
    let mut survived = Vec::new();
    let mut killed = Vec::new();
    let mut errored = Vec::new();

    for mutant in mutants {
        match mutant.status {
            Some(MutantStatus::Survived) => survived.push(mutant),
            Some(MutantStatus::Killed) => killed.push(mutant),
            Some(MutantStatus::Error) | None => errored.push(mutant),
        }
    }

    let scored = survived.len() + killed.len();
    let (survival_rate, kill_rate) = if scored > 0 {
        (
            survived.len() as f64 / scored as f64 * 100.0,
            killed.len() as f64 / scored as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    ScoreSummary {
        total_mutants,
        survived_mutants: survived,
        killed_mutants: killed,
        errored_mutants: errored,
        survival_rate,
        kill_rate,
        test_count,
    }
}
