use mutscore::mutants::{Mutant, MutantStatus, MutationKind};
use mutscore::score;

fn mutant(id: &str, status: Option<MutantStatus>) -> Mutant {
    Mutant {
        id: id.to_string(),
        file: "sut.py".to_string(),
        line: 1,
        original: "return 2 * value".to_string(),
        mutated: "return 3 * value".to_string(),
        diff: String::new(),
        operator: "number_replacement".to_string(),
        kind: MutationKind::Arithmetic,
        status,
        killed_by: vec![],
    }
}

#[test]
fn empty_catalog_has_zero_rates() {
    let summary = score::aggregate(vec![], 3);

    assert_eq!(summary.total_mutants, 0);
    assert_eq!(summary.survival_rate, 0.0);
    assert_eq!(summary.kill_rate, 0.0);
    assert_eq!(summary.test_count, 3);
}

#[test]
fn all_killed_is_full_kill_rate() {
    let mutants = vec![
        mutant("1", Some(MutantStatus::Killed)),
        mutant("2", Some(MutantStatus::Killed)),
    ];
    let summary = score::aggregate(mutants, 2);

    assert_eq!(summary.kill_rate, 100.0);
    assert_eq!(summary.survival_rate, 0.0);
    assert_eq!(summary.killed_count(), 2);
    assert_eq!(summary.survived_count(), 0);
}

#[test]
fn all_survived_is_full_survival_rate() {
    let mutants = vec![mutant("1", Some(MutantStatus::Survived))];
    let summary = score::aggregate(mutants, 0);

    assert_eq!(summary.survival_rate, 100.0);
    assert_eq!(summary.kill_rate, 0.0);
}

#[test]
fn rates_sum_to_one_hundred() {
    let mutants = vec![
        mutant("1", Some(MutantStatus::Survived)),
        mutant("2", Some(MutantStatus::Killed)),
        mutant("3", Some(MutantStatus::Killed)),
    ];
    let summary = score::aggregate(mutants, 2);

    assert!((summary.survival_rate + summary.kill_rate - 100.0).abs() < 1e-9);
    assert!((summary.kill_rate - 2.0 / 3.0 * 100.0).abs() < 1e-9);
}

#[test]
fn rate_identity_holds_for_uneven_splits() {
    // 1/7 survivors: rates are non-terminating decimals.
    let mut mutants = vec![mutant("s", Some(MutantStatus::Survived))];
    for i in 0..6 {
        mutants.push(mutant(&format!("k{}", i), Some(MutantStatus::Killed)));
    }
    let summary = score::aggregate(mutants, 6);

    assert!((summary.survival_rate + summary.kill_rate - 100.0).abs() < 1e-9);
}

#[test]
fn errored_mutants_are_excluded_from_rates() {
    let mutants = vec![
        mutant("1", Some(MutantStatus::Killed)),
        mutant("2", Some(MutantStatus::Survived)),
        mutant("3", Some(MutantStatus::Error)),
    ];
    let summary = score::aggregate(mutants, 1);

    assert_eq!(summary.total_mutants, 3);
    assert_eq!(summary.errored_mutants.len(), 1);
    assert_eq!(summary.kill_rate, 50.0);
    assert_eq!(summary.survival_rate, 50.0);
    assert!((summary.survival_rate + summary.kill_rate - 100.0).abs() < 1e-9);
}

#[test]
fn unresolved_mutants_are_routed_to_errors() {
    let mutants = vec![mutant("1", None)];
    let summary = score::aggregate(mutants, 0);

    assert_eq!(summary.errored_mutants.len(), 1);
    assert_eq!(summary.kill_rate, 0.0);
    assert_eq!(summary.survival_rate, 0.0);
}

#[test]
fn only_errors_means_zero_rates_not_division_error() {
    let mutants = vec![
        mutant("1", Some(MutantStatus::Error)),
        mutant("2", Some(MutantStatus::Error)),
    ];
    let summary = score::aggregate(mutants, 0);

    assert_eq!(summary.total_mutants, 2);
    assert_eq!(summary.survival_rate, 0.0);
    assert_eq!(summary.kill_rate, 0.0);
}

#[test]
fn summary_preserves_mutant_details() {
    let mut killed = mutant("1", Some(MutantStatus::Killed));
    killed.killed_by = vec!["test_double".to_string()];
    let summary = score::aggregate(vec![killed], 1);

    assert_eq!(summary.killed_mutants[0].id, "1");
    assert_eq!(summary.killed_mutants[0].killed_by, vec!["test_double"]);
}
