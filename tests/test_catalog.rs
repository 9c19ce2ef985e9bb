use mutscore::catalog;
use tempfile::TempDir;

const SUT_SOURCE: &str = r#"class SystemUnderTest:
    def function(self, value):
        if value is None:
            return None
        if not isinstance(value, (int, float)):
            raise TypeError("Expected numeric value")
        return 2 * value

    def total(self, first, second):
        return first + second
"#;

#[test]
fn catalog_finds_all_sut_patterns() {
    let mutants = catalog::build_catalog("sut.py", SUT_SOURCE);
    let ids: Vec<&str> = mutants.iter().map(|m| m.id.as_str()).collect();
    // First-match order over lines, so the None fallthrough comes first.
    assert_eq!(ids, vec!["4", "6", "1", "2"]);
}

#[test]
fn catalog_mutant_fields_are_populated() {
    let mutants = catalog::build_catalog("sut.py", SUT_SOURCE);
    let doubling = mutants.iter().find(|m| m.id == "1").unwrap();

    assert_eq!(doubling.file, "sut.py");
    assert_eq!(doubling.line, 7);
    assert_eq!(doubling.original, "        return 2 * value");
    assert_eq!(doubling.mutated, "        return 3 * value");
    assert_eq!(doubling.operator, "number_replacement");
    assert!(doubling.status.is_none());
    assert!(doubling.killed_by.is_empty());
}

#[test]
fn catalog_mutated_always_differs_from_original() {
    let mutants = catalog::build_catalog("sut.py", SUT_SOURCE);
    assert!(!mutants.is_empty());
    for m in &mutants {
        assert_ne!(m.original, m.mutated, "mutant {} must change the line", m.id);
    }
}

#[test]
fn catalog_diff_shows_both_lines() {
    let mutants = catalog::build_catalog("sut.py", "return 2 * value");
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].diff, "- return 2 * value\n+ return 3 * value\n");
}

#[test]
fn catalog_single_line_reference_scenario() {
    let mutants = catalog::build_catalog("sut.py", "return 2 * value");
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].id, "1");
    assert_eq!(mutants[0].mutated, "return 3 * value");
}

#[test]
fn catalog_empty_for_no_matches() {
    let mutants = catalog::build_catalog("empty.py", "x = 1\ny = x\n");
    assert!(mutants.is_empty());
}

#[test]
fn catalog_is_deterministic() {
    let first = catalog::build_catalog("sut.py", SUT_SOURCE);
    let second = catalog::build_catalog("sut.py", SUT_SOURCE);

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn duplicate_pattern_matches_get_qualified_ids() {
    let source = "def add(a, b):\n    return a + b\n\ndef plus(a, b):\n    return a + b\n";
    let mutants = catalog::build_catalog("calc.py", source);

    assert_eq!(mutants.len(), 2);
    assert_eq!(mutants[0].id, "2");
    assert_eq!(mutants[1].id, "2@calc.py:5");
}

#[test]
fn all_catalog_ids_are_unique() {
    let source = SUT_SOURCE.repeat(3);
    let mutants = catalog::build_catalog("sut.py", &source);

    let mut ids: Vec<&str> = mutants.iter().map(|m| m.id.as_str()).collect();
    let before = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), before, "catalog ids must never collide");
}

// --- File-backed catalogs ---

#[test]
fn missing_file_is_excluded_not_fatal() {
    let dir = TempDir::new().unwrap();
    let present = dir.path().join("sut.py");
    std::fs::write(&present, "return 2 * value\n").unwrap();
    let absent = dir.path().join("nonexistent.py");

    let built = catalog::build_catalog_for_paths(&[present, absent.clone()]);

    assert_eq!(built.mutants.len(), 1);
    assert_eq!(built.missing, vec![absent]);
}

#[test]
fn catalog_spans_files_in_argument_order() {
    let dir = TempDir::new().unwrap();
    let sut = dir.path().join("sut.py");
    let models = dir.path().join("models.py");
    std::fs::write(&sut, "return 2 * value\n").unwrap();
    std::fs::write(&models, "__tablename__ = \"users\"\n").unwrap();

    let built = catalog::build_catalog_for_paths(&[sut, models]);
    let ids: Vec<&str> = built.mutants.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
    assert!(built.missing.is_empty());
}
