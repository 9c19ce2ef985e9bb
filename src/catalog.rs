use std::collections::HashSet;
use std::path::PathBuf;

use crate::mutants::Mutant;
use crate::patterns;

/// Catalog built over a set of source files. Files that could not be
/// read are excluded from the catalog and listed in `missing`; a
/// missing input is never fatal to the run.
pub struct FileCatalog {
    pub mutants: Vec<Mutant>,
    pub missing: Vec<PathBuf>,
}

/// Scan one source text for pattern matches and emit a mutant per match.
/// Catalog order is first-match order: lines in order, patterns in
/// table order within a line. A file with no matches yields an empty
/// catalog, not an error.
pub fn build_catalog(file: &str, source: &str) -> Vec<Mutant> {
    let mut mutants = Vec::new();
    let mut used_ids = HashSet::new();
    append_mutants(file, source, &mut used_ids, &mut mutants);
    mutants
}

pub fn build_catalog_for_paths(paths: &[PathBuf]) -> FileCatalog {
    let mut mutants = Vec::new();
    let mut missing = Vec::new();
    let mut used_ids = HashSet::new();

    for path in paths {
        match std::fs::read_to_string(path) {
            Ok(source) => {
                let file = path.display().to_string();
                append_mutants(&file, &source, &mut used_ids, &mut mutants);
            }
            Err(_) => missing.push(path.clone()),
        }
    }

    FileCatalog { mutants, missing }
}

fn append_mutants(
    file: &str,
    source: &str,
    used_ids: &mut HashSet<String>,
    mutants: &mut Vec<Mutant>,
) {
    let lines: Vec<&str> = source.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let prev = if idx > 0 { Some(lines[idx - 1]) } else { None };
        let line_no = idx + 1;

        for pattern in patterns::line_patterns() {
            let Some(found) = (pattern.matcher)(line, prev) else {
                continue;
            };
            let mutated = line.replacen(&found.target, &found.replacement, 1);
            if mutated == *line {
                continue;
            }

            mutants.push(Mutant {
                id: assign_id(pattern.id, file, line_no, used_ids),
                file: file.to_string(),
                line: line_no,
                original: line.to_string(),
                mutated: mutated.clone(),
                diff: line_diff(line, &mutated),
                operator: pattern.operator.to_string(),
                kind: pattern.kind,
                status: None,
                killed_by: vec![],
            });
        }
    }
}

/// The first catalog occurrence of a pattern keeps the pattern's bare
/// stable id so detection tables can reference it across runs. Any
/// further occurrence gets a location-qualified id, so two lines
/// matching the same pattern can never collide.
fn assign_id(
    pattern_id: &str,
    file: &str,
    line: usize,
    used_ids: &mut HashSet<String>,
) -> String {
    if used_ids.insert(pattern_id.to_string()) {
        return pattern_id.to_string();
    }
    let qualified = format!("{}@{}:{}", pattern_id, file, line);
    used_ids.insert(qualified.clone());
    qualified
}

/// Unified-style diff between the original and mutated line.
pub fn line_diff(original: &str, mutated: &str) -> String {
    use similar::TextDiff;
    let diff = TextDiff::from_lines(original, mutated);
    let mut output = String::new();
    for change in diff.iter_all_changes() {
        match change.tag() {
            similar::ChangeTag::Delete => {
                output.push_str("- ");
                output.push_str(change.value().trim_end());
                output.push('\n');
            }
            similar::ChangeTag::Insert => {
                output.push_str("+ ");
                output.push_str(change.value().trim_end());
                output.push('\n');
            }
            _ => {}
        }
    }
    output
}
