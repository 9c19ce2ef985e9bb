use crate::mutants::MutationKind;

/// A first-occurrence substring substitution to apply to a matched line.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    pub target: String,
    pub replacement: String,
}

pub type Matcher = fn(line: &str, prev_line: Option<&str>) -> Option<PatternMatch>;

/// One entry of the fixed pattern table. The id is stable across runs
/// so detection tables can reference the mutant it produces by name.
pub struct LinePattern {
    pub id: &'static str,
    pub operator: &'static str,
    pub kind: MutationKind,
    pub matcher: Matcher,
}

/// The ordered pattern set. Catalog order and mutant ids both derive
/// from this ordering, so entries must not be reordered.
pub fn line_patterns() -> &'static [LinePattern] {
    &PATTERNS
}

static PATTERNS: [LinePattern; 6] = [
    LinePattern {
        id: "1",
        operator: "number_replacement",
        kind: MutationKind::Arithmetic,
        matcher: doubled_coefficient,
    },
    LinePattern {
        id: "2",
        operator: "operator_replacement",
        kind: MutationKind::Arithmetic,
        matcher: return_addition,
    },
    LinePattern {
        id: "3",
        operator: "string_replacement",
        kind: MutationKind::Constant,
        matcher: string_literal,
    },
    LinePattern {
        id: "4",
        operator: "none_replacement",
        kind: MutationKind::Conditional,
        matcher: none_fallthrough,
    },
    LinePattern {
        id: "5",
        operator: "table_name_replacement",
        kind: MutationKind::Configuration,
        matcher: table_name,
    },
    LinePattern {
        id: "6",
        operator: "raise_removal",
        kind: MutationKind::Structural,
        matcher: raise_statement,
    },
];

/// A return statement with the exact doubling coefficient: `2 *` -> `3 *`.
fn doubled_coefficient(line: &str, _prev: Option<&str>) -> Option<PatternMatch> {
    if line.contains("return") && line.contains("2 *") {
        Some(PatternMatch {
            target: "2 *".to_string(),
            replacement: "3 *".to_string(),
        })
    } else {
        None
    }
}

/// An addition operator inside a return statement: first ` + ` -> ` - `.
/// A quote before the operator means string concatenation; skip those.
fn return_addition(line: &str, _prev: Option<&str>) -> Option<PatternMatch> {
    if !line.contains("return") {
        return None;
    }
    let pos = line.find(" + ")?;
    if line[..pos].contains('"') || line[..pos].contains('\'') {
        return None;
    }
    Some(PatternMatch {
        target: " + ".to_string(),
        replacement: " - ".to_string(),
    })
}

/// An assigned non-empty double-quoted string literal -> `""`.
/// Table-name declarations are covered by their own pattern.
fn string_literal(line: &str, _prev: Option<&str>) -> Option<PatternMatch> {
    if line.contains("__tablename__") {
        return None;
    }
    let eq = line.find('=')?;
    let literal = quoted_literal(&line[eq..])?;
    Some(PatternMatch {
        target: literal.to_string(),
        replacement: "\"\"".to_string(),
    })
}

/// A null-sentinel return immediately following a null check:
/// `return None` -> `return 0`.
fn none_fallthrough(line: &str, prev: Option<&str>) -> Option<PatternMatch> {
    let guard = prev?.trim();
    if !guard.starts_with("if ") || !guard.contains("is None") {
        return None;
    }
    if line.trim() != "return None" {
        return None;
    }
    Some(PatternMatch {
        target: "return None".to_string(),
        replacement: "return 0".to_string(),
    })
}

/// A fixed table-name declaration; the quoted name gets a `_mutant` suffix.
fn table_name(line: &str, _prev: Option<&str>) -> Option<PatternMatch> {
    if !line.contains("__tablename__") {
        return None;
    }
    let literal = quoted_literal(line)?;
    let name = &literal[1..literal.len() - 1];
    Some(PatternMatch {
        target: literal.to_string(),
        replacement: format!("\"{}_mutant\"", name),
    })
}

/// A raise statement replaced by a no-op, dropping the error path.
fn raise_statement(line: &str, _prev: Option<&str>) -> Option<PatternMatch> {
    let trimmed = line.trim();
    if !trimmed.starts_with("raise ") {
        return None;
    }
    Some(PatternMatch {
        target: trimmed.to_string(),
        replacement: "pass".to_string(),
    })
}

/// First non-empty double-quoted literal in `text`, quotes included.
fn quoted_literal(text: &str) -> Option<&str> {
    let open = text.find('"')?;
    let rest = &text[open + 1..];
    let close = rest.find('"')?;
    if close == 0 {
        return None;
    }
    Some(&text[open..open + close + 2])
}
