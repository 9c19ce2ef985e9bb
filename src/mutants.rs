use serde::{Deserialize, Serialize};

/// Coarse classification of a mutation, orthogonal to the operator tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Arithmetic,
    Conditional,
    Constant,
    Structural,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutantStatus {
    Killed,
    Survived,
    Error,
}

/// One candidate code alteration. `status` stays unset until the kill
/// oracle has seen the mutant; `killed_by` lists every detecting test
/// in table order, first entry being the primary detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mutant {
    pub id: String,
    pub file: String,
    pub line: usize,
    pub original: String,
    pub mutated: String,
    pub diff: String,
    pub operator: String,
    pub kind: MutationKind,
    pub status: Option<MutantStatus>,
    pub killed_by: Vec<String>,
}

impl Mutant {
    pub fn is_killed(&self) -> bool {
        self.status == Some(MutantStatus::Killed)
    }

    pub fn is_survived(&self) -> bool {
        self.status == Some(MutantStatus::Survived)
    }
}
