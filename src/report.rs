use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::compare::Comparison;
use crate::score::ScoreSummary;

/// A run either produced a computed summary or had no data to score.
/// The two are distinct tagged variants so a missing-input run can
/// never be mistaken for measured numbers downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Computed { summary: ScoreSummary },
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub approach: String,
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

impl RunReport {
    pub fn summary(&self) -> Option<&ScoreSummary> {
        match &self.outcome {
            AnalysisOutcome::Computed { summary } => Some(summary),
            AnalysisOutcome::Unavailable { .. } => None,
        }
    }
}

fn state_path() -> PathBuf {
    let dir = dirs_or_cwd();
    dir.join(".mutscore-state.json")
}

fn dirs_or_cwd() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn save_last_run(report: &RunReport) {
    if let Ok(json) = serde_json::to_string(report) {
        let _ = std::fs::write(state_path(), json);
    }
}

pub fn load_last_run() -> Option<RunReport> {
    let path = state_path();
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_to_path(report: &RunReport, path: &std::path::Path) {
    if let Ok(json) = serde_json::to_string(report) {
        let _ = std::fs::write(path, json);
    }
}

pub fn load_from_path(path: &std::path::Path) -> Option<RunReport> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_comparison_to_path(comparison: &Comparison, path: &std::path::Path) {
    if let Ok(json) = serde_json::to_string(comparison) {
        let _ = std::fs::write(path, json);
    }
}

pub fn load_comparison_from_path(path: &std::path::Path) -> Option<Comparison> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
