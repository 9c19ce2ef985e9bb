pub mod catalog;
pub mod compare;
pub mod mutants;
pub mod oracle;
pub mod output;
pub mod patterns;
pub mod report;
pub mod score;

/// The two pipelines this harness scores against each other. An
/// LLM-assisted run is a run against a different detection table; no
/// model inference happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    Traditional,
    LlmAssisted,
}

impl Approach {
    pub fn label(&self) -> &'static str {
        match self {
            Approach::Traditional => "traditional",
            Approach::LlmAssisted => "llm_assisted",
        }
    }
}

pub fn parse_approach(s: &str) -> Option<Approach> {
    match s {
        "traditional" => Some(Approach::Traditional),
        "llm-assisted" | "llm_assisted" => Some(Approach::LlmAssisted),
        _ => None,
    }
}
