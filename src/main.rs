use mutscore::catalog;
use mutscore::compare;
use mutscore::oracle::DetectionTable;
use mutscore::output;
use mutscore::report::{self, AnalysisOutcome, RunReport};
use mutscore::score;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mutscore", version, about = "Mutation scoring and approach comparison")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a mutant catalog from source files and score it
    Run {
        /// Source files to scan for mutation patterns
        files: Vec<PathBuf>,
        /// Detection table JSON (default: builtin table)
        #[arg(short, long)]
        table: Option<PathBuf>,
        /// Approach tag for the report: traditional or llm-assisted
        #[arg(long, default_value = "traditional")]
        approach: String,
        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
        /// Exit code only, no output
        #[arg(short, long)]
        quiet: bool,
        /// Also write the run report to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Compare two saved run reports (baseline vs candidate)
    Compare {
        /// Baseline run report
        baseline: PathBuf,
        /// Candidate run report
        candidate: PathBuf,
        /// Output JSON
        #[arg(long)]
        json: bool,
        /// Also write the comparison to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show details for a survived mutant by ref
    Show {
        /// Mutant ref (e.g. @1 or 1)
        #[arg(name = "ref")]
        mutant_ref: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Summary of last run
    Status {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run {
            files,
            table,
            approach,
            json,
            quiet,
            out,
        } => cmd_run(files, table, approach, json, quiet, out),
        Commands::Compare {
            baseline,
            candidate,
            json,
            out,
        } => cmd_compare(baseline, candidate, json, out),
        Commands::Show { mutant_ref, json } => cmd_show(mutant_ref, json),
        Commands::Status { json } => cmd_status(json),
    };

    process::exit(exit_code);
}

fn generate_run_id() -> String {
    format!("{:08x}", fastrand::u32(..))
}

fn cmd_run(
    files: Vec<PathBuf>,
    table_path: Option<PathBuf>,
    approach: String,
    json_mode: bool,
    quiet: bool,
    out: Option<PathBuf>,
) -> i32 {
    let approach = match mutscore::parse_approach(&approach) {
        Some(a) => a,
        None => {
            output::print_error(&format!(
                "Unknown approach '{}'. Supported: traditional, llm-assisted",
                approach
            ));
            return 2;
        }
    };

    if files.is_empty() {
        output::print_error("No source files given. Pass one or more paths to scan.");
        return 2;
    }

    let table = match &table_path {
        Some(path) => match DetectionTable::load(path) {
            Some(t) => t,
            None => {
                let report = RunReport {
                    run_id: generate_run_id(),
                    approach: approach.label().to_string(),
                    outcome: AnalysisOutcome::Unavailable {
                        reason: format!("detection table not readable: {}", path.display()),
                    },
                };
                return finish_unavailable(report, out.as_deref(), json_mode, quiet);
            }
        },
        None => DetectionTable::builtin(),
    };

    let built = catalog::build_catalog_for_paths(&files);
    if !quiet {
        for path in &built.missing {
            output::print_warning(&format!(
                "Source file not found: {} (excluded from catalog)",
                path.display()
            ));
        }
    }

    if built.missing.len() == files.len() {
        let report = RunReport {
            run_id: generate_run_id(),
            approach: approach.label().to_string(),
            outcome: AnalysisOutcome::Unavailable {
                reason: "no source files could be read".to_string(),
            },
        };
        return finish_unavailable(report, out.as_deref(), json_mode, quiet);
    }

    let mut mutants = built.mutants;
    mutscore::oracle::resolve_mutants(&mut mutants, &table);
    let summary = score::aggregate(mutants, table.test_count());

    let report = RunReport {
        run_id: generate_run_id(),
        approach: approach.label().to_string(),
        outcome: AnalysisOutcome::Computed { summary },
    };

    report::save_last_run(&report);
    if let Some(out_path) = &out {
        report::save_to_path(&report, out_path);
    }

    let survived = report
        .summary()
        .map(|s| s.survived_count())
        .unwrap_or(0);

    if quiet {
        return if survived > 0 { 1 } else { 0 };
    }

    if json_mode {
        println!("{}", serde_json::to_string(&report).unwrap());
    } else {
        output::print_run_report(&report);
    }

    if survived > 0 { 1 } else { 0 }
}

/// A run with no scoreable data is persisted as an explicit
/// unavailable outcome, never as zeros pretending to be measurements.
fn finish_unavailable(
    report: RunReport,
    out: Option<&std::path::Path>,
    json_mode: bool,
    quiet: bool,
) -> i32 {
    report::save_last_run(&report);
    if let Some(out_path) = out {
        report::save_to_path(&report, out_path);
    }

    if quiet {
        return 2;
    }
    if json_mode {
        println!("{}", serde_json::to_string(&report).unwrap());
    } else {
        output::print_run_report(&report);
    }
    2
}

fn cmd_compare(
    baseline_path: PathBuf,
    candidate_path: PathBuf,
    json_mode: bool,
    out: Option<PathBuf>,
) -> i32 {
    let baseline = match report::load_from_path(&baseline_path) {
        Some(r) => r,
        None => {
            output::print_error(&format!(
                "Baseline report not found or unreadable: {}",
                baseline_path.display()
            ));
            return 2;
        }
    };
    let candidate = match report::load_from_path(&candidate_path) {
        Some(r) => r,
        None => {
            output::print_error(&format!(
                "Candidate report not found or unreadable: {}",
                candidate_path.display()
            ));
            return 2;
        }
    };

    let baseline_summary = match &baseline.outcome {
        AnalysisOutcome::Computed { summary } => summary,
        AnalysisOutcome::Unavailable { reason } => {
            output::print_error(&format!(
                "Baseline run [{}] has no data: {}",
                baseline.approach, reason
            ));
            return 2;
        }
    };
    let candidate_summary = match &candidate.outcome {
        AnalysisOutcome::Computed { summary } => summary,
        AnalysisOutcome::Unavailable { reason } => {
            output::print_error(&format!(
                "Candidate run [{}] has no data: {}",
                candidate.approach, reason
            ));
            return 2;
        }
    };

    let comparison = compare::compare(baseline_summary, candidate_summary);

    if let Some(out_path) = &out {
        report::save_comparison_to_path(&comparison, out_path);
    }

    if json_mode {
        println!("{}", serde_json::to_string(&comparison).unwrap());
    } else {
        output::print_comparison(&comparison);
    }
    0
}

fn cmd_show(mutant_ref: String, json_mode: bool) -> i32 {
    let ref_id = mutant_ref.trim_start_matches('@');

    let last_run = match report::load_last_run() {
        Some(r) => r,
        None => {
            output::print_error("No previous run found. Run `mutscore run` first.");
            return 2;
        }
    };

    let summary = match last_run.summary() {
        Some(s) => s,
        None => {
            output::print_error("Last run has no data; nothing to show.");
            return 2;
        }
    };

    let mutant = summary.survived_mutants.iter().find(|m| m.id == ref_id);
    match mutant {
        Some(m) => {
            if json_mode {
                println!("{}", serde_json::to_string(m).unwrap());
            } else {
                output::print_mutant_detail(m);
            }
            0
        }
        None => {
            let valid: Vec<_> = summary
                .survived_mutants
                .iter()
                .map(|m| format!("@{}", m.id))
                .collect();
            output::print_error(&format!(
                "Mutant @{} not found among survivors. Valid refs: {}",
                ref_id,
                valid.join(", ")
            ));
            2
        }
    }
}

fn cmd_status(json_mode: bool) -> i32 {
    match report::load_last_run() {
        Some(report) => {
            if json_mode {
                println!("{}", serde_json::to_string(&report).unwrap());
            } else {
                output::print_status(&report);
            }
            0
        }
        None => {
            output::print_error("No previous run found. Run `mutscore run` first.");
            2
        }
    }
}
