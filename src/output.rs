use console::Style;

use crate::compare::{Comparison, TestsImprovement};
use crate::mutants::Mutant;
use crate::report::{AnalysisOutcome, RunReport};
use crate::score::ScoreSummary;

pub fn print_error(msg: &str) {
    let style = Style::new().red().bold();
    eprintln!("{} {}", style.apply_to("✗"), msg);
}

pub fn print_success(msg: &str) {
    let style = Style::new().green().bold();
    println!("{} {}", style.apply_to("✓"), msg);
}

pub fn print_warning(msg: &str) {
    let style = Style::new().yellow().bold();
    eprintln!("{} {}", style.apply_to("!"), msg);
}

pub fn print_run_report(report: &RunReport) {
    match &report.outcome {
        AnalysisOutcome::Unavailable { reason } => {
            let style = Style::new().yellow().bold();
            println!(
                "{} [{}] no mutants executed: {}",
                style.apply_to("!"),
                report.approach,
                reason,
            );
        }
        AnalysisOutcome::Computed { summary } => print_summary(&report.approach, summary),
    }
}

fn print_summary(approach: &str, summary: &ScoreSummary) {
    if summary.total_mutants == 0 {
        print_success(&format!("[{}] no mutable code found", approach));
        return;
    }

    if summary.survived_count() == 0 && summary.errored_mutants.is_empty() {
        let style = Style::new().green().bold();
        println!(
            "{} [{}] {} mutants, all killed ({:.1}%)",
            style.apply_to("✓"),
            approach,
            summary.total_mutants,
            summary.kill_rate,
        );
        return;
    }

    let style = Style::new().yellow().bold();
    println!(
        "{} [{}] {} survived / {} mutants ({:.1}% killed)",
        style.apply_to("!"),
        approach,
        summary.survived_count(),
        summary.total_mutants,
        summary.kill_rate,
    );

    if !summary.errored_mutants.is_empty() {
        let dim = Style::new().dim();
        println!(
            "  {} {} mutants errored, excluded from rates",
            dim.apply_to("·"),
            summary.errored_mutants.len(),
        );
    }

    println!();
    for m in &summary.survived_mutants {
        let ref_style = Style::new().cyan().bold();
        let loc_style = Style::new().dim();
        let op_style = Style::new().magenta();

        println!(
            "  {} {}:{} {} {} → {}",
            ref_style.apply_to(format!("@{}", m.id)),
            m.file,
            m.line,
            loc_style.apply_to(format!("[{}]", m.operator)),
            op_style.apply_to(m.original.trim()),
            op_style.apply_to(m.mutated.trim()),
        );
    }
}

pub fn print_mutant_detail(m: &Mutant) {
    let ref_style = Style::new().cyan().bold();

    println!(
        "{} {}:{} [{}]",
        ref_style.apply_to(format!("@{}", m.id)),
        m.file,
        m.line,
        m.operator,
    );
    println!();

    for line in m.diff.lines() {
        if line.starts_with('-') {
            let del_style = Style::new().red();
            println!("  {}", del_style.apply_to(line));
        } else if line.starts_with('+') {
            let add_style = Style::new().green();
            println!("  {}", add_style.apply_to(line));
        }
    }

    if !m.killed_by.is_empty() {
        println!();
        println!("  killed by: {}", m.killed_by.join(", "));
    }
}

pub fn print_status(report: &RunReport) {
    let summary = match report.summary() {
        Some(s) => s,
        None => {
            print_run_report(report);
            return;
        }
    };

    println!(
        "Last run [{}]: {} mutants, {} killed, {} survived ({:.1}% killed)",
        report.approach,
        summary.total_mutants,
        summary.killed_count(),
        summary.survived_count(),
        summary.kill_rate,
    );

    if summary.survived_count() > 0 {
        println!();
        for m in &summary.survived_mutants {
            let ref_style = Style::new().cyan().bold();
            println!(
                "  {} {}:{} {} → {}",
                ref_style.apply_to(format!("@{}", m.id)),
                m.file,
                m.line,
                m.original.trim(),
                m.mutated.trim(),
            );
        }
        println!();
        println!("Use `mutscore show @1` for details on a specific mutant.");
    }
}

pub fn print_comparison(comparison: &Comparison) {
    println!(
        "Detection rate:  {:.1}% → {:.1}% ({:+.1}%)",
        comparison.baseline_kill_rate,
        comparison.candidate_kill_rate,
        comparison.detection_improvement,
    );
    println!(
        "Survival rate:   {:.1}% → {:.1}% ({:+.1}% reduction)",
        comparison.baseline_survival_rate,
        comparison.candidate_survival_rate,
        comparison.survival_improvement,
    );
    match &comparison.tests_improvement {
        TestsImprovement::Pct(pct) => {
            println!(
                "Test count:      {} → {} ({:+.0}%)",
                comparison.baseline_test_count,
                comparison.candidate_test_count,
                pct,
            );
        }
        TestsImprovement::Undefined => {
            let dim = Style::new().dim();
            println!(
                "Test count:      {} → {} ({})",
                comparison.baseline_test_count,
                comparison.candidate_test_count,
                dim.apply_to("change undefined, baseline has no tests"),
            );
        }
    }
}
