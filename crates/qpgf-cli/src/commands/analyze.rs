//! Analyze command implementation.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use qpgf_compile::{Architecture, BasisTranslator, DecompMode, SYNTHETIC_SUFFIX};
use qpgf_pgf::{PgfSummary, ScalarPgf, build_joint_pgf, build_pgf, tail_probability};

use super::common::{load_circuit, load_error_rates, write_json};

/// Entries of the distribution printed in table mode.
const MAX_TABLE_ROWS: usize = 8;

/// Tail mass below a probability threshold.
#[derive(Debug, Serialize)]
struct TailReport {
    threshold: f64,
    probability: f64,
}

/// Per-qubit marginal distribution.
#[derive(Debug, Serialize)]
struct MarginalReport {
    qubit: usize,
    pgf: Vec<f64>,
    summary: PgfSummary,
}

/// Everything `analyze` computes for one circuit.
#[derive(Debug, Serialize)]
struct AnalysisReport {
    circuit: String,
    architecture: Architecture,
    mode: DecompMode,
    source_ops: usize,
    native_ops: usize,
    synthetic_rates: BTreeMap<String, f64>,
    distribution: ScalarPgf,
    summary: PgfSummary,
    tail: TailReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    marginals: Option<Vec<MarginalReport>>,
}

/// Execute the analyze command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    input: &str,
    rates: &str,
    architecture: &str,
    mode: &str,
    joint: bool,
    format: &str,
    tail_threshold: f64,
    output: Option<&str>,
) -> Result<()> {
    let json = match format.to_lowercase().as_str() {
        "table" => false,
        "json" => true,
        other => anyhow::bail!("Unknown output format: '{other}'. Available: table, json"),
    };
    let architecture: Architecture = architecture.parse()?;
    let mode: DecompMode = mode.parse()?;

    let ops = load_circuit(input)?;
    let mut error_rates = load_error_rates(rates)?;
    tracing::info!(input, ops = ops.len(), rates = error_rates.len(), "loaded inputs");

    let native = BasisTranslator::new(architecture, mode)
        .run(&ops, &mut error_rates)
        .context("Basis translation failed")?;
    let distribution = build_pgf(&native, &error_rates).context("PGF construction failed")?;
    let summary = PgfSummary::from_pgf(&distribution.pgf);

    let tail = TailReport {
        threshold: tail_threshold,
        probability: tail_probability(&distribution.pgf, tail_threshold),
    };

    let marginals = if joint {
        let joint = build_joint_pgf(&native, &error_rates)
            .context("Joint PGF construction failed")?;
        Some(
            joint
                .marginals()
                .into_iter()
                .enumerate()
                .map(|(qubit, pgf)| MarginalReport {
                    qubit,
                    summary: PgfSummary::from_pgf(&pgf),
                    pgf,
                })
                .collect(),
        )
    } else {
        None
    };

    let synthetic_rates = error_rates
        .iter()
        .filter(|(name, _)| name.ends_with(SYNTHETIC_SUFFIX))
        .map(|(name, p)| (name.to_string(), p))
        .collect();

    let report = AnalysisReport {
        circuit: input.to_string(),
        architecture,
        mode,
        source_ops: ops.len(),
        native_ops: native.len(),
        synthetic_rates,
        distribution,
        summary,
        tail,
        marginals,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(path) = output {
        write_json(&report, path)?;
        if !json {
            println!("  Output: {}", style(path).green());
        }
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!(
        "{} Analyzing {} on {} ({} mode)",
        style("→").cyan().bold(),
        style(&report.circuit).green(),
        style(report.architecture).yellow(),
        report.mode
    );
    println!(
        "  Translated: {} source ops → {} native ops",
        report.source_ops, report.native_ops
    );
    for (name, p) in &report.synthetic_rates {
        println!("  Synthetic:  {} p = {:.6}", style(name).cyan(), p);
    }

    println!("\n{} Total error distribution:", style("✓").green().bold());
    print_summary(&report.summary, &report.tail);
    print_bars(&report.distribution.pgf);

    if let Some(marginals) = &report.marginals {
        println!("\n{} Per-qubit marginals:", style("✓").green().bold());
        for marginal in marginals {
            println!(
                "  {}: mean {:.4}, P(0) {:.4}, support {}",
                style(format!("q{}", marginal.qubit)).cyan(),
                marginal.summary.mean,
                marginal.pgf.first().copied().unwrap_or(0.0),
                marginal.summary.support
            );
        }
    }
}

fn print_summary(summary: &PgfSummary, tail: &TailReport) {
    println!("  Mean:      {:.4}", summary.mean);
    println!("  Variance:  {:.4}", summary.variance);
    println!("  Max prob:  {:.4}", summary.max_prob);
    println!("  Mode:      {}", summary.mode);
    println!("  Support:   {}", summary.support);
    println!(
        "  Tail prob: {:.4} (entries < {})",
        tail.probability, tail.threshold
    );
}

fn print_bars(pgf: &[f64]) {
    println!();
    for (k, &p) in pgf.iter().enumerate().take(MAX_TABLE_ROWS) {
        let bar_len = (p.max(0.0) * 40.0).round() as usize;
        println!(
            "  {:>3} errors: {:>8.4}% {}",
            k,
            p * 100.0,
            style("█".repeat(bar_len)).green()
        );
    }
    if pgf.len() > MAX_TABLE_ROWS {
        println!(
            "  {}",
            style(format!("... {} more entries", pgf.len() - MAX_TABLE_ROWS)).dim()
        );
    }
}
