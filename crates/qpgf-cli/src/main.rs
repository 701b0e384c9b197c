//! qpgf Command-Line Interface
//!
//! The main entry point for the `qpgf` tool: parse a circuit, translate it to
//! a hardware basis and report the distribution of gate errors.
//!
//! ```text
//! qpgf analyze -i bell.qasm -r heron_rates.yaml -a heron -m unit --joint
//! qpgf architectures
//! qpgf version
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{analyze, architectures, version};

/// qpgf - gate-error distributions for compiled quantum circuits
#[derive(Parser)]
#[command(name = "qpgf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the error-count distribution of a circuit on a target architecture
    Analyze {
        /// Input circuit (OpenQASM 2 or 3)
        #[arg(short, long)]
        input: String,

        /// Error-rate file (JSON or YAML map of gate name to probability)
        #[arg(short, long, env = "QPGF_RATES")]
        rates: String,

        /// Target architecture (eagle, heron)
        #[arg(short, long, default_value = "heron")]
        architecture: String,

        /// Decomposition mode (unit, decomp)
        #[arg(short, long, default_value = "unit")]
        mode: String,

        /// Also compute per-qubit marginals from the joint PGF
        #[arg(long)]
        joint: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Report the mass of entries below this probability
        #[arg(long, default_value = "0.01")]
        tail_threshold: f64,

        /// Write the JSON report to this file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List supported architectures
    Architectures,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Analyze {
            input,
            rates,
            architecture,
            mode,
            joint,
            format,
            tail_threshold,
            output,
        } => analyze::execute(
            &input,
            &rates,
            &architecture,
            &mode,
            joint,
            &format,
            tail_threshold,
            output.as_deref(),
        ),
        Commands::Architectures => {
            architectures::execute();
            Ok(())
        }
        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
