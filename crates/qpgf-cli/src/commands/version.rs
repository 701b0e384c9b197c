//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - gate-error distributions for compiled quantum circuits",
        style("qpgf").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qpgf-ir       Gate operations and error-rate tables");
    println!("  qpgf-qasm     OpenQASM gate extraction");
    println!("  qpgf-compile  Hardware basis translation");
    println!("  qpgf-pgf      Scalar and joint error-count PGFs");
    println!("  qpgf-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
