//! Architectures command implementation.

use console::style;

use qpgf_compile::Architecture;

/// Execute the architectures command.
pub fn execute() {
    println!("{} Available architectures:\n", style("qpgf").cyan().bold());

    for arch in Architecture::ALL {
        let config = arch.config();
        println!("  {} {}", style("●").green(), style(arch).bold());
        println!("    Basis:        {}", config.basis().join(", "));
        println!("    Decomposable: {}", config.decomposable().join(", "));
        println!();
    }

    println!("Gates outside both lists are rejected. Names are case-insensitive.");
}
