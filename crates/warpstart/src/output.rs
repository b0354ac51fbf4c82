//! Terminal output utilities

use console::style;

/// Print a success message
pub fn success(msg: &str) {
    println!("\n{} {}\n", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print a launch step, e.g. `Opening: firefox`
pub fn step(action: &str, subject: &str) {
    println!("{} {}", style(format!("{}:", action)).dim(), subject);
}
