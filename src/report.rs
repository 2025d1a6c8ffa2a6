use std::fmt::Display;
use colored::Colorize;

/// Prints a success line to stdout, prefixed with a green check mark.
pub fn ok(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Prints an error line to stderr, prefixed with a red cross.
pub fn err(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Prints an informational line to stdout, prefixed with a blue marker.
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Highlights a value for embedding in a status line.
pub fn accent<D: Display>(value: D) -> String {
    value.to_string().yellow().to_string()
}
