//! Outcome and status reporting.
//!
//! Line-oriented output only; this tool runs unattended, so there are no
//! prompts. Success and fatal lines are the machine-greppable run outcome,
//! status lines narrate progress.

use console::style;

/// Print the final success line for the run
pub fn display_success(message: &str) {
    println!("{}  success   {}", style("✔").green(), message);
}

/// Print a fatal error line
pub fn display_fatal(message: &str) {
    eprintln!("{}  fatal     {}", style("✖").red(), message);
}

/// Print a progress status line
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning line
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

/// Show the commit batch under inspection.
///
/// Prints up to 10 messages (first line each) and a count of the rest.
pub fn display_commit_batch(messages: &[String]) {
    println!("{} commit messages ({})", style("→").yellow(), messages.len());

    for (i, message) in messages.iter().take(10).enumerate() {
        let first_line = message.lines().next().unwrap_or("");
        println!("  {}. {}", i + 1, first_line);
    }

    if messages.len() > 10 {
        println!("  ... and {} more", messages.len() - 10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_fatal() {
        // Visual verification test - output is printed to stderr
        display_fatal("test fatal");
    }

    #[test]
    fn test_display_commit_batch_empty() {
        display_commit_batch(&[]);
    }

    #[test]
    fn test_display_commit_batch_long() {
        let messages: Vec<String> = (0..15).map(|i| format!("commit {}", i)).collect();
        display_commit_batch(&messages);
    }
}
