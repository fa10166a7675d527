//! Console output.
//!
//! The activity log is the record of a run; this module only prints a short
//! colored summary for whoever launched the binary.

use crate::file_organizer::OrganizeReport;
use colored::*;
use std::collections::HashMap;
use std::path::Path;

/// Prints run summaries with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints moved-file counts per category folder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use file_organizer::output::OutputFormatter;
    /// use std::collections::HashMap;
    ///
    /// let mut counts = HashMap::new();
    /// counts.insert("TextFiles".to_string(), 4);
    /// counts.insert("ImageFiles".to_string(), 2);
    /// OutputFormatter::summary_table(&counts, 6);
    /// ```
    pub fn summary_table(category_counts: &HashMap<String, usize>, total_files: usize) {
        Self::header("SUMMARY");

        let mut categories: Vec<_> = category_counts.iter().collect();
        categories.sort_by_key(|&(name, _)| name);

        let width = categories
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(8);

        println!("{:<width$} | {}", "Category".bold(), "Files".bold());
        println!("{}", "-".repeat(width + 10));
        for (category, count) in &categories {
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                plural(**count)
            );
        }
        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_files.to_string().green().bold(),
            plural(total_files)
        );
    }

    /// Prints the outcome of an organize run.
    pub fn report(report: &OrganizeReport, log_path: &Path) {
        if report.total_moved() > 0 {
            Self::summary_table(&report.category_counts(), report.total_moved());
        } else if report.is_complete_success() {
            Self::info("No files needed moving.");
        }

        if !report.skipped.is_empty() {
            Self::warning(&format!(
                "{} {} left in place (unsupported extension)",
                report.skipped.len(),
                plural(report.skipped.len())
            ));
        }

        match &report.failure {
            None => Self::success("Organization complete!"),
            Some(e) => {
                Self::error(&e.to_string());
                Self::error(&format!(
                    "Run stopped early. See {} for details.",
                    log_path.display()
                ));
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
