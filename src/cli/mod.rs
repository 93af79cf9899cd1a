//! CLI argument parsing and stderr reporting.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use std::io::{self, Write};

use classdivider::models::{NameIndex, Partition};
use classdivider::output::Summary;
use colored::Colorize;

/// One-line description of a finished division, for stderr.
pub fn summary_line<T>(partition: &Partition<T>) -> String {
    let summary = Summary::from_partition(partition);
    let sizes = if summary.min_size == summary.max_size {
        format!("{}", summary.min_size)
    } else {
        format!("{}-{}", summary.min_size, summary.max_size)
    };
    format!(
        "Divided {} {} into {} {} of {} {}.",
        summary.students,
        if summary.students == 1 { "student" } else { "students" },
        summary.groups,
        if summary.groups == 1 { "group" } else { "groups" },
        sizes,
        if summary.max_size == 1 { "student" } else { "students" },
    )
}

/// Print the summary (and any shared first names) to stderr.
pub fn print_summary<T>(partition: &Partition<T>, names: &NameIndex) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = write_summary(&mut handle, partition, names);
    let _ = handle.flush();
}

/// Write the summary lines to `out`.
pub fn write_summary<T>(
    out: &mut impl Write,
    partition: &Partition<T>,
    names: &NameIndex,
) -> io::Result<()> {
    writeln!(out, "  {} {}", "✔".green().bold(), summary_line(partition))?;
    let duplicates = names.duplicates();
    if !duplicates.is_empty() {
        writeln!(
            out,
            "  {} {}",
            "ℹ".dimmed(),
            format!("Shared first names shown with initial: {}", duplicates.join(", ")).dimmed(),
        )?;
    }
    Ok(())
}
