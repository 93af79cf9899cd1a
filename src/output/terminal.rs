//! Terminal renderer: one block per group, one line per student.
//!
//! ```text
//! Group 1:
//! - Anna B
//! - Bram
//!
//! Group 2:
//! ...
//! ```

use colored::Colorize;

use crate::models::{NameIndex, Partition, Student};
use crate::output::OutputRenderer;

/// Plain-text group listing with bold group headers.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, partition: &Partition<Student>, names: &NameIndex) -> String {
        if partition.is_empty() {
            return format!("{}\n", "No groups.".dimmed());
        }

        let mut output = String::new();
        for (i, group) in partition.iter().enumerate() {
            output.push_str(&format!("{}\n", format!("Group {}:", i + 1).bold()));
            for student in group {
                output.push_str(&format!("- {}\n", names.display_name(student)));
            }
            output.push('\n');
        }
        output
    }
}
