//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{NameIndex, Partition, Student};

/// Trait for rendering a divided class to an output format.
pub trait OutputRenderer {
    /// Render the partition to a string. `names` decides how each student
    /// is labelled.
    fn render(&self, partition: &Partition<Student>, names: &NameIndex) -> String;
}

/// Summary statistics for a division.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub students: usize,
    pub groups: usize,
    pub min_size: usize,
    pub max_size: usize,
}

impl Summary {
    pub fn from_partition<T>(partition: &Partition<T>) -> Self {
        let sizes = partition.sizes();
        Summary {
            students: partition.total(),
            groups: partition.len(),
            min_size: sizes.iter().copied().min().unwrap_or(0),
            max_size: sizes.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render using the renderer for this format.
    pub fn render(&self, partition: &Partition<Student>, names: &NameIndex) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(partition, names),
            OutputFormat::Json => json::JsonRenderer.render(partition, names),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}
