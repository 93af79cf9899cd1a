//! Student records and first-name disambiguation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single student read from a roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    /// Optional student number. Unique within a roster when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// First character of the last name, if any.
    pub fn initial(&self) -> Option<char> {
        self.last_name.chars().next()
    }
}

/// Counts how often each first name occurs in a roster.
///
/// Used to render `"Anna"` for a unique first name and `"Anna B"` when
/// another student shares it. Iteration follows roster order.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    counts: IndexMap<String, usize>,
}

impl NameIndex {
    pub fn from_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        let mut counts = IndexMap::new();
        for student in students {
            *counts.entry(student.first_name.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns `true` if at most one student carries this first name.
    pub fn is_unique(&self, first_name: &str) -> bool {
        self.counts.get(first_name).copied().unwrap_or(0) <= 1
    }

    /// Name to show for a student, with the last-name initial appended when
    /// the first name is shared.
    pub fn display_name(&self, student: &Student) -> String {
        if self.is_unique(&student.first_name) {
            return student.first_name.clone();
        }
        match student.initial() {
            Some(initial) => format!("{} {initial}", student.first_name),
            None => student.first_name.clone(),
        }
    }

    /// First names carried by more than one student, in roster order.
    pub fn duplicates(&self) -> Vec<&str> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
