//! JSON output renderer.
//!
//! Outputs `{"groups": [...], "summary": {...}}` format.

use serde::Serialize;

use crate::models::{NameIndex, Partition, Student};
use crate::output::{OutputRenderer, Summary};

/// JSON output renderer.
pub struct JsonRenderer;

#[derive(Serialize)]
struct GroupView<'a> {
    number: usize,
    size: usize,
    members: Vec<MemberView<'a>>,
}

#[derive(Serialize)]
struct MemberView<'a> {
    name: String,
    #[serde(flatten)]
    student: &'a Student,
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, partition: &Partition<Student>, names: &NameIndex) -> String {
        let groups: Vec<GroupView<'_>> = partition
            .iter()
            .enumerate()
            .map(|(i, group)| GroupView {
                number: i + 1,
                size: group.len(),
                members: group
                    .iter()
                    .map(|student| MemberView {
                        name: names.display_name(student),
                        student,
                    })
                    .collect(),
            })
            .collect();

        let output = serde_json::json!({
            "groups": groups,
            "summary": Summary::from_partition(partition),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;

    #[test]
    fn render_json() {
        let students = vec![
            Student::new("Anna", "Bakker").with_id("s1"),
            Student::new("Anna", "Jansen"),
            Student::new("Bram", "Smit"),
        ];
        let names = NameIndex::from_students(&students);
        let partition = Partition::from(vec![
            Group::from(students[..2].to_vec()),
            Group::from(students[2..].to_vec()),
        ]);

        let output = JsonRenderer.render(&partition, &names);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["groups"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["groups"][0]["number"], 1);
        assert_eq!(parsed["groups"][0]["size"], 2);
        assert_eq!(parsed["groups"][0]["members"][0]["name"], "Anna B");
        assert_eq!(parsed["groups"][0]["members"][0]["id"], "s1");
        assert!(parsed["groups"][0]["members"][1].get("id").is_none());
        assert_eq!(parsed["groups"][1]["members"][0]["last_name"], "Smit");
        assert_eq!(parsed["summary"]["students"], 3);
        assert_eq!(parsed["summary"]["min_size"], 1);
        assert_eq!(parsed["summary"]["max_size"], 2);
    }

    #[test]
    fn render_empty_json() {
        let output = JsonRenderer.render(&Partition::empty(), &NameIndex::default());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["groups"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["summary"]["groups"], 0);
        assert_eq!(parsed["summary"]["students"], 0);
    }
}
