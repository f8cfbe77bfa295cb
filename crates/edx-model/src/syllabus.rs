//! Nested subject → topic → subtopic structure for one examination.
//!
//! The tree is Vec-backed so the authoring order of subjects, topics and
//! subtopics is preserved exactly; selection UIs render these sequences
//! verbatim.

use serde::{Deserialize, Serialize};

/// Full syllabus for one examination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllabus {
    pub subjects: Vec<SubjectSyllabus>,
}

/// One subject and its ordered topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSyllabus {
    pub name: String,
    pub topics: Vec<TopicSyllabus>,
}

/// One topic and its ordered subtopics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSyllabus {
    pub name: String,
    pub subtopics: Vec<String>,
}

impl Syllabus {
    /// Subject names in authoring order.
    pub fn subject_names(&self) -> Vec<&str> {
        self.subjects.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn subject(&self, name: &str) -> Option<&SubjectSyllabus> {
        self.subjects.iter().find(|s| s.name == name)
    }

    /// Topic names under `subject`, empty when the subject is unknown.
    pub fn topics_of(&self, subject: &str) -> Vec<&str> {
        self.subject(subject)
            .map(|s| s.topics.iter().map(|t| t.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Subtopic names under `subject` + `topic`, empty when either is unknown.
    pub fn subtopics_of(&self, subject: &str, topic: &str) -> Vec<&str> {
        self.subject(subject)
            .and_then(|s| s.topics.iter().find(|t| t.name == topic))
            .map(|t| t.subtopics.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Syllabus {
        Syllabus {
            subjects: vec![SubjectSyllabus {
                name: "Physics".to_string(),
                topics: vec![TopicSyllabus {
                    name: "Mechanics".to_string(),
                    subtopics: vec!["Kinematics".to_string(), "Laws of Motion".to_string()],
                }],
            }],
        }
    }

    #[test]
    fn lookups_preserve_order() {
        let syllabus = sample();
        assert_eq!(syllabus.subject_names(), vec!["Physics"]);
        assert_eq!(syllabus.topics_of("Physics"), vec!["Mechanics"]);
        assert_eq!(
            syllabus.subtopics_of("Physics", "Mechanics"),
            vec!["Kinematics", "Laws of Motion"]
        );
    }

    #[test]
    fn unknown_keys_yield_empty() {
        let syllabus = sample();
        assert!(syllabus.topics_of("Botany").is_empty());
        assert!(syllabus.subtopics_of("Physics", "Optics").is_empty());
        assert!(syllabus.subtopics_of("Botany", "Mechanics").is_empty());
    }
}
