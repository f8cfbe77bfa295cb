//! Core data model for the ED Exams preparation platform.
//!
//! Pure types shared by the catalog, session logic and GUI: exam metadata,
//! syllabus trees, history records and question palette entries.

pub mod error;
pub mod exam;
pub mod history;
pub mod ids;
pub mod question;
pub mod syllabus;

pub use error::{ModelError, Result};
pub use exam::{ExamSummary, TestMode};
pub use history::{AttemptRecord, Score};
pub use ids::ExamId;
pub use question::{PaletteEntry, Question, QuestionStatus};
pub use syllabus::{SubjectSyllabus, Syllabus, TopicSyllabus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exam_summary_round_trips() {
        let summary = ExamSummary {
            id: ExamId::new("neet").unwrap(),
            name: "NEET".to_string(),
            description: "National Eligibility cum Entrance Test".to_string(),
            subjects: vec!["Physics".to_string(), "Biology".to_string()],
            duration_label: "3 hours 20 min".to_string(),
            question_count: 180,
            emblem: "🏥".to_string(),
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: ExamSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round, summary);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(TestMode::GrandTest.label(), "Grand Test");
        assert_eq!(TestMode::PartTest.label(), "Part Test");
        assert_eq!(TestMode::all().len(), 2);
    }
}
