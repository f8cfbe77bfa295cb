//! A confirmed Part Test configuration.

use std::fmt;

use edx_model::ExamId;

use crate::selection::TopicSelection;

/// The (exam, subject, topic, subtopic) combination a Part Test starts with.
///
/// Only constructible from a complete selection, so holding a plan implies
/// every field was drawn from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartTestPlan {
    pub exam_id: ExamId,
    pub subject: String,
    pub topic: String,
    pub subtopic: String,
}

impl PartTestPlan {
    /// Build a plan from a completed selection; `None` while any slot is
    /// still unset.
    pub fn from_selection(exam_id: &ExamId, selection: &TopicSelection<'_>) -> Option<Self> {
        match (
            selection.subject(),
            selection.topic(),
            selection.subtopic(),
        ) {
            (Some(subject), Some(topic), Some(subtopic)) => Some(Self {
                exam_id: exam_id.clone(),
                subject: subject.to_string(),
                topic: topic.to_string(),
                subtopic: subtopic.to_string(),
            }),
            _ => None,
        }
    }

    /// Logical start route with the selection as query parameters, mirroring
    /// the navigation surface of the hosted platform.
    pub fn route(&self) -> String {
        format!(
            "/exam/{}/part-test/start?subject={}&topic={}&subtopic={}",
            self.exam_id, self.subject, self.topic, self.subtopic
        )
    }
}

impl fmt::Display for PartTestPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.subject, self.topic, self.subtopic)
    }
}
