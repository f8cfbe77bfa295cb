use serde::{Deserialize, Serialize};

use crate::ids::ExamId;

/// Display metadata for one examination, as shown on the home page cards
/// and the exam-selection header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSummary {
    pub id: ExamId,
    /// Display name (e.g. "JEE Main").
    pub name: String,
    /// One-line description shown under the name.
    pub description: String,
    /// Subject badges in display order.
    pub subjects: Vec<String>,
    /// Human-readable total duration (e.g. "3 hours 20 min").
    pub duration_label: String,
    /// Total question count for the full-length paper.
    pub question_count: u32,
    /// Emblem glyph shown on the card.
    pub emblem: String,
}

/// The two test modes offered on the exam-selection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestMode {
    GrandTest,
    PartTest,
}

impl TestMode {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GrandTest => "Grand Test",
            Self::PartTest => "Part Test",
        }
    }

    pub const fn tagline(&self) -> &'static str {
        match self {
            Self::GrandTest => "Full pattern exam like NTA official",
            Self::PartTest => "Choose specific subject/topic/subtopic",
        }
    }

    pub const fn all() -> &'static [TestMode] {
        &[Self::GrandTest, Self::PartTest]
    }
}
