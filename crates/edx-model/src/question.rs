use serde::{Deserialize, Serialize};

/// One multiple-choice question as rendered in the test screen.
///
/// Options are render-only; nothing in the application grades an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based number within the paper.
    pub number: u32,
    pub subject: String,
    pub prompt: String,
    /// Option texts in display order; labelled A, B, C... in the UI.
    pub options: Vec<String>,
}

impl Question {
    /// Letter label for an option index (0 → "A").
    pub fn option_label(index: usize) -> char {
        (b'A' + index as u8) as char
    }
}

/// Palette status of one question in the Grand Test side panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionStatus {
    Answered,
    Marked,
    #[default]
    NotAnswered,
}

impl QuestionStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Answered => "Answered",
            Self::Marked => "Marked for Review",
            Self::NotAnswered => "Not Answered",
        }
    }

    pub const fn all() -> &'static [QuestionStatus] {
        &[Self::Answered, Self::Marked, Self::NotAnswered]
    }
}

/// One cell of the question palette grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// 1-based question number.
    pub number: u32,
    pub subject: String,
    pub status: QuestionStatus,
}
