use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marks obtained out of a maximum, as displayed in history tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub obtained: u32,
    pub maximum: u32,
}

impl Score {
    pub const fn new(obtained: u32, maximum: u32) -> Self {
        Self { obtained, maximum }
    }

    pub fn percentage(&self) -> f64 {
        if self.maximum == 0 {
            return 0.0;
        }
        f64::from(self.obtained) * 100.0 / f64::from(self.maximum)
    }

    /// Percentage rendered the way history rows show it (e.g. "81.67%").
    pub fn percentage_label(&self) -> String {
        format!("{:.2}%", self.percentage())
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.obtained, self.maximum)
    }
}

/// One past attempt as shown in the performance-history tables.
///
/// These records are display fixtures; no attempt is ever created or updated
/// by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub date: NaiveDate,
    /// Exam display name (e.g. "JEE Main").
    pub exam: String,
    /// Attempt label (e.g. "Grand Test", "Part Test - Physics").
    pub label: String,
    pub score: Score,
}
