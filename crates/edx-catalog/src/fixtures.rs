//! Display-only mock data.
//!
//! History rows, the sample question and the question-status distribution are
//! placeholders with no lifecycle: no attempt is recorded, no answer graded,
//! no status updated by any code path.

use chrono::NaiveDate;
use edx_model::{AttemptRecord, PaletteEntry, Question, QuestionStatus, Score};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

fn attempt(on: NaiveDate, exam: &str, label: &str, obtained: u32, maximum: u32) -> AttemptRecord {
    AttemptRecord {
        date: on,
        exam: exam.to_string(),
        label: label.to_string(),
        score: Score::new(obtained, maximum),
    }
}

/// Cross-exam performance history shown on the home page.
pub fn recent_history() -> Vec<AttemptRecord> {
    vec![
        attempt(date(2024, 1, 15), "JEE Main", "Grand Test", 245, 300),
        attempt(date(2024, 1, 14), "NEET", "Part Test - Physics", 42, 50),
        attempt(date(2024, 1, 13), "EAMCET", "Grand Test", 198, 200),
        attempt(date(2024, 1, 12), "JEE Main", "Part Test - Math", 28, 30),
    ]
}

/// Recent attempts shown on the exam-selection page.
pub fn exam_history(exam_name: &str) -> Vec<AttemptRecord> {
    vec![
        attempt(date(2024, 1, 15), exam_name, "Grand Test", 245, 300),
        attempt(date(2024, 1, 12), exam_name, "Part Test - Physics", 28, 30),
        attempt(date(2024, 1, 10), exam_name, "Grand Test", 198, 300),
        attempt(date(2024, 1, 8), exam_name, "Part Test - Mathematics", 25, 30),
    ]
}

/// The one sample question rendered in the Grand Test question card.
pub fn sample_question() -> Question {
    Question {
        number: 1,
        subject: "Physics".to_string(),
        prompt: "A particle moves in a straight line with constant acceleration. If its \
                 velocity changes from 10 m/s to 30 m/s in 4 seconds, what is the acceleration?"
            .to_string(),
        options: vec![
            "2.5 m/s²".to_string(),
            "5 m/s²".to_string(),
            "7.5 m/s²".to_string(),
            "10 m/s²".to_string(),
        ],
    }
}

/// The fixed palette distribution: first 5 answered, next 5 marked for
/// review, remainder not answered, partitioned into consecutive blocks of
/// `per_subject` questions per subject.
pub fn question_palette(subjects: &[String], per_subject: u32) -> Vec<PaletteEntry> {
    let total = subjects.len() as u32 * per_subject;
    (0..total)
        .map(|i| {
            let status = if i < 5 {
                QuestionStatus::Answered
            } else if i < 10 {
                QuestionStatus::Marked
            } else {
                QuestionStatus::NotAnswered
            };
            PaletteEntry {
                number: i + 1,
                subject: subjects[(i / per_subject) as usize].clone(),
                status,
            }
        })
        .collect()
}
