//! Runtime state for a running Grand Test.
//!
//! Navigation and the countdown are live; question content and the palette
//! status distribution come from the display fixtures and are never graded.

use std::time::Duration;

use edx_catalog::{ExamEntry, fixtures};
use edx_model::{ExamId, PaletteEntry, Question, QuestionStatus};

use crate::timer::CountdownTimer;

/// Questions per subject block in the palette.
const QUESTIONS_PER_SUBJECT: u32 = 30;

/// Palette counts shown in the summary card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub answered: u32,
    pub marked: u32,
    pub not_answered: u32,
    pub total: u32,
}

/// State for one full-length simulated exam.
#[derive(Debug, Clone)]
pub struct GrandTestSession {
    pub exam_id: ExamId,
    pub exam_name: String,
    subjects: Vec<String>,
    palette: Vec<PaletteEntry>,
    question: Question,
    timer: CountdownTimer,
    /// 1-based current question number, clamped to 1..=total.
    current: u32,
    active_subject: String,
    /// Index of the picked option on the current question, render-only.
    picked_option: Option<usize>,
}

impl GrandTestSession {
    pub fn new(entry: &ExamEntry) -> Self {
        let subjects: Vec<String> = entry
            .syllabus
            .subject_names()
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let palette = fixtures::question_palette(&subjects, QUESTIONS_PER_SUBJECT);
        let active_subject = subjects.first().cloned().unwrap_or_default();

        Self {
            exam_id: entry.summary.id.clone(),
            exam_name: entry.summary.name.clone(),
            subjects,
            palette,
            question: fixtures::sample_question(),
            timer: CountdownTimer::new(CountdownTimer::GRAND_TEST),
            current: 1,
            active_subject,
            picked_option: None,
        }
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn active_subject(&self) -> &str {
        &self.active_subject
    }

    pub fn activate_subject(&mut self, subject: &str) {
        if self.subjects.iter().any(|s| s == subject) {
            self.active_subject = subject.to_string();
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn total_questions(&self) -> u32 {
        self.palette.len() as u32
    }

    pub fn current_question(&self) -> u32 {
        self.current
    }

    pub fn jump_to(&mut self, number: u32) {
        self.current = number.clamp(1, self.total_questions().max(1));
    }

    pub fn next(&mut self) {
        self.jump_to(self.current + 1);
    }

    pub fn previous(&mut self) {
        self.jump_to(self.current.saturating_sub(1));
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total_questions()
    }

    pub fn picked_option(&self) -> Option<usize> {
        self.picked_option
    }

    pub fn pick_option(&mut self, index: usize) {
        self.picked_option = Some(index);
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// Feed elapsed wall-clock time into the countdown.
    pub fn tick(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    /// Palette entries for one subject block, in question order.
    pub fn entries_for(&self, subject: &str) -> Vec<&PaletteEntry> {
        self.palette
            .iter()
            .filter(|e| e.subject == subject)
            .collect()
    }

    pub fn status_summary(&self) -> StatusSummary {
        let mut summary = StatusSummary {
            total: self.total_questions(),
            ..StatusSummary::default()
        };
        for entry in &self.palette {
            match entry.status {
                QuestionStatus::Answered => summary.answered += 1,
                QuestionStatus::Marked => summary.marked += 1,
                QuestionStatus::NotAnswered => summary.not_answered += 1,
            }
        }
        summary
    }
}
