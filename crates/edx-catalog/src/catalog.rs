use std::sync::LazyLock;

use edx_model::{ExamId, ExamSummary, ModelError, Result, Syllabus};

use crate::data;

/// One exam in the catalog: its card metadata plus its full syllabus.
#[derive(Debug, Clone)]
pub struct ExamEntry {
    pub summary: ExamSummary,
    pub syllabus: Syllabus,
}

/// The static reference data describing every supported examination.
///
/// Built once at first use and immutable afterwards; no entry is ever
/// created, mutated or removed at runtime.
#[derive(Debug, Clone)]
pub struct Catalog {
    exams: Vec<ExamEntry>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    exams: data::builtin_exams(),
});

/// The process-wide catalog instance.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    /// All exams in display order.
    pub fn exams(&self) -> &[ExamEntry] {
        &self.exams
    }

    /// Look up an exam by id.
    ///
    /// An id absent from the catalog is the one defined failure of the
    /// application; callers surface it as the not-found screen.
    pub fn get(&self, id: &str) -> Result<&ExamEntry> {
        self.exams
            .iter()
            .find(|e| e.summary.id.as_str() == id)
            .ok_or_else(|| ModelError::UnknownExam(id.to_string()))
    }

    pub fn summary(&self, id: &str) -> Result<&ExamSummary> {
        self.get(id).map(|e| &e.summary)
    }

    pub fn syllabus(&self, id: &str) -> Result<&Syllabus> {
        self.get(id).map(|e| &e.syllabus)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }

    pub fn exam_ids(&self) -> Vec<&ExamId> {
        self.exams.iter().map(|e| &e.summary.id).collect()
    }
}
