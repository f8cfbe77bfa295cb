//! Application-level state and navigation.

use edx_catalog::catalog;
use edx_session::{GrandTestSession, PartTestPlan, TopicSelection};

use crate::settings::{Settings, save_settings};

/// Current view/screen. Exam-scoped routes carry the raw exam id so an
/// unknown id degrades to the not-found screen instead of being rejected up
/// front.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum View {
    /// Home screen - exam catalog and performance history
    #[default]
    Home,
    /// Per-exam mode selection (Grand Test / Part Test)
    ExamSelection { exam_id: String },
    /// Full-length timed exam screen
    GrandTest { exam_id: String },
    /// Subject/topic/subtopic picker
    PartTest { exam_id: String },
    /// Confirmation screen for a started Part Test
    PartTestStart { plan: PartTestPlan },
}

/// Top-level application state
pub struct AppState {
    /// Current view/screen
    pub view: View,
    /// Running Grand Test (None outside the test screen)
    pub grand_test: Option<GrandTestSession>,
    /// Part Test selection in progress (borrows the static catalog)
    pub part_test: Option<TopicSelection<'static>>,
    /// User preferences (persisted to disk)
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            view: View::Home,
            grand_test: None,
            part_test: None,
            settings,
        }
    }

    /// Navigate to the home screen, dropping any session state.
    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.drop_sessions();
    }

    /// Navigate to an exam's mode-selection screen.
    pub fn open_exam(&mut self, exam_id: &str) {
        self.drop_sessions();
        self.view = View::ExamSelection {
            exam_id: exam_id.to_string(),
        };
        if catalog().contains(exam_id) {
            self.remember_recent(exam_id);
        }
    }

    /// Start a Grand Test. The session only exists for known exam ids; the
    /// view renders the not-found screen otherwise.
    pub fn start_grand_test(&mut self, exam_id: &str) {
        self.drop_sessions();
        match catalog().get(exam_id) {
            Ok(entry) => {
                tracing::info!("Starting grand test for {}", exam_id);
                self.grand_test = Some(GrandTestSession::new(entry));
            }
            Err(e) => tracing::warn!("Cannot start grand test: {}", e),
        }
        self.view = View::GrandTest {
            exam_id: exam_id.to_string(),
        };
    }

    /// Open the Part Test picker with a fresh selection.
    pub fn open_part_test(&mut self, exam_id: &str) {
        self.drop_sessions();
        self.part_test = catalog()
            .syllabus(exam_id)
            .ok()
            .map(TopicSelection::new);
        self.view = View::PartTest {
            exam_id: exam_id.to_string(),
        };
    }

    /// Transition to the Part Test start view for a confirmed plan.
    pub fn start_part_test(&mut self, plan: PartTestPlan) {
        tracing::info!("Navigating to {}", plan.route());
        self.drop_sessions();
        self.view = View::PartTestStart { plan };
    }

    /// Leaving a test screen tears its session down; the Grand Test timer
    /// cannot outlive the view.
    fn drop_sessions(&mut self) {
        self.grand_test = None;
        self.part_test = None;
    }

    fn remember_recent(&mut self, exam_id: &str) {
        let id = exam_id.to_string();
        self.settings.recent_exams.retain(|e| e != &id);
        self.settings.recent_exams.insert(0, id);
        if self.settings.recent_exams.len() > 10 {
            self.settings.recent_exams.truncate(10);
        }
        if let Err(e) = save_settings(&self.settings) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Settings::default())
    }

    #[test]
    fn starting_grand_test_creates_session() {
        let mut state = state();
        state.start_grand_test("neet");
        assert!(matches!(state.view, View::GrandTest { ref exam_id } if exam_id == "neet"));
        assert!(state.grand_test.is_some());
    }

    #[test]
    fn unknown_exam_gets_no_session() {
        let mut state = state();
        state.start_grand_test("upsc");
        assert!(matches!(state.view, View::GrandTest { .. }));
        assert!(state.grand_test.is_none());
    }

    #[test]
    fn leaving_test_view_drops_timer() {
        let mut state = state();
        state.start_grand_test("jee-main");
        assert!(state.grand_test.is_some());

        state.go_home();
        assert_eq!(state.view, View::Home);
        assert!(state.grand_test.is_none());
        assert!(state.part_test.is_none());
    }

    #[test]
    fn part_test_selection_tracks_catalog() {
        let mut state = state();
        state.open_part_test("neet");
        let selection = state.part_test.as_ref().expect("selection for known exam");
        assert!(selection.syllabus().subject_names().contains(&"Biology"));

        state.open_part_test("upsc");
        assert!(state.part_test.is_none());
    }
}
