//! Session logic for ED Exams: the cascading Part Test selector, the exam
//! countdown, and Grand Test runtime state.

pub mod exam_session;
pub mod plan;
pub mod selection;
pub mod timer;

pub use exam_session::{GrandTestSession, StatusSummary};
pub use plan::PartTestPlan;
pub use selection::TopicSelection;
pub use timer::CountdownTimer;
