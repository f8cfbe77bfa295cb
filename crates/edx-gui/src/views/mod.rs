//! View components
//!
//! Each view represents a major screen in the application.

mod exam_selection;
mod grand_test;
mod home;
mod not_found;
mod part_test_start;

pub use exam_selection::ExamSelectionView;
pub use grand_test::GrandTestView;
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use part_test::PartTestView;
pub use part_test_start::PartTestStartView;
