//! ED Exams - Desktop GUI Application
//!
//! The client-side presentation layer of the exam-preparation platform:
//! home page, exam-selection page, Grand Test screen and Part Test picker.

pub mod app;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
