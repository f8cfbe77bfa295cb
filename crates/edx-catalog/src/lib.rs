//! Compiled-in reference data for ED Exams.
//!
//! The [`Catalog`] describes every supported examination (card metadata plus
//! the subject → topic → subtopic syllabus) and is the single source the
//! selection screens draw their options from. The [`fixtures`] module holds
//! the display-only mock history and question data.

mod catalog;
mod data;
pub mod fixtures;

pub use catalog::{Catalog, ExamEntry, catalog};
