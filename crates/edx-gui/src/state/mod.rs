//! Application state management
//!
//! Contains the route enum and the top-level runtime state for the GUI.

mod app_state;

pub use app_state::{AppState, View};
