//! Settings types for the ED Exams GUI.
//!
//! Only ambient preferences live here; exam content and history are
//! compiled-in data and never persisted.

mod persistence;

pub use persistence::{load_settings, save_settings, settings_path};

use serde::{Deserialize, Serialize};

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,

    /// Recently opened exam ids (most recent first).
    #[serde(default)]
    pub recent_exams: Vec<String>,
}

/// General application preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
    /// Name shown in the home page welcome header.
    pub student_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            student_name: "Student".to_string(),
        }
    }
}
