//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;
    use edx_model::QuestionStatus;

    /// Primary brand color (NTA blue)
    pub const NTA_BLUE: Color32 = Color32::from_rgb(30, 64, 175);

    /// Success/positive indicator color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

    /// Marked-for-review indicator (purple)
    pub const MARKED: Color32 = Color32::from_rgb(147, 51, 234);

    /// Not-answered indicator (gray)
    pub const NOT_ANSWERED: Color32 = Color32::from_rgb(107, 114, 128);

    /// Palette cell color for a question status.
    pub const fn status_color(status: QuestionStatus) -> Color32 {
        match status {
            QuestionStatus::Answered => SUCCESS,
            QuestionStatus::Marked => MARKED,
            QuestionStatus::NotAnswered => NOT_ANSWERED,
        }
    }
}
