//! Shared not-found screen for unknown exam ids.
//!
//! The one defined failure: a route parameter that matches no catalog entry
//! degrades to this screen with a single recovery action.

use egui::{RichText, Ui};

use crate::state::AppState;
use crate::theme::spacing;

pub struct NotFoundView;

impl NotFoundView {
    pub fn show(ui: &mut Ui, state: &mut AppState, exam_id: &str) {
        let mut go_home = false;

        ui.vertical_centered(|ui| {
            ui.add_space(spacing::XL * 4.0);
            ui.heading(RichText::new("Exam not found").size(24.0));
            ui.add_space(spacing::SM);
            ui.label(
                RichText::new(format!("No exam with id \"{exam_id}\" exists"))
                    .weak()
                    .small(),
            );
            ui.add_space(spacing::MD);
            if ui.button("Return to Home").clicked() {
                go_home = true;
            }
        });

        if go_home {
            state.go_home();
        }
    }
}
