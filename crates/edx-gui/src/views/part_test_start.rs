//! Confirmation screen for a started Part Test.
//!
//! The logical `/part-test/start` route: shows the confirmed configuration
//! and offers the way back.

use egui::{RichText, Ui};

use edx_session::PartTestPlan;

use crate::state::AppState;
use crate::theme::{colors, spacing};

pub struct PartTestStartView;

impl PartTestStartView {
    pub fn show(ui: &mut Ui, state: &mut AppState, plan: &PartTestPlan) {
        let mut go_back = false;
        let mut go_home = false;

        ui.vertical_centered(|ui| {
            ui.add_space(spacing::XL * 2.0);
            ui.label(
                RichText::new(egui_phosphor::regular::TARGET)
                    .size(40.0)
                    .color(colors::NTA_BLUE),
            );
            ui.add_space(spacing::SM);
            ui.heading("Part Test Ready");
            ui.label(RichText::new(plan.to_string()).size(18.0).strong());
            ui.add_space(spacing::XS);
            ui.label(
                RichText::new(format!("{} - focused practice session", plan.exam_id))
                    .weak()
                    .small(),
            );

            ui.add_space(spacing::LG);
            egui::Grid::new("plan_summary")
                .num_columns(2)
                .spacing([spacing::LG, spacing::XS])
                .show(ui, |ui| {
                    ui.label(RichText::new("Subject:").weak());
                    ui.label(RichText::new(&plan.subject).strong());
                    ui.end_row();
                    ui.label(RichText::new("Topic:").weak());
                    ui.label(RichText::new(&plan.topic).strong());
                    ui.end_row();
                    ui.label(RichText::new("Subtopic:").weak());
                    ui.label(RichText::new(&plan.subtopic).strong());
                    ui.end_row();
                });

            ui.add_space(spacing::LG);
            ui.horizontal(|ui| {
                // Center the two actions.
                ui.add_space(ui.available_width() / 2.0 - 140.0);
                if ui
                    .button(format!(
                        "{} Change Selection",
                        egui_phosphor::regular::ARROW_LEFT
                    ))
                    .clicked()
                {
                    go_back = true;
                }
                if ui.button("Return to Home").clicked() {
                    go_home = true;
                }
            });
        });

        if go_back {
            state.open_part_test(plan.exam_id.as_str());
        }
        if go_home {
            state.go_home();
        }
    }
}
