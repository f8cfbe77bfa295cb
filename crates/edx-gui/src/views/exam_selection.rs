//! Exam-selection view
//!
//! Mode cards (Grand Test / Part Test) plus the exam's recent attempts.

use egui::{RichText, Ui};

use edx_catalog::{catalog, fixtures};
use edx_model::TestMode;

use crate::state::AppState;
use crate::theme::{colors, spacing};
use crate::views::NotFoundView;

pub struct ExamSelectionView;

impl ExamSelectionView {
    pub fn show(ui: &mut Ui, state: &mut AppState, exam_id: &str) {
        let Ok(entry) = catalog().get(exam_id) else {
            NotFoundView::show(ui, state, exam_id);
            return;
        };
        let summary = &entry.summary;

        let mut go_home = false;
        let mut start_mode: Option<TestMode> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            // Header
            ui.horizontal(|ui| {
                if ui
                    .button(format!(
                        "{} Back to Home",
                        egui_phosphor::regular::ARROW_LEFT
                    ))
                    .clicked()
                {
                    go_home = true;
                }
                ui.label(RichText::new(&summary.emblem).size(24.0));
                ui.vertical(|ui| {
                    ui.heading(&summary.name);
                    ui.label(RichText::new(&summary.description).weak().small());
                });
            });
            ui.separator();
            ui.add_space(spacing::MD);

            ui.columns(2, |columns| {
                // Left: mode selection
                let ui = &mut columns[0];
                ui.label(
                    RichText::new(format!(
                        "{} Select Exam Mode",
                        egui_phosphor::regular::TARGET
                    ))
                    .strong()
                    .size(18.0),
                );
                ui.add_space(spacing::SM);

                // Grand Test card
                ui.group(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::BOOK_OPEN,
                            TestMode::GrandTest.label()
                        ))
                        .strong()
                        .size(16.0),
                    );
                    ui.label(RichText::new(TestMode::GrandTest.tagline()).weak().small());
                    ui.add_space(spacing::XS);
                    ui.horizontal_wrapped(|ui| {
                        for subject in &summary.subjects {
                            ui.small_button(subject.as_str());
                        }
                    });
                    ui.label(
                        RichText::new(format!(
                            "{} {}   All subjects included",
                            egui_phosphor::regular::CLOCK,
                            summary.duration_label
                        ))
                        .weak()
                        .small(),
                    );
                    ui.add_space(spacing::XS);
                    if ui.button("Start Grand Test").clicked() {
                        start_mode = Some(TestMode::GrandTest);
                    }
                });

                ui.add_space(spacing::SM);

                // Part Test card
                ui.group(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::TARGET,
                            TestMode::PartTest.label()
                        ))
                        .strong()
                        .size(16.0),
                    );
                    ui.label(RichText::new(TestMode::PartTest.tagline()).weak().small());
                    ui.add_space(spacing::XS);
                    ui.label(
                        RichText::new(format!(
                            "Select from {} and focus on specific topics",
                            summary.subjects.join(", ")
                        ))
                        .weak()
                        .small(),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} Flexible duration   Subject-wise practice",
                            egui_phosphor::regular::CLOCK
                        ))
                        .weak()
                        .small(),
                    );
                    ui.add_space(spacing::XS);
                    if ui.button("Start Part Test").clicked() {
                        start_mode = Some(TestMode::PartTest);
                    }
                });

                // Right: recent attempts
                let ui = &mut columns[1];
                ui.label(
                    RichText::new(format!(
                        "{} {} History",
                        egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE,
                        summary.name
                    ))
                    .strong()
                    .size(18.0),
                );
                ui.add_space(spacing::SM);

                let history = fixtures::exam_history(&summary.name);
                if history.is_empty() {
                    ui.label(RichText::new("No previous attempts found").weak());
                    ui.label(
                        RichText::new("Start your first test to see results here")
                            .weak()
                            .small(),
                    );
                } else {
                    ui.group(|ui| {
                        ui.label(RichText::new("Recent Attempts").strong());
                        ui.separator();
                        for record in &history {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&record.label).strong());
                                    ui.label(
                                        RichText::new(record.date.format("%Y-%m-%d").to_string())
                                            .weak()
                                            .small(),
                                    );
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.vertical(|ui| {
                                            ui.label(
                                                RichText::new(record.score.to_string())
                                                    .color(colors::SUCCESS)
                                                    .strong(),
                                            );
                                            ui.label(
                                                RichText::new(record.score.percentage_label())
                                                    .weak()
                                                    .small(),
                                            );
                                        });
                                    },
                                );
                            });
                            ui.separator();
                        }
                    });
                }
            });
        });

        // Handle navigation after borrowing ends
        if go_home {
            state.go_home();
        }
        match start_mode {
            Some(TestMode::GrandTest) => state.start_grand_test(exam_id),
            Some(TestMode::PartTest) => state.open_part_test(exam_id),
            None => {}
        }
    }
}
