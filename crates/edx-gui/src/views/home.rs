//! Home screen view
//!
//! Exam catalog cards and the cross-exam performance-history table.

use egui::{RichText, Ui};

use edx_catalog::{catalog, fixtures};

use crate::settings::save_settings;
use crate::state::AppState;
use crate::theme::{colors, spacing};

pub struct HomeView;

impl HomeView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        // Track which exam was clicked (if any)
        let mut clicked_exam: Option<String> = None;
        let mut toggle_dark = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            // Header
            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new(format!("{} ED Exams", egui_phosphor::regular::BOOK_OPEN))
                        .size(28.0)
                        .color(colors::NTA_BLUE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if state.settings.general.dark_mode {
                        egui_phosphor::regular::SUN
                    } else {
                        egui_phosphor::regular::MOON
                    };
                    if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                        toggle_dark = true;
                    }
                    ui.label(
                        RichText::new(format!("Welcome, {}", state.settings.general.student_name))
                            .strong(),
                    );
                });
            });
            ui.label(RichText::new("Online Exam Preparation Platform").weak());
            ui.separator();

            ui.add_space(spacing::LG);
            ui.vertical_centered(|ui| {
                ui.heading("Choose Your Exam");
                ui.label(
                    RichText::new("Select an exam to start your preparation journey").weak(),
                );
            });
            ui.add_space(spacing::MD);

            // Exam cards
            let exams = catalog().exams();
            ui.columns(exams.len(), |columns| {
                for (column, entry) in columns.iter_mut().zip(exams) {
                    let summary = &entry.summary;
                    column.group(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(&summary.emblem).size(32.0));
                            ui.heading(&summary.name);
                            ui.label(RichText::new(&summary.description).weak().small());
                            ui.add_space(spacing::SM);

                            ui.horizontal_wrapped(|ui| {
                                for subject in &summary.subjects {
                                    ui.small_button(subject.as_str());
                                }
                            });

                            ui.add_space(spacing::XS);
                            ui.label(
                                RichText::new(format!(
                                    "{} {}   {} {} Qs",
                                    egui_phosphor::regular::CLOCK,
                                    summary.duration_label,
                                    egui_phosphor::regular::USERS,
                                    summary.question_count,
                                ))
                                .weak()
                                .small(),
                            );

                            ui.add_space(spacing::SM);
                            if ui.button("Start Exam").clicked() {
                                clicked_exam = Some(summary.id.as_str().to_string());
                            }
                        });
                    });
                }
            });

            // Performance history
            ui.add_space(spacing::XL);
            ui.label(
                RichText::new(format!(
                    "{} Performance History",
                    egui_phosphor::regular::TREND_UP
                ))
                .strong()
                .size(18.0),
            );
            ui.add_space(spacing::SM);

            egui::Grid::new("performance_history")
                .striped(true)
                .num_columns(4)
                .spacing([spacing::XL, spacing::SM])
                .show(ui, |ui| {
                    ui.label(RichText::new("Date").strong());
                    ui.label(RichText::new("Exam").strong());
                    ui.label(RichText::new("Type").strong());
                    ui.label(RichText::new("Score").strong());
                    ui.end_row();

                    for record in fixtures::recent_history() {
                        ui.label(record.date.format("%Y-%m-%d").to_string());
                        ui.label(RichText::new(&record.exam).strong());
                        ui.label(RichText::new(&record.label).weak());
                        ui.label(
                            RichText::new(record.score.to_string()).color(colors::SUCCESS),
                        );
                        ui.end_row();
                    }
                });
        });

        // Handle navigation after borrowing ends
        if toggle_dark {
            state.settings.general.dark_mode = !state.settings.general.dark_mode;
            if let Err(e) = save_settings(&state.settings) {
                tracing::error!("Failed to save settings: {}", e);
            }
        }
        if let Some(exam_id) = clicked_exam {
            state.open_exam(&exam_id);
        }
    }
}
