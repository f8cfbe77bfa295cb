//! Grand Test view
//!
//! NTA-style exam screen: countdown header, subject tabs, question card and
//! the question palette side panel. Question content and palette statuses
//! are display fixtures; only navigation and the countdown are live.

use egui::{Color32, RichText, Ui};

use edx_model::{Question, QuestionStatus};

use crate::state::AppState;
use crate::theme::{colors, spacing};
use crate::views::NotFoundView;

pub struct GrandTestView;

impl GrandTestView {
    pub fn show(ui: &mut Ui, state: &mut AppState, exam_id: &str) {
        // No session means the route carried an unknown exam id.
        if state.grand_test.is_none() {
            NotFoundView::show(ui, state, exam_id);
            return;
        }

        let mut go_back = false;
        let mut activate_subject: Option<String> = None;
        let mut jump_to: Option<u32> = None;
        let mut pick_option: Option<usize> = None;
        let mut advance = false;
        let mut go_previous = false;

        let Some(session) = state.grand_test.as_mut() else {
            return;
        };

        // Header bar
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Back", egui_phosphor::regular::ARROW_LEFT))
                .clicked()
            {
                go_back = true;
            }
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} - Grand Test",
                        session.exam_id.as_str().to_uppercase()
                    ))
                    .strong()
                    .size(16.0),
                );
                ui.label(RichText::new("Online Examination System").weak().small());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("Submit Test").color(Color32::WHITE))
                    .clicked()
                {
                    // Grading does not exist in the mock; the button is the
                    // same dead end the hosted platform renders.
                    tracing::debug!("Submit clicked; no grading in mock");
                }
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::CLOCK,
                            session.timer().format_hms()
                        ))
                        .strong()
                        .size(16.0),
                    );
                    ui.label(RichText::new("Time Remaining").weak().small());
                });
            });
        });
        ui.separator();

        // Palette side panel
        egui::SidePanel::right("question_palette")
            .resizable(false)
            .default_width(320.0)
            .show_inside(ui, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    Self::palette(ui, session, &mut jump_to);
                });
            });

        // Question area
        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                // Subject tabs
                ui.horizontal(|ui| {
                    for subject in session.subjects() {
                        let selected = session.active_subject() == subject;
                        if ui.selectable_label(selected, subject.as_str()).clicked() {
                            activate_subject = Some(subject.clone());
                        }
                    }
                });
                ui.add_space(spacing::MD);

                // Question card
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Question {}", session.current_question()))
                                .strong(),
                        );
                        ui.label(
                            RichText::new(session.active_subject()).color(colors::NTA_BLUE),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                // Marking is a palette fixture; the button is
                                // rendered but mutates nothing.
                                let _ = ui.button(format!(
                                    "{} Mark for Review",
                                    egui_phosphor::regular::FLAG
                                ));
                            },
                        );
                    });
                    ui.add_space(spacing::SM);

                    let question = session.question();
                    ui.label(RichText::new(&question.prompt).size(15.0));
                    ui.add_space(spacing::SM);

                    for (index, option) in question.options.iter().enumerate() {
                        let label =
                            format!("{}. {}", Question::option_label(index), option);
                        if ui
                            .radio(session.picked_option() == Some(index), label)
                            .clicked()
                        {
                            pick_option = Some(index);
                        }
                    }

                    ui.add_space(spacing::MD);
                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(!session.is_first(), egui::Button::new("Previous"))
                            .clicked()
                        {
                            go_previous = true;
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Next").clicked() {
                                    advance = true;
                                }
                                if ui
                                    .button(
                                        RichText::new("Save & Next").color(colors::SUCCESS),
                                    )
                                    .clicked()
                                {
                                    advance = true;
                                }
                            },
                        );
                    });
                });
            });
        });

        // Apply interactions after rendering borrows end
        if let Some(subject) = activate_subject {
            session.activate_subject(&subject);
        }
        if let Some(number) = jump_to {
            session.jump_to(number);
        }
        if let Some(index) = pick_option {
            session.pick_option(index);
        }
        if go_previous {
            session.previous();
        }
        if advance {
            session.next();
        }
        if go_back {
            state.open_exam(exam_id);
        }
    }

    /// Legend, per-subject grids and the summary card.
    fn palette(ui: &mut Ui, session: &edx_session::GrandTestSession, jump_to: &mut Option<u32>) {
        ui.label(RichText::new("Question Palette").strong().size(16.0));
        ui.add_space(spacing::SM);

        for status in QuestionStatus::all() {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(egui_phosphor::regular::SQUARE)
                        .color(colors::status_color(*status)),
                );
                ui.label(RichText::new(status.label()).small());
            });
        }
        ui.add_space(spacing::MD);

        let current = session.current_question();
        for subject in session.subjects() {
            ui.label(RichText::new(subject.as_str()).strong());
            ui.separator();
            let entries = session.entries_for(subject);
            for row in entries.chunks(5) {
                ui.horizontal(|ui| {
                    for entry in row {
                        let text = RichText::new(entry.number.to_string())
                            .color(Color32::WHITE)
                            .small();
                        let mut button = egui::Button::new(text)
                            .fill(colors::status_color(entry.status))
                            .min_size(egui::vec2(36.0, 28.0));
                        if entry.number == current {
                            button =
                                button.stroke(egui::Stroke::new(2.0, colors::NTA_BLUE));
                        }
                        if ui.add(button).clicked() {
                            *jump_to = Some(entry.number);
                        }
                    }
                });
            }
            ui.add_space(spacing::SM);
        }

        // Summary card
        let summary = session.status_summary();
        ui.group(|ui| {
            ui.label(RichText::new("Summary").strong());
            egui::Grid::new("palette_summary")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Answered:");
                    ui.label(
                        RichText::new(summary.answered.to_string()).color(colors::SUCCESS),
                    );
                    ui.end_row();
                    ui.label("Marked:");
                    ui.label(RichText::new(summary.marked.to_string()).color(colors::MARKED));
                    ui.end_row();
                    ui.label("Not Answered:");
                    ui.label(
                        RichText::new(summary.not_answered.to_string())
                            .color(colors::NOT_ANSWERED),
                    );
                    ui.end_row();
                    ui.label(RichText::new("Total:").strong());
                    ui.label(RichText::new(summary.total.to_string()).strong());
                    ui.end_row();
                });
        });
    }
}
