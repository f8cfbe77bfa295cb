//! Main application struct and eframe::App implementation

use std::time::Duration;

use eframe::egui;

use crate::settings::load_settings;
use crate::state::{AppState, View};
use crate::views::{
    ExamSelectionView, GrandTestView, HomeView, PartTestStartView, PartTestView,
};

/// Main application struct
pub struct EdExamsApp {
    state: AppState,
}

impl EdExamsApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Load settings from disk
        let settings = load_settings();
        tracing::info!("Loaded settings: dark_mode={}", settings.general.dark_mode);

        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for EdExamsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.settings.general.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Handle keyboard shortcuts
        self.handle_shortcuts(ctx);

        // Drive the exam countdown from frame deltas; the repaint request
        // keeps it moving without user input.
        if matches!(self.state.view, View::GrandTest { .. }) {
            if let Some(session) = self.state.grand_test.as_mut() {
                let dt = ctx.input(|i| i.unstable_dt);
                session.tick(Duration::from_secs_f32(dt));
                ctx.request_repaint_after(Duration::from_millis(250));
            }
        }

        // Main panel
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view.clone() {
            View::Home => {
                HomeView::show(ui, &mut self.state);
            }
            View::ExamSelection { exam_id } => {
                ExamSelectionView::show(ui, &mut self.state, &exam_id);
            }
            View::GrandTest { exam_id } => {
                GrandTestView::show(ui, &mut self.state, &exam_id);
            }
            View::PartTest { exam_id } => {
                PartTestView::show(ui, &mut self.state, &exam_id);
            }
            View::PartTestStart { plan } => {
                PartTestStartView::show(ui, &mut self.state, &plan);
            }
        });
    }
}

impl EdExamsApp {
    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            // Escape - go one screen back
            if i.key_pressed(egui::Key::Escape) {
                match self.state.view.clone() {
                    View::Home => {}
                    View::ExamSelection { .. } => self.state.go_home(),
                    View::GrandTest { exam_id } | View::PartTest { exam_id } => {
                        self.state.open_exam(&exam_id);
                    }
                    View::PartTestStart { plan } => {
                        self.state.open_part_test(plan.exam_id.as_str());
                    }
                }
            }

            // Left/Right arrows - question navigation in the Grand Test
            if matches!(self.state.view, View::GrandTest { .. }) {
                if let Some(session) = self.state.grand_test.as_mut() {
                    if i.key_pressed(egui::Key::ArrowRight) && !i.modifiers.shift {
                        session.next();
                    }
                    if i.key_pressed(egui::Key::ArrowLeft) && !i.modifiers.shift {
                        session.previous();
                    }
                }
            }
        });
    }
}
