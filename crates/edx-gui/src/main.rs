//! ED Exams - Desktop GUI Application
//!
//! Entry point: initializes logging and runs the eframe application.

use eframe::egui;
use edx_gui::app::EdExamsApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ED Exams")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1024.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ED Exams",
        options,
        Box::new(|cc| Ok(Box::new(EdExamsApp::new(cc)))),
    )
}
