#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use webdev_quiz::QuizApp;

    pretty_env_logger::init();
    log::info!("Starting {} v{}", webdev_quiz::certificate::COURSE_NAME, env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Fundamentals of Web Development",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::from_creation_context(cc)))),
    )
}

// The browser build starts from `lib.rs`.
#[cfg(target_arch = "wasm32")]
fn main() {}
