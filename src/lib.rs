pub mod app;
pub mod audio;
pub mod certificate;
pub mod code_utils;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use engine::{Advance, Feedback, Outcome, QuizEngine, QuizSession, Submission};
pub use error::{QuizError, Result};

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::QuizApp;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;

    const CANVAS_ID: &str = "the_canvas_id";

    fn find_canvas() -> Option<web_sys::HtmlCanvasElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(CANVAS_ID)?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .ok()
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        eframe::WebLogger::init(log::LevelFilter::Debug).ok();

        let Some(canvas) = find_canvas() else {
            log::error!("Canvas #{CANVAS_ID} not found");
            return Err(JsValue::from_str("missing canvas"));
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = eframe::WebRunner::new()
                .start(
                    canvas,
                    eframe::WebOptions::default(),
                    Box::new(|cc| Ok(Box::new(QuizApp::from_creation_context(cc)))),
                )
                .await;
            if let Err(e) = result {
                log::error!("Failed to start the app: {e:?}");
            }
        });
        Ok(())
    }
}
