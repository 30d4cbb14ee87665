use crate::audio::BackgroundAudio;
use crate::data::{read_badges_embedded, read_course_embedded, read_questions_for_variant};
use crate::engine::{Feedback, Outcome, QuizEngine};
use crate::error::Result;
use crate::model::{AppState, Lesson, Variant};
use crate::ui::confetti::Confetti;
use eframe::egui;
use egui_commonmark::CommonMarkCache;
use log::error;
use serde::{Deserialize, Serialize};

// Submodules
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use crate::view_models::{QuestionRow, ScoreReadout};

/// Seconds a rejected match-concept pair stays highlighted before clearing.
pub const REJECTED_PAIR_DELAY: f64 = 0.8;

pub const PLAYGROUND_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body { font-family: sans-serif; background-color: #f8fafc; }
    h1 { color: #2563eb; }
  </style>
</head>
<body>
  <h1>Hello, Student!</h1>
  <p>Edit this code and watch the preview update.</p>
</body>
</html>
"#;

/// The only thing that survives a restart of the app.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Preferences {
    /// First run: follow the OS theme, dark when it is unknown.
    pub fn from_system(theme: Option<egui::Theme>) -> Self {
        Self {
            dark_mode: theme != Some(egui::Theme::Light),
        }
    }
}

/// View state of the question on screen. Rebuilt every time the engine moves.
#[derive(Default, Clone, Debug)]
pub struct QuestionUi {
    pub picked: Option<usize>,
    pub feedback: Option<Feedback>,
    pub code_input: String,
    pub selected_left: Option<usize>,
    pub selected_right: Option<usize>,
    pub rejected_at: Option<f64>,
    /// Display order of the right-hand column of a match-concept board.
    pub right_order: Vec<usize>,
}

pub struct QuizApp {
    pub prefs: Preferences,
    pub state: AppState,
    pub variant: Variant,
    pub engine: Option<QuizEngine>,
    pub question_ui: QuestionUi,
    pub outcome: Option<Outcome>,
    pub final_unlocked: bool,
    pub user_name: String,
    pub name_input: String,
    pub message: String,
    pub lessons: Vec<Lesson>,
    pub lesson_idx: usize,
    pub playground_code: String,
    pub confetti: Option<Confetti>,
    pub cm_cache: CommonMarkCache,
    pub confirm_restart: bool,
    pub show_help: bool,
    pub show_about: bool,
    pub audio: BackgroundAudio,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_preferences(Preferences::default())
    }

    pub fn with_preferences(prefs: Preferences) -> Self {
        let lessons = read_course_embedded().unwrap_or_else(|e| {
            error!("Could not load the course: {e}");
            Vec::new()
        });

        let mut app = Self {
            prefs,
            state: AppState::Welcome,
            variant: Variant::default(),
            engine: None,
            question_ui: QuestionUi::default(),
            outcome: None,
            final_unlocked: false,
            user_name: "Student".to_string(),
            name_input: String::new(),
            message: String::new(),
            lessons,
            lesson_idx: 0,
            playground_code: PLAYGROUND_TEMPLATE.to_string(),
            confetti: None,
            cm_cache: CommonMarkCache::default(),
            confirm_restart: false,
            show_help: false,
            show_about: false,
            audio: BackgroundAudio::default(),
        };
        app.select_variant(app.variant);
        app
    }

    /// Restores the theme flag from eframe storage and applies it. Without a
    /// stored flag the system theme decides.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs: Preferences = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_else(|| Preferences::from_system(cc.egui_ctx.system_theme()));
        cc.egui_ctx.set_visuals(if prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        Self::with_preferences(prefs)
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.audio.toggle()
    }

    /// Switches the question bank. The engine is rebuilt from scratch.
    pub fn select_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.outcome = None;
        match build_engine(variant) {
            Ok(engine) => {
                self.engine = Some(engine);
                self.reset_question_ui();
            }
            Err(e) => {
                error!("Could not build the {variant:?} quiz: {e}");
                self.engine = None;
                self.message = format!("⚠ The quiz could not be loaded: {e}");
            }
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_engine(variant: Variant) -> Result<QuizEngine> {
    let questions = read_questions_for_variant(variant)?;
    let badges = read_badges_embedded()?;
    QuizEngine::new(questions, badges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_follows_the_system_theme() {
        assert!(!Preferences::from_system(Some(egui::Theme::Light)).dark_mode);
        assert!(Preferences::from_system(Some(egui::Theme::Dark)).dark_mode);
        assert!(Preferences::from_system(None).dark_mode);
    }

    #[test]
    fn audio_toggle_is_off_at_start_and_flips() {
        let mut app = QuizApp::new();
        assert!(!app.audio.is_enabled());
        assert!(app.toggle_audio());
        assert!(!app.toggle_audio());
    }
}
