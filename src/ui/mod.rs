pub mod confetti;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, info_windows, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);

        // Top bar everywhere but the welcome screen
        if !matches!(self.state, AppState::Welcome) {
            top_panel(self, ctx);
        }

        // Theme toggle
        bottom_panel(self, ctx);

        // Dispatch per screen
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Menu => views::menu::ui_menu(self, ctx),
            AppState::Course => views::course::ui_course(self, ctx),
            AppState::Playground => views::playground::ui_playground(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx, now),
            AppState::Results => views::results::ui_results(self, ctx),
            AppState::Final => views::final_slide::ui_final(self, ctx),
        }

        if self.confirm_restart {
            self.confirm_restart(ctx);
        }
        info_windows(self, ctx);

        if let Some(confetti) = &self.confetti {
            if confetti.is_done(now) {
                self.confetti = None;
            } else {
                confetti.paint(ctx, now);
                ctx.request_repaint();
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
