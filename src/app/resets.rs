use super::*;
use log::debug;

impl QuizApp {
    /// "Retry Assessment": a fresh session on the same question bank.
    pub fn retry_quiz(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.restart();
        }
        self.outcome = None;
        self.confirm_restart = false;
        self.reset_question_ui();
        self.state = AppState::Quiz;
        self.message.clear();
        debug!("Assessment restarted");
    }

    pub fn confirm_restart(&mut self, ctx: &egui::Context) {
        egui::Window::new("Restart assessment")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Restart the quiz from the first question? Your current score will be lost.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, restart").clicked() {
                        self.retry_quiz();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_restart = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_starts_over_with_zero_scores() {
        let mut app = QuizApp::new();
        app.choose_option(0);
        app.next_question(0.0);
        app.outcome = None;

        app.retry_quiz();
        let session = app.engine.as_ref().expect("engine").session();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.core_score(), 0);
        assert_eq!(session.bonus_score(), 0);
        assert!(!session.is_answered(0));
        assert_eq!(app.state, AppState::Quiz);
        assert!(app.question_ui.feedback.is_none());
    }

    #[test]
    fn changing_variant_discards_the_session() {
        let mut app = QuizApp::new();
        app.choose_option(0);
        app.select_variant(Variant::Classic);
        let engine = app.engine.as_ref().expect("engine");
        assert_eq!(engine.question_count(), 10);
        assert_eq!(engine.session().core_score(), 0);
    }
}
