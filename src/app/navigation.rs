use super::*;
use log::{debug, info};

impl QuizApp {
    /// Accepts the name typed on the welcome screen. Blank names are refused.
    pub fn submit_name(&mut self) -> bool {
        let name = self.name_input.trim();
        if name.is_empty() {
            self.message = "⚠ Please enter your name to continue.".into();
            return false;
        }

        self.user_name = name.to_string();
        // personalise the playground starter code
        if self.playground_code.contains("Student") {
            self.playground_code = self.playground_code.replacen("Student", &self.user_name, 1);
        }
        info!("Welcome, {}", self.user_name);
        self.message.clear();
        self.navigate_to(AppState::Menu);
        true
    }

    pub fn navigate_to(&mut self, target: AppState) {
        if target == AppState::Final && !self.final_unlocked {
            debug!("Final slide is still locked");
            return;
        }

        let target = match target {
            AppState::Quiz if self.engine.is_none() => {
                self.message = "⚠ The quiz is not available.".into();
                return;
            }
            AppState::Quiz if self.is_quiz_finished() => AppState::Results,
            other => other,
        };

        debug!("Navigating {:?} -> {:?}", self.state, target);
        self.state = target;
        self.message.clear();
    }

    pub fn go_to_menu(&mut self) {
        self.navigate_to(AppState::Menu);
    }

    pub fn start_linear_course(&mut self) {
        self.lesson_idx = 0;
        self.navigate_to(AppState::Course);
    }

    /// Next lesson, or the quiz once the last lesson has been read.
    pub fn next_lesson(&mut self) {
        if self.is_last_lesson() {
            self.navigate_to(AppState::Quiz);
        } else {
            self.lesson_idx += 1;
        }
    }

    pub fn previous_lesson(&mut self) {
        if self.lesson_idx == 0 {
            self.go_to_menu();
        } else {
            self.lesson_idx -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let mut app = QuizApp::new();
        app.name_input = "   ".into();
        assert!(!app.submit_name());
        assert_eq!(app.state, AppState::Welcome);
        assert!(!app.message.is_empty());
    }

    #[test]
    fn name_personalises_playground() {
        let mut app = QuizApp::new();
        app.name_input = "  Ada Lovelace ".into();
        assert!(app.submit_name());
        assert_eq!(app.user_name, "Ada Lovelace");
        assert_eq!(app.state, AppState::Menu);
        assert!(app.playground_code.contains("Hello, Ada Lovelace!"));
    }

    #[test]
    fn final_slide_is_locked_until_unlocked() {
        let mut app = QuizApp::new();
        app.navigate_to(AppState::Menu);
        app.navigate_to(AppState::Final);
        assert_eq!(app.state, AppState::Menu);

        app.final_unlocked = true;
        app.navigate_to(AppState::Final);
        assert_eq!(app.state, AppState::Final);
    }

    #[test]
    fn course_runs_into_the_quiz() {
        let mut app = QuizApp::new();
        app.start_linear_course();
        assert_eq!(app.state, AppState::Course);
        while !app.is_last_lesson() {
            app.next_lesson();
        }
        app.next_lesson();
        assert_eq!(app.state, AppState::Quiz);
    }
}
