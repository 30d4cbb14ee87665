use super::*;
use crate::engine::{Advance, Submission};
use crate::error::QuizError;
use crate::model::Answer;
use log::{debug, warn};

impl QuizApp {
    /// Sends an answer to the engine and turns the result into view state.
    fn submit_answer(&mut self, answer: Answer) -> Option<Submission> {
        let engine = self.engine.as_mut()?;
        match engine.submit(answer) {
            Ok(submission) => {
                self.question_ui.feedback = Some(submission.feedback);
                self.message = feedback_message(submission.feedback).to_string();
                Some(submission)
            }
            Err(QuizError::AlreadyAnswered { index }) => {
                // double click on a disabled option, nothing to do
                debug!("Question #{index} already answered");
                None
            }
            Err(e) => {
                warn!("Submission rejected: {e}");
                self.message = format!("⚠ {e}");
                None
            }
        }
    }

    pub fn choose_option(&mut self, option: usize) {
        if self.current_answered() {
            return;
        }
        self.question_ui.picked = Some(option);
        self.submit_answer(Answer::Choice(option));
    }

    pub fn submit_code(&mut self) {
        let code = self.question_ui.code_input.clone();
        self.submit_answer(Answer::Code(code));
    }

    pub fn pick_left(&mut self, left: usize, now: f64) {
        if self.question_ui.rejected_at.is_some() {
            return;
        }
        self.question_ui.selected_left = Some(left);
        self.try_submit_pair(now);
    }

    pub fn pick_right(&mut self, right: usize, now: f64) {
        if self.question_ui.rejected_at.is_some() {
            return;
        }
        self.question_ui.selected_right = Some(right);
        self.try_submit_pair(now);
    }

    fn try_submit_pair(&mut self, now: f64) {
        let (Some(left), Some(right)) = (self.question_ui.selected_left, self.question_ui.selected_right)
        else {
            return;
        };

        match self.submit_answer(Answer::Pair { left, right }) {
            Some(Submission {
                feedback: Feedback::PairRejected,
                ..
            }) => {
                // keep the wrong pair visible for a moment, see `expire_rejected_pair`
                self.question_ui.rejected_at = Some(now);
            }
            _ => {
                self.question_ui.selected_left = None;
                self.question_ui.selected_right = None;
            }
        }
    }

    /// Clears a rejected pair once it has been shown long enough.
    pub fn expire_rejected_pair(&mut self, now: f64) {
        if let Some(at) = self.question_ui.rejected_at {
            if now - at >= REJECTED_PAIR_DELAY {
                self.question_ui.rejected_at = None;
                self.question_ui.selected_left = None;
                self.question_ui.selected_right = None;
                self.message.clear();
            }
        }
    }

    /// Moves on, or wraps the quiz up when the last question is done.
    pub fn next_question(&mut self, now: f64) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let completed = matches!(engine.advance(), Advance::Completed);
        if completed {
            self.finish_quiz(now);
        } else {
            self.reset_question_ui();
            self.message.clear();
        }
    }

    /// Fix-code escape hatch: failing or skipping never blocks progress.
    pub fn skip_question(&mut self, now: f64) {
        self.next_question(now);
    }
}

fn feedback_message(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Correct => "✅ Correct!",
        Feedback::Incorrect { .. } => "❌ Incorrect.",
        Feedback::OutOfRange => "❌ That option does not exist.",
        Feedback::PairMatched { .. } => "✅ Match!",
        Feedback::PairRejected => "❌ Not a match, try again.",
    }
}
