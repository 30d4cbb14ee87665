use super::*;
use crate::model::QuestionKind;
use rand::seq::SliceRandom;

impl QuizApp {
    /// Clears the per-question view state and pre-fills it for the question
    /// now on screen: the broken markup for fix-code, a shuffled right-hand
    /// column for match-concept.
    pub fn reset_question_ui(&mut self) {
        self.question_ui = QuestionUi::default();
        let Some(engine) = &self.engine else {
            return;
        };

        match &engine.current_question().kind {
            QuestionKind::FixCode { initial_code, .. } => {
                self.question_ui.code_input = initial_code.clone();
            }
            QuestionKind::MatchConcept { pairs } => {
                let mut order: Vec<usize> = (0..pairs.len()).collect();
                order.shuffle(&mut rand::thread_rng());
                self.question_ui.right_order = order;
            }
            _ => {}
        }
    }
}
