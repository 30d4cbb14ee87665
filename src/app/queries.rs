use super::*;
use crate::model::Question;

impl QuizApp {
    pub fn current_question(&self) -> Option<&Question> {
        self.engine.as_ref().map(|e| e.current_question())
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.lessons.get(self.lesson_idx)
    }

    pub fn is_last_lesson(&self) -> bool {
        self.lesson_idx + 1 >= self.lessons.len()
    }

    pub fn is_quiz_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn current_answered(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(|e| e.session().is_answered(e.session().current_index()))
    }
}
