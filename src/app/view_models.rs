use super::*;
use crate::view_models::RowStatus;

impl QuizApp {
    pub fn score_readout(&self) -> Option<ScoreReadout> {
        let engine = self.engine.as_ref()?;
        Some(ScoreReadout {
            core: engine.session().core_score(),
            core_total: engine.core_question_count(),
            bonus: engine.session().bonus_score(),
            bonus_total: engine.bonus_question_count(),
        })
    }

    /// One row per question for the results review grid.
    pub fn review_rows(&self) -> Vec<QuestionRow> {
        let Some(engine) = &self.engine else {
            return Vec::new();
        };
        let session = engine.session();
        engine
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionRow {
                number: i + 1,
                kind: q.kind.name(),
                bonus: q.is_bonus(),
                status: if session.was_correct(i) {
                    RowStatus::Correct
                } else if session.is_answered(i) {
                    RowStatus::Incorrect
                } else {
                    RowStatus::Skipped
                },
            })
            .collect()
    }
}
