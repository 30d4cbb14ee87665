//! Quiz progression and scoring, independent of any UI.
//!
//! The host drives a [`QuizEngine`] with `advance`, `submit`, `restart` and
//! `finish`, and renders whatever comes back. Scores are never computed
//! outside of this module.

pub mod matching;
pub mod outcome;

use crate::code_utils::is_fixed_markup;
use crate::error::{QuizError, Result};
use crate::model::{Answer, Question, QuestionKind};
use log::{debug, info, warn};
use matching::{MatchBoard, PairVerdict};
pub use outcome::{BadgeCatalog, Outcome};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    current_index: usize,
    core_score: u32,
    bonus_score: u32,
    answered: BTreeSet<usize>,
    correct: BTreeSet<usize>,
    board: MatchBoard,
}

impl QuizSession {
    pub fn current_index(&self) -> usize {
        self.current_index
    }
    pub fn core_score(&self) -> u32 {
        self.core_score
    }
    pub fn bonus_score(&self) -> u32 {
        self.bonus_score
    }
    pub fn is_answered(&self, index: usize) -> bool {
        self.answered.contains(&index)
    }
    pub fn was_correct(&self, index: usize) -> bool {
        self.correct.contains(&index)
    }
    /// Pairs already resolved on the current match-concept question.
    pub fn board(&self) -> &MatchBoard {
        &self.board
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDelta {
    pub core: u32,
    pub bonus: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    /// `correct_index` is set for the option-based kinds so the host can
    /// highlight the right answer.
    Incorrect { correct_index: Option<usize> },
    /// Option index outside the question's options; scored as incorrect.
    OutOfRange,
    PairMatched { remaining: usize },
    PairRejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    pub delta: ScoreDelta,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance<'a> {
    Next(&'a Question),
    /// Already on the last question: nothing moved, the host should call `finish`.
    Completed,
}

pub struct QuizEngine {
    questions: Vec<Question>,
    badges: BadgeCatalog,
    session: QuizSession,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, badges: BadgeCatalog) -> Result<Self> {
        validate_bank(&questions)?;
        debug!(
            "Quiz engine ready: {} questions ({} bonus)",
            questions.len(),
            questions.iter().filter(|q| q.is_bonus()).count()
        );
        Ok(Self {
            questions,
            badges,
            session: QuizSession::default(),
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn core_question_count(&self) -> usize {
        self.questions.iter().filter(|q| !q.is_bonus()).count()
    }

    pub fn bonus_question_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_bonus()).count()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.session.current_index]
    }

    pub fn is_last(&self) -> bool {
        self.session.current_index + 1 >= self.questions.len()
    }

    pub fn advance(&mut self) -> Advance<'_> {
        if self.is_last() {
            debug!("advance() on the last question, signalling completion");
            return Advance::Completed;
        }
        self.session.current_index += 1;
        self.session.board.clear();
        debug!("Question {}/{}", self.session.current_index + 1, self.questions.len());
        Advance::Next(&self.questions[self.session.current_index])
    }

    /// Throws the session away and starts over at the first question.
    pub fn restart(&mut self) -> &Question {
        self.session = QuizSession::default();
        debug!("Quiz restarted");
        &self.questions[0]
    }

    pub fn submit(&mut self, answer: Answer) -> Result<Submission> {
        let index = self.session.current_index;
        if self.session.answered.contains(&index) {
            warn!("Ignoring second submission for question #{index}");
            return Err(QuizError::AlreadyAnswered { index });
        }

        let question = &self.questions[index];
        let (correct, feedback) = match (&question.kind, answer) {
            (
                QuestionKind::MultipleChoice {
                    options,
                    correct_index,
                }
                | QuestionKind::GuessOutput {
                    options,
                    correct_index,
                    ..
                },
                Answer::Choice(choice),
            ) => {
                if choice >= options.len() {
                    warn!(
                        "Option {choice} out of range for question #{index} ({} options)",
                        options.len()
                    );
                    (false, Feedback::OutOfRange)
                } else if choice == *correct_index {
                    (true, Feedback::Correct)
                } else {
                    (
                        false,
                        Feedback::Incorrect {
                            correct_index: Some(*correct_index),
                        },
                    )
                }
            }
            (QuestionKind::FixCode { .. }, Answer::Code(code)) => {
                if is_fixed_markup(&code) {
                    (true, Feedback::Correct)
                } else {
                    (false, Feedback::Incorrect { correct_index: None })
                }
            }
            (QuestionKind::MatchConcept { pairs }, Answer::Pair { left, right }) => {
                match self.session.board.try_pair(pairs.len(), left, right) {
                    PairVerdict::Completed => (true, Feedback::Correct),
                    PairVerdict::Matched { remaining } => {
                        return Ok(Submission {
                            correct: true,
                            delta: ScoreDelta::default(),
                            feedback: Feedback::PairMatched { remaining },
                        });
                    }
                    PairVerdict::Rejected => {
                        debug!("Rejected pair ({left}, {right}) on question #{index}");
                        return Ok(Submission {
                            correct: false,
                            delta: ScoreDelta::default(),
                            feedback: Feedback::PairRejected,
                        });
                    }
                }
            }
            (kind, _) => {
                return Err(QuizError::AnswerKindMismatch {
                    index,
                    expected: expected_answer(kind),
                });
            }
        };

        let delta = self.record(index, correct);
        Ok(Submission {
            correct,
            delta,
            feedback,
        })
    }

    /// Final outcome. Only legal on the last question; repeatable.
    pub fn finish(&self) -> Result<Outcome> {
        if !self.is_last() {
            return Err(QuizError::NotFinished {
                current: self.session.current_index,
                last: self.questions.len() - 1,
            });
        }
        let outcome = Outcome::resolve(self.session.core_score, self.session.bonus_score, &self.badges);
        info!(
            "Quiz finished: core {} bonus {} -> {} (passed: {}, mastery: {})",
            outcome.core_score, outcome.bonus_score, outcome.tier, outcome.passed, outcome.mastery
        );
        Ok(outcome)
    }

    // Counters and the answered set move together, once per question.
    fn record(&mut self, index: usize, correct: bool) -> ScoreDelta {
        let bonus = self.questions[index].is_bonus();
        self.session.answered.insert(index);

        let mut delta = ScoreDelta::default();
        if correct {
            self.session.correct.insert(index);
            if bonus {
                self.session.bonus_score += 1;
                delta.bonus = 1;
            } else {
                self.session.core_score += 1;
                delta.core = 1;
            }
        }
        delta
    }
}

fn expected_answer(kind: &QuestionKind) -> &'static str {
    match kind {
        QuestionKind::MultipleChoice { .. } | QuestionKind::GuessOutput { .. } => "choice",
        QuestionKind::FixCode { .. } => "code",
        QuestionKind::MatchConcept { .. } => "pair",
    }
}

fn validate_bank(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(QuizError::EmptyQuestionBank);
    }

    let invalid = |index: usize, reason: String| QuizError::InvalidQuestion { index, reason };

    for (index, question) in questions.iter().enumerate() {
        match &question.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_index,
            }
            | QuestionKind::GuessOutput {
                options,
                correct_index,
                ..
            } => {
                if *correct_index >= options.len() {
                    return Err(invalid(
                        index,
                        format!("correct_index {correct_index} but only {} options", options.len()),
                    ));
                }
            }
            QuestionKind::MatchConcept { pairs } => {
                if pairs.is_empty() {
                    return Err(invalid(index, "no pairs to match".into()));
                }
                let lefts: HashSet<&str> = pairs.iter().map(|p| p.left.as_str()).collect();
                let rights: HashSet<&str> = pairs.iter().map(|p| p.right.as_str()).collect();
                if lefts.len() != pairs.len() || rights.len() != pairs.len() {
                    return Err(invalid(index, "pair sides must be distinct".into()));
                }
            }
            QuestionKind::FixCode { .. } => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{read_badges_embedded, read_questions_for_variant};
    use crate::model::{ConceptPair, Tier, Variant};

    fn engine_for(variant: Variant) -> QuizEngine {
        let questions = read_questions_for_variant(variant).expect("bank");
        let badges = read_badges_embedded().expect("badges");
        QuizEngine::new(questions, badges).expect("engine")
    }

    fn choice(text: &str, correct_index: usize, bonus: bool) -> Question {
        Question {
            text: text.into(),
            bonus,
            kind: QuestionKind::MultipleChoice {
                options: vec!["a".into(), "b".into(), "c".into()],
                correct_index,
            },
        }
    }

    fn match_question() -> Question {
        let pair = |l: &str, r: &str| ConceptPair {
            left: l.into(),
            right: r.into(),
        };
        Question {
            text: "Match".into(),
            bonus: true,
            kind: QuestionKind::MatchConcept {
                pairs: vec![pair("h1", "Heading"), pair("p", "Paragraph"), pair("img", "Image")],
            },
        }
    }

    fn fix_code_question() -> Question {
        Question {
            text: "Fix it".into(),
            bonus: true,
            kind: QuestionKind::FixCode {
                initial_code: "<h1>Title<p>Body".into(),
                instruction: "Close the tags".into(),
                hint: None,
            },
        }
    }

    fn small_engine(questions: Vec<Question>) -> QuizEngine {
        QuizEngine::new(questions, read_badges_embedded().expect("badges")).expect("engine")
    }

    /// Answers that solve `question`, in submission order.
    fn winning_answers(question: &Question) -> Vec<Answer> {
        match &question.kind {
            QuestionKind::MultipleChoice { correct_index, .. }
            | QuestionKind::GuessOutput { correct_index, .. } => vec![Answer::Choice(*correct_index)],
            QuestionKind::FixCode { .. } => {
                vec![Answer::Code("<h1>Title</h1>\n<p>Body</p>".into())]
            }
            QuestionKind::MatchConcept { pairs } => (0..pairs.len())
                .rev()
                .map(|i| Answer::Pair { left: i, right: i })
                .collect(),
        }
    }

    fn losing_answer(question: &Question) -> Answer {
        match &question.kind {
            QuestionKind::MultipleChoice { correct_index, options }
            | QuestionKind::GuessOutput { correct_index, options, .. } => {
                Answer::Choice((correct_index + 1) % options.len())
            }
            QuestionKind::FixCode { .. } => Answer::Code("<h1>nope".into()),
            QuestionKind::MatchConcept { .. } => Answer::Pair { left: 0, right: 1 },
        }
    }

    #[test]
    fn advance_clamps_at_last_question() {
        let mut engine = engine_for(Variant::Mastery);
        let count = engine.question_count();
        for expected in 1..count {
            assert!(matches!(engine.advance(), Advance::Next(_)));
            assert_eq!(engine.session().current_index(), expected);
        }
        for _ in 0..3 {
            assert_eq!(engine.advance(), Advance::Completed);
            assert_eq!(engine.session().current_index(), count - 1);
        }
    }

    #[test]
    fn second_submission_is_rejected_without_rescoring() {
        let mut engine = small_engine(vec![choice("one", 1, false), choice("two", 0, false)]);
        let first = engine.submit(Answer::Choice(1)).expect("first submit");
        assert!(first.correct);
        assert_eq!(first.delta, ScoreDelta { core: 1, bonus: 0 });

        let second = engine.submit(Answer::Choice(1));
        assert!(matches!(second, Err(QuizError::AlreadyAnswered { index: 0 })));
        assert_eq!(engine.session().core_score(), 1);
    }

    #[test]
    fn wrong_answer_reports_correct_option() {
        let mut engine = small_engine(vec![choice("one", 2, false)]);
        let submission = engine.submit(Answer::Choice(0)).expect("submit");
        assert!(!submission.correct);
        assert_eq!(
            submission.feedback,
            Feedback::Incorrect { correct_index: Some(2) }
        );
        assert!(engine.session().is_answered(0));
        assert_eq!(engine.session().core_score(), 0);
    }

    #[test]
    fn out_of_range_choice_scores_as_incorrect() {
        let mut engine = small_engine(vec![choice("one", 0, false)]);
        let submission = engine.submit(Answer::Choice(7)).expect("submit");
        assert!(!submission.correct);
        assert_eq!(submission.feedback, Feedback::OutOfRange);
        assert!(engine.session().is_answered(0));
        assert!(matches!(
            engine.submit(Answer::Choice(0)),
            Err(QuizError::AlreadyAnswered { .. })
        ));
    }

    #[test]
    fn bonus_choice_only_moves_bonus_score() {
        let mut engine = small_engine(vec![choice("bonus", 0, true)]);
        let submission = engine.submit(Answer::Choice(0)).expect("submit");
        assert_eq!(submission.delta, ScoreDelta { core: 0, bonus: 1 });
        assert_eq!(engine.session().core_score(), 0);
        assert_eq!(engine.session().bonus_score(), 1);
    }

    #[test]
    fn mismatched_answer_kind_is_an_error() {
        let mut engine = small_engine(vec![choice("one", 0, false)]);
        assert!(matches!(
            engine.submit(Answer::Code("<h1></h1>".into())),
            Err(QuizError::AnswerKindMismatch { index: 0, expected: "choice" })
        ));
        assert!(!engine.session().is_answered(0));
    }

    #[test]
    fn restart_resets_everything() {
        let mut engine = small_engine(vec![choice("one", 0, false), choice("two", 0, false)]);
        engine.submit(Answer::Choice(0)).expect("submit");
        engine.advance();
        engine.submit(Answer::Choice(0)).expect("submit");

        let first = engine.restart().text.clone();
        assert_eq!(first, "one");
        assert_eq!(engine.session(), &QuizSession::default());
        assert_eq!(engine.session().core_score(), 0);
        assert_eq!(engine.session().bonus_score(), 0);
        assert_eq!(engine.session().current_index(), 0);
        assert!(!engine.session().is_answered(0));
    }

    #[test]
    fn match_concept_scores_once_in_any_order() {
        let mut engine = small_engine(vec![match_question()]);

        let rejected = engine.submit(Answer::Pair { left: 0, right: 2 }).expect("submit");
        assert_eq!(rejected.feedback, Feedback::PairRejected);
        assert!(!engine.session().is_answered(0));

        let r1 = engine.submit(Answer::Pair { left: 1, right: 1 }).expect("submit");
        assert_eq!(r1.feedback, Feedback::PairMatched { remaining: 2 });
        assert_eq!(r1.delta, ScoreDelta::default());

        // retrying after a rejection is always allowed
        let again = engine.submit(Answer::Pair { left: 2, right: 0 }).expect("submit");
        assert_eq!(again.feedback, Feedback::PairRejected);

        engine.submit(Answer::Pair { left: 2, right: 2 }).expect("submit");
        let last = engine.submit(Answer::Pair { left: 0, right: 0 }).expect("submit");
        assert!(last.correct);
        assert_eq!(last.delta, ScoreDelta { core: 0, bonus: 1 });
        assert_eq!(engine.session().bonus_score(), 1);

        assert!(matches!(
            engine.submit(Answer::Pair { left: 0, right: 0 }),
            Err(QuizError::AlreadyAnswered { index: 0 })
        ));
        assert_eq!(engine.session().bonus_score(), 1);
    }

    #[test]
    fn fix_code_failure_still_allows_advancing() {
        let mut engine = small_engine(vec![fix_code_question(), choice("after", 0, false)]);
        let submission = engine
            .submit(Answer::Code("<h1>Title<p>Body</p>".into()))
            .expect("submit");
        assert!(!submission.correct);
        assert_eq!(engine.session().bonus_score(), 0);
        assert!(matches!(engine.advance(), Advance::Next(q) if q.text == "after"));
    }

    #[test]
    fn fix_code_accepts_closed_heading_and_paragraph() {
        let mut engine = small_engine(vec![fix_code_question()]);
        let submission = engine
            .submit(Answer::Code("<h1>Title</h1><p>Body</p>".into()))
            .expect("submit");
        assert!(submission.correct);
        assert_eq!(engine.session().bonus_score(), 1);
    }

    #[test]
    fn finish_before_last_question_is_an_error() {
        let engine = small_engine(vec![choice("one", 0, false), choice("two", 0, false)]);
        assert!(matches!(
            engine.finish(),
            Err(QuizError::NotFinished { current: 0, last: 1 })
        ));
    }

    #[test]
    fn invalid_banks_are_rejected() {
        let badges = || read_badges_embedded().expect("badges");
        assert!(matches!(
            QuizEngine::new(vec![], badges()),
            Err(QuizError::EmptyQuestionBank)
        ));
        assert!(matches!(
            QuizEngine::new(vec![choice("bad", 3, false)], badges()),
            Err(QuizError::InvalidQuestion { index: 0, .. })
        ));

        let mut dup = match_question();
        if let QuestionKind::MatchConcept { pairs } = &mut dup.kind {
            pairs[1].right = pairs[0].right.clone();
        }
        assert!(matches!(
            QuizEngine::new(vec![dup], badges()),
            Err(QuizError::InvalidQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn perfect_run_reaches_legendary_mastery() {
        let mut engine = engine_for(Variant::Mastery);
        assert_eq!(engine.core_question_count(), 10);
        assert_eq!(engine.bonus_question_count(), 5);

        loop {
            for answer in winning_answers(engine.current_question()) {
                engine.submit(answer).expect("submit");
            }
            if engine.advance() == Advance::Completed {
                break;
            }
        }

        let outcome = engine.finish().expect("finish");
        assert_eq!(outcome.core_score, 10);
        assert_eq!(outcome.bonus_score, 5);
        assert!(outcome.passed);
        assert!(outcome.mastery);
        assert_eq!(outcome.badge.tier, Tier::Legendary);
        assert_eq!(engine.finish().expect("finish again"), outcome);
    }

    #[test]
    fn seven_core_and_no_bonus_fails_with_bronze_display() {
        let mut engine = engine_for(Variant::Mastery);
        let mut core_seen = 0;
        loop {
            let question = engine.current_question().clone();
            if !question.is_bonus() {
                let answer = if core_seen < 7 {
                    winning_answers(&question).remove(0)
                } else {
                    losing_answer(&question)
                };
                engine.submit(answer).expect("submit");
                core_seen += 1;
            }
            if engine.advance() == Advance::Completed {
                break;
            }
        }

        let outcome = engine.finish().expect("finish");
        assert_eq!(outcome.core_score, 7);
        assert_eq!(outcome.bonus_score, 0);
        assert!(!outcome.passed);
        assert!(!outcome.mastery);
        assert_eq!(outcome.badge.tier, Tier::Bronze);
    }

    #[test]
    fn classic_perfect_run_is_gold_without_mastery() {
        let mut engine = engine_for(Variant::Classic);
        assert_eq!(engine.bonus_question_count(), 0);
        loop {
            for answer in winning_answers(engine.current_question()) {
                engine.submit(answer).expect("submit");
            }
            if engine.advance() == Advance::Completed {
                break;
            }
        }
        let outcome = engine.finish().expect("finish");
        assert!(outcome.passed);
        assert!(!outcome.mastery);
        assert_eq!(outcome.tier, Tier::Gold);
    }
}
