// src/view_models.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStatus {
    Correct,
    Incorrect,
    Skipped,
}

#[derive(Clone, Debug)]
pub struct QuestionRow {
    pub number: usize, // 1-based
    pub kind: &'static str,
    pub bonus: bool,
    pub status: RowStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreReadout {
    pub core: u32,
    pub core_total: usize,
    pub bonus: u32,
    pub bonus_total: usize,
}

impl QuestionRow {
    pub fn status_label(&self) -> &'static str {
        match self.status {
            RowStatus::Correct => "✅ Correct",
            RowStatus::Incorrect => "❌ Incorrect",
            RowStatus::Skipped => "⏭ Skipped",
        }
    }
}

impl ScoreReadout {
    pub fn label(&self) -> String {
        if self.bonus_total > 0 {
            format!(
                "Score {}/{}  ⭐ Bonus {}/{}",
                self.core, self.core_total, self.bonus, self.bonus_total
            )
        } else {
            format!("Score {}/{}", self.core, self.core_total)
        }
    }
}
