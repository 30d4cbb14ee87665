// src/data.rs

use crate::engine::BadgeCatalog;
use crate::error::Result;
use crate::model::{Badge, Lesson, Question, Variant};

/// Loads the embedded question bank of a variant.
pub fn read_questions_for_variant(variant: Variant) -> Result<Vec<Question>> {
    let file_content = match variant {
        Variant::Classic => include_str!("data/classic_questions.yaml"),
        Variant::Mastery => include_str!("data/mastery_questions.yaml"),
    };
    Ok(serde_yaml::from_str(file_content)?)
}

pub fn read_badges_embedded() -> Result<BadgeCatalog> {
    let badges: Vec<Badge> = serde_yaml::from_str(include_str!("data/badges.yaml"))?;
    BadgeCatalog::new(badges)
}

pub fn read_course_embedded() -> Result<Vec<Lesson>> {
    Ok(serde_yaml::from_str(include_str!("data/course.yaml"))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionKind, Tier};

    #[test]
    fn classic_bank_has_ten_core_questions() {
        let questions = read_questions_for_variant(Variant::Classic).expect("classic");
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| !q.is_bonus()));
        assert_eq!(questions[0].text, "What does HTML stand for?");
        assert_eq!(questions[1].correct_index(), Some(2));
    }

    #[test]
    fn mastery_bank_appends_five_bonus_challenges() {
        let questions = read_questions_for_variant(Variant::Mastery).expect("mastery");
        assert_eq!(questions.len(), 15);
        assert!(questions[..10].iter().all(|q| !q.is_bonus()));
        assert!(questions[10..].iter().all(|q| q.is_bonus()));

        let kinds: Vec<&str> = questions[10..].iter().map(|q| q.kind.name()).collect();
        for kind in ["multiple-choice", "guess-output", "fix-code", "match-concept"] {
            assert!(kinds.contains(&kind), "missing {kind}");
        }

        let pairs = questions
            .iter()
            .find_map(|q| match &q.kind {
                QuestionKind::MatchConcept { pairs } => Some(pairs.len()),
                _ => None,
            })
            .expect("match-concept question");
        assert_eq!(pairs, 3);
    }

    #[test]
    fn core_questions_are_shared_between_variants() {
        let classic = read_questions_for_variant(Variant::Classic).expect("classic");
        let mastery = read_questions_for_variant(Variant::Mastery).expect("mastery");
        assert_eq!(classic[..], mastery[..10]);
    }

    #[test]
    fn badge_catalog_matches_tier_colors() {
        let catalog = read_badges_embedded().expect("badges");
        assert_eq!(catalog.badge(Tier::Bronze).color, [205, 127, 50]);
        assert_eq!(catalog.badge(Tier::Silver).color, [192, 192, 192]);
        assert_eq!(catalog.badge(Tier::Gold).color, [255, 215, 0]);
        assert_eq!(catalog.badge(Tier::Gold).title, "Web Development Fundamentals Master");
        assert_eq!(catalog.badge(Tier::Legendary).tier, Tier::Legendary);
    }

    #[test]
    fn course_has_lessons() {
        let lessons = read_course_embedded().expect("course");
        assert!(lessons.len() >= 3);
        assert!(lessons.iter().all(|l| !l.title.is_empty() && !l.body.is_empty()));
    }
}
