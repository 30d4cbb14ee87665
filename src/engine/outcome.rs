use crate::error::{QuizError, Result};
use crate::model::{Badge, Tier};
use serde::Serialize;

/// Core answers needed to pass, bonus ignored.
pub const PASS_THRESHOLD: u32 = 8;
pub const MASTERY_CORE: u32 = 10;
pub const MASTERY_BONUS: u32 = 5;

// Badge cosmetics clamp the core score into this range.
const TIER_FLOOR: u32 = 8;
const TIER_CEILING: u32 = 10;

pub fn is_passed(core_score: u32) -> bool {
    core_score >= PASS_THRESHOLD
}

pub fn is_mastery(core_score: u32, bonus_score: u32) -> bool {
    core_score == MASTERY_CORE && bonus_score == MASTERY_BONUS
}

/// Badge tier for a final score. Scores under the floor still display the
/// Bronze badge even though they do not pass.
pub fn resolve_tier(core_score: u32, bonus_score: u32) -> Tier {
    if is_mastery(core_score, bonus_score) {
        return Tier::Legendary;
    }
    match core_score.clamp(TIER_FLOOR, TIER_CEILING) {
        8 => Tier::Bronze,
        9 => Tier::Silver,
        _ => Tier::Gold,
    }
}

/// The four badges, one per tier.
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    // Stored in `Tier::ALL` order.
    badges: Vec<Badge>,
}

impl BadgeCatalog {
    pub fn new(mut badges: Vec<Badge>) -> Result<Self> {
        let mut ordered = Vec::with_capacity(Tier::ALL.len());
        for tier in Tier::ALL {
            let pos = badges
                .iter()
                .position(|b| b.tier == tier)
                .ok_or(QuizError::MissingBadge(tier))?;
            ordered.push(badges.swap_remove(pos));
        }
        Ok(Self { badges: ordered })
    }

    pub fn badge(&self, tier: Tier) -> &Badge {
        &self.badges[tier as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub passed: bool,
    pub mastery: bool,
    pub tier: Tier,
    pub badge: Badge,
    pub core_score: u32,
    pub bonus_score: u32,
}

impl Outcome {
    pub fn resolve(core_score: u32, bonus_score: u32, catalog: &BadgeCatalog) -> Self {
        let tier = resolve_tier(core_score, bonus_score);
        Self {
            passed: is_passed(core_score),
            mastery: is_mastery(core_score, bonus_score),
            tier,
            badge: catalog.badge(tier).clone(),
            core_score,
            bonus_score,
        }
    }

    /// The final slide (badge + certificate) opens only for a pass.
    pub fn unlocks_certificate(&self) -> bool {
        self.passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_badges_embedded;

    #[test]
    fn passed_iff_core_reaches_eight() {
        for core in 0..=10 {
            assert_eq!(is_passed(core), core >= 8, "core = {core}");
        }
    }

    #[test]
    fn mastery_needs_perfect_core_and_bonus() {
        for core in 0..=10 {
            for bonus in 0..=5 {
                assert_eq!(is_mastery(core, bonus), core == 10 && bonus == 5);
            }
        }
        assert!(!is_mastery(10, 4));
    }

    #[test]
    fn tiers_floor_at_bronze() {
        for core in 0..=8 {
            assert_eq!(resolve_tier(core, 0), Tier::Bronze, "core = {core}");
        }
        assert_eq!(resolve_tier(9, 5), Tier::Silver);
        assert_eq!(resolve_tier(10, 4), Tier::Gold);
        assert_eq!(resolve_tier(10, 5), Tier::Legendary);
    }

    #[test]
    fn failing_score_still_shows_bronze() {
        let catalog = read_badges_embedded().expect("badges");
        let outcome = Outcome::resolve(3, 0, &catalog);
        assert!(!outcome.passed);
        assert!(!outcome.unlocks_certificate());
        assert_eq!(outcome.tier, Tier::Bronze);
        assert_eq!(outcome.badge.tier, Tier::Bronze);
    }

    #[test]
    fn catalog_requires_every_tier() {
        let catalog = read_badges_embedded().expect("badges");
        let partial: Vec<Badge> = Tier::ALL[..3]
            .iter()
            .map(|t| catalog.badge(*t).clone())
            .collect();
        assert!(matches!(
            BadgeCatalog::new(partial),
            Err(QuizError::MissingBadge(Tier::Legendary))
        ));
    }
}
