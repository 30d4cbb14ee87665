use std::collections::BTreeSet;

/// Result of offering one left/right pair on a match-concept board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairVerdict {
    Matched { remaining: usize },
    Completed,
    Rejected,
}

/// Resolved pairs of the match-concept question currently on screen.
///
/// A pair `(left, right)` is correct when both indices point at the same
/// entry of the question's `pairs`. Wrong pairs leave the board untouched so
/// they can be retried as often as the player likes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchBoard {
    matched: BTreeSet<usize>,
}

impl MatchBoard {
    pub fn try_pair(&mut self, pair_count: usize, left: usize, right: usize) -> PairVerdict {
        if left >= pair_count || right >= pair_count || left != right {
            return PairVerdict::Rejected;
        }
        if !self.matched.insert(left) {
            // already resolved, nothing new
            return PairVerdict::Rejected;
        }

        let remaining = pair_count - self.matched.len();
        if remaining == 0 {
            PairVerdict::Completed
        } else {
            PairVerdict::Matched { remaining }
        }
    }

    pub fn is_matched(&self, pair: usize) -> bool {
        self.matched.contains(&pair)
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn clear(&mut self) {
        self.matched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_only_on_last_pair() {
        let mut board = MatchBoard::default();
        assert_eq!(board.try_pair(3, 2, 2), PairVerdict::Matched { remaining: 2 });
        assert_eq!(board.try_pair(3, 0, 0), PairVerdict::Matched { remaining: 1 });
        assert_eq!(board.try_pair(3, 1, 1), PairVerdict::Completed);
    }

    #[test]
    fn wrong_and_repeated_pairs_are_rejected_without_side_effects() {
        let mut board = MatchBoard::default();
        assert_eq!(board.try_pair(3, 0, 1), PairVerdict::Rejected);
        assert_eq!(board.try_pair(3, 0, 9), PairVerdict::Rejected);
        assert_eq!(board.matched_count(), 0);

        assert_eq!(board.try_pair(3, 0, 0), PairVerdict::Matched { remaining: 2 });
        assert_eq!(board.try_pair(3, 0, 0), PairVerdict::Rejected);
        assert_eq!(board.matched_count(), 1);
        assert!(board.is_matched(0));
    }
}
