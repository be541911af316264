//! Tracks which players have looked at their prompt this round.

use crate::error::{GameError, GameResult};
use crate::types::{RoundStatus, ViewState};

/// Per-round viewing state. Each player goes `Hidden -> Viewed` exactly once;
/// the round is ready to reveal once nobody is `Hidden`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealStateMachine {
    viewed: Vec<bool>,
}

impl RevealStateMachine {
    pub fn new(player_count: usize) -> Self {
        Self {
            viewed: vec![false; player_count],
        }
    }

    /// Start a new round: everybody back to `Hidden`
    pub fn reset(&mut self, player_count: usize) {
        self.viewed = vec![false; player_count];
    }

    pub fn player_count(&self) -> usize {
        self.viewed.len()
    }

    /// Mark a player as having seen their prompt.
    ///
    /// Returns `true` if this call flipped the player to `Viewed`, `false` if
    /// they had already looked.
    pub fn mark_viewed(&mut self, index: usize) -> GameResult<bool> {
        let count = self.viewed.len();
        let slot = self
            .viewed
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index, count })?;

        if *slot {
            return Ok(false);
        }
        *slot = true;
        Ok(true)
    }

    pub fn state_of(&self, index: usize) -> Option<ViewState> {
        self.viewed.get(index).map(|&v| {
            if v {
                ViewState::Viewed
            } else {
                ViewState::Hidden
            }
        })
    }

    pub fn states(&self) -> Vec<ViewState> {
        (0..self.viewed.len())
            .filter_map(|i| self.state_of(i))
            .collect()
    }

    pub fn is_round_ready(&self) -> bool {
        self.viewed.iter().all(|&v| v)
    }

    pub fn status(&self) -> RoundStatus {
        if self.is_round_ready() {
            RoundStatus::AllViewed
        } else {
            RoundStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_players_scenario() {
        let mut sm = RevealStateMachine::new(3);
        assert!(!sm.is_round_ready());
        assert_eq!(sm.status(), RoundStatus::InProgress);

        sm.mark_viewed(0).unwrap();
        sm.mark_viewed(1).unwrap();
        assert!(!sm.is_round_ready());

        sm.mark_viewed(2).unwrap();
        assert!(sm.is_round_ready());
        assert_eq!(sm.status(), RoundStatus::AllViewed);
    }

    #[test]
    fn test_mark_viewed_is_idempotent() {
        let mut once = RevealStateMachine::new(4);
        once.mark_viewed(2).unwrap();

        let mut twice = RevealStateMachine::new(4);
        assert!(twice.mark_viewed(2).unwrap());
        assert!(!twice.mark_viewed(2).unwrap());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_out_of_range() {
        let mut sm = RevealStateMachine::new(3);
        let err = sm.mark_viewed(3).unwrap_err();
        assert_eq!(err, GameError::OutOfRange { index: 3, count: 3 });
        assert_eq!(sm.states(), vec![ViewState::Hidden; 3]);
    }

    #[test]
    fn test_ready_iff_every_index_marked() {
        // Every subset of 4 players: ready only when the subset is complete
        for mask in 0u32..16 {
            let mut sm = RevealStateMachine::new(4);
            for i in 0..4 {
                if mask & (1 << i) != 0 {
                    sm.mark_viewed(i).unwrap();
                }
            }
            assert_eq!(sm.is_round_ready(), mask == 0b1111, "mask {:04b}", mask);
        }
    }

    #[test]
    fn test_reset_hides_everyone_and_resizes() {
        let mut sm = RevealStateMachine::new(3);
        for i in 0..3 {
            sm.mark_viewed(i).unwrap();
        }
        sm.reset(5);
        assert_eq!(sm.player_count(), 5);
        assert_eq!(sm.states(), vec![ViewState::Hidden; 5]);
        assert!(!sm.is_round_ready());
    }

    #[test]
    fn test_state_of() {
        let mut sm = RevealStateMachine::new(2);
        sm.mark_viewed(1).unwrap();
        assert_eq!(sm.state_of(0), Some(ViewState::Hidden));
        assert_eq!(sm.state_of(1), Some(ViewState::Viewed));
        assert_eq!(sm.state_of(2), None);
    }
}
