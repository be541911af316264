//! Theme and impostor selection for each round.

use crate::error::{GameError, GameResult};
use crate::phrases::PhraseBook;
use crate::types::{DrawPolicy, RoundSelection};
use rand::Rng;

/// Draws a phrase entry and an impostor for every round.
///
/// With [`DrawPolicy::NoRepeat`] the selector keeps a pool of indices that
/// have not been shown in the current cycle. Each draw removes one uniformly
/// random index from the pool; an empty pool is refilled with every index
/// before drawing.
#[derive(Debug, Clone)]
pub struct RoundSelector {
    book: PhraseBook,
    policy: DrawPolicy,
    available: Vec<usize>,
}

impl RoundSelector {
    pub fn new(book: PhraseBook, policy: DrawPolicy) -> Self {
        let available = (0..book.len()).collect();
        Self {
            book,
            policy,
            available,
        }
    }

    pub fn policy(&self) -> DrawPolicy {
        self.policy
    }

    pub fn book(&self) -> &PhraseBook {
        &self.book
    }

    /// Indices still in the draw pool (meaningful for `NoRepeat` only)
    pub fn available(&self) -> &[usize] {
        &self.available
    }

    fn refill(&mut self) {
        self.available = (0..self.book.len()).collect();
        tracing::debug!("Theme pool refilled with {} entries", self.available.len());
    }

    fn draw_index<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        match self.policy {
            DrawPolicy::Uniform => rng.random_range(0..self.book.len()),
            DrawPolicy::NoRepeat => {
                if self.available.is_empty() {
                    self.refill();
                }
                let position = rng.random_range(0..self.available.len());
                self.available.swap_remove(position)
            }
        }
    }

    /// Pick the entry and impostor for a new round.
    ///
    /// Fails without touching the draw pool if `player_count` is zero.
    pub fn select_round<R: Rng + ?Sized>(
        &mut self,
        player_count: usize,
        rng: &mut R,
    ) -> GameResult<RoundSelection> {
        if player_count < 1 {
            return Err(GameError::invalid_state(
                "Cannot select a round without players",
            ));
        }

        let entry_index = self.draw_index(rng);
        let entry = match self.book.get(entry_index) {
            Some(entry) => entry.clone(),
            None => {
                return Err(GameError::invalid_state(format!(
                    "Phrase index {} missing from book",
                    entry_index
                )))
            }
        };
        let impostor_index = rng.random_range(0..player_count);

        tracing::debug!(
            "Selected theme {:?} (entry {}), {} left in pool",
            entry.theme,
            entry_index,
            self.available.len()
        );

        Ok(RoundSelection {
            entry,
            entry_index,
            impostor_index,
        })
    }
}
