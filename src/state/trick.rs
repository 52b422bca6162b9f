use tracing::debug;

use crate::error::TrickError;

use super::{NUM_PLAYERS, State};

impl State {
    /// Returns the winner of the trick on the table.
    ///
    /// The highest card of the lead suit wins; off-suit cards never win.
    /// Returns `None` unless the trick holds exactly four cards and the turn
    /// number is at a trick boundary.
    #[must_use]
    pub fn calc_trick_winner(&self) -> Option<usize> {
        if self.turn_num % NUM_PLAYERS != 0 || self.trick.len() != NUM_PLAYERS {
            return None;
        }
        let lead_player = self.lead_trick_player?;
        let lead_suit = self.lead_suit?;

        // Offsets are relative to the lead player
        let mut winner_offset = 0;
        let mut max_rank = self.trick[0].rank;
        for (offset, card) in self.trick.iter().enumerate().skip(1) {
            if card.suit == lead_suit && card.rank > max_rank {
                max_rank = card.rank;
                winner_offset = offset;
            }
        }

        Some((lead_player + winner_offset) % NUM_PLAYERS)
    }

    /// Resolves the completed trick.
    ///
    /// The winner collects the four cards, leads the next trick, and is
    /// returned. The trick is left empty and the lead suit unset.
    ///
    /// # Errors
    ///
    /// Returns [`TrickError::Incomplete`] if the trick does not hold four cards.
    pub fn update_to_next_trick(&mut self) -> Result<usize, TrickError> {
        let winner = self.calc_trick_winner().ok_or(TrickError::Incomplete)?;

        debug!(trick_num = self.trick_num, winner, trick = %self.trick, "trick resolved");

        self.set_trick_num(self.trick_num + 1);
        self.set_current_player(Some(winner));
        self.set_lead_trick_player(Some(winner));
        self.set_lead_suit(None);
        self.players[winner].collected_mut().append(&mut self.trick);

        Ok(winner)
    }
}
