use tracing::trace;

use crate::card::Card;
use crate::error::ActionError;

use super::{NUM_PLAYERS, State};

impl State {
    /// Plays the card at `action_idx` from the current player's hand.
    ///
    /// The card joins the trick, breaks hearts if it is a heart, and sets the
    /// lead suit and lead player when it opens a trick. The turn then passes
    /// to the next player clockwise.
    ///
    /// With [`RoundOptions::enforce_legal_moves`](crate::RoundOptions) enabled
    /// the legal set is recomputed and checked first. Otherwise any index
    /// inside the hand is played, even one the rules forbid.
    ///
    /// # Errors
    ///
    /// Returns an error if no player is set to move, the current trick already
    /// holds four cards, the index is outside the hand, or the move is illegal
    /// while legal moves are enforced.
    pub fn select_action(&mut self, action_idx: usize) -> Result<Card, ActionError> {
        let player_idx = self
            .current_player
            .filter(|&idx| idx < NUM_PLAYERS)
            .ok_or(ActionError::NoCurrentPlayer)?;

        if self.trick.len() >= NUM_PLAYERS {
            return Err(ActionError::TrickComplete);
        }

        if action_idx >= self.players[player_idx].hand().len() {
            return Err(ActionError::InvalidIndex(action_idx));
        }

        if self.options.enforce_legal_moves
            && !self.update_legal_move_indices()?.contains(&action_idx)
        {
            return Err(ActionError::IllegalMove(action_idx));
        }

        let card = self.players[player_idx]
            .hand_mut()
            .remove(action_idx)
            .map_err(|_| ActionError::InvalidIndex(action_idx))?;

        if card.is_heart() && !self.hearts_broken {
            self.set_hearts_broken(true);
        }

        self.trick.push(card);

        // First card of the trick
        if self.turn_num % NUM_PLAYERS == 0 {
            self.set_lead_suit(Some(card.suit));
            self.set_lead_trick_player(Some(player_idx));
        }

        self.set_turn_num(self.turn_num + 1);
        self.set_current_player(Some((player_idx + 1) % NUM_PLAYERS));
        self.legal_move_idxs.clear();

        trace!(player = player_idx, %card, "card played");
        Ok(card)
    }
}
