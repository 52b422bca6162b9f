use alloc::vec::Vec;

use crate::card::{Card, Suit, TWO_OF_CLUBS};
use crate::error::ActionError;

use super::{NUM_PLAYERS, State};

/// Which rule set applies to the card about to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnPhase {
    /// The very first card of the round.
    OpeningLead,
    /// Following in the first trick; penalty cards may not be discarded.
    FirstTrick,
    /// Leading a later trick.
    Lead,
    /// Following in a later trick.
    Follow,
}

impl TurnPhase {
    const fn of(turn_num: usize) -> Self {
        if turn_num == 0 {
            Self::OpeningLead
        } else if turn_num < NUM_PLAYERS {
            Self::FirstTrick
        } else if turn_num % NUM_PLAYERS == 0 {
            Self::Lead
        } else {
            Self::Follow
        }
    }
}

/// Rule inputs that are the same for every card in the hand.
struct MoveContext {
    phase: TurnPhase,
    lead_suit: Option<Suit>,
    has_lead_suit: bool,
    hearts_broken: bool,
}

impl MoveContext {
    fn allows(&self, card: Card) -> bool {
        let follows = self.lead_suit == Some(card.suit);
        match self.phase {
            TurnPhase::OpeningLead => card == TWO_OF_CLUBS,
            TurnPhase::FirstTrick if self.has_lead_suit => follows,
            TurnPhase::FirstTrick => !card.is_penalty(),
            TurnPhase::Lead => self.hearts_broken || !card.is_heart(),
            TurnPhase::Follow => !self.has_lead_suit || follows,
        }
    }
}

impl State {
    /// Recomputes the legal hand indices for the current player.
    ///
    /// The rules depend on the turn:
    /// - first card of the round: only the two of clubs;
    /// - rest of the first trick: follow suit, otherwise anything except
    ///   hearts and the queen of spades;
    /// - leading a later trick: anything, but hearts only once broken;
    /// - following a later trick: follow suit, otherwise anything.
    ///
    /// If no card satisfies the rules (e.g. a hand of only hearts), every card
    /// in the hand is legal, so the set is never empty for a non-empty hand.
    ///
    /// Indices are ascending and refer to the current player's hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoCurrentPlayer`] if no valid player is set to move.
    pub fn update_legal_move_indices(&mut self) -> Result<&[usize], ActionError> {
        let player_idx = self
            .current_player
            .filter(|&idx| idx < NUM_PLAYERS)
            .ok_or(ActionError::NoCurrentPlayer)?;

        let context = MoveContext {
            phase: TurnPhase::of(self.turn_num),
            lead_suit: self.lead_suit,
            has_lead_suit: self.has_suit(player_idx, self.lead_suit),
            hearts_broken: self.hearts_broken,
        };

        let hand = self.players[player_idx].hand();
        self.legal_move_idxs.clear();
        self.legal_move_idxs.extend(
            hand.iter()
                .enumerate()
                .filter(|&(_, &card)| context.allows(card))
                .map(|(idx, _)| idx),
        );

        if self.legal_move_idxs.is_empty() {
            self.legal_move_idxs.extend(0..hand.len());
        }

        Ok(&self.legal_move_idxs)
    }

    /// Returns the cards at the most recently computed legal indices.
    #[must_use]
    pub fn legal_cards(&self) -> Vec<Card> {
        let Some(player) = self.current_player.and_then(|idx| self.players.get(idx)) else {
            return Vec::new();
        };
        self.legal_move_idxs
            .iter()
            .filter_map(|&idx| player.hand().get(idx).copied())
            .collect()
    }
}
