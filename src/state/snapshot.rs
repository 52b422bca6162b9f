//! Read-only view of the round state.

use crate::card::Suit;

use super::{NUM_PLAYERS, State};

/// A copy of the round counters and flags at one point in time.
///
/// Useful for logging or for agents that want the round parameters without
/// borrowing the [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Number of completed tricks.
    pub trick_num: usize,
    /// Number of cards played so far.
    pub turn_num: usize,
    /// Player to move next.
    pub current_player: Option<usize>,
    /// Player who led the current trick.
    pub lead_trick_player: Option<usize>,
    /// Suit led in the current trick.
    pub lead_suit: Option<Suit>,
    /// Whether hearts have been broken.
    pub hearts_broken: bool,
    /// Number of cards in the current trick.
    pub trick_len: usize,
    /// Number of cards left in each player's hand.
    pub hand_sizes: [usize; NUM_PLAYERS],
}

impl State {
    /// Returns a snapshot of the round counters and flags.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            trick_num: self.trick_num,
            turn_num: self.turn_num,
            current_player: self.current_player,
            lead_trick_player: self.lead_trick_player,
            lead_suit: self.lead_suit,
            hearts_broken: self.hearts_broken,
            trick_len: self.trick.len(),
            hand_sizes: core::array::from_fn(|idx| self.players[idx].hand().len()),
        }
    }
}
