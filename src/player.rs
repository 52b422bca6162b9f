//! Per-player card holdings.

use crate::pile::Pile;

/// Cards held and collected by one player during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerData {
    /// Cards currently in the player's hand.
    hand: Pile,
    /// Cards won in completed tricks.
    collected: Pile,
}

impl PlayerData {
    /// Creates a player with an empty hand and no collected cards.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Pile::new(),
            collected: Pile::new(),
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Pile {
        &self.hand
    }

    /// Returns the player's hand for modification.
    pub const fn hand_mut(&mut self) -> &mut Pile {
        &mut self.hand
    }

    /// Returns the cards the player has won.
    #[must_use]
    pub const fn collected(&self) -> &Pile {
        &self.collected
    }

    /// Returns the cards the player has won for modification.
    pub const fn collected_mut(&mut self) -> &mut Pile {
        &mut self.collected
    }

    /// Raw penalty points in the collected pile, before any moon shot.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.collected.iter().map(|card| card.penalty_points()).sum()
    }

    /// Clears both the hand and the collected cards.
    pub fn reset_piles(&mut self) {
        self.hand.clear();
        self.collected.clear();
    }
}
