//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur while building cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Deck index outside `0..52`.
    #[error("card index {0} is out of range")]
    InvalidIndex(u8),
    /// Rank outside `0..13`.
    #[error("card rank {0} is out of range")]
    InvalidRank(u8),
}

/// Errors that can occur while accessing a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Index beyond the end of the pile.
    #[error("index {index} is out of range for a pile of {len} cards")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The pile length.
        len: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The state was not reset before dealing.
    #[error("state must be reset before dealing")]
    NotReset,
    /// The deck is not a full deck of distinct cards.
    #[error("deck does not hold 52 distinct cards")]
    InvalidDeck,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No player is set to move.
    #[error("no current player")]
    NoCurrentPlayer,
    /// The trick on the table is complete and has not been resolved.
    #[error("trick is complete and must be resolved first")]
    TrickComplete,
    /// Hand index beyond the end of the current player's hand.
    #[error("hand index {0} is out of range")]
    InvalidIndex(usize),
    /// Hand index is not a legal move.
    #[error("hand index {0} is not a legal move")]
    IllegalMove(usize),
}

/// Errors that can occur when resolving a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    /// The trick does not hold one card from every player.
    #[error("trick is not complete")]
    Incomplete,
}
