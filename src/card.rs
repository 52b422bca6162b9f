//! Card types and deck constants.

use core::fmt;

use crate::error::CardError;

/// Number of ranks per suit.
pub const NUM_RANKS: u8 = 13;

/// Number of suits.
pub const NUM_SUITS: u8 = 4;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
///
/// The discriminants are the canonical suit encoding and define suit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Spades.
    Spades = 2,
    /// Hearts.
    Hearts = 3,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Spades, Self::Hearts];

    /// Returns the suit for an encoded index in `0..4`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Clubs),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Spades),
            3 => Some(Self::Hearts),
            _ => None,
        }
    }

    /// Returns the encoded index of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn letter(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Spades => 's',
            Self::Hearts => 'h',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A playing card.
///
/// Cards order by suit first and then by rank, which is the order hands are
/// sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (0 = Two, 9 = Jack, 10 = Queen, 11 = King, 12 = Ace).
    pub rank: u8,
}

/// The two of clubs, which must open every round.
pub const TWO_OF_CLUBS: Card = Card::new(Suit::Clubs, 0);

/// The queen of spades, worth 13 penalty points.
pub const QUEEN_OF_SPADES: Card = Card::new(Suit::Spades, 10);

const RANK_GLYPHS: [&str; NUM_RANKS as usize] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::try_new`]
    /// when the rank comes from untrusted input.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a new card, rejecting ranks outside `0..13`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is 13 or greater.
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank >= NUM_RANKS {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new(suit, rank))
    }

    /// Creates a card from its deck index (`rank = n % 13`, `suit = n / 13`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidIndex`] if `index` is 52 or greater.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsrs::{Card, Suit};
    ///
    /// let card = Card::from_index(36).unwrap();
    /// assert_eq!(card, Card::new(Suit::Spades, 10));
    /// assert_eq!(card.index(), 36);
    /// ```
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match Suit::from_index(index / NUM_RANKS) {
            Some(suit) => Ok(Self::new(suit, index % NUM_RANKS)),
            None => Err(CardError::InvalidIndex(index)),
        }
    }

    /// Returns the deck index of the card.
    #[must_use]
    pub const fn index(self) -> u8 {
        NUM_RANKS * self.suit.index() + self.rank
    }

    /// Returns whether the card is a heart.
    #[must_use]
    pub const fn is_heart(self) -> bool {
        matches!(self.suit, Suit::Hearts)
    }

    /// Returns whether the card is the queen of spades.
    #[must_use]
    pub const fn is_queen_of_spades(self) -> bool {
        matches!(self.suit, Suit::Spades) && self.rank == QUEEN_OF_SPADES.rank
    }

    /// Returns whether the card carries penalty points.
    #[must_use]
    pub const fn is_penalty(self) -> bool {
        self.is_heart() || self.is_queen_of_spades()
    }

    /// Returns the penalty points the card is worth when collected.
    #[must_use]
    pub const fn penalty_points(self) -> u32 {
        if self.is_heart() {
            1
        } else if self.is_queen_of_spades() {
            13
        } else {
            0
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = RANK_GLYPHS.get(self.rank as usize).copied().unwrap_or("?");
        write!(f, "{rank}{}", self.suit)
    }
}
