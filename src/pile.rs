//! Ordered card collections used for the deck, hands, tricks, and
//! collected cards.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::slice;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};
use crate::error::{CardError, PileError};

/// An ordered sequence of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding the given cards in order.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Creates a pile from deck indices.
    ///
    /// # Errors
    ///
    /// Returns an error on the first index outside `0..52`.
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> Result<Self, CardError> {
        let cards = indices
            .into_iter()
            .map(Card::from_index)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    /// Creates an unshuffled 52-card deck in index order.
    #[must_use]
    pub fn standard_deck() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for index in 0..DECK_SIZE as u8 {
            if let Ok(card) = Card::from_index(index) {
                cards.push(card);
            }
        }
        Self { cards }
    }

    /// Adds a card to the end of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds the card with the given deck index to the end of the pile.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside `0..52`.
    pub fn push_index(&mut self, index: u8) -> Result<(), CardError> {
        self.cards.push(Card::from_index(index)?);
        Ok(())
    }

    /// Moves every card out of `other` onto the end of this pile, leaving
    /// `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }

    /// Returns the card at `index` without removing it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Removes and returns the card at `index`, shifting later cards down.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not less than the pile length.
    pub fn remove(&mut self, index: usize) -> Result<Card, PileError> {
        if index >= self.cards.len() {
            return Err(PileError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Sorts the pile by suit and then rank.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Shuffles the pile into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the position of `card` in the pile.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<usize> for Pile {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl Extend<Card> for Pile {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("( ")?;
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        f.write_str(")")
    }
}
