//! Round engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, NUM_RANKS, Suit, TWO_OF_CLUBS};
use crate::error::DealError;
use crate::options::RoundOptions;
use crate::pile::Pile;
use crate::player::PlayerData;

mod actions;
mod legal;
mod scoring;
pub mod snapshot;
mod trick;

pub use snapshot::StateSnapshot;

/// Number of players at the table.
pub const NUM_PLAYERS: usize = 4;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 13;

/// Number of cards played in a full round.
pub const NUM_TURNS: usize = 52;

/// Total penalty points in a round; taking all of them shoots the moon.
pub const MOON_SHOT_POINTS: u32 = 26;

/// The state of a single round of Hearts.
///
/// The state owns the deck and the four players' hands and collected cards.
/// A caller drives the round by asking for legal moves, choosing one, and
/// resolving each trick once its fourth card is down:
///
/// 1. [`State::reset_state`] and [`State::deal_cards`] (or [`State::start_round`]).
/// 2. [`State::update_legal_move_indices`] then [`State::select_action`].
/// 3. When [`State::calc_trick_winner`] returns a player, [`State::update_to_next_trick`].
/// 4. After 52 turns, [`State::tally_scores`].
#[derive(Debug, Clone)]
pub struct State {
    /// The full deck, reshuffled for every deal.
    deck: Pile,
    /// Per-player hands and collected cards.
    players: [PlayerData; NUM_PLAYERS],
    /// Cards played in the current trick, in play order.
    trick: Pile,
    /// Number of completed tricks.
    trick_num: usize,
    /// Number of cards played so far this round.
    turn_num: usize,
    /// Player to move next.
    current_player: Option<usize>,
    /// Player who led the current trick.
    lead_trick_player: Option<usize>,
    /// Suit of the first card of the current trick.
    lead_suit: Option<Suit>,
    /// Whether a heart has been played this round.
    hearts_broken: bool,
    /// Legal hand indices for the current player.
    legal_move_idxs: Vec<usize>,
    /// Round options.
    options: RoundOptions,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl State {
    /// Creates a new round state with the given seed.
    ///
    /// The deck holds all 52 cards and every player starts empty.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsrs::{RoundOptions, State};
    ///
    /// let state = State::new(RoundOptions::default(), 7);
    /// assert_eq!(state.deck().len(), 52);
    /// assert_eq!(state.current_player(), None);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self {
            deck: Pile::standard_deck(),
            players: core::array::from_fn(|_| PlayerData::new()),
            trick: Pile::new(),
            trick_num: 0,
            turn_num: 0,
            current_player: None,
            lead_trick_player: None,
            lead_suit: None,
            hearts_broken: false,
            legal_move_idxs: Vec::new(),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the shuffling RNG with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Pile {
        &self.deck
    }

    /// Returns the deck for modification, e.g. to stack it before dealing.
    ///
    /// [`State::deal_cards`] rejects a deck that is not 52 distinct cards.
    pub const fn deck_mut(&mut self) -> &mut Pile {
        &mut self.deck
    }

    /// Returns all player records, indexed by player number.
    #[must_use]
    pub const fn players(&self) -> &[PlayerData; NUM_PLAYERS] {
        &self.players
    }

    /// Returns the record of one player.
    #[must_use]
    pub fn player(&self, player_idx: usize) -> Option<&PlayerData> {
        self.players.get(player_idx)
    }

    /// Returns the record of one player for modification.
    pub fn player_mut(&mut self, player_idx: usize) -> Option<&mut PlayerData> {
        self.players.get_mut(player_idx)
    }

    /// Returns the cards of the current trick in play order.
    #[must_use]
    pub const fn trick(&self) -> &Pile {
        &self.trick
    }

    /// Returns the number of completed tricks.
    #[must_use]
    pub const fn trick_num(&self) -> usize {
        self.trick_num
    }

    /// Sets the number of completed tricks.
    pub fn set_trick_num(&mut self, num: usize) {
        self.trick_num = num;
        trace!(trick_num = num, "trick number set");
    }

    /// Returns the number of cards played so far this round.
    #[must_use]
    pub const fn turn_num(&self) -> usize {
        self.turn_num
    }

    /// Sets the number of cards played so far this round.
    pub fn set_turn_num(&mut self, num: usize) {
        self.turn_num = num;
        trace!(turn_num = num, "turn number set");
    }

    /// Returns the player to move next, if a round is in progress.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        self.current_player
    }

    /// Sets the player to move next.
    pub fn set_current_player(&mut self, player_idx: Option<usize>) {
        self.current_player = player_idx;
        trace!(current_player = ?player_idx, "current player set");
    }

    /// Returns the player who led the current trick.
    #[must_use]
    pub const fn lead_trick_player(&self) -> Option<usize> {
        self.lead_trick_player
    }

    /// Sets the player who led the current trick.
    pub fn set_lead_trick_player(&mut self, player_idx: Option<usize>) {
        self.lead_trick_player = player_idx;
        trace!(lead_trick_player = ?player_idx, "lead trick player set");
    }

    /// Returns the suit led in the current trick.
    #[must_use]
    pub const fn lead_suit(&self) -> Option<Suit> {
        self.lead_suit
    }

    /// Sets the suit led in the current trick.
    pub fn set_lead_suit(&mut self, suit: Option<Suit>) {
        self.lead_suit = suit;
        trace!(lead_suit = ?suit, "lead suit set");
    }

    /// Returns whether hearts have been broken this round.
    #[must_use]
    pub const fn hearts_broken(&self) -> bool {
        self.hearts_broken
    }

    /// Sets whether hearts have been broken this round.
    pub fn set_hearts_broken(&mut self, broken: bool) {
        self.hearts_broken = broken;
        trace!(hearts_broken = broken, "hearts broken set");
    }

    /// Returns the most recently computed legal hand indices.
    ///
    /// The list is emptied whenever a card is played; call
    /// [`State::update_legal_move_indices`] to refresh it.
    #[must_use]
    pub fn legal_move_indices(&self) -> &[usize] {
        &self.legal_move_idxs
    }

    /// Returns whether all 52 cards have been played.
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        self.turn_num >= NUM_TURNS
    }

    /// Returns every round field to its initial value.
    ///
    /// Hands, collected cards, and the trick are emptied. The deck and the
    /// RNG are left as they are.
    pub fn reset_state(&mut self) {
        self.set_turn_num(0);
        self.set_trick_num(0);
        self.set_current_player(None);
        self.set_lead_trick_player(None);
        self.set_lead_suit(None);
        self.set_hearts_broken(false);

        self.trick.clear();
        self.legal_move_idxs.clear();

        for player in &mut self.players {
            player.reset_piles();
        }
    }

    /// Shuffles the deck and deals 13 cards to each player.
    ///
    /// Player `i` receives the `i`-th block of 13 shuffled cards, and every
    /// hand is sorted. The deck keeps all 52 cards for the next deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the state has not been reset since the last round,
    /// or if the deck is not 52 distinct cards.
    pub fn deal_cards(&mut self) -> Result<(), DealError> {
        if !self.is_reset() {
            return Err(DealError::NotReset);
        }
        if !is_full_deck(&self.deck) {
            return Err(DealError::InvalidDeck);
        }

        self.deck.shuffle(&mut self.rng);

        for (player, block) in self.players.iter_mut().zip(self.deck.cards().chunks(HAND_SIZE)) {
            let hand = player.hand_mut();
            hand.extend(block.iter().copied());
            hand.sort();
        }

        debug!(deck = %self.deck, "cards dealt");
        Ok(())
    }

    /// Resets the state, deals, and hands the first move to the holder of
    /// the two of clubs.
    ///
    /// Returns the index of the player who must lead.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is not 52 distinct cards.
    pub fn start_round(&mut self) -> Result<usize, DealError> {
        self.reset_state();
        self.deal_cards()?;

        let leader = self
            .get_player_holding_card(TWO_OF_CLUBS)
            .ok_or(DealError::InvalidDeck)?;
        self.set_current_player(Some(leader));

        debug!(leader, "round started");
        Ok(leader)
    }

    /// Returns whether a player holds any card of `suit`.
    ///
    /// Returns `false` when `suit` is `None` or the player does not exist.
    #[must_use]
    pub fn has_suit(&self, player_idx: usize, suit: Option<Suit>) -> bool {
        let Some(suit) = suit else {
            return false;
        };
        self.players
            .get(player_idx)
            .is_some_and(|player| player.hand().iter().any(|card| card.suit == suit))
    }

    /// Returns the index of the player whose hand holds `card`.
    #[must_use]
    pub fn get_player_holding_card(&self, card: Card) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.hand().contains(card))
    }

    fn is_reset(&self) -> bool {
        self.turn_num == 0
            && self.trick_num == 0
            && self.trick.is_empty()
            && self
                .players
                .iter()
                .all(|player| player.hand().is_empty() && player.collected().is_empty())
    }
}

/// Checks that `deck` holds each of the 52 cards exactly once.
fn is_full_deck(deck: &Pile) -> bool {
    if deck.len() != DECK_SIZE {
        return false;
    }

    let mut seen: u64 = 0;
    for card in deck {
        if card.rank >= NUM_RANKS {
            return false;
        }
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}
