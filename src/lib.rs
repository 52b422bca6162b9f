//! A Hearts round engine with optional `no_std` support.
//!
//! The crate provides a [`State`] type that runs a single round: dealing,
//! legal move derivation, card play, trick resolution, and scoring. Choosing
//! which legal move to play is left to the caller.
//!
//! # Example
//!
//! ```
//! use heartsrs::{RoundOptions, State};
//!
//! let mut state = State::new(RoundOptions::default(), 42);
//! let leader = state.start_round().unwrap();
//! assert_eq!(state.current_player(), Some(leader));
//!
//! while !state.is_round_over() {
//!     let idx = state.update_legal_move_indices().unwrap()[0];
//!     state.select_action(idx).unwrap();
//!     if state.calc_trick_winner().is_some() {
//!         state.update_to_next_trick().unwrap();
//!     }
//! }
//!
//! let scores = state.tally_scores();
//! assert!(scores.iter().sum::<u32>() == 26 || scores.iter().sum::<u32>() == 78);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod options;
pub mod pile;
pub mod player;
pub mod state;

// Re-export main types
pub use card::{Card, DECK_SIZE, NUM_RANKS, NUM_SUITS, QUEEN_OF_SPADES, Suit, TWO_OF_CLUBS};
pub use error::{ActionError, CardError, DealError, PileError, TrickError};
pub use options::RoundOptions;
pub use pile::Pile;
pub use player::PlayerData;
pub use state::{HAND_SIZE, MOON_SHOT_POINTS, NUM_PLAYERS, NUM_TURNS, State, StateSnapshot};
