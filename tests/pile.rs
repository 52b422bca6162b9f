//! Card and pile integration tests.

use heartsrs::{Card, CardError, DECK_SIZE, Pile, PileError, QUEEN_OF_SPADES, Suit, TWO_OF_CLUBS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_index_encoding() {
    assert_eq!(Card::from_index(0).unwrap(), TWO_OF_CLUBS);
    assert_eq!(Card::from_index(14).unwrap(), card(Suit::Diamonds, 1));
    assert_eq!(Card::from_index(36).unwrap(), QUEEN_OF_SPADES);
    assert_eq!(Card::from_index(51).unwrap(), card(Suit::Hearts, 12));
    assert_eq!(Card::from_index(52).unwrap_err(), CardError::InvalidIndex(52));

    for index in 0..52 {
        assert_eq!(Card::from_index(index).unwrap().index(), index);
    }
}

#[test]
fn card_rank_validation() {
    assert_eq!(Card::try_new(Suit::Spades, 12).unwrap(), card(Suit::Spades, 12));
    assert_eq!(
        Card::try_new(Suit::Spades, 13).unwrap_err(),
        CardError::InvalidRank(13)
    );
}

#[test]
fn cards_order_by_suit_then_rank() {
    assert!(card(Suit::Clubs, 12) < card(Suit::Diamonds, 0));
    assert!(card(Suit::Diamonds, 12) < card(Suit::Spades, 0));
    assert!(card(Suit::Spades, 12) < card(Suit::Hearts, 0));
    assert!(card(Suit::Hearts, 3) < card(Suit::Hearts, 4));
    assert_eq!(card(Suit::Hearts, 3), card(Suit::Hearts, 3));
}

#[test]
fn penalty_points() {
    assert_eq!(QUEEN_OF_SPADES.penalty_points(), 13);
    assert!(QUEEN_OF_SPADES.is_penalty());
    assert_eq!(card(Suit::Hearts, 0).penalty_points(), 1);
    assert_eq!(card(Suit::Spades, 11).penalty_points(), 0);
    assert!(!card(Suit::Clubs, 10).is_penalty());
}

#[test]
fn card_display() {
    assert_eq!(TWO_OF_CLUBS.to_string(), "2c");
    assert_eq!(QUEEN_OF_SPADES.to_string(), "Qs");
    assert_eq!(card(Suit::Hearts, 8).to_string(), "10h");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Ad");
}

#[test]
fn pile_constructors() {
    let deck = Pile::standard_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck[0], TWO_OF_CLUBS);
    assert_eq!(deck[36], QUEEN_OF_SPADES);

    let from_indices = Pile::from_indices([0, 36]).unwrap();
    assert_eq!(from_indices, Pile::from_cards([TWO_OF_CLUBS, QUEEN_OF_SPADES]));
    assert_eq!(
        Pile::from_indices([0, 60, 1]).unwrap_err(),
        CardError::InvalidIndex(60)
    );

    let mut pile = Pile::new();
    assert!(pile.is_empty());
    pile.push(QUEEN_OF_SPADES);
    pile.push_index(0).unwrap();
    assert_eq!(pile.push_index(52).unwrap_err(), CardError::InvalidIndex(52));
    assert_eq!(pile.cards(), &[QUEEN_OF_SPADES, TWO_OF_CLUBS]);
}

#[test]
fn pile_remove_and_peek() {
    let mut pile = Pile::from_indices([3, 4, 5]).unwrap();
    assert_eq!(pile.get(1), Some(&card(Suit::Clubs, 4)));
    assert_eq!(pile.get(3), None);

    assert_eq!(pile.remove(1).unwrap(), card(Suit::Clubs, 4));
    assert_eq!(pile.len(), 2);
    assert_eq!(pile[1], card(Suit::Clubs, 5));
    assert_eq!(
        pile.remove(2).unwrap_err(),
        PileError::IndexOutOfRange { index: 2, len: 2 }
    );
}

#[test]
fn pile_append_moves_cards() {
    let mut collected = Pile::from_indices([10]).unwrap();
    let mut trick = Pile::from_indices([1, 2, 3, 4]).unwrap();

    collected.append(&mut trick);
    assert!(trick.is_empty());
    assert_eq!(collected.len(), 5);
    assert_eq!(collected.position(card(Suit::Clubs, 4)), Some(4));
    assert!(collected.contains(card(Suit::Clubs, 10)));

    trick.push(TWO_OF_CLUBS);
    assert!(!collected.contains(TWO_OF_CLUBS));
}

#[test]
fn pile_sort_and_shuffle() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut pile = Pile::standard_deck();
    pile.shuffle(&mut rng);
    assert_eq!(pile.len(), DECK_SIZE);
    assert_ne!(pile, Pile::standard_deck());

    let mut again = Pile::standard_deck();
    again.shuffle(&mut ChaCha8Rng::seed_from_u64(4));
    assert_eq!(pile, again);

    pile.sort();
    assert_eq!(pile, Pile::standard_deck());

    pile.clear();
    assert!(pile.is_empty());
}

#[test]
fn pile_display() {
    let pile = Pile::from_cards([TWO_OF_CLUBS, QUEEN_OF_SPADES]);
    assert_eq!(pile.to_string(), "( 2c Qs )");
    assert_eq!(Pile::new().to_string(), "( )");
}
