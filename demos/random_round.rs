//! Plays one round of Hearts with every seat choosing a random legal card.

use std::time::{SystemTime, UNIX_EPOCH};

use heartsrs::{RoundOptions, State};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Hearts random round (seed {seed})");

    let mut state = State::new(RoundOptions::default(), seed);
    let mut chooser = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let leader = match state.start_round() {
        Ok(leader) => leader,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    for (idx, player) in state.players().iter().enumerate() {
        println!("Player {idx}: {}", player.hand());
    }
    println!("Player {leader} leads the two of clubs.");

    while !state.is_round_over() {
        let Some(player) = state.current_player() else {
            break;
        };
        let choice = match state.update_legal_move_indices() {
            Ok(legal) => legal.choose(&mut chooser).copied(),
            Err(err) => {
                println!("Legal move error: {err}");
                return;
            }
        };
        let Some(choice) = choice else {
            break;
        };

        match state.select_action(choice) {
            Ok(card) => println!("  Player {player} plays {card}"),
            Err(err) => {
                println!("Play error: {err}");
                return;
            }
        }

        if state.calc_trick_winner().is_some() {
            match state.update_to_next_trick() {
                Ok(winner) => println!(
                    "Trick {} won by player {winner}{}",
                    state.trick_num(),
                    if state.hearts_broken() { " (hearts broken)" } else { "" }
                ),
                Err(err) => {
                    println!("Trick error: {err}");
                    return;
                }
            }
        }
    }

    let scores = state.tally_scores();
    for (idx, score) in scores.iter().enumerate() {
        println!("Player {idx}: {score} points");
    }
}
