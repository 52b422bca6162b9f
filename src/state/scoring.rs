use tracing::debug;

use super::{MOON_SHOT_POINTS, NUM_PLAYERS, State};

impl State {
    /// Computes each player's score for the round, indexed by player number.
    ///
    /// Each collected heart is worth 1 point and the queen of spades 13. If a
    /// player took all 26 points and
    /// [`RoundOptions::shoot_the_moon`](crate::RoundOptions) is enabled, that
    /// player scores 0 and everyone else scores 26.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsrs::{RoundOptions, State};
    ///
    /// let state = State::new(RoundOptions::default(), 0);
    /// assert_eq!(state.tally_scores(), [0, 0, 0, 0]);
    /// ```
    #[must_use]
    pub fn tally_scores(&self) -> [u32; NUM_PLAYERS] {
        let mut scores: [u32; NUM_PLAYERS] =
            core::array::from_fn(|idx| self.players[idx].points());

        let shooter = scores.iter().position(|&points| points == MOON_SHOT_POINTS);
        if let Some(shooter) = shooter.filter(|_| self.options.shoot_the_moon) {
            for (idx, score) in scores.iter_mut().enumerate() {
                *score = if idx == shooter { 0 } else { MOON_SHOT_POINTS };
            }
        }

        debug!(?scores, moon_shot = ?shooter, "scores tallied");
        scores
    }
}
