//! Round configuration options.

/// Configuration options for a round of Hearts.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use heartsrs::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_enforce_legal_moves(false)
///     .with_shoot_the_moon(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Whether `select_action` rejects moves outside the legal set.
    ///
    /// When disabled, any index inside the hand is played as-is.
    pub enforce_legal_moves: bool,
    /// Whether a player taking all 26 points scores 0 and everyone else 26.
    pub shoot_the_moon: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            enforce_legal_moves: true,
            shoot_the_moon: true,
        }
    }
}

impl RoundOptions {
    /// Sets whether illegal moves are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_enforce_legal_moves(false);
    /// assert!(!options.enforce_legal_moves);
    /// ```
    #[must_use]
    pub const fn with_enforce_legal_moves(mut self, enforce: bool) -> Self {
        self.enforce_legal_moves = enforce;
        self
    }

    /// Sets whether the moon shot inversion applies when tallying scores.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_shoot_the_moon(false);
    /// assert!(!options.shoot_the_moon);
    /// ```
    #[must_use]
    pub const fn with_shoot_the_moon(mut self, enabled: bool) -> Self {
        self.shoot_the_moon = enabled;
        self
    }
}
