//! Table configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Player preferences that sit beside the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Settings {
    /// Whether events are forwarded to the notifier.
    pub sound_enabled: bool,
    /// Whether basic strategy hints are shown during the player's turn.
    pub hints_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            hints_enabled: true,
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(500)
///     .with_blackjack_pays(1.5)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Chips the player starts the session with.
    pub starting_balance: usize,
    /// Blackjack bonus ratio on top of the returned stake (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for the blackjack bonus.
    pub rounding_blackjack: RoundingMode,
    /// Total at which the dealer stops drawing. Soft totals are not treated
    /// specially.
    pub dealer_stands_on: u8,
    /// Settings the session starts with.
    pub settings: Settings,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            settings: Settings::default(),
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the blackjack bonus ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for the blackjack bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total the dealer stands on.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the initial settings.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, Settings};
    ///
    /// let quiet = Settings { sound_enabled: false, hints_enabled: true };
    /// let options = GameOptions::default().with_settings(quiet);
    /// assert!(!options.settings.sound_enabled);
    /// ```
    #[must_use]
    pub const fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
}
