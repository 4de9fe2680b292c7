//! Balance and cumulative statistics carried across rounds.

/// Cumulative statistics for the session.
///
/// Streak and maxima fields only move when a win or loss is recorded; a push
/// touches nothing but the game and push counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Rounds settled.
    pub games_played: u32,
    /// Rounds won, blackjacks included.
    pub wins: u32,
    /// Rounds lost, busts included.
    pub losses: u32,
    /// Rounds pushed.
    pub pushes: u32,
    /// Consecutive wins since the last loss.
    pub current_streak: u32,
    /// Longest win streak seen this session.
    pub longest_streak: u32,
    /// Largest amount won in a single round.
    pub biggest_win: usize,
    /// Largest amount lost in a single round.
    pub biggest_loss: usize,
}

/// The player's chips and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    balance: usize,
    stats: Stats,
}

impl Ledger {
    /// Opens a ledger with the given starting balance.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            stats: Stats {
                games_played: 0,
                wins: 0,
                losses: 0,
                pushes: 0,
                current_streak: 0,
                longest_streak: 0,
                biggest_win: 0,
                biggest_loss: 0,
            },
        }
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns a copy of the statistics.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Takes a wager out of the balance.
    ///
    /// Returns `false` and leaves the balance untouched if it cannot cover
    /// `amount`.
    pub(crate) const fn withdraw(&mut self, amount: usize) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Credits a payout to the balance.
    pub(crate) const fn credit(&mut self, amount: usize) {
        self.balance += amount;
    }

    /// Records a won round. `winnings` is the profit over the stake.
    pub(crate) fn record_win(&mut self, winnings: usize) {
        let stats = &mut self.stats;
        stats.games_played += 1;
        stats.wins += 1;
        stats.current_streak += 1;
        stats.longest_streak = stats.longest_streak.max(stats.current_streak);
        stats.biggest_win = stats.biggest_win.max(winnings);
    }

    /// Records a lost round. `stake` is the amount forfeited.
    pub(crate) fn record_loss(&mut self, stake: usize) {
        let stats = &mut self.stats;
        stats.games_played += 1;
        stats.losses += 1;
        stats.current_streak = 0;
        stats.biggest_loss = stats.biggest_loss.max(stake);
    }

    /// Records a pushed round.
    pub(crate) const fn record_push(&mut self) {
        self.stats.games_played += 1;
        self.stats.pushes += 1;
    }
}
