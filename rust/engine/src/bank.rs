use serde::{Deserialize, Serialize};

/// Balances are kept in cents so a 3:2 payout on an odd bet stays exact.
pub const CENTS_PER_CHIP: u64 = 100;

/// Default balance for a newly seated player, in whole chips.
pub const STARTING_CHIPS: u64 = 100;

/// A player's chip balance. The dealer has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    balance: u64,
}

impl Bank {
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }

    pub fn with_chips(chips: u64) -> Self {
        Self::new(chips.saturating_mul(CENTS_PER_CHIP))
    }

    /// Balance in cents.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Whole chips available to bet.
    pub fn chips(&self) -> u64 {
        self.balance / CENTS_PER_CHIP
    }

    /// Below one chip: the player cannot place the minimum bet.
    pub fn is_bankrupt(&self) -> bool {
        self.balance < CENTS_PER_CHIP
    }

    pub fn deposit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Removes `amount` if the balance covers it. Returns whether it did;
    /// the balance is untouched on failure.
    pub fn withdraw(&mut self, amount: u64) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }
}

/// Renders cents as "$12" or "$12.50".
pub fn format_chips(cents: u64) -> String {
    let whole = cents / CENTS_PER_CHIP;
    match cents % CENTS_PER_CHIP {
        0 => format!("${}", whole),
        frac => format!("${}.{:02}", whole, frac),
    }
}
