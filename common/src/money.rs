use serde::{Deserialize, Serialize};

/// A monetary amount stored as a whole number of cents.
///
/// All prices and balances use this; formatting for display lives in
/// [`crate::locale`] so the same amount renders per-language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Convenience for whole-dollar amounts.
    pub const fn from_dollars(dollars: u64) -> Self {
        Money(dollars * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Total cost of `quantity` units at this price.
    /// Returns None on overflow, which callers treat as unaffordable.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(quantity as u64).map(Money)
    }

    /// Subtract `amount`, or None if it exceeds self.
    pub fn checked_sub(self, amount: Money) -> Option<Money> {
        self.0.checked_sub(amount.0).map(Money)
    }

    /// Whole-dollar and cent parts, for the locale formatters.
    pub fn split(self) -> (u64, u64) {
        (self.0 / 100, self.0 % 100)
    }
}
