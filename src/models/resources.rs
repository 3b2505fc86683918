//! Three-currency resource bundle

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{Currency, MAX_AMOUNT};

/// An immutable amount of gold, silver and bronze.
///
/// Arithmetic never mutates a bundle; it produces a new one or `None`
/// when a currency would pass [`MAX_AMOUNT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceBundle {
    #[serde(default)]
    gold: u64,
    #[serde(default)]
    silver: u64,
    #[serde(default)]
    bronze: u64,
}

impl ResourceBundle {
    pub const EMPTY: ResourceBundle = ResourceBundle {
        gold: 0,
        silver: 0,
        bronze: 0,
    };

    pub fn new(gold: u64, silver: u64, bronze: u64) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn silver(&self) -> u64 {
        self.silver
    }

    pub fn bronze(&self) -> u64 {
        self.bronze
    }

    /// Amount held in a single currency
    pub fn amount(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Gold => self.gold,
            Currency::Silver => self.silver,
            Currency::Bronze => self.bronze,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// True when every currency in `self` is at least the one in `cost`.
    pub fn covers(&self, cost: &ResourceBundle) -> bool {
        Currency::ALL
            .iter()
            .all(|&c| self.amount(c) >= cost.amount(c))
    }

    pub fn checked_add(&self, other: &ResourceBundle) -> Option<ResourceBundle> {
        let add = |a: u64, b: u64| a.checked_add(b).filter(|&sum| sum <= MAX_AMOUNT);
        Some(ResourceBundle {
            gold: add(self.gold, other.gold)?,
            silver: add(self.silver, other.silver)?,
            bronze: add(self.bronze, other.bronze)?,
        })
    }

    /// Subtract `cost`, or `None` if any currency would go negative.
    pub fn checked_sub(&self, cost: &ResourceBundle) -> Option<ResourceBundle> {
        Some(ResourceBundle {
            gold: self.gold.checked_sub(cost.gold)?,
            silver: self.silver.checked_sub(cost.silver)?,
            bronze: self.bronze.checked_sub(cost.bronze)?,
        })
    }

    /// Add, clamping each currency at [`MAX_AMOUNT`].
    pub fn saturating_add(&self, other: &ResourceBundle) -> ResourceBundle {
        let add = |a: u64, b: u64| a.saturating_add(b).min(MAX_AMOUNT);
        ResourceBundle {
            gold: add(self.gold, other.gold),
            silver: add(self.silver, other.silver),
            bronze: add(self.bronze, other.bronze),
        }
    }
}

impl fmt::Display for ResourceBundle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "gold({}) silver({}) bronze({})",
            self.gold, self.silver, self.bronze
        )
    }
}
