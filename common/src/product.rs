use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Money,
    /// Remaining stock. Only ever decremented, by committed purchases.
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Product {
            name: name.into(),
            price,
            quantity,
        }
    }
}
