use thiserror::Error;

use crate::money::Money;
use crate::product::Product;
use crate::user::User;

/// Why a purchase attempt was refused. Variants carry what the display
/// layer needs to phrase the message; the `Error` texts are for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("{product} is out of stock")]
    OutOfStock { product: String },
    #[error("only {available} of {product} available")]
    InsufficientStock { product: String, available: u32 },
    #[error("insufficient funds: have {balance:?}, need {required:?}")]
    InsufficientFunds { balance: Money, required: Money },
}

/// Check a purchase without applying it.
///
/// Rules run in order and short-circuit on the first failure:
/// quantity > 0, then stock, then funds. Returns the total cost on
/// success. A cost overflow counts as unaffordable.
pub fn validate(user: &User, product: &Product, quantity: i64) -> Result<Money, PurchaseError> {
    if quantity <= 0 {
        return Err(PurchaseError::InvalidQuantity);
    }
    let quantity = quantity as u64;

    if quantity > product.quantity as u64 {
        if product.quantity == 0 {
            return Err(PurchaseError::OutOfStock {
                product: product.name.clone(),
            });
        }
        return Err(PurchaseError::InsufficientStock {
            product: product.name.clone(),
            available: product.quantity,
        });
    }

    // Stock fits in u32 from here on. An overflowing total can never be
    // covered by a u64 balance, so it reports as unaffordable.
    let total = product
        .price
        .checked_mul(quantity as u32)
        .unwrap_or(Money::from_cents(u64::MAX));
    if user.balance < total {
        return Err(PurchaseError::InsufficientFunds {
            balance: user.balance,
            required: total,
        });
    }

    Ok(total)
}

/// Validate and apply a purchase: debit the balance and decrement stock.
///
/// On any refusal neither record changes. Returns the user's new balance.
pub fn commit(user: &mut User, product: &mut Product, quantity: i64) -> Result<Money, PurchaseError> {
    let total = validate(user, product, quantity)?;

    // Both subtractions are in range: validate() checked stock and funds.
    user.balance = user
        .balance
        .checked_sub(total)
        .expect("validate checked the balance covers the total");
    product.quantity -= quantity as u32;

    tracing::info!(
        user = %user.name,
        product = %product.name,
        quantity,
        total_cents = total.cents(),
        new_balance_cents = user.balance.cents(),
        "purchase committed"
    );

    Ok(user.balance)
}
