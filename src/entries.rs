//! Entries

use serde::{Deserialize, Serialize};

use crate::prices::Price;

/// One item's quantity and price within a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    quantity: u32,
    price: Price,
}

impl Entry {
    /// Creates a new entry with the given quantity and price.
    #[must_use]
    pub fn new(quantity: u32, price: Price) -> Self {
        Entry { quantity, price }
    }

    /// Returns the quantity of the entry.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price of the entry.
    ///
    /// The price is fixed at first insertion and never changes afterwards.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns price multiplied by quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// Returns a copy with the quantity incremented by one.
    #[must_use]
    pub fn incremented(&self) -> Self {
        Entry {
            quantity: self.quantity.saturating_add(1),
            price: self.price,
        }
    }

    /// Returns a copy with the quantity decremented by one, or `None` when
    /// the quantity reaches zero.
    #[must_use]
    pub fn decremented(&self) -> Option<Self> {
        let quantity = self.quantity.checked_sub(1)?;

        if quantity == 0 {
            return None;
        }

        Some(Entry {
            quantity,
            price: self.price,
        })
    }
}
