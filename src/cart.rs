//! Cart

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{entries::Entry, prices::Price};

/// A mapping of item name to quantity and price.
///
/// Entries render and persist in lexical item order, so identical carts
/// always produce identical output. The cart never holds an entry with a
/// quantity of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<String, Entry>,
}

impl Cart {
    /// Creates a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart {
            entries: BTreeMap::new(),
        }
    }

    /// Adds one unit of the named item.
    ///
    /// Inserts a quantity-1 entry when the item is absent; otherwise
    /// increments the existing quantity. The price given here only takes
    /// effect on first insertion, later calls leave the stored price
    /// untouched.
    pub fn add(&mut self, name: &str, price: Price) {
        self.entries
            .entry(name.to_string())
            .and_modify(|entry| *entry = entry.incremented())
            .or_insert_with(|| Entry::new(1, price));
    }

    /// Removes one unit of the named item.
    ///
    /// The entry disappears entirely when its quantity reaches zero. A
    /// missing item is a no-op. Returns whether the cart changed.
    pub fn decrease(&mut self, name: &str) -> bool {
        let Some(entry) = self.entries.get(name) else {
            return false;
        };

        match entry.decremented() {
            Some(decremented) => {
                self.entries.insert(name.to_string(), decremented);
            }
            None => {
                self.entries.remove(name);
            }
        }

        true
    }

    /// Returns the entry for the named item, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Returns the sum of all quantities across entries.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.entries
            .values()
            .map(|entry| u64::from(entry.quantity()))
            .sum()
    }

    /// Returns the sum of price times quantity across entries.
    #[must_use]
    pub fn total(&self) -> Price {
        self.entries
            .values()
            .fold(Price::ZERO, |acc, entry| acc.saturating_add(entry.subtotal()))
    }

    /// Iterates over line items in lexical item order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Returns the number of distinct items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops entries with a quantity of zero.
    ///
    /// Deserialized payloads may carry zero-quantity entries; pruning
    /// restores the cart invariant before the data is used.
    pub fn prune(&mut self) {
        self.entries.retain(|_, entry| entry.quantity() > 0);
    }
}
