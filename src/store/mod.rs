//! Stores
//!
//! The persistence seam for the cart: a string key-value [`Store`] interface
//! with in-memory and JSON-file backends, and the [`CartStore`] facade that
//! performs full load-mutate-save cycles against it.

use thiserror::Error;
use tracing::{debug, warn};

use crate::{cart::Cart, prices::Price};

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The fixed key the cart is persisted under.
pub const CART_KEY: &str = "cart";

/// Errors raised by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An underlying I/O operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A persisted payload could not be serialized or deserialized.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// A string key-value store, the shape of browser local storage.
pub trait Store {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Load/save/mutate operations binding a [`Cart`] to a [`Store`].
///
/// Every mutation is a full load-mutate-save cycle; nothing is cached
/// between operations.
#[derive(Debug)]
pub struct CartStore<S> {
    store: S,
}

impl<S: Store> CartStore<S> {
    /// Creates a cart store over the given backend.
    #[must_use]
    pub fn new(store: S) -> Self {
        CartStore { store }
    }

    /// Reads the persisted cart.
    ///
    /// A missing key, malformed JSON, an invariant-violating payload, or a
    /// failing backend read all degrade to the empty cart. Recovery is
    /// local: a warning is logged and no error is surfaced.
    pub fn load(&self) -> Cart {
        let payload = match self.store.get(CART_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Cart::new(),
            Err(error) => {
                warn!(%error, "cart backend read failed, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Cart>(&payload) {
            Ok(mut cart) => {
                cart.prune();
                cart
            }
            Err(error) => {
                warn!(%error, "persisted cart is malformed, starting empty");
                Cart::new()
            }
        }
    }

    /// Persists the cart, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if serialization or the backend write fails.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StoreError> {
        let payload = serde_json::to_string(cart)?;
        self.store.set(CART_KEY, &payload)
    }

    /// Adds one unit of the named item and persists the result.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the save fails.
    pub fn add(&mut self, name: &str, price: Price) -> Result<(), StoreError> {
        let mut cart = self.load();
        cart.add(name, price);

        debug!(item = name, count = cart.count(), "added item to cart");

        self.save(&cart)
    }

    /// Removes one unit of the named item and persists the result.
    ///
    /// A missing item performs no save at all.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the save fails.
    pub fn decrease(&mut self, name: &str) -> Result<(), StoreError> {
        let mut cart = self.load();

        if !cart.decrease(name) {
            return Ok(());
        }

        debug!(item = name, count = cart.count(), "decreased item in cart");

        self.save(&cart)
    }

    /// Deletes the entire persisted cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend write fails.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        debug!("clearing cart");

        self.store.remove(CART_KEY)
    }

    /// Returns the sum of all quantities in the persisted cart.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.load().count()
    }

    /// Returns the total value of the persisted cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.load().total()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn cart_store() -> CartStore<MemoryStore> {
        CartStore::new(MemoryStore::new())
    }

    #[test]
    fn load_returns_empty_cart_for_missing_key() {
        let store = cart_store();

        assert!(store.load().is_empty());
    }

    #[test]
    fn load_swallows_malformed_payloads() -> TestResult {
        let mut backend = MemoryStore::new();
        backend.set(CART_KEY, "{not json")?;

        let store = CartStore::new(backend);

        assert!(store.load().is_empty());

        Ok(())
    }

    #[test]
    fn load_treats_negative_prices_as_malformed() -> TestResult {
        let mut backend = MemoryStore::new();
        backend.set(CART_KEY, r#"{"Sword":{"quantity":1,"price":-10.0}}"#)?;

        let store = CartStore::new(backend);

        assert!(store.load().is_empty());

        Ok(())
    }

    #[test]
    fn load_prunes_zero_quantity_entries() -> TestResult {
        let mut backend = MemoryStore::new();
        backend.set(CART_KEY, r#"{"Sword":{"quantity":0,"price":10.0}}"#)?;

        let store = CartStore::new(backend);

        assert!(store.load().is_empty());

        Ok(())
    }

    #[test]
    fn add_persists_a_new_entry() -> TestResult {
        let mut store = cart_store();

        store.add("Sword", Price::from_minor(1000))?;

        let cart = store.load();

        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total().to_string(), "10.00");

        Ok(())
    }

    #[test]
    fn add_twice_doubles_the_total() -> TestResult {
        let mut store = cart_store();

        store.add("Sword", Price::from_minor(1000))?;
        store.add("Sword", Price::from_minor(1000))?;

        assert_eq!(store.count(), 2);
        assert_eq!(store.total().to_string(), "20.00");

        Ok(())
    }

    #[test]
    fn decrease_at_quantity_one_empties_the_cart() -> TestResult {
        let mut store = cart_store();
        store.add("Sword", Price::from_minor(1000))?;

        store.decrease("Sword")?;

        assert!(store.load().is_empty());

        Ok(())
    }

    #[test]
    fn decrease_of_absent_item_changes_nothing() -> TestResult {
        let mut store = cart_store();
        store.add("Sword", Price::from_minor(1000))?;

        store.decrease("Potion")?;

        assert_eq!(store.count(), 1);

        Ok(())
    }

    #[test]
    fn clear_removes_the_persisted_cart() -> TestResult {
        let mut store = cart_store();
        store.add("Sword", Price::from_minor(1000))?;

        store.clear()?;

        assert!(store.load().is_empty());

        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> TestResult {
        let mut store = cart_store();
        store.add("Sword", Price::from_minor(1000))?;
        store.add("Potion", Price::from_minor(250))?;

        let first = store.load();
        store.save(&first)?;
        let second = store.load();

        assert_eq!(second, first);

        Ok(())
    }
}
