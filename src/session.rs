//! Sessions
//!
//! The interactive glue over the cart store: observer registration for
//! change notifications, confirmation-gated clearing, view navigation, and
//! click feedback on the actions that warrant it.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::{
    cart::Cart,
    clicks::Feedback,
    prices::Price,
    store::{CartStore, Store, StoreError},
};

/// The prompt shown before the cart is cleared.
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear your cart?";

/// The views a session can navigate between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// The storefront.
    #[default]
    Shop,

    /// The cart contents.
    Cart,

    /// The checkout recap.
    Checkout,
}

/// Interactive confirmation for destructive actions.
pub trait Confirm {
    /// Asks the user to confirm; returns whether they accepted.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// A confirmation source with a fixed answer, for tests and `--yes` flows.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Confirmation via the terminal: prompt on stderr, answer from stdin.
///
/// Anything other than an explicit `y`/`yes` declines, including a failed
/// read.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        io::stderr().flush().ok();

        let mut answer = String::new();

        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

impl Confirm for Box<dyn Confirm> {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.as_mut().confirm(prompt)
    }
}

type ChangeObserver = Box<dyn FnMut(&Cart)>;

/// An interactive cart session.
///
/// Observers registered with [`Session::on_change`] are invoked with the
/// freshly loaded cart after every mutation, replacing the ambient
/// render-function dispatch of a page script with explicit registration.
pub struct Session<S, F, C> {
    store: CartStore<S>,
    feedback: F,
    confirm: C,
    view: View,
    previous: Option<View>,
    observers: Vec<ChangeObserver>,
}

impl<S, F, C> fmt::Debug for Session<S, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("view", &self.view)
            .field("previous", &self.previous)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<S: Store, F: Feedback, C: Confirm> Session<S, F, C> {
    /// Creates a session over the given backend and collaborators.
    #[must_use]
    pub fn new(store: S, feedback: F, confirm: C) -> Self {
        Session {
            store: CartStore::new(store),
            feedback,
            confirm,
            view: View::Shop,
            previous: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer invoked with the cart after every mutation.
    pub fn on_change(&mut self, observer: impl FnMut(&Cart) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the currently active view.
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Loads the current cart.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.store.load()
    }

    /// Adds one unit of the named item and notifies observers.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting the cart fails.
    pub fn add_to_cart(&mut self, name: &str, price: Price) -> Result<(), StoreError> {
        self.store.add(name, price)?;
        self.notify();

        Ok(())
    }

    /// Removes one unit of the named item, with click feedback.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting the cart fails.
    pub fn decrease_item(&mut self, name: &str) -> Result<(), StoreError> {
        self.feedback.click();
        self.store.decrease(name)?;
        self.notify();

        Ok(())
    }

    /// Clears the cart after confirmation, with click feedback.
    ///
    /// A declined confirmation leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if deleting the persisted cart fails.
    pub fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.feedback.click();

        if !self.confirm.confirm(CLEAR_PROMPT) {
            return Ok(());
        }

        self.store.clear()?;
        self.notify();

        Ok(())
    }

    /// Navigates to the checkout view, with click feedback.
    pub fn checkout(&mut self) {
        self.feedback.click();
        self.navigate(View::Checkout);
    }

    /// Navigates to the cart view.
    pub fn go_to_cart(&mut self) {
        self.navigate(View::Cart);
    }

    /// Returns to the previously active view, if there is one.
    pub fn back(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.view = previous;
        }
    }

    fn navigate(&mut self, to: View) {
        self.previous = Some(self.view);
        self.view = to;
    }

    fn notify(&mut self) {
        let cart = self.store.load();

        for observer in &mut self.observers {
            observer(&cart);
        }
    }
}
