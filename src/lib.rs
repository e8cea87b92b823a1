//! Satchel
//!
//! A small persisted shopping cart: item quantities and prices in a
//! key-value store, derived counts and totals, text rendering, and
//! randomized click feedback on interactive actions.

pub mod cart;
pub mod clicks;
pub mod entries;
pub mod prices;
pub mod render;
pub mod session;
pub mod store;
