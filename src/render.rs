//! Rendering

use std::fmt::Write;

use tabled::{Table, Tabled, settings::Style};

use crate::{cart::Cart, entries::Entry};

/// The message shown when the cart has no entries.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Formats a single line item.
pub fn line_item(name: &str, entry: &Entry) -> String {
    format!(
        "{name} — ${price} × {quantity} = ${subtotal}",
        price = entry.price(),
        quantity = entry.quantity(),
        subtotal = entry.subtotal(),
    )
}

/// Renders the cart view: one line per item followed by the total.
#[must_use]
pub fn render_cart(cart: &Cart) -> String {
    render_lines_with_total(cart)
}

/// Renders the checkout view.
///
/// Same content as the cart view; checkout is a read-only recap of the
/// items and total.
#[must_use]
pub fn render_checkout(cart: &Cart) -> String {
    render_lines_with_total(cart)
}

fn render_lines_with_total(cart: &Cart) -> String {
    if cart.is_empty() {
        return EMPTY_CART_MESSAGE.to_string();
    }

    let mut output = String::new();

    for (name, entry) in cart.iter() {
        let line = line_item(name, entry);
        writeln!(output, "{line}").ok();
    }

    write!(output, "Total: ${total}", total = cart.total()).ok();

    output
}

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

impl LineItemRow {
    fn new(name: &str, entry: &Entry) -> Self {
        LineItemRow {
            item: name.to_string(),
            price: format!("${}", entry.price()),
            quantity: entry.quantity(),
            subtotal: format!("${}", entry.subtotal()),
        }
    }
}

/// Renders the cart as a terminal table with a trailing total line.
#[must_use]
pub fn cart_table(cart: &Cart) -> String {
    if cart.is_empty() {
        return EMPTY_CART_MESSAGE.to_string();
    }

    let rows: Vec<LineItemRow> = cart
        .iter()
        .map(|(name, entry)| LineItemRow::new(name, entry))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    format!("{table}\nTotal: ${total}", total = cart.total())
}
