//! A storefront demo over the file-backed cart store.

use std::io::{self, Stderr};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use satchel::{
    clicks::ClickPlayer,
    prices::Price,
    render,
    session::{AutoConfirm, Confirm, Session, TerminalConfirm},
    store::{FileStore, StoreError},
};

/// Arguments for the storefront demo.
#[derive(Debug, Parser)]
#[command(name = "satchel")]
struct Args {
    /// Path of the persisted storage file
    #[clap(short, long, default_value = "satchel.json")]
    store: PathBuf,

    /// Answer yes to confirmation prompts
    #[clap(short, long)]
    yes: bool,

    /// Mute click feedback
    #[clap(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

/// Cart operations.
#[derive(Debug, Subcommand)]
enum Command {
    /// Add one unit of an item to the cart
    Add {
        /// Item name
        name: String,

        /// Unit price; malformed values fall back to 0.00
        price: String,
    },

    /// Remove one unit of an item from the cart
    Decrease {
        /// Item name
        name: String,
    },

    /// Show the cart contents
    Show,

    /// Show the number of items in the cart
    Count,

    /// Show the cart total
    Total,

    /// Delete the cart after confirmation
    Clear,

    /// Show the checkout recap
    Checkout,
}

fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(TerminalConfirm)
    };

    let sink: Option<Stderr> = (!args.quiet).then(io::stderr);
    let feedback = ClickPlayer::new(sink);

    let mut session = Session::new(FileStore::new(args.store), feedback, confirm);

    match args.command {
        Command::Add { name, price } => {
            session.add_to_cart(&name, Price::parse(&price))?;
            println!("{}", render::cart_table(&session.cart()));
        }
        Command::Decrease { name } => {
            session.decrease_item(&name)?;
            println!("{}", render::cart_table(&session.cart()));
        }
        Command::Show => {
            session.go_to_cart();
            println!("{}", render::render_cart(&session.cart()));
        }
        Command::Count => {
            println!("{}", session.cart().count());
        }
        Command::Total => {
            println!("${}", session.cart().total());
        }
        Command::Clear => {
            session.clear_cart()?;
            println!("{}", render::render_cart(&session.cart()));
        }
        Command::Checkout => {
            session.checkout();
            println!("{}", render::render_checkout(&session.cart()));
        }
    }

    Ok(())
}
