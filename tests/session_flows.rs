//! Interactive session flows: confirmation, observers, navigation, clicks.

use std::cell::RefCell;
use std::rc::Rc;

use testresult::TestResult;

use satchel::{
    clicks::{CLICK_SOUNDS, ClickPlayer, Silent},
    prices::Price,
    render,
    session::{AutoConfirm, Session, View},
    store::MemoryStore,
};

#[test]
fn declined_clear_keeps_the_cart() -> TestResult {
    let mut session = Session::new(MemoryStore::new(), Silent, AutoConfirm(false));
    session.add_to_cart("Sword", Price::from_minor(1000))?;

    session.clear_cart()?;

    assert_eq!(session.cart().count(), 1);

    Ok(())
}

#[test]
fn confirmed_clear_renders_the_empty_message() -> TestResult {
    let mut session = Session::new(MemoryStore::new(), Silent, AutoConfirm(true));
    session.add_to_cart("Sword", Price::from_minor(1000))?;

    session.clear_cart()?;

    assert_eq!(render::render_cart(&session.cart()), "Your cart is empty.");

    Ok(())
}

#[test]
fn observers_render_the_latest_cart() -> TestResult {
    let rendered = Rc::new(RefCell::new(String::new()));
    let target = Rc::clone(&rendered);

    let mut session = Session::new(MemoryStore::new(), Silent, AutoConfirm(true));
    session.on_change(move |cart| {
        *target.borrow_mut() = render::render_cart(cart);
    });

    session.add_to_cart("Sword", Price::from_minor(1000))?;

    assert_eq!(&*rendered.borrow(), "Sword — $10.00 × 1 = $10.00\nTotal: $10.00");

    session.decrease_item("Sword")?;

    assert_eq!(&*rendered.borrow(), "Your cart is empty.");

    Ok(())
}

#[test]
fn checkout_then_back_returns_to_the_prior_view() -> TestResult {
    let mut session = Session::new(MemoryStore::new(), Silent, AutoConfirm(true));
    session.add_to_cart("Sword", Price::from_minor(1000))?;

    session.go_to_cart();
    session.checkout();

    assert_eq!(session.view(), View::Checkout);
    assert_eq!(
        render::render_checkout(&session.cart()),
        "Sword — $10.00 × 1 = $10.00\nTotal: $10.00"
    );

    session.back();

    assert_eq!(session.view(), View::Cart);

    Ok(())
}

#[test]
fn interactive_actions_play_known_click_assets() -> TestResult {
    let sink = Rc::new(RefCell::new(Vec::new()));

    struct SharedSink(Rc<RefCell<Vec<u8>>>);

    impl std::io::Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let feedback = ClickPlayer::new(Some(SharedSink(Rc::clone(&sink))));
    let mut session = Session::new(MemoryStore::new(), feedback, AutoConfirm(true));

    session.add_to_cart("Sword", Price::from_minor(1000))?;
    session.decrease_item("Sword")?;
    session.clear_cart()?;
    session.checkout();

    let written = String::from_utf8(sink.borrow().clone())?;
    let played: Vec<&str> = written.lines().collect();

    assert_eq!(played.len(), 3, "decrease, clear and checkout each click once");

    for sound in played {
        assert!(CLICK_SOUNDS.contains(&sound), "unknown asset: {sound}");
    }

    Ok(())
}

#[test]
fn session_without_observers_mutates_quietly() -> TestResult {
    let mut session = Session::new(MemoryStore::new(), Silent, AutoConfirm(true));
    session.add_to_cart("Potion", Price::from_minor(250))?;

    assert_eq!(session.cart().total().to_string(), "2.50");

    Ok(())
}
