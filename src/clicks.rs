//! Click feedback

use std::io::Write;

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

/// The fixed set of click sound assets.
pub const CLICK_SOUNDS: [&str; 5] = [
    "kenney_interface-sounds/Audio/click_001.ogg",
    "kenney_interface-sounds/Audio/click_002.ogg",
    "kenney_interface-sounds/Audio/click_003.ogg",
    "kenney_interface-sounds/Audio/click_004.ogg",
    "kenney_interface-sounds/Audio/click_005.ogg",
];

/// Picks one of the click sounds uniformly at random.
pub fn random_click<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CLICK_SOUNDS
        .choose(rng)
        .copied()
        .unwrap_or("kenney_interface-sounds/Audio/click_001.ogg")
}

/// Audio feedback for interactive cart actions.
pub trait Feedback {
    /// Plays a click.
    fn click(&mut self);
}

/// Feedback that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn click(&mut self) {}
}

/// Plays clicks by writing the chosen asset path to an optional sink.
///
/// An absent sink, or a sink that fails to accept the write, is silently
/// ignored; feedback never interrupts the action that triggered it.
#[derive(Debug)]
pub struct ClickPlayer<W, R = ThreadRng> {
    sink: Option<W>,
    rng: R,
}

impl<W: Write> ClickPlayer<W> {
    /// Creates a player over the given sink.
    #[must_use]
    pub fn new(sink: Option<W>) -> Self {
        ClickPlayer {
            sink,
            rng: rand::thread_rng(),
        }
    }
}

impl<W: Write, R: Rng> ClickPlayer<W, R> {
    /// Creates a player with an explicit random source.
    #[must_use]
    pub fn with_rng(sink: Option<W>, rng: R) -> Self {
        ClickPlayer { sink, rng }
    }
}

impl<W: Write, R: Rng> Feedback for ClickPlayer<W, R> {
    fn click(&mut self) {
        let Some(sink) = &mut self.sink else {
            return;
        };

        let sound = random_click(&mut self.rng);
        writeln!(sink, "{sound}").ok();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn random_click_only_yields_known_assets() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let sound = random_click(&mut rng);

            assert!(CLICK_SOUNDS.contains(&sound), "unknown asset: {sound}");
        }
    }

    #[test]
    fn random_click_reaches_every_asset() {
        let mut rng = rand::thread_rng();
        let mut seen = [false; 5];

        for _ in 0..500 {
            let sound = random_click(&mut rng);

            for (slot, asset) in seen.iter_mut().zip(CLICK_SOUNDS) {
                if sound == asset {
                    *slot = true;
                }
            }
        }

        assert!(seen.iter().all(|seen| *seen), "every asset should appear");
    }

    #[test]
    fn player_writes_a_known_asset_to_the_sink() {
        let mut player = ClickPlayer::with_rng(Some(Vec::new()), StepRng::new(0, 1));

        player.click();

        let written = player.sink.unwrap_or_default();
        let line = String::from_utf8_lossy(&written);

        assert!(
            CLICK_SOUNDS.contains(&line.trim()),
            "sink should hold one asset path, got {line:?}"
        );
    }

    #[test]
    fn player_without_a_sink_is_silent() {
        let mut player: ClickPlayer<Vec<u8>, _> = ClickPlayer::with_rng(None, StepRng::new(0, 1));

        player.click();
    }
}
