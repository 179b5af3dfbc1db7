//! Autoplayer for the bounce game.

use log::info;
use ringlight_lib::{BounceGame, LedSide, PixelRing};

/// What happened during one autoplayed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    /// The active LED moved one step.
    Moved,
    /// The LED hit a boundary; that side was narrowed and the LED turned around.
    Bounced,
    /// The LED hit a boundary that cannot be narrowed any further.
    GameOver,
}

/// Play one frame: advance, and on a refused advance narrow the side the
/// LED is on and send it back the other way.
pub fn autoplay_step<R: PixelRing>(game: &mut BounceGame<R>) -> Play {
    if game.tick_led_advance() {
        return Play::Moved;
    }

    if !game.reduce_available_leds(LedSide::Neither) {
        let state = game.led_state();
        info!(
            "Game over at LED {}: allowed range {}..={}",
            state.active_led, state.min_allowed_led, state.max_allowed_led
        );
        return Play::GameOver;
    }

    game.reverse_led_direction();
    Play::Bounced
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringlight_lib::{Direction, FrameBuffer, GameConfig};

    #[test]
    fn test_autoplay_narrows_until_game_over() {
        let mut game = BounceGame::new(FrameBuffer::new(), GameConfig::default()).unwrap();
        let mut bounces = 0;
        let mut frames = 0;

        loop {
            frames += 1;
            assert!(frames < 1000, "autoplay did not terminate");
            match autoplay_step(&mut game) {
                Play::Moved => {}
                Play::Bounced => bounces += 1,
                Play::GameOver => break,
            }
        }

        // Four LEDs can be taken from each side of the 0..=10 ring
        assert_eq!(bounces, 8);
        let state = game.led_state();
        assert_eq!(state.min_allowed_led, 4);
        assert_eq!(state.max_allowed_led, 6);
    }

    #[test]
    fn test_bounce_reverses_direction() {
        let mut game = BounceGame::new(FrameBuffer::new(), GameConfig::default()).unwrap();
        for _ in 0..5 {
            assert_eq!(autoplay_step(&mut game), Play::Moved);
        }
        assert_eq!(autoplay_step(&mut game), Play::Bounced);

        let state = game.led_state();
        assert_eq!(state.active_direction, Direction::Backward);
        assert_eq!(state.max_allowed_led, 9);
        assert_eq!(autoplay_step(&mut game), Play::Moved);
        assert_eq!(game.led_state().active_led, 9);
    }
}
