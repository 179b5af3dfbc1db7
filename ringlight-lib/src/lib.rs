//! LED ring animation logic for the ringlight button device
//!
//! This library provides the per-tick state logic for a circular ring of
//! addressable LEDs: a traveling, color-cycling light ([`TravelingAnimation`])
//! and a single-LED bounce game with a shrinking play area ([`BounceGame`]).
//! It is hardware-agnostic; the engines paint into any [`PixelRing`] and the
//! caller decides how often to tick them.

pub mod animation;
pub mod color;
pub mod error;
pub mod game;
pub mod ring;

pub use animation::{AnimationConfig, AnimationState, TravelingAnimation};
pub use color::HsiColor;
pub use error::ConfigError;
pub use game::{calculate_led_color, BounceGame, GameConfig, LedSide, LedState};
pub use rgb::RGB8;
pub use ring::{next_pixel, Direction, FrameBuffer, PixelRing, MAX_PIXEL, MIN_PIXEL, PIXEL_COUNT};
