//! Single-LED bounce game.
//!
//! One active LED moves back and forth within an allowed range of the ring.
//! Its color slides from the safe hue at the midpoint of the range toward the
//! danger hue as it nears either boundary. The range can be narrowed one LED
//! at a time to make the game harder; narrowed-away positions are painted
//! with the unavailable color.

use log::{debug, warn};
use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::color::{HsiColor, GREEN_HUE, RED_HUE};
use crate::error::ConfigError;
use crate::ring::{next_pixel, Direction, PixelRing, MAX_PIXEL, MIN_PIXEL};

/// Tunables for [`BounceGame`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lowest LED the active LED may initially reach.
    #[serde(default = "default_min_allowed_led")]
    pub min_allowed_led: usize,
    /// Highest LED the active LED may initially reach.
    #[serde(default = "default_max_allowed_led")]
    pub max_allowed_led: usize,
    /// Hue shown at the midpoint of the range.
    #[serde(default = "default_safe_hue")]
    pub safe_hue: f32,
    /// Hue approached at the boundaries of the range.
    #[serde(default = "default_danger_hue")]
    pub danger_hue: f32,
    /// Hue painted on LEDs outside the allowed range.
    #[serde(default = "default_unavailable_hue")]
    pub unavailable_hue: f32,
}

const fn default_min_allowed_led() -> usize {
    MIN_PIXEL
}

const fn default_max_allowed_led() -> usize {
    MAX_PIXEL
}

const fn default_safe_hue() -> f32 {
    GREEN_HUE
}

const fn default_danger_hue() -> f32 {
    RED_HUE
}

const fn default_unavailable_hue() -> f32 {
    RED_HUE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_allowed_led: default_min_allowed_led(),
            max_allowed_led: default_max_allowed_led(),
            safe_hue: default_safe_hue(),
            danger_hue: default_danger_hue(),
            unavailable_hue: default_unavailable_hue(),
        }
    }
}

impl GameConfig {
    /// Midpoint of the configured range: half its width, rounded down.
    #[must_use]
    pub const fn mid_point(&self) -> usize {
        self.max_allowed_led.saturating_sub(self.min_allowed_led) / 2
    }

    /// Check that the range fits on the ring and contains its midpoint, and
    /// that every hue is a number.
    ///
    /// # Errors
    /// Returns [`ConfigError::BoundsOutsideRing`], [`ConfigError::InvertedBounds`],
    /// [`ConfigError::MidpointOutsideBounds`] or [`ConfigError::NonFiniteHue`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_allowed_led, self.max_allowed_led);

        if !(MIN_PIXEL..=MAX_PIXEL).contains(&min) || max > MAX_PIXEL {
            return Err(ConfigError::BoundsOutsideRing { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }

        let mid = self.mid_point();
        if !(min..=max).contains(&mid) {
            return Err(ConfigError::MidpointOutsideBounds { min, max, mid });
        }

        if let Some(hue) = [self.safe_hue, self.danger_hue, self.unavailable_hue]
            .into_iter()
            .find(|hue| !hue.is_finite())
        {
            return Err(ConfigError::NonFiniteHue { hue });
        }
        Ok(())
    }
}

/// Side of the allowed range to narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedSide {
    Minimum,
    Maximum,
    /// Pick the side from where the active LED is and where it is heading.
    #[default]
    Neither,
}

/// Snapshot of the game.
///
/// `min_allowed_led <= led_mid_point <= max_allowed_led` always holds, and the
/// bounds only ever move toward the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedState {
    pub active_led: usize,
    pub led_mid_point: usize,
    pub min_allowed_led: usize,
    pub max_allowed_led: usize,
    pub active_direction: Direction,
    pub active_color: HsiColor,
}

impl LedState {
    /// Whether the position one step in the current direction lies within
    /// the allowed range.
    ///
    /// The step is taken without wraparound: the allowed range never spans
    /// the seam of the ring.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        let destination = match self.active_direction {
            Direction::Backward => self.active_led.checked_sub(1),
            Direction::Forward => self.active_led.checked_add(1),
        };
        let allowed = self.min_allowed_led..=self.max_allowed_led;
        destination.is_some_and(|led| allowed.contains(&led))
    }

    /// Which side of the midpoint the active LED is on.
    #[must_use]
    pub fn side(&self) -> LedSide {
        use std::cmp::Ordering;

        match self.active_led.cmp(&self.led_mid_point) {
            Ordering::Less => LedSide::Minimum,
            Ordering::Greater => LedSide::Maximum,
            Ordering::Equal => LedSide::Neither,
        }
    }
}

/// Color for the active LED in `state`.
///
/// At the midpoint this is the pure safe hue. Elsewhere the current hue is
/// stepped by `ceil(|safe - danger| / range)`, where `range` is the distance
/// from the midpoint to the boundary on the LED's side: toward the danger hue
/// when the LED is moving away from the midpoint, back toward the safe hue
/// when it is returning. The result never leaves the span between the two
/// hues.
///
/// | side    | direction | moving      | hue step        |
/// |---------|-----------|-------------|-----------------|
/// | below   | Backward  | away        | toward danger   |
/// | below   | Forward   | toward mid  | toward safe     |
/// | above   | Forward   | away        | toward danger   |
/// | above   | Backward  | toward mid  | toward safe     |
#[must_use]
pub fn calculate_led_color(state: &LedState, safe_hue: f32, danger_hue: f32) -> HsiColor {
    let (led_range, moving_away) = match state.side() {
        LedSide::Neither => return HsiColor::from_hue(safe_hue),
        LedSide::Minimum => (
            state.led_mid_point - state.min_allowed_led,
            state.active_direction == Direction::Backward,
        ),
        LedSide::Maximum => (
            state.max_allowed_led - state.led_mid_point,
            state.active_direction == Direction::Forward,
        ),
    };

    // Ring ranges are tiny, the conversion is exact
    #[allow(clippy::cast_precision_loss)]
    let hue_delta = ((safe_hue - danger_hue).abs() / led_range.max(1) as f32).ceil();
    let toward_danger = if danger_hue >= safe_hue { 1.0 } else { -1.0 };
    let step = if moving_away {
        hue_delta * toward_danger
    } else {
        -hue_delta * toward_danger
    };

    let low = safe_hue.min(danger_hue);
    let high = safe_hue.max(danger_hue);
    HsiColor::from_hue((state.active_color.hue + step).clamp(low, high))
}

/// Bounce game painting into a [`PixelRing`].
#[derive(Debug)]
pub struct BounceGame<R> {
    ring: R,
    state: LedState,
    safe_hue: f32,
    danger_hue: f32,
    unavailable_color: HsiColor,
}

impl<R: PixelRing> BounceGame<R> {
    /// Create a game with the active LED at the midpoint, heading forward.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if `config` fails [`GameConfig::validate`].
    pub fn new(ring: R, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mid = config.mid_point();
        debug!(
            "Bounce game: allowed={}..={}, midpoint={mid}",
            config.min_allowed_led, config.max_allowed_led
        );

        Ok(Self {
            ring,
            state: LedState {
                active_led: mid,
                led_mid_point: mid,
                min_allowed_led: config.min_allowed_led,
                max_allowed_led: config.max_allowed_led,
                active_direction: Direction::Forward,
                active_color: HsiColor::from_hue(config.safe_hue),
            },
            safe_hue: config.safe_hue,
            danger_hue: config.danger_hue,
            unavailable_color: HsiColor::from_hue(config.unavailable_hue),
        })
    }

    /// Move the active LED one step and repaint the ring.
    ///
    /// Returns `false` without touching any state if the step would cross
    /// the allowed range; the caller treats that as a miss.
    #[must_use]
    pub fn tick_led_advance(&mut self) -> bool {
        let mut state = self.state;

        if !state.can_advance() {
            warn!(
                "Cannot advance: active={}, allowed={}..={}, direction={:?}",
                state.active_led,
                state.min_allowed_led,
                state.max_allowed_led,
                state.active_direction
            );
            return false;
        }

        state.active_led = next_pixel(state.active_led, state.active_direction);
        state.active_color = calculate_led_color(&state, self.safe_hue, self.danger_hue);
        self.state = state;

        self.repaint();
        true
    }

    fn repaint(&mut self) {
        let state = &self.state;
        let unavailable = self.unavailable_color.to_rgb();

        self.ring.set_all_pixels(RGB8::default());
        self.ring
            .set_pixel(state.active_led, state.active_color.to_rgb());

        // Narrowed-away positions on both ends of the ring
        let below = MIN_PIXEL..state.min_allowed_led;
        let above = state.max_allowed_led + 1..=MAX_PIXEL;
        for index in below.chain(above) {
            self.ring.set_pixel(index, unavailable);
        }
    }

    /// Flip the direction of the active LED, effective from the next advance.
    pub fn reverse_led_direction(&mut self) {
        self.state.active_direction = self.state.active_direction.reversed();
        debug!(
            "Active LED reversed at {}: {:?}",
            self.state.active_led, self.state.active_direction
        );
    }

    #[must_use]
    pub fn led_state(&self) -> LedState {
        self.state
    }

    /// Narrow the allowed range by one LED on `side`.
    ///
    /// With [`LedSide::Neither`] the side the active LED is on is narrowed, or,
    /// at the midpoint, the side it is heading toward. A bound never moves
    /// onto the midpoint; if `side` has no room left, returns `false` and
    /// leaves the range alone.
    #[must_use]
    pub fn reduce_available_leds(&mut self, side: LedSide) -> bool {
        let state = &mut self.state;

        let side = match side {
            LedSide::Neither => match state.side() {
                LedSide::Neither => match state.active_direction {
                    Direction::Forward => LedSide::Maximum,
                    Direction::Backward => LedSide::Minimum,
                },
                inferred => inferred,
            },
            explicit => explicit,
        };

        match side {
            LedSide::Minimum if state.min_allowed_led + 1 < state.led_mid_point => {
                state.min_allowed_led += 1;
                debug!("Minimum allowed LED raised to {}", state.min_allowed_led);
                return true;
            }
            LedSide::Maximum if state.max_allowed_led > state.led_mid_point + 1 => {
                state.max_allowed_led -= 1;
                debug!("Maximum allowed LED lowered to {}", state.max_allowed_led);
                return true;
            }
            _ => {}
        }

        warn!(
            "Cannot reduce {side:?}: allowed={}..={}, midpoint={}",
            state.min_allowed_led, state.max_allowed_led, state.led_mid_point
        );
        false
    }

    #[must_use]
    pub fn ring(&self) -> &R {
        &self.ring
    }
}
