//! Traveling light animation.
//!
//! A bright "head" LED circles the ring with a dim "trail" LED one step
//! behind it. Independently of the movement, the hue of both sweeps back and
//! forth across the full hue circle, one degree per tick.

use log::{debug, trace};
use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::color::{HsiColor, MAX_HUE, MIN_HUE};
use crate::error::ConfigError;
use crate::ring::{next_pixel, Direction, PixelRing, MAX_PIXEL, MIN_PIXEL};

/// Tunables for [`TravelingAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Initial direction of travel around the ring.
    #[serde(default)]
    pub direction: Direction,
    /// Number of ticks between position moves.
    #[serde(default = "default_ticks_per_move")]
    pub ticks_per_move: u32,
    /// Intensity of the trailing LED, in `[0, 1]`.
    #[serde(default = "default_trail_max_intensity")]
    pub trail_max_intensity: f32,
}

const fn default_ticks_per_move() -> u32 {
    5
}

const fn default_trail_max_intensity() -> f32 {
    0.15
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            ticks_per_move: default_ticks_per_move(),
            trail_max_intensity: default_trail_max_intensity(),
        }
    }
}

impl AnimationConfig {
    /// Check that the values can drive an animation.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroTicksPerMove`] or
    /// [`ConfigError::TrailIntensityOutOfRange`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_move == 0 {
            return Err(ConfigError::ZeroTicksPerMove);
        }
        if !(0.0..=1.0).contains(&self.trail_max_intensity) {
            return Err(ConfigError::TrailIntensityOutOfRange {
                value: self.trail_max_intensity,
            });
        }
        Ok(())
    }
}

/// Snapshot of a [`TravelingAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationState {
    pub head: usize,
    pub trail: usize,
    pub color: HsiColor,
    pub hue_direction: Direction,
    pub direction: Direction,
    pub ticks_since_move: u32,
}

/// Head-and-trail light traveling around a [`PixelRing`].
#[derive(Debug)]
pub struct TravelingAnimation<R> {
    ring: R,
    head: usize,
    trail: usize,
    color: HsiColor,
    hue_direction: Direction,
    direction: Direction,
    ticks_per_move: u32,
    trail_max_intensity: f32,
    ticks_since_move: u32,
}

impl<R: PixelRing> TravelingAnimation<R> {
    /// Create an animation painting into `ring`.
    ///
    /// Head and trail start at opposite ends of the ring so the first move
    /// steps the head away from the seam between `MAX_PIXEL` and `MIN_PIXEL`
    /// instead of jumping across it.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if `config` fails [`AnimationConfig::validate`].
    pub fn new(ring: R, config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (head, trail) = match config.direction {
            Direction::Forward => (MIN_PIXEL, MAX_PIXEL),
            Direction::Backward => (MAX_PIXEL, MIN_PIXEL),
        };

        debug!(
            "Traveling animation: direction={:?}, ticks_per_move={}, trail_max_intensity={}",
            config.direction, config.ticks_per_move, config.trail_max_intensity
        );

        Ok(Self {
            ring,
            head,
            trail,
            color: HsiColor::from_hue(MIN_HUE),
            hue_direction: Direction::Forward,
            direction: config.direction,
            ticks_per_move: config.ticks_per_move,
            trail_max_intensity: config.trail_max_intensity,
            ticks_since_move: 0,
        })
    }

    /// Animation with default tunables, traveling in `direction`.
    ///
    /// # Errors
    /// Never fails in practice; the defaults always validate.
    pub fn with_direction(ring: R, direction: Direction) -> Result<Self, ConfigError> {
        Self::new(
            ring,
            AnimationConfig {
                direction,
                ..AnimationConfig::default()
            },
        )
    }

    /// Advance the animation by one frame. No delay is applied.
    pub fn tick(&mut self) {
        self.advance_hue();

        self.ticks_since_move += 1;
        if self.ticks_since_move >= self.ticks_per_move {
            self.ticks_since_move = 0;
            self.head = next_pixel(self.head, self.direction);
            self.trail = next_pixel(self.trail, self.direction);

            // The previous head and trail positions must go dark
            self.ring.set_all_pixels(RGB8::default());
        }

        self.ring.set_pixel(self.head, self.color.to_rgb());
        self.ring.set_pixel(
            self.trail,
            self.color.with_intensity(self.trail_max_intensity).to_rgb(),
        );
    }

    /// Reverse the direction of travel, effective from the next move.
    ///
    /// The trail jumps to the position ahead of the head in the old
    /// direction, which is behind it in the new one.
    pub fn reverse(&mut self) {
        self.trail = next_pixel(self.head, self.direction);
        self.direction = self.direction.reversed();
        debug!(
            "Animation reversed: direction={:?}, head={}, trail={}",
            self.direction, self.head, self.trail
        );
    }

    fn advance_hue(&mut self) {
        let hue = self.color.hue + f32::from(self.hue_direction.step());
        self.color.hue = if hue > MAX_HUE {
            self.flip_hue_direction(MAX_HUE)
        } else if hue < MIN_HUE {
            self.flip_hue_direction(MIN_HUE)
        } else {
            hue
        };
    }

    fn flip_hue_direction(&mut self, boundary: f32) -> f32 {
        self.hue_direction = self.hue_direction.reversed();
        trace!(
            "Hue reached {boundary}, now cycling {:?}",
            self.hue_direction
        );
        boundary
    }

    #[must_use]
    pub fn head(&self) -> usize {
        self.head
    }

    #[must_use]
    pub fn trail(&self) -> usize {
        self.trail
    }

    #[must_use]
    pub fn color(&self) -> HsiColor {
        self.color
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn hue_direction(&self) -> Direction {
        self.hue_direction
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        AnimationState {
            head: self.head,
            trail: self.trail,
            color: self.color,
            hue_direction: self.hue_direction,
            direction: self.direction,
            ticks_since_move: self.ticks_since_move,
        }
    }

    #[must_use]
    pub fn ring(&self) -> &R {
        &self.ring
    }
}
