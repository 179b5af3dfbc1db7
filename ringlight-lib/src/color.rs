//! Hue/saturation/intensity colors and their conversion to ring pixels.

use rgb::RGB8;
use serde::{Deserialize, Serialize};

/// Hue of pure red, in degrees.
pub const RED_HUE: f32 = 0.0;

/// Hue of pure green, in degrees.
pub const GREEN_HUE: f32 = 120.0;

/// Hue of pure blue, in degrees.
pub const BLUE_HUE: f32 = 240.0;

/// Lowest hue the engines cycle through.
pub const MIN_HUE: f32 = 0.0;

/// Highest hue the engines cycle through.
pub const MAX_HUE: f32 = 360.0;

/// A color expressed as hue (degrees), saturation and intensity.
///
/// Saturation and intensity are nominally in `[0, 1]`. No range checks are
/// done on construction; callers keep the hue where they want it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsiColor {
    pub hue: f32,
    pub saturation: f32,
    pub intensity: f32,
}

impl HsiColor {
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, intensity: f32) -> Self {
        Self {
            hue,
            saturation,
            intensity,
        }
    }

    /// Fully saturated, full intensity color of the given hue.
    #[must_use]
    pub const fn from_hue(hue: f32) -> Self {
        Self::new(hue, 1.0, 1.0)
    }

    /// Same hue and saturation, different intensity.
    #[must_use]
    pub const fn with_intensity(self, intensity: f32) -> Self {
        Self { intensity, ..self }
    }

    /// Convert to the ring's RGB pixel format.
    ///
    /// The hue circle is split into three 120° sectors. Inside a sector the
    /// leading channel gets `I/3 * (1 + S*cos(h)/cos(60° - h))`, the next one
    /// the remainder, and the trailing channel `I/3 * (1 - S)`.
    #[must_use]
    pub fn to_rgb(self) -> RGB8 {
        let hue = self.hue.rem_euclid(MAX_HUE);
        let saturation = self.saturation.clamp(0.0, 1.0);
        let intensity = self.intensity.clamp(0.0, 1.0);

        let (sector, angle) = if hue < 120.0 {
            (0, hue)
        } else if hue < 240.0 {
            (1, hue - 120.0)
        } else {
            (2, hue - 240.0)
        };

        let angle = angle.to_radians();
        let ratio = angle.cos() / (60.0_f32.to_radians() - angle).cos();
        let third = intensity / 3.0;

        let leading = to_channel(third * (1.0 + saturation * ratio));
        let following = to_channel(third * (1.0 + saturation * (1.0 - ratio)));
        let trailing = to_channel(third * (1.0 - saturation));

        match sector {
            0 => RGB8::new(leading, following, trailing),
            1 => RGB8::new(trailing, leading, following),
            _ => RGB8::new(following, trailing, leading),
        }
    }
}

impl From<HsiColor> for RGB8 {
    fn from(color: HsiColor) -> Self {
        color.to_rgb()
    }
}

/// Scale a `[0, 1]` channel value to `u8`, saturating at both ends.
#[inline]
fn to_channel(value: f32) -> u8 {
    // Clamped to [0, 255] first, so the cast cannot truncate or go negative.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let channel = (value * 255.0).round().clamp(0.0, 255.0) as u8;
    channel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(HsiColor::from_hue(RED_HUE).to_rgb(), RGB8::new(255, 0, 0));
        assert_eq!(HsiColor::from_hue(GREEN_HUE).to_rgb(), RGB8::new(0, 255, 0));
        assert_eq!(HsiColor::from_hue(BLUE_HUE).to_rgb(), RGB8::new(0, 0, 255));
    }

    #[test]
    fn test_full_circle_is_red() {
        assert_eq!(HsiColor::from_hue(MAX_HUE).to_rgb(), RGB8::new(255, 0, 0));
    }

    #[test]
    fn test_secondary_hue_splits_evenly() {
        // Yellow sits halfway between red and green
        let yellow = HsiColor::from_hue(60.0).to_rgb();
        assert!((127..=128).contains(&yellow.r), "r = {}", yellow.r);
        assert!((127..=128).contains(&yellow.g), "g = {}", yellow.g);
        assert_eq!(yellow.b, 0);
    }

    #[test]
    fn test_zero_intensity_is_black() {
        for hue in [0.0, 45.0, 120.0, 300.0] {
            let color = HsiColor::new(hue, 1.0, 0.0);
            assert_eq!(color.to_rgb(), RGB8::default());
        }
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        let grey = HsiColor::new(200.0, 0.0, 1.0).to_rgb();
        assert_eq!(grey, RGB8::new(85, 85, 85));
    }

    #[test]
    fn test_with_intensity_keeps_hue() {
        let dim = HsiColor::from_hue(GREEN_HUE).with_intensity(0.15);
        assert!((dim.hue - GREEN_HUE).abs() < f32::EPSILON);
        assert!((dim.intensity - 0.15).abs() < f32::EPSILON);

        let rgb = RGB8::from(dim);
        assert_eq!(rgb.r, 0);
        assert_eq!(rgb.b, 0);
        assert!(rgb.g > 0 && rgb.g < 255);
    }
}
