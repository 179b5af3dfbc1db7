//! Ring geometry and the pixel sink the engines paint into.

use num_integer::Integer;
use rgb::RGB8;
use serde::{Deserialize, Serialize};

/// Index of the first addressable LED on the ring.
pub const MIN_PIXEL: usize = 0;

/// Index of the last addressable LED on the ring.
pub const MAX_PIXEL: usize = 10;

/// Number of LEDs on the ring.
pub const PIXEL_COUNT: usize = MAX_PIXEL - MIN_PIXEL + 1;

/// Direction of travel around the ring (also used for hue cycling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Signed unit step for this direction.
    #[must_use]
    pub const fn step(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Position one step away from `pixel` in `direction`, wrapping around the ring.
///
/// `pixel` is expected to lie within `[MIN_PIXEL, MAX_PIXEL]`.
#[must_use]
pub fn next_pixel(pixel: usize, direction: Direction) -> usize {
    // Ring indices are tiny, so the conversions cannot truncate or lose sign.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let offset = (pixel - MIN_PIXEL) as i32 + i32::from(direction.step());
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let wrapped = offset.mod_floor(&(PIXEL_COUNT as i32));
    #[allow(clippy::cast_sign_loss)]
    let pixel = MIN_PIXEL + wrapped as usize;
    pixel
}

/// Output sink for a ring of addressable LEDs.
///
/// Writes are fire-and-forget; implementations are expected to accept any
/// index in `[MIN_PIXEL, MAX_PIXEL]`.
pub trait PixelRing {
    /// Set every pixel on the ring to `color`.
    fn set_all_pixels(&mut self, color: RGB8);

    /// Set the pixel at `index` to `color`.
    fn set_pixel(&mut self, index: usize, color: RGB8);
}

impl<T: PixelRing + ?Sized> PixelRing for &mut T {
    fn set_all_pixels(&mut self, color: RGB8) {
        (**self).set_all_pixels(color);
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        (**self).set_pixel(index, color);
    }
}

/// In-memory ring that records the last color written to each pixel.
///
/// Host drivers paint into a `FrameBuffer` and flush [`FrameBuffer::pixels`]
/// to the real strip once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [RGB8; PIXEL_COUNT],
}

impl FrameBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pixels: [RGB8::default(); PIXEL_COUNT],
        }
    }

    /// Current color of every pixel, in ring order.
    #[must_use]
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    /// Current color of the pixel at `index`, or `None` if it is off the ring.
    #[must_use]
    pub fn pixel(&self, index: usize) -> Option<RGB8> {
        index
            .checked_sub(MIN_PIXEL)
            .and_then(|offset| self.pixels.get(offset))
            .copied()
    }

    /// Indices of all pixels that are not black.
    pub fn lit(&self) -> impl Iterator<Item = usize> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, color)| **color != RGB8::default())
            .map(|(offset, _)| MIN_PIXEL + offset)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelRing for FrameBuffer {
    fn set_all_pixels(&mut self, color: RGB8) {
        self.pixels = [color; PIXEL_COUNT];
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        debug_assert!(
            (MIN_PIXEL..=MAX_PIXEL).contains(&index),
            "set_pixel: index {index} outside the ring"
        );
        if let Some(pixel) = index
            .checked_sub(MIN_PIXEL)
            .and_then(|offset| self.pixels.get_mut(offset))
        {
            *pixel = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_pixel_wraps_forward() {
        assert_eq!(next_pixel(MIN_PIXEL, Direction::Forward), MIN_PIXEL + 1);
        assert_eq!(next_pixel(MAX_PIXEL, Direction::Forward), MIN_PIXEL);
    }

    #[test]
    fn test_next_pixel_wraps_backward() {
        assert_eq!(next_pixel(MAX_PIXEL, Direction::Backward), MAX_PIXEL - 1);
        assert_eq!(next_pixel(MIN_PIXEL, Direction::Backward), MAX_PIXEL);
    }

    #[test]
    fn test_full_lap_returns_to_start() {
        for direction in [Direction::Forward, Direction::Backward] {
            for start in MIN_PIXEL..=MAX_PIXEL {
                let end = (0..PIXEL_COUNT).fold(start, |pixel, _| next_pixel(pixel, direction));
                assert_eq!(end, start, "lap from {start} going {direction:?}");
            }
        }
    }

    #[test]
    fn test_forward_then_backward_is_identity() {
        for pixel in MIN_PIXEL..=MAX_PIXEL {
            let there = next_pixel(pixel, Direction::Forward);
            assert_eq!(next_pixel(there, Direction::Backward), pixel);
        }
    }

    #[test]
    fn test_direction_reversal_is_involution() {
        for direction in [Direction::Forward, Direction::Backward] {
            assert_ne!(direction.reversed(), direction);
            assert_eq!(direction.reversed().reversed(), direction);
        }
    }

    #[test]
    fn test_frame_buffer_records_writes() {
        let mut frame = FrameBuffer::new();
        assert_eq!(frame.lit().count(), 0);

        frame.set_pixel(3, RGB8::new(1, 2, 3));
        assert_eq!(frame.pixel(3), Some(RGB8::new(1, 2, 3)));
        assert_eq!(frame.lit().collect::<Vec<_>>(), vec![3]);

        frame.set_all_pixels(RGB8::default());
        assert_eq!(frame.lit().count(), 0);
        assert_eq!(frame.pixel(MAX_PIXEL + 1), None);
    }

    #[test]
    fn test_mut_ref_forwards_to_ring() {
        fn paint<R: PixelRing>(mut ring: R) {
            ring.set_pixel(MAX_PIXEL, RGB8::new(9, 9, 9));
        }

        let mut frame = FrameBuffer::new();
        paint(&mut frame);
        assert_eq!(frame.pixel(MAX_PIXEL), Some(RGB8::new(9, 9, 9)));
    }
}
