use derive_more::{Display, Error};

/// Rejected engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error)]
pub enum ConfigError {
    /// A position move needs at least one tick.
    #[display("ticks_per_move must be at least 1")]
    ZeroTicksPerMove,
    #[display("trail_max_intensity {value} is outside [0, 1]")]
    TrailIntensityOutOfRange { value: f32 },
    #[display("allowed LEDs {min}..={max} do not fit on the ring")]
    BoundsOutsideRing { min: usize, max: usize },
    #[display("minimum allowed LED {min} is above maximum {max}")]
    InvertedBounds { min: usize, max: usize },
    /// The midpoint is derived from the width of the range, so narrow ranges
    /// far from the start of the ring can leave it outside the range.
    #[display("midpoint {mid} falls outside allowed LEDs {min}..={max}")]
    MidpointOutsideBounds { min: usize, max: usize, mid: usize },
    #[display("hue {hue} is not a finite number")]
    NonFiniteHue { hue: f32 },
}
