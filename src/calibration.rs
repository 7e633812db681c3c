//! Zero-point calibration for the tilt engine
//!
//! Lets the user define a custom "zero" orientation: the raw acceleration
//! sample present at the moment of calibration is captured as an offset and
//! subtracted from every subsequent sample. Calibration lives for the
//! session only; it is replaced by the next capture and lost on restart.

use nalgebra::Vector2;

/// Captured zero-point offset
///
/// Wraps the raw sensor reading taken when the user pressed "zero". The
/// default value is the origin, meaning no calibration has happened and
/// samples pass through unchanged.
///
/// # Example
/// ```
/// use nalgebra::Vector2;
/// use pocket_instruments::ZeroOffset;
///
/// let resting = Vector2::new(0.4, -0.2);
/// let zero = ZeroOffset::capture(resting);
///
/// // The very next identical sample reads as perfectly level
/// assert_eq!(zero.apply(resting), Vector2::zeros());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZeroOffset {
    offset: Vector2<f32>,
}

impl ZeroOffset {
    /// Capture the current raw reading as the new zero point
    ///
    /// The *raw* sample must be passed here, not an already-calibrated
    /// one; capturing an effective reading would compound the previous
    /// offset.
    pub fn capture(raw: Vector2<f32>) -> Self {
        Self { offset: raw }
    }

    /// Apply the calibration: `effective = raw - offset`, per axis
    pub fn apply(&self, raw: Vector2<f32>) -> Vector2<f32> {
        raw - self.offset
    }

    /// The stored offset vector
    pub fn offset(&self) -> Vector2<f32> {
        self.offset
    }
}
