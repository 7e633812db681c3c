//! Mathematical utilities and nalgebra extensions for the pocket-instruments library

use nalgebra::Vector2;

/// Normalizes an angle in degrees into the `[0, 360)` range
///
/// Works for any finite input, including negative angles and angles
/// beyond a full turn.
///
/// # Example
/// ```
/// use pocket_instruments::wrap_360;
///
/// assert_eq!(wrap_360(-90.0), 270.0);
/// assert_eq!(wrap_360(360.0), 0.0);
/// assert_eq!(wrap_360(725.0), 5.0);
/// ```
pub fn wrap_360(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Extension trait for planar vector operations
pub trait Vector2Ext {
    /// Calculate the magnitude of the vector
    fn magnitude(&self) -> f32;

    /// Clamp the vector magnitude to `max`, preserving direction
    ///
    /// Vectors already within the limit are returned unchanged; the zero
    /// vector is returned as-is for any limit.
    fn clamp_magnitude(&self, max: f32) -> Vector2<f32>;
}

impl Vector2Ext for Vector2<f32> {
    fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn clamp_magnitude(&self, max: f32) -> Vector2<f32> {
        let mag = self.magnitude();
        if mag > max && mag > 0.0 {
            *self * (max / mag)
        } else {
            *self
        }
    }
}
