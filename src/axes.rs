//! Sensor axes alignment for different device conventions
//!
//! This module remaps planar sensor axes to the screen axes the display
//! logic expects. Platforms report gravity-inclusive acceleration with
//! different sign conventions, so the shell resolves an alignment once at
//! startup and applies it to every raw sample before any other processing.
//!
//! # Example
//! ```
//! use nalgebra::Vector2;
//! use pocket_instruments::{AxesAlignment, axes_swap};
//!
//! // Raw reading from a platform with both axes inverted
//! let sensor = Vector2::new(1.0, -2.0);
//!
//! let screen = axes_swap(sensor, AxesAlignment::NxNy);
//!
//! assert_eq!(screen.x, -1.0);
//! assert_eq!(screen.y, 2.0);
//! ```

use nalgebra::Vector2;

/// Axes alignment describing the sensor axes relative to the screen axes.
///
/// Each variant name describes where each screen axis comes from in sensor
/// coordinates. The two letter-pairs specify the source for screen X and Y
/// respectively.
///
/// For example, `NyPx` means:
/// - Screen X = -Sensor Y (first pair: Ny)
/// - Screen Y = +Sensor X (second pair: Px)
///
/// The naming convention uses:
/// - `P` = Positive (same direction)
/// - `N` = Negative (inverted direction)
/// - `x`, `y` = which sensor axis to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxesAlignment {
    /// +X+Y (identity - no remapping)
    #[default]
    PxPy,
    /// +X-Y
    PxNy,
    /// -X+Y
    NxPy,
    /// -X-Y (both axes inverted)
    NxNy,
    /// +Y+X
    PyPx,
    /// +Y-X
    PyNx,
    /// -Y+X
    NyPx,
    /// -Y-X
    NyNx,
}

/// Swaps sensor axes for alignment with the screen axes.
///
/// # Arguments
/// * `sensor` - Sensor measurement in sensor frame
/// * `alignment` - Axes alignment describing sensor orientation
///
/// # Returns
/// Sensor measurement remapped to the screen frame
#[inline]
pub fn axes_swap(sensor: Vector2<f32>, alignment: AxesAlignment) -> Vector2<f32> {
    match alignment {
        AxesAlignment::PxPy => sensor,
        AxesAlignment::PxNy => Vector2::new(sensor.x, -sensor.y),
        AxesAlignment::NxPy => Vector2::new(-sensor.x, sensor.y),
        AxesAlignment::NxNy => Vector2::new(-sensor.x, -sensor.y),
        AxesAlignment::PyPx => Vector2::new(sensor.y, sensor.x),
        AxesAlignment::PyNx => Vector2::new(sensor.y, -sensor.x),
        AxesAlignment::NyPx => Vector2::new(-sensor.y, sensor.x),
        AxesAlignment::NyNx => Vector2::new(-sensor.y, -sensor.x),
    }
}
