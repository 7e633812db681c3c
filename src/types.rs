//! Core types and conventions for the pocket-instruments library

use crate::axes::AxesAlignment;

/// Platform family the host device belongs to
///
/// Mobile platforms disagree both on the sign convention of
/// gravity-inclusive acceleration and on how a compass heading is
/// reported. The shell detects the platform once at startup and threads
/// this value into every engine call; it is never re-detected per sample.
///
/// # Conventions
/// - **Ios**: acceleration axes are inverted relative to the reference
///   convention, and orientation events carry a ready-made compass heading.
/// - **Android**: acceleration axes match the reference convention, and
///   orientation events carry a counterclockwise-from-north `alpha` angle
///   that must be converted to a clockwise heading.
///
/// # Example
/// ```
/// use pocket_instruments::{AxesAlignment, Platform};
///
/// assert_eq!(Platform::Ios.accel_alignment(), AxesAlignment::NxNy);
/// assert_eq!(Platform::Android.accel_alignment(), AxesAlignment::PxPy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// iOS family: inverted acceleration axes, native compass heading
    Ios,
    /// Android family: reference acceleration axes, alpha-based heading
    #[default]
    Android,
}

impl Platform {
    /// Axes remapping to apply to raw acceleration samples before any
    /// other processing
    pub fn accel_alignment(self) -> AxesAlignment {
        match self {
            Platform::Ios => AxesAlignment::NxNy,
            Platform::Android => AxesAlignment::PxPy,
        }
    }
}

/// Spirit-level display policy
///
/// Selects how a tilt sample is folded into a display reading: a planar
/// bubble that moves in two dimensions, or a single-axis bar bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelMode {
    /// Two-axis bubble level
    #[default]
    Planar,
    /// Single-axis bar level along the device X axis
    BarHorizontal,
    /// Single-axis bar level along the device Y axis
    BarVertical,
}

/// Spirit-level tuning parameters
///
/// Gains, thresholds, and display clamps for the tilt engine. Thresholds
/// are in the same units as the incoming acceleration (m/s²); travel
/// limits are in display pixels.
///
/// # Example
/// ```
/// use pocket_instruments::LevelSettings;
///
/// let settings = LevelSettings {
///     bubble_travel: 80.0, // smaller dial
///     ..Default::default()
/// };
/// assert_eq!(settings.bubble_gain, 10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LevelSettings {
    /// Planar bubble displacement per m/s² of effective tilt
    pub bubble_gain: f32,
    /// Maximum planar bubble displacement from center, in pixels
    ///
    /// The bubble offset vector is magnitude-clamped to this radius.
    pub bubble_travel: f32,
    /// Per-axis level threshold for the planar bubble, in m/s²
    ///
    /// The device is level when both effective axes are strictly below
    /// this value; the bubble then snaps to the exact center.
    pub planar_threshold: f32,
    /// Approximate degrees of tilt per m/s² of effective acceleration
    ///
    /// Drives both the planar angle readout and the bar tilt figure.
    /// This is a linear display heuristic, not trigonometric tilt.
    pub tilt_gain: f32,
    /// Bar bubble displacement per degree of bar tilt
    pub bar_travel_gain: f32,
    /// Maximum bar bubble displacement from center, in pixels
    pub bar_travel: f32,
    /// Level threshold for the bar tilt figure
    ///
    /// The device is level when the absolute bar tilt is strictly below
    /// this value; the bar bubble then snaps to the exact center.
    pub bar_threshold: f32,
    /// Upper bound for the reported angle readout, in degrees
    pub max_angle: f32,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            bubble_gain: 10.0,
            bubble_travel: 100.0,
            planar_threshold: 0.5,
            tilt_gain: 5.0,
            bar_travel_gain: 5.0,
            bar_travel: 120.0,
            bar_threshold: 1.0,
            max_angle: 90.0,
        }
    }
}

/// Tilt alarm settings
///
/// Controls how often the out-of-level alarm is allowed to fire while
/// armed, regardless of the sensor sample rate.
#[derive(Debug, Clone, Copy)]
pub struct AlarmSettings {
    /// Minimum time between two alarm notifications, in milliseconds
    pub interval_ms: u64,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self { interval_ms: 400 }
    }
}
