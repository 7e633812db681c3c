//! Compass heading normalization for the pocket-instruments library
//!
//! Orientation events arrive in platform-specific shapes: one family
//! reports a ready-made clockwise compass heading, the other a
//! counterclockwise-from-north `alpha` angle. This module folds either
//! shape into a single integer heading in `[0, 360)` plus an 8-wind
//! compass point for the dial label.

use crate::math::wrap_360;
use crate::types::Platform;

/// The 8-wind compass labels, in clockwise order starting at north
const COMPASS_LABELS: [CompassPoint; 8] = [
    CompassPoint::North,
    CompassPoint::NorthEast,
    CompassPoint::East,
    CompassPoint::SouthEast,
    CompassPoint::South,
    CompassPoint::SouthWest,
    CompassPoint::West,
    CompassPoint::NorthWest,
];

/// Raw fields of a device orientation event
///
/// Either field may be absent; which one is consulted depends on the
/// platform. A completely empty sample normalizes to heading 0 rather
/// than failing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationSample {
    /// Counterclockwise-from-north angle in degrees (alpha platforms)
    pub alpha: Option<f64>,
    /// Ready-made clockwise compass heading in degrees (native platforms)
    pub native_heading: Option<f64>,
}

impl OrientationSample {
    /// Sample from an alpha-reporting platform
    pub fn from_alpha(alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            native_heading: None,
        }
    }

    /// Sample from a platform with a native compass heading
    pub fn from_native_heading(heading: f64) -> Self {
        Self {
            alpha: None,
            native_heading: Some(heading),
        }
    }
}

/// Normalize a raw orientation sample into an integer heading
///
/// On `Platform::Ios` the native heading field is used directly; on
/// `Platform::Android` the counterclockwise `alpha` is converted via
/// `(360 - alpha) mod 360`. The result is rounded to the nearest degree
/// and wrapped into `[0, 360)`. An absent or non-finite field yields 0.
///
/// # Example
/// ```
/// use pocket_instruments::{OrientationSample, Platform, normalize_heading};
///
/// let heading = normalize_heading(Platform::Android, OrientationSample::from_alpha(90.0));
/// assert_eq!(heading, 270);
/// ```
pub fn normalize_heading(platform: Platform, sample: OrientationSample) -> u16 {
    let heading = match platform {
        Platform::Ios => sample.native_heading,
        Platform::Android => sample.alpha.map(|alpha| 360.0 - alpha),
    };

    match heading {
        Some(degrees) if degrees.is_finite() => wrap_360(degrees.round()) as u16,
        _ => 0,
    }
}

/// One of the 8 compass winds
///
/// # Example
/// ```
/// use pocket_instruments::CompassPoint;
///
/// assert_eq!(CompassPoint::from_heading(270), CompassPoint::West);
/// assert_eq!(CompassPoint::West.abbreviation(), "W");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    /// Map a heading in degrees to the nearest compass wind
    ///
    /// Each wind owns a 45° sector centered on its cardinal angle, so
    /// 337.5°..22.5° is north, 22.5°..67.5° is north-east, and so on.
    pub fn from_heading(heading: u16) -> Self {
        let index = ((f64::from(heading) / 45.0).round() as usize) % 8;
        COMPASS_LABELS[index]
    }

    /// Short dial label for this wind
    pub fn abbreviation(self) -> &'static str {
        match self {
            CompassPoint::North => "N",
            CompassPoint::NorthEast => "NE",
            CompassPoint::East => "E",
            CompassPoint::SouthEast => "SE",
            CompassPoint::South => "S",
            CompassPoint::SouthWest => "SW",
            CompassPoint::West => "W",
            CompassPoint::NorthWest => "NW",
        }
    }
}

/// Smallest unsigned angle between two headings, in degrees
///
/// The result is always in `[0, 180]`. Used for the saved-reference-angle
/// readout, where turning 350° clockwise and 10° counterclockwise must
/// read the same.
///
/// # Example
/// ```
/// use pocket_instruments::angular_separation;
///
/// assert_eq!(angular_separation(350.0, 10.0), 20.0);
/// assert_eq!(angular_separation(90.0, 270.0), 180.0);
/// ```
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (wrap_360(a) - wrap_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}
