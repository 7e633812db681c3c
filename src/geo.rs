//! Great-circle navigation between geographic points
//!
//! Distance and initial bearing on a spherical Earth model, plus the
//! saved-target tracker that turns a stream of location fixes into a
//! "distance and direction back to a marked spot" readout.

use crate::math::wrap_360;

/// Mean Earth radius in meters (spherical model)
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north
    pub lat: f64,
    /// Longitude in decimal degrees, positive east
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from decimal degrees
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two points, in meters
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_METERS`].
/// Symmetric in its arguments; identical points yield exactly 0.
///
/// # Example
/// ```
/// use pocket_instruments::{GeoPoint, haversine_distance};
///
/// let city_hall = GeoPoint::new(37.5665, 126.9780);
/// let palace = GeoPoint::new(37.5796, 126.9770);
///
/// let distance = haversine_distance(city_hall, palace);
/// assert!((distance - 1459.0).abs() < 5.0);
/// ```
pub fn haversine_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Initial great-circle bearing from one point toward another
///
/// Clockwise from true north, in `[0, 360)`. For identical points the
/// bearing is defined as 0 rather than NaN. The value is an absolute
/// direction: the compass dial already rotates to true-north-up, so it is
/// never adjusted by the device's own heading.
///
/// # Example
/// ```
/// use pocket_instruments::{GeoPoint, initial_bearing};
///
/// let equator_origin = GeoPoint::new(0.0, 0.0);
/// let due_east = GeoPoint::new(0.0, 1.0);
/// assert!((initial_bearing(equator_origin, due_east) - 90.0).abs() < 1e-9);
/// ```
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    // atan2(0, 0) = 0, so coincident points fall out as due north
    wrap_360(y.atan2(x).to_degrees())
}

/// Distance and direction from the current position to the saved target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSolution {
    /// Great-circle distance in whole meters
    pub distance_m: f64,
    /// Initial bearing in degrees clockwise from true north, `[0, 360)`
    pub bearing_deg: f64,
}

/// Saved-target position tracker
///
/// Holds the one position the user has marked. Until a target is
/// captured every solution request is a no-op; capturing again simply
/// overwrites the previous mark. The target lives for the session only.
///
/// # Example
/// ```
/// use pocket_instruments::{GeoPoint, TargetTracker};
///
/// let mut tracker = TargetTracker::default();
/// let here = GeoPoint::new(37.5665, 126.9780);
///
/// assert!(tracker.solution(here).is_none());
///
/// tracker.capture(here);
/// let solution = tracker.solution(GeoPoint::new(37.5796, 126.9770)).unwrap();
/// assert!((solution.distance_m - 1459.0).abs() <= 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetTracker {
    target: Option<GeoPoint>,
}

impl TargetTracker {
    /// Create a tracker with no saved target
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the given position as the target, replacing any previous one
    pub fn capture(&mut self, position: GeoPoint) {
        self.target = Some(position);
    }

    /// Forget the saved target
    pub fn clear(&mut self) {
        self.target = None;
    }

    /// The saved target, if any
    pub fn target(&self) -> Option<GeoPoint> {
        self.target
    }

    /// Distance and bearing from `current` to the saved target
    ///
    /// `None` while no target is saved. Distance is rounded to the
    /// nearest meter for display; bearing is left at full precision for
    /// the dial rotation.
    pub fn solution(&self, current: GeoPoint) -> Option<TargetSolution> {
        let target = self.target?;
        Some(TargetSolution {
            distance_m: haversine_distance(current, target).round(),
            bearing_deg: initial_bearing(current, target),
        })
    }
}

/// Convert a geolocation speed reading to whole km/h
///
/// Location fixes report speed in m/s and may omit it entirely; absent,
/// non-finite, or negative readings display as standstill.
///
/// # Example
/// ```
/// use pocket_instruments::speed_kmh;
///
/// assert_eq!(speed_kmh(Some(10.0)), 36);
/// assert_eq!(speed_kmh(None), 0);
/// ```
pub fn speed_kmh(speed_mps: Option<f64>) -> u32 {
    match speed_mps {
        Some(mps) if mps.is_finite() && mps > 0.0 => (mps * 3.6).round() as u32,
        _ => 0,
    }
}
