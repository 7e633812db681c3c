#![no_std]

//! Pocket Instruments - the numeric core of a handheld multi-instrument
//!
//! Three independent, side-effect-free engines sit behind a thin
//! UI/sensor shell:
//!
//! - **Spirit level**: gravity-inclusive acceleration samples plus a
//!   zero-point calibration become a bubble offset, a level flag, and an
//!   angle readout, in planar or single-axis bar display modes.
//! - **Compass and navigation**: raw orientation events normalize into an
//!   integer heading with an 8-wind label; a saved target position yields
//!   great-circle distance and bearing from every new location fix.
//! - **Photo measurement**: two traced lines over a photo - one across a
//!   reference object of known size, one across the subject - produce a
//!   real-world length estimate through a small calibration state machine.
//!
//! The engines never touch the DOM, the sensors, or a clock; the shell
//! feeds them samples and timestamps and renders what they return.
//!
//! # Features
//!
//! - Platform-aware sample normalization (sign conventions, heading source)
//! - Session-scoped zero-point calibration with snap-to-center display
//! - Rate-limited out-of-level alarm gate
//! - Haversine distance and initial bearing on a spherical Earth
//! - Pixels-per-millimeter calibration against everyday reference objects
//! - `#![no_std]` compatible; all float math via nalgebra scalars
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector2;
//! use pocket_instruments::{
//!     GeoPoint, LevelMode, LevelSettings, Platform, TargetTracker, ZeroOffset, read_level,
//! };
//!
//! let platform = Platform::Android; // resolved once at startup
//!
//! // Spirit level: a nearly flat device reads as level
//! let reading = read_level(
//!     Vector2::new(0.2, -0.3),
//!     platform.accel_alignment(),
//!     ZeroOffset::default(),
//!     LevelMode::Planar,
//!     LevelSettings::default(),
//! )
//! .unwrap();
//! assert!(reading.is_level());
//!
//! // Navigation: mark a spot, then ask for the way back
//! let mut tracker = TargetTracker::new();
//! tracker.capture(GeoPoint::new(37.5665, 126.9780));
//! let solution = tracker.solution(GeoPoint::new(37.5796, 126.9770)).unwrap();
//! assert!(solution.distance_m > 1400.0 && solution.distance_m < 1500.0);
//! ```

mod axes;
mod calibration;
pub mod compass;
pub mod geo;
mod level;
mod math;
pub mod measure;
mod types;

// Re-export all public types and functions
pub use axes::{AxesAlignment, axes_swap};
pub use calibration::ZeroOffset;
pub use compass::{CompassPoint, OrientationSample, angular_separation, normalize_heading};
pub use geo::{
    EARTH_RADIUS_METERS, GeoPoint, TargetSolution, TargetTracker, haversine_distance,
    initial_bearing, speed_kmh,
};
pub use level::{AlarmGate, BarReading, BubbleReading, LevelReading, read_level};
pub use math::{Vector2Ext, wrap_360};
pub use measure::{MeasureError, MeasurePhase, MeasureSession, ReferenceObject, Segment};
pub use types::{AlarmSettings, LevelMode, LevelSettings, Platform};
