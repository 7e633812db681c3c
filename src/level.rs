//! Spirit-level engine: tilt readings and the out-of-level alarm gate
//!
//! Converts gravity-inclusive acceleration samples into display-ready
//! readings. A reading is a clamped bubble offset, a level classification,
//! and an angle figure for the numeric readout. The angle is a linear
//! scaled-magnitude heuristic, not trigonometric tilt.

use nalgebra::Vector2;

use crate::axes::{AxesAlignment, axes_swap};
use crate::calibration::ZeroOffset;
use crate::math::Vector2Ext;
use crate::types::{AlarmSettings, LevelMode, LevelSettings};

/// Planar bubble reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleReading {
    /// Bubble displacement from the dial center, in pixels
    ///
    /// Exactly `(0, 0)` while level; otherwise proportional to the
    /// effective tilt and magnitude-clamped to the dial radius. Screen Y
    /// grows downward, so the Y component is sign-flipped relative to the
    /// sensor.
    pub offset: Vector2<f32>,
    /// Whether both effective axes are inside the level threshold
    pub is_level: bool,
    /// Angle figure for the readout, in degrees, capped at the maximum
    pub angle: f32,
}

/// Single-axis bar reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarReading {
    /// Bar bubble displacement from the bar center, in pixels
    ///
    /// Exactly `0` while level; otherwise clamped to the bar travel limit.
    pub travel: f32,
    /// Whether the bar tilt is inside the level threshold
    pub is_level: bool,
    /// Angle figure for the readout, in degrees, capped at the maximum
    pub angle: f32,
}

/// A tilt reading in either display mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelReading {
    /// Two-axis bubble reading
    Bubble(BubbleReading),
    /// Single-axis bar reading
    Bar(BarReading),
}

impl LevelReading {
    /// Level classification, independent of display mode
    pub fn is_level(&self) -> bool {
        match self {
            LevelReading::Bubble(reading) => reading.is_level,
            LevelReading::Bar(reading) => reading.is_level,
        }
    }

    /// Angle figure in degrees, independent of display mode
    pub fn angle(&self) -> f32 {
        match self {
            LevelReading::Bubble(reading) => reading.angle,
            LevelReading::Bar(reading) => reading.angle,
        }
    }
}

/// Compute a tilt reading from a raw acceleration sample
///
/// The sample is remapped through the platform alignment, the zero-point
/// offset is subtracted, and the result is folded into the reading for the
/// requested display mode.
///
/// # Arguments
/// * `raw` - Gravity-inclusive acceleration sample in m/s² (x, y)
/// * `alignment` - Platform axes remapping, resolved once at startup
/// * `zero` - Current zero-point calibration
/// * `mode` - Display policy to fold the sample into
/// * `settings` - Gains, thresholds, and travel limits
///
/// # Returns
/// `None` if the sample has a non-finite component; the caller keeps its
/// previous reading in that case.
///
/// # Example
/// ```
/// use nalgebra::Vector2;
/// use pocket_instruments::{LevelMode, LevelSettings, Platform, ZeroOffset, read_level};
///
/// let reading = read_level(
///     Vector2::new(0.2, -0.1),
///     Platform::Android.accel_alignment(),
///     ZeroOffset::default(),
///     LevelMode::Planar,
///     LevelSettings::default(),
/// )
/// .unwrap();
///
/// assert!(reading.is_level());
/// ```
pub fn read_level(
    raw: Vector2<f32>,
    alignment: AxesAlignment,
    zero: ZeroOffset,
    mode: LevelMode,
    settings: LevelSettings,
) -> Option<LevelReading> {
    if !raw.x.is_finite() || !raw.y.is_finite() {
        return None;
    }

    let effective = zero.apply(axes_swap(raw, alignment));

    let reading = match mode {
        LevelMode::Planar => LevelReading::Bubble(bubble_reading(effective, settings)),
        LevelMode::BarHorizontal => {
            LevelReading::Bar(bar_reading(effective.x, settings))
        }
        LevelMode::BarVertical => {
            LevelReading::Bar(bar_reading(-effective.y, settings))
        }
    };

    Some(reading)
}

/// Fold an effective sample into the planar bubble reading
fn bubble_reading(effective: Vector2<f32>, settings: LevelSettings) -> BubbleReading {
    let is_level = effective.x.abs() < settings.planar_threshold
        && effective.y.abs() < settings.planar_threshold;

    let offset = if is_level {
        // Snap to the exact center so the bubble does not jitter at rest
        Vector2::zeros()
    } else {
        Vector2::new(
            effective.x * settings.bubble_gain,
            -effective.y * settings.bubble_gain,
        )
        .clamp_magnitude(settings.bubble_travel)
    };

    let angle = (effective.magnitude() * settings.tilt_gain).min(settings.max_angle);

    BubbleReading {
        offset,
        is_level,
        angle,
    }
}

/// Fold one effective axis into the bar reading
fn bar_reading(axis: f32, settings: LevelSettings) -> BarReading {
    let tilt = axis * settings.tilt_gain;
    let is_level = tilt.abs() < settings.bar_threshold;

    let travel = if is_level {
        0.0
    } else {
        (tilt * settings.bar_travel_gain).clamp(-settings.bar_travel, settings.bar_travel)
    };

    let angle = tilt.abs().min(settings.max_angle);

    BarReading {
        travel,
        is_level,
        angle,
    }
}

/// Rate-limited out-of-level alarm
///
/// While armed, an out-of-level reading fires the alarm at most once per
/// configured interval regardless of how fast samples arrive. Timestamps
/// are caller-provided monotonic milliseconds; the engine never reads a
/// clock of its own.
///
/// # Example
/// ```
/// use pocket_instruments::{AlarmGate, AlarmSettings};
///
/// let mut alarm = AlarmGate::new(AlarmSettings::default());
/// alarm.arm();
///
/// assert!(alarm.should_fire(false, 1_000)); // first out-of-level sample
/// assert!(!alarm.should_fire(false, 1_100)); // throttled
/// assert!(alarm.should_fire(false, 1_500)); // interval elapsed
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AlarmGate {
    armed: bool,
    last_fired_ms: Option<u64>,
    settings: AlarmSettings,
}

impl AlarmGate {
    /// Create a disarmed gate with the given settings
    pub fn new(settings: AlarmSettings) -> Self {
        Self {
            armed: false,
            last_fired_ms: None,
            settings,
        }
    }

    /// Arm the alarm
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Disarm the alarm
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Flip the armed state and return the new state
    pub fn toggle(&mut self) -> bool {
        self.armed = !self.armed;
        self.armed
    }

    /// Whether the alarm is currently armed
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Report a level classification and decide whether to notify
    ///
    /// Returns true at most once per interval, and only while armed and
    /// out of level. Level samples never fire and do not touch the timer.
    pub fn should_fire(&mut self, is_level: bool, now_ms: u64) -> bool {
        if !self.armed || is_level {
            return false;
        }

        let elapsed = match self.last_fired_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => return self.fire(now_ms),
        };

        if elapsed > self.settings.interval_ms {
            self.fire(now_ms)
        } else {
            false
        }
    }

    fn fire(&mut self, now_ms: u64) -> bool {
        self.last_fired_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;

    fn defaults() -> LevelSettings {
        LevelSettings::default()
    }

    #[test]
    fn test_level_snap_to_center() {
        let reading = read_level(
            Vector2::new(0.3, -0.4),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::Planar,
            defaults(),
        )
        .unwrap();

        match reading {
            LevelReading::Bubble(bubble) => {
                assert!(bubble.is_level);
                assert_eq!(bubble.offset, Vector2::zeros());
            }
            LevelReading::Bar(_) => panic!("expected bubble reading"),
        }
    }

    #[test]
    fn test_bubble_offset_direction_and_gain() {
        let reading = read_level(
            Vector2::new(2.0, 3.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::Planar,
            defaults(),
        )
        .unwrap();

        let LevelReading::Bubble(bubble) = reading else {
            panic!("expected bubble reading");
        };
        assert!(!bubble.is_level);
        // x scaled by the gain, y scaled and flipped for screen coordinates
        assert!((bubble.offset.x - 20.0).abs() < 1e-5);
        assert!((bubble.offset.y + 30.0).abs() < 1e-5);
    }

    #[test]
    fn test_bubble_travel_clamp() {
        let reading = read_level(
            Vector2::new(15.0, -15.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::Planar,
            defaults(),
        )
        .unwrap();

        let LevelReading::Bubble(bubble) = reading else {
            panic!("expected bubble reading");
        };
        assert!((bubble.offset.magnitude() - defaults().bubble_travel).abs() < 1e-4);
    }

    #[test]
    fn test_planar_angle_heuristic() {
        let reading = read_level(
            Vector2::new(3.0, 4.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::Planar,
            defaults(),
        )
        .unwrap();

        // sqrt(3² + 4²) * 5 = 25
        assert!((reading.angle() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_capped_at_maximum() {
        let reading = read_level(
            Vector2::new(19.0, 19.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::Planar,
            defaults(),
        )
        .unwrap();

        assert_eq!(reading.angle(), defaults().max_angle);
    }

    #[test]
    fn test_bar_horizontal_uses_x_axis() {
        let reading = read_level(
            Vector2::new(2.0, 9.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::BarHorizontal,
            defaults(),
        )
        .unwrap();

        let LevelReading::Bar(bar) = reading else {
            panic!("expected bar reading");
        };
        // tilt = 2.0 * 5 = 10, travel = 10 * 5 = 50
        assert!(!bar.is_level);
        assert!((bar.travel - 50.0).abs() < 1e-5);
        assert!((bar.angle - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_bar_vertical_flips_y_axis() {
        let reading = read_level(
            Vector2::new(9.0, 2.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::BarVertical,
            defaults(),
        )
        .unwrap();

        let LevelReading::Bar(bar) = reading else {
            panic!("expected bar reading");
        };
        // tilt = -2.0 * 5 = -10, travel clamps symmetrically
        assert!((bar.travel + 50.0).abs() < 1e-5);
        assert!((bar.angle - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_bar_level_boundary_is_strict() {
        // |tilt| = 0.995 < 1.0: level, snapped to zero
        let level = read_level(
            Vector2::new(0.199, 0.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::BarHorizontal,
            defaults(),
        )
        .unwrap();
        let LevelReading::Bar(bar) = level else {
            panic!("expected bar reading");
        };
        assert!(bar.is_level);
        assert_eq!(bar.travel, 0.0);

        // |tilt| = 1.0 exactly: not level
        let boundary = read_level(
            Vector2::new(0.2, 0.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::BarHorizontal,
            defaults(),
        )
        .unwrap();
        assert!(!boundary.is_level());
    }

    #[test]
    fn test_bar_travel_clamp() {
        let reading = read_level(
            Vector2::new(18.0, 0.0),
            AxesAlignment::PxPy,
            ZeroOffset::default(),
            LevelMode::BarHorizontal,
            defaults(),
        )
        .unwrap();

        let LevelReading::Bar(bar) = reading else {
            panic!("expected bar reading");
        };
        assert_eq!(bar.travel, defaults().bar_travel);
    }

    #[test]
    fn test_platform_sign_flip_before_calibration() {
        // The same physical lean reads identically once each platform's
        // alignment is applied
        let android = read_level(
            Vector2::new(1.5, -0.8),
            Platform::Android.accel_alignment(),
            ZeroOffset::default(),
            LevelMode::Planar,
            defaults(),
        )
        .unwrap();
        let ios = read_level(
            Vector2::new(-1.5, 0.8),
            Platform::Ios.accel_alignment(),
            ZeroOffset::default(),
            LevelMode::Planar,
            defaults(),
        )
        .unwrap();

        assert_eq!(android, ios);
    }

    #[test]
    fn test_calibration_zeroes_reading() {
        let raw = Vector2::new(1.2, -0.9);
        let zero = ZeroOffset::capture(raw);

        let reading = read_level(
            raw,
            AxesAlignment::PxPy,
            zero,
            LevelMode::Planar,
            defaults(),
        )
        .unwrap();

        assert!(reading.is_level());
        assert!(reading.angle() < 1e-6);
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        for bad in [
            Vector2::new(f32::NAN, 0.0),
            Vector2::new(0.0, f32::INFINITY),
            Vector2::new(f32::NEG_INFINITY, f32::NAN),
        ] {
            let reading = read_level(
                bad,
                AxesAlignment::PxPy,
                ZeroOffset::default(),
                LevelMode::Planar,
                defaults(),
            );
            assert!(reading.is_none());
        }
    }

    #[test]
    fn test_alarm_requires_arming() {
        let mut alarm = AlarmGate::new(AlarmSettings::default());
        assert!(!alarm.should_fire(false, 1_000));

        alarm.arm();
        assert!(alarm.should_fire(false, 2_000));
    }

    #[test]
    fn test_alarm_throttle_interval() {
        let mut alarm = AlarmGate::new(AlarmSettings { interval_ms: 400 });
        alarm.arm();

        assert!(alarm.should_fire(false, 1_000));
        assert!(!alarm.should_fire(false, 1_200));
        assert!(!alarm.should_fire(false, 1_400)); // exactly the interval: still held
        assert!(alarm.should_fire(false, 1_401));
    }

    #[test]
    fn test_alarm_silent_while_level() {
        let mut alarm = AlarmGate::new(AlarmSettings::default());
        alarm.arm();

        assert!(!alarm.should_fire(true, 1_000));
        // A level sample does not consume the timer
        assert!(alarm.should_fire(false, 1_001));
    }

    #[test]
    fn test_alarm_toggle() {
        let mut alarm = AlarmGate::new(AlarmSettings::default());
        assert!(alarm.toggle());
        assert!(alarm.is_armed());
        assert!(!alarm.toggle());
        assert!(!alarm.is_armed());
    }
}
