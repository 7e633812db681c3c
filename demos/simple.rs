use nalgebra::Vector2;
use pocket_instruments::{
    GeoPoint, LevelMode, LevelSettings, Platform, TargetTracker, ZeroOffset, read_level,
};

fn main() {
    let platform = Platform::Android; // resolve once from the host environment
    let zero = ZeroOffset::default();

    for i in 0..10 {
        // this loop should repeat each time new motion data is available
        let sample = Vector2::new(0.1 * i as f32, -0.05 * i as f32); // replace with actual acceleration in m/s²

        let reading = read_level(
            sample,
            platform.accel_alignment(),
            zero,
            LevelMode::Planar,
            LevelSettings::default(),
        );

        if let Some(reading) = reading {
            println!(
                "Angle: {:.1}°, Level: {}",
                reading.angle(),
                reading.is_level()
            );
        }
    }

    // Mark the current position and get the way back from somewhere else
    let mut tracker = TargetTracker::new();
    tracker.capture(GeoPoint::new(37.5665, 126.9780));

    let fix = GeoPoint::new(37.5796, 126.9770); // replace with actual location fixes
    if let Some(solution) = tracker.solution(fix) {
        println!(
            "Target: {:.0} m at {:.0}°",
            solution.distance_m, solution.bearing_deg
        );
    }
}
