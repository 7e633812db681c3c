//! Advanced spirit-level demonstration
//!
//! Replays a recorded motion log through the tilt engine and renders the
//! resulting readings, level classification, and alarm firings.
//!
//! Features demonstrated:
//! - Zero-point calibration captured mid-stream
//! - Planar reading with snap-to-center and travel clamping
//! - Rate-limited out-of-level alarm
//! - Visualization of angle, level flag, and alarm activity
//!
//! Run with: `cargo run --example advanced`

use nalgebra::Vector2;
use plotters::prelude::*;
use pocket_instruments::{
    AlarmGate, AlarmSettings, LevelMode, LevelReading, LevelSettings, Platform, ZeroOffset,
    read_level,
};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct MotionRecord {
    #[serde(rename = "Time (s)")]
    time: f32,
    #[serde(rename = "Accel X (m/s^2)")]
    accel_x: f32,
    #[serde(rename = "Accel Y (m/s^2)")]
    accel_y: f32,
}

/// Sample index at which the user presses "zero" in the replay
const CALIBRATE_AT: usize = 50;

fn main() -> Result<(), Box<dyn Error>> {
    println!("Advanced spirit-level example - calibrated replay with alarm");

    // Load the recorded motion log
    let mut reader = csv::Reader::from_path("testdata/tilt_log.csv")?;
    let mut records = Vec::new();

    for result in reader.deserialize() {
        let record: MotionRecord = result?;
        records.push(record);
    }

    println!("Processing {} motion samples...", records.len());

    let platform = Platform::Android;
    let settings = LevelSettings::default();
    let mut zero = ZeroOffset::default();
    let mut alarm = AlarmGate::new(AlarmSettings::default());
    alarm.arm();

    let mut angles = Vec::new();
    let mut level_flags = Vec::new();
    let mut alarm_fires = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let raw = Vector2::new(record.accel_x, record.accel_y);

        // The user zeroes the level once the device has settled
        if i == CALIBRATE_AT {
            let aligned = pocket_instruments::axes_swap(raw, platform.accel_alignment());
            zero = ZeroOffset::capture(aligned);
            println!("Sample {i}: zero point captured at {aligned:?}");
        }

        let Some(reading) = read_level(
            raw,
            platform.accel_alignment(),
            zero,
            LevelMode::Planar,
            settings,
        ) else {
            // Malformed sample: keep the previous reading
            continue;
        };

        let now_ms = (record.time * 1000.0) as u64;
        let fired = alarm.should_fire(reading.is_level(), now_ms);

        if fired {
            println!(
                "Sample {i}: out of level by {:.1}° at t={:.2}s",
                reading.angle(),
                record.time
            );
        }

        angles.push(reading.angle());
        level_flags.push(if reading.is_level() { 1.0 } else { 0.0 });
        alarm_fires.push(if fired { 1.0 } else { 0.0 });

        if let LevelReading::Bubble(bubble) = reading
            && i % 100 == 0
        {
            println!(
                "Sample {i}: angle={:.1}° level={} bubble=({:.0}, {:.0})",
                bubble.angle, bubble.is_level, bubble.offset.x, bubble.offset.y
            );
        }
    }

    println!("Generating replay plots...");
    create_replay_plots(&records, &angles, &level_flags, &alarm_fires)?;

    println!("✓ Plots saved to tilt_plots.png");
    println!("✓ The plots show the angle readout, level flag, and alarm firings.");
    Ok(())
}

/// Create a 3-panel plot: angle readout, level flag, alarm firings
fn create_replay_plots(
    records: &[MotionRecord],
    angles: &[f32],
    level_flags: &[f32],
    alarm_fires: &[f32],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new("tilt_plots.png", (1000, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((3, 1));
    let time_range = records[0].time..records.last().unwrap().time;

    // 1. Angle readout
    let mut angle_chart = ChartBuilder::on(&areas[0])
        .caption("Tilt Angle, Level Flag, and Alarm", ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(0)
        .y_label_area_size(50)
        .build_cartesian_2d(time_range.clone(), 0f32..95f32)?;

    angle_chart.configure_mesh().y_desc("Degrees").draw()?;

    angle_chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .zip(angles.iter())
                .map(|(r, &a)| (r.time, a)),
            &RED,
        ))?
        .label("Angle")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));

    angle_chart.configure_series_labels().draw()?;

    // 2. Level flag
    create_bool_plot(&areas[1], records, level_flags, "Level", time_range.clone())?;

    // 3. Alarm firings
    create_bool_plot(&areas[2], records, alarm_fires, "Alarm fired", time_range)?;

    root.present()?;
    Ok(())
}

/// Create a boolean plot showing True/False states over time
fn create_bool_plot(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    records: &[MotionRecord],
    values: &[f32],
    label: &str,
    time_range: std::ops::Range<f32>,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .margin(5)
        .x_label_area_size(if label == "Alarm fired" { 40 } else { 0 })
        .y_label_area_size(50)
        .build_cartesian_2d(time_range, -0.1f32..1.1f32)?;

    chart
        .configure_mesh()
        .y_label_formatter(&|y| {
            if *y < 0.5 {
                "False".to_string()
            } else {
                "True".to_string()
            }
        })
        .draw()?;

    if label == "Alarm fired" {
        chart.configure_mesh().x_desc("Time (s)").draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .zip(values.iter())
                .map(|(r, &v)| (r.time, v)),
            &BLUE,
        ))?
        .label(label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));

    chart.configure_series_labels().draw()?;
    Ok(())
}
