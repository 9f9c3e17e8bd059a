//! Ultrafiltration membrane process demo
//!
//! Headless host loop standing in for the animation-frame driver: ticks the
//! engine at roughly 60 Hz with measured frame deltas and logs the derived
//! metrics, including a mid-run pressure change and a backwash.

use membrane_physics::{MEMBRANE_X, VESSEL_HEIGHT, VESSEL_WIDTH};
use membrane_simulation::{Engine, SimParams};
use std::thread;
use std::time::{Duration, Instant};

const RUN_SECONDS: f32 = 20.0;
const FRAME_TIME: Duration = Duration::from_millis(16);
const LOG_INTERVAL: f32 = 1.0;

fn main() {
    env_logger::init();

    let mut engine = Engine::new(SimParams::default());
    log::info!(
        "✓ vessel {}x{}, membrane at x={}, {} particles",
        VESSEL_WIDTH,
        VESSEL_HEIGHT,
        MEMBRANE_X,
        engine.particles().len()
    );

    let mut last_frame = Instant::now();
    let mut next_log = LOG_INTERVAL;
    let mut backwashed = false;

    while engine.metrics().elapsed_time < RUN_SECONDS {
        thread::sleep(FRAME_TIME);

        // frame deltas are measured, never assumed
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        engine.tick(dt);

        let metrics = engine.metrics();
        if metrics.elapsed_time >= next_log {
            next_log += LOG_INTERVAL;
            log::info!(
                "t={:5.1}s flux={:6.2} health={:5.1} feed={:3} retentate={:3} permeate={:3}",
                metrics.elapsed_time,
                metrics.flux,
                metrics.membrane_health,
                metrics.feed_count,
                metrics.retentate_count,
                metrics.permeate_count
            );
        }

        // halfway through, push the process harder and clean the membrane
        if !backwashed && metrics.elapsed_time >= RUN_SECONDS / 2.0 {
            backwashed = true;
            engine.set_pressure(85.0);
            engine.backwash();
        }
    }

    let metrics = engine.metrics();
    log::info!(
        "run complete: flux={:.2} health={:.1} after {:.1}s",
        metrics.flux,
        metrics.membrane_health,
        metrics.elapsed_time
    );
}
