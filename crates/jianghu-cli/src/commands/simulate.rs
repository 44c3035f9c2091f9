//! Headless playback of a particle field

use anyhow::Result;
use jianghu_particles::{EngineSettings, ParticleInstance, Viewport, VisualEngine};
use jianghu_runtime::{AnimationHost, FrameClock, RuntimeSystem};
use serde::Serialize;

pub struct SimulateArgs {
    pub tag: String,
    pub count: Option<i64>,
    pub color: Option<String>,
    pub seconds: f64,
    pub fps: u32,
    pub width: f64,
    pub height: f64,
}

/// What was on screen at one sampled instant
#[derive(Serialize)]
struct Snapshot {
    time: f64,
    running: usize,
    visible: usize,
    mean_opacity: f32,
    /// Visible particles whose center lies inside the viewport
    on_screen: usize,
}

#[derive(Serialize)]
struct SimulationReport {
    effect_tag: String,
    particles: usize,
    frames: u64,
    simulated_seconds: f64,
    viewport: Viewport,
    snapshots: Vec<Snapshot>,
    active_after_shutdown: usize,
}

pub fn run(args: SimulateArgs, settings: &EngineSettings) -> Result<()> {
    let report = simulate(args, settings)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn simulate(args: SimulateArgs, settings: &EngineSettings) -> Result<SimulationReport> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be at least 1");
    }
    if !(args.seconds.is_finite() && args.seconds >= 0.0) {
        anyhow::bail!("--seconds must be a non-negative number");
    }

    let config = super::config_from(settings, &args.tag, args.count, args.color.as_deref());
    let viewport = Viewport::new(args.width, args.height);
    let mut engine = VisualEngine::headless(config).with_budget(settings.budget_table());
    engine.initialize()?;

    let dt = 1.0 / args.fps as f64;
    let mut clock = FrameClock::new();
    // Low frame rates step further than the real-time frame clamp
    clock.max_delta = clock.max_delta.max(dt);
    let total_frames = (args.seconds * args.fps as f64).round() as u64;
    let mut snapshots = vec![snapshot(0.0, &engine, viewport)];

    for frame in 1..=total_frames {
        let step = clock.step(dt);
        engine.update(step)?;
        // One snapshot per simulated second
        if frame % args.fps as u64 == 0 {
            snapshots.push(snapshot(clock.total_time, &engine, viewport));
        }
    }

    let particles = engine.mounted_count();
    engine.shutdown()?;

    let report = SimulationReport {
        effect_tag: args.tag,
        particles,
        frames: clock.frame_count,
        simulated_seconds: clock.total_time,
        viewport,
        snapshots,
        active_after_shutdown: engine.host().active_count(),
    };
    Ok(report)
}

fn snapshot(time: f64, engine: &VisualEngine, viewport: Viewport) -> Snapshot {
    let instances = engine.pack_instances(viewport);
    let visible: Vec<&ParticleInstance> = instances.iter().filter(|i| i.is_visible()).collect();
    let mean_opacity = if visible.is_empty() {
        0.0
    } else {
        visible.iter().map(|i| i.pos_rot[3]).sum::<f32>() / visible.len() as f32
    };
    let on_screen = visible
        .iter()
        .filter(|i| {
            let [x, y, _, _] = i.pos_rot;
            (0.0..=viewport.width as f32).contains(&x)
                && (0.0..=viewport.height as f32).contains(&y)
        })
        .count();

    Snapshot {
        time,
        running: engine.host().active_count(),
        visible: visible.len(),
        mean_opacity,
        on_screen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tag: &str, seconds: f64, fps: u32) -> SimulateArgs {
        SimulateArgs {
            tag: tag.to_string(),
            count: Some(12),
            color: None,
            seconds,
            fps,
            width: 640.0,
            height: 360.0,
        }
    }

    #[test]
    fn low_frame_rate_covers_requested_time() {
        let report = simulate(args("falling-petal", 4.0, 2), &EngineSettings::default()).unwrap();
        assert_eq!(report.frames, 8);
        assert!((report.simulated_seconds - 4.0).abs() < 1e-9);
        let times: Vec<f64> = report.snapshots.iter().map(|s| s.time).collect();
        assert_eq!(times.len(), 5);
        for (i, time) in times.iter().enumerate() {
            assert!((time - i as f64).abs() < 1e-9, "snapshot {i} at {time}");
        }
    }

    #[test]
    fn one_fps_steps_whole_seconds() {
        let report = simulate(args("mist", 3.0, 1), &EngineSettings::default()).unwrap();
        assert_eq!(report.frames, 3);
        assert!((report.simulated_seconds - 3.0).abs() < 1e-9);
    }

    #[test]
    fn shutdown_leaves_nothing_running() {
        let report = simulate(args("lightning", 2.0, 30), &EngineSettings::default()).unwrap();
        assert_eq!(report.particles, 12);
        assert_eq!(report.active_after_shutdown, 0);
        assert!((report.simulated_seconds - 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(simulate(args("mist", 1.0, 0), &EngineSettings::default()).is_err());
    }
}
