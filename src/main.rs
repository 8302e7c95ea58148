//! Headless shatter driver.
//!
//! Runs a simulation for a number of frames with a fixed delta, logs the
//! particle counts, and prints the final JSON export to stdout.
//!
//! Usage: `shatter --intensity 0.8 --frames 300 -v`

use clap::Parser;
use log::{debug, info};
use shatter::time::FrameClock;
use shatter::ShatterConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "shatter", version, about = "Run a shatter effect headless and print its final state")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long)]
    frames: Option<u32>,

    /// Intensity for every frame
    #[arg(short, long, allow_negative_numbers = true)]
    intensity: Option<f32>,

    /// Anchor point as X Y
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    center: Option<Vec<f32>>,

    /// Seconds per frame
    #[arg(long)]
    dt: Option<f32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve(&self) -> shatter::Result<ShatterConfig> {
        let mut config = match &self.config {
            Some(path) => ShatterConfig::load(path)?,
            None => ShatterConfig::default(),
        };
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(intensity) = self.intensity {
            config.intensity = intensity;
        }
        if let Some([x, y]) = self.center.as_deref() {
            config.center = [*x, *y];
        }
        if let Some(dt) = self.dt {
            config.fixed_delta = dt;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> shatter::Result<String> {
    let config = cli.resolve()?;
    debug!("Resolved config: {config:?}");

    let mut sim = config.build();
    let mut clock = FrameClock::new(config.fixed_delta);
    clock.set_time_scale(config.time_scale);
    let started = Instant::now();

    info!(
        "Running {} frames at intensity {} from ({}, {})",
        config.frames, config.intensity, config.center[0], config.center[1]
    );

    let mut peak = sim.len();
    for _ in 0..config.frames {
        let dt = clock.tick();
        let report = sim.update(dt, config.intensity);
        peak = peak.max(report.alive);
        debug!(
            "frame {:>5} t={:.3}s alive={} expired={} spawned={}",
            clock.frame(),
            clock.elapsed(),
            report.alive,
            report.expired,
            report.spawned
        );
    }

    info!(
        "Finished after {:.3}s simulated ({:?} wall): {} alive, peak {}",
        clock.elapsed(),
        started.elapsed(),
        sim.len(),
        peak
    );

    sim.export_json()
}
