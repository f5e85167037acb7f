//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::demo;
use crate::tick::TickConfig;

/// Where system diagnostics go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Plain lines on standard output.
    Console,
    /// `tracing` events (subject to `RUST_LOG`).
    Tracing,
}

#[derive(Debug, Parser)]
#[command(name = "ecs_app", about = "Console host that ticks the scene ECS")]
pub struct Args {
    /// Simulation rate in ticks per second; each tick advances 1 / rate seconds
    #[arg(long, default_value_t = 60.0, value_parser = positive_rate)]
    pub tick_rate: f32,

    /// Wall-clock delay between ticks, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub frame_delay_ms: u64,

    /// Stop after this many ticks (0 = run until quit)
    #[arg(long, default_value_t = 0)]
    pub max_ticks: u64,

    /// JSON scene description to load instead of the sample scene
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Entity whose sound the `p` key toggles
    #[arg(long, default_value = demo::ENTITY_A)]
    pub sound_entity: String,

    /// Entity whose rigid-body mass the `+`/`-` keys adjust
    #[arg(long, default_value = demo::ENTITY_B)]
    pub body_entity: String,

    /// Diagnostic output
    #[arg(long, value_enum, default_value_t = Output::Console)]
    pub output: Output,
}

impl Args {
    /// The tick-loop settings these arguments describe.
    #[must_use]
    pub fn tick_config(&self) -> TickConfig {
        TickConfig {
            tick_rate: self.tick_rate,
            frame_delay: Duration::from_millis(self.frame_delay_ms),
            max_ticks: self.max_ticks,
            sound_entity: self.sound_entity.clone(),
            body_entity: self.body_entity.clone(),
        }
    }
}

fn positive_rate(s: &str) -> Result<f32, String> {
    let rate: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("tick rate must be a positive number, got {rate}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ecs_app"]).unwrap();
        assert_eq!(args.tick_rate, 60.0);
        assert_eq!(args.output, Output::Console);
        assert!(args.scene.is_none());

        let config = args.tick_config();
        assert_eq!(config.frame_delay, Duration::from_millis(500));
        assert_eq!(config.max_ticks, 0);
        assert_eq!(config.sound_entity, "entityA");
        assert_eq!(config.body_entity, "entityB");
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "ecs_app",
            "--tick-rate",
            "30",
            "--frame-delay-ms",
            "0",
            "--max-ticks",
            "3",
            "--scene",
            "level.json",
            "--output",
            "tracing",
        ])
        .unwrap();
        assert_eq!(args.tick_config().dt(), 1.0 / 30.0);
        assert_eq!(args.max_ticks, 3);
        assert_eq!(args.scene, Some(PathBuf::from("level.json")));
        assert_eq!(args.output, Output::Tracing);
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        assert!(Args::try_parse_from(["ecs_app", "--tick-rate", "0"]).is_err());
        assert!(Args::try_parse_from(["ecs_app", "--tick-rate", "-5"]).is_err());
        assert!(Args::try_parse_from(["ecs_app", "--tick-rate", "fast"]).is_err());
    }
}
