//! Input Replay
//!
//! Drives an input session from a scripted timeline instead of a live device.
//! - Controls loaded from a RON config
//! - Host frames advance the session by a fixed frame time
//! - Gameplay consumes buffered presses and motion commands on later frames
//! - The buffer is printed after every frame with a consumption
//!
//! Run with `RUST_LOG=holdfast_buffer=debug` to see consumption events.

use clap::Parser;
use holdfast_buffer::{InputBufferConfig, InputSession};
use holdfast_core::{InputId, Vec2};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = include_str!("../data/fighter.ron");
const DEFAULT_TIMELINE: &str = include_str!("../data/timeline.ron");

#[derive(Parser)]
#[command(about = "Replay a scripted input timeline through an input buffer")]
struct Args {
    /// Input buffer config (RON); uses the bundled fighter controls if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Timeline script (RON); uses the bundled timeline if omitted
    #[arg(long)]
    timeline: Option<PathBuf>,

    /// Print the buffer after every frame, not just frames with consumption
    #[arg(long)]
    verbose: bool,
}

/// A raw input event from the host
#[derive(Debug, Deserialize)]
enum Event {
    Press(InputId),
    Release(InputId),
    Axis(InputId, Vec2),
}

/// Everything that happens on one host frame
#[derive(Debug, Deserialize)]
struct Step {
    frame: u32,
    #[serde(default)]
    events: Vec<Event>,
    /// Actions gameplay tries to consume after the frame's updates
    #[serde(default)]
    consume: Vec<InputId>,
    /// Motion commands gameplay tries to consume
    #[serde(default)]
    motions: Vec<InputId>,
}

#[derive(Debug, Deserialize)]
struct Timeline {
    /// Host frame duration in seconds
    frame_time: f32,
    frames: u32,
    steps: Vec<Step>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InputBufferConfig::load(path)?,
        None => InputBufferConfig::from_ron_str(DEFAULT_CONFIG)?,
    };
    let timeline: Timeline = match &args.timeline {
        Some(path) => ron::from_str(&fs::read_to_string(path)?)?,
        None => ron::from_str(DEFAULT_TIMELINE)?,
    };

    info!(
        buffer_size = config.buffer_size,
        update_rate = config.update_rate,
        frames = timeline.frames,
        "Starting replay"
    );

    let mut session = InputSession::new(config)?;
    run(&mut session, &timeline, args.verbose)?;

    Ok(())
}

fn run(session: &mut InputSession, timeline: &Timeline, verbose: bool) -> holdfast_buffer::Result<()> {
    for frame in 1..=timeline.frames {
        let steps: Vec<&Step> = timeline.steps.iter().filter(|s| s.frame == frame).collect();

        for step in &steps {
            for event in &step.events {
                apply(session, event);
            }
        }

        let updates = session.tick(timeline.frame_time);

        let mut consumed_any = false;
        for step in &steps {
            for id in &step.consume {
                let consumed = session.try_consume_input(id.as_str())?;
                info!(frame, input = %id, consumed, "Consume action");
                consumed_any = true;
            }
            for id in &step.motions {
                let consumed = session.try_consume_directional_input(id.as_str())?;
                info!(frame, motion = %id, consumed, "Consume motion");
                consumed_any = true;
            }
        }

        if verbose || consumed_any {
            println!(
                "-- frame {frame} (tick {}, {updates} update(s)) --",
                session.buffer().tick()
            );
            print!("{}", session.debug_table());
        }
    }
    Ok(())
}

fn apply(session: &mut InputSession, event: &Event) {
    match event {
        Event::Press(id) => session.trigger_button(id.as_str(), true),
        Event::Release(id) => session.complete_input(id.as_str()),
        Event::Axis(id, axis) => session.trigger_axis(id.as_str(), *axis),
    }
}
