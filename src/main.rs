use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use delve::input::{MOUSE_MINE, MOUSE_PLACE};
use delve::{FrameClock, GameConfig, InputState, Key, LogAudio, Simulation};

/// Headless delve run: generates a level and drives the player with a fixed script.
#[derive(Parser, Debug)]
#[command(name = "delve", version)]
struct Args {
    /// TOML config; defaults apply to anything missing
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the session seed
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Default log level; RUST_LOG overrides it
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(args.log_level)
        .parse_env("RUST_LOG")
        .init();

    let mut cfg = match &args.config {
        Some(path) => GameConfig::load_from_path(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        cfg.world.seed = args.seed;
    }

    let mut clock = FrameClock::new(cfg.frame.max_dt);
    let mut sim = Simulation::new(cfg)?;
    let mut input = InputState::new();
    let mut audio = LogAudio::default();

    // Walk forward while mining, sweep the view, and every few seconds jump
    // and try to place a scaffold.
    input.key_down(Key::W);
    input.mouse_down(MOUSE_MINE);
    for frame in 0..args.frames {
        input.mouse_motion(2.0, if frame % 240 < 120 { 0.5 } else { -0.5 });
        if frame % 180 == 90 {
            input.key_down(Key::Space);
            input.mouse_up(MOUSE_MINE);
            input.mouse_down(MOUSE_PLACE);
        } else if frame % 180 == 91 {
            input.key_up(Key::Space);
            input.mouse_up(MOUSE_PLACE);
            input.mouse_down(MOUSE_MINE);
        }

        let Some(dt) = clock.accept(args.dt, true) else {
            continue;
        };
        if let Some(hud) = sim.update(dt, &mut input, &mut audio) {
            log::info!(
                "frame {frame}: ${} health {} level {}",
                hud.money,
                hud.health,
                hud.level
            );
        }
        if sim.player().is_dead() {
            log::info!("player died on frame {frame}");
            break;
        }
    }

    let world = sim.world();
    let quads: usize = world.chunks().map(|c| c.mesh().quad_count()).sum();
    log::info!(
        "done after {:.1}s simulated: level {}, {} enemies, {} quads, {} sounds",
        clock.total(),
        sim.level(),
        sim.enemies().len(),
        quads,
        audio.played()
    );
    Ok(())
}
