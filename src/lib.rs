//! Game layer of delve: actors, levels, and the frame loop over the voxel crates.
#![forbid(unsafe_code)]

pub mod audio;
pub mod clock;
pub mod config;
pub mod enemy;
pub mod hatch;
pub mod input;
pub mod player;
pub mod simulation;

pub use audio::{AudioSink, LogAudio};
pub use clock::FrameClock;
pub use config::GameConfig;
pub use enemy::{EnemyConfig, EnemyMiner, MinerState};
pub use hatch::Hatch;
pub use input::{InputSource, InputState, Key};
pub use player::{Player, PlayerConfig};
pub use simulation::{Hud, Simulation};
