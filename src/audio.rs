use delve_edit::{Sound, SoundCue};
use delve_geom::Vec3;

/// Positional sound output. Buffers are owned by the backend.
pub trait AudioSink {
    fn play_at(&mut self, sound: Sound, pos: Vec3);
}

/// Backend for headless runs: every cue becomes a debug log line.
#[derive(Debug, Default)]
pub struct LogAudio {
    played: u64,
}

impl LogAudio {
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play_at(&mut self, sound: Sound, pos: Vec3) {
        self.played += 1;
        log::debug!(target: "audio", "{sound:?} at ({:.1}, {:.1}, {:.1})", pos.x, pos.y, pos.z);
    }
}

/// Recording sink.
impl AudioSink for Vec<SoundCue> {
    fn play_at(&mut self, sound: Sound, pos: Vec3) {
        self.push(SoundCue { sound, pos });
    }
}
