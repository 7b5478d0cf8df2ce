use delve_geom::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Break,
    Place,
    Footstep,
    /// Looping hum of an enemy miner.
    Ambient,
}

/// A positional sound the audio backend should play.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundCue {
    pub sound: Sound,
    pub pos: Vec3,
}
