// Collision audio cue

/// Fire-and-forget sound trigger. Implementations must not block the tick.
pub trait AudioCue {
    fn play_collision_sound(&mut self);
}

/// Cue that only logs; device playback is owned by the platform layer
#[derive(Debug, Default)]
pub struct LogAudio {
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cues triggered so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioCue for LogAudio {
    fn play_collision_sound(&mut self) {
        self.played += 1;
        log::debug!("bonk ({} cues)", self.played);
    }
}
