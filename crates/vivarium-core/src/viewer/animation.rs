//! Animation clip playback.
//!
//! The model manifest can name one clip (the original page simply plays
//! the first clip a model ships with). The player tracks normalized
//! playback time; what that time drives is up to the app.

use glam::Quat;
use serde::Deserialize;

/// Clip metadata from the model manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipDescriptor {
    pub name: String,
    /// Clip length in seconds.
    pub duration: f32,
    /// Whether playback wraps at the end.
    #[serde(default = "default_looping")]
    pub looping: bool,
}

fn default_looping() -> bool {
    true
}

/// Playback state for a single clip.
#[derive(Debug, Clone)]
pub struct ClipPlayer {
    clip: ClipDescriptor,
    time: f32,
    playing: bool,
    /// Playback speed multiplier (1.0 = normal).
    pub speed: f32,
}

impl ClipPlayer {
    pub fn new(clip: ClipDescriptor) -> Self {
        Self {
            clip,
            time: 0.0,
            playing: true,
            speed: 1.0,
        }
    }

    pub fn clip(&self) -> &ClipDescriptor {
        &self.clip
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    /// Current playback time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Normalized playback position in [0, 1).
    pub fn phase(&self) -> f32 {
        if self.clip.duration <= 0.0 {
            return 0.0;
        }
        (self.time / self.clip.duration).fract()
    }

    /// Advance playback by dt seconds.
    pub fn tick(&mut self, dt: f32) {
        if !self.playing || self.clip.duration <= 0.0 {
            return;
        }
        self.time += dt * self.speed;
        if self.time >= self.clip.duration {
            if self.clip.looping {
                self.time %= self.clip.duration;
            } else {
                self.time = self.clip.duration;
                self.playing = false;
            }
        }
    }

    /// Gentle Y-axis sway derived from the playback phase, applied by the
    /// app to the model root while the clip plays.
    pub fn sway_rotation(&self, amplitude: f32) -> Quat {
        let angle = (self.phase() * std::f32::consts::TAU).sin() * amplitude;
        Quat::from_rotation_y(angle)
    }
}
