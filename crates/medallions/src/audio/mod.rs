mod analyzer;
mod player;
mod source;
mod track;

use medallions_core::{SignalSource, Silence};
use source::AudioSource;
use std::path::Path;

/// Open `track` as a signal source, or fall back to silence
pub fn open_source(track: Option<&Path>, bins: usize, smoothing: f32) -> Box<dyn SignalSource> {
    let Some(path) = track else {
        log::info!("No track configured, running silent");
        return Box::new(Silence::default());
    };
    match AudioSource::open(path, bins, smoothing) {
        Ok(source) => Box::new(source),
        Err(e) => {
            log::warn!("Audio unavailable ({:#}), running silent", e);
            Box::new(Silence::default())
        }
    }
}
