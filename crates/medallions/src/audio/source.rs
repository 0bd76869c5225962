//! Track playback wired to the analyzer as a frame signal source.

use medallions_core::SignalSource;
use std::path::Path;

use super::analyzer::SpectrumAnalyzer;
use super::player::TrackPlayer;
use super::track::Track;

pub struct AudioSource {
    player: TrackPlayer,
    analyzer: SpectrumAnalyzer,
}

impl AudioSource {
    pub fn open(path: &Path, bins: usize, smoothing: f32) -> anyhow::Result<Self> {
        let track = Track::load(path)?;
        let analyzer = SpectrumAnalyzer::new(bins, smoothing);
        let player = TrackPlayer::new(&track, analyzer.fft_size())?;
        log::debug!(
            "analyzing {} bins over {} samples on {}",
            bins,
            analyzer.fft_size(),
            player.device_name()
        );
        Ok(Self { player, analyzer })
    }
}

impl SignalSource for AudioSource {
    fn analyze(&mut self) -> Option<Vec<f32>> {
        let samples = self.player.snapshot();
        Some(self.analyzer.analyze(&samples))
    }

    fn set_playing(&mut self, playing: bool) {
        self.player.set_playing(playing);
    }

    fn is_playing(&self) -> bool {
        self.player.is_playing()
    }
}
