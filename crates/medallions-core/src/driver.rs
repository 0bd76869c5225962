//! Frame-by-frame animation state.
//!
//! The driver pulls one spectrum per frame, advances the rotation phase by
//! the spectrum peak and hands everything to the compositor.

use rand::Rng;

use crate::compositor::{compose_frame, Frame};
use crate::config::PatternConfig;
use crate::geom::Viewport;
use crate::layout::build_layout;
use crate::medallion::Medallion;
use crate::paint::Painter;
use crate::signal::{SignalSource, Spectrum};

/// Rotation phase gained per frame is `peak / ROTATION_DIVISOR`
pub const ROTATION_DIVISOR: f32 = 10_000.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Paused,
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Running => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Running,
        }
    }

    /// Text for the toggle control: the action a click performs
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Running => "Pause",
            PlaybackState::Paused => "Play",
        }
    }
}

/// What the last frame consumed
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameStats {
    pub peak: f32,
    pub bins: usize,
    pub underrun: bool,
    pub medallions: usize,
}

/// Owns the medallion collection and the rotation phase
///
/// The collection is only ever replaced whole: a rebuild constructs the new
/// layout first and swaps it in afterwards.
pub struct Driver<R: Rng> {
    config: PatternConfig,
    viewport: Viewport,
    medallions: Vec<Medallion>,
    rotation: f32,
    playback: PlaybackState,
    rng: R,
    last_spectrum: Spectrum,
}

impl<R: Rng> Driver<R> {
    pub fn new(config: PatternConfig, viewport: Viewport, mut rng: R) -> Self {
        let config = config.sanitized();
        let medallions = build_layout(viewport, &config, &mut rng);
        let last_spectrum = Spectrum::silent(config.spectrum_bins);
        Self {
            config,
            viewport,
            medallions,
            rotation: 0.0,
            playback: PlaybackState::Paused,
            rng,
            last_spectrum,
        }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    pub fn medallions(&self) -> &[Medallion] {
        &self.medallions
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    /// Spectrum used by the most recent frame
    pub fn last_spectrum(&self) -> &Spectrum {
        &self.last_spectrum
    }

    /// Discard the layout and tile the new viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.rebuild();
    }

    /// New random recipes and specials at the current size
    pub fn regenerate(&mut self) {
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let medallions = build_layout(self.viewport, &self.config, &mut self.rng);
        self.medallions = medallions;
        log::debug!(
            "layout rebuilt: {} medallions at {}x{}",
            self.medallions.len(),
            self.viewport.width,
            self.viewport.height
        );
    }

    /// Flip playback and forward it to the source
    pub fn toggle_playback<S: SignalSource + ?Sized>(&mut self, source: &mut S) -> PlaybackState {
        self.set_playback(source, self.playback.toggled());
        self.playback
    }

    pub fn set_playback<S: SignalSource + ?Sized>(&mut self, source: &mut S, state: PlaybackState) {
        self.playback = state;
        source.set_playing(state == PlaybackState::Running);
        log::info!("playback: {:?}", state);
    }

    /// Pull one spectrum, advance the rotation and draw everything
    pub fn frame<S, P>(&mut self, source: &mut S, painter: &mut P) -> FrameStats
    where
        S: SignalSource + ?Sized,
        P: Painter,
    {
        let spectrum = Spectrum::sanitize(source.analyze(), self.config.spectrum_bins);
        if spectrum.is_underrun() && !self.last_spectrum.is_underrun() {
            log::debug!("signal underrun, drawing with a silent spectrum");
        }

        self.rotation += spectrum.peak() / ROTATION_DIVISOR;

        let frame = Frame {
            medallions: &self.medallions,
            spectrum: &spectrum,
            rotation: self.rotation,
            config: &self.config,
        };
        compose_frame(painter, &frame);

        let stats = FrameStats {
            peak: spectrum.peak(),
            bins: spectrum.len(),
            underrun: spectrum.is_underrun(),
            medallions: self.medallions.len(),
        };
        self.last_spectrum = spectrum;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::grid_positions;
    use crate::paint::Recorder;
    use crate::signal::{FixedSpectrum, Silence};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn driver(w: f32, h: f32) -> Driver<StdRng> {
        Driver::new(
            PatternConfig::default(),
            Viewport::new(w, h),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn rotation_accumulates_peak() {
        let mut d = driver(800.0, 600.0);
        let mut source = FixedSpectrum::new(vec![200.0; 1024]);
        let mut rec = Recorder::new();

        for _ in 0..3 {
            d.frame(&mut source, &mut rec);
        }
        assert_relative_eq!(d.rotation(), 3.0 * 200.0 / 10_000.0, epsilon = 1e-6);

        source.set_bins(vec![0.0; 1024]);
        d.frame(&mut source, &mut rec);
        assert_relative_eq!(d.rotation(), 0.06, epsilon = 1e-6);
    }

    #[test]
    fn underrun_draws_silent_frame() {
        let mut d = driver(800.0, 600.0);
        let mut rec = Recorder::new();
        let stats = d.frame(&mut Silence::default(), &mut rec);

        assert!(stats.underrun);
        assert_eq!(stats.bins, 1024);
        assert_eq!(stats.peak, 0.0);
        assert_eq!(d.rotation(), 0.0);
        assert!(rec.shapes().count() > 0);

        let last = d.last_spectrum();
        assert!(last.is_underrun());
        assert_eq!(last.len(), 1024);
        assert!(last.bins().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn short_spectrum_is_replaced() {
        let mut d = driver(400.0, 400.0);
        let mut source = FixedSpectrum::new(vec![255.0; 10]);
        let stats = d.frame(&mut source, &mut Recorder::new());
        assert!(stats.underrun);
        assert_eq!(d.rotation(), 0.0);
    }

    #[test]
    fn resize_rebuilds_from_scratch() {
        let mut d = driver(800.0, 600.0);
        assert_eq!(d.medallions().len(), 20);

        d.resize(1280.0, 720.0);
        let expected = grid_positions(Viewport::new(1280.0, 720.0), 180.0, 35.0).len();
        assert_eq!(d.medallions().len(), expected);
        assert_eq!(d.medallions().iter().filter(|m| m.is_special).count(), 2);
        assert!(d
            .medallions()
            .iter()
            .all(|m| m.center.x < 1280.0 + 180.0 && m.center.y < 720.0 + 180.0));

        d.resize(100.0, 100.0);
        assert_eq!(d.medallions().len(), 1);
    }

    #[test]
    fn regenerate_keeps_geometry_changes_recipes() {
        let mut d = driver(800.0, 600.0);
        let before = d.medallions().to_vec();
        d.regenerate();
        let after = d.medallions();

        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(after) {
            assert_eq!(a.center, b.center);
        }
        assert_ne!(before, after);
    }

    #[test]
    fn toggle_reaches_source() {
        let mut d = driver(800.0, 600.0);
        let mut source = Silence::default();
        assert_eq!(d.playback(), PlaybackState::Paused);
        assert_eq!(d.playback().label(), "Play");

        assert_eq!(d.toggle_playback(&mut source), PlaybackState::Running);
        assert!(source.is_playing());
        assert_eq!(d.playback().label(), "Pause");

        d.toggle_playback(&mut source);
        assert!(!source.is_playing());
    }

    #[test]
    fn toggle_leaves_layout_alone() {
        let mut d = driver(800.0, 600.0);
        let before = d.medallions().to_vec();
        d.toggle_playback(&mut Silence::default());
        assert_eq!(d.medallions(), &before[..]);
    }
}
