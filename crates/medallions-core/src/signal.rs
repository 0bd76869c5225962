//! The per-frame spectrum consumed by the driver.
//!
//! Sources hand over raw bins; [`Spectrum::sanitize`] turns whatever arrived
//! into a clamped spectrum of the expected length.

use crate::medallion::SPECTRUM_MAX;

/// Anything that can hand over a magnitude spectrum once per frame
///
/// Values are expected in `0..=255`. The driver pulls once per frame and
/// never blocks; a source with nothing to offer returns `None`.
pub trait SignalSource {
    /// Current spectrum, `None` when no data is available
    fn analyze(&mut self) -> Option<Vec<f32>>;

    /// Start or pause playback
    fn set_playing(&mut self, playing: bool);

    fn is_playing(&self) -> bool;
}

/// One frame of validated spectrum data
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    bins: Vec<f32>,
    peak: f32,
    underrun: bool,
}

impl Spectrum {
    /// All-zero spectrum of `len` bins (at least one)
    pub fn silent(len: usize) -> Self {
        Self {
            bins: vec![0.0; len.max(1)],
            peak: 0.0,
            underrun: false,
        }
    }

    /// Validate raw source output against the expected bin count
    ///
    /// Missing or short data becomes silence of the expected length; long
    /// data is truncated. Each value is clamped to `0..=255` and NaN is
    /// read as zero.
    pub fn sanitize(raw: Option<Vec<f32>>, expected_len: usize) -> Self {
        let expected_len = expected_len.max(1);
        let mut bins = match raw {
            Some(bins) if bins.len() >= expected_len => bins,
            _ => {
                let mut silent = Self::silent(expected_len);
                silent.underrun = true;
                return silent;
            }
        };
        bins.truncate(expected_len);
        for v in bins.iter_mut() {
            *v = if v.is_nan() { 0.0 } else { v.clamp(0.0, SPECTRUM_MAX) };
        }
        let peak = bins.iter().cloned().fold(0.0f32, f32::max);
        Self {
            bins,
            peak,
            underrun: false,
        }
    }

    pub fn bins(&self) -> &[f32] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Largest bin value
    pub fn peak(&self) -> f32 {
        self.peak
    }

    /// True when the source had no usable data this frame
    pub fn is_underrun(&self) -> bool {
        self.underrun
    }

    /// Bin bound to medallion `index`, wrapping past the last bin
    pub fn value_for(&self, index: usize) -> f32 {
        self.bins[index % self.bins.len()]
    }
}

/// Source that never has data
#[derive(Default)]
pub struct Silence {
    playing: bool,
}

impl SignalSource for Silence {
    fn analyze(&mut self) -> Option<Vec<f32>> {
        None
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Source replaying a fixed spectrum, holding it while paused
pub struct FixedSpectrum {
    bins: Vec<f32>,
    playing: bool,
}

impl FixedSpectrum {
    pub fn new(bins: Vec<f32>) -> Self {
        Self {
            bins,
            playing: true,
        }
    }

    pub fn set_bins(&mut self, bins: Vec<f32>) {
        self.bins = bins;
    }
}

impl SignalSource for FixedSpectrum {
    fn analyze(&mut self) -> Option<Vec<f32>> {
        Some(self.bins.clone())
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
