//! Spectrum analysis of the playback buffer.
//!
//! Produces one byte-scaled magnitude per bin, the way a browser
//! `AnalyserNode` does: windowed FFT, temporal smoothing of the magnitudes,
//! then decibels mapped linearly onto 0-255.

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

pub const MIN_DECIBELS: f32 = -100.0;
pub const MAX_DECIBELS: f32 = -30.0;

pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    fft_buffer: Vec<Complex<f32>>,
    fft_window: Vec<f32>,
    smoothed: Vec<f32>,
    smoothing: f32,
}

impl SpectrumAnalyzer {
    /// Analyzer producing `bins` values from an FFT of `2 * bins` samples
    pub fn new(bins: usize, smoothing: f32) -> Self {
        let bins = bins.max(1);
        let fft_size = bins * 2;
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);

        // Hann window
        let fft_window: Vec<f32> = (0..fft_size)
            .map(|i| 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / fft_size as f32).cos()))
            .collect();

        Self {
            fft,
            fft_buffer: vec![Complex::new(0.0, 0.0); fft_size],
            fft_window,
            smoothed: vec![0.0; bins],
            smoothing: smoothing.clamp(0.0, 0.99),
        }
    }

    pub fn fft_size(&self) -> usize {
        self.fft_buffer.len()
    }

    /// Analyze the newest `fft_size` samples; shorter input is zero-padded
    pub fn analyze(&mut self, samples: &[f32]) -> Vec<f32> {
        let fft_size = self.fft_size();
        let tail = &samples[samples.len().saturating_sub(fft_size)..];

        for (i, slot) in self.fft_buffer.iter_mut().enumerate() {
            let sample = tail.get(i).copied().unwrap_or(0.0);
            *slot = Complex::new(sample * self.fft_window[i], 0.0);
        }

        self.fft.process(&mut self.fft_buffer);

        let scale = 1.0 / fft_size as f32;
        let tau = self.smoothing;
        self.smoothed
            .iter_mut()
            .zip(&self.fft_buffer)
            .map(|(prev, bin)| {
                let magnitude = bin.norm() * scale;
                *prev = tau * *prev + (1.0 - tau) * magnitude;
                to_byte_scale(*prev)
            })
            .collect()
    }
}

/// Linear magnitude to the 0-255 display range
pub fn to_byte_scale(magnitude: f32) -> f32 {
    if magnitude <= 0.0 {
        return 0.0;
    }
    let db = 20.0 * magnitude.log10();
    (255.0 * (db - MIN_DECIBELS) / (MAX_DECIBELS - MIN_DECIBELS))
        .clamp(0.0, 255.0)
        .floor()
}
