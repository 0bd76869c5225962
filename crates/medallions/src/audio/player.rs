//! Track playback through the default output device.
//!
//! The stream callback loops the track, and copies every mono sample it plays
//! into a ring buffer the analyzer reads once per frame. While paused the
//! callback plays silence, so the analyzed spectrum decays to zero.

use anyhow::{anyhow, bail, Context};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample, Stream, StreamConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::track::Track;

/// Fixed-length window of the most recently played samples
#[derive(Clone)]
pub struct SampleRing {
    inner: Arc<Mutex<Vec<f32>>>,
}

impl SampleRing {
    pub fn new(len: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(vec![0.0; len.max(1)])),
        }
    }

    pub fn push(&self, samples: &[f32]) {
        if let Ok(mut ring) = self.inner.lock() {
            push_samples(&mut ring, samples);
        }
    }

    /// Oldest sample first
    pub fn snapshot(&self) -> Vec<f32> {
        match self.inner.lock() {
            Ok(ring) => ring.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

pub struct TrackPlayer {
    ring: SampleRing,
    playing: Arc<AtomicBool>,
    device_name: String,
    _stream: Stream,
}

impl TrackPlayer {
    /// Open the default output device; the stream starts paused
    ///
    /// `window` is the number of recent samples kept for analysis and
    /// should match the analyzer's FFT size.
    pub fn new(track: &Track, window: usize) -> anyhow::Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("no output device available"))?;
        let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());
        let supported = device
            .default_output_config()
            .context("querying output config")?;

        let ring = SampleRing::new(window);
        let playing = Arc::new(AtomicBool::new(false));
        let cursor = PlayCursor::new(track, supported.sample_rate().0);

        let config: StreamConfig = supported.config();
        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &config, cursor, &ring, window, &playing)
            }
            cpal::SampleFormat::I16 => {
                build_stream::<i16>(&device, &config, cursor, &ring, window, &playing)
            }
            cpal::SampleFormat::U16 => {
                build_stream::<u16>(&device, &config, cursor, &ring, window, &playing)
            }
            other => bail!("unsupported sample format {:?}", other),
        }?;
        stream.play().context("starting output stream")?;

        log::info!(
            "Playing {} ({:.1}s) on {} at {} Hz",
            track.name(),
            track.duration_secs(),
            device_name,
            config.sample_rate.0
        );

        Ok(Self {
            ring,
            playing,
            device_name,
            _stream: stream,
        })
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Relaxed);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    /// Most recent `window` played samples, oldest first
    pub fn snapshot(&self) -> Vec<f32> {
        self.ring.snapshot()
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mut cursor: PlayCursor,
    ring: &SampleRing,
    window: usize,
    playing: &Arc<AtomicBool>,
) -> anyhow::Result<Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels.max(1) as usize;
    let ring = ring.clone();
    let playing = Arc::clone(playing);
    let mut played = Vec::with_capacity(window);

    let err_fn = |err| log::error!("Audio stream error: {}", err);

    let stream = device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                let frames = data.len() / channels;
                render_block(&mut cursor, playing.load(Ordering::Relaxed), frames, &mut played);
                for (frame, &sample) in data.chunks_mut(channels).zip(&played) {
                    for out in frame.iter_mut() {
                        *out = T::from_sample(sample);
                    }
                }
                ring.push(&played);
            },
            err_fn,
            None,
        )
        .context("building output stream")?;
    Ok(stream)
}

/// Mono samples for one callback; silence while paused
fn render_block(cursor: &mut PlayCursor, playing: bool, frames: usize, out: &mut Vec<f32>) {
    out.clear();
    if playing {
        out.extend((0..frames).map(|_| cursor.next_sample()));
    } else {
        out.resize(frames, 0.0);
    }
}

/// Append to a fixed-length ring, dropping the oldest samples
pub fn push_samples(ring: &mut Vec<f32>, samples: &[f32]) {
    let capacity = ring.len();
    if samples.len() >= capacity {
        ring.copy_from_slice(&samples[samples.len() - capacity..]);
        return;
    }
    ring.drain(..samples.len());
    ring.extend_from_slice(samples);
}

/// Looping read position with nearest-sample rate conversion
struct PlayCursor {
    samples: Arc<Vec<f32>>,
    position: f64,
    step: f64,
}

impl PlayCursor {
    fn new(track: &Track, device_rate: u32) -> Self {
        Self {
            samples: Arc::clone(track.samples()),
            position: 0.0,
            step: track.sample_rate() as f64 / device_rate.max(1) as f64,
        }
    }

    fn next_sample(&mut self) -> f32 {
        let len = self.samples.len();
        if len == 0 {
            return 0.0;
        }
        let sample = self.samples[self.position as usize % len];
        self.position += self.step;
        if self.position >= len as f64 {
            self.position -= len as f64;
        }
        sample
    }
}
