//! WAV decoding into a mono sample buffer.

use anyhow::{bail, Context};
use std::path::Path;
use std::sync::Arc;

/// A decoded track, mixed down to mono
#[derive(Clone, Debug)]
pub struct Track {
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
    name: String,
}

impl Track {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let reader = hound::WavReader::open(path)
            .with_context(|| format!("opening {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::decode(reader, name)
    }

    fn decode<R: std::io::Read>(reader: hound::WavReader<R>, name: String) -> anyhow::Result<Self> {
        let spec = reader.spec();

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<_, _>>()
                .context("decoding float samples")?,
            hound::SampleFormat::Int => {
                let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max_val))
                    .collect::<Result<_, _>>()
                    .context("decoding integer samples")?
            }
        };

        let samples = mix_down(&interleaved, spec.channels as usize);
        if samples.is_empty() {
            bail!("{} contains no samples", name);
        }

        Ok(Self {
            samples: Arc::new(samples),
            sample_rate: spec.sample_rate,
            name,
        })
    }

    #[cfg(test)]
    pub fn from_samples(name: impl Into<String>, samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples: Arc::new(samples),
            sample_rate,
            name: name.into(),
        }
    }

    pub fn samples(&self) -> &Arc<Vec<f32>> {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate.max(1) as f32
    }
}

/// Average interleaved frames into one channel
pub fn mix_down(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}
