// PCM sample buffer
//
// Owns interleaved samples plus the Format describing them. Conversion runs
// channel remapping first, then bit depth rescaling, always against the
// buffer's current format as the source side.

use crate::convert::{ConversionResult, bit_depth, channels};
use crate::format::Format;
use std::time::Duration;

pub use crate::convert::Sample;

/// Interleaved PCM samples bound to a Format.
///
/// Samples are trusted to match the format: `samples.len()` should be a
/// multiple of the channel count and every value should lie in the range of
/// the bit depth. Neither is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    samples: Vec<Sample>,
    format: Format,
}

impl Buffer {
    /// Wrap interleaved samples (frame-major: L, R, L, R, ...)
    pub fn new(samples: Vec<Sample>, format: Format) -> Self {
        Self { samples, format }
    }

    /// Build a buffer from per-frame sample groups
    pub fn from_frames<I, F>(frames: I, format: Format) -> Self
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[Sample]>,
    {
        let mut samples = Vec::new();
        for frame in frames {
            samples.extend_from_slice(frame.as_ref());
        }
        Self { samples, format }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn channels(&self) -> u16 {
        self.format.channels()
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.format.bits_per_sample()
    }

    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate()
    }

    /// Interleaved samples as stored
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterate over frames, each a slice of `channels()` samples
    pub fn frames(&self) -> std::slice::ChunksExact<'_, Sample> {
        self.samples.chunks_exact(self.channels() as usize)
    }

    /// Number of whole frames held
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Playback duration at the buffer's sample rate
    pub fn duration(&self) -> Duration {
        self.format.duration_of(self.frame_count())
    }

    /// Give up the buffer and keep its samples
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    /// Produce a new buffer converted to `target`, leaving `self` untouched.
    ///
    /// The sample rate of `target` is adopted as-is; no resampling happens.
    pub fn convert(&self, target: Format) -> ConversionResult<Buffer> {
        let samples = convert_samples(&self.samples, self.format, target)?;
        Ok(Buffer {
            samples,
            format: target,
        })
    }

    /// Convert this buffer to `target` in place.
    ///
    /// Samples and format are replaced together. On error the buffer is left
    /// exactly as it was.
    pub fn convert_in_place(&mut self, target: Format) -> ConversionResult<&mut Self> {
        if self.format.channels() == target.channels() {
            // No remap needed, rescale the owned samples directly
            bit_depth::convert(
                &mut self.samples,
                self.format.bits_per_sample(),
                target.bits_per_sample(),
            );
            tracing::debug!(
                from = %self.format,
                to = %target,
                frames = self.frame_count(),
                "converted PCM buffer in place"
            );
        } else {
            self.samples = convert_samples(&self.samples, self.format, target)?;
        }
        self.format = target;
        Ok(self)
    }
}

fn convert_samples(samples: &[Sample], from: Format, to: Format) -> ConversionResult<Vec<Sample>> {
    let mut converted = channels::convert(samples, from.channels(), to.channels())
        .inspect_err(|e| tracing::warn!(%from, %to, "refusing conversion: {}", e))?;
    bit_depth::convert(
        &mut converted,
        from.bits_per_sample(),
        to.bits_per_sample(),
    );

    if from == to {
        tracing::trace!(format = %from, "conversion is a no-op");
    } else {
        tracing::debug!(
            %from,
            %to,
            frames = converted.len() / to.channels() as usize,
            "converted PCM buffer"
        );
    }
    Ok(converted)
}
