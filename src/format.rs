// PCM format descriptor
//
// A Format is an immutable {channels, bits per sample, sample rate} triple.
// It carries no conversion logic; Buffer operations take one as the target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Format construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("channel count must be positive")]
    ZeroChannels,

    #[error("bits per sample must be positive")]
    ZeroBitsPerSample,

    #[error("sample rate must be positive")]
    ZeroSampleRate,
}

/// Describes the layout of PCM samples.
///
/// 8-bit samples are offset-binary (0..=255, silence at 128); every other
/// depth is signed and centred at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFormat", into = "RawFormat")]
pub struct Format {
    channels: u16,
    bits_per_sample: u16,
    sample_rate: u32,
}

impl Format {
    /// CD audio: stereo, 16-bit, 44.1kHz
    pub const CD: Format = Format {
        channels: 2,
        bits_per_sample: 16,
        sample_rate: 44100,
    };

    /// Narrowband telephony: mono, 8-bit, 8kHz
    pub const TELEPHONY: Format = Format {
        channels: 1,
        bits_per_sample: 8,
        sample_rate: 8000,
    };

    /// Create a format, rejecting zero-valued fields
    pub fn new(channels: u16, bits_per_sample: u16, sample_rate: u32) -> Result<Self, FormatError> {
        if channels == 0 {
            return Err(FormatError::ZeroChannels);
        }
        if bits_per_sample == 0 {
            return Err(FormatError::ZeroBitsPerSample);
        }
        if sample_rate == 0 {
            return Err(FormatError::ZeroSampleRate);
        }
        Ok(Self {
            channels,
            bits_per_sample,
            sample_rate,
        })
    }

    /// Single-channel format
    pub fn mono(bits_per_sample: u16, sample_rate: u32) -> Result<Self, FormatError> {
        Self::new(1, bits_per_sample, sample_rate)
    }

    /// Two-channel format
    pub fn stereo(bits_per_sample: u16, sample_rate: u32) -> Result<Self, FormatError> {
        Self::new(2, bits_per_sample, sample_rate)
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Same format with a different channel count
    pub fn with_channels(self, channels: u16) -> Result<Self, FormatError> {
        Self::new(channels, self.bits_per_sample, self.sample_rate)
    }

    /// Same format with a different bit depth
    pub fn with_bits_per_sample(self, bits_per_sample: u16) -> Result<Self, FormatError> {
        Self::new(self.channels, bits_per_sample, self.sample_rate)
    }

    /// Same format with a different sample rate (relabelling only, no resampling)
    pub fn with_sample_rate(self, sample_rate: u32) -> Result<Self, FormatError> {
        Self::new(self.channels, self.bits_per_sample, sample_rate)
    }

    /// True for 8-bit formats, which store samples unsigned around 128
    pub fn is_offset_binary(&self) -> bool {
        self.bits_per_sample == 8
    }

    /// Bytes used to store one sample on disk
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample.div_ceil(8)
    }

    /// Bytes used to store one frame on disk
    pub fn block_align(&self) -> u32 {
        self.channels as u32 * self.bytes_per_sample() as u32
    }

    /// Bytes per second of audio
    pub fn byte_rate(&self) -> u64 {
        self.block_align() as u64 * self.sample_rate as u64
    }

    /// Playback duration of `frames` frames at this sample rate
    pub fn duration_of(&self, frames: usize) -> Duration {
        let nanos = frames as u128 * 1_000_000_000 / self.sample_rate as u128;
        Duration::from_nanos(nanos as u64)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = match self.channels {
            1 => "mono".to_string(),
            2 => "stereo".to_string(),
            n => format!("{}ch", n),
        };
        write!(
            f,
            "{}-bit {} @ {} Hz",
            self.bits_per_sample, layout, self.sample_rate
        )
    }
}

// Wire shape used by serde so deserialized formats go through validation
#[derive(Serialize, Deserialize)]
struct RawFormat {
    channels: u16,
    bits_per_sample: u16,
    sample_rate: u32,
}

impl TryFrom<RawFormat> for Format {
    type Error = FormatError;

    fn try_from(raw: RawFormat) -> Result<Self, Self::Error> {
        Format::new(raw.channels, raw.bits_per_sample, raw.sample_rate)
    }
}

impl From<Format> for RawFormat {
    fn from(format: Format) -> Self {
        Self {
            channels: format.channels,
            bits_per_sample: format.bits_per_sample,
            sample_rate: format.sample_rate,
        }
    }
}
