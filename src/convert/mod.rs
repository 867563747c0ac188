// Sample conversion - channel remapping and bit depth rescaling
//
// Both converters work on interleaved sample slices. Buffer applies
// channel conversion first, then bit depth conversion.

pub mod bit_depth;
pub mod channels;

use thiserror::Error;

/// One PCM sample. Wide enough for every depth up to 32 bits.
pub type Sample = i32;

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("unsupported channel conversion: {from} -> {to} channels")]
    UnsupportedChannels { from: u16, to: u16 },
}

pub type ConversionResult<T> = Result<T, ConversionError>;
