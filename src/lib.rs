// pcm_convert - Library exports for the CLI, tests and benchmarks

pub mod buffer;
pub mod config;
pub mod convert;
pub mod format;
pub mod wav;

// Re-export commonly used types for convenience
pub use buffer::{Buffer, Sample};
pub use config::{ConfigError, ConvertConfig, TargetFormat};
pub use convert::ConversionError;
pub use format::{Format, FormatError};
pub use wav::{WavError, read_wav, read_wav_file, write_wav, write_wav_file};
