// WAV reader/writer adapter
//
// Bridges hound to Buffer. hound hands out 8-bit samples as signed values,
// so they are re-centred around 128 on the way in and back on the way out.
// No other transformation happens here.

use crate::buffer::{Buffer, Sample};
use crate::format::{Format, FormatError};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;
use thiserror::Error;

/// WAV adapter errors
#[derive(Debug, Error)]
pub enum WavError {
    #[error("WAV error: {0}")]
    Hound(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported sample format: only integer PCM is handled")]
    UnsupportedSampleFormat,

    #[error("invalid format in WAV header: {0}")]
    InvalidFormat(#[from] FormatError),
}

pub type WavResult<T> = Result<T, WavError>;

const OFFSET_BINARY_CENTER: Sample = 128;

/// Read an integer PCM WAV stream into a Buffer
pub fn read_wav<R: Read>(reader: R) -> WavResult<Buffer> {
    let reader = WavReader::new(reader)?;
    into_buffer(reader)
}

/// Read an integer PCM WAV file into a Buffer
pub fn read_wav_file<P: AsRef<Path>>(path: P) -> WavResult<Buffer> {
    let reader = WavReader::new(BufReader::new(File::open(path.as_ref())?))?;
    let buffer = into_buffer(reader)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        format = %buffer.format(),
        frames = buffer.frame_count(),
        "read WAV file"
    );
    Ok(buffer)
}

fn into_buffer<R: Read>(reader: WavReader<R>) -> WavResult<Buffer> {
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int {
        return Err(WavError::UnsupportedSampleFormat);
    }
    let format = Format::new(spec.channels, spec.bits_per_sample, spec.sample_rate)?;

    let recentre = format.is_offset_binary();
    let samples = reader
        .into_samples::<i32>()
        .map(|s| s.map(|s| if recentre { s + OFFSET_BINARY_CENTER } else { s }))
        .collect::<Result<Vec<Sample>, _>>()?;

    Ok(Buffer::new(samples, format))
}

/// Write a Buffer as an integer PCM WAV stream
pub fn write_wav<W: Write + Seek>(buffer: &Buffer, writer: W) -> WavResult<()> {
    let mut writer = WavWriter::new(writer, spec_for(buffer.format()))?;
    write_samples(&mut writer, buffer)?;
    writer.finalize()?;
    Ok(())
}

/// Write a Buffer to a WAV file, replacing any existing file
pub fn write_wav_file<P: AsRef<Path>>(buffer: &Buffer, path: P) -> WavResult<()> {
    let file = BufWriter::new(File::create(path.as_ref())?);
    write_wav(buffer, file)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        format = %buffer.format(),
        frames = buffer.frame_count(),
        "wrote WAV file"
    );
    Ok(())
}

fn spec_for(format: Format) -> WavSpec {
    WavSpec {
        channels: format.channels(),
        sample_rate: format.sample_rate(),
        bits_per_sample: format.bits_per_sample(),
        sample_format: SampleFormat::Int,
    }
}

fn write_samples<W: Write + Seek>(writer: &mut WavWriter<W>, buffer: &Buffer) -> WavResult<()> {
    let recentre = buffer.format().is_offset_binary();
    for &sample in buffer.samples() {
        let sample = if recentre {
            sample.wrapping_sub(OFFSET_BINARY_CENTER)
        } else {
            sample
        };
        writer.write_sample(sample)?;
    }
    Ok(())
}
