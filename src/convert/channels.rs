// Channel remapping
//
// Supported pairings:
// - same count: identity
// - 1 -> N: duplicate the mono sample into every channel
// - M -> 1: floor of the channel average
// - M -> 2 (M > 2): keep channels 0 and 1, drop the rest
//
// Everything else is refused before any sample is touched.

use super::{ConversionError, ConversionResult, Sample};

/// Whether `from -> to` is a pairing `convert` handles
pub fn is_supported(from: u16, to: u16) -> bool {
    if from == 0 || to == 0 {
        return false;
    }
    from == to || from == 1 || to == 1 || (from > 2 && to == 2)
}

/// Remap interleaved `samples` from `from` channels to `to` channels.
///
/// Trailing samples that do not fill a whole frame are dropped.
pub fn convert(samples: &[Sample], from: u16, to: u16) -> ConversionResult<Vec<Sample>> {
    if !is_supported(from, to) {
        return Err(ConversionError::UnsupportedChannels { from, to });
    }

    if from == to {
        return Ok(samples.to_vec());
    }

    let from = from as usize;
    let to = to as usize;
    let frames = samples.chunks_exact(from);
    let mut output = Vec::with_capacity(frames.len() * to);

    if from == 1 {
        for frame in frames {
            output.extend(std::iter::repeat_n(frame[0], to));
        }
    } else if to == 1 {
        output.extend(frames.map(average));
    } else {
        // Truncating downmix: only the first two channels survive
        for frame in frames {
            output.extend_from_slice(&frame[..2]);
        }
    }

    Ok(output)
}

/// Average of one frame, rounded toward negative infinity
#[inline]
fn average(frame: &[Sample]) -> Sample {
    let sum: i64 = frame.iter().map(|&s| s as i64).sum();
    sum.div_euclid(frame.len() as i64) as Sample
}
