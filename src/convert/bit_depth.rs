// Bit depth rescaling
//
// Samples are rescaled by shifting, with no rounding or dithering.
// 8-bit samples are offset-binary (silence = 128), all wider depths are
// signed. Widening is lossless, narrowing discards the low bits.

use super::Sample;

const OFFSET_BINARY_BITS: u16 = 8;
const OFFSET_BINARY_CENTER: Sample = 128;

/// Rescale every sample in place from `from` bits to `to` bits
pub fn convert(samples: &mut [Sample], from: u16, to: u16) {
    if from == to {
        return;
    }
    for sample in samples.iter_mut() {
        *sample = convert_sample(*sample, from, to);
    }
}

/// Rescale a single sample from `from` bits to `to` bits
#[inline]
pub fn convert_sample(sample: Sample, from: u16, to: u16) -> Sample {
    let shift = u32::from(from.abs_diff(to));

    if from == to {
        sample
    } else if from == OFFSET_BINARY_BITS {
        shl(sample.wrapping_sub(OFFSET_BINARY_CENTER), shift)
    } else if to == OFFSET_BINARY_BITS {
        shr(sample, shift).wrapping_add(OFFSET_BINARY_CENTER)
    } else if to > from {
        shl(sample, shift)
    } else {
        shr(sample, shift)
    }
}

// Shifts of 32 or more move every bit out of an i32
#[inline]
fn shl(sample: Sample, shift: u32) -> Sample {
    sample.checked_shl(shift).unwrap_or(0)
}

// Arithmetic: fills with the sign bit and rounds toward negative infinity
#[inline]
fn shr(sample: Sample, shift: u32) -> Sample {
    sample >> shift.min(Sample::BITS - 1)
}
