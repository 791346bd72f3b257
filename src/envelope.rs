//! Positional fade envelope
//!
//! Dims a strip with a symmetric parabola: fully dark at both ends and full
//! brightness at the midpoint. The pass rescales whatever bytes are stored,
//! so applying it repeatedly keeps darkening the strip.

/// Doubled distance of pixel `k` from the nearest dark end
///
/// The midpoint `length / 2` keeps its half step for odd lengths, so the
/// comparison runs on doubled positions.
const fn doubled_distance(k: usize, length: usize) -> u128 {
    let distance = if 2 * k <= length { k } else { length - 1 - k };
    2 * distance as u128
}

/// Envelope level (0-255) of pixel `k` on a strip of `length` pixels
///
/// `255 * k² / mid²` up to the midpoint `mid = length / 2`, mirrored as
/// `255 * (length - 1 - k)² / mid²` past it, rounded down. Single pixel
/// strips have no usable midpoint and get level 0.
#[allow(clippy::cast_possible_truncation)]
pub const fn envelope(k: usize, length: usize) -> u8 {
    if k >= length {
        return 0;
    }
    let doubled = doubled_distance(k, length);
    let length = length as u128;
    (255 * doubled * doubled / (length * length)) as u8
}

/// Fade envelope scaled by a global brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeEnvelope {
    brightness: u8,
}

impl FadeEnvelope {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    /// Scale one channel byte of pixel `k` on a strip of `length` pixels
    ///
    /// Computes `(value * envelope(k) * brightness / 255) >> 8` in a single
    /// integer expression, so the envelope is never rounded on its own.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn scale(self, value: u8, k: usize, length: usize) -> u8 {
        if k >= length {
            return 0;
        }
        let doubled = doubled_distance(k, length);
        let length = length as u128;
        let numerator = value as u128 * doubled * doubled * self.brightness as u128;
        (numerator / (length * length * 256)) as u8
    }

    /// Rescale every channel byte of `pixels` in place
    ///
    /// `pixels` must hold whole pixels of `stride` bytes each, starting at
    /// envelope position 0. The white byte of 4-byte pixels is scaled too.
    pub fn apply(self, pixels: &mut [u8], stride: usize) {
        let length = pixels.len() / stride;
        for (k, pixel) in pixels.chunks_exact_mut(stride).enumerate() {
            for channel in pixel {
                *channel = self.scale(*channel, k, length);
            }
        }
    }
}
