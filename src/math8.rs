/// Scale an 8-bit value by a factor (0-255 = 0.0-~1.0)
///
/// Computes `(value * scale) >> 8`, so a full scale of 255 still drops
/// one step from every non-zero value.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_floor(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

