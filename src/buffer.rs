//! Raw pixel byte buffer
//!
//! Stores the strip exactly as it goes out on the wire and knows how to lay
//! out a color for the active [`PixelMode`].

use heapless::Vec;

use crate::color::Rgb;
use crate::error::StripError;
use crate::mode::{ChannelOrder, PixelMode};

/// Fixed-capacity byte buffer holding up to `N` bytes of pixel data
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    bytes: Vec<u8, N>,
    mode: PixelMode,
}

impl<const N: usize> PixelBuffer<N> {
    /// Allocate a zero-filled buffer of `required` bytes for the given mode
    pub fn new(required: usize, mode: PixelMode) -> Result<Self, StripError> {
        let mut bytes = Vec::new();
        bytes
            .resize(required, 0)
            .map_err(|()| StripError::BufferCapacity {
                required,
                capacity: N,
            })?;
        Ok(Self { bytes, mode })
    }

    pub const fn mode(&self) -> PixelMode {
        self.mode
    }

    /// Bytes per pixel
    pub const fn stride(&self) -> usize {
        self.mode.stride()
    }

    /// Length of the buffer in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Write the color bytes of a pixel starting at `offset`
    ///
    /// `offset` is a byte offset (pixel index times stride) and the color is
    /// expected to be brightness-scaled already. The white byte of RGBW
    /// pixels is left as is.
    ///
    /// # Panics
    ///
    /// Panics if the pixel does not fit into the buffer.
    pub fn write_pixel(&mut self, offset: usize, color: Rgb) {
        let pixel = &mut self.bytes[offset..offset + 3];
        match self.mode.channel_order() {
            ChannelOrder::Grb => {
                pixel[0] = color.g;
                pixel[1] = color.r;
            }
            ChannelOrder::Rgb => {
                pixel[0] = color.r;
                pixel[1] = color.g;
            }
        }
        pixel[2] = color.b;
    }

    /// Decode the color bytes of the pixel starting at `offset`
    ///
    /// Returns `None` if the pixel does not fit into the buffer.
    pub fn read_pixel(&self, offset: usize) -> Option<Rgb> {
        let pixel = self.bytes.get(offset..offset + 3)?;
        Some(match self.mode.channel_order() {
            ChannelOrder::Grb => Rgb::new(pixel[1], pixel[0], pixel[2]),
            ChannelOrder::Rgb => Rgb::new(pixel[0], pixel[1], pixel[2]),
        })
    }

    /// Set the bytes in `from..to` to `value`
    ///
    /// An empty or inverted range writes nothing. `to` is clamped to the
    /// buffer length.
    pub fn fill(&mut self, value: u8, from: usize, to: usize) {
        let to = to.min(self.bytes.len());
        if from >= to {
            return;
        }
        self.bytes[from..to].fill(value);
    }
}
