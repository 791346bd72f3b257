use embedded_hal::digital::OutputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::BufferSender;
use crate::buffer::PixelBuffer;
use crate::color::{NamedColor, Rgb, scale_rgb};
use crate::envelope::FadeEnvelope;
use crate::error::StripError;
use crate::mode::PixelMode;

/// Configuration for a strip controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of pixels the controller addresses
    pub length: usize,
    /// Pixels reserved in front of the addressed range
    pub start: usize,
    /// Wire format of the strip
    pub mode: PixelMode,
    /// Initial brightness
    pub brightness: u8,
}

impl StripConfig {
    /// Full brightness strip of `length` pixels starting at pixel 0
    pub const fn new(length: usize, mode: PixelMode) -> Self {
        Self {
            length,
            start: 0,
            mode,
            brightness: u8::MAX,
        }
    }

    #[must_use]
    pub const fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Buffer size in bytes needed for this configuration
    ///
    /// Returns `None` if the size does not fit into `usize`.
    pub const fn buffer_len(&self) -> Option<usize> {
        match self.start.checked_add(self.length) {
            Some(pixels) => pixels.checked_mul(self.mode.stride()),
            None => None,
        }
    }
}

/// Strip controller - owns the pixel buffer and the output pin
///
/// `N` is the buffer capacity in bytes. Pixel indices are relative to
/// `start`; writes outside `0..length` are ignored so a controller can safely
/// address a sub-range of a longer physical strip.
pub struct StripController<P, S, const N: usize> {
    // External dependencies
    pin: P,
    sender: S,

    // Internal state
    buffer: PixelBuffer<N>,
    brightness: u8,
    start: usize,
    length: usize,
}

impl<P, S, const N: usize> StripController<P, S, N>
where
    P: OutputPin,
    S: BufferSender<P>,
{
    /// Create a controller with a zeroed buffer
    ///
    /// The pin is driven low before the controller is returned so nothing
    /// is transmitted from a half-configured pin.
    pub fn create(pin: P, sender: S, config: &StripConfig) -> Result<Self, StripError> {
        let required = config.buffer_len().ok_or(StripError::BufferCapacity {
            required: usize::MAX,
            capacity: N,
        })?;
        let buffer = PixelBuffer::new(required, config.mode)?;
        let mut strip = Self {
            pin,
            sender,
            buffer,
            brightness: u8::MAX,
            start: config.start,
            length: config.length,
        };
        strip.set_brightness(config.brightness);
        drive_idle(&mut strip.pin)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[StripController.create] {} pixels at {}, mode {}, {} bytes",
            strip.length,
            strip.start,
            config.mode.as_str(),
            strip.buffer.len()
        );

        Ok(strip)
    }

    /// Replace the output pin, driving the new one low first
    pub fn set_pin(&mut self, mut pin: P) -> Result<(), StripError> {
        drive_idle(&mut pin)?;
        self.pin = pin;
        Ok(())
    }

    /// Set brightness and re-apply the fade envelope to the stored pixels
    ///
    /// The envelope rescales the bytes that are currently in the buffer, so
    /// consecutive calls compound: setting the same brightness twice leaves
    /// the strip darker than setting it once.
    pub fn set_brightness(&mut self, brightness: u8) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[StripController.set_brightness] {} -> {}",
            self.brightness, brightness
        );
        self.brightness = brightness;
        self.ease_brightness();
    }

    /// Set a pixel to one of the named colors
    pub fn set_pixel_color(&mut self, index: usize, color: NamedColor) {
        self.set_pixel_rgb(index, color.rgb());
    }

    /// Set a pixel to an RGB color, scaled by the current brightness
    ///
    /// Does nothing if `index` is not below the strip length.
    pub fn set_pixel_rgb(&mut self, index: usize, color: Rgb) {
        if index >= self.length {
            return;
        }
        let color = scale_rgb(color, self.brightness);
        self.buffer.write_pixel(self.offset_of(index), color);
    }

    /// Color currently stored for a pixel, decoded from the wire order
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        if index >= self.length {
            return None;
        }
        self.buffer.read_pixel(self.offset_of(index))
    }

    /// Send the buffer to the strip
    pub fn show(&mut self) {
        self.sender.send(self.buffer.as_bytes(), &mut self.pin);
    }

    /// Zero the strip and send it
    ///
    /// Clears the raw byte range `start * stride .. length * stride`, which
    /// covers the whole addressed range only while `start` is 0.
    pub fn clear(&mut self) {
        let stride = self.buffer.stride();
        self.buffer.fill(0, self.start * stride, self.length * stride);
        #[cfg(feature = "esp32-log")]
        println!("[StripController.clear] cleared {} pixels", self.length);
        self.show();
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    pub const fn mode(&self) -> PixelMode {
        self.buffer.mode()
    }

    /// Raw buffer bytes, in wire layout
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub const fn pin(&self) -> &P {
        &self.pin
    }

    pub const fn sender(&self) -> &S {
        &self.sender
    }

    /// Give back the pin and the sender
    pub fn release(self) -> (P, S) {
        (self.pin, self.sender)
    }

    const fn offset_of(&self, index: usize) -> usize {
        (index + self.start) * self.buffer.stride()
    }

    fn ease_brightness(&mut self) {
        let stride = self.buffer.stride();
        let from = self.start * stride;
        let to = from + self.length * stride;
        let pixels = &mut self.buffer.as_mut_bytes()[from..to];
        FadeEnvelope::new(self.brightness).apply(pixels, stride);
    }
}

/// Drive the pin low without letting anything else run in between
fn drive_idle<P: OutputPin>(pin: &mut P) -> Result<(), StripError> {
    critical_section::with(|_| pin.set_low()).map_err(|_| StripError::Pin)
}
