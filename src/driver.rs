/// Single-wire transmission primitive
///
/// Implement this trait to push a finished pixel buffer out of a pin on a
/// specific platform (RMT, PIO, SPI, bit-banging). The buffer already has the
/// wire layout of the strip mode, so implementations send it byte for byte.
///
/// Transmission is fire-and-forget: there is no way to report a failure back.
pub trait BufferSender<P> {
    /// Write the buffer to the strip attached to `pin`
    fn send(&mut self, buffer: &[u8], pin: &mut P);
}

impl<P, S: BufferSender<P> + ?Sized> BufferSender<P> for &mut S {
    fn send(&mut self, buffer: &[u8], pin: &mut P) {
        (**self).send(buffer, pin);
    }
}
