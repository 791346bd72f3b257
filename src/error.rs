use core::fmt;

/// Errors raised while setting up a strip
///
/// The color API itself never fails: out of range pixels are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// The pixel buffer does not fit into the fixed capacity
    BufferCapacity { required: usize, capacity: usize },
    /// The output pin could not be driven low
    Pin,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferCapacity { required, capacity } => write!(
                f,
                "pixel buffer needs {required} bytes, capacity is {capacity}"
            ),
            Self::Pin => f.write_str("failed to drive output pin low"),
        }
    }
}

impl core::error::Error for StripError {}
