#![no_std]

pub mod buffer;
pub mod color;
pub mod driver;
pub mod envelope;
pub mod error;
pub mod math8;
pub mod mode;
pub mod strip;

pub use buffer::PixelBuffer;
pub use color::{NamedColor, Rgb};
pub use driver::BufferSender;
pub use envelope::{FadeEnvelope, envelope};
pub use error::StripError;
pub use mode::{ChannelOrder, PixelMode};
pub use strip::{StripConfig, StripController};
