mod named;
mod utils;

use smart_leds::RGB8;

pub use named::NamedColor;
pub use utils::{rgb_from_u32, rgb_to_u32, scale_rgb};

pub type Rgb = RGB8;
