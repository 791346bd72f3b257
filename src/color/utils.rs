use crate::{color::Rgb, math8::scale8_floor};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Scale every channel of a color by brightness
///
/// Full brightness (255) leaves the color untouched, otherwise each channel
/// becomes `(channel * brightness) >> 8`.
pub const fn scale_rgb(color: Rgb, brightness: u8) -> Rgb {
    if brightness == u8::MAX {
        return color;
    }
    Rgb {
        r: scale8_floor(color.r, brightness),
        g: scale8_floor(color.g, brightness),
        b: scale8_floor(color.b, brightness),
    }
}
