//! Strip wire formats
//!
//! A mode fixes how many bytes a pixel occupies in the buffer and in which
//! order the color channels go out on the wire.

const MODE_NAME_RGB: &str = "rgb";
const MODE_NAME_RGBW: &str = "rgbw";
const MODE_NAME_RGB_RGB: &str = "rgb_rgb";

const MODE_ID_RGB: u8 = 0;
const MODE_ID_RGBW: u8 = 1;
const MODE_ID_RGB_RGB: u8 = 2;

/// Order of the color bytes of a single pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    /// green, red, blue
    Grb,
    /// red, green, blue
    Rgb,
}

/// Pixel layout of a strip
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PixelMode {
    /// RGB strip with GRB wire order, 3 bytes per pixel
    #[default]
    Rgb = MODE_ID_RGB,
    /// RGB+W strip with GRB wire order and a trailing white byte, 4 bytes per pixel
    Rgbw = MODE_ID_RGBW,
    /// RGB strip with RGB wire order, 3 bytes per pixel
    RgbRgb = MODE_ID_RGB_RGB,
}

impl PixelMode {
    /// Bytes per pixel
    pub const fn stride(self) -> usize {
        match self {
            Self::Rgb | Self::RgbRgb => 3,
            Self::Rgbw => 4,
        }
    }

    /// Wire order of the color channels
    pub const fn channel_order(self) -> ChannelOrder {
        match self {
            Self::Rgb | Self::Rgbw => ChannelOrder::Grb,
            Self::RgbRgb => ChannelOrder::Rgb,
        }
    }

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_RGB => Self::Rgb,
            MODE_ID_RGBW => Self::Rgbw,
            MODE_ID_RGB_RGB => Self::RgbRgb,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => MODE_NAME_RGB,
            Self::Rgbw => MODE_NAME_RGBW,
            Self::RgbRgb => MODE_NAME_RGB_RGB,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_RGB => Some(Self::Rgb),
            MODE_NAME_RGBW => Some(Self::Rgbw),
            MODE_NAME_RGB_RGB => Some(Self::RgbRgb),
            _ => None,
        }
    }
}
