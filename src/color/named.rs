//! Fixed palette of named colors
//!
//! Every variant maps to exactly one 24-bit constant. The numeric ids and
//! block names match the ones exposed to block-based editors.

use super::{Rgb, utils::rgb_from_u32};

const COLOR_NAME_RED: &str = "red";
const COLOR_NAME_ORANGE: &str = "orange";
const COLOR_NAME_YELLOW: &str = "yellow";
const COLOR_NAME_GREEN: &str = "green";
const COLOR_NAME_BLUE: &str = "blue";
const COLOR_NAME_INDIGO: &str = "indigo";
const COLOR_NAME_VIOLET: &str = "violet";
const COLOR_NAME_PURPLE: &str = "purple";
const COLOR_NAME_WHITE: &str = "white";

const COLOR_ID_RED: u8 = 1;
const COLOR_ID_ORANGE: u8 = 2;
const COLOR_ID_YELLOW: u8 = 3;
const COLOR_ID_GREEN: u8 = 4;
const COLOR_ID_BLUE: u8 = 5;
const COLOR_ID_INDIGO: u8 = 6;
const COLOR_ID_VIOLET: u8 = 7;
const COLOR_ID_PURPLE: u8 = 8;
const COLOR_ID_WHITE: u8 = 9;

/// Colors that can be requested by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NamedColor {
    Red = COLOR_ID_RED,
    Orange = COLOR_ID_ORANGE,
    Yellow = COLOR_ID_YELLOW,
    Green = COLOR_ID_GREEN,
    Blue = COLOR_ID_BLUE,
    Indigo = COLOR_ID_INDIGO,
    Violet = COLOR_ID_VIOLET,
    Purple = COLOR_ID_PURPLE,
    White = COLOR_ID_WHITE,
}

impl NamedColor {
    /// All named colors, in id order
    pub const ALL: [Self; 9] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::White,
    ];

    /// Packed 0xRRGGBB value of the color
    pub const fn to_u32(self) -> u32 {
        match self {
            Self::Red => 0xFF_00_00,
            Self::Orange => 0xFF_A5_00,
            Self::Yellow => 0xFF_FF_00,
            Self::Green => 0x00_FF_00,
            Self::Blue => 0x00_00_FF,
            Self::Indigo => 0x4B_00_82,
            Self::Violet => 0x8A_2B_E2,
            Self::Purple => 0xFF_00_FF,
            Self::White => 0xFF_FF_FF,
        }
    }

    /// Full intensity RGB triple of the color
    pub const fn rgb(self) -> Rgb {
        rgb_from_u32(self.to_u32())
    }

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COLOR_ID_RED => Self::Red,
            COLOR_ID_ORANGE => Self::Orange,
            COLOR_ID_YELLOW => Self::Yellow,
            COLOR_ID_GREEN => Self::Green,
            COLOR_ID_BLUE => Self::Blue,
            COLOR_ID_INDIGO => Self::Indigo,
            COLOR_ID_VIOLET => Self::Violet,
            COLOR_ID_PURPLE => Self::Purple,
            COLOR_ID_WHITE => Self::White,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => COLOR_NAME_RED,
            Self::Orange => COLOR_NAME_ORANGE,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Green => COLOR_NAME_GREEN,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Indigo => COLOR_NAME_INDIGO,
            Self::Violet => COLOR_NAME_VIOLET,
            Self::Purple => COLOR_NAME_PURPLE,
            Self::White => COLOR_NAME_WHITE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_ORANGE => Some(Self::Orange),
            COLOR_NAME_YELLOW => Some(Self::Yellow),
            COLOR_NAME_GREEN => Some(Self::Green),
            COLOR_NAME_BLUE => Some(Self::Blue),
            COLOR_NAME_INDIGO => Some(Self::Indigo),
            COLOR_NAME_VIOLET => Some(Self::Violet),
            COLOR_NAME_PURPLE => Some(Self::Purple),
            COLOR_NAME_WHITE => Some(Self::White),
            _ => None,
        }
    }
}

impl From<NamedColor> for Rgb {
    fn from(color: NamedColor) -> Self {
        color.rgb()
    }
}
