//! The 16-color console palette and true-color values.
//!
//! Every palette slot maps to exactly one 4-bit SGR foreground code
//! and one RGB triple; the background code is the foreground code
//! plus 10. Both tables are fixed at compile time.

use crate::error::StyleError;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Linear interpolation toward `to`, per channel.
    ///
    /// `t` outside `[0, 1]` extrapolates rather than clamping, and
    /// each channel is truncated to 8 bits, not rounded.
    pub fn blend(self, to: Rgb, t: f32) -> Rgb {
        let inv = 1.0 - t;
        Rgb(
            (inv * f32::from(self.0) + t * f32::from(to.0)) as u8,
            (inv * f32::from(self.1) + t * f32::from(to.1)) as u8,
            (inv * f32::from(self.2) + t * f32::from(to.2)) as u8,
        )
    }
}

/// One of the 16 named console colors.
///
/// Slot order matches the legacy console color table, so the
/// discriminant doubles as the table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

const SLOTS: [Palette; 16] = [
    Palette::Black,
    Palette::DarkBlue,
    Palette::DarkGreen,
    Palette::DarkCyan,
    Palette::DarkRed,
    Palette::DarkMagenta,
    Palette::DarkYellow,
    Palette::Gray,
    Palette::DarkGray,
    Palette::Blue,
    Palette::Green,
    Palette::Cyan,
    Palette::Red,
    Palette::Magenta,
    Palette::Yellow,
    Palette::White,
];

/// 4-bit SGR foreground parameter per slot.
const FG_CODES: [u8; 16] = [30, 34, 32, 36, 31, 35, 33, 37, 90, 94, 92, 96, 91, 95, 93, 97];

/// True-color equivalent per slot, packed `0xRRGGBB`.
const RGB_VALUES: [u32; 16] = [
    0x000000, // Black
    0x000080, // DarkBlue
    0x008000, // DarkGreen
    0x008080, // DarkCyan
    0x800000, // DarkRed
    0x800080, // DarkMagenta
    0x808000, // DarkYellow
    0xC0C0C0, // Gray
    0x808080, // DarkGray
    0x0000FF, // Blue
    0x00FF00, // Green
    0x00FFFF, // Cyan
    0xFF0000, // Red
    0xFF00FF, // Magenta
    0xFFFF00, // Yellow
    0xFFFFFF, // White
];

impl Palette {
    /// Look up a slot by its numeric table index.
    ///
    /// This is the only place an out-of-range slot can enter; a
    /// `Palette` value itself is always valid.
    pub fn from_index(index: u8) -> Result<Self, StyleError> {
        SLOTS
            .get(usize::from(index))
            .copied()
            .ok_or(StyleError::InvalidPaletteIndex { index })
    }

    /// The 4-bit SGR foreground parameter for this slot.
    pub fn code(self) -> u8 {
        FG_CODES[self as usize]
    }

    /// The 4-bit SGR background parameter (foreground + 10).
    pub fn background_code(self) -> u8 {
        self.code() + 10
    }

    /// The fixed true-color equivalent of this slot.
    pub fn rgb(self) -> Rgb {
        Rgb::from_u32(RGB_VALUES[self as usize])
    }
}

impl TryFrom<u8> for Palette {
    type Error = StyleError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}
