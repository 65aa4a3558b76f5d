use crate::api::part::video::Pixel;

/// Color values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Color {
    /// Lightest
    #[default]
    C0 = 0b00,
    /// Light
    C1 = 0b01,
    /// Dark
    C2 = 0b10,
    /// Darkest
    C3 = 0b11,
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::C0,
            0b01 => Self::C1,
            0b10 => Self::C2,
            0b11 => Self::C3,
            _ => unreachable!(),
        }
    }
}

impl Pixel for Color {}

/// A displayed colour, packed 5-5-5 RGB, little-endian (as stored in CGB
/// palette RAM).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rgb15(pub u16);

impl Rgb15 {
    /// DMG shades, mapped to neutral greys.
    const SHADES: [Self; 4] = [Self(0x7fff), Self(0x56b5), Self(0x294a), Self(0x0000)];

    /// Maps a DMG shade to its displayed grey.
    #[must_use]
    pub fn shade(color: Color) -> Self {
        Self::SHADES[color as usize]
    }
}

impl From<u16> for Rgb15 {
    fn from(value: u16) -> Self {
        Self(value & 0x7fff)
    }
}

impl Pixel for Rgb15 {}
