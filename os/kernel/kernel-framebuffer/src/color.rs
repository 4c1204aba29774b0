//! # Pixel Encoding

use crate::FrameBufferError;
use bitfield_struct::bitfield;
use kernel_info::boot::PixelFormat;

/// An opaque 24-bit color.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A framebuffer pixel in `[R][G][B][reserved]` byte order.
///
/// Fields are allocated from the least significant bit, so the little-endian
/// byte representation matches the memory layout.
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct RgbReservedPixel {
    /// Byte 0.
    pub red: u8,
    /// Byte 1.
    pub green: u8,
    /// Byte 2.
    pub blue: u8,
    /// Byte 3, reserved. Written as 0.
    #[bits(8, default = 0)]
    _reserved: u8,
}

/// A framebuffer pixel in `[B][G][R][reserved]` byte order.
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct BgrReservedPixel {
    /// Byte 0.
    pub blue: u8,
    /// Byte 1.
    pub green: u8,
    /// Byte 2.
    pub red: u8,
    /// Byte 3, reserved. Written as 0.
    #[bits(8, default = 0)]
    _reserved: u8,
}

/// Channel order of a validated pixel format.
///
/// Unlike [`PixelFormat`] this has no escape hatch for unknown tags: holding a
/// `ChannelOrder` means the format was accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

impl ChannelOrder {
    /// Both supported formats use one byte per channel plus a reserved byte.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Bytes to store for `color`, in memory order.
    #[must_use]
    pub const fn encode(self, color: PixelColor) -> [u8; Self::BYTES_PER_PIXEL] {
        let bits = match self {
            Self::Rgb => RgbReservedPixel::new()
                .with_red(color.r)
                .with_green(color.g)
                .with_blue(color.b)
                .into_bits(),
            Self::Bgr => BgrReservedPixel::new()
                .with_red(color.r)
                .with_green(color.g)
                .with_blue(color.b)
                .into_bits(),
        };
        bits.to_le_bytes()
    }

    /// Color stored in `bytes`; the reserved byte is ignored.
    #[must_use]
    pub const fn decode(self, bytes: [u8; Self::BYTES_PER_PIXEL]) -> PixelColor {
        let bits = u32::from_le_bytes(bytes);
        match self {
            Self::Rgb => {
                let px = RgbReservedPixel::from_bits(bits);
                PixelColor::new(px.red(), px.green(), px.blue())
            }
            Self::Bgr => {
                let px = BgrReservedPixel::from_bits(bits);
                PixelColor::new(px.red(), px.green(), px.blue())
            }
        }
    }
}

impl TryFrom<PixelFormat> for ChannelOrder {
    type Error = FrameBufferError;

    fn try_from(format: PixelFormat) -> Result<Self, Self::Error> {
        match format {
            PixelFormat::RgbReserved8 => Ok(Self::Rgb),
            PixelFormat::BgrReserved8 => Ok(Self::Bgr),
            PixelFormat::Unrecognized(tag) => Err(FrameBufferError::UnsupportedPixelFormat(tag)),
        }
    }
}

impl From<ChannelOrder> for PixelFormat {
    fn from(order: ChannelOrder) -> Self {
        match order {
            ChannelOrder::Rgb => Self::RgbReserved8,
            ChannelOrder::Bgr => Self::BgrReserved8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORANGE: PixelColor = PixelColor::new(0xff, 0x80, 0x10);

    #[test]
    fn rgb_stores_red_first() {
        assert_eq!(ChannelOrder::Rgb.encode(ORANGE), [0xff, 0x80, 0x10, 0x00]);
    }

    #[test]
    fn bgr_stores_blue_first() {
        assert_eq!(ChannelOrder::Bgr.encode(ORANGE), [0x10, 0x80, 0xff, 0x00]);
    }

    #[test]
    fn decode_ignores_reserved_byte() {
        assert_eq!(ChannelOrder::Rgb.decode([0xff, 0x80, 0x10, 0xee]), ORANGE);
        assert_eq!(ChannelOrder::Bgr.decode([0x10, 0x80, 0xff, 0xee]), ORANGE);
    }

    #[test]
    fn channel_order_from_format() {
        assert_eq!(
            ChannelOrder::try_from(PixelFormat::RgbReserved8),
            Ok(ChannelOrder::Rgb)
        );
        assert_eq!(
            ChannelOrder::try_from(PixelFormat::BgrReserved8),
            Ok(ChannelOrder::Bgr)
        );
        assert_eq!(
            ChannelOrder::try_from(PixelFormat::Unrecognized(3)),
            Err(FrameBufferError::UnsupportedPixelFormat(3))
        );
        assert_eq!(PixelFormat::from(ChannelOrder::Bgr).tag(), 2);
    }

    #[test]
    fn pixel_word_defaults_to_zero() {
        assert_eq!(RgbReservedPixel::new().into_bits(), 0);
        assert_eq!(BgrReservedPixel::default().into_bits(), 0);
    }
}
