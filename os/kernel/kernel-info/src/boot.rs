//! # Frame Buffer Handoff

use core::fmt;
use core::mem::{offset_of, size_of};

/// Pixel tag for 32-bit pixels laid out as `[R][G][B][reserved]` in memory.
pub const PIXEL_RGB_RESERVED_8BIT_PER_COLOR: u8 = 1;

/// Pixel tag for 32-bit pixels laid out as `[B][G][R][reserved]` in memory.
pub const PIXEL_BGR_RESERVED_8BIT_PER_COLOR: u8 = 2;

/// Size in bytes of an encoded [`FrameBufferConfig`], trailing padding included.
pub const FRAME_BUFFER_CONFIG_SIZE: usize = size_of::<FrameBufferConfig>();

/// Description of the linear framebuffer the loader activated before handing
/// control to the kernel.
///
/// Keep this `#[repr(C)]`: the loader and the kernel are built separately and
/// only agree on this layout. The pixel format travels as the raw tag; use
/// [`FrameBufferConfig::format`] to interpret it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameBufferConfig {
    /// Address of the first framebuffer byte (CPU physical, identity mapped).
    ///
    /// Firmware owns the memory. The kernel may only borrow it, and only
    /// through an explicitly unsafe view.
    pub base_address: usize,

    /// Pixel slots per physical scan line. May be larger than
    /// [`horizontal_resolution`](Self::horizontal_resolution) because of row padding.
    pub stride_pixels: u32,

    /// Visible width in **pixels**.
    pub horizontal_resolution: u32,

    /// Visible height in **pixels**.
    pub vertical_resolution: u32,

    /// Raw pixel format tag, see [`PixelFormat`].
    pub pixel_format: u8,
}

const _: () = {
    assert!(offset_of!(FrameBufferConfig, base_address) == 0);
    assert!(offset_of!(FrameBufferConfig, stride_pixels) == size_of::<usize>());
    assert!(offset_of!(FrameBufferConfig, horizontal_resolution) == size_of::<usize>() + 4);
    assert!(offset_of!(FrameBufferConfig, vertical_resolution) == size_of::<usize>() + 8);
    assert!(offset_of!(FrameBufferConfig, pixel_format) == size_of::<usize>() + 12);
    #[cfg(target_pointer_width = "64")]
    assert!(FRAME_BUFFER_CONFIG_SIZE == 24);
};

impl FrameBufferConfig {
    #[must_use]
    pub const fn new(
        base_address: usize,
        stride_pixels: u32,
        horizontal_resolution: u32,
        vertical_resolution: u32,
        pixel_format: PixelFormat,
    ) -> Self {
        Self {
            base_address,
            stride_pixels,
            horizontal_resolution,
            vertical_resolution,
            pixel_format: pixel_format.tag(),
        }
    }

    /// Interprets the raw pixel format tag.
    #[must_use]
    pub const fn format(&self) -> PixelFormat {
        PixelFormat::from_tag(self.pixel_format)
    }

    /// Encodes the descriptor exactly as it sits in memory: native byte order,
    /// `#[repr(C)]` offsets, zeroed padding.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; FRAME_BUFFER_CONFIG_SIZE] {
        let mut bytes = [0u8; FRAME_BUFFER_CONFIG_SIZE];
        put(
            &mut bytes,
            offset_of!(Self, base_address),
            &self.base_address.to_ne_bytes(),
        );
        put(
            &mut bytes,
            offset_of!(Self, stride_pixels),
            &self.stride_pixels.to_ne_bytes(),
        );
        put(
            &mut bytes,
            offset_of!(Self, horizontal_resolution),
            &self.horizontal_resolution.to_ne_bytes(),
        );
        put(
            &mut bytes,
            offset_of!(Self, vertical_resolution),
            &self.vertical_resolution.to_ne_bytes(),
        );
        bytes[offset_of!(Self, pixel_format)] = self.pixel_format;
        bytes
    }

    /// Decodes a descriptor from its in-memory representation.
    ///
    /// Only the first [`FRAME_BUFFER_CONFIG_SIZE`] bytes are read. No semantic
    /// checks are made here; an unknown pixel tag is kept as-is so the
    /// consumer can report it.
    ///
    /// # Errors
    /// [`DecodeError::Truncated`] if `bytes` is shorter than the descriptor.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < FRAME_BUFFER_CONFIG_SIZE {
            return Err(DecodeError::Truncated {
                expected: FRAME_BUFFER_CONFIG_SIZE,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            base_address: usize::from_ne_bytes(take(bytes, offset_of!(Self, base_address))),
            stride_pixels: u32::from_ne_bytes(take(bytes, offset_of!(Self, stride_pixels))),
            horizontal_resolution: u32::from_ne_bytes(take(
                bytes,
                offset_of!(Self, horizontal_resolution),
            )),
            vertical_resolution: u32::from_ne_bytes(take(
                bytes,
                offset_of!(Self, vertical_resolution),
            )),
            pixel_format: bytes[offset_of!(Self, pixel_format)],
        })
    }
}

fn put(bytes: &mut [u8], offset: usize, field: &[u8]) {
    bytes[offset..offset + field.len()].copy_from_slice(field);
}

fn take<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut field = [0u8; N];
    field.copy_from_slice(&bytes[offset..offset + N]);
    field
}

/// Byte-to-color mapping of a framebuffer pixel.
///
/// Both known formats use 8 bits per channel plus one reserved byte.
/// Anything else coming across the handoff is kept as [`PixelFormat::Unrecognized`]
/// so callers have to decide what to do with it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// `[R][G][B][reserved]`, tag [`PIXEL_RGB_RESERVED_8BIT_PER_COLOR`].
    RgbReserved8,
    /// `[B][G][R][reserved]`, tag [`PIXEL_BGR_RESERVED_8BIT_PER_COLOR`].
    BgrReserved8,
    /// Any other tag value.
    Unrecognized(u8),
}

impl PixelFormat {
    #[must_use]
    pub const fn from_tag(tag: u8) -> Self {
        match tag {
            PIXEL_RGB_RESERVED_8BIT_PER_COLOR => Self::RgbReserved8,
            PIXEL_BGR_RESERVED_8BIT_PER_COLOR => Self::BgrReserved8,
            other => Self::Unrecognized(other),
        }
    }

    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::RgbReserved8 => PIXEL_RGB_RESERVED_8BIT_PER_COLOR,
            Self::BgrReserved8 => PIXEL_BGR_RESERVED_8BIT_PER_COLOR,
            Self::Unrecognized(tag) => tag,
        }
    }

    /// Bytes per pixel, or `None` for an unrecognized format.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            Self::RgbReserved8 | Self::BgrReserved8 => Some(4),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<u8> for PixelFormat {
    fn from(tag: u8) -> Self {
        Self::from_tag(tag)
    }
}

impl From<PixelFormat> for u8 {
    fn from(format: PixelFormat) -> Self {
        format.tag()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RgbReserved8 => f.write_str("RGB"),
            Self::BgrReserved8 => f.write_str("BGR"),
            Self::Unrecognized(tag) => write!(f, "unrecognized ({tag})"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("frame buffer descriptor truncated: need {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}
