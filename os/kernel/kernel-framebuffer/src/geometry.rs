//! # Validated Frame Buffer Geometry

use crate::{ChannelOrder, FrameBufferError};
use kernel_info::boot::FrameBufferConfig;

/// Dimensions and pixel layout of a framebuffer that passed validation.
///
/// The only way to obtain one is [`FrameBufferGeometry::new`], so every
/// instance satisfies `width > 0`, `height > 0`, `stride >= width` and
/// has a supported pixel format. All offsets it hands out fit in `usize`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameBufferGeometry {
    width: u32,
    height: u32,
    stride: u32,
    channel_order: ChannelOrder,
    row_bytes: usize,
    span_bytes: usize,
}

impl FrameBufferGeometry {
    /// Validates the loader's descriptor.
    ///
    /// Checks run in a fixed order: pixel format, resolution, stride. The
    /// base address is not looked at here.
    ///
    /// # Errors
    /// * [`FrameBufferError::UnsupportedPixelFormat`] for any tag other than RGB/BGR.
    /// * [`FrameBufferError::DegenerateResolution`] if either dimension is zero.
    /// * [`FrameBufferError::InvalidStride`] if the stride is below the width.
    /// * [`FrameBufferError::SizeOverflow`] if the addressed bytes exceed `usize`.
    pub fn new(config: &FrameBufferConfig) -> Result<Self, FrameBufferError> {
        let channel_order = ChannelOrder::try_from(config.format())?;

        let width = config.horizontal_resolution;
        let height = config.vertical_resolution;
        let stride = config.stride_pixels;

        if width == 0 || height == 0 {
            return Err(FrameBufferError::DegenerateResolution { width, height });
        }
        if stride < width {
            return Err(FrameBufferError::InvalidStride { stride, width });
        }

        let row_bytes = (stride as usize)
            .checked_mul(ChannelOrder::BYTES_PER_PIXEL)
            .ok_or(FrameBufferError::SizeOverflow)?;

        // Last row only needs its visible part.
        let span_bytes = ((height - 1) as usize)
            .checked_mul(stride as usize)
            .and_then(|pixels| pixels.checked_add(width as usize))
            .and_then(|pixels| pixels.checked_mul(ChannelOrder::BYTES_PER_PIXEL))
            .ok_or(FrameBufferError::SizeOverflow)?;

        Ok(Self {
            width,
            height,
            stride,
            channel_order,
            row_bytes,
            span_bytes,
        })
    }

    /// Visible width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Visible height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per physical scan line.
    #[must_use]
    pub const fn stride(&self) -> u32 {
        self.stride
    }

    #[must_use]
    pub const fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    /// Bytes between the starts of two consecutive scan lines.
    #[must_use]
    pub const fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// Bytes from the first pixel up to and including the last visible pixel.
    #[must_use]
    pub const fn span_bytes(&self) -> usize {
        self.span_bytes
    }

    #[must_use]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Index of pixel `(x, y)` counted in pixel slots from the base address,
    /// or `None` if the pixel is not visible.
    #[must_use]
    pub const fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(y as usize * self.stride as usize + x as usize)
    }

    /// Byte offset of pixel `(x, y)` from the base address, or `None` if the
    /// pixel is not visible.
    #[must_use]
    pub const fn byte_offset(&self, x: u32, y: u32) -> Option<usize> {
        match self.pixel_offset(x, y) {
            Some(pixels) => Some(pixels * ChannelOrder::BYTES_PER_PIXEL),
            None => None,
        }
    }
}

impl TryFrom<&FrameBufferConfig> for FrameBufferGeometry {
    type Error = FrameBufferError;

    fn try_from(config: &FrameBufferConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
