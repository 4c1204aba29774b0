//! # Borrowed Frame Buffer View

use crate::{ChannelOrder, FrameBufferError, FrameBufferGeometry, PixelColor};
use core::fmt;
use kernel_info::boot::FrameBufferConfig;

/// Non-owning, writable view over the bytes of a validated framebuffer.
///
/// The view covers exactly [`FrameBufferGeometry::span_bytes`] bytes starting
/// at the first pixel. Pixel accesses outside the visible area are rejected.
pub struct FrameBuffer<'a> {
    geometry: FrameBufferGeometry,
    memory: &'a mut [u8],
}

impl FrameBuffer<'static> {
    /// Borrows the firmware framebuffer described by `config`.
    ///
    /// This is the trust boundary of the handoff: the type system cannot tell
    /// whether `base_address` is mapped, so the caller vouches for it.
    ///
    /// # Safety
    /// `config.base_address` must be mapped and writable for at least the
    /// geometry's [`span_bytes`](FrameBufferGeometry::span_bytes) for the rest
    /// of the boot session, and no other live reference may alias that range.
    ///
    /// # Errors
    /// Any validation error of [`FrameBufferGeometry::new`], or
    /// [`FrameBufferError::NullBaseAddress`] for a zero base address.
    pub unsafe fn from_config(config: &FrameBufferConfig) -> Result<Self, FrameBufferError> {
        let geometry = FrameBufferGeometry::new(config)?;
        if config.base_address == 0 {
            return Err(FrameBufferError::NullBaseAddress);
        }

        let base = core::ptr::with_exposed_provenance_mut::<u8>(config.base_address);
        // SAFETY: caller guarantees the range is mapped, writable and unaliased.
        let memory = unsafe { core::slice::from_raw_parts_mut(base, geometry.span_bytes()) };
        Ok(Self { geometry, memory })
    }
}

impl<'a> FrameBuffer<'a> {
    /// Uses `memory` as the pixel storage for `geometry`, e.g. for a back buffer.
    ///
    /// # Errors
    /// [`FrameBufferError::BufferTooSmall`] if `memory` is shorter than the span
    /// the geometry addresses. Excess bytes are not part of the view.
    pub fn from_slice(
        geometry: FrameBufferGeometry,
        memory: &'a mut [u8],
    ) -> Result<Self, FrameBufferError> {
        let required = geometry.span_bytes();
        if memory.len() < required {
            return Err(FrameBufferError::BufferTooSmall {
                required,
                actual: memory.len(),
            });
        }
        Ok(Self {
            geometry,
            memory: &mut memory[..required],
        })
    }

    #[must_use]
    pub const fn geometry(&self) -> &FrameBufferGeometry {
        &self.geometry
    }

    /// Stores `color` at `(x, y)` in the framebuffer's channel order.
    ///
    /// # Errors
    /// [`FrameBufferError::OutOfBounds`] if the pixel is not visible.
    pub fn write_pixel(&mut self, x: u32, y: u32, color: PixelColor) -> Result<(), FrameBufferError> {
        let offset = self
            .geometry
            .byte_offset(x, y)
            .ok_or(FrameBufferError::OutOfBounds { x, y })?;
        let bytes = self.geometry.channel_order().encode(color);
        self.memory[offset..offset + ChannelOrder::BYTES_PER_PIXEL].copy_from_slice(&bytes);
        Ok(())
    }

    /// Color at `(x, y)`, or `None` if the pixel is not visible.
    #[must_use]
    pub fn read_pixel(&self, x: u32, y: u32) -> Option<PixelColor> {
        let offset = self.geometry.byte_offset(x, y)?;
        let mut bytes = [0u8; ChannelOrder::BYTES_PER_PIXEL];
        bytes.copy_from_slice(&self.memory[offset..offset + ChannelOrder::BYTES_PER_PIXEL]);
        Some(self.geometry.channel_order().decode(bytes))
    }
}

impl fmt::Debug for FrameBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("geometry", &self.geometry)
            .field("base", &self.memory.as_ptr())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel_info::boot::PixelFormat;

    fn geometry(format: PixelFormat) -> FrameBufferGeometry {
        FrameBufferGeometry::new(&FrameBufferConfig::new(0x1000, 8, 5, 3, format)).unwrap()
    }

    #[test]
    fn short_slice_is_rejected() {
        let g = geometry(PixelFormat::RgbReserved8);
        let mut memory = vec![0u8; g.span_bytes() - 1];
        let err = FrameBuffer::from_slice(g, &mut memory).unwrap_err();
        assert_eq!(
            err,
            FrameBufferError::BufferTooSmall {
                required: (2 * 8 + 5) * 4,
                actual: (2 * 8 + 5) * 4 - 1,
            }
        );
    }

    #[test]
    fn pixels_land_at_stride_offsets() {
        let g = geometry(PixelFormat::BgrReserved8);
        let mut memory = vec![0u8; g.span_bytes()];
        {
            let mut fb = FrameBuffer::from_slice(g, &mut memory).unwrap();
            fb.write_pixel(1, 1, PixelColor::new(1, 2, 3)).unwrap();
        }
        assert_eq!(memory[(8 + 1) * 4..(8 + 2) * 4], [3, 2, 1, 0]);
        assert_eq!(memory.iter().filter(|&&b| b != 0).count(), 3);
    }

    #[test]
    fn write_outside_visible_area_fails() {
        let g = geometry(PixelFormat::RgbReserved8);
        let mut memory = vec![0u8; g.span_bytes()];
        let mut fb = FrameBuffer::from_slice(g, &mut memory).unwrap();
        assert_eq!(
            fb.write_pixel(5, 0, PixelColor::WHITE),
            Err(FrameBufferError::OutOfBounds { x: 5, y: 0 })
        );
        assert_eq!(fb.read_pixel(0, 3), None);
    }

    #[test]
    fn null_base_is_rejected() {
        let config = FrameBufferConfig::new(0, 8, 5, 3, PixelFormat::RgbReserved8);
        // SAFETY: rejected before any memory is borrowed.
        let err = unsafe { FrameBuffer::from_config(&config) }.unwrap_err();
        assert_eq!(err, FrameBufferError::NullBaseAddress);
    }
}
