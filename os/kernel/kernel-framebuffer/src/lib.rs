//! # Kernel Frame Buffer
//!
//! Kernel-side consumer of the loader's [`FrameBufferConfig`]. The descriptor
//! itself is plain data; this crate decides whether the kernel can use it and
//! turns pixel coordinates into byte offsets.
//!
//! ## Initialization
//!
//! [`init`] validates the descriptor and borrows the framebuffer memory:
//!
//! 1. **Pixel format**: only RGB and BGR with a reserved byte are accepted.
//!    Unknown tags are an error, never a silent fallback to RGB.
//! 2. **Resolution**: both dimensions must be non-zero.
//! 3. **Stride**: must be at least the visible width.
//! 4. **Base address**: must not be null. Whether it is actually mapped cannot
//!    be checked; that is the caller's promise.
//!
//! Any failure is fatal for graphics initialization.
//!
//! ## Addressing
//!
//! ```text
//!  base_address
//!  ▼
//!  ┌──────────── width ────────────┬── padding ──┐
//!  │ (0,0) (1,0) ...               │             │ row 0
//!  ├───────────────────────────────┼─────────────┤
//!  │ (0,1) ...                     │             │ row 1
//!  └───────────────────────────────┴─────────────┘
//!  └─────────────────── stride ──────────────────┘
//!
//!  pixel_offset(x, y) = y * stride + x
//!  byte_offset(x, y)  = pixel_offset(x, y) * 4
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kernel_framebuffer::{FrameBuffer, FrameBufferGeometry, PixelColor};
//! use kernel_info::boot::{FrameBufferConfig, PixelFormat};
//!
//! let config = FrameBufferConfig::new(0x8000_0000, 1024, 800, 600, PixelFormat::RgbReserved8);
//! let geometry = FrameBufferGeometry::new(&config)?;
//! assert_eq!(geometry.byte_offset(0, 1), Some(4096));
//!
//! let mut back_buffer = vec![0u8; geometry.span_bytes()];
//! let mut fb = FrameBuffer::from_slice(geometry, &mut back_buffer)?;
//! fb.write_pixel(10, 20, PixelColor::new(0x2d, 0x76, 0xed))?;
//! assert_eq!(fb.read_pixel(10, 20), Some(PixelColor::new(0x2d, 0x76, 0xed)));
//! # Ok::<(), kernel_framebuffer::FrameBufferError>(())
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod color;
mod error;
mod frame_buffer;
mod geometry;

pub use color::{BgrReservedPixel, ChannelOrder, PixelColor, RgbReservedPixel};
pub use error::FrameBufferError;
pub use frame_buffer::FrameBuffer;
pub use geometry::FrameBufferGeometry;

use kernel_info::boot::FrameBufferConfig;
use log::{error, info};

/// Brings up kernel graphics on the framebuffer the loader handed over.
///
/// # Safety
/// Same contract as [`FrameBuffer::from_config`]: the descriptor's base
/// address must point at mapped, writable, unaliased memory.
///
/// # Errors
/// Returns the first validation failure; the kernel must not continue into
/// graphics mode in that case.
pub unsafe fn init(config: &FrameBufferConfig) -> Result<FrameBuffer<'static>, FrameBufferError> {
    // SAFETY: forwarded to the caller.
    match unsafe { FrameBuffer::from_config(config) } {
        Ok(fb) => {
            let geometry = fb.geometry();
            info!(
                "Frame buffer at {:#018x}: {}x{} px, stride {} px, {}",
                config.base_address,
                geometry.width(),
                geometry.height(),
                geometry.stride(),
                config.format()
            );
            Ok(fb)
        }
        Err(e) => {
            error!("Rejecting frame buffer handoff: {e}");
            Err(e)
        }
    }
}
