//! # GOP Frame Buffer for the Kernel

use kernel_framebuffer::{FrameBufferError, FrameBufferGeometry};
use kernel_info::boot::{FrameBufferConfig, PixelFormat};
use log::debug;
use uefi::boot::{self, ScopedProtocol};
use uefi::proto::console::gop::{self, GraphicsOutput};
use uefi::Status;

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("Graphics Output Protocol is not available")]
    NoGraphicsOutput(#[source] uefi::Error),
    #[error("firmware pixel format {0:?} cannot be handed to the kernel")]
    UnsupportedPixelFormat(gop::PixelFormat),
    #[error("mode {width}x{height} with stride {stride} does not fit the descriptor")]
    ModeOutOfRange {
        width: usize,
        height: usize,
        stride: usize,
    },
    #[error("firmware frame buffer holds {size} bytes, mode addresses {span}")]
    FrameBufferTooSmall { size: usize, span: usize },
    #[error("descriptor rejected: {0}")]
    InvalidDescriptor(#[from] FrameBufferError),
}

impl From<LoaderError> for Status {
    fn from(value: LoaderError) -> Self {
        match value {
            LoaderError::NoGraphicsOutput(e) => e.status(),
            LoaderError::UnsupportedPixelFormat(_) => Self::UNSUPPORTED,
            LoaderError::ModeOutOfRange { .. }
            | LoaderError::FrameBufferTooSmall { .. }
            | LoaderError::InvalidDescriptor(_) => Self::DEVICE_ERROR,
        }
    }
}

/// Describe the currently active GOP mode for the kernel.
///
/// The mode is taken as the firmware set it; no mode is switched here. The
/// descriptor goes through the kernel's own validation before it is returned,
/// so a mode the kernel would reject never leaves the loader.
pub fn get_frame_buffer_config() -> Result<FrameBufferConfig, LoaderError> {
    let mut gop = open_gop()?;

    let mode = gop.current_mode_info();
    let (width, height) = mode.resolution();
    let stride = mode.stride();
    debug!(
        "GOP current mode: {width}x{height} px, stride {stride} px, {:?}",
        mode.pixel_format()
    );

    let pixel_format = boot_pixel_format(mode.pixel_format())?;
    let out_of_range = || LoaderError::ModeOutOfRange {
        width,
        height,
        stride,
    };
    let stride_pixels = u32::try_from(stride).map_err(|_| out_of_range())?;
    let horizontal_resolution = u32::try_from(width).map_err(|_| out_of_range())?;
    let vertical_resolution = u32::try_from(height).map_err(|_| out_of_range())?;

    let mut fb = gop.frame_buffer();
    let size = fb.size();
    let base_address = fb.as_mut_ptr().expose_provenance();

    let config = FrameBufferConfig::new(
        base_address,
        stride_pixels,
        horizontal_resolution,
        vertical_resolution,
        pixel_format,
    );

    let geometry = FrameBufferGeometry::new(&config)?;
    if size < geometry.span_bytes() {
        return Err(LoaderError::FrameBufferTooSmall {
            size,
            span: geometry.span_bytes(),
        });
    }

    Ok(config)
}

/// Map the firmware's pixel format onto the handoff tag.
///
/// Bitmask formats would need the masks transported as well, and `BltOnly`
/// has no linear framebuffer at all; both stop the boot.
const fn boot_pixel_format(format: gop::PixelFormat) -> Result<PixelFormat, LoaderError> {
    match format {
        gop::PixelFormat::Rgb => Ok(PixelFormat::RgbReserved8),
        gop::PixelFormat::Bgr => Ok(PixelFormat::BgrReserved8),
        gop::PixelFormat::Bitmask | gop::PixelFormat::BltOnly => {
            Err(LoaderError::UnsupportedPixelFormat(format))
        }
    }
}

/// Fetch the Graphics Output Protocol (GOP).
fn open_gop() -> Result<ScopedProtocol<GraphicsOutput>, LoaderError> {
    let handle =
        boot::get_handle_for_protocol::<GraphicsOutput>().map_err(LoaderError::NoGraphicsOutput)?;
    boot::open_protocol_exclusive::<GraphicsOutput>(handle).map_err(LoaderError::NoGraphicsOutput)
}
