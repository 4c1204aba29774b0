/// Reasons the kernel refuses a frame buffer handoff or a pixel access.
///
/// Everything up to [`FrameBufferError::SizeOverflow`] is fatal for graphics
/// initialization; there is no partial mode to fall back to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameBufferError {
    #[error("unsupported pixel format tag {0}")]
    UnsupportedPixelFormat(u8),
    #[error("degenerate resolution {width}x{height}")]
    DegenerateResolution { width: u32, height: u32 },
    #[error("stride of {stride} pixels is smaller than the visible width of {width} pixels")]
    InvalidStride { stride: u32, width: u32 },
    #[error("frame buffer base address is null")]
    NullBaseAddress,
    #[error("frame buffer span does not fit the address space")]
    SizeOverflow,
    #[error("buffer of {actual} bytes is too small, {required} bytes required")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("pixel ({x}, {y}) is outside the visible area")]
    OutOfBounds { x: u32, y: u32 },
}
