//! # Trace output

use kernel_info::boot::FrameBufferConfig;
use log::debug;

pub fn trace_frame_buffer_config(config: &FrameBufferConfig) {
    debug!("Frame buffer descriptor in UEFI Loader:");
    debug!(
        "   FB ptr = {:018x}, FB stride = {}, FB width = {}, FB height = {}, FB format = {}",
        config.base_address,
        config.stride_pixels,
        config.horizontal_resolution,
        config.vertical_resolution,
        config.format()
    );
    debug!("   wire = {:02x?}", config.to_bytes());
}
