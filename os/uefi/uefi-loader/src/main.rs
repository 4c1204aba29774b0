//! # UEFI Frame Buffer Handoff
//!
//! This UEFI application is the producing side of the frame buffer handoff. It
//! asks the firmware for the active graphics mode and describes it in a
//! [`FrameBufferConfig`](kernel_info::boot::FrameBufferConfig), the one record
//! the kernel gets to find its video memory.
//!
//! ## Boot Flow
//!
//! ```text
//! UEFI Firmware Boot
//!         ↓
//! ┌─────────────────────────────────────────────┐
//! │              UEFI Loader                    │
//! ├─────────────────────────────────────────────┤
//! │  1. Environment Setup                       │
//! │     • UEFI helpers and logging              │
//! │  2. Graphics Discovery                      │
//! │     • Open GOP exclusively                  │
//! │     • Read the current mode                 │
//! │  3. Descriptor                              │
//! │     • Map GOP pixel format to handoff tag   │
//! │     • Validate with the kernel's rules      │
//! │     • Trace fields and wire bytes           │
//! └─────────────────────────────────────────────┘
//!         ↓
//! Kernel (reads the descriptor, never the firmware)
//! ```
//!
//! ## Pixel Formats
//!
//! | GOP format | Handoff tag |
//! |------------|-------------|
//! | `PixelRedGreenBlueReserved8BitPerColor` | `1` |
//! | `PixelBlueGreenRedReserved8BitPerColor` | `2` |
//! | `PixelBitMask`, `PixelBltOnly` | rejected |
//!
//! A rejected format ends the boot with `EFI_UNSUPPORTED`: continuing would
//! leave the kernel without usable graphics.
//!
//! ## Development
//!
//! With the default `qemu` feature every log line is also written to QEMU's
//! debug console (`-debugcon stdio`).

#![cfg_attr(not(any(test, doctest)), no_std)]
#![no_main]
#![allow(unsafe_code)]

mod framebuffer;
mod logger;
mod tracing;

use crate::framebuffer::get_frame_buffer_config;
use crate::logger::UefiLogger;
use crate::tracing::trace_frame_buffer_config;
use log::{LevelFilter, error, info};
use uefi::prelude::*;

const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[entry]
fn efi_main() -> Status {
    if uefi::helpers::init().is_err() {
        return Status::UNSUPPORTED;
    }
    if UefiLogger::init(LOG_LEVEL).is_err() {
        return Status::ABORTED;
    }

    info!("UEFI Loader reporting to QEMU");
    info!("Describing the active frame buffer ...");

    let config = match get_frame_buffer_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Frame buffer handoff failed: {e}");
            return e.into();
        }
    };

    trace_frame_buffer_config(&config);
    info!(
        "Frame buffer descriptor ready: {}x{} px, {}",
        config.horizontal_resolution,
        config.vertical_resolution,
        config.format()
    );

    Status::SUCCESS
}
