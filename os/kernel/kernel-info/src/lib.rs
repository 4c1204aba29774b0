//! # Boot Handoff Interface
//!
//! This crate defines the contract by which the UEFI loader describes the
//! active linear framebuffer to the kernel. Loader and kernel are built as two
//! independent programs; the only thing they share is the layout defined here.
//!
//! ## Overview
//!
//! After the loader has activated a graphics mode it fills in exactly one
//! [`FrameBufferConfig`](boot::FrameBufferConfig) and hands it over. From
//! then on the descriptor is never modified. The kernel reads it to compute
//! pixel addresses without asking the firmware again.
//!
//! ```text
//!   UEFI Loader                          Kernel
//! ┌──────────────────┐               ┌──────────────────────┐
//! │ GOP current mode │──populates──▶ │ FrameBufferConfig    │
//! └──────────────────┘               │  (read-only)         │
//!                                    └──────────┬───────────┘
//!                                               │ validates
//!                                               ▼
//!                                    ┌──────────────────────┐
//!                                    │ kernel-framebuffer   │
//!                                    └──────────────────────┘
//! ```
//!
//! ## Layout
//!
//! ```text
//! offset (64-bit)  field                    type
//! 0x00             base_address             usize
//! 0x08             stride_pixels            u32
//! 0x0c             horizontal_resolution    u32
//! 0x10             vertical_resolution      u32
//! 0x14             pixel_format             u8
//! 0x15..0x18       padding
//! ```
//!
//! * **Stride vs. width**: hardware frequently pads scan lines, so the
//!   stride can exceed the visible width. Pixel `(x, y)` lives at
//!   `(y * stride_pixels + x) * 4`.
//! * **Pixel format**: tag `1` is `[R][G][B][reserved]`, tag `2` is
//!   `[B][G][R][reserved]`. The tag is transported as a plain `u8`;
//!   [`PixelFormat`](boot::PixelFormat) interprets it.
//! * **Byte order**: native. Both sides run on the same machine.
//!
//! The field offsets are asserted at compile time.
//!
//! ## Usage
//!
//! ```rust
//! use kernel_info::boot::{FrameBufferConfig, PixelFormat};
//!
//! let fb = FrameBufferConfig::new(0xC000_0000, 1024, 800, 600, PixelFormat::BgrReserved8);
//! let bytes = fb.to_bytes();
//! let back = FrameBufferConfig::from_bytes(&bytes).expect("complete descriptor");
//! assert_eq!(back, fb);
//! assert_eq!(back.format(), PixelFormat::BgrReserved8);
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]

pub mod boot;
