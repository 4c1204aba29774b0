use kernel_framebuffer::{ChannelOrder, FrameBuffer, FrameBufferError, FrameBufferGeometry, PixelColor};
use kernel_info::boot::{FrameBufferConfig, PixelFormat};
use std::collections::HashSet;

fn descriptor(stride: u32, width: u32, height: u32, tag: u8) -> FrameBufferConfig {
    FrameBufferConfig {
        base_address: 0xC000_0000,
        stride_pixels: stride,
        horizontal_resolution: width,
        vertical_resolution: height,
        pixel_format: tag,
    }
}

#[test]
fn svga_offsets() {
    let g = FrameBufferGeometry::new(&descriptor(1024, 800, 600, 1)).unwrap();
    assert_eq!(g.pixel_offset(0, 0), Some(0));
    assert_eq!(g.pixel_offset(799, 0), Some(799));
    assert_eq!(g.pixel_offset(0, 1), Some(1024));
    assert_eq!(g.byte_offset(0, 1), Some(4096));
}

#[test]
fn validated_descriptors_hold_invariants() {
    for (stride, width, height) in [(1, 1, 1), (640, 640, 480), (2048, 1920, 1080), (37, 13, 9)] {
        for tag in [1, 2] {
            let g = FrameBufferGeometry::new(&descriptor(stride, width, height, tag)).unwrap();
            assert!(g.stride() >= g.width());
            assert!(g.width() > 0 && g.height() > 0);
        }
    }
}

#[test]
fn pixel_offsets_are_injective() {
    let g = FrameBufferGeometry::new(&descriptor(19, 17, 11, 2)).unwrap();
    let mut seen = HashSet::new();
    for y in 0..g.height() {
        for x in 0..g.width() {
            let offset = g.pixel_offset(x, y).unwrap();
            assert!(seen.insert(offset), "({x}, {y}) collides at {offset}");
        }
    }
    assert_eq!(seen.len(), 17 * 11);
}

#[test]
fn byte_offset_identifies_the_row() {
    let g = FrameBufferGeometry::new(&descriptor(16, 16, 12, 1)).unwrap();
    for x in [0, 7, 15] {
        for y in 0..g.height() {
            for y2 in 0..g.height() {
                if g.byte_offset(x, y) == g.byte_offset(x, y2) {
                    assert_eq!(y, y2);
                }
            }
        }
    }
}

#[test]
fn unknown_format_halts_initialization() {
    let config = descriptor(1024, 800, 600, 3);
    assert_eq!(
        FrameBufferGeometry::new(&config),
        Err(FrameBufferError::UnsupportedPixelFormat(3))
    );
    // SAFETY: validation fails before the base address is used.
    let err = unsafe { kernel_framebuffer::init(&config) }.unwrap_err();
    assert_eq!(err, FrameBufferError::UnsupportedPixelFormat(3));
}

#[test]
fn zero_width_halts_initialization() {
    let config = descriptor(1024, 0, 600, 1);
    // SAFETY: validation fails before the base address is used.
    let err = unsafe { kernel_framebuffer::init(&config) }.unwrap_err();
    assert_eq!(
        err,
        FrameBufferError::DegenerateResolution {
            width: 0,
            height: 600
        }
    );
}

#[test]
fn init_borrows_memory_at_base_address() {
    let template = FrameBufferConfig::new(0, 12, 10, 4, PixelFormat::RgbReserved8);
    let span = FrameBufferGeometry::new(&template).unwrap().span_bytes();
    let mut memory = vec![0u8; span];
    let config = FrameBufferConfig {
        base_address: memory.as_mut_ptr().expose_provenance(),
        ..template
    };

    {
        // SAFETY: `memory` outlives the view and is not touched while it exists.
        let mut fb = unsafe { kernel_framebuffer::init(&config) }.unwrap();
        fb.write_pixel(9, 3, PixelColor::new(0xaa, 0xbb, 0xcc)).unwrap();
        assert_eq!(fb.read_pixel(9, 3), Some(PixelColor::new(0xaa, 0xbb, 0xcc)));
    }

    let offset = (3 * 12 + 9) * ChannelOrder::BYTES_PER_PIXEL;
    assert_eq!(offset + 4, span);
    assert_eq!(memory[offset..], [0xaa, 0xbb, 0xcc, 0x00]);
}

#[test]
fn decoded_handoff_validates_like_the_original() {
    let sent = FrameBufferConfig::new(0xC000_0000, 2048, 1920, 1080, PixelFormat::BgrReserved8);
    let received = FrameBufferConfig::from_bytes(&sent.to_bytes()).unwrap();
    assert_eq!(received, sent);

    let g = FrameBufferGeometry::new(&received).unwrap();
    assert_eq!(g.channel_order(), ChannelOrder::Bgr);
    assert_eq!(g.row_bytes(), 2048 * 4);
}

#[test]
fn same_color_differs_by_channel_order() {
    let color = PixelColor::new(0x12, 0x34, 0x56);
    let mut rgb = vec![0u8; 4];
    let mut bgr = vec![0u8; 4];

    let g = FrameBufferGeometry::new(&descriptor(1, 1, 1, 1)).unwrap();
    FrameBuffer::from_slice(g, &mut rgb).unwrap().write_pixel(0, 0, color).unwrap();
    let g = FrameBufferGeometry::new(&descriptor(1, 1, 1, 2)).unwrap();
    FrameBuffer::from_slice(g, &mut bgr).unwrap().write_pixel(0, 0, color).unwrap();

    assert_eq!(rgb, [0x12, 0x34, 0x56, 0x00]);
    assert_eq!(bgr, [0x56, 0x34, 0x12, 0x00]);
}
