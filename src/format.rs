//! Surface format metadata for the GX2 hardware format codes.

/// Hardware format records indexed by `(format & 0x3F) * 4`.
/// Each record is 4 bytes with the bits per element in the first byte.
/// Unused format slots have a bit count of zero.
#[rustfmt::skip]
const FORMAT_HW_INFO: [u8; 256] = [
    0x00, 0x00, 0x00, 0x01, 0x08, 0x03, 0x00, 0x01, 0x08, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x01, 0x10, 0x07, 0x00, 0x00, 0x10, 0x03, 0x00, 0x01, 0x10, 0x03, 0x00, 0x01,
    0x10, 0x0B, 0x00, 0x01, 0x10, 0x01, 0x00, 0x01, 0x10, 0x03, 0x00, 0x01, 0x10, 0x03, 0x00, 0x01,
    0x10, 0x03, 0x00, 0x01, 0x20, 0x03, 0x00, 0x00, 0x20, 0x07, 0x00, 0x00, 0x20, 0x03, 0x00, 0x00,
    0x20, 0x03, 0x00, 0x01, 0x20, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x03, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x20, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x01, 0x20, 0x0B, 0x00, 0x01, 0x20, 0x0B, 0x00, 0x01, 0x20, 0x0B, 0x00, 0x01,
    0x40, 0x05, 0x00, 0x00, 0x40, 0x03, 0x00, 0x00, 0x40, 0x03, 0x00, 0x00, 0x40, 0x03, 0x00, 0x00,
    0x40, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x80, 0x03, 0x00, 0x00, 0x80, 0x03, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x10, 0x01, 0x00, 0x00,
    0x10, 0x01, 0x00, 0x00, 0x20, 0x01, 0x00, 0x00, 0x20, 0x01, 0x00, 0x00, 0x20, 0x01, 0x00, 0x00,
    0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x60, 0x01, 0x00, 0x00,
    0x60, 0x01, 0x00, 0x00, 0x40, 0x01, 0x00, 0x01, 0x80, 0x01, 0x00, 0x01, 0x80, 0x01, 0x00, 0x01,
    0x40, 0x01, 0x00, 0x01, 0x80, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// The GX2 surface format codes for the BCn block compressed formats.
/// These formats are addressed in 4x4 pixel blocks rather than single pixels.
const BCN_FORMATS: [u32; 10] = [
    0x31, 0x431, 0x32, 0x432, 0x33, 0x433, 0x34, 0x234, 0x35, 0x235,
];

/// Gets the bits per element for the hardware format `format`.
///
/// Block compressed formats return the bits per 4x4 pixel block.
/// Format codes without a populated hardware record return `0`.
/// # Examples
/**
```rust
use gx2_swizzle::bits_per_pixel;

// GX2_SURFACE_FORMAT_UNORM_R8_G8_B8_A8
assert_eq!(32, bits_per_pixel(0x1a));
// GX2_SURFACE_FORMAT_SRGB_BC1
assert_eq!(64, bits_per_pixel(0x431));
```
*/
pub fn bits_per_pixel(format: u32) -> u32 {
    let hw_format = format & 0x3F;
    FORMAT_HW_INFO[hw_format as usize * 4] as u32
}

/// Returns `true` if `format` is one of the BCn block compressed formats.
///
/// Compressed surfaces are tiled in units of blocks,
/// so their width and height in pixels are divided by 4 before addressing.
pub fn is_block_compressed(format: u32) -> bool {
    BCN_FORMATS.contains(&format)
}
