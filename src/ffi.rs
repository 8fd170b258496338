//! Documentation for the C API
use crate::TileMode;

/// Swizzles the bytes from `source` into `destination` using the tiled layout for `tile_mode`.
/// See the safe alternative [swizzle](super::swizzle()).
/// # Safety
/// `source` and `source_len` should refer to an array with at least as many bytes as the row-major surface.
/// Similarly, `destination` and `destination_len` should refer to an array of the same size.
/// Elements addressed past either length are skipped.
///
/// `tile_mode` must be one of the supported values in [TileMode].
#[no_mangle]
pub unsafe extern "C" fn swizzle(
    width: u32,
    height: u32,
    format: u32,
    tile_mode: u32,
    swizzle_value: u32,
    pitch: u32,
    source: *const u8,
    source_len: usize,
    destination: *mut u8,
    destination_len: usize,
) {
    let source = std::slice::from_raw_parts(source, source_len);
    let destination = std::slice::from_raw_parts_mut(destination, destination_len);

    crate::swizzle::swizzle_inner(
        width,
        height,
        format,
        TileMode::new(tile_mode).unwrap(),
        swizzle_value,
        pitch,
        source,
        destination,
        false,
    )
}

/// Deswizzles the bytes from `source` into `destination` in row-major order.
/// See the safe alternative [deswizzle](super::deswizzle()).
/// # Safety
/// `source` and `source_len` should refer to an array with at least as many bytes as the tiled surface.
/// Similarly, `destination` and `destination_len` should refer to an array of the same size.
/// Elements addressed past either length are skipped.
///
/// `tile_mode` must be one of the supported values in [TileMode].
#[no_mangle]
pub unsafe extern "C" fn deswizzle(
    width: u32,
    height: u32,
    format: u32,
    tile_mode: u32,
    swizzle_value: u32,
    pitch: u32,
    source: *const u8,
    source_len: usize,
    destination: *mut u8,
    destination_len: usize,
) {
    let source = std::slice::from_raw_parts(source, source_len);
    let destination = std::slice::from_raw_parts_mut(destination, destination_len);

    crate::swizzle::swizzle_inner(
        width,
        height,
        format,
        TileMode::new(tile_mode).unwrap(),
        swizzle_value,
        pitch,
        source,
        destination,
        true,
    )
}

/// See [bits_per_pixel](super::bits_per_pixel).
#[no_mangle]
pub extern "C" fn bits_per_pixel(format: u32) -> u32 {
    super::bits_per_pixel(format)
}

/// See [bank_swapped_width](super::bank_swapped_width).
/// `tile_mode` must be one of the supported values in [TileMode].
#[no_mangle]
pub extern "C" fn bank_swapped_width(tile_mode: u32, bpp: u32, pitch: u32) -> u32 {
    super::bank_swapped_width(TileMode::new(tile_mode).unwrap(), bpp, pitch)
}
