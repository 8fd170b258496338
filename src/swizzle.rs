//! Functions for swizzling and deswizzling.
use crate::{
    bank_swapped_width, bits_per_pixel, is_block_compressed, pixelindex::pixel_index_in_micro_tile,
    TileMode, TileModeClass, BANK_BIT_COUNT, MICRO_TILE_PIXELS, NUM_BANKS, NUM_PIPES,
    PIPE_BIT_COUNT, PIPE_INTERLEAVE_BIT_COUNT, SPLIT_SIZE,
};

/// Swizzles the bytes from `source` into the tiled layout selected by `tile_mode`.
///
/// The result has the same length as `source`.
/// Width and height are in pixels and are converted to 4x4 block counts for
/// block compressed formats. `pitch` is the row stride of the tiled surface in
/// elements and may exceed the width for alignment. Any element whose computed
/// address falls outside either buffer is skipped, so callers are responsible
/// for supplying mutually consistent dimensions.
/// # Examples
/**
```rust
use gx2_swizzle::{swizzle, TileMode};

// An 8x8 R8G8B8A8 surface fills a single micro tile.
let linear_data = vec![0u8; 8 * 8 * 4];
let swizzled_data = swizzle(8, 8, 0x1a, TileMode::Tiled1dThin1, 0, 8, &linear_data);
assert_eq!(linear_data.len(), swizzled_data.len());
```
*/
pub fn swizzle(
    width: u32,
    height: u32,
    format: u32,
    tile_mode: TileMode,
    swizzle_value: u32,
    pitch: u32,
    source: &[u8],
) -> Vec<u8> {
    let mut destination = vec![0u8; source.len()];
    swizzle_inner(
        width,
        height,
        format,
        tile_mode,
        swizzle_value,
        pitch,
        source,
        &mut destination,
        false,
    );
    destination
}

/// Deswizzles the bytes from `source` into row-major order.
///
/// This is the inverse of [swizzle] for well formed dimensions.
/// The result has the same length as `source`.
/// # Examples
/**
```rust
use gx2_swizzle::{deswizzle, TileMode};

// A 64x64 BC1 surface is addressed as 16x16 blocks of 8 bytes each.
let swizzled_data = vec![0u8; 16 * 16 * 8];
let linear_data = deswizzle(64, 64, 0x31, TileMode::Tiled1dThin1, 0, 16, &swizzled_data);
assert_eq!(swizzled_data.len(), linear_data.len());
```
*/
pub fn deswizzle(
    width: u32,
    height: u32,
    format: u32,
    tile_mode: TileMode,
    swizzle_value: u32,
    pitch: u32,
    source: &[u8],
) -> Vec<u8> {
    let mut destination = vec![0u8; source.len()];
    swizzle_inner(
        width,
        height,
        format,
        tile_mode,
        swizzle_value,
        pitch,
        source,
        &mut destination,
        true,
    );
    destination
}

pub(crate) fn swizzle_inner(
    width: u32,
    height: u32,
    format: u32,
    tile_mode: TileMode,
    swizzle_value: u32,
    pitch: u32,
    source: &[u8],
    destination: &mut [u8],
    deswizzle: bool,
) {
    // Block compressed formats are tiled in units of 4x4 pixel blocks.
    let (width, height) = if is_block_compressed(format) {
        (width / 4, height / 4)
    } else {
        (width, height)
    };

    let bpp = bits_per_pixel(format);
    let element_size = (bpp / 8) as usize;

    let pipe_swizzle = (swizzle_value >> 8) & 1;
    let bank_swizzle = (swizzle_value >> 9) & 3;

    for y in 0..height {
        for x in 0..width {
            let tiled_offset = match tile_mode.class() {
                TileModeClass::Linear => linear_address(x, y, bpp, pitch),
                TileModeClass::Micro => micro_tiled_address(x, y, bpp, pitch, tile_mode),
                TileModeClass::Macro => macro_tiled_address(
                    x,
                    y,
                    bpp,
                    pitch,
                    height,
                    tile_mode,
                    pipe_swizzle,
                    bank_swizzle,
                ),
            } as usize;

            let linear_offset = (y * width + x) as usize * element_size;

            // Swap the addresses for swizzling vs deswizzling.
            if deswizzle {
                copy_element(destination, linear_offset, source, tiled_offset, element_size);
            } else {
                copy_element(destination, tiled_offset, source, linear_offset, element_size);
            }
        }
    }
}

/// Copies one element, skipping each byte whose address falls outside
/// either buffer. Returns the number of bytes written.
fn copy_element(
    destination: &mut [u8],
    destination_offset: usize,
    source: &[u8],
    source_offset: usize,
    element_size: usize,
) -> usize {
    let mut written = 0;
    for i in 0..element_size {
        if let (Some(dst), Some(src)) = (
            destination.get_mut(destination_offset + i),
            source.get(source_offset + i),
        ) {
            *dst = *src;
            written += 1;
        }
    }
    written
}

fn linear_address(x: u32, y: u32, bpp: u32, pitch: u32) -> u32 {
    (y * pitch + x) * bpp / 8
}

fn micro_tiled_address(x: u32, y: u32, bpp: u32, pitch: u32, tile_mode: TileMode) -> u32 {
    let thickness = tile_mode.thickness();

    let micro_tile_bytes = (MICRO_TILE_PIXELS * thickness * bpp + 7) / 8;
    let micro_tiles_per_row = pitch >> 3;
    let micro_tile_offset = micro_tile_bytes * ((x >> 3) + (y >> 3) * micro_tiles_per_row);

    let pixel_index = pixel_index_in_micro_tile(x, y, 0, bpp, thickness);

    micro_tile_offset + (bpp * pixel_index >> 3)
}

fn macro_tiled_address(
    x: u32,
    y: u32,
    bpp: u32,
    pitch: u32,
    height: u32,
    tile_mode: TileMode,
    pipe_swizzle: u32,
    bank_swizzle: u32,
) -> u32 {
    let thickness = tile_mode.thickness();

    let micro_tile_bits = bpp * thickness * MICRO_TILE_PIXELS;
    let micro_tile_bytes = (micro_tile_bits + 7) / 8;

    let pixel_index = pixel_index_in_micro_tile(x, y, 0, bpp, thickness);
    let mut elem_offset = bpp * pixel_index;

    // Micro tiles larger than the split size are divided into sample slices.
    // The split count keeps the hardware's general form even though integer
    // truncation of 1 / samples_per_slice always yields a single split.
    let (num_samples, sample_slice) = if micro_tile_bytes <= SPLIT_SIZE {
        (1, 0)
    } else {
        let samples_per_slice = SPLIT_SIZE / micro_tile_bytes;
        let num_sample_splits = 1u32.checked_div(samples_per_slice).unwrap_or(0).max(1);
        let slice_bits = micro_tile_bits / num_sample_splits;
        let sample_slice = elem_offset / slice_bits;
        elem_offset %= slice_bits;
        (samples_per_slice, sample_slice)
    };

    elem_offset = (elem_offset + 7) / 8;

    let mut pipe = pipe_from_coord(x, y);
    let mut bank = bank_from_coord(x, y);

    let mut bank_pipe = pipe + NUM_PIPES * bank;
    let swizzle = pipe_swizzle + NUM_PIPES * bank_swizzle;

    bank_pipe ^= NUM_PIPES * sample_slice * ((NUM_BANKS >> 1) + 1) ^ swizzle;
    bank_pipe %= NUM_PIPES * NUM_BANKS;
    pipe = bank_pipe % NUM_PIPES;
    bank = bank_pipe / NUM_PIPES;

    let slice_bytes = (height * pitch * thickness * bpp * num_samples + 7) / 8;
    let slice_offset = slice_bytes * (sample_slice / thickness);

    let mut macro_tile_pitch = 8 * NUM_BANKS;
    let mut macro_tile_height = 8 * NUM_PIPES;

    // Thin2 and Thin4 macro tiles trade width for height.
    match tile_mode.macro_tile_aspect_ratio() {
        2 => {
            macro_tile_pitch >>= 1;
            macro_tile_height *= 2;
        }
        4 => {
            macro_tile_pitch >>= 2;
            macro_tile_height *= 4;
        }
        _ => (),
    }

    let macro_tiles_per_row = pitch / macro_tile_pitch;
    let macro_tile_bytes =
        (num_samples * thickness * bpp * macro_tile_height * macro_tile_pitch + 7) / 8;
    let macro_tile_index_x = x / macro_tile_pitch;
    let macro_tile_index_y = y / macro_tile_height;
    let macro_tile_offset =
        (macro_tile_index_x + macro_tiles_per_row * macro_tile_index_y) * macro_tile_bytes;

    // The 2b and 3b thin1 modes and the 2d xthick mode permute the bank
    // selection across wide surfaces. The xthick mode has no swap width,
    // so its swap index stays at the identity entry of the order table.
    if matches!(
        tile_mode,
        TileMode::Tiled2bThin1
            | TileMode::Tiled2bThin2
            | TileMode::Tiled2bThin4
            | TileMode::Tiled2bThick
            | TileMode::Tiled3bThin1
            | TileMode::Tiled2dXThick
    ) {
        const BANK_SWAP_ORDER: [u32; 10] = [0, 1, 3, 2, 6, 7, 5, 4, 0, 0];
        let swap_width = bank_swapped_width(tile_mode, bpp, pitch);
        let swap_index = (macro_tile_pitch * macro_tile_index_x)
            .checked_div(swap_width)
            .unwrap_or(0);
        bank ^= BANK_SWAP_ORDER[(swap_index & (NUM_BANKS - 1)) as usize];
    }

    let group_mask = (1 << PIPE_INTERLEAVE_BIT_COUNT) - 1;
    let num_swizzle_bits = BANK_BIT_COUNT + PIPE_BIT_COUNT;

    let total_offset = elem_offset + ((macro_tile_offset + slice_offset) >> num_swizzle_bits);

    let offset_high = (total_offset & !group_mask) << num_swizzle_bits;
    let offset_low = total_offset & group_mask;

    let pipe_bits = pipe << PIPE_INTERLEAVE_BIT_COUNT;
    let bank_bits = bank << (PIPE_BIT_COUNT + PIPE_INTERLEAVE_BIT_COUNT);

    bank_bits | pipe_bits | offset_low | offset_high
}

fn pipe_from_coord(x: u32, y: u32) -> u32 {
    ((y >> 3) ^ (x >> 3)) & 1
}

// Bank selection for the 4 bank configuration.
// Parts with 8 banks use a third bank bit, but this chip always has 4.
fn bank_from_coord(x: u32, y: u32) -> u32 {
    let bank_bit_0 = ((y / (16 * NUM_PIPES)) ^ (x >> 3)) & 1;
    bank_bit_0 | 2 * (((y / (8 * NUM_PIPES)) ^ (x >> 4)) & 1)
}
