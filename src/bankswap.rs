//! Bank swapped width computation for the `2b` and `3b` tile modes.
use crate::{
    TileMode, NUM_BANKS, NUM_PIPES, PIPE_INTERLEAVE_BYTES, ROW_SIZE, SPLIT_SIZE, SWAP_SIZE,
};

/// Calculates the surface width in elements after which the bank selection
/// permutation repeats for bank swapped tile modes.
///
/// Returns `0` for tile modes without bank swapping.
/// The result is always below `2 * pitch` for a nonzero `pitch`.
/// # Examples
/**
```rust
use gx2_swizzle::{bank_swapped_width, TileMode};

assert_eq!(64, bank_swapped_width(TileMode::Tiled2bThin1, 32, 64));
assert_eq!(0, bank_swapped_width(TileMode::Tiled2dThin1, 32, 64));
```
*/
pub fn bank_swapped_width(tile_mode: TileMode, bpp: u32, pitch: u32) -> u32 {
    if !tile_mode.is_bank_swapped() {
        return 0;
    }

    let mut num_samples = 1u32;
    let bytes_per_sample = 8 * bpp;

    // bpp is nonzero for any populated format, but a zero value must still
    // degrade to one slice per tile rather than faulting.
    let slices_per_tile = match SPLIT_SIZE.checked_div(bytes_per_sample) {
        Some(samples_per_tile) if samples_per_tile != 0 => (num_samples / samples_per_tile).max(1),
        _ => 1,
    };

    if tile_mode.is_thick_macro_tiled() {
        num_samples = 4;
    }

    let bytes_per_tile_slice = num_samples * bytes_per_sample / slices_per_tile;

    let factor = tile_mode.macro_tile_aspect_ratio();
    let swap_tiles = ((SWAP_SIZE >> 1) / bpp).max(1);

    let swap_width = swap_tiles * 8 * NUM_BANKS;
    let height_bytes = num_samples * factor * NUM_PIPES * bpp / slices_per_tile;
    let swap_max = NUM_PIPES * NUM_BANKS * ROW_SIZE / height_bytes;
    let swap_min = PIPE_INTERLEAVE_BYTES * 8 * NUM_BANKS / bytes_per_tile_slice;

    let mut bank_swap_width = swap_max.min(swap_min.max(swap_width));

    while bank_swap_width >= 2 * pitch && bank_swap_width != 0 {
        bank_swap_width >>= 1;
    }

    bank_swap_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_swapped_widths_thin() {
        assert_eq!(64, bank_swapped_width(TileMode::Tiled2bThin1, 32, 64));
        assert_eq!(64, bank_swapped_width(TileMode::Tiled3bThin1, 64, 128));
    }

    #[test]
    fn bank_swapped_widths_thick() {
        assert_eq!(64, bank_swapped_width(TileMode::Tiled2bThick, 8, 64));
    }

    #[test]
    fn bank_swapped_width_zero_for_unswapped_modes() {
        for raw in [0, 1, 2, 3, 4, 5, 6, 7, 12, 13, 16, 17] {
            let tile_mode = TileMode::new(raw).unwrap();
            assert_eq!(0, bank_swapped_width(tile_mode, 32, 256));
        }
    }

    #[test]
    fn bank_swapped_width_below_twice_pitch() {
        for raw in [8, 9, 10, 11, 14, 15] {
            let tile_mode = TileMode::new(raw).unwrap();
            for bpp in [8, 16, 32, 64, 128] {
                for pitch in [8, 32, 64, 256, 1024] {
                    let width = bank_swapped_width(tile_mode, bpp, pitch);
                    assert!(
                        width < 2 * pitch,
                        "mode {} bpp {} pitch {}: {}",
                        raw,
                        bpp,
                        pitch,
                        width
                    );
                }
            }
        }
    }

    #[test]
    fn bank_swapped_width_degenerate_pitch_terminates() {
        assert_eq!(0, bank_swapped_width(TileMode::Tiled2bThin1, 32, 0));
    }
}
