//! The bit interleaved element ordering within a micro tile.

/// Computes the linear element index for pixel `(x, y, z)` within its 8x8 micro tile.
///
/// The hardware interleaves the low bits of x and y differently for each
/// element size so that consecutive memory accesses stay within a small 2D
/// neighborhood. The bit assignments below are a fixed hardware contract and
/// must not be rederived or "simplified".
///
/// Thick tiles append the low z bits above the 6 x/y bits,
/// giving indices up to 9 bits for 8 pixel deep tiles.
pub(crate) fn pixel_index_in_micro_tile(x: u32, y: u32, z: u32, bpp: u32, thickness: u32) -> u32 {
    let x0 = x & 1;
    let x1 = (x & 2) >> 1;
    let x2 = (x & 4) >> 2;
    let y0 = y & 1;
    let y1 = (y & 2) >> 1;
    let y2 = (y & 4) >> 2;

    // One bit assignment table per element size class.
    let [bit0, bit1, bit2, bit3, bit4, bit5] = match bpp {
        0x08 => [x0, x1, x2, y1, y0, y2],
        0x10 => [x0, x1, x2, y0, y1, y2],
        0x20 | 0x60 => [x0, x1, y0, x2, y1, y2],
        0x40 => [x0, y0, x1, x2, y1, y2],
        0x80 => [y0, x0, x1, x2, y1, y2],
        _ => [x0, x1, y0, x2, y1, y2],
    };

    let mut index = bit0 | bit1 << 1 | bit2 << 2 | bit3 << 3 | bit4 << 4 | bit5 << 5;

    if thickness > 1 {
        index |= (z & 1) << 6 | ((z & 2) >> 1) << 7;
    }
    if thickness == 8 {
        index |= ((z & 4) >> 2) << 8;
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_indices_are_bijective_for_each_bpp_class() {
        // Every class assigns each of the six x/y bits exactly once,
        // so the 64 tile positions must map onto 64 distinct indices.
        for bpp in [8, 16, 32, 64, 96, 128, 24] {
            let mut seen = [false; 64];
            for y in 0..8 {
                for x in 0..8 {
                    let index = pixel_index_in_micro_tile(x, y, 0, bpp, 1);
                    assert!(index < 64, "bpp {}: index {} out of range", bpp, index);
                    assert!(
                        !seen[index as usize],
                        "bpp {}: duplicate index {} at ({}, {})",
                        bpp,
                        index,
                        x,
                        y
                    );
                    seen[index as usize] = true;
                }
            }
        }
    }

    #[test]
    fn pixel_index_32_bpp() {
        // Index for (3, 5) computed by hand from the 32 bpp bit assignments:
        // x0 | x1 << 1 | y0 << 2 | x2 << 3 | y1 << 4 | y2 << 5.
        assert_eq!(39, pixel_index_in_micro_tile(3, 5, 0, 32, 1));
        assert_eq!(0, pixel_index_in_micro_tile(0, 0, 0, 32, 1));
        assert_eq!(63, pixel_index_in_micro_tile(7, 7, 0, 32, 1));
    }

    #[test]
    fn pixel_index_coordinates_wrap_at_tile_size() {
        // Only the low 3 bits of each coordinate select the position in the tile.
        assert_eq!(
            pixel_index_in_micro_tile(3, 5, 0, 32, 1),
            pixel_index_in_micro_tile(3 + 8, 5 + 16, 0, 32, 1)
        );
    }

    #[test]
    fn pixel_index_thick_tiles_interleave_z() {
        let base = pixel_index_in_micro_tile(3, 5, 0, 32, 4);
        assert_eq!(base | 1 << 6, pixel_index_in_micro_tile(3, 5, 1, 32, 4));
        assert_eq!(base | 1 << 7, pixel_index_in_micro_tile(3, 5, 2, 32, 4));
        assert_eq!(
            base | 3 << 6,
            pixel_index_in_micro_tile(3, 5, 3, 32, 4)
        );

        // The third z bit is only used by 8 pixel deep tiles.
        assert_eq!(base | 3 << 6, pixel_index_in_micro_tile(3, 5, 7, 32, 4));
        assert_eq!(
            base | 7 << 6,
            pixel_index_in_micro_tile(3, 5, 7, 32, 8)
        );
    }
}
