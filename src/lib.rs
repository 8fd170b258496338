//! # gx2_swizzle
//! gx2_swizzle is an unofficial CPU implementation of the tiled (swizzled)
//! texture memory layouts used by the Wii U's GX2 graphics API.
//!
//! # Getting Started
//! Textures on disc store their image data pretiled for the GPU's address
//! translation hardware. Deswizzling produces the row-major layout expected
//! by image libraries and modern graphics APIs.
/*!
```rust no_run
use gx2_swizzle::{deswizzle, TileMode};

# let swizzled_data = vec![0u8; 2048];
// A 64x64 BC1 texture stores one 8 byte block per 4x4 pixels,
// so the surface is addressed as 16x16 blocks.
let linear_data = deswizzle(64, 64, 0x31, TileMode::Tiled1dThin1, 0, 16, &swizzled_data);
```
*/
//! # Tiled Layouts
//! GX2 surfaces use one of three tiling families selected by [TileMode].
//! Linear modes store elements in row-major order.
//! Micro tiled (1D) modes gather elements into 8x8 pixel tiles with a
//! bit-interleaved element order chosen for memory access locality.
//! Macro tiled (2D/3D) modes additionally distribute micro tiles across the
//! memory controller's pipes and banks, so consecutive tiles can be accessed
//! in parallel.
//!
//! # Limitations
//! 2D surfaces are fully supported.
//! The thick (3D) modes are addressed at depth zero,
//! which is sufficient for the 2D surfaces found in practice.
mod bankswap;
mod format;
mod pixelindex;
mod swizzle;

// Avoid making this module public to prevent people importing it accidentally.
mod ffi;

pub use bankswap::*;
pub use format::*;
pub use swizzle::*;

// Addressing constants for the Wii U's memory controller configuration.
// The pipe and bank counts match the R600 era AddrLib defaults for this chip.
const NUM_PIPES: u32 = 2;
const NUM_BANKS: u32 = 4;
const PIPE_BIT_COUNT: u32 = 1;
const BANK_BIT_COUNT: u32 = 2;
const PIPE_INTERLEAVE_BYTES: u32 = 256;
const PIPE_INTERLEAVE_BIT_COUNT: u32 = 8;
const ROW_SIZE: u32 = 2048;
const SWAP_SIZE: u32 = 256;
const SPLIT_SIZE: u32 = 2048;
const MICRO_TILE_PIXELS: u32 = 8 * 8;

/// An enumeration of the GX2 tile modes.
///
/// Texture file formats store the tile mode as an integer in `0..=17`.
/// Use [TileMode::new] to convert the stored value.
///
/// The `1d` modes tile the surface into 8x8 pixel micro tiles.
/// The `2d` and `3d` modes group micro tiles into macro tiles spread over
/// memory pipes and banks. The `2b` and `3b` modes additionally permute the
/// bank selection ("bank swapping") across wide surfaces.
/// `Thick` modes have 4 pixel deep tiles and `XThick` modes 8.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u32)]
pub enum TileMode {
    LinearGeneral = 0,
    LinearAligned = 1,
    Tiled1dThin1 = 2,
    Tiled1dThick = 3,
    Tiled2dThin1 = 4,
    Tiled2dThin2 = 5,
    Tiled2dThin4 = 6,
    Tiled2dThick = 7,
    Tiled2bThin1 = 8,
    Tiled2bThin2 = 9,
    Tiled2bThin4 = 10,
    Tiled2bThick = 11,
    Tiled3dThin1 = 12,
    Tiled3dThick = 13,
    Tiled3bThin1 = 14,
    Tiled3bThick = 15,
    Tiled2dXThick = 16,
    Tiled3dXThick = 17,
}

/// The three tiling families that select the address calculation for a surface.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TileModeClass {
    Linear,
    Micro,
    Macro,
}

impl TileMode {
    /// Attempts to construct a tile mode from the integer stored in texture headers.
    /// Returns [None] if `value` is not a recognized tile mode.
    /// # Examples
    /**
    ```rust
    use gx2_swizzle::TileMode;

    assert_eq!(Some(TileMode::Tiled2dThin1), TileMode::new(4));
    assert_eq!(None, TileMode::new(18));
    ```
    */
    pub fn new(value: u32) -> Option<Self> {
        match value {
            0 => Some(TileMode::LinearGeneral),
            1 => Some(TileMode::LinearAligned),
            2 => Some(TileMode::Tiled1dThin1),
            3 => Some(TileMode::Tiled1dThick),
            4 => Some(TileMode::Tiled2dThin1),
            5 => Some(TileMode::Tiled2dThin2),
            6 => Some(TileMode::Tiled2dThin4),
            7 => Some(TileMode::Tiled2dThick),
            8 => Some(TileMode::Tiled2bThin1),
            9 => Some(TileMode::Tiled2bThin2),
            10 => Some(TileMode::Tiled2bThin4),
            11 => Some(TileMode::Tiled2bThick),
            12 => Some(TileMode::Tiled3dThin1),
            13 => Some(TileMode::Tiled3dThick),
            14 => Some(TileMode::Tiled3bThin1),
            15 => Some(TileMode::Tiled3bThick),
            16 => Some(TileMode::Tiled2dXThick),
            17 => Some(TileMode::Tiled3dXThick),
            _ => None,
        }
    }

    /// The tiling family used to compute surface addresses for this mode.
    pub fn class(self) -> TileModeClass {
        match self {
            TileMode::LinearGeneral | TileMode::LinearAligned => TileModeClass::Linear,
            TileMode::Tiled1dThin1 | TileMode::Tiled1dThick => TileModeClass::Micro,
            _ => TileModeClass::Macro,
        }
    }

    /// The micro tile depth in pixels.
    pub fn thickness(self) -> u32 {
        match self {
            TileMode::Tiled1dThick
            | TileMode::Tiled2dThick
            | TileMode::Tiled2bThick
            | TileMode::Tiled3dThick
            | TileMode::Tiled3bThick => 4,
            TileMode::Tiled2dXThick | TileMode::Tiled3dXThick => 8,
            _ => 1,
        }
    }

    /// The width over height ratio of a macro tile in micro tiles.
    /// `Thin2` macro tiles are twice as tall as they are wide and `Thin4` four times.
    pub fn macro_tile_aspect_ratio(self) -> u32 {
        match self {
            TileMode::Tiled2dThin2 | TileMode::Tiled2bThin2 => 2,
            TileMode::Tiled2dThin4 | TileMode::Tiled2bThin4 => 4,
            _ => 1,
        }
    }

    /// The bank and pipe rotation between samples for macro tiled modes.
    ///
    /// Single sample surfaces only apply the rotation through the combined
    /// swizzle term in the macro tile address, so the value is retained as
    /// metadata for the hardware's more general multisample addressing.
    pub fn rotation(self) -> u32 {
        match self as u32 {
            4..=11 => NUM_PIPES * ((NUM_BANKS >> 1) - 1),
            // A part with four or more pipes would use pipes / 2 - 1 here.
            12..=15 => 1,
            _ => 0,
        }
    }

    /// Whether [bank_swapped_width] is nonzero for this mode.
    pub fn is_bank_swapped(self) -> bool {
        matches!(
            self,
            TileMode::Tiled2bThin1
                | TileMode::Tiled2bThin2
                | TileMode::Tiled2bThin4
                | TileMode::Tiled2bThick
                | TileMode::Tiled3bThin1
                | TileMode::Tiled3bThick
        )
    }

    pub(crate) fn is_thick_macro_tiled(self) -> bool {
        matches!(
            self,
            TileMode::Tiled2dThick
                | TileMode::Tiled2bThick
                | TileMode::Tiled3dThick
                | TileMode::Tiled3bThick
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_mode_new_round_trips_raw_values() {
        for raw in 0..18 {
            assert_eq!(Some(raw), TileMode::new(raw).map(|m| m as u32));
        }
        assert_eq!(None, TileMode::new(18));
        assert_eq!(None, TileMode::new(u32::MAX));
    }

    #[test]
    fn tile_mode_classes() {
        assert_eq!(TileModeClass::Linear, TileMode::LinearGeneral.class());
        assert_eq!(TileModeClass::Linear, TileMode::LinearAligned.class());
        assert_eq!(TileModeClass::Micro, TileMode::Tiled1dThin1.class());
        assert_eq!(TileModeClass::Micro, TileMode::Tiled1dThick.class());
        for raw in 4..18 {
            assert_eq!(TileModeClass::Macro, TileMode::new(raw).unwrap().class());
        }
    }

    #[test]
    fn tile_mode_thickness() {
        for raw in [3, 7, 11, 13, 15] {
            assert_eq!(4, TileMode::new(raw).unwrap().thickness());
        }
        for raw in [16, 17] {
            assert_eq!(8, TileMode::new(raw).unwrap().thickness());
        }
        for raw in [0, 1, 2, 4, 5, 6, 8, 9, 10, 12, 14] {
            assert_eq!(1, TileMode::new(raw).unwrap().thickness());
        }
    }

    #[test]
    fn tile_mode_aspect_ratios() {
        assert_eq!(2, TileMode::Tiled2dThin2.macro_tile_aspect_ratio());
        assert_eq!(2, TileMode::Tiled2bThin2.macro_tile_aspect_ratio());
        assert_eq!(4, TileMode::Tiled2dThin4.macro_tile_aspect_ratio());
        assert_eq!(4, TileMode::Tiled2bThin4.macro_tile_aspect_ratio());
        assert_eq!(1, TileMode::Tiled2dThin1.macro_tile_aspect_ratio());
        assert_eq!(1, TileMode::Tiled3bThick.macro_tile_aspect_ratio());
    }

    #[test]
    fn tile_mode_rotations() {
        assert_eq!(0, TileMode::LinearGeneral.rotation());
        assert_eq!(0, TileMode::Tiled1dThin1.rotation());
        assert_eq!(2, TileMode::Tiled2dThin1.rotation());
        assert_eq!(2, TileMode::Tiled2bThick.rotation());
        assert_eq!(1, TileMode::Tiled3dThin1.rotation());
        assert_eq!(1, TileMode::Tiled3bThick.rotation());
        assert_eq!(0, TileMode::Tiled2dXThick.rotation());
    }
}
