#![no_main]
use libfuzzer_sys::fuzz_target;

extern crate arbitrary;
use arbitrary::{Arbitrary, Result, Unstructured};

extern crate rand;
use rand::{rngs::StdRng, Rng, SeedableRng};

use gx2_swizzle::TileMode;

// GX2_SURFACE_FORMAT_UNORM_R8_G8_B8_A8
const FORMAT_RGBA8: u32 = 0x1a;

#[derive(Debug)]
struct Input {
    width: u32,
    height: u32,
    tile_mode: TileMode,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        // Dimensions aligned to whole macro tiles with pitch equal to width
        // make the transform a bijection over the buffer, so the round trip
        // must be exact for every tiling family.
        let tile_mode = *u.choose(&[
            TileMode::LinearGeneral,
            TileMode::LinearAligned,
            TileMode::Tiled1dThin1,
            TileMode::Tiled2dThin1,
        ])?;
        Ok(Input {
            width: u.int_in_range(1..=8u32)? * 32,
            height: u.int_in_range(1..=8u32)? * 16,
            tile_mode,
        })
    }
}

fuzz_target!(|input: Input| {
    let seed = [13u8; 32];
    let mut rng: StdRng = SeedableRng::from_seed(seed);
    let linear: Vec<_> = (0..input.width * input.height * 4)
        .map(|_| rng.gen_range::<u8, _>(0..=255))
        .collect();

    let swizzled = gx2_swizzle::swizzle(
        input.width,
        input.height,
        FORMAT_RGBA8,
        input.tile_mode,
        0,
        input.width,
        &linear,
    );

    let new_linear = gx2_swizzle::deswizzle(
        input.width,
        input.height,
        FORMAT_RGBA8,
        input.tile_mode,
        0,
        input.width,
        &swizzled,
    );

    if linear != new_linear {
        panic!("Swizzle deswizzle is not 1:1");
    }
});
