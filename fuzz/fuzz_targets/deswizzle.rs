#![no_main]
use libfuzzer_sys::fuzz_target;

extern crate arbitrary;
use arbitrary::{Arbitrary, Result, Unstructured};

use gx2_swizzle::TileMode;

#[derive(Debug)]
struct Input {
    width: u32,
    height: u32,
    format: u32,
    tile_mode: TileMode,
    swizzle_value: u32,
    pitch: u32,
    data: Vec<u8>,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        // Formats with populated hardware records. Out of range addresses are
        // skipped per element, so mismatched parameters should never panic.
        let format = *u.choose(&[0x1, 0x8, 0x1a, 0x22, 0x31, 0x32, 0x33, 0x34, 0x35, 0x431])?;
        Ok(Input {
            width: u.int_in_range(0..=128)?,
            height: u.int_in_range(0..=128)?,
            format,
            tile_mode: u.arbitrary()?,
            swizzle_value: u.arbitrary()?,
            pitch: u.int_in_range(0..=256)?,
            data: u.arbitrary()?,
        })
    }
}

fuzz_target!(|input: Input| {
    let deswizzled = gx2_swizzle::deswizzle(
        input.width,
        input.height,
        input.format,
        input.tile_mode,
        input.swizzle_value,
        input.pitch,
        &input.data,
    );
    assert_eq!(input.data.len(), deswizzled.len());
});
