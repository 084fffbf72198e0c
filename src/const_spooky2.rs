//!Const eval friendly version of SpookyHash V2.
//!
//!Produces digests identical to the `spooky2` module.

use crate::spooky2_common::*;
use crate::utils::slice_chunks;

const fn short(input: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
    let mut h = [seed1, seed2, SC_CONST, SC_CONST];

    let (chunks, tail) = slice_chunks::<32>(input);

    let mut idx = 0;
    while idx < chunks.len() {
        let chunk = &chunks[idx];
        h[2] = h[2].wrapping_add(read_u64(chunk, 0));
        h[3] = h[3].wrapping_add(read_u64(chunk, 8));
        h = short_mix(h);
        h[0] = h[0].wrapping_add(read_u64(chunk, 16));
        h[1] = h[1].wrapping_add(read_u64(chunk, 24));
        idx += 1;
    }

    let mut offset = 0;
    if tail.len() >= 16 {
        h[2] = h[2].wrapping_add(read_u64(tail, 0));
        h[3] = h[3].wrapping_add(read_u64(tail, 8));
        h = short_mix(h);
        offset = 16;
    }

    h[3] = h[3].wrapping_add((input.len() as u64) << 56);

    if offset == tail.len() {
        h[2] = h[2].wrapping_add(SC_CONST);
        h[3] = h[3].wrapping_add(SC_CONST);
    } else {
        let mut block = [0u8; 16];
        let mut idx = 0;
        while idx < tail.len() - offset {
            block[idx] = tail[offset + idx];
            idx += 1;
        }
        h[2] = h[2].wrapping_add(read_u64(&block, 0));
        h[3] = h[3].wrapping_add(read_u64(&block, 8));
    }

    let h = short_end(h);
    (h[0], h[1])
}

///Returns 128 bit hash of provided input.
///
///First hash is the low half of the result, second hash is the high half.
pub const fn spooky2_128(input: &[u8], seed1: u64, seed2: u64) -> u128 {
    if input.len() < BUF_SIZE {
        let (h1, h2) = short(input, seed1, seed2);
        return h1 as u128 | (h2 as u128) << 64;
    }

    let mut h = long_init(seed1, seed2);

    let (blocks, tail) = slice_chunks::<BLOCK_SIZE>(input);

    let mut idx = 0;
    while idx < blocks.len() {
        h = mix(h, &blocks[idx]);
        idx += 1;
    }

    let mut block = [0u8; BLOCK_SIZE];
    let mut idx = 0;
    while idx < tail.len() {
        block[idx] = tail[idx];
        idx += 1;
    }
    block[BLOCK_SIZE - 1] = tail.len() as u8;

    let h = end(h, &block);
    h[0] as u128 | (h[1] as u128) << 64
}

///Returns 64 bit hash of provided input.
pub const fn spooky2_64(input: &[u8], seed: u64) -> u64 {
    spooky2_128(input, seed, seed) as u64
}

///Returns 32 bit hash of provided input.
pub const fn spooky2_32(input: &[u8], seed: u32) -> u32 {
    spooky2_64(input, seed as u64) as u32
}
