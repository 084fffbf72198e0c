//!SpookyHash V2, 128 bit output variants with streaming support.
//!
//!Written using C++ implementation as reference.

use crate::spooky2_common::*;
use crate::utils::slice_chunks;

pub use crate::spooky2_common::SC_CONST;

///Short path for inputs under 192 bytes; 4 lane state.
fn short(input: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
    debug_assert!(input.len() < BUF_SIZE);

    let mut h = [seed1, seed2, SC_CONST, SC_CONST];

    let (chunks, mut tail) = slice_chunks::<32>(input);
    for chunk in chunks {
        h[2] = h[2].wrapping_add(read_u64(chunk, 0));
        h[3] = h[3].wrapping_add(read_u64(chunk, 8));
        h = short_mix(h);
        h[0] = h[0].wrapping_add(read_u64(chunk, 16));
        h[1] = h[1].wrapping_add(read_u64(chunk, 24));
    }

    if tail.len() >= 16 {
        h[2] = h[2].wrapping_add(read_u64(tail, 0));
        h[3] = h[3].wrapping_add(read_u64(tail, 8));
        h = short_mix(h);
        tail = &tail[16..];
    }

    //Total length goes into the top byte of the last lane.
    h[3] = h[3].wrapping_add((input.len() as u64) << 56);

    if tail.is_empty() {
        h[2] = h[2].wrapping_add(SC_CONST);
        h[3] = h[3].wrapping_add(SC_CONST);
    } else {
        let mut block = [0u8; 16];
        block[..tail.len()].copy_from_slice(tail);
        h[2] = h[2].wrapping_add(read_u64(&block, 0));
        h[3] = h[3].wrapping_add(read_u64(&block, 8));
    }

    let h = short_end(h);
    (h[0], h[1])
}

#[inline(always)]
const fn merge(h1: u64, h2: u64) -> u128 {
    h1 as u128 | (h2 as u128) << 64
}

///Returns 128 bit hash of provided input.
///
///First hash is the low half of the result, second hash is the high half.
pub fn spooky2_128(input: &[u8], seed1: u64, seed2: u64) -> u128 {
    if input.len() < BUF_SIZE {
        let (h1, h2) = short(input, seed1, seed2);
        return merge(h1, h2);
    }

    let mut h = long_init(seed1, seed2);

    let (blocks, tail) = slice_chunks::<BLOCK_SIZE>(input);
    for block in blocks {
        h = mix(h, block);
    }

    //Final partial block is zero padded, with its byte count as last byte.
    let mut block = [0u8; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    block[BLOCK_SIZE - 1] = tail.len() as u8;

    let h = end(h, &block);
    merge(h[0], h[1])
}

///Returns 64 bit hash of provided input.
pub fn spooky2_64(input: &[u8], seed: u64) -> u64 {
    spooky2_128(input, seed, seed) as u64
}

///Returns 32 bit hash of provided input.
pub fn spooky2_32(input: &[u8], seed: u32) -> u32 {
    spooky2_64(input, seed as u64) as u32
}

///SpookyHash V2 streaming algorithm.
///
///Yields the same digest as the one-shot functions for the same byte stream,
///no matter how it was chunked. Digest computation does not disturb the
///state, so it can be taken at any point and updates may continue after it.
///
///The hasher is a plain value; cloning snapshots a mid-stream hasher and the
///clone continues independently.
#[derive(Clone)]
pub struct Spooky2 {
    state: [u64; NUM_VARS],
    buf: [u8; BUF_SIZE],
    length: u64,
    remainder: usize,
}

impl Spooky2 {
    ///Creates new state with provided seeds.
    pub const fn new(seed1: u64, seed2: u64) -> Self {
        let mut state = [0u64; NUM_VARS];
        state[0] = seed1;
        state[1] = seed2;

        Self {
            state,
            buf: [0u8; BUF_SIZE],
            length: 0,
            remainder: 0,
        }
    }

    ///Adds chunk of data to hash.
    pub fn update(&mut self, mut input: &[u8]) {
        if self.remainder + input.len() < BUF_SIZE {
            self.buf[self.remainder..self.remainder + input.len()].copy_from_slice(input);
            self.remainder += input.len();
            self.length = self.length.wrapping_add(input.len() as u64);
            return;
        }

        //Until the buffer first fills, state holds only the seeds.
        let mut h = match self.length < BUF_SIZE as u64 {
            true => long_init(self.state[0], self.state[1]),
            false => self.state,
        };
        self.length = self.length.wrapping_add(input.len() as u64);

        if self.remainder > 0 {
            let prefix = BUF_SIZE - self.remainder;
            self.buf[self.remainder..].copy_from_slice(&input[..prefix]);

            let (blocks, _) = slice_chunks::<BLOCK_SIZE>(&self.buf);
            h = mix(h, &blocks[0]);
            h = mix(h, &blocks[1]);

            input = &input[prefix..];
        }

        let (blocks, tail) = slice_chunks::<BLOCK_SIZE>(input);
        for block in blocks {
            h = mix(h, block);
        }

        self.buf[..tail.len()].copy_from_slice(tail);
        self.remainder = tail.len();
        self.state = h;
    }

    ///Computes 128 bit hash of everything absorbed since construction or last reset.
    ///
    ///Finalization runs on a copy of the state, hence it can be called
    ///repeatedly and interleaved with further updates.
    pub fn digest128(&self) -> u128 {
        if self.length < BUF_SIZE as u64 {
            let (h1, h2) = short(&self.buf[..self.length as usize], self.state[0], self.state[1]);
            return merge(h1, h2);
        }

        let mut h = self.state;
        let mut block = [0u8; BLOCK_SIZE];
        let mut remainder = self.remainder;

        if remainder >= BLOCK_SIZE {
            let (blocks, _) = slice_chunks::<BLOCK_SIZE>(&self.buf);
            h = mix(h, &blocks[0]);
            remainder -= BLOCK_SIZE;
            block[..remainder].copy_from_slice(&self.buf[BLOCK_SIZE..BLOCK_SIZE + remainder]);
        } else {
            block[..remainder].copy_from_slice(&self.buf[..remainder]);
        }
        block[BLOCK_SIZE - 1] = remainder as u8;

        let h = end(h, &block);
        merge(h[0], h[1])
    }

    ///Computes 64 bit hash of everything absorbed since construction or last reset.
    #[inline]
    pub fn digest(&self) -> u64 {
        self.digest128() as u64
    }

    ///Resets state with provided seeds.
    #[inline]
    pub fn reset(&mut self, seed1: u64, seed2: u64) {
        self.state[0] = seed1;
        self.state[1] = seed2;
        self.length = 0;
        self.remainder = 0;
    }
}

impl core::hash::Hasher for Spooky2 {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.digest()
    }

    #[inline(always)]
    fn write(&mut self, input: &[u8]) {
        self.update(input)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Spooky2 {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Default for Spooky2 {
    #[inline(always)]
    fn default() -> Self {
        Spooky2Builder::default().build()
    }
}

#[derive(Clone, Copy)]
///Hash builder for `Spooky2`
pub struct Spooky2Builder {
    seed1: u64,
    seed2: u64,
}

impl Spooky2Builder {
    #[inline(always)]
    ///Creates builder with provided seeds.
    pub const fn new(seed1: u64, seed2: u64) -> Self {
        Self {
            seed1,
            seed2,
        }
    }

    #[inline(always)]
    ///Creates hasher.
    pub const fn build(self) -> Spooky2 {
        Spooky2::new(self.seed1, self.seed2)
    }
}

impl Default for Spooky2Builder {
    #[inline(always)]
    fn default() -> Self {
        Self::new(SC_CONST, SC_CONST)
    }
}

impl core::hash::BuildHasher for Spooky2Builder {
    type Hasher = Spooky2;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        self.build()
    }
}
