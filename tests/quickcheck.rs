extern crate quickcheck;
#[allow(unused_imports)]
#[macro_use]
extern crate quickcheck_macros;

#[cfg(feature = "spooky2")]
mod tests {
    use quickcheck::TestResult;
    use std::hash::Hasher;
    use std::num::{NonZeroU8, NonZeroUsize};

    use spookyhash_rust::spooky2::{spooky2_128, spooky2_32, spooky2_64, Spooky2};

    // In practice 2048 bytes of data should cover all cases for the streaming hasher.
    // So we use a limit 10 times that to cover more chunking variations.
    const MAX_STREAM_SIZE: usize = 2048 * 10;

    fn expand(xs: Vec<u8>, times: NonZeroU8, additional: u8) -> Vec<u8> {
        // the vecs produced by quickcheck are perhaps a bit small by default.
        // additional should add some noise to avoid only getting nice even lengths.
        let target_size = (xs.len() * times.get() as usize + additional as usize) % MAX_STREAM_SIZE;
        xs.into_iter().cycle().take(target_size).collect()
    }

    #[quickcheck]
    fn spooky2_chunked_matches_buffered(
        chunk_size: NonZeroUsize,
        xs: Vec<u8>,
        times: NonZeroU8,
        additional: u8,
    ) -> TestResult {
        // additional argument doubles down as the hasher seed
        let seed = additional as u64;
        let xs = expand(xs, times, additional);

        // write all at once
        let mut h0 = Spooky2::new(seed, seed);
        h0.update(&xs);

        // write in chunks
        let mut h1 = Spooky2::new(seed, seed);
        for chunk in xs.chunks(chunk_size.get()) {
            h1.update(chunk);
        }

        let one_shot_result = spooky2_128(&xs, seed, seed);

        assert_eq!(h0.digest128(), one_shot_result);
        assert_eq!(h1.digest128(), one_shot_result);

        // Hasher::finish returns the low half
        let mut h2 = Spooky2::new(seed, seed);
        h2.write(&xs);
        assert_eq!(h2.finish(), one_shot_result as u64);

        TestResult::passed()
    }

    #[quickcheck]
    fn spooky2_digest_does_not_disturb_stream(
        xs: Vec<u8>,
        ys: Vec<u8>,
        times: NonZeroU8,
        additional: u8,
    ) -> TestResult {
        let seed = additional as u64;
        let xs = expand(xs, times, additional);

        let mut hasher = Spooky2::new(seed, seed);
        hasher.update(&xs);
        let first = hasher.digest128();
        assert_eq!(first, hasher.digest128());
        assert_eq!(first, spooky2_128(&xs, seed, seed));

        hasher.update(&ys);
        let mut whole = xs;
        whole.extend_from_slice(&ys);
        assert_eq!(hasher.digest128(), spooky2_128(&whole, seed, seed));

        TestResult::passed()
    }

    #[quickcheck]
    fn spooky2_reset_restarts_stream(xs: Vec<u8>, seed1: u64, seed2: u64) -> TestResult {
        let mut hasher = Spooky2::new(seed1, seed2);
        hasher.update(&xs);
        hasher.reset(seed1, seed2);
        hasher.update(&xs);
        assert_eq!(hasher.digest128(), spooky2_128(&xs, seed1, seed2));

        TestResult::passed()
    }

    #[quickcheck]
    fn spooky2_width_laws(xs: Vec<u8>, times: NonZeroU8, additional: u8) -> TestResult {
        let seed = additional as u64;
        let xs = expand(xs, times, additional);

        assert_eq!(spooky2_64(&xs, seed), spooky2_128(&xs, seed, seed) as u64);
        assert_eq!(spooky2_32(&xs, seed as u32), spooky2_64(&xs, (seed as u32) as u64) as u32);

        TestResult::passed()
    }

    #[cfg(feature = "const_spooky2")]
    #[quickcheck]
    fn const_spooky2_matches_runtime(
        xs: Vec<u8>,
        times: NonZeroU8,
        additional: u8,
        seed1: u64,
        seed2: u64,
    ) -> TestResult {
        let xs = expand(xs, times, additional);

        assert_eq!(
            spookyhash_rust::const_spooky2::spooky2_128(&xs, seed1, seed2),
            spooky2_128(&xs, seed1, seed2)
        );

        TestResult::passed()
    }
}
