use core::slice;

///Splits slice into tuple as follows:
///
///- Reference to slice of concrete chunks by size N
///- Remainder slice whose size is < N
pub const fn slice_chunks<const N: usize>(input: &[u8]) -> (&[[u8; N]], &[u8]) {
    debug_assert!(N > 0);
    let input_len = input.len();

    let chunks_len = input_len / N;
    let split_at = chunks_len * N;
    let chunks = unsafe {
        //We know exact size N so cast it immediately
        slice::from_raw_parts(input.as_ptr() as _, chunks_len)
    };
    let rest = unsafe {
        slice::from_raw_parts(input.as_ptr().add(split_at), input_len - split_at)
    };

    (chunks, rest)
}
