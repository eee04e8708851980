//! Random Test Data Generation
//!
//! Produces the integer and string arrays the benchmark sorts. Everything
//! draws from an explicit `Rng` handle passed by the caller, so the binary
//! can use `thread_rng` while tests seed a `StdRng` for reproducible data.

use rand::Rng;

/// Alphabet for random strings: lowercase ASCII only, giving plain
/// locale-independent byte ordering.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate `count` integers uniformly distributed in `[0, max)`.
pub fn random_ints<R: Rng>(rng: &mut R, count: usize, max: i64) -> Vec<i64> {
    (0..count).map(|_| rng.gen_range(0..max)).collect()
}

/// Generate `count` random lowercase strings with lengths uniform in
/// `[1, max_len]`.
pub fn random_strings<R: Rng>(rng: &mut R, count: usize, max_len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(rng, max_len)).collect()
}

fn random_string<R: Rng>(rng: &mut R, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
