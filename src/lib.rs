//!Rust implementation of SpookyHash V2, Bob Jenkins' 128 bit non-cryptographic hash.
//!
//!Not suitable for cryptography, only for hash tables, checksums and fingerprints.
//!
//!## Features:
//!
//!- `spooky2` - Enables one-shot functions and streaming hasher. On by default.
//!- `const_spooky2` - Enables `const fn` one-shot variants. On by default.
//!- `std` - Enables `std::io::Write` implementation for the streaming hasher.

#![no_std]
#![warn(missing_docs)]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::style))]

#[cfg(feature = "std")]
extern crate std;

#[cfg(any(feature = "spooky2", feature = "const_spooky2"))]
mod utils;
#[cfg(any(feature = "spooky2", feature = "const_spooky2"))]
mod spooky2_common;

#[cfg(feature = "spooky2")]
pub mod spooky2;
#[cfg(feature = "const_spooky2")]
pub mod const_spooky2;
