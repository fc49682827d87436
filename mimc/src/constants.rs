// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! MiMC round constants.
//!
//! Constants are derived from a Keccak-256 hash chain so that independent
//! implementations agree on them:
//!
//! ```text
//! c_0 = 0
//! h   = keccak256(seed)
//! for i in 1..rounds:
//!     h   = keccak256(h)
//!     c_i = int_be(h) mod p
//! ```
//!
//! Changing any step of this derivation changes every digest.

use ark_std::vec::Vec;
use sha3::{Digest, Keccak256};

use crate::{field::from_be_bytes, MimcParameter};

/// Round constants for `rounds` rounds derived from [`MimcParameter::SEED`].
pub fn round_constants<F: MimcParameter>(rounds: usize) -> Vec<F> {
    round_constants_with_seed(F::SEED, rounds)
}

/// Round constants for `rounds` rounds derived from a custom `seed`.
///
/// The sequence for `r` rounds is a prefix of the sequence for any `r' > r`.
#[tracing::instrument(skip_all, fields(rounds = rounds), level = "debug")]
pub fn round_constants_with_seed<F: MimcParameter>(seed: &[u8], rounds: usize) -> Vec<F> {
    let mut constants = Vec::with_capacity(rounds);
    if rounds == 0 {
        return constants;
    }
    // the first round has no constant
    constants.push(F::zero());

    let mut h: [u8; 32] = Keccak256::digest(seed).into();
    for _ in 1..rounds {
        h = Keccak256::digest(h).into();
        constants.push(from_be_bytes(&h));
    }
    constants
}
