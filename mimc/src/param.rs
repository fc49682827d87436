// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

use ark_ff::PrimeField;

use crate::field::modulus;

/// The default # of rounds of MiMC-7.
// ceil(log_7(p)) for the 254-bit BN254 scalar field, i.e. the number of
// rounds for which the algebraic degree 7^r of the permutation exceeds p.
// circomlib and iden3 use the same value.
pub const ROUNDS: usize = 91;

/// Seed from which the round constants are derived.
pub const SEED: &[u8] = b"mimc";

/// This trait defines constants that are used for MiMC hash functions.
pub trait MimcParameter: PrimeField {
    /// S-box degree `d` in `x -> (x + k + c)^d`.
    const DEGREE: u64;
    /// Seed of the Keccak-256 chain that produces the round constants.
    const SEED: &'static [u8] = SEED;

    /// Check that `x -> x^DEGREE` is a permutation of the field, i.e.
    /// `gcd(DEGREE, p - 1) == 1`, and that the S-box is non-linear.
    fn sanity_check() -> bool {
        let p_minus_one = modulus::<Self>() - 1u32;
        let rem = (p_minus_one % Self::DEGREE)
            .to_u64_digits()
            .first()
            .copied()
            .unwrap_or(0);
        Self::DEGREE >= 3 && gcd(Self::DEGREE, rem) == 1
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(feature = "bn254")]
impl MimcParameter for ark_bn254::Fr {
    // modulus 21888242871839275222246405745257275088548364400416034343698204186575808495617
    // modulus % 3 == 1, so cubing is not a permutation; modulus % 7 == 6
    const DEGREE: u64 = 7;
}

#[cfg(feature = "bls12-381")]
impl MimcParameter for ark_bls12_381::Fr {
    // modulus 52435875175126190479447740508185965837690552500527637822603658699938581184513
    // modulus % 3 == 1, modulus % 5 == 3
    const DEGREE: u64 = 5;
}
