// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Field helpers for MiMC.
//!
//! Addition and multiplication are the arkworks operators on `F`, which keep
//! every value reduced in `[0, p)`. This module adds the fixed-degree S-box
//! exponentiation and the conversions that bring raw integers into the field.

use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::{BigInt, BigUint, Sign};

/// Compute `base^degree` by square-and-multiply over the bits of `degree`.
///
/// `degree` is a small public constant, so this takes at most
/// `2 * floor(log2(degree))` multiplications, e.g. 4 for `degree = 7`.
#[inline(always)]
pub fn pow_degree<F: Field>(base: F, degree: u64) -> F {
    if degree == 0 {
        return F::one();
    }
    let mut acc = base;
    let bits = u64::BITS - degree.leading_zeros();
    for i in (0..bits - 1).rev() {
        acc.square_in_place();
        if (degree >> i) & 1 == 1 {
            acc *= base;
        }
    }
    acc
}

/// The field modulus `p` as an integer.
pub fn modulus<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_le(&F::MODULUS.to_bytes_le())
}

/// Reduce a non-negative integer of any size into the field.
pub fn from_biguint<F: PrimeField>(value: &BigUint) -> F {
    F::from_le_bytes_mod_order(&value.to_bytes_le())
}

/// Reduce a signed integer into the field; `-v` maps to `p - (v mod p)`.
pub fn from_bigint<F: PrimeField>(value: &BigInt) -> F {
    let (sign, magnitude) = value.to_bytes_le();
    let elem = F::from_le_bytes_mod_order(&magnitude);
    match sign {
        Sign::Minus => -elem,
        Sign::NoSign | Sign::Plus => elem,
    }
}

/// Interpret `bytes` as a big-endian integer and reduce it into the field.
pub fn from_be_bytes<F: PrimeField>(bytes: &[u8]) -> F {
    F::from_be_bytes_mod_order(bytes)
}

/// Canonical integer representative in `[0, p)` of a field element.
pub fn to_biguint<F: PrimeField>(elem: &F) -> BigUint {
    BigUint::from_bytes_le(&elem.into_bigint().to_bytes_le())
}

#[cfg(all(test, feature = "bn254", feature = "bls12-381"))]
mod tests {
    use super::*;
    use ark_bls12_381::Fr as Fr381;
    use ark_bn254::Fr as Fr254;
    use ark_std::{string::ToString, test_rng, One, UniformRand};

    #[test]
    fn test_pow_degree() {
        test_pow_degree_helper::<Fr254>();
        test_pow_degree_helper::<Fr381>();
    }

    fn test_pow_degree_helper<F: PrimeField>() {
        let mut rng = test_rng();
        for _ in 0..10 {
            let x = F::rand(&mut rng);
            for d in 0..=17u64 {
                assert_eq!(pow_degree(x, d), x.pow([d]), "degree {d}");
            }
        }
        assert_eq!(pow_degree(F::zero(), 7), F::zero());
        assert_eq!(pow_degree(F::from(2u64), 7), F::from(128u64));
        assert_eq!(pow_degree(-F::one(), 7), -F::one());
    }

    #[test]
    fn test_modulus() {
        assert_eq!(
            modulus::<Fr254>().to_string(),
            "21888242871839275222246405745257275088548364400416034343698204186575808495617"
        );
        assert_eq!(
            modulus::<Fr381>().to_string(),
            "52435875175126190479447740508185965837690552500527637822603658699938581184513"
        );
    }

    #[test]
    fn test_raw_integer_reduction() {
        test_raw_integer_reduction_helper::<Fr254>();
        test_raw_integer_reduction_helper::<Fr381>();
    }

    fn test_raw_integer_reduction_helper<F: PrimeField>() {
        let p = modulus::<F>();
        let five = F::from(5u64);

        assert_eq!(from_biguint::<F>(&BigUint::from(5u32)), five);
        assert_eq!(from_biguint::<F>(&(&p + 5u32)), five);
        assert_eq!(from_biguint::<F>(&(&p * 2u32 + 5u32)), five);
        assert_eq!(from_biguint::<F>(&(&p * 7u32)), F::zero());
        assert_eq!(from_biguint::<F>(&(&p - 1u32)), -F::one());

        assert_eq!(from_bigint::<F>(&BigInt::from(5)), five);
        assert_eq!(from_bigint::<F>(&BigInt::from(-1)), -F::one());
        assert_eq!(from_bigint::<F>(&BigInt::from(-5)), -five);
        assert_eq!(from_bigint::<F>(&BigInt::from(0)), F::zero());
        let minus_p_minus_five = -(BigInt::from(p.clone()) + 5i32);
        assert_eq!(from_bigint::<F>(&minus_p_minus_five), -five);
    }

    #[test]
    fn test_from_be_bytes() {
        // "hi" as big-endian bytes
        assert_eq!(from_be_bytes::<Fr254>(b"hi"), Fr254::from(0x6869u64));
        assert_eq!(from_be_bytes::<Fr254>(&[0x01, 0x00]), Fr254::from(256u64));
        // 32 bytes of 0xff exceed p and wrap
        let all_ones = [0xffu8; 32];
        let expected = from_biguint::<Fr254>(&BigUint::from_bytes_be(&all_ones));
        assert_eq!(from_be_bytes::<Fr254>(&all_ones), expected);
    }

    #[test]
    fn test_to_biguint_in_range() {
        let mut rng = test_rng();
        let p = modulus::<Fr254>();
        for _ in 0..20 {
            let x = Fr254::rand(&mut rng);
            let n = to_biguint(&x);
            assert!(n < p);
            assert_eq!(from_biguint::<Fr254>(&n), x);
        }
        assert_eq!(to_biguint(&-Fr254::one()), p - 1u32);
    }
}
