// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! The keyed MiMC permutation `E_k(x)`.

use crate::{field::pow_degree, MimcParameter};

/// Apply the MiMC permutation keyed by `key` on `x`:
///
/// ```text
/// state = x
/// for c in round_constants:
///     state = (state + key + c)^d
/// output = state + key
/// ```
///
/// With no round constants the output is `x + key`.
pub fn permute<F: MimcParameter>(x: F, key: F, round_constants: &[F]) -> F {
    let mut state = x;
    for rc in round_constants.iter() {
        add_key_rc_and_sbox(&mut state, key, *rc);
    }
    state + key
}

/// One round: `s -> (s + k + rc)^d`
#[inline(always)]
pub(crate) fn add_key_rc_and_sbox<F: MimcParameter>(val: &mut F, key: F, rc: F) {
    *val += key;
    *val += rc;
    *val = pow_degree(*val, F::DEGREE);
}
