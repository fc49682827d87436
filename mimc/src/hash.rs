// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Reusable MiMC hash instance and the feed-forward chaining over it.

use ark_std::vec::Vec;
use num_bigint::BigUint;

use crate::{
    constants::round_constants_with_seed,
    field::from_biguint,
    permutation::permute,
    MimcError, MimcParameter, ROUNDS,
};

/// A MiMC hash function bound to a round count and its round constants.
///
/// The instance is immutable; build it once and share it by reference across
/// as many hash calls (and threads) as needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mimc<F: MimcParameter> {
    rounds: usize,
    constants: Vec<F>,
}

impl<F: MimcParameter> Mimc<F> {
    /// Build an instance with `rounds` rounds and constants derived from
    /// [`MimcParameter::SEED`]. Zero rounds is allowed and reduces the
    /// permutation to its key feed-forward.
    ///
    /// With zero rounds `E_k(v) = v + k`, so `hash_with_key(k, &[v])` is
    /// `2·(k + v)`, not `v + 3·k`.
    pub fn new(rounds: usize) -> Self {
        Self::with_seed(F::SEED, rounds)
    }

    /// Build an instance whose round constants are derived from `seed`.
    #[tracing::instrument(skip_all, fields(rounds = rounds), level = "debug")]
    pub fn with_seed(seed: &[u8], rounds: usize) -> Self {
        Self {
            rounds,
            constants: round_constants_with_seed(seed, rounds),
        }
    }

    /// Number of rounds.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Round constants, one per round, the first one being zero.
    pub fn constants(&self) -> &[F] {
        &self.constants
    }

    /// The keyed permutation `E_key(x)` under this instance's constants.
    pub fn permute(&self, x: F, key: F) -> F {
        permute(x, key, &self.constants)
    }

    /// Hash one or more field elements into a single digest, starting the
    /// chain from a zero key.
    pub fn hash(&self, inputs: &[F]) -> Result<F, MimcError> {
        self.hash_with_key(F::zero(), inputs)
    }

    /// Hash one or more field elements starting the chain from `key`:
    /// `key <- key + v + E_key(v)` for each input `v` in order; the digest is
    /// the final `key`.
    pub fn hash_with_key(&self, key: F, inputs: &[F]) -> Result<F, MimcError> {
        if inputs.is_empty() {
            return Err(MimcError::EmptyInput);
        }
        let _span =
            tracing::trace_span!("mimc_chain", rounds = self.rounds, inputs = inputs.len())
                .entered();
        Ok(inputs
            .iter()
            .fold(key, |key, v| key + v + self.permute(*v, key)))
    }

    /// Same as [`Self::hash`] on raw integers, which are reduced mod p first.
    pub fn hash_biguints(&self, inputs: &[BigUint]) -> Result<F, MimcError> {
        let elems: Vec<F> = inputs.iter().map(from_biguint).collect();
        self.hash(&elems)
    }
}

impl<F: MimcParameter> Default for Mimc<F> {
    /// MiMC with the default [`ROUNDS`].
    fn default() -> Self {
        Self::new(ROUNDS)
    }
}

impl<F: MimcParameter> TryFrom<i64> for Mimc<F> {
    type Error = MimcError;

    fn try_from(rounds: i64) -> Result<Self, Self::Error> {
        let rounds = usize::try_from(rounds).map_err(|_| MimcError::InvalidRounds(rounds))?;
        Ok(Self::new(rounds))
    }
}
