// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! A MiMC CRHF implementation

use ark_std::{borrow::Borrow, marker::PhantomData};
use jf_crhf::CRHF;

use crate::{Mimc, MimcError, MimcParameter};

/// A MiMC-based CRHF with variable-length input and a single field element
/// output, chaining over `ROUNDS` rounds.
///
/// Each evaluation rebuilds the round constants; hold a [`Mimc`] instance
/// instead when hashing many inputs.
///
/// Example: `MimcCRHF<ark_bn254::Fr, 91>`
#[derive(Debug, Clone)]
pub struct MimcCRHF<F: MimcParameter, const ROUNDS: usize>(PhantomData<F>);

impl<F: MimcParameter, const ROUNDS: usize> CRHF for MimcCRHF<F, ROUNDS> {
    type Input = [F];
    type Output = F;
    type Error = MimcError;

    fn evaluate<T: Borrow<Self::Input>>(input: T) -> Result<Self::Output, Self::Error> {
        Mimc::<F>::new(ROUNDS).hash(input.borrow())
    }
}

/// MiMC-7 over the BN254 scalar field with the default round count.
#[cfg(feature = "bn254")]
pub type Mimc7CRHF = MimcCRHF<ark_bn254::Fr, { crate::ROUNDS }>;
