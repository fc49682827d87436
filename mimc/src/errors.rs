// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Error types.

// using `displaydoc` instead of `thiserror`, see
// https://github.com/dtolnay/thiserror/pull/64#issuecomment-735805334
// `thiserror` does not support #![no_std]

use displaydoc::Display;

/// Various error modes.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum MimcError {
    /// Invalid round count {0}, must be non-negative
    InvalidRounds(i64),
    /// MiMC chaining requires at least one input element
    EmptyInput,
}

impl ark_std::error::Error for MimcError {}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MimcError::InvalidRounds(-3).to_string(),
            "Invalid round count -3, must be non-negative"
        );
        assert_eq!(
            MimcError::EmptyInput.to_string(),
            "MiMC chaining requires at least one input element"
        );
    }
}
