//! Transcoding of exported proof calldata into the verifier's argument layout.
//!
//! Proving backends export a single bracket/quote-delimited string holding the
//! proof points followed by the public signals, e.g.
//!
//! ```text
//! ["11..","22.."],[["3..","4.."],["5..","6.."]],["7..","8.."],["6"]
//! ```
//!
//! The quotes, brackets and whitespace are redundant once token positions are
//! known, so transcoding strips them, splits on commas and regroups the decimal
//! tokens positionally into [`VerifierArgs`].

use crate::constants::FIXED_CALLDATA_TOKENS;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Which external prover produced a piece of calldata.
///
/// Both schemes export the same eight fixed token slots followed by one token
/// per public signal, so the variant does not change the transcoding rule —
/// only the provenance of the string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Groth16,
    Plonk,
}

/// The argument tuple the verifying routine consumes.
///
/// `a`/`c` are affine G1 coordinates, `b` a row-major 2x2 block of G2
/// coordinates, `inputs` one field element per public signal. Immutable once
/// transcoded; passed by value to the decision boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierArgs {
    pub a: [BigUint; 2],
    pub b: [[BigUint; 2]; 2],
    pub c: [BigUint; 2],
    pub inputs: Vec<BigUint>,
}

impl VerifierArgs {
    /// True when A, B and C are all zero — the placeholder shape used to probe
    /// a verifier for rejection. A valid input to the decision boundary, not a
    /// malformed one.
    pub fn is_degenerate(&self) -> bool {
        self.a
            .iter()
            .chain(self.c.iter())
            .chain(self.b.iter().flatten())
            .all(Zero::is_zero)
    }
}

/// Calldata that could not be transcoded. Always surfaced to the caller;
/// never coerced into a "verification false" outcome.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// Token at `position` (0-based, after normalization) is not a decimal
    /// unsigned integer.
    #[error("calldata token {position} is not a decimal unsigned integer")]
    BadToken { position: usize },

    /// Fewer than the eight tokens needed to populate A, B and C.
    #[error("calldata truncated: got {got} tokens, need at least 8")]
    Truncated { got: usize },
}

impl Scheme {
    /// Parse an exported calldata string into [`VerifierArgs`].
    ///
    /// Deterministic: identical input strings always yield identical args, and
    /// a well-formed string with `8 + k` tokens yields exactly `k` inputs.
    pub fn transcode(self, raw: &str) -> Result<VerifierArgs, TranscodeError> {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, '"' | '[' | ']') && !c.is_whitespace())
            .collect();

        let mut tokens = Vec::new();
        for (position, token) in normalized.split(',').enumerate() {
            let value = BigUint::from_str(token)
                .map_err(|_| TranscodeError::BadToken { position })?;
            tokens.push(value);
        }

        if tokens.len() < FIXED_CALLDATA_TOKENS {
            return Err(TranscodeError::Truncated { got: tokens.len() });
        }

        let inputs = tokens.split_off(FIXED_CALLDATA_TOKENS);
        let mut it = tokens.into_iter();
        let mut next = || it.next().expect("fixed prefix length checked");

        let a = [next(), next()];
        let b = [[next(), next()], [next(), next()]];
        let c = [next(), next()];

        Ok(VerifierArgs { a, b, c, inputs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    const SAMPLE: &str = concat!(
        "[\"10\",\"11\"],",
        "[[\"20\",\"21\"],[\"22\",\"23\"]],",
        "[\"30\",\"31\"],",
        "[\"6\",\"7\"]"
    );

    #[test]
    fn groups_tokens_positionally() {
        let args = Scheme::Groth16.transcode(SAMPLE).unwrap();
        assert_eq!(args.a, [n(10), n(11)]);
        assert_eq!(args.b, [[n(20), n(21)], [n(22), n(23)]]);
        assert_eq!(args.c, [n(30), n(31)]);
        assert_eq!(args.inputs, vec![n(6), n(7)]);
    }

    #[test]
    fn grouping_is_scheme_agnostic_and_deterministic() {
        let groth = Scheme::Groth16.transcode(SAMPLE).unwrap();
        let plonk = Scheme::Plonk.transcode(SAMPLE).unwrap();
        assert_eq!(groth, plonk);
        assert_eq!(groth, Scheme::Groth16.transcode(SAMPLE).unwrap());
    }

    #[test]
    fn tolerates_whitespace_and_bare_tokens() {
        let raw = " 1, 2 ,3,4,\n5,6,7,8 ";
        let args = Scheme::Groth16.transcode(raw).unwrap();
        assert_eq!(args.a, [n(1), n(2)]);
        assert_eq!(args.inputs, Vec::<BigUint>::new());
    }

    #[test]
    fn input_tail_length_matches_token_count() {
        for k in 0..4usize {
            let tokens: Vec<String> = (0..8 + k).map(|i| i.to_string()).collect();
            let raw = tokens.join(",");
            let args = Scheme::Plonk.transcode(&raw).unwrap();
            assert_eq!(args.inputs.len(), k);
        }
    }

    #[test]
    fn six_tokens_is_truncated() {
        let err = Scheme::Groth16.transcode("1,2,3,4,5,6").unwrap_err();
        assert_eq!(err, TranscodeError::Truncated { got: 6 });
    }

    #[test]
    fn bad_tokens_carry_their_position() {
        let err = Scheme::Groth16.transcode("1,2,0x3,4,5,6,7,8").unwrap_err();
        assert_eq!(err, TranscodeError::BadToken { position: 2 });

        let err = Scheme::Groth16.transcode("1,2,-3,4,5,6,7,8").unwrap_err();
        assert_eq!(err, TranscodeError::BadToken { position: 2 });

        // An empty string normalizes to a single empty token.
        let err = Scheme::Groth16.transcode("").unwrap_err();
        assert_eq!(err, TranscodeError::BadToken { position: 0 });
    }

    #[test]
    fn degenerate_args_are_detected() {
        let zeroes = "0,0,0,0,0,0,0,0,5";
        let args = Scheme::Groth16.transcode(zeroes).unwrap();
        assert!(args.is_degenerate());

        let args = Scheme::Groth16.transcode(SAMPLE).unwrap();
        assert!(!args.is_degenerate());
    }

    #[test]
    fn args_serialize_as_json() {
        let args = Scheme::Groth16.transcode(SAMPLE).unwrap();
        let json = serde_json::to_string(&args).unwrap();
        let back: VerifierArgs = serde_json::from_str(&json).unwrap();
        assert_eq!(args, back);
    }
}
