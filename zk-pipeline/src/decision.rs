//! The accept/reject contract of the verifying routine.

use crate::calldata::VerifierArgs;

/// Decision boundary of an external proof verifier.
///
/// Implementations must honor the observable contract of the verifying routine
/// they stand in for:
///
/// - `true` iff `args` encodes a proof that is cryptographically valid for the
///   verifier's fixed verifying key *and* `args.inputs` matches the public
///   signals the proof was generated for.
/// - `false` for syntactically well-formed but semantically invalid arguments.
///   The all-zero probe ([`VerifierArgs::is_degenerate`]) is the canonical
///   example: it is a legitimate "reject" outcome, never an error.
///
/// Malformed calldata never reaches this boundary — the transcoder surfaces it
/// as a [`TranscodeError`](crate::calldata::TranscodeError) first, so a `false`
/// here always means "proof rejected", not "pipeline failed".
pub trait Verifier {
    fn verify_proof(&self, args: &VerifierArgs) -> bool;
}

impl<V: Verifier + ?Sized> Verifier for &V {
    fn verify_proof(&self, args: &VerifierArgs) -> bool {
        (**self).verify_proof(args)
    }
}
