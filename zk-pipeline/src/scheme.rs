//! Capability trait for the external proving schemes.
//!
//! The pipeline drives its provers through one explicit interface instead of
//! assuming every backend happens to expose the same call shape: a scheme can
//! prove a circuit from named inputs, and can export a finished proof as the
//! calldata string [`Scheme::transcode`](crate::calldata::Scheme::transcode)
//! consumes.

use crate::calldata::Scheme;
use num_bigint::BigUint;
use std::collections::BTreeMap;
use thiserror::Error;

/// Named circuit inputs, e.g. `{"a": 2, "b": 3}`.
pub type SignalInputs = BTreeMap<String, BigUint>;

/// What a proving run hands back: the proof as an opaque blob (its layout is
/// the backend's business) plus the circuit's public signals in declaration
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProveOutput {
    pub proof: Vec<u8>,
    pub public_signals: Vec<BigUint>,
}

/// Failure inside an external proving backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("missing input signal: {0}")]
    MissingSignal(String),

    #[error("proving backend error: {0}")]
    Backend(String),

    #[error("proof encoding error: {0}")]
    Encoding(String),
}

/// A proving scheme the pipeline can drive end to end.
pub trait ProvingScheme {
    /// Which calldata provenance this scheme reports.
    fn kind(&self) -> Scheme;

    /// Evaluate the circuit on `inputs` and produce a proof over it.
    ///
    /// CPU-bound and potentially slow; callers that cannot block should run it
    /// on a worker (see the `prover` crate's pipeline runner).
    fn full_prove(&self, inputs: &SignalInputs) -> Result<ProveOutput, SchemeError>;

    /// Render a finished proof plus its public signals as the quoted,
    /// bracket-delimited decimal calldata string.
    fn export_calldata(&self, output: &ProveOutput) -> Result<String, SchemeError>;
}
