//! Sequential pipeline runner: prove → export → transcode → decide.
//!
//! Proof generation is the dominant-cost, CPU-bound stage, so it runs on a
//! blocking worker; the remaining stages are cheap and run inline. Pipelines
//! for different proofs share no mutable state and may run concurrently.

use num_bigint::BigUint;
use std::sync::Arc;
use thiserror::Error;
use zk_pipeline::calldata::TranscodeError;
use zk_pipeline::decision::Verifier;
use zk_pipeline::scheme::{ProvingScheme, SchemeError, SignalInputs};

/// A pipeline stage failed before a verification decision could be made.
///
/// Deliberately separate from a `false` decision: a rejected proof is a normal
/// outcome, a pipeline error is not.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    #[error("proving worker failed: {0}")]
    Worker(String),
}

/// Result of a full pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOutcome {
    /// Public signals reported by the proving step, in declaration order.
    pub public_signals: Vec<BigUint>,

    /// The verifier's accept/reject decision for the transcoded arguments.
    pub accepted: bool,
}

/// Drive one proof through the whole pipeline, in order, with no stage skipped.
pub async fn run_proof_pipeline<S, V>(
    scheme: Arc<S>,
    verifier: &V,
    inputs: SignalInputs,
) -> Result<PipelineOutcome, PipelineError>
where
    S: ProvingScheme + Send + Sync + 'static,
    V: Verifier,
{
    let kind = scheme.kind();

    tracing::info!(scheme = ?kind, "generating proof");
    let prover = Arc::clone(&scheme);
    let output = tokio::task::spawn_blocking(move || prover.full_prove(&inputs))
        .await
        .map_err(|e| PipelineError::Worker(e.to_string()))??;

    let calldata = scheme.export_calldata(&output)?;
    let args = kind.transcode(&calldata)?;

    let accepted = verifier.verify_proof(&args);
    tracing::info!(scheme = ?kind, accepted, "verification decided");

    Ok(PipelineOutcome { public_signals: output.public_signals, accepted })
}
