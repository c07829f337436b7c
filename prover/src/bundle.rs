//! JSON-friendly transport form for finished proofs.
//!
//! Proof bytes travel as hex and public signals as decimal strings to avoid
//! encoding ambiguities between components.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use zk_pipeline::calldata::Scheme;
use zk_pipeline::scheme::{ProveOutput, SchemeError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    pub scheme: Scheme,
    pub proof_hex: String,
    pub public_signals: Vec<String>,
}

impl ProofBundle {
    pub fn new(scheme: Scheme, output: &ProveOutput) -> Self {
        Self {
            scheme,
            proof_hex: hex::encode(&output.proof),
            public_signals: output.public_signals.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn to_output(&self) -> Result<ProveOutput, SchemeError> {
        let proof = hex::decode(&self.proof_hex)
            .map_err(|e| SchemeError::Encoding(format!("invalid proof hex: {e}")))?;

        let mut public_signals = Vec::with_capacity(self.public_signals.len());
        for s in &self.public_signals {
            let value = num_bigint::BigUint::from_str(s)
                .map_err(|e| SchemeError::Encoding(format!("invalid public signal: {e}")))?;
            public_signals.push(value);
        }

        Ok(ProveOutput { proof, public_signals })
    }
}
