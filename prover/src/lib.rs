//! Host-side proving harness for the pipeline core.
//!
//! This crate contains:
//! - The multiplier R1CS circuits and their circom-layout witness source.
//! - A Groth16 proving/verifying backend over BN254, with calldata export.
//! - A JSON-friendly transport bundle for finished proofs.
//! - The async runner that drives prove → export → transcode → decide in order,
//!   offloading the CPU-bound proving call to a blocking worker.

pub mod bundle;
pub mod circuit;
pub mod groth16;
pub mod pipeline;
