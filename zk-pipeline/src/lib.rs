//! Core of the arithmetic-circuit proving pipeline.
//!
//! This crate contains:
//! - Modular arithmetic over the BN254 scalar field (and any user-supplied modulus).
//! - A witness checker that asserts selected wires against expected values.
//! - A transcoder from exported proof calldata to the verifier's argument layout.
//! - The accept/reject contract of the verifying routine, and the capability
//!   trait the external proving schemes are driven through.
//!
//! The cryptographic backends themselves (circuit synthesis, proof construction,
//! pairing checks) live in the sibling `prover` crate.

pub mod calldata;
pub mod constants;
pub mod decision;
pub mod field;
pub mod scheme;
pub mod witness;
