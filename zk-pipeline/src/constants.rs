//! Crate-wide constants shared by the field layer and the calldata transcoder.

/// Order of the BN254 scalar field, in decimal.
///
/// Every circuit signal, public input and witness wire in this pipeline is an
/// integer reduced modulo this prime.
pub const BN254_SCALAR_MODULUS_DEC: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// Fixed calldata prefix: two tokens for the A point, four for the row-major
/// 2x2 B block, two for C. Everything after is one token per public signal.
pub const FIXED_CALLDATA_TOKENS: usize = 8;
