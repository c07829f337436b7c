//! Modular arithmetic over a fixed prime modulus.
//!
//! A [`Field`] is constructed once (normally via [`Field::bn254`]) and passed
//! explicitly to whoever needs to compare or combine field elements. Elements
//! are plain [`BigUint`] values kept in `[0, modulus)`; every operation reduces
//! its operands first, so arithmetic is total and has no error path.

use crate::constants::BN254_SCALAR_MODULUS_DEC;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;
use std::str::FromStr;
use thiserror::Error;

/// The modulus handed to [`Field::new`] was not usable.
///
/// Arithmetic cannot proceed without a modulus greater than 1, so this is
/// fatal at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid modulus: must be an integer greater than 1")]
pub struct InvalidModulus;

/// Arithmetic over the integers modulo a fixed prime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    modulus: BigUint,
}

impl Field {
    /// Build a field for `modulus`, rejecting anything ≤ 1.
    pub fn new(modulus: BigUint) -> Result<Self, InvalidModulus> {
        if modulus <= BigUint::one() {
            return Err(InvalidModulus);
        }
        Ok(Self { modulus })
    }

    /// The BN254 scalar field every circuit in this pipeline works over.
    pub fn bn254() -> Self {
        let modulus =
            BigUint::from_str(BN254_SCALAR_MODULUS_DEC).expect("modulus constant parses");
        Self { modulus }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Reduce a non-negative integer into `[0, modulus)`.
    pub fn reduce(&self, x: &BigUint) -> BigUint {
        x % &self.modulus
    }

    /// Reduce a signed integer into `[0, modulus)` using floored modulo, so
    /// e.g. `-1` maps to `modulus - 1`.
    pub fn reduce_signed(&self, x: &BigInt) -> BigUint {
        let m = BigInt::from(self.modulus.clone());
        let mut r = x % &m;
        if r.sign() == Sign::Minus {
            r += &m;
        }
        r.to_biguint().expect("remainder is non-negative")
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) + self.reduce(b)) % &self.modulus
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) * self.reduce(b)) % &self.modulus
    }

    /// Equality of residues: true iff `a mod p == b mod p`.
    pub fn equals(&self, a: &BigUint, b: &BigUint) -> bool {
        self.reduce(a) == self.reduce(b)
    }

    /// [`Field::equals`] for signed operands.
    pub fn equals_signed(&self, a: &BigInt, b: &BigInt) -> bool {
        self.reduce_signed(a) == self.reduce_signed(b)
    }
}
