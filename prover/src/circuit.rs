//! R1CS circuits proving knowledge of factors of a public product.
//!
//! These are the Rust counterparts of the two-input and three-input multiplier
//! circuits the pipeline is exercised with. The single public input is the
//! product; the factors stay private.

use ark_bn254::Fr;
use ark_r1cs_std::alloc::AllocVar;
use ark_r1cs_std::eq::EqGadget;
use ark_r1cs_std::fields::fp::FpVar;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use num_bigint::BigUint;
use num_traits::One;
use zk_pipeline::field::Field;
use zk_pipeline::scheme::{SchemeError, SignalInputs};
use zk_pipeline::witness::Witness;

/// Input signal names in compiler-assigned order. A circuit of arity `n` reads
/// the first `n`.
pub const SIGNAL_NAMES: [&str; 3] = ["a", "b", "c"];

fn checked_arity(arity: usize) -> Result<usize, SchemeError> {
    if arity == 0 || arity > SIGNAL_NAMES.len() {
        return Err(SchemeError::Backend(format!("unsupported circuit arity {arity}")));
    }
    Ok(arity)
}

/// Circuit enforcing `factors[0] * factors[1] * ... == public_product`.
#[derive(Clone, Debug)]
pub struct MultiplierCircuit {
    /// Private factors.
    pub factors: Vec<Fr>,

    /// Public product output.
    pub public_product: Fr,
}

impl MultiplierCircuit {
    pub fn new(factors: Vec<Fr>) -> Self {
        let public_product = factors.iter().product();
        Self { factors, public_product }
    }

    /// Build a circuit of the given arity from named signal inputs.
    pub fn from_inputs(arity: usize, inputs: &SignalInputs) -> Result<Self, SchemeError> {
        let arity = checked_arity(arity)?;
        let mut factors = Vec::with_capacity(arity);
        for name in SIGNAL_NAMES.iter().take(arity) {
            let value = inputs
                .get(*name)
                .ok_or_else(|| SchemeError::MissingSignal((*name).to_string()))?;
            factors.push(Fr::from(value.clone()));
        }
        Ok(Self::new(factors))
    }
}

impl ConstraintSynthesizer<Fr> for MultiplierCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        if self.factors.is_empty() {
            return Err(SynthesisError::Unsatisfiable);
        }

        // The product is the only public input.
        let public_product = FpVar::<Fr>::new_input(cs.clone(), || Ok(self.public_product))?;

        let mut acc = FpVar::<Fr>::new_witness(cs.clone(), || Ok(self.factors[0]))?;
        for factor in &self.factors[1..] {
            let var = FpVar::<Fr>::new_witness(cs.clone(), || Ok(*factor))?;
            acc *= &var;
        }

        acc.enforce_equal(&public_product)?;
        Ok(())
    }
}

/// Evaluate the multiplier circuit's full wire assignment from named inputs.
///
/// Layout follows the circom convention the calldata pipeline assumes:
/// wire 0 is the constant `1`, wire 1 the public product, then one wire per
/// factor. MUST stay consistent with [`MultiplierCircuit`]'s constraints.
pub fn calculate_witness(
    field: &Field,
    arity: usize,
    inputs: &SignalInputs,
) -> Result<Witness, SchemeError> {
    let arity = checked_arity(arity)?;

    let mut factors = Vec::with_capacity(arity);
    for name in SIGNAL_NAMES.iter().take(arity) {
        let value = inputs
            .get(*name)
            .ok_or_else(|| SchemeError::MissingSignal((*name).to_string()))?;
        factors.push(field.reduce(value));
    }

    let mut product = BigUint::one();
    for factor in &factors {
        product = field.mul(&product, factor);
    }

    let mut wires = Vec::with_capacity(arity + 2);
    wires.push(BigUint::one());
    wires.push(product);
    wires.extend(factors);
    Ok(Witness::from(wires))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_relations::r1cs::ConstraintSystem;
    use std::collections::BTreeMap;

    fn inputs(pairs: &[(&str, u64)]) -> SignalInputs {
        pairs
            .iter()
            .map(|(name, v)| ((*name).to_string(), BigUint::from(*v)))
            .collect::<BTreeMap<_, _>>()
    }

    #[test]
    fn field_constant_matches_the_curve_order() {
        use ark_ff::PrimeField;
        assert_eq!(BigUint::from(Fr::MODULUS), *Field::bn254().modulus());
    }

    #[test]
    fn witness_follows_circom_layout() {
        let field = Field::bn254();
        let witness = calculate_witness(&field, 2, &inputs(&[("a", 2), ("b", 3)])).unwrap();
        assert_eq!(witness.values().len(), 4);
        assert_eq!(witness.get(0), Some(&BigUint::from(1u32)));
        assert_eq!(witness.get(1), Some(&BigUint::from(6u32)));
        assert_eq!(witness.get(2), Some(&BigUint::from(2u32)));
        assert_eq!(witness.get(3), Some(&BigUint::from(3u32)));
    }

    #[test]
    fn three_factor_product_lands_on_wire_one() {
        let field = Field::bn254();
        let witness =
            calculate_witness(&field, 3, &inputs(&[("a", 2), ("b", 3), ("c", 4)])).unwrap();
        assert_eq!(witness.get(1), Some(&BigUint::from(24u32)));
    }

    #[test]
    fn missing_signal_is_reported_by_name() {
        let field = Field::bn254();
        let err = calculate_witness(&field, 3, &inputs(&[("a", 2), ("b", 3)])).unwrap_err();
        assert_eq!(err, SchemeError::MissingSignal("c".to_string()));
    }

    #[test]
    fn unsupported_arity_is_rejected() {
        let field = Field::bn254();
        assert!(calculate_witness(&field, 0, &inputs(&[])).is_err());
        assert!(calculate_witness(&field, 4, &inputs(&[("a", 1)])).is_err());
    }

    #[test]
    fn constraints_hold_for_an_honest_product() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let circuit = MultiplierCircuit::new(vec![Fr::from(2u64), Fr::from(3u64), Fr::from(4u64)]);
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(cs.is_satisfied().unwrap());
    }

    #[test]
    fn constraints_reject_a_wrong_product() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let mut circuit = MultiplierCircuit::new(vec![Fr::from(2u64), Fr::from(3u64)]);
        circuit.public_product = Fr::from(7u64);
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(!cs.is_satisfied().unwrap());
    }
}
