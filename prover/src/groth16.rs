//! Groth16 backend over BN254: setup, proving, calldata export, and the
//! verifier-side decision boundary.
//!
//! SECURITY NOTE (prototype): Groth16 needs a trusted setup producing a proving
//! key (PK) and verifying key (VK). Keys here are generated locally; a real
//! deployment would fix them via an MPC ceremony.

use crate::circuit::MultiplierCircuit;
use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, ProvingKey, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;
use zk_pipeline::calldata::{Scheme, VerifierArgs};
use zk_pipeline::decision::Verifier;
use zk_pipeline::scheme::{ProveOutput, ProvingScheme, SchemeError, SignalInputs};

/// A Groth16 prover for the multiplier circuit of a fixed arity.
pub struct Groth16Scheme {
    arity: usize,
    pk: ProvingKey<Bn254>,
    vk: VerifyingKey<Bn254>,
}

impl Groth16Scheme {
    /// Run the circuit-specific setup for an `arity`-input multiplier.
    ///
    /// Constraints depend only on the arity, so the setup circuit uses zeroed
    /// factors.
    pub fn setup(arity: usize, rng: &mut impl RngCore) -> Result<Self, SchemeError> {
        let circuit = MultiplierCircuit::from_inputs(arity, &zeroed_inputs(arity))?;

        let pk = Groth16::<Bn254>::generate_random_parameters_with_reduction(circuit, rng)
            .map_err(|e| SchemeError::Backend(format!("{e}")))?;

        let vk = pk.vk.clone();
        Ok(Self { arity, pk, vk })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Decision boundary bound to this scheme's verifying key.
    pub fn verifier(&self) -> Groth16Verifier {
        Groth16Verifier { pvk: PreparedVerifyingKey::from(self.vk.clone()) }
    }
}

fn zeroed_inputs(arity: usize) -> SignalInputs {
    crate::circuit::SIGNAL_NAMES
        .iter()
        .take(arity)
        .map(|name| ((*name).to_string(), BigUint::zero()))
        .collect()
}

impl ProvingScheme for Groth16Scheme {
    fn kind(&self) -> Scheme {
        Scheme::Groth16
    }

    fn full_prove(&self, inputs: &SignalInputs) -> Result<ProveOutput, SchemeError> {
        let circuit = MultiplierCircuit::from_inputs(self.arity, inputs)?;
        let public_signals = vec![BigUint::from(circuit.public_product)];

        let mut rng = rand::thread_rng();
        let proof =
            Groth16::<Bn254>::create_random_proof_with_reduction(circuit, &self.pk, &mut rng)
                .map_err(|e| SchemeError::Backend(format!("{e}")))?;

        let mut blob = Vec::new();
        proof
            .serialize_compressed(&mut blob)
            .map_err(|e| SchemeError::Encoding(format!("{e}")))?;

        Ok(ProveOutput { proof: blob, public_signals })
    }

    fn export_calldata(&self, output: &ProveOutput) -> Result<String, SchemeError> {
        let proof = Proof::<Bn254>::deserialize_compressed(&output.proof[..])
            .map_err(|e| SchemeError::Encoding(format!("{e}")))?;
        Ok(format_calldata(&proof, &output.public_signals))
    }
}

/// Render a proof plus public signals as the quoted, bracket-delimited decimal
/// string the transcoder consumes.
///
/// G2 coordinates follow the swapped `[[x.c1, x.c0], [y.c1, y.c0]]` convention
/// of on-chain verifiers; [`Groth16Verifier`] undoes the swap on the way back.
fn format_calldata(proof: &Proof<Bn254>, signals: &[BigUint]) -> String {
    let [ax, ay] = g1_coords(&proof.a);
    let [bx1, bx0, by1, by0] = g2_coords(&proof.b);
    let [cx, cy] = g1_coords(&proof.c);

    let inputs = signals
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "[\"{ax}\",\"{ay}\"],[[\"{bx1}\",\"{bx0}\"],[\"{by1}\",\"{by0}\"]],[\"{cx}\",\"{cy}\"],[{inputs}]"
    )
}

fn g1_coords(p: &G1Affine) -> [BigUint; 2] {
    if p.infinity {
        [BigUint::zero(), BigUint::zero()]
    } else {
        [p.x.into(), p.y.into()]
    }
}

fn g2_coords(p: &G2Affine) -> [BigUint; 4] {
    if p.infinity {
        [BigUint::zero(), BigUint::zero(), BigUint::zero(), BigUint::zero()]
    } else {
        [p.x.c1.into(), p.x.c0.into(), p.y.c1.into(), p.y.c0.into()]
    }
}

/// Pairing-based decision boundary for Groth16 proofs.
///
/// Off-curve or out-of-subgroup points (the all-zero probe included) are a
/// "reject", not an error: the arguments are well-formed, they just do not
/// encode a valid proof.
pub struct Groth16Verifier {
    pvk: PreparedVerifyingKey<Bn254>,
}

impl Verifier for Groth16Verifier {
    fn verify_proof(&self, args: &VerifierArgs) -> bool {
        let Some(proof) = proof_from_args(args) else {
            return false;
        };

        let inputs: Vec<Fr> = args.inputs.iter().map(|v| Fr::from(v.clone())).collect();

        match Groth16::<Bn254>::verify_proof(&self.pvk, &proof, &inputs) {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!(error = %e, "groth16 backend could not process arguments");
                false
            }
        }
    }
}

fn proof_from_args(args: &VerifierArgs) -> Option<Proof<Bn254>> {
    let a = g1_from_coords(&args.a)?;
    let b = g2_from_coords(&args.b)?;
    let c = g1_from_coords(&args.c)?;
    Some(Proof { a, b, c })
}

fn g1_from_coords(coords: &[BigUint; 2]) -> Option<G1Affine> {
    let p = G1Affine::new_unchecked(Fq::from(coords[0].clone()), Fq::from(coords[1].clone()));
    (p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()).then_some(p)
}

fn g2_from_coords(coords: &[[BigUint; 2]; 2]) -> Option<G2Affine> {
    // Calldata order is [c1, c0] per coordinate.
    let x = Fq2::new(Fq::from(coords[0][1].clone()), Fq::from(coords[0][0].clone()));
    let y = Fq2::new(Fq::from(coords[1][1].clone()), Fq::from(coords[1][0].clone()));
    let p = G2Affine::new_unchecked(x, y);
    (p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()).then_some(p)
}
