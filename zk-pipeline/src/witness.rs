//! Witness container and the expectation checker used to assert circuit
//! semantics before a proof is ever produced.

use crate::field::Field;
use num_bigint::BigUint;
use thiserror::Error;

/// Full wire assignment produced by a circuit evaluation.
///
/// Wire 0 is the constant `1`; later indices are signals in compiler-assigned
/// order. The assignment is read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness(Vec<BigUint>);

impl Witness {
    pub fn get(&self, index: usize) -> Option<&BigUint> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[BigUint] {
        &self.0
    }
}

impl From<Vec<BigUint>> for Witness {
    fn from(values: Vec<BigUint>) -> Self {
        Self(values)
    }
}

/// A witness wire did not hold the expected field element.
///
/// `actual` is `None` when `index` is past the end of the witness.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("witness check failed at index {index}: expected {expected}, actual {actual:?}")]
pub struct MismatchError {
    pub index: usize,
    pub expected: BigUint,
    pub actual: Option<BigUint>,
}

/// Check every `(index, expected)` pair against the witness.
///
/// Comparison is residue equality in `field`, so expectations may be given
/// unreduced. Fails on the first violated expectation; succeeds with no side
/// effects otherwise.
pub fn check_witness(
    field: &Field,
    witness: &Witness,
    expectations: &[(usize, BigUint)],
) -> Result<(), MismatchError> {
    for (index, expected) in expectations {
        match witness.get(*index) {
            Some(actual) if field.equals(actual, expected) => {}
            other => {
                return Err(MismatchError {
                    index: *index,
                    expected: expected.clone(),
                    actual: other.cloned(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wit(values: &[u32]) -> Witness {
        Witness::from(values.iter().map(|v| BigUint::from(*v)).collect::<Vec<_>>())
    }

    #[test]
    fn accepts_a_multiplier_witness() {
        let field = Field::bn254();
        // [constant wire, product, a, b]
        let witness = wit(&[1, 6, 2, 3]);
        let expectations = vec![(0, BigUint::from(1u32)), (1, BigUint::from(6u32))];
        assert!(check_witness(&field, &witness, &expectations).is_ok());
    }

    #[test]
    fn reports_the_mismatching_wire() {
        let field = Field::bn254();
        let witness = wit(&[1, 7, 2, 3]);
        let err = check_witness(&field, &witness, &[(1, BigUint::from(6u32))]).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.expected, BigUint::from(6u32));
        assert_eq!(err.actual, Some(BigUint::from(7u32)));
    }

    #[test]
    fn out_of_range_index_fails_with_no_actual() {
        let field = Field::bn254();
        let witness = wit(&[1, 6]);
        let err = check_witness(&field, &witness, &[(5, BigUint::from(1u32))]).unwrap_err();
        assert_eq!(err.index, 5);
        assert_eq!(err.actual, None);
    }

    #[test]
    fn expectations_may_be_unreduced() {
        let field = Field::bn254();
        let witness = wit(&[1, 6]);
        let expected = field.modulus() + BigUint::from(6u32);
        assert!(check_witness(&field, &witness, &[(1, expected)]).is_ok());
    }
}
