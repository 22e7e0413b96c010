//! Predicted two-qubit Clifford error from primitive-gate errors.
//!
//! Composes measured depolarizing error rates of the primitive gates used
//! to synthesize a two-qubit Clifford into a single predicted error per
//! Clifford (see arXiv:1712.06550). This is a model: it assumes every
//! primitive-gate error is purely depolarizing and that all Cliffords
//! follow a fixed decomposition pattern.

use serde::{Deserialize, Serialize};

use crate::error::{CalibError, CalibResult};

/// Which qubit a primitive gate acts on within the two-qubit Clifford.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateQubit {
    /// Single-qubit gate on the first qubit.
    Q0,
    /// Single-qubit gate on the second qubit.
    Q1,
    /// The entangling gate shared by both qubits.
    Both,
}

/// Predicted error of a synthesized two-qubit Clifford.
///
/// The three slices are parallel, one entry per primitive gate type:
/// how many times it appears per Clifford (fractional averages from
/// [`gates_per_clifford`](crate::gates_per_clifford) are fine), which
/// qubit it acts on, and its measured depolarizing error rate.
pub fn two_qubit_clifford_error(
    gate_counts: &[f64],
    gate_qubits: &[GateQubit],
    gate_errors: &[f64],
) -> CalibResult<f64> {
    if gate_qubits.len() != gate_counts.len() {
        return Err(CalibError::LengthMismatch {
            what: "gate qubits vs gate counts",
            expected: gate_counts.len(),
            got: gate_qubits.len(),
        });
    }
    if gate_errors.len() != gate_counts.len() {
        return Err(CalibError::LengthMismatch {
            what: "gate errors vs gate counts",
            expected: gate_counts.len(),
            got: gate_errors.len(),
        });
    }

    // Depolarizing survival parameters per qubit and for the 2Q gate.
    let mut alpha_1q = [1.0f64, 1.0];
    let mut alpha_2q = 1.0f64;

    for ((&count, &qubit), &err) in gate_counts.iter().zip(gate_qubits).zip(gate_errors) {
        match qubit {
            GateQubit::Both => alpha_2q *= (1.0 - 4.0 / 3.0 * err).powf(count),
            GateQubit::Q0 => alpha_1q[0] *= (1.0 - 2.0 * err).powf(count),
            GateQubit::Q1 => alpha_1q[1] *= (1.0 - 2.0 * err).powf(count),
        }
    }

    let alpha_2q_clifford =
        1.0 / 5.0 * (alpha_1q[0] + alpha_1q[1] + 3.0 * alpha_1q[0] * alpha_1q[1]) * alpha_2q;

    Ok((1.0 - alpha_2q_clifford) * 3.0 / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Typical 2Q Clifford decomposition: average counts of the 1Q basis
    // gates on each qubit plus the shared entangling gate.
    const COUNTS: [f64; 5] = [10.5, 3.2, 10.1, 3.3, 1.5];
    const QUBITS: [GateQubit; 5] = [
        GateQubit::Q0,
        GateQubit::Q0,
        GateQubit::Q1,
        GateQubit::Q1,
        GateQubit::Both,
    ];

    #[test]
    fn test_perfect_gates_give_perfect_clifford() {
        let err = two_qubit_clifford_error(&COUNTS, &QUBITS, &[0.0; 5]).unwrap();
        assert!(err.abs() < 1e-15, "got {err}");
    }

    #[test]
    fn test_only_two_qubit_gate_errors() {
        // With perfect 1Q gates the formula reduces to
        // 3/4 · (1 - (1 - 4/3·e)^n).
        let counts = [1.5];
        let errors = [0.01];
        let err =
            two_qubit_clifford_error(&counts, &[GateQubit::Both], &errors).unwrap();
        let expected = 3.0 / 4.0 * (1.0 - (1.0 - 4.0 / 3.0 * 0.01f64).powf(1.5));
        assert!((err - expected).abs() < 1e-15);
    }

    #[test]
    fn test_qubit_labels_length_mismatch() {
        let err = two_qubit_clifford_error(&COUNTS, &QUBITS[..4], &[0.001; 5]).unwrap_err();
        assert!(matches!(err, CalibError::LengthMismatch { .. }));
    }

    #[test]
    fn test_errors_length_mismatch() {
        let err = two_qubit_clifford_error(&COUNTS, &QUBITS, &[0.001; 4]).unwrap_err();
        assert!(matches!(err, CalibError::LengthMismatch { .. }));
    }

    proptest! {
        #[test]
        fn prop_error_monotone_in_each_gate_error(
            base in proptest::collection::vec(0.0..0.2f64, 5),
            index in 0usize..5,
            delta in 0.0..0.05f64,
        ) {
            let before = two_qubit_clifford_error(&COUNTS, &QUBITS, &base).unwrap();

            let mut bumped = base.clone();
            bumped[index] += delta;
            let after = two_qubit_clifford_error(&COUNTS, &QUBITS, &bumped).unwrap();

            prop_assert!(after >= before - 1e-12,
                "raising gate {} error by {} lowered the Clifford error: {} -> {}",
                index, delta, before, after);
        }
    }
}
