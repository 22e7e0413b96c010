//! Coherence-limited gate error.
//!
//! Closed-form minimum error per gate (1 − average gate fidelity) imposed
//! by T1 relaxation and T2 dephasing over the gate duration. Nothing a
//! calibration can do brings the measured gate error below this bound.

use crate::error::{CalibError, CalibResult};

/// Minimum achievable gate error given T1/T2 decay during the gate.
///
/// `t1` and `t2` carry one entry per qubit; when `t2` is omitted,
/// `T2 = 2·T1` is assumed (the pure-relaxation limit). `gate_len` uses the
/// same time units as the decay constants.
///
/// Only 1- and 2-qubit gates are supported; the 2-qubit expression is the
/// closed-form average fidelity of two independently decaying qubits under
/// a depolarizing twirl, with fixed 1/15, 2/15 and 4/15 weights on the
/// decay exponentials.
pub fn coherence_limit(
    num_qubits: u32,
    t1: &[f64],
    t2: Option<&[f64]>,
    gate_len: f64,
) -> CalibResult<f64> {
    let t2: Vec<f64> = match t2 {
        Some(values) => values.to_vec(),
        None => t1.iter().map(|&t| 2.0 * t).collect(),
    };

    if t1.len() != num_qubits as usize {
        return Err(CalibError::LengthMismatch {
            what: "T1 values vs qubit count",
            expected: num_qubits as usize,
            got: t1.len(),
        });
    }
    if t2.len() != num_qubits as usize {
        return Err(CalibError::LengthMismatch {
            what: "T2 values vs qubit count",
            expected: num_qubits as usize,
            got: t2.len(),
        });
    }

    match num_qubits {
        1 => Ok(0.5
            * (1.0
                - 2.0 / 3.0 * (-gate_len / t2[0]).exp()
                - 1.0 / 3.0 * (-gate_len / t1[0]).exp())),
        2 => {
            let mut t1_factor = 0.0;
            let mut t2_factor = 0.0;

            for i in 0..2 {
                t1_factor += 1.0 / 15.0 * (-gate_len / t1[i]).exp();
                t2_factor += 2.0 / 15.0
                    * ((-gate_len / t2[i]).exp()
                        + (-gate_len * (1.0 / t2[i] + 1.0 / t1[1 - i])).exp());
            }

            t1_factor += 1.0 / 15.0 * (-gate_len * (1.0 / t1[0] + 1.0 / t1[1])).exp();
            t2_factor += 4.0 / 15.0 * (-gate_len * (1.0 / t2[0] + 1.0 / t2[1])).exp();

            Ok(0.75 * (1.0 - t1_factor - t2_factor))
        }
        n => Err(CalibError::UnsupportedQubitCount(n)),
    }
}
