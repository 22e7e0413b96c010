//! Raw per-experiment gate counting (deprecated).

use ndarray::Array3;
use rustc_hash::FxHashMap;
use tracing::warn;

use alsvin_ir::{CompiledJob, InstructionSource, QubitId};

/// Count basis gates in each experiment of a compiled job.
///
/// Returns an (experiments × qubits × basis gates) array where
/// `out[[i, q, g]]` is the number of instructions in experiment `i` named
/// `basis[g]` that target `qubits[q]`. A multi-qubit gate is counted once
/// in each tracked qubit's row it touches.
///
/// These are raw counts with no normalization; unlike
/// [`gates_per_clifford`](crate::gates_per_clifford) rates, they cannot be
/// compared against per-Clifford figures directly.
#[deprecated(note = "gate counting is integrated into `gates_per_clifford`")]
pub fn count_gates(job: &CompiledJob, basis: &[&str], qubits: &[QubitId]) -> Array3<u64> {
    warn!("`count_gates` is deprecated; gate counting is integrated into `gates_per_clifford`");

    let basis_slot: FxHashMap<&str, usize> =
        basis.iter().enumerate().map(|(i, &b)| (b, i)).collect();

    let mut counts = Array3::<u64>::zeros((job.experiments.len(), qubits.len(), basis.len()));

    for (i, experiment) in job.experiments.iter().enumerate() {
        for instr in experiment.instructions() {
            let Some(&g) = basis_slot.get(instr.name.as_str()) else {
                continue;
            };
            for (q, &qubit) in qubits.iter().enumerate() {
                if instr.targets(qubit) {
                    counts[[i, q, g]] += 1;
                }
            }
        }
    }

    counts
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use alsvin_ir::{Experiment, Instruction};

    #[test]
    fn test_two_qubit_gate_counted_on_each_qubit() {
        let job = CompiledJob::new([Experiment::new([Instruction::two_qubit(
            "cx",
            QubitId(0),
            QubitId(1),
        )])]);

        let counts = count_gates(&job, &["cx", "sx"], &[QubitId(0), QubitId(1)]);

        assert_eq!(counts[[0, 0, 0]], 1);
        assert_eq!(counts[[0, 1, 0]], 1);
        // One count per tracked qubit, nothing anywhere else.
        assert_eq!(counts.sum(), 2);
    }

    #[test]
    fn test_untracked_gates_and_qubits_ignored() {
        let job = CompiledJob::new([Experiment::new([
            Instruction::single_qubit("rz", QubitId(0)),
            Instruction::single_qubit("sx", QubitId(5)),
        ])]);

        let counts = count_gates(&job, &["sx"], &[QubitId(0)]);
        assert_eq!(counts.sum(), 0);
    }

    #[test]
    fn test_counts_per_experiment() {
        let one_sx = Experiment::new([Instruction::single_qubit("sx", QubitId(0))]);
        let two_sx = Experiment::new([
            Instruction::single_qubit("sx", QubitId(0)),
            Instruction::single_qubit("sx", QubitId(0)),
        ]);
        let job = CompiledJob::new([one_sx, two_sx]);

        let counts = count_gates(&job, &["sx"], &[QubitId(0)]);
        assert_eq!(counts[[0, 0, 0]], 1);
        assert_eq!(counts[[1, 0, 0]], 2);
    }
}
