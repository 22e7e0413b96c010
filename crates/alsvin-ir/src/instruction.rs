//! Transpiled basis-gate instructions.

use serde::{Deserialize, Serialize};

use crate::qubit::QubitId;

/// A single transpiled instruction: a hardware-native gate name and the
/// qubits it targets.
///
/// After transpilation every gate in a circuit is restricted to the
/// backend's basis set, so the name is an opaque basis-gate label
/// (`"sx"`, `"rz"`, `"cx"`, ...) rather than a structured gate enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Basis-gate name as reported by the transpiler.
    pub name: String,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create an instruction with an arbitrary number of target qubits.
    pub fn new(name: impl Into<String>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            name: name.into(),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit instruction.
    pub fn single_qubit(name: impl Into<String>, qubit: QubitId) -> Self {
        Self::new(name, [qubit])
    }

    /// Create a two-qubit instruction.
    pub fn two_qubit(name: impl Into<String>, q1: QubitId, q2: QubitId) -> Self {
        Self::new(name, [q1, q2])
    }

    /// Whether this instruction targets the given qubit.
    pub fn targets(&self, qubit: QubitId) -> bool {
        self.qubits.contains(&qubit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        let instr = Instruction::two_qubit("cx", QubitId(0), QubitId(3));
        assert!(instr.targets(QubitId(0)));
        assert!(instr.targets(QubitId(3)));
        assert!(!instr.targets(QubitId(1)));
    }
}
