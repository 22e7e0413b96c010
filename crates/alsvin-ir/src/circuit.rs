//! Transpiled circuit container.

use serde::{Deserialize, Serialize};

use crate::instruction::Instruction;
use crate::qubit::QubitId;
use crate::source::InstructionSource;

/// A circuit after transpilation: an ordered list of basis-gate
/// instructions.
///
/// This is the modern input representation for calibration analysis.
/// It is append-only during construction and treated as immutable once
/// handed to a consumer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompiledCircuit {
    /// Name of the circuit (e.g. `rb_2q_seed0_len20`).
    pub name: String,
    /// Instructions in program order.
    pub instructions: Vec<Instruction>,
}

impl CompiledCircuit {
    /// Create an empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: vec![],
        }
    }

    /// Append an instruction.
    pub fn push(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    /// Append a single-qubit gate.
    pub fn gate(&mut self, name: impl Into<String>, qubit: QubitId) -> &mut Self {
        self.push(Instruction::single_qubit(name, qubit))
    }

    /// Append a two-qubit gate.
    pub fn gate2(&mut self, name: impl Into<String>, q1: QubitId, q2: QubitId) -> &mut Self {
        self.push(Instruction::two_qubit(name, q1, q2))
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit contains no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl InstructionSource for CompiledCircuit {
    fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}
