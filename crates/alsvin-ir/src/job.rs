//! Legacy compiled-job payload.
//!
//! Older toolchains deliver transpiled circuits bundled as a single "job"
//! object holding one experiment per circuit. The calibration functions
//! still accept this shape during the deprecation period; new callers
//! should submit [`CompiledCircuit`](crate::CompiledCircuit) lists instead.

use serde::{Deserialize, Serialize};

use crate::instruction::Instruction;
use crate::source::InstructionSource;

/// One experiment inside a compiled job: a flat instruction list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Experiment {
    /// Instructions in program order.
    pub instructions: Vec<Instruction>,
}

impl Experiment {
    /// Create an experiment from an instruction list.
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Self {
        Self {
            instructions: instructions.into_iter().collect(),
        }
    }
}

impl InstructionSource for Experiment {
    fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

/// A compiled job: the legacy batch representation of a circuit set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompiledJob {
    /// One experiment per compiled circuit.
    pub experiments: Vec<Experiment>,
}

impl CompiledJob {
    /// Create a job from a list of experiments.
    pub fn new(experiments: impl IntoIterator<Item = Experiment>) -> Self {
        Self {
            experiments: experiments.into_iter().collect(),
        }
    }
}
