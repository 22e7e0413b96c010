//! The "enumerable instruction source" capability.
//!
//! Calibration analysis only ever needs one thing from a circuit input:
//! the ordered list of (gate name, target qubits) instructions. Each
//! concrete representation adapts to that capability here, so consumers
//! never branch on concrete input types.

use serde::{Deserialize, Serialize};

use crate::circuit::CompiledCircuit;
use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::job::CompiledJob;

/// Anything that can enumerate its transpiled instructions.
pub trait InstructionSource {
    /// Instructions in program order.
    fn instructions(&self) -> &[Instruction];
}

/// One seed group's worth of transpiled input, in either the modern or
/// the legacy representation.
///
/// For an RB sweep this is the set of circuits produced from one random
/// seed, one circuit per tested sequence length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranspiledSource {
    /// Transpiled circuits, one per sequence length.
    Circuits(Vec<CompiledCircuit>),
    /// Legacy compiled-job payload. Deprecated; consumers warn on use.
    Job(CompiledJob),
}

impl TranspiledSource {
    /// Whether this source uses the deprecated compiled-job representation.
    pub fn is_legacy(&self) -> bool {
        matches!(self, TranspiledSource::Job(_))
    }

    /// Adapt every circuit in this source to the instruction-source
    /// capability.
    pub fn instruction_sources(&self) -> Vec<&dyn InstructionSource> {
        match self {
            TranspiledSource::Circuits(circuits) => circuits
                .iter()
                .map(|c| c as &dyn InstructionSource)
                .collect(),
            TranspiledSource::Job(job) => job
                .experiments
                .iter()
                .map(|e| e as &dyn InstructionSource)
                .collect(),
        }
    }

    /// Load a source from a dynamic JSON payload.
    ///
    /// Recognizes either a circuit array or a compiled-job object.
    /// Anything else is an input-contract violation: the caller handed
    /// us something we cannot enumerate instructions from.
    pub fn from_json(value: &serde_json::Value) -> IrResult<Self> {
        if value.is_array() {
            if let Ok(circuits) = serde_json::from_value::<Vec<CompiledCircuit>>(value.clone()) {
                return Ok(TranspiledSource::Circuits(circuits));
            }
        } else if value.get("experiments").is_some() {
            if let Ok(job) = serde_json::from_value::<CompiledJob>(value.clone()) {
                return Ok(TranspiledSource::Job(job));
            }
        }
        Err(IrError::UnrecognizedInput(format!(
            "payload is neither a transpiled circuit list nor a compiled job: {}",
            summarize(value)
        )))
    }
}

/// Short description of a JSON value for error messages.
fn summarize(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(map) => {
            let keys: Vec<_> = map.keys().map(String::as_str).collect();
            format!("object with keys [{}]", keys.join(", "))
        }
        serde_json::Value::Array(items) => format!("array of {} elements", items.len()),
        other => format!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::Experiment;
    use crate::qubit::QubitId;
    use serde_json::json;

    #[test]
    fn test_from_json_circuits() {
        let payload = json!([
            {"name": "rb_len1", "instructions": [{"name": "sx", "qubits": [0]}]},
        ]);
        let source = TranspiledSource::from_json(&payload).unwrap();
        assert!(!source.is_legacy());
        let lists = source.instruction_sources();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].instructions()[0].name, "sx");
    }

    #[test]
    fn test_from_json_job() {
        let payload = json!({
            "experiments": [{"instructions": [{"name": "cx", "qubits": [0, 1]}]}]
        });
        let source = TranspiledSource::from_json(&payload).unwrap();
        assert!(source.is_legacy());
    }

    #[test]
    fn test_from_json_unrecognized() {
        let err = TranspiledSource::from_json(&json!({"shots": 1024})).unwrap_err();
        assert!(matches!(err, IrError::UnrecognizedInput(_)));
    }

    #[test]
    fn test_instruction_sources_job() {
        let job = CompiledJob::new([Experiment::new([Instruction::single_qubit(
            "x",
            QubitId(2),
        )])]);
        let source = TranspiledSource::Job(job);
        let lists = source.instruction_sources();
        assert_eq!(lists[0].instructions()[0].qubits, vec![QubitId(2)]);
    }
}
