//! Average basis-gate consumption per Clifford.
//!
//! Transpilation realizes each abstract Clifford as a variable number of
//! basis gates. Dividing the total gate count of an RB circuit sweep by the
//! total number of Cliffords executed (including the inverting gate appended
//! to every sequence) yields the expected basis gates consumed per logical
//! Clifford. That figure converts a measured error per Clifford into an
//! error per basis gate.

use std::collections::BTreeMap;

use tracing::warn;

use alsvin_ir::{QubitId, TranspiledSource};

use crate::error::{CalibError, CalibResult};
use crate::table::GateCountTable;

/// Average gate rates: qubit → basis-gate name → gates per Clifford.
pub type GateRates = BTreeMap<QubitId, BTreeMap<String, f64>>;

/// Compute the average number of basis gates per Clifford.
///
/// `sources` holds one entry per random seed; each entry contains one
/// transpiled circuit per tested sequence length, in the same order as
/// `clifford_lengths`. Gate names outside `basis` and qubits outside
/// `qubits` are ignored.
///
/// The normalization denominator is
/// `sources.len() × Σ(length + 1)`: every RB sequence ends with an
/// inverting gate that returns the qubits to their initial state, and that
/// extra Clifford is not part of the nominal lengths.
///
/// If all returned rates are zero, the circuits were likely not transpiled
/// into the given basis.
pub fn gates_per_clifford(
    sources: &[TranspiledSource],
    clifford_lengths: &[u64],
    basis: &[&str],
    qubits: &[QubitId],
) -> CalibResult<GateRates> {
    let mut table = GateCountTable::new(qubits, basis);

    for source in sources {
        if source.is_legacy() {
            warn!(
                "compiled-job input to `gates_per_clifford` is deprecated; \
                 submit transpiled circuit lists instead"
            );
        }
        let circuits = source.instruction_sources();
        if circuits.len() != clifford_lengths.len() {
            return Err(CalibError::LengthMismatch {
                what: "circuits per seed group vs clifford lengths",
                expected: clifford_lengths.len(),
                got: circuits.len(),
            });
        }
        for circuit in circuits {
            for instr in circuit.instructions() {
                for &qubit in &instr.qubits {
                    table.record(qubit, &instr.name);
                }
            }
        }
    }

    // + 1 per sequence for the appended inverting gate.
    let total_cliffords =
        sources.len() as f64 * clifford_lengths.iter().map(|&l| (l + 1) as f64).sum::<f64>();
    table.scale(1.0 / total_cliffords);

    Ok(table.rates())
}

/// [`gates_per_clifford`] over dynamic JSON payloads, one per seed group.
///
/// Fails with [`CalibError::UnrecognizedInput`] when a payload matches no
/// known circuit representation.
pub fn gates_per_clifford_json(
    payloads: &[serde_json::Value],
    clifford_lengths: &[u64],
    basis: &[&str],
    qubits: &[QubitId],
) -> CalibResult<GateRates> {
    let sources = payloads
        .iter()
        .map(TranspiledSource::from_json)
        .collect::<Result<Vec<_>, _>>()?;
    gates_per_clifford(&sources, clifford_lengths, basis, qubits)
}
