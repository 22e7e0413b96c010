//! Fixed-shape gate count table.
//!
//! The accumulation target for gate counting: a (qubit × basis gate) table
//! whose shape is fixed at construction. Every tracked cell exists from the
//! start at zero, and recording against an untracked qubit or gate name is
//! a silent no-op. This makes the "default zero, ignore unknown keys"
//! policy an explicit rule rather than a side effect of map lookups.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

use alsvin_ir::QubitId;

/// Accumulation table over a fixed qubit set and basis-gate set.
#[derive(Debug, Clone, Serialize)]
pub struct GateCountTable {
    qubits: Vec<QubitId>,
    basis: Vec<String>,
    #[serde(skip)]
    qubit_slot: FxHashMap<QubitId, usize>,
    #[serde(skip)]
    basis_slot: FxHashMap<String, usize>,
    /// Row-major (qubit, gate) cells.
    cells: Vec<f64>,
}

impl GateCountTable {
    /// Create a table with every cell initialized to zero.
    pub fn new(qubits: &[QubitId], basis: &[&str]) -> Self {
        let qubit_slot = qubits.iter().enumerate().map(|(i, &q)| (q, i)).collect();
        let basis_slot = basis
            .iter()
            .enumerate()
            .map(|(i, &b)| (b.to_string(), i))
            .collect();
        Self {
            qubits: qubits.to_vec(),
            basis: basis.iter().map(|b| b.to_string()).collect(),
            qubit_slot,
            basis_slot,
            cells: vec![0.0; qubits.len() * basis.len()],
        }
    }

    /// Record one occurrence of `name` acting on `qubit`.
    ///
    /// Untracked qubits and gate names are ignored: input circuits
    /// routinely contain instructions outside the tracked basis.
    pub fn record(&mut self, qubit: QubitId, name: &str) {
        let (Some(&q), Some(&g)) = (self.qubit_slot.get(&qubit), self.basis_slot.get(name))
        else {
            return;
        };
        self.cells[q * self.basis.len() + g] += 1.0;
    }

    /// Current value of the (qubit, gate) cell, or `None` if untracked.
    pub fn get(&self, qubit: QubitId, name: &str) -> Option<f64> {
        let q = self.qubit_slot.get(&qubit)?;
        let g = self.basis_slot.get(name)?;
        Some(self.cells[q * self.basis.len() + g])
    }

    /// Multiply every cell by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for cell in &mut self.cells {
            *cell *= factor;
        }
    }

    /// Export as nested qubit → gate name → value maps, in deterministic
    /// key order. Every tracked (qubit, gate) pair is present.
    pub fn rates(&self) -> BTreeMap<QubitId, BTreeMap<String, f64>> {
        self.qubits
            .iter()
            .enumerate()
            .map(|(q, &qubit)| {
                let row = self
                    .basis
                    .iter()
                    .enumerate()
                    .map(|(g, base)| (base.clone(), self.cells[q * self.basis.len() + g]))
                    .collect();
                (qubit, row)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_default_to_zero() {
        let table = GateCountTable::new(&[QubitId(0), QubitId(1)], &["sx", "cx"]);
        let rates = table.rates();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[&QubitId(0)]["sx"], 0.0);
        assert_eq!(rates[&QubitId(1)]["cx"], 0.0);
    }

    #[test]
    fn test_record_and_scale() {
        let mut table = GateCountTable::new(&[QubitId(0)], &["sx"]);
        table.record(QubitId(0), "sx");
        table.record(QubitId(0), "sx");
        table.scale(0.5);
        assert_eq!(table.get(QubitId(0), "sx"), Some(1.0));
    }

    #[test]
    fn test_record_untracked_is_noop() {
        let mut table = GateCountTable::new(&[QubitId(0)], &["sx"]);
        table.record(QubitId(7), "sx");
        table.record(QubitId(0), "rz");
        assert_eq!(table.get(QubitId(0), "sx"), Some(0.0));
        assert_eq!(table.get(QubitId(7), "sx"), None);
    }
}
