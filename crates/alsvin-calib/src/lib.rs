//! Calibration-quality metrics for randomized benchmarking (RB).
//!
//! Pure numerical functions over externally supplied circuit and
//! calibration data:
//!
//! - [`gates_per_clifford`]: average basis gates consumed per Clifford
//!   across a transpiled RB circuit sweep
//! - [`count_gates`]: raw per-experiment gate counts (deprecated)
//! - [`coherence_limit`]: minimum gate error imposed by T1/T2 decay
//! - [`two_qubit_clifford_error`]: predicted two-qubit Clifford error
//!   composed from primitive-gate depolarizing error rates
//!
//! All four are stateless and side-effect free; errors are surfaced
//! immediately as [`CalibError`] with no partial results.
//!
//! # Example
//!
//! ```rust
//! use alsvin_calib::{coherence_limit, gates_per_clifford};
//! use alsvin_ir::{CompiledCircuit, QubitId, TranspiledSource};
//!
//! // One seed group of a 1Q RB sweep at sequence length 1.
//! let mut circuit = CompiledCircuit::new("rb_seed0_len1");
//! circuit.gate("sx", QubitId(0)).gate("sx", QubitId(0));
//!
//! let rates = gates_per_clifford(
//!     &[TranspiledSource::Circuits(vec![circuit])],
//!     &[1],
//!     &["sx", "rz"],
//!     &[QubitId(0)],
//! )?;
//! // Two sx gates over 1 Clifford plus its inversion.
//! assert_eq!(rates[&QubitId(0)]["sx"], 1.0);
//!
//! // Decoherence floor for a 50 ns gate with T1 = T2 = 100 µs.
//! let floor = coherence_limit(1, &[100_000.0], None, 50.0)?;
//! assert!(floor > 0.0 && floor < 1e-3);
//! # Ok::<(), alsvin_calib::CalibError>(())
//! ```

pub mod clifford;
pub mod coherence;
pub mod counts;
pub mod error;
pub mod table;
pub mod two_qubit;

pub use clifford::{GateRates, gates_per_clifford, gates_per_clifford_json};
pub use coherence::coherence_limit;
#[allow(deprecated)]
pub use counts::count_gates;
pub use error::{CalibError, CalibResult};
pub use table::GateCountTable;
pub use two_qubit::{GateQubit, two_qubit_clifford_error};
