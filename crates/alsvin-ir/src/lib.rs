//! Alsvin transpiled-circuit representations.
//!
//! This crate provides the lean input model consumed by the Alsvin
//! calibration analysis: circuits reduced to ordered lists of
//! (basis-gate name, target qubits) instructions.
//!
//! # Core components
//!
//! - [`QubitId`]: physical qubit addressing
//! - [`Instruction`]: one transpiled basis-gate application
//! - [`CompiledCircuit`]: the modern per-circuit representation
//! - [`CompiledJob`] / [`Experiment`]: the legacy batched representation
//! - [`InstructionSource`]: the single capability consumers rely on,
//!   with one adapter per representation
//! - [`TranspiledSource`]: a seed group's input in either representation,
//!   loadable from dynamic JSON payloads
//!
//! # Example
//!
//! ```rust
//! use alsvin_ir::{CompiledCircuit, InstructionSource, QubitId};
//!
//! let mut circuit = CompiledCircuit::new("rb_seed0_len1");
//! circuit.gate("sx", QubitId(0)).gate2("cx", QubitId(0), QubitId(1));
//!
//! assert_eq!(circuit.instructions().len(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod instruction;
pub mod job;
pub mod qubit;
pub mod source;

pub use circuit::CompiledCircuit;
pub use error::{IrError, IrResult};
pub use instruction::Instruction;
pub use job::{CompiledJob, Experiment};
pub use qubit::QubitId;
pub use source::{InstructionSource, TranspiledSource};
