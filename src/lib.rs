//! State-vector simulation of a small quantum register.
//!
//! A [`QuantumRegister`] of `n` qubits holds `2^n` complex amplitudes, one per
//! basis index. Bit `k` of an index is the value of qubit `k`. Gates rewrite the
//! amplitudes in place, and observing the register samples one basis index and
//! collapses the state onto it.
//!
//! ```
//! use qureg::QuantumRegister;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut register = QuantumRegister::new(2)?;
//! register.h(0)?.cx(0, 1)?;
//!
//! let index = register.observe(&mut rng)?;
//! assert!(index == 0b00 || index == 0b11);
//! # Ok::<(), qureg::QuantumError>(())
//! ```

pub mod config;
pub use config::{Collapse, RegisterConfig, DEFAULT_MAX_QUBITS};

mod error;
pub use error::{QuantumError, QuantumResult};

pub mod gate;
use gate::Gates;

mod measurement;
pub use measurement::Measurement;

pub mod state;
pub use state::QuantumRegister;

/// A step of a program run with [`QuantumRegister::run`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instruction {
    Gate(Gates),
    Observe,
}
