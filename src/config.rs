use serde::{Deserialize, Serialize};

/// Largest register built by [`RegisterConfig::default`].
///
/// Memory grows as `2^n` complex values, so 24 qubits is already 256 MiB.
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// What survives at the sampled index when a register is observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collapse {
    /// The sampled index becomes exactly `1+0i`.
    #[default]
    DiscardPhase,
    /// The sampled index keeps its phase, rescaled to unit magnitude.
    PreservePhase,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Registers wider than this are rejected at construction.
    pub max_qubits: usize,
    pub collapse: Collapse,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            collapse: Collapse::default(),
        }
    }
}

impl RegisterConfig {
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    pub fn with_collapse(mut self, collapse: Collapse) -> Self {
        self.collapse = collapse;
        self
    }
}
