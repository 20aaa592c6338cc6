use serde::{Deserialize, Serialize};

/// Outcome of observing a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measurement {
    index: usize,
    random: bool,
}

impl Measurement {
    /// An outcome that was certain: only one basis index carried probability.
    pub const fn fixed(index: usize) -> Self {
        Self {
            index,
            random: false,
        }
    }

    /// An outcome drawn from a superposition of several basis indices.
    pub const fn random(index: usize) -> Self {
        Self {
            index,
            random: true,
        }
    }

    /// The basis index the register collapsed to.
    pub const fn index(self) -> usize {
        self.index
    }

    pub const fn is_random(self) -> bool {
        self.random
    }

    /// Whether `qubit` was observed in state `|1⟩`.
    pub const fn is_one(self, qubit: usize) -> bool {
        qubit < usize::BITS as usize && (self.index >> qubit) & 1 == 1
    }

    pub const fn is_zero(self, qubit: usize) -> bool {
        !self.is_one(qubit)
    }
}
