use super::Gate;
use crate::{QuantumRegister, QuantumResult};

/// The NOT (Pauli-X) gate: `|0⟩ ↔ |1⟩` on `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotGate {
    pub target: usize,
}

impl Gate for NotGate {
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        let mask = register.mask(self.target)?;
        tracing::trace!(target = self.target, "applying NOT");

        let amplitudes = register.amplitudes_mut();
        for i in 0..amplitudes.len() {
            // visit each pair once, from its lower index
            if i & mask == 0 {
                amplitudes.swap(i, i | mask);
            }
        }
        Ok(())
    }
}
