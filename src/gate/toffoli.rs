use super::Gate;
use crate::{QuantumError, QuantumRegister, QuantumResult};

/// The doubly-controlled NOT (Toffoli) gate.
/// Flips `target` only when both controls are `|1⟩`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToffoliGate {
    pub controls: [usize; 2],
    pub target: usize,
}

impl Gate for ToffoliGate {
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        let [c1, c2] = self.controls;
        let first = register.mask(c1)?;
        let second = register.mask(c2)?;
        let target = register.mask(self.target)?;

        if c1 == c2 || c1 == self.target {
            return Err(QuantumError::InvalidOperand(c1));
        }
        if c2 == self.target {
            return Err(QuantumError::InvalidOperand(c2));
        }
        tracing::trace!(controls = ?self.controls, target = self.target, "applying Toffoli");

        let controls = first | second;
        let amplitudes = register.amplitudes_mut();
        for i in 0..amplitudes.len() {
            if i & controls == controls && i & target == 0 {
                amplitudes.swap(i, i | target);
            }
        }
        Ok(())
    }
}
