use super::Gate;
use crate::{QuantumError, QuantumRegister, QuantumResult};

/// The controlled-NOT gate, also known as the controlled-x (CX) gate.
/// It performs a NOT on the `target` whenever the `control` is in state `|1⟩`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CNotGate {
    pub control: usize,
    pub target: usize,
}

impl Gate for CNotGate {
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        let control = register.mask(self.control)?;
        let target = register.mask(self.target)?;
        if control == target {
            return Err(QuantumError::InvalidOperand(self.control));
        }
        tracing::trace!(
            control = self.control,
            target = self.target,
            "applying CNOT"
        );

        let amplitudes = register.amplitudes_mut();
        for i in 0..amplitudes.len() {
            if i & control != 0 && i & target == 0 {
                amplitudes.swap(i, i | target);
            }
        }
        Ok(())
    }
}
