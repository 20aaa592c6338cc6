use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;

use super::Gate;
use crate::{QuantumRegister, QuantumResult};

/// The Hadamard gate.
/// Rotates the states `|0⟩` and `|1⟩` to `|+⟩` and `|-⟩`, respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HadamardGate {
    pub target: usize,
}

impl Gate for HadamardGate {
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        let mask = register.mask(self.target)?;
        tracing::trace!(target = self.target, "applying Hadamard");

        // Each output reads two inputs, so accumulate into a fresh buffer.
        let old = register.amplitudes();
        let mut new = vec![Complex64::new(0.0, 0.0); old.len()];
        for (i, &amplitude) in old.iter().enumerate() {
            let half = amplitude * FRAC_1_SQRT_2;
            let partner = i ^ mask;
            if i & mask == 0 {
                new[i] += half;
                new[partner] += half;
            } else {
                new[partner] += half;
                new[i] -= half;
            }
        }

        register.replace_amplitudes(new);
        Ok(())
    }
}
