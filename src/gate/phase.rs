use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;

use super::Gate;
use crate::{QuantumRegister, QuantumResult};

/// The PHASE (Pauli-Z) gate: negates every amplitude where `target` is `|1⟩`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseGate {
    pub target: usize,
}

/// The π/8 (T) gate: multiplies the `|1⟩` half by `(1+i)/√2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PiOverEightGate {
    pub target: usize,
}

/// Phase rotation by `theta` radians: multiplies the `|1⟩` half by `e^(iθ)`.
///
/// `theta = π` is [`PhaseGate`] and `theta = π/4` is [`PiOverEightGate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationGate {
    pub target: usize,
    pub theta: f64,
}

impl Gate for PhaseGate {
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        tracing::trace!(target = self.target, "applying PHASE");
        apply_phase(register, self.target, Complex64::new(-1.0, 0.0))
    }
}

impl Gate for PiOverEightGate {
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        tracing::trace!(target = self.target, "applying π/8");
        apply_phase(
            register,
            self.target,
            Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        )
    }
}

impl Gate for RotationGate {
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        tracing::trace!(
            target = self.target,
            theta = self.theta,
            "applying rotation"
        );
        apply_phase(
            register,
            self.target,
            Complex64::from_polar(1.0, self.theta),
        )
    }
}

/// Multiply every amplitude whose `target` bit is set by `factor`.
fn apply_phase(
    register: &mut QuantumRegister,
    target: usize,
    factor: Complex64,
) -> QuantumResult<()> {
    let mask = register.mask(target)?;
    for (i, amplitude) in register.amplitudes_mut().iter_mut().enumerate() {
        if i & mask != 0 {
            *amplitude *= factor;
        }
    }
    Ok(())
}
