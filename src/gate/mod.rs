//! Gates act on a register by rewriting amplitudes according to the bit
//! pattern of each basis index, never by building the `2^n × 2^n` matrix.

mod cnot;
pub use cnot::CNotGate;

mod hadamard;
pub use hadamard::HadamardGate;

mod not;
pub use not::NotGate;

mod phase;
pub use phase::{PhaseGate, PiOverEightGate, RotationGate};

mod toffoli;
pub use toffoli::ToffoliGate;

use crate::{Instruction, QuantumRegister, QuantumResult};

pub trait Gate {
    /// Apply the gate to `register`.
    ///
    /// Operands are validated first; on error the register is unchanged.
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gates {
    Not(NotGate),
    Phase(PhaseGate),
    PiOverEight(PiOverEightGate),
    Rotation(RotationGate),
    Hadamard(HadamardGate),
    CNot(CNotGate),
    Toffoli(ToffoliGate),
}

impl From<Gates> for Instruction {
    fn from(gate: Gates) -> Self {
        Self::Gate(gate)
    }
}

impl Gate for Gates {
    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        match self {
            Self::Not(x) => x.apply(register),
            Self::Phase(z) => z.apply(register),
            Self::PiOverEight(t) => t.apply(register),
            Self::Rotation(r) => r.apply(register),
            Self::Hadamard(h) => h.apply(register),
            Self::CNot(cx) => cx.apply(register),
            Self::Toffoli(ccx) => ccx.apply(register),
        }
    }
}

macro_rules! impl_from_gate {
    ($($variant:ident($gate:ty)),* $(,)?) => {
        $(
            impl From<$gate> for Gates {
                fn from(gate: $gate) -> Self {
                    Self::$variant(gate)
                }
            }

            impl From<$gate> for Instruction {
                fn from(gate: $gate) -> Self {
                    Self::Gate(Gates::$variant(gate))
                }
            }
        )*
    };
}

impl_from_gate!(
    Not(NotGate),
    Phase(PhaseGate),
    PiOverEight(PiOverEightGate),
    Rotation(RotationGate),
    Hadamard(HadamardGate),
    CNot(CNotGate),
    Toffoli(ToffoliGate),
);
