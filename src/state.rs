use std::mem::size_of;

use num_complex::Complex64;
use rand::Rng;

use crate::{
    gate::{
        CNotGate, Gate, HadamardGate, NotGate, PhaseGate, PiOverEightGate, RotationGate,
        ToffoliGate,
    },
    Collapse, Instruction, Measurement, QuantumError, QuantumResult, RegisterConfig,
};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// An `n`-qubit register stored as its full vector of `2^n` amplitudes.
///
/// Every operation mutates the register in place and hands back `&mut Self`,
/// so calls chain and the caller's handle never changes.
///
/// `Clone` copies the whole amplitude vector. Physically a quantum state cannot
/// be copied (no-cloning), so a clone is only meaningful as a sandbox for
/// trying out gates or sampling without disturbing the original. Results drawn
/// from both copies are not correlated the way a real measurement would be.
#[derive(Clone, Debug)]
pub struct QuantumRegister {
    qubit_count: usize,
    amplitudes: Vec<Complex64>,
    config: RegisterConfig,
}

impl QuantumRegister {
    /// Create a register with `qubit_count` qubits, all in state `|0⟩`.
    pub fn new(qubit_count: usize) -> QuantumResult<Self> {
        Self::with_config(qubit_count, RegisterConfig::default())
    }

    pub fn with_config(qubit_count: usize, config: RegisterConfig) -> QuantumResult<Self> {
        let dim = dimension(qubit_count, &config)?;
        let mut amplitudes = Vec::new();
        amplitudes
            .try_reserve_exact(dim)
            .map_err(|_| QuantumError::InvalidDimension {
                qubit_count,
                max_qubits: config.max_qubits,
            })?;
        amplitudes.resize(dim, ZERO);
        amplitudes[0] = ONE;

        tracing::debug!(qubit_count, "created register");
        Ok(Self {
            qubit_count,
            amplitudes,
            config,
        })
    }

    /// Create a register from caller-supplied amplitudes in index order.
    ///
    /// The amplitudes are not normalized here. [`observe`](Self::observe)
    /// divides by the total squared magnitude, so drift is tolerated there.
    pub fn from_amplitudes(qubit_count: usize, amplitudes: Vec<Complex64>) -> QuantumResult<Self> {
        Self::from_amplitudes_with_config(qubit_count, amplitudes, RegisterConfig::default())
    }

    pub fn from_amplitudes_with_config(
        qubit_count: usize,
        amplitudes: Vec<Complex64>,
        config: RegisterConfig,
    ) -> QuantumResult<Self> {
        let dim = dimension(qubit_count, &config)?;
        if amplitudes.len() != dim {
            return Err(QuantumError::DimensionMismatch {
                expected: dim,
                actual: amplitudes.len(),
            });
        }

        tracing::debug!(qubit_count, "restored register from amplitudes");
        Ok(Self {
            qubit_count,
            amplitudes,
            config,
        })
    }

    /// Create a register from interleaved `[re0, im0, re1, im1, ...]` pairs.
    pub fn from_interleaved(qubit_count: usize, values: &[f64]) -> QuantumResult<Self> {
        Self::from_interleaved_with_config(qubit_count, values, RegisterConfig::default())
    }

    pub fn from_interleaved_with_config(
        qubit_count: usize,
        values: &[f64],
        config: RegisterConfig,
    ) -> QuantumResult<Self> {
        let dim = dimension(qubit_count, &config)?;
        if values.len() != 2 * dim {
            return Err(QuantumError::DimensionMismatch {
                expected: 2 * dim,
                actual: values.len(),
            });
        }

        let amplitudes = values
            .chunks_exact(2)
            .map(|pair| Complex64::new(pair[0], pair[1]))
            .collect();
        Self::from_amplitudes_with_config(qubit_count, amplitudes, config)
    }

    /// The amplitudes as interleaved `[re0, im0, re1, im1, ...]` pairs.
    pub fn to_interleaved(&self) -> Vec<f64> {
        self.amplitudes.iter().flat_map(|a| [a.re, a.im]).collect()
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Number of basis states, `2^qubit_count`.
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Sum of squared magnitudes of every amplitude.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Apply any [`Gate`] to this register.
    pub fn apply<G>(&mut self, gate: &G) -> QuantumResult<&mut Self>
    where
        G: Gate + ?Sized,
    {
        gate.apply(self)?;
        Ok(self)
    }

    /// Apply the NOT gate on `target`.
    pub fn x(&mut self, target: usize) -> QuantumResult<&mut Self> {
        self.apply(&NotGate { target })
    }

    /// Apply the PHASE gate on `target`.
    pub fn z(&mut self, target: usize) -> QuantumResult<&mut Self> {
        self.apply(&PhaseGate { target })
    }

    /// Apply the π/8 gate on `target`.
    pub fn t(&mut self, target: usize) -> QuantumResult<&mut Self> {
        self.apply(&PiOverEightGate { target })
    }

    /// Rotate the phase of `target`'s `|1⟩` component by `theta` radians.
    pub fn rotate(&mut self, target: usize, theta: f64) -> QuantumResult<&mut Self> {
        self.apply(&RotationGate { target, theta })
    }

    /// Apply the Hadamard gate.
    /// Rotates the states `|0⟩` and `|1⟩` to `|+⟩` and `|-⟩`, respectively.
    pub fn h(&mut self, target: usize) -> QuantumResult<&mut Self> {
        self.apply(&HadamardGate { target })
    }

    /// Apply the controlled-NOT gate, also known as the controlled-x (CX) gate.
    /// It performs a NOT on the `target` whenever the `control` is in state `|1⟩`.
    pub fn cx(&mut self, control: usize, target: usize) -> QuantumResult<&mut Self> {
        self.apply(&CNotGate { control, target })
    }

    /// Apply the Toffoli gate: NOT on `target` when both controls are `|1⟩`.
    pub fn ccx(
        &mut self,
        control1: usize,
        control2: usize,
        target: usize,
    ) -> QuantumResult<&mut Self> {
        self.apply(&ToffoliGate {
            controls: [control1, control2],
            target,
        })
    }

    /// Observe the whole register and return the sampled basis index.
    ///
    /// See [`measure`](Self::measure) for how the index is drawn.
    pub fn observe<R>(&mut self, rng: &mut R) -> QuantumResult<usize>
    where
        R: Rng + ?Sized,
    {
        self.measure(rng).map(Measurement::index)
    }

    /// Observe the whole register.
    ///
    /// Index `i` is drawn with probability `|a_i|² / Σ|a_j|²`, then the
    /// register collapses onto it according to [`RegisterConfig::collapse`].
    /// An index with zero amplitude is never returned: if the draw lands on
    /// the total, the last index that carries probability is chosen.
    ///
    /// Amplitudes are rescaled by the largest magnitude before squaring, so
    /// very large or very small unnormalized vectors still sample correctly.
    /// Fails with [`QuantumError::DegenerateState`] when every amplitude is
    /// zero or any is not finite.
    pub fn measure<R>(&mut self, rng: &mut R) -> QuantumResult<Measurement>
    where
        R: Rng + ?Sized,
    {
        let scale = largest_magnitude(&self.amplitudes);
        if scale == 0.0 || !scale.is_finite() {
            return Err(QuantumError::DegenerateState);
        }

        let weights: Vec<f64> = self
            .amplitudes
            .iter()
            .map(|&a| (a / scale).norm_sqr())
            .collect();
        let total: f64 = weights.iter().sum();
        let outcomes = weights.iter().filter(|&&w| w > 0.0).count();
        let roll = rng.gen::<f64>() * total;
        let index = select_index(&weights, roll);
        self.collapse(index);

        tracing::debug!(index, outcomes, "observed register");
        if outcomes > 1 {
            Ok(Measurement::random(index))
        } else {
            Ok(Measurement::fixed(index))
        }
    }

    /// Run `instructions` in order, yielding one result per
    /// [`Instruction::Observe`] and one error per failing gate.
    pub fn run<'s, 'r, I, R>(
        &'s mut self,
        instructions: I,
        rng: &'r mut R,
    ) -> Measurements<'s, 'r, I::IntoIter, R>
    where
        I: IntoIterator<Item = Instruction>,
        R: Rng + ?Sized,
    {
        Measurements {
            register: self,
            rng,
            iter: instructions.into_iter(),
        }
    }

    /// Bit mask for `qubit`, or an error if it is not part of this register.
    pub(crate) fn mask(&self, qubit: usize) -> QuantumResult<usize> {
        if qubit >= self.qubit_count {
            return Err(QuantumError::RegisterOutOfRange {
                index: qubit,
                qubit_count: self.qubit_count,
            });
        }
        Ok(1 << qubit)
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    pub(crate) fn replace_amplitudes(&mut self, amplitudes: Vec<Complex64>) {
        debug_assert_eq!(amplitudes.len(), self.amplitudes.len());
        self.amplitudes = amplitudes;
    }

    fn collapse(&mut self, index: usize) {
        let survivor = match self.config.collapse {
            Collapse::DiscardPhase => ONE,
            Collapse::PreservePhase => {
                let amplitude = self.amplitudes[index];
                amplitude / amplitude.norm()
            }
        };
        self.amplitudes.fill(ZERO);
        self.amplitudes[index] = survivor;
    }
}

/// Number of amplitudes for `qubit_count` qubits.
///
/// Rejects counts above the configured ceiling and counts whose buffer
/// would exceed `isize::MAX` bytes, the limit for any `Vec`.
fn dimension(qubit_count: usize, config: &RegisterConfig) -> QuantumResult<usize> {
    let invalid = || QuantumError::InvalidDimension {
        qubit_count,
        max_qubits: config.max_qubits,
    };
    if qubit_count > config.max_qubits {
        return Err(invalid());
    }

    u32::try_from(qubit_count)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .filter(|&dim| {
            dim.checked_mul(size_of::<Complex64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(invalid)
}

/// Largest amplitude magnitude. NaN propagates.
fn largest_magnitude(amplitudes: &[Complex64]) -> f64 {
    amplitudes.iter().map(|a| a.norm()).fold(0.0, |max, n| {
        if n.is_nan() || n > max {
            n
        } else {
            max
        }
    })
}

/// Smallest index whose cumulative weight exceeds `roll`.
///
/// Zero-weight indices are never selected. If rounding leaves `roll`
/// at or past the final sum, the last index carrying weight is returned.
fn select_index(weights: &[f64], roll: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last = 0;
    for (i, &p) in weights.iter().enumerate() {
        if p == 0.0 {
            continue;
        }
        cumulative += p;
        last = i;
        if cumulative > roll {
            return i;
        }
    }
    last
}

pub struct Measurements<'s, 'r, I, R: ?Sized> {
    register: &'s mut QuantumRegister,
    rng: &'r mut R,
    iter: I,
}

impl<I, R> Iterator for Measurements<'_, '_, I, R>
where
    I: Iterator<Item = Instruction>,
    R: Rng + ?Sized,
{
    type Item = QuantumResult<Measurement>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.iter.next()? {
                Instruction::Gate(gate) => {
                    if let Err(e) = gate.apply(self.register) {
                        break Some(Err(e));
                    }
                }
                Instruction::Observe => break Some(self.register.measure(&mut *self.rng)),
            }
        }
    }
}
