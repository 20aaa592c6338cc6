use thiserror::Error;

pub type QuantumResult<T> = Result<T, QuantumError>;

/// Errors raised by register construction, gate application and measurement.
///
/// Every failure is reported before any amplitude is touched, so a register
/// that returned an error is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    #[error("Invalid dimension: {qubit_count} qubits exceeds the maximum of {max_qubits}")]
    InvalidDimension {
        qubit_count: usize,
        max_qubits: usize,
    },

    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Qubit {index} is out of range for a {qubit_count}-qubit register")]
    RegisterOutOfRange { index: usize, qubit_count: usize },

    #[error("Qubit {0} is used as more than one operand")]
    InvalidOperand(usize),

    #[error("Cannot observe a state with no probability mass")]
    DegenerateState,
}
