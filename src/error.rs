// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type shared by the library and the `cnot-opt` binary.

/// Everything that can stop an optimisation run.
///
/// Only [`OptimizeError::MalformedGateInput`] is recovered locally (the circuit
/// reader re-prompts); every other variant ends the current run.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    /// The qubit count is outside the supported range or is not a number.
    #[error("the number of qubits must be between {min} and {max}, got `{given}`")]
    InvalidQubitCount { given: String, min: u8, max: u8 },

    /// A gate could not be parsed or does not fit the circuit's qubits.
    #[error("malformed gate `{input}`: {reason}")]
    MalformedGateInput { input: String, reason: &'static str },

    /// The matrix encoding word cannot hold n² bits.
    #[error("{qubits} qubits need {required} bits per matrix but the encoding word has {available}")]
    UnsupportedWordWidth {
        qubits: usize,
        required: u32,
        available: u32,
    },

    /// A node, a decomposition buffer or an oracle table could not be allocated,
    /// or the configured node budget is spent.
    #[error("allocation failure while creating {what}")]
    AllocationFailure { what: String },

    /// The depth ceiling for this qubit count was reached without finding the target.
    #[error(
        "the optimal length is at least {lower_bound}: the depth ceiling of {ceiling} for \
         {qubits} qubits was reached; raise the ceiling if memory allows"
    )]
    DepthCeilingExceeded {
        qubits: usize,
        ceiling: u8,
        lower_bound: u8,
    },

    /// Every element of the group was enumerated and none equals the target.
    #[error("all elements up to length {max_length} were enumerated without reaching the target; it is not invertible")]
    UnreachableTarget { max_length: u8 },

    /// The exhaustive oracle needs a table of 2^(n²) entries.
    #[error("exhaustive enumeration supports at most {max} qubits, got {qubits}")]
    OracleTooLarge { qubits: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OptimizeError {
    pub(crate) fn allocation(what: impl Into<String>) -> Self {
        OptimizeError::AllocationFailure { what: what.into() }
    }

    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        OptimizeError::MalformedGateInput {
            input: input.trim().to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_message_states_lower_bound() {
        let err = OptimizeError::DepthCeilingExceeded {
            qubits: 6,
            ceiling: 7,
            lower_bound: 8,
        };
        let message = err.to_string();
        assert!(message.contains("at least 8"));
        assert!(message.contains("raise the ceiling"));
    }

    #[test]
    fn test_malformed_trims_input() {
        let err = OptimizeError::malformed("  2 2\n", "target and control must differ");
        assert_eq!(
            err.to_string(),
            "malformed gate `2 2`: target and control must differ"
        );
    }
}
