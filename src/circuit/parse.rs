// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading qubit counts and circuits from a user.
//!
//! A gate is typed as `target control`, both 0-indexed. Malformed gates are
//! reported and asked for again; the circuit ends at end of input or when the
//! configured maximum number of gates has been read.

use crate::algebra::{Generator, Qubits, MAX_QUBITS, MIN_QUBITS};
use crate::circuit::Circuit;
use crate::error::OptimizeError;
use std::io::{BufRead, Write};
use tracing::warn;

/// Parse one gate written as `target control`.
pub fn parse_gate(text: &str, qubits: Qubits) -> Result<Generator, OptimizeError> {
    let mut fields = text.split_whitespace();
    let (Some(target), Some(control), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(OptimizeError::malformed(
            text,
            "expected two qubit indices `target control`",
        ));
    };
    let (Ok(target), Ok(control)) = (target.parse::<usize>(), control.parse::<usize>()) else {
        return Err(OptimizeError::malformed(
            text,
            "qubit indices must be non-negative integers",
        ));
    };
    if target == control {
        return Err(OptimizeError::malformed(
            text,
            "target and control must differ",
        ));
    }
    Generator::try_new(target, control, qubits)
        .ok_or_else(|| OptimizeError::malformed(text, "qubit index out of range"))
}

/// Ask for the number of qubits and validate the answer.
pub fn read_qubit_count<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
) -> Result<Qubits, OptimizeError> {
    writeln!(
        prompt,
        "Number of qubits of your circuit (between {} and {}) ?",
        MIN_QUBITS, MAX_QUBITS
    )?;
    prompt.flush()?;
    let mut bytes = Vec::new();
    input.read_until(b'\n', &mut bytes)?;
    Qubits::parse(&String::from_utf8_lossy(&bytes))
}

/// Interactive reader of one circuit.
#[derive(Debug)]
pub struct CircuitReader<R, W> {
    input: R,
    prompt: W,
    qubits: Qubits,
    max_gates: usize,
}

impl<R: BufRead, W: Write> CircuitReader<R, W> {
    pub fn new(input: R, prompt: W, qubits: Qubits, max_gates: usize) -> Self {
        Self {
            input,
            prompt,
            qubits,
            max_gates,
        }
    }

    /// Read gates until end of input or until `max_gates` gates are read.
    ///
    /// Malformed gates are reported on the prompt stream and asked for again;
    /// only I/O errors end the read early.
    pub fn read_circuit(&mut self) -> Result<Circuit, OptimizeError> {
        writeln!(
            self.prompt,
            "Enter the circuit to optimize:\n\
             --> enter each CNOT gate with target on qubit i and control on qubit j as \"i j\"\n\
             --> maximum length of circuit: {} gates\n\
             --> end the circuit with end of input (CTRL-D)",
            self.max_gates
        )?;
        let mut circuit = Circuit::new(self.qubits);
        let mut bytes = Vec::new();
        while circuit.len() < self.max_gates {
            write!(self.prompt, "gate {} ? ", circuit.len() + 1)?;
            self.prompt.flush()?;
            bytes.clear();
            if self.input.read_until(b'\n', &mut bytes)? == 0 {
                break;
            }
            // Bytes that are not UTF-8 cannot form a gate; parse_gate rejects them.
            let line = String::from_utf8_lossy(&bytes);
            if line.trim().is_empty() {
                continue;
            }
            match parse_gate(&line, self.qubits) {
                Ok(gate) => circuit.push(gate),
                Err(err @ OptimizeError::MalformedGateInput { .. }) => {
                    warn!(%err, "gate rejected");
                    writeln!(
                        self.prompt,
                        "error: {}; enter gate {} again",
                        err,
                        circuit.len() + 1
                    )?;
                }
                Err(err) => return Err(err),
            }
        }
        writeln!(self.prompt, "\n{} gates were scanned.", circuit.len())?;
        Ok(circuit)
    }

    /// Give back the prompt stream (used by tests to inspect what was shown).
    pub fn into_prompt(self) -> W {
        self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use std::io::Cursor;

    fn q(n: usize) -> Qubits {
        Qubits::try_new(n).unwrap()
    }

    #[test]
    fn test_parse_gate() {
        assert_eq!(parse_gate("1 0", q(2)).unwrap(), Generator::new(1, 0));
        assert_eq!(parse_gate("  3\t7 \n", q(8)).unwrap(), Generator::new(3, 7));
    }

    #[test]
    fn test_parse_gate_rejections() {
        for text in ["", "1", "1 2 3", "a b", "-1 0", "2 2", "0 3"] {
            assert!(
                matches!(
                    parse_gate(text, q(3)),
                    Err(OptimizeError::MalformedGateInput { .. })
                ),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_reader_reprompts_after_malformed_gate() {
        let input = Cursor::new("0 1\n2 2\n2 1\n");
        let mut reader = CircuitReader::new(input, Vec::new(), q(3), 100);
        let circuit = reader.read_circuit().unwrap();
        assert_eq!(
            circuit.gates(),
            &[Generator::new(0, 1), Generator::new(2, 1)]
        );
        let shown = String::from_utf8(reader.into_prompt()).unwrap();
        assert!(shown.contains("enter gate 2 again"));
        assert!(shown.contains("2 gates were scanned."));
    }

    #[test]
    fn test_reader_reprompts_after_invalid_utf8() {
        let mut input = b"0 1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b' ', b'1', b'\n']);
        input.extend_from_slice(b"1 2\n");
        let mut reader = CircuitReader::new(Cursor::new(input), Vec::new(), q(3), 100);
        let circuit = reader.read_circuit().unwrap();
        assert_eq!(
            circuit.gates(),
            &[Generator::new(0, 1), Generator::new(1, 2)]
        );
        let shown = String::from_utf8(reader.into_prompt()).unwrap();
        assert!(shown.contains("enter gate 2 again"));
    }

    #[test]
    fn test_default_config_reads_at_most_99_gates() {
        let input = Cursor::new("0 1\n".repeat(120));
        let max_gates = SearchConfig::default().max_circuit_length;
        let mut reader = CircuitReader::new(input, std::io::sink(), q(2), max_gates);
        assert_eq!(reader.read_circuit().unwrap().len(), 99);
    }

    #[test]
    fn test_reader_stops_at_max_gates() {
        let input = Cursor::new("0 1\n1 0\n0 1\n1 0\n");
        let mut reader = CircuitReader::new(input, std::io::sink(), q(2), 3);
        assert_eq!(reader.read_circuit().unwrap().len(), 3);
    }

    #[test]
    fn test_read_qubit_count() {
        let mut out = Vec::new();
        assert_eq!(
            read_qubit_count(&mut Cursor::new("4\n"), &mut out).unwrap(),
            q(4)
        );
        assert!(matches!(
            read_qubit_count(&mut Cursor::new("9\n"), &mut out),
            Err(OptimizeError::InvalidQubitCount { .. })
        ));
        assert!(matches!(
            read_qubit_count(&mut Cursor::new(vec![0xff, b'\n']), &mut out),
            Err(OptimizeError::InvalidQubitCount { .. })
        ));
    }
}
