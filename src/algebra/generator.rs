// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator type: a transvection, i.e. a CNOT gate.
//!
//! The transvection `[t:c]` adds row `c` to row `t` (target `t`, control `c`)
//! and is encoded in one byte as `16 * t + c`. The byte 0 is reserved for
//! "no generator" and never names a real gate.

use crate::algebra::Qubits;
use std::fmt;

const CONTROL_MASK: u8 = 0x0F;

/// A transvection `[target:control]` packed as `16 * target + control`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generator(u8);

impl Generator {
    /// The reserved "no generator" value (identity).
    pub const IDENTITY: Generator = Generator(0);

    /// Create a generator, panicking on an invalid pair.
    ///
    /// # Panics
    ///
    /// Panics if either index is 16 or more, or if `target == control`.
    pub fn new(target: u8, control: u8) -> Self {
        assert!(
            target < 16 && control < 16 && target != control,
            "Invalid transvection [{}:{}]",
            target,
            control
        );
        Self(16 * target + control)
    }

    /// Try to create a generator for a circuit on `qubits`.
    ///
    /// Returns None if an index is out of range or both indices are equal.
    pub fn try_new(target: usize, control: usize, qubits: Qubits) -> Option<Self> {
        let n = qubits.get();
        if target < n && control < n && target != control {
            Some(Self::new(target as u8, control as u8))
        } else {
            None
        }
    }

    /// Rebuild a generator from its byte encoding.
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// The byte encoding.
    pub fn byte(self) -> u8 {
        self.0
    }

    /// Row that receives the XOR.
    pub fn target(self) -> usize {
        (self.0 >> 4) as usize
    }

    /// Row that is added to the target.
    pub fn control(self) -> usize {
        (self.0 & CONTROL_MASK) as usize
    }

    pub fn is_identity(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Generator {
    /// Format a generator as "[t:c]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.target(), self.control())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding() {
        let g = Generator::new(3, 1);
        assert_eq!(g.byte(), 0x31);
        assert_eq!(g.target(), 3);
        assert_eq!(g.control(), 1);
        assert_eq!(Generator::from_byte(0x31), g);
        assert_eq!(format!("{}", g), "[3:1]");
    }

    #[test]
    #[should_panic(expected = "Invalid transvection")]
    fn test_equal_indices() {
        Generator::new(2, 2);
    }

    #[test]
    fn test_try_new() {
        let q = Qubits::try_new(3).unwrap();
        assert!(Generator::try_new(0, 2, q).is_some());
        assert!(Generator::try_new(2, 2, q).is_none());
        assert!(Generator::try_new(3, 0, q).is_none());
    }

    #[test]
    fn test_identity_is_never_generated() {
        for n in 2..=8 {
            let q = Qubits::try_new(n).unwrap();
            assert!(q.generators().all(|g| !g.is_identity()));
        }
    }
}
