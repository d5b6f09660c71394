//! The three fixed 8-qubit sectors of the register.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlenumError, Result};

/// Qubits per sector.
pub const SECTOR_WIDTH: usize = 8;

/// Named, contiguous, non-overlapping 8-qubit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sector {
    Mind,
    Body,
    Spirit,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Mind, Sector::Body, Sector::Spirit];

    /// Absolute index of local offset 0.
    pub fn base(self) -> usize {
        self as usize * SECTOR_WIDTH
    }

    /// Absolute indices of the sector's qubits, local offset order.
    pub fn qubits(self) -> Vec<usize> {
        (self.base()..self.base() + SECTOR_WIDTH).collect()
    }

    /// Last qubit of the sector, used as its representative.
    pub fn representative(self) -> usize {
        self.base() + SECTOR_WIDTH - 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Sector::Mind => "MIND",
            Sector::Body => "BODY",
            Sector::Spirit => "SPIRIT",
        }
    }
}

impl FromStr for Sector {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.name() == s)
            .ok_or_else(|| PlenumError::UnknownSector(s.to_string()))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
