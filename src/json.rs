//! JSON exchange format for programs submitted by a host.
//!
//! ```json
//! {"sector": "MIND", "gates": ["HADAMARD", "CNOT"], "stimulus": 0.25}
//! ```
//!
//! `stimulus` and `params` (a per-qubit override vector) are optional.

use serde::{Deserialize, Serialize};

use crate::circuit::Program;
use crate::error::Result;
use crate::params::ParameterVector;
use crate::sector::Sector;

#[derive(Serialize, Deserialize)]
struct RequestJson {
    sector: String,
    gates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stimulus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<Vec<f64>>,
}

/// A validated execution request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramRequest {
    pub program: Program,
    pub sector: Sector,
    pub stimulus: Option<f64>,
    pub params: Option<ParameterVector>,
}

/// Decode and validate a request; gate and sector names are resolved here.
pub fn request_from_json(json: &str) -> Result<ProgramRequest> {
    let raw: RequestJson = serde_json::from_str(json)?;
    Ok(ProgramRequest {
        program: Program::parse(&raw.gates)?,
        sector: raw.sector.parse()?,
        stimulus: raw.stimulus,
        params: raw.params.map(ParameterVector::new),
    })
}

/// Encode a request with canonical gate names.
pub fn request_to_json(request: &ProgramRequest) -> String {
    let raw = RequestJson {
        sector: request.sector.name().to_string(),
        gates: request
            .program
            .gates
            .iter()
            .map(|g| g.name().to_string())
            .collect(),
        stimulus: request.stimulus,
        params: request.params.as_ref().map(|p| p.as_slice().to_vec()),
    };
    serde_json::to_string(&raw).expect("request serialization cannot fail")
}
