pub mod error;
pub mod index;
pub mod state;
pub mod gate;
pub mod instruct;
pub mod measure;
pub mod catalog;
pub mod sector;
pub mod params;
pub mod config;
pub mod circuit;
pub mod tension;
pub mod json;
pub mod plenum;

pub use error::{PlenumError, Result};
pub use gate::Gate;
pub use state::State;
pub use catalog::{lookup, GateFamily, GateKind, GateSpec, Pairing};
pub use sector::Sector;
pub use params::ParameterVector;
pub use config::PlenumConfig;
pub use circuit::{run, Program};
pub use tension::{Classification, TensionResult};
pub use plenum::Plenum;
