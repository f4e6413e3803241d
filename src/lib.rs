pub mod config;
pub mod configs;
pub mod error;
pub mod router;

pub use config::Config;
pub use error::{GateError, Result};
pub use router::{ModelResolver, Resolution};
