//! Compatibility shim for the legacy `configs` module path.
//!
//! Older callers imported settings from `configs`; the primary module is
//! [`crate::config`]. Each public item is re-exported here explicitly so
//! the legacy surface stays auditable.

pub use crate::config::{Config, LogConfig, RoutingConfig};
