// Rule-driven model resolution - the only routing we need
pub mod resolver;

// Export the resolver and its types
pub use resolver::{ModelResolver, ModelRule, Resolution};
