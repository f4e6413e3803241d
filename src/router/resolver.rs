use rustc_hash::FxHashMap;

use crate::config::Config;

/// Definition of how an inbound model name maps to an upstream request model.
#[derive(Debug, Clone, Copy)]
pub struct ModelRule {
    pub pattern: &'static str,
    pub target: &'static str,
}

impl ModelRule {
    const fn new(pattern: &'static str, target: &'static str) -> Self {
        Self { pattern, target }
    }
}

// Order matters: more specific patterns must come before broader families,
// otherwise "gpt-4o-mini" would be swallowed by the "gpt-4o" rule.
const MODEL_RULES: &[ModelRule] = &[
    ModelRule::new("gpt-5", "gpt-5"),
    ModelRule::new("gpt-4.5o", "gpt-4.5o"),
    ModelRule::new("gpt-4o-canmore", "gpt-4o-canmore"),
    ModelRule::new("gpt-4o-mini", "gpt-4o-mini"),
    ModelRule::new("gpt-4o", "gpt-4o"),
    ModelRule::new("gpt-4-mobile", "gpt-4-mobile"),
    ModelRule::new("gpt-4-gizmo", "gpt-4o"),
    ModelRule::new("gpt-4", "gpt-4"),
    ModelRule::new("o1-preview", "o1-preview"),
    ModelRule::new("o1-mini", "o1-mini"),
    ModelRule::new("o1", "o1"),
    ModelRule::new("gpt-3.5", "text-davinci-002-render-sha"),
    ModelRule::new("auto", "auto"),
];

/// Outcome of resolving one inbound model name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Model name echoed back to the client.
    pub response_model: String,
    /// Model name sent to the upstream provider.
    pub request_model: String,
}

/// Resolves inbound model names to response and request models.
pub struct ModelResolver {
    model_proxy: FxHashMap<String, String>,
}

impl ModelResolver {
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo-0125";

    pub fn new(config: &Config) -> Self {
        Self::with_proxy(config.routing.model_proxy.clone())
    }

    pub fn with_proxy(model_proxy: FxHashMap<String, String>) -> Self {
        Self { model_proxy }
    }

    /// Resolve an inbound model name into a response/request model pair.
    ///
    /// `None` and the empty string both fall back to [`Self::DEFAULT_MODEL`].
    /// The function is total: every input resolves to a pair.
    pub fn resolve(&self, origin_model: Option<&str>) -> Resolution {
        let normalized = match origin_model {
            Some(model) if !model.is_empty() => model,
            _ => Self::DEFAULT_MODEL,
        };

        let response_model = self
            .model_proxy
            .get(normalized)
            .cloned()
            .unwrap_or_else(|| normalized.to_string());
        let request_model = Self::match_request_model(normalized);

        tracing::debug!(
            "Resolved model '{}' -> response '{}', request '{}'",
            normalized,
            response_model,
            request_model
        );

        Resolution {
            response_model,
            request_model,
        }
    }

    /// Scan the rule table in order and return the first matching target.
    fn match_request_model(origin_model: &str) -> String {
        let lower_model = origin_model.to_lowercase();
        for rule in MODEL_RULES {
            if lower_model.contains(rule.pattern) {
                return rule.target.to_string();
            }
        }
        "auto".to_string()
    }
}
