use modelgate::router::Resolution;
use modelgate::{Config, ModelResolver};
use rustc_hash::FxHashMap;

fn create_test_config() -> Config {
    let mut config = Config::default();
    config
        .routing
        .model_proxy
        .insert("gpt-4o".to_string(), "gpt-4o-latest".to_string());
    config
        .routing
        .model_proxy
        .insert("o1".to_string(), "o1-2024-12-17".to_string());
    config
}

#[test]
fn test_resolve_through_config() {
    let config = create_test_config();
    let resolver = ModelResolver::new(&config);

    let resolution = resolver.resolve(Some("gpt-4o"));
    assert_eq!(resolution.response_model, "gpt-4o-latest");
    assert_eq!(resolution.request_model, "gpt-4o");
}

#[test]
fn test_response_model_falls_back_to_input() {
    let config = create_test_config();
    let resolver = ModelResolver::new(&config);

    // Not in the proxy map: echoed unchanged while the rule scan still runs
    let resolution = resolver.resolve(Some("gpt-4o-mini-2024-07-18"));
    assert_eq!(resolution.response_model, "gpt-4o-mini-2024-07-18");
    assert_eq!(resolution.request_model, "gpt-4o-mini");
}

#[test]
fn test_default_model_resolution() {
    let resolver = ModelResolver::new(&Config::default());

    let resolution = resolver.resolve(None);
    assert_eq!(resolution.response_model, ModelResolver::DEFAULT_MODEL);
    assert_eq!(resolution.request_model, "text-davinci-002-render-sha");
}

#[test]
fn test_suffixed_mini_variants_keep_their_rule() {
    let resolver = ModelResolver::new(&Config::default());

    for origin in [
        "gpt-4o-mini",
        "gpt-4o-mini-2024-07-18",
        "team/gpt-4o-mini-preview",
    ] {
        let resolution = resolver.resolve(Some(origin));
        assert_eq!(
            resolution.request_model, "gpt-4o-mini",
            "origin model: {origin}"
        );
    }
}

#[test]
fn test_unknown_model_requests_auto() {
    let resolver = ModelResolver::new(&Config::default());

    let resolution = resolver.resolve(Some("totally-unknown-model"));
    assert_eq!(
        resolution,
        Resolution {
            response_model: "totally-unknown-model".to_string(),
            request_model: "auto".to_string(),
        }
    );
}

#[test]
fn test_mixed_case_input_matches() {
    let resolver = ModelResolver::new(&Config::default());

    let resolution = resolver.resolve(Some("GPT-4O"));
    assert_eq!(resolution.request_model, "gpt-4o");

    // Response side keeps the caller's casing (identity fallback)
    assert_eq!(resolution.response_model, "GPT-4O");
}

#[test]
fn test_with_proxy_constructor() {
    let mut proxy = FxHashMap::default();
    proxy.insert("o1-mini".to_string(), "o1-mini-2024-09-12".to_string());
    let resolver = ModelResolver::with_proxy(proxy);

    let resolution = resolver.resolve(Some("o1-mini"));
    assert_eq!(resolution.response_model, "o1-mini-2024-09-12");
    assert_eq!(resolution.request_model, "o1-mini");
}
