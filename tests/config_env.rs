//! Environment-backed configuration. Kept in its own integration binary so
//! the process environment can be mutated without racing other tests; all
//! mutation happens inside one sequential test function.

use ai_router::config::TEST_MODE_VAR;
use ai_router::{Provider, RouterConfig};

fn clear_all() {
    for provider in Provider::ALL {
        std::env::remove_var(provider.credential_var());
    }
    std::env::remove_var(TEST_MODE_VAR);
}

#[test]
fn from_env_reads_presence_only() {
    clear_all();

    let config = RouterConfig::from_env();
    assert!(!config.any_enabled());
    assert!(!config.test_mode());

    std::env::set_var("OPENAI_API_KEY", "sk-test-not-a-real-key");
    std::env::set_var("GOOGLE_API_KEY", "  ");
    let config = RouterConfig::from_env();
    assert!(config.is_enabled(Provider::OpenAi));
    // Whitespace-only values do not count as configured.
    assert!(!config.is_enabled(Provider::Google));
    assert!(!config.is_enabled(Provider::Xai));

    // The snapshot never carries the secret, only booleans.
    let json = serde_json::to_string(&config.snapshot()).unwrap();
    assert!(!json.contains("sk-test"));
    assert!(json.contains(r#""openai":true"#));

    std::env::set_var(TEST_MODE_VAR, "1");
    assert!(RouterConfig::from_env().test_mode());

    clear_all();
}
