//! Standalone binary reporting provider availability and routing decisions
//! for the current environment. Handy for diagnosing "why did my request end
//! up on that model" without starting the application.

use ai_router::routing::LogicalRole;
use ai_router::{catalog, ModelRouter, Provider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let router = ModelRouter::from_env();
    let resolver = router.resolver();

    println!("=== Provider Availability ===");
    for provider in Provider::ALL {
        let status = if resolver.is_enabled(provider) {
            "enabled"
        } else {
            "disabled"
        };
        println!("  {:<10} {} ({})", provider.id(), status, provider.credential_var());
    }
    if let Some(err) = resolver.availability_error() {
        println!("  warning: {}", err);
    }

    println!("\n=== Published Snapshot ===");
    println!(
        "  {}",
        serde_json::to_string_pretty(&resolver.config().snapshot())?
    );

    println!("\n=== Available Models ===");
    for model in catalog::available_models(resolver) {
        println!("  {:<28} {}", model.id, model.display_name);
    }

    println!("\n=== Logical Role Resolution ===");
    for role in LogicalRole::ALL {
        let handle = router.language_model(role.model_id());
        println!("  {:<22} -> {}", role.model_id(), handle);
    }

    Ok(())
}
