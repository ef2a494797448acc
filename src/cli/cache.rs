//! Cache-clear command implementation

use anyhow::Result;

use wordhint::config::Config;
use wordhint::provider::ProviderRegistry;

/// Clear a provider's in-memory cache and, with `disk`, its backing file
pub async fn clear_cache_command(config: Config, provider: Option<String>, disk: bool) -> Result<()> {
    let id = provider.unwrap_or_else(|| config.provider.clone());
    let cache_path = config.cache_path(&id);
    let mut registry = ProviderRegistry::new(config);

    registry.clear(&id, disk)?;
    registry.shutdown().await;

    if disk {
        println!("Removed definition cache at {}", cache_path.display());
    } else {
        println!("Cleared in-memory definition cache for '{id}'");
    }

    Ok(())
}
