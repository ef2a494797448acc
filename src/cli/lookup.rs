//! Lookup command implementation

use anyhow::Result;

use wordhint::client::CancelToken;
use wordhint::config::Config;
use wordhint::provider::ProviderRegistry;

/// Resolve a word through the configured provider and print the hint
pub async fn lookup_command(config: Config, word: &str, provider: Option<String>) -> Result<()> {
    let id = provider.unwrap_or_else(|| config.provider.clone());
    let mut registry = ProviderRegistry::new(config);

    // Ctrl-C aborts an in-flight lookup instead of killing the process,
    // so the cache still gets flushed on the way out
    let cancel = CancelToken::new();
    let cancel_on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_on_interrupt.cancel();
        }
    });

    let result = registry.hint(&id, word, &cancel).await;
    registry.shutdown().await;

    match result? {
        Some(hint) => println!("{}", hint.markdown),
        None => println!("No definition found for \"{word}\"."),
    }

    Ok(())
}
