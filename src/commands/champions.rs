//! Champion catalog command

use std::time::Duration;

use crate::{commands::common::load_catalog, config::Endpoints, riot::CatalogStatus, Result};

/// Load the champion catalog and print its version and size.
pub async fn handle_champions(endpoints: &Endpoints, timeout: Duration) -> Result<()> {
    println!("Loading champion catalog...");
    let catalog = load_catalog(endpoints, timeout).await?;

    match catalog.status() {
        CatalogStatus::Loaded => println!(
            "✓ {} champions loaded (Data Dragon {})",
            catalog.len(),
            catalog.version()
        ),
        CatalogStatus::Degraded(reason) => println!(
            "⚠ Champion catalog unavailable, using fallback version {}: {}",
            catalog.version(),
            reason
        ),
    }
    Ok(())
}
