//! Cache maintenance commands

use std::path::Path;

use crate::{storage::PlayerDatabase, Result};

/// Empty both cache tables and report how many rows were dropped.
pub fn handle_clear_cache(db_path: &Path) -> Result<()> {
    let mut db = PlayerDatabase::open(db_path)?;
    let before = db.counts()?;
    db.clear_all_data()?;

    println!(
        "✓ Cleared {} player snapshot(s) and {} season histories from {}",
        before.players,
        before.season_histories,
        db_path.display()
    ); // tarpaulin::skip
    Ok(())
}
