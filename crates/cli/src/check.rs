use dircontainer_api::{ExtensionSet, LibraryEntry, ResolverConfig};
use dircontainer_core::entries_differ;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

/// Returns `true` when the directory no longer matches the baseline.
pub fn run(
    dir: PathBuf,
    extensions: &str,
    baseline: PathBuf,
) -> Result<bool, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&baseline)?;
    let cached: Vec<LibraryEntry> = serde_json::from_str(&content)?;

    let config = ResolverConfig::new(crate::normalize_path(&dir)?, ExtensionSet::parse(extensions));
    let fresh = dircontainer_core::resolve(&config);

    if !entries_differ(&cached, &fresh) {
        println!("Up to date ({} entries).", fresh.len());
        return Ok(false);
    }

    info!(
        "Baseline {} is stale for {}",
        baseline.display(),
        config.directory().display()
    );
    println!("Stale: {} cached, {} on disk.", cached.len(), fresh.len());

    let cached_set: HashSet<&LibraryEntry> = cached.iter().collect();
    let fresh_set: HashSet<&LibraryEntry> = fresh.iter().collect();
    for entry in fresh.iter().filter(|e| !cached_set.contains(e)) {
        println!("  + {}", entry.archive_path().display());
    }
    for entry in cached.iter().filter(|e| !fresh_set.contains(e)) {
        println!("  - {}", entry.archive_path().display());
    }

    Ok(true)
}
