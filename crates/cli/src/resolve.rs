use dircontainer_api::{ExtensionSet, LibraryEntry, ResolverConfig};
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::{info, warn};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Archive")]
    archive: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn run(dir: PathBuf, extensions: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ResolverConfig::new(crate::normalize_path(&dir)?, ExtensionSet::parse(extensions));
    if config.is_permissive() {
        warn!("No extensions configured, every file in the directory is included");
    }

    let entries = dircontainer_core::resolve(&config);
    info!(
        "Resolved {} entries from {}",
        entries.len(),
        config.directory().display()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_entries(&entries);
    }

    Ok(())
}

pub(crate) fn print_entries(entries: &[LibraryEntry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow {
            archive: e.archive_path().display().to_string(),
            source: e
                .source_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    println!("{}", Table::new(rows));
}
