//! File name rules deciding which directory entries become library entries.

use dircontainer_api::{ExtensionSet, SourceLocator};

/// Split `name` at its last `.` into `(base, ext)`.
///
/// Returns `None` for names without a dot or with nothing after the last dot.
/// Only the final dot counts, so `foo.release.jar` splits into
/// `("foo.release", "jar")`.
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    let idx = name.rfind('.')?;
    let ext = &name[idx + 1..];
    if ext.is_empty() {
        return None;
    }
    Some((&name[..idx], ext))
}

/// Inclusion filter for a single file name.
///
/// Source archives (as recognised by `locator`) are never primary entries.
/// An empty extension set accepts every extension.
pub fn accepts(name: &str, extensions: &ExtensionSet, locator: &dyn SourceLocator) -> bool {
    let Some((base, ext)) = split_extension(name) else {
        return false;
    };

    if locator.is_source_stem(base) {
        return false;
    }

    extensions.is_empty() || extensions.contains(&ext.to_lowercase())
}
