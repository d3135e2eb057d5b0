use crate::error::Result;
use crate::filesystem::Entry;
use std::collections::HashMap;

/// Key assigned to names that contain no `.` at all.
pub const NO_EXTENSION_KEY: &str = "noext";

/// All filenames observed under one extension key.
///
/// `members` keeps insertion order; the presenter sorts both the groups and
/// their members before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGroup {
    pub extension: String,
    pub members: Vec<String>,
}

/// Extension key of a filename under the last-dot rule.
///
/// The key is the substring strictly after the last `.`, which is empty for
/// names ending in a dot and is the whole remainder for dotfiles like
/// `.gitignore` (whose last dot sits at position 0). Names without any dot
/// map to [`NO_EXTENSION_KEY`].
pub fn extension_key(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => NO_EXTENSION_KEY,
    }
}

/// Fold a stream of directory entries into extension groups.
///
/// Directories are never grouped, and dot-prefixed names are skipped unless
/// `show_hidden` is set. Every surviving entry lands in exactly one group,
/// with groups created lazily on first sight of their key. The returned
/// order is unspecified.
pub fn group_entries<I>(entries: I, show_hidden: bool) -> Result<Vec<ExtensionGroup>>
where
    I: IntoIterator<Item = Result<Entry>>,
{
    let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
    for entry in entries {
        let entry = entry?;
        if entry.is_dir {
            continue;
        }
        if !show_hidden && entry.name.starts_with('.') {
            continue;
        }
        let key = extension_key(&entry.name);
        buckets.entry(key.to_owned()).or_default().push(entry.name);
    }
    Ok(buckets
        .into_iter()
        .map(|(extension, members)| ExtensionGroup { extension, members })
        .collect())
}
