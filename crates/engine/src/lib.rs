// crates/engine/src/lib.rs

pub mod error;
pub mod filesystem;
pub mod grouping;
pub mod options;

use crate::error::Result;
use crate::grouping::ExtensionGroup;
use crate::options::ListOptions;

/// Enumerate the immediate children of `options.root` and group the
/// non-directory entries by extension key.
///
/// Groups come back in unspecified order; ordering is the presenter's
/// concern. A run over a directory with no qualifying entries returns an
/// empty vector, which is not an error.
///
/// # Errors
///
/// Returns [`error::EngineError::DirectoryUnavailable`] when the directory
/// cannot be opened or read.
pub fn run(options: &ListOptions) -> Result<Vec<ExtensionGroup>> {
    log::debug!(
        "listing {} (show_hidden={})",
        options.root.display(),
        options.show_hidden
    );
    let entries = filesystem::read_entries(&options.root)?;
    let groups = grouping::group_entries(entries, options.show_hidden)?;
    log::debug!("collected {} extension group(s)", groups.len());
    Ok(groups)
}
