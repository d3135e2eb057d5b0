use std::path::PathBuf;

/// Listing parameters consumed by [`crate::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Directory whose immediate children are listed.
    pub root: PathBuf,
    /// Include entries whose name starts with `.`.
    pub show_hidden: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            show_hidden: false,
        }
    }
}
