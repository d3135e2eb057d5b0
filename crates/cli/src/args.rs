use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Unknown argument: {0}")]
    Unrecognized(String),
}

/// Parsed command-line surface.
///
/// The flags are single-dash multi-character tokens (`-dir`, `-hidden`),
/// which clap's grammar cannot express, so parsing is a plain left-to-right
/// scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Target directory (`-dir <path>`, last occurrence wins).
    pub dir: PathBuf,
    /// Include dot-prefixed entries (`-hidden`).
    pub hidden: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            hidden: false,
        }
    }
}

impl Args {
    /// Parse the arguments following the program name.
    ///
    /// # Errors
    ///
    /// Any token that is not `-dir <path>` or `-hidden`, including a `-dir`
    /// with no value after it, is [`ArgsError::Unrecognized`].
    pub fn parse_from<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(token) = args.next() {
            match token.as_str() {
                "-dir" => match args.next() {
                    Some(value) => parsed.dir = PathBuf::from(value),
                    None => return Err(ArgsError::Unrecognized(token)),
                },
                "-hidden" => parsed.hidden = true,
                _ => return Err(ArgsError::Unrecognized(token)),
            }
        }
        Ok(parsed)
    }
}
