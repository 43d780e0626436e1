use std::path::PathBuf;
use std::time::SystemTime;

/// An eligible `.txt` file found in the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Last-modified time, `None` when the platform or filesystem can't report it
    pub modified: Option<SystemTime>,
}
