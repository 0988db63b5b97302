use std::path::PathBuf;

/// The per-file outcome decided by the header processor.
#[derive(Debug)]
pub enum HeaderOperation {
    /// First line already carries the expected header; the file stays untouched.
    Keep { source: PathBuf },
    /// Header must be inserted; `content` is the full rewritten file.
    Rewrite { target: PathBuf, content: String },
    /// Not a candidate file; never opened.
    Skip { source: PathBuf },
}

impl HeaderOperation {
    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            HeaderOperation::Keep { source } => {
                format!("{}[OK] {}", prefix, source.display())
            }
            HeaderOperation::Rewrite { target, .. } => {
                format!("{}[FIXED] {}", prefix, target.display())
            }
            HeaderOperation::Skip { source } => {
                format!("{}Skipping '{}' (not a candidate file)", prefix, source.display())
            }
        }
    }
}
