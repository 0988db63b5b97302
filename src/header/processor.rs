use globset::GlobSet;
use std::path::Path;

use crate::constants::HEADER_COMMENT_PREFIX;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::read_file_to_string;

use super::operation::HeaderOperation;

pub struct HeaderProcessor<'a, P: AsRef<Path>> {
    /// Dependencies
    candidates: &'a GlobSet,

    /// Other
    base_dir: P,
}

impl<'a, P: AsRef<Path>> HeaderProcessor<'a, P> {
    pub fn new(base_dir: P, candidates: &'a GlobSet) -> Self {
        Self { candidates, base_dir }
    }

    /// Computes the header line expected at the top of `file_path`.
    ///
    /// The line names the base directory by its final component and the file
    /// by its path relative to the base directory, with forward slashes on
    /// every platform.
    ///
    /// # Arguments
    /// * `file_path` - Path of an existing file under the base directory
    ///
    /// # Returns
    /// * `Result<String>` - The expected header line, or an error when the
    ///   file lies outside the base directory or its path is not valid
    ///   Unicode
    ///
    /// # Examples
    ///
    /// A file at `a/b/c.hpp` under a base directory named `source` expects
    /// the header `// source/a/b/c.hpp`.
    pub fn expected_header(&self, file_path: &Path) -> Result<String> {
        let base_dir = self.base_dir.as_ref();
        let abs_file = file_path.canonicalize()?;
        let abs_base = base_dir.canonicalize()?;

        let rel_path =
            abs_file.strip_prefix(&abs_base).map_err(|e| Error::ProcessError {
                source_path: file_path.display().to_string(),
                e: e.to_string(),
            })?;
        let rel_path =
            rel_path.to_str_checked()?.replace(std::path::MAIN_SEPARATOR, "/");

        let base_name = abs_base
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| base_dir.display().to_string());

        Ok(format!("{HEADER_COMMENT_PREFIX} {base_name}/{rel_path}"))
    }

    /// Decides what to do with a single walked file.
    ///
    /// Non-candidate files are skipped without being opened. For candidates,
    /// the whitespace-trimmed first line is compared against the expected
    /// header; on mismatch (including an empty file) the returned operation
    /// carries the full rewritten content: header line, one blank line, then
    /// the original content unchanged.
    ///
    /// # Arguments
    /// * `file_path` - The file to inspect, as produced by the walk
    ///
    /// # Returns
    /// * `Result<HeaderOperation>` - The operation to perform
    pub fn process(&self, file_path: &Path) -> Result<HeaderOperation> {
        if !self.candidates.is_match(file_path) {
            return Ok(HeaderOperation::Skip { source: file_path.to_path_buf() });
        }

        let expected = self.expected_header(file_path)?;
        log::debug!("Expected header for '{}': {expected}", file_path.display());

        let content = read_file_to_string(file_path)?;
        match content.lines().next() {
            Some(first_line) if first_line.trim() == expected => {
                Ok(HeaderOperation::Keep { source: file_path.to_path_buf() })
            }
            _ => Ok(HeaderOperation::Rewrite {
                target: file_path.to_path_buf(),
                content: format!("{expected}\n\n{content}"),
            }),
        }
    }
}
