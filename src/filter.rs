use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

use crate::constants::CANDIDATE_SUFFIXES;
use crate::error::Result;

/// Builds the glob set matching files that must carry a path header.
///
/// The suffixes are fixed; anything else is skipped without ever being
/// opened.
pub fn candidate_globset() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for suffix in CANDIDATE_SUFFIXES {
        let pattern = format!("**/*{suffix}");
        debug!("Adding candidate pattern: {pattern} to globset");
        builder.add(Glob::new(&pattern)?);
    }
    Ok(builder.build()?)
}
