use crate::{
    cli::Args,
    error::{Error, Result},
    filter::candidate_globset,
    header::{HeaderOperation, HeaderProcessor},
    ioutils::write_file,
};
use walkdir::WalkDir;

/// Walks the base directory and enforces the path header on every candidate
/// file.
///
/// Processing is strictly sequential; the first error aborts the remaining
/// walk.
pub fn run(args: Args) -> Result<()> {
    let base_dir = &args.base_dir;
    if !base_dir.is_dir() {
        return Err(Error::BaseDirDoesNotExistError {
            base_dir: base_dir.display().to_string(),
        });
    }

    let candidates = candidate_globset()?;
    let processor = HeaderProcessor::new(base_dir, &candidates);

    let mut fixed_count: usize = 0;
    let mut ok_count: usize = 0;

    for dir_entry in WalkDir::new(base_dir) {
        let entry = dir_entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let operation = processor.process(entry.path())?;
        match &operation {
            HeaderOperation::Rewrite { target, content } => {
                if !args.dry_run {
                    write_file(content, target)?;
                }
                fixed_count += 1;
                println!("{}", operation.get_message(args.dry_run));
            }
            HeaderOperation::Keep { .. } => {
                ok_count += 1;
                println!("{}", operation.get_message(args.dry_run));
            }
            HeaderOperation::Skip { .. } => {
                log::debug!("{}", operation.get_message(args.dry_run));
            }
        }
    }

    println!(
        "Header check completed in '{}' ({} fixed, {} ok).",
        base_dir.display(),
        fixed_count,
        ok_count
    );
    Ok(())
}
