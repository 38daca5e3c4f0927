use std::{fs, io, path::Path};

use walkdir::WalkDir;

use crate::error::InstallError;

/// Recursively copy the directory `from` into a new directory `to`.
///
/// `to` must not exist yet; its missing parents are created. Symlinks in the source
/// are followed, so the copy holds plain files. The first failure aborts and whatever
/// was already copied stays in place. Returns the number of files copied.
pub fn copy_tree(from: &Path, to: &Path) -> Result<u64, InstallError> {
    let fail = |source: io::Error| InstallError::copy(from, to, source);

    let meta = fs::metadata(from).map_err(fail)?;
    if !meta.is_dir() {
        return Err(fail(io::Error::other(format!(
            "not a directory: '{}'",
            from.display()
        ))));
    }
    if fs::symlink_metadata(to).is_ok() {
        return Err(fail(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination already exists: '{}'", to.display()),
        )));
    }
    fs::create_dir_all(to).map_err(fail)?;

    let mut files = 0;
    for entry in WalkDir::new(from).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| fail(e.into()))?;
        // walkdir yields paths rooted at `from`
        let Ok(rel) = entry.path().strip_prefix(from) else {
            continue;
        };
        let dest = to.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .map_err(|e| InstallError::copy(entry.path(), &dest, e))?;
        } else {
            fs::copy(entry.path(), &dest)
                .map_err(|e| InstallError::copy(entry.path(), &dest, e))?;
            tracing::trace!(file = %rel.display(), "copied");
            files += 1;
        }
    }
    Ok(files)
}
