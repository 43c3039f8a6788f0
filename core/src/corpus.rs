use crate::error::{Error, Result};
use crate::index::IndexOptions;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every regular file reachable from `root`, sorted by path.
///
/// Symlinks are followed; walkdir reports links back to an ancestor, and those
/// are skipped. Any other walk failure (unreadable directory, dangling link)
/// follows `options.abort_on_document_read_error` like an unreadable document.
/// Sorting makes vocabulary dimensions reproducible regardless of the order the
/// file system hands entries back.
pub fn discover_documents<P: AsRef<Path>>(root: P, options: IndexOptions) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::Configuration(format!("{} is not a directory", root.display())));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                if let Some(ancestor) = err.loop_ancestor() {
                    tracing::warn!(path = %path.display(), ancestor = %ancestor.display(), "skipping symlink loop");
                    continue;
                }
                let source = io::Error::from(err);
                if !options.abort_on_document_read_error {
                    tracing::warn!(path = %path.display(), error = %source, "skipping unreadable entry");
                    continue;
                }
                return Err(Error::Indexing { path, source });
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Raw text of a document, for display.
pub fn read_document_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}
