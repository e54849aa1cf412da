use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::sidebar::MemoryHost;

/// Extensions picked up when loading a notes directory
const NOTE_EXTENSIONS: &[&str] = &["md", "txt"];

/// Error type for reading notes
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load every `*.md` / `*.txt` file directly inside `dir` into a fresh
/// in-memory host, most recently modified first (ties by file name). Files
/// are only read.
pub fn load_workspace(dir: &Path) -> Result<MemoryHost, WorkspaceError> {
    if !dir.is_dir() {
        return Err(WorkspaceError::NotADirectory(dir.to_path_buf()));
    }
    let read_err = |path: &Path, source| WorkspaceError::ReadError {
        path: path.to_path_buf(),
        source,
    };

    let paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| read_err(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_note_file(p))
        .collect();

    let mut notes = Vec::with_capacity(paths.len());
    for path in paths {
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| read_err(&path, e))?;
        notes.push((path, DateTime::<Utc>::from(modified)));
    }
    notes.sort_by(|(pa, ma), (pb, mb)| mb.cmp(ma).then_with(|| pa.cmp(pb)));

    let mut host = MemoryHost::new();
    for (path, modified) in &notes {
        let content = fs::read_to_string(path).map_err(|e| read_err(path, e))?;
        let name = note_name(path);
        debug!(path = %path.display(), %modified, "loaded note");
        host.insert_modified(&name, &content, *modified);
    }
    info!(dir = %dir.display(), count = notes.len(), "loaded workspace");
    Ok(host)
}

/// Read one document from a path, or from stdin when the path is absent or `-`
pub fn read_document(path: Option<&Path>) -> Result<String, WorkspaceError> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).map_err(|source| WorkspaceError::ReadError {
                path: p.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| WorkspaceError::ReadError {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| NOTE_EXTENSIONS.contains(&ext))
}

/// Display name: the file stem
fn note_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
