//! Whole-file reads and writes for Markdown documents.

use std::fs;
use std::path::Path;

use crate::error::{FileError, FileOp};

/// Extensions offered by the open-file filter.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

pub fn load(path: &Path) -> Result<String, FileError> {
    tracing::debug!("Loading {}", path.display());
    fs::read_to_string(path).map_err(|source| FileError {
        op: FileOp::Load,
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(path: &Path, content: &str) -> Result<(), FileError> {
    write(FileOp::Save, path, content)
}

/// Same as [`save`]; reported as an export in errors.
pub fn export(path: &Path, content: &str) -> Result<(), FileError> {
    write(FileOp::Export, path, content)
}

fn write(op: FileOp, path: &Path, content: &str) -> Result<(), FileError> {
    tracing::debug!("Writing {} bytes to {} ({})", content.len(), path.display(), op);
    fs::write(path, content).map_err(|source| FileError {
        op,
        path: path.to_path_buf(),
        source,
    })
}

pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        save(&path, "# Notes\n\nПривет").unwrap();
        assert_eq!(load(&path).unwrap(), "# Notes\n\nПривет");
    }

    #[test]
    fn export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        fs::write(&path, "old").unwrap();
        export(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn errors_name_the_operation() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.md");

        let err = load(&missing).unwrap_err();
        assert_eq!(err.op, FileOp::Load);
        assert!(err.to_string().starts_with("Failed to load file "), "{err}");
        assert!(err.to_string().contains("missing.md"), "{err}");

        let nowhere = dir.path().join("no-such-dir").join("out.md");
        assert_eq!(save(&nowhere, "x").unwrap_err().op, FileOp::Save);
        let err = export(&nowhere, "x").unwrap_err();
        assert!(err.to_string().starts_with("Failed to export file "), "{err}");
    }

    #[test]
    fn markdown_extensions() {
        assert!(is_markdown_path(Path::new("a.md")));
        assert!(is_markdown_path(Path::new("b.MARKDOWN")));
        assert!(is_markdown_path(Path::new("c.txt")));
        assert!(!is_markdown_path(Path::new("d.pdf")));
        assert!(!is_markdown_path(Path::new("README")));
    }
}
