use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown document and return its content
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Write content to a markdown document
pub fn write_document(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(fs::write(path, content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.md");
        fs::write(&path, "# Test Content\n\nParagraph").unwrap();

        let content = read_document(&path).unwrap();
        assert_eq!(content, "# Test Content\n\nParagraph");
    }

    #[test]
    fn test_read_document_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_document(&dir.path().join("nonexistent.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_document_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folder").join("subfolder").join("new.md");
        let content = "# New File in Nested Folder";

        write_document(&path, content).unwrap();

        assert_eq!(read_document(&path).unwrap(), content);
        assert!(dir.path().join("folder").join("subfolder").is_dir());
    }

    #[test]
    fn test_write_document_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("existing.md");
        fs::write(&path, "# Original Content").unwrap();

        write_document(&path, "# Updated Content").unwrap();

        assert_eq!(read_document(&path).unwrap(), "# Updated Content");
    }
}
