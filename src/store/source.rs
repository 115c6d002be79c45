//! Line sources backed by a file or by text already in memory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ImportError, ImportResult};

use super::traits::LineSource;

/// Reads lines from a UTF-8 file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the file at `path`. The file is opened on read.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LineSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> ImportResult<Vec<String>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| ImportError::SourceUnavailable {
                source_name: self.describe(),
                message: e.to_string(),
            })?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// Serves lines from an in-memory string, e.g. an HTTP request body.
#[derive(Debug, Clone)]
pub struct TextSource {
    name: String,
    text: String,
}

impl TextSource {
    /// Creates a source named `name` over `text`.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl LineSource for TextSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read_lines(&self) -> ImportResult<Vec<String>> {
        Ok(self.text.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_source_reads_lines_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "M00001,Doe,Jane,01/01/2020,3000\r\nX\n").unwrap();

        let lines = FileSource::new(file.path()).read_lines().unwrap();
        assert_eq!(lines, vec!["M00001,Doe,Jane,01/01/2020,3000", "X"]);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let source = FileSource::new("/nonexistent/employes.csv");
        match source.read_lines() {
            Err(ImportError::SourceUnavailable { source_name, .. }) => {
                assert_eq!(source_name, "/nonexistent/employes.csv");
            }
            other => panic!("Expected SourceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_text_source() {
        let source = TextSource::new("inline", "a\nb\n");
        assert_eq!(source.describe(), "inline");
        assert_eq!(source.read_lines().unwrap(), vec!["a", "b"]);
    }
}
