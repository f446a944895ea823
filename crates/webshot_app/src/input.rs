//! Work-item source: the newline-delimited URL listing on disk.

use std::fs;
use std::io;
use std::path::Path;

use webshot_core::{parse_work_items, WorkItem};

/// Reads and parses the URL listing. A missing or unreadable file is the
/// fatal tier of error handling; the caller aborts before any batch starts.
pub fn read_work_items(path: &Path) -> io::Result<Vec<WorkItem>> {
    let raw = fs::read_to_string(path)?;
    Ok(parse_work_items(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_trimmed_non_blank_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("urls.txt");
        fs::write(&path, "https://a.example \n\n  https://b.example\n").unwrap();

        let items = read_work_items(&path).unwrap();
        assert_eq!(items, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = read_work_items(&temp.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
