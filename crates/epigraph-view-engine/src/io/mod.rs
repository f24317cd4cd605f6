use crate::models::EpigraphRecord;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid record {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid records directory: {0}")]
    InvalidRecordsDir(String),
}

/// Read and deserialize a JSON record
pub fn read_record(relative_path: &RelativePath, records_root: &Path) -> Result<EpigraphRecord, IoError> {
    load_record(&relative_path.to_path(records_root))
}

/// Read and deserialize a JSON record from anywhere on disk
pub fn load_record(path: &Path) -> Result<EpigraphRecord, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan for JSON record files, returned sorted and relative to `records_root`
pub fn scan_records(records_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_records_dir(records_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(records_root, &mut files)?;

    let mut relative: Vec<RelativePathBuf> = files
        .iter()
        .filter_map(|path| {
            let stripped = path.strip_prefix(records_root).ok()?;
            RelativePathBuf::from_path(stripped).ok()
        })
        .collect();
    relative.sort();
    Ok(relative)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir)?;

    for entry in entries {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_records_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidRecordsDir(format!(
            "records directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_records_dir};

    const RECORD: &str = r#"{"title": "T", "text": "<ab><lb n=\"1\"/>x</ab>"}"#;

    #[test]
    fn test_scan_finds_records_in_nested_directories() {
        let records_dir = create_test_records_dir();
        create_test_file(&records_dir, "b.json", RECORD);
        create_test_file(&records_dir, "sabaic/a.json", RECORD);
        create_test_file(&records_dir, "readme.md", "# not a record");

        let files = scan_records(records_dir.path()).unwrap();

        let names: Vec<_> = files.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["b.json", "sabaic/a.json"]);
    }

    #[test]
    fn test_handle_invalid_records_directory() {
        let result = scan_records(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidRecordsDir(_))));
        assert!(result.unwrap_err().to_string().contains("records directory"));
    }

    #[test]
    fn test_read_record_success() {
        let records_dir = create_test_records_dir();
        create_test_file(&records_dir, "one.json", RECORD);

        let record = read_record(RelativePath::new("one.json"), records_dir.path()).unwrap();
        assert_eq!(record.title.as_deref(), Some("T"));
        assert_eq!(record.text, r#"<ab><lb n="1"/>x</ab>"#);
    }

    #[test]
    fn test_read_record_not_found() {
        let records_dir = create_test_records_dir();
        let result = read_record(RelativePath::new("missing.json"), records_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_record_invalid_json() {
        let records_dir = create_test_records_dir();
        create_test_file(&records_dir, "broken.json", "{\"title\": ");

        let result = read_record(RelativePath::new("broken.json"), records_dir.path());
        let err = result.unwrap_err();
        assert!(matches!(err, IoError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_validate_records_dir_rejects_files() {
        let records_dir = create_test_records_dir();
        let file = create_test_file(&records_dir, "x.json", RECORD);
        assert!(validate_records_dir(records_dir.path()).is_ok());
        assert!(validate_records_dir(&file).is_err());
    }
}
