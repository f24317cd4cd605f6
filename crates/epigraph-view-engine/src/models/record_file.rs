use relative_path::{RelativePath, RelativePathBuf};

/// A record file under the records directory, with a display-friendly name.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl RecordFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = {
            let path_str = relative_path.as_str();
            path_str.strip_suffix(".json").unwrap_or(path_str).to_string()
        };
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Relative path without the `.json` extension.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl From<RelativePathBuf> for RecordFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for RecordFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
