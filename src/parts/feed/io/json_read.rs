use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::parts::feed::error::{Result, ToolError};
use crate::parts::feed::model::FeedDocument;

/// File name suffix that marks a vendor document.
pub const JSON_SUFFIX: &str = ".json";

/// Lists the vendor documents inside `folder`, sorted by file name so runs
/// over the same folder always visit files in the same order.
pub fn json_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ToolError::MissingInput(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        let is_json = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(JSON_SUFFIX));
        if is_json && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|lhs, rhs| lhs.file_name().cmp(&rhs.file_name()));
    Ok(files)
}

/// Lazy sequence of parsed documents. A file is only read when the iterator
/// reaches it, so callers can stop early without touching the rest.
#[derive(Debug)]
pub struct JsonFolder {
    files: std::vec::IntoIter<PathBuf>,
}

impl JsonFolder {
    pub fn open(folder: &Path) -> Result<Self> {
        let files = json_files(folder)?;
        debug!(folder = %folder.display(), file_count = files.len(), "enumerated input files");
        Ok(Self {
            files: files.into_iter(),
        })
    }
}

impl Iterator for JsonFolder {
    type Item = (PathBuf, Result<FeedDocument>);

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.files.next()?;
        let loaded = load_document(&path);
        Some((path, loaded))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.files.size_hint()
    }
}

/// Reads and parses one vendor document.
pub fn load_document(path: &Path) -> Result<FeedDocument> {
    let source = fs::read_to_string(path)?;
    let json: Value = serde_json::from_str(&source)?;
    parse_document(path, json)
}

/// Validates the top-level shape of `json` and converts it into a typed
/// [`FeedDocument`]. Any mismatch is reported as [`ToolError::InvalidShape`].
pub fn parse_document(path: &Path, json: Value) -> Result<FeedDocument> {
    check_shape(&json).map_err(|reason| invalid_shape(path, reason))?;
    serde_json::from_value(json).map_err(|err| invalid_shape(path, err.to_string()))
}

fn check_shape(json: &Value) -> std::result::Result<(), String> {
    let Value::Object(root) = json else {
        return Err("expected a JSON object".into());
    };

    match root.get("vehicle") {
        Some(Value::Object(vehicle)) if vehicle.contains_key("name") => {}
        Some(Value::Object(_)) => return Err("vehicle has no name".into()),
        Some(_) => return Err("vehicle is not an object".into()),
        None => return Err("missing vehicle".into()),
    }

    match root.get("categories") {
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err("categories is not a list".into()),
        None => Err("missing categories".into()),
    }
}

fn invalid_shape(path: &Path, reason: String) -> ToolError {
    ToolError::InvalidShape {
        path: path.to_path_buf(),
        reason,
    }
}
