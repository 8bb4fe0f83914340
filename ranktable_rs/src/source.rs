//! Dataset shape and the sources it is fetched from.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::LoadError;
use crate::record::json_kind;

/// The fetched document: tab identifier to record collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset(BTreeMap<String, Value>);

impl Dataset {
    /// Decode a dataset; the top level must be an object.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(LoadError::Shape {
                found: json_kind(&other),
            }),
        }
    }

    /// Record collection for `tab`. Missing, `null`, `false`, `0` and `""`
    /// entries count as no subset; an empty array is still a subset.
    pub fn subset(&self, tab: &str) -> Option<&Value> {
        self.0.get(tab).filter(|value| is_truthy(value))
    }

    pub fn tabs(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Something that can produce the dataset. Called once per render request;
/// nothing is cached between calls.
pub trait DataSource {
    fn fetch(&self) -> impl Future<Output = Result<Dataset, LoadError>>;
}

/// Dataset read from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Dataset, LoadError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Dataset::from_json(&text)
    }
}

impl DataSource for Dataset {
    async fn fetch(&self) -> Result<Dataset, LoadError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn rejects_non_object_documents() {
        let err = Dataset::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, LoadError::Shape { found: "array" }));

        let err = Dataset::from_json("{broken").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn falsy_subsets_are_absent() {
        let data = Dataset::from_value(json!({
            "byuser": [],
            "byeditors": null,
            "bybonus": false,
            "bysubrating": "",
            "weekly": 0,
        }))
        .unwrap();

        assert_eq!(data.subset("byuser"), Some(&json!([])));
        for tab in ["byeditors", "bybonus", "bysubrating", "weekly", "missing"] {
            assert_eq!(data.subset(tab), None, "{tab}");
        }
    }

    #[test]
    fn file_source_reads_each_fetch() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"byuser": [{{"id": "a"}}]}}"#).unwrap();
        let source = FileSource::new(file.path());

        let data = block_on(source.fetch()).unwrap();
        assert_eq!(data.tabs().collect::<Vec<_>>(), vec!["byuser"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("data.json"));
        let err = block_on(source.fetch()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("data.json"));
    }
}
