use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::LoadError;

pub(crate) fn parse_json<T: DeserializeOwned>(origin: &str, text: &str) -> Result<T, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&path.display().to_string(), &text)
}
