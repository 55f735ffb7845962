//! Reading and parsing the document under validation.
//!
//! YAML is the default syntax (it also accepts most JSON); files ending in
//! `.json` go through `serde_json` directly. Both produce an
//! order-preserving `serde_json::Value`, so object keys keep their declared
//! order through traversal.
//!
//! YAML merge keys (`<<: *anchor`) are expanded before conversion. Scalar
//! mapping keys become strings (`1` → `"1"`); sequence or mapping keys are
//! rejected.

use crate::error::{LintError, Result};
use serde_json::Value as Json;
use serde_yaml::Value as Yaml;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the parser from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Read and parse a document from disk.
pub fn load_document(path: &Path) -> Result<Json> {
    let text = fs::read_to_string(path).map_err(|source| LintError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DocumentFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, bytes = text.len(), "loaded document");
    parse_document(&text, format, path)
}

/// Parse document text; `origin` is only used in error messages.
pub fn parse_document(text: &str, format: DocumentFormat, origin: &Path) -> Result<Json> {
    let parsed = match format {
        DocumentFormat::Json => serde_json::from_str::<Json>(text).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => parse_yaml(text),
    };
    parsed.map_err(|message| LintError::Parse {
        path: origin.to_path_buf(),
        message,
    })
}

fn parse_yaml(text: &str) -> std::result::Result<Json, String> {
    let mut value: Yaml = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
    value.apply_merge().map_err(|e| e.to_string())?;
    yaml_to_json(value)
}

fn yaml_key(key: Yaml) -> std::result::Result<String, String> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => {
            Err("mapping keys must be scalars, found a sequence or mapping".to_string())
        }
    }
}

fn yaml_to_json(value: Yaml) -> std::result::Result<Json, String> {
    let json = match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Json::from(i)
            } else if let Some(u) = n.as_u64() {
                Json::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Json::Number)
                    .unwrap_or(Json::Null)
            }
        }
        Yaml::String(s) => Json::String(s),
        Yaml::Sequence(items) => Json::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<std::result::Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = serde_json::Map::with_capacity(mapping.len());
            for (k, v) in mapping {
                map.insert(yaml_key(k)?, yaml_to_json(v)?);
            }
            Json::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    };
    Ok(json)
}
