use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` / `.yml` are YAML, everything else is treated as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

pub fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content).context("Failed to parse JSON"),
        DocumentFormat::Yaml => serde_saphyr::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse YAML: {}", e)),
    }
}

/// Read and parse a JSON or YAML file
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_document(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("Invalid document {}", path.display()))
}

/// Read from a file path, or JSON from stdin when `source` is "-"
pub fn read_source<T: DeserializeOwned>(source: &str) -> Result<T> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        parse_document(&content, DocumentFormat::Json).context("Invalid document on stdin")
    } else {
        read_document(Path::new(source))
    }
}
