use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Read a JSON document from `input`, or from stdin when it is absent or `-`.
pub fn read_document(input: Option<&PathBuf>) -> Result<Value> {
    let (content, source) = match input {
        Some(path) if path != Path::new("-") => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            (content, format!("{:?}", path))
        }
        _ => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            (buf, "stdin".to_string())
        }
    };

    tracing::debug!(source = %source, bytes = content.len(), "read document");
    parse_document(&content).with_context(|| format!("Failed to parse {}", source))
}

fn parse_document(content: &str) -> Result<Value> {
    Ok(serde_json::from_str(content)?)
}

/// Serialize `value` as compact or pretty JSON.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
