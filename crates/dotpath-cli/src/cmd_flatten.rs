use anyhow::Result;
use dotpath::v1::flatten;
use std::path::PathBuf;

use crate::input::{read_document, to_json};

pub fn run(input: Option<PathBuf>, pretty: bool) -> Result<()> {
    let doc = read_document(input.as_ref())?;
    let flat = flatten(&doc);
    tracing::debug!(leaves = flat.len(), "flattened document");
    println!("{}", to_json(&flat, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_run_with_temp_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"a": [1, {{"b": null}}]}}"#).unwrap();
        f.flush().unwrap();
        assert!(run(Some(f.path().to_path_buf()), false).is_ok());
    }

    #[test]
    fn test_run_invalid_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not json").unwrap();
        f.flush().unwrap();
        assert!(run(Some(f.path().to_path_buf()), false).is_err());
    }
}
