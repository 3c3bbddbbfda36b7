use anyhow::{Context, Result};
use dotpath::v1::WildcardResolver;
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::input::{read_document, to_json};

/// How resolved paths are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// One path per line
    Lines,
    /// A JSON array of paths
    Json,
    /// A JSON object of path -> value
    Values,
}

pub fn run(
    input: Option<PathBuf>,
    pattern: Option<String>,
    output: Output,
    pretty: bool,
) -> Result<()> {
    let doc = read_document(input.as_ref())?;
    let rendered = render(&doc, pattern.as_deref(), output, pretty)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

fn render(doc: &Value, pattern: Option<&str>, output: Output, pretty: bool) -> Result<String> {
    let resolver = WildcardResolver::new();
    let describe = || format!("Failed to resolve {:?}", pattern.unwrap_or("*"));

    match output {
        Output::Lines => {
            let paths = resolver.resolve(doc, pattern).with_context(describe)?;
            Ok(paths.join("\n"))
        }
        Output::Json => {
            let paths = resolver.resolve(doc, pattern).with_context(describe)?;
            to_json(&paths, pretty)
        }
        Output::Values => {
            let selected = resolver.select(doc, pattern).with_context(describe)?;
            let map: Map<String, Value> = selected
                .into_iter()
                .map(|(path, value)| (path, value.clone()))
                .collect();
            to_json(&map, pretty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "users": [
                {"id": 1, "name": "Ann"},
                {"id": 2}
            ]
        })
    }

    #[test]
    fn test_render_lines() {
        let out = render(&doc(), Some("users.*.id"), Output::Lines, false).unwrap();
        assert_eq!(out, "users.0.id\nusers.1.id");
    }

    #[test]
    fn test_render_lines_no_match_is_empty() {
        let out = render(&doc(), Some("users.*.email"), Output::Lines, false).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_json() {
        let out = render(&doc(), Some("users.*.name"), Output::Json, false).unwrap();
        assert_eq!(out, r#"["users.0.name"]"#);
    }

    #[test]
    fn test_render_values() {
        let out = render(&doc(), Some("users.*.id"), Output::Values, false).unwrap();
        assert_eq!(out, r#"{"users.0.id":1,"users.1.id":2}"#);
    }

    #[test]
    fn test_render_all_leaves_without_pattern() {
        let out = render(&doc(), None, Output::Lines, false).unwrap();
        assert_eq!(out, "users.0.id\nusers.0.name\nusers.1.id");
    }

    #[test]
    fn test_render_invalid_pattern() {
        let err = render(&doc(), Some("users."), Output::Lines, false).unwrap_err();
        assert!(format!("{:#}", err).contains("can not end with"));
    }

    #[test]
    fn test_run_with_temp_file() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"a": {{"x": {{"id": 1}}}}}}"#).unwrap();
        f.flush().unwrap();
        assert!(
            run(
                Some(f.path().to_path_buf()),
                Some("a.*.id".into()),
                Output::Lines,
                false
            )
            .is_ok()
        );
    }
}
