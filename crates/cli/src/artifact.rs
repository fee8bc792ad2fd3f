use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Wrap a command result with a `meta` block naming the tool, command and params.
pub fn document(command: &str, params: Value, result: Value) -> Value {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    json!({
        "meta": {
            "tool": "kitegrid-cli",
            "version": kitegrid::VERSION,
            "code_rev": rev,
            "command": command,
            "params": params
        },
        "result": result
    })
}

/// Write `doc` as pretty JSON to `path`, creating parent directories.
pub fn write_json<P: AsRef<Path>>(path: P, doc: &Value) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Write to `out` when given, otherwise print to stdout.
pub fn emit(out: Option<&Path>, command: &str, params: Value, result: Value) -> Result<()> {
    let doc = document(command, params, result);
    match out {
        Some(path) => {
            let written = write_json(path, &doc)?;
            tracing::info!(path = %written.display(), "wrote artifact");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn document_carries_meta() {
        let doc = document("halo", json!({"edge": true}), json!([1, 2]));
        assert_eq!(doc["meta"]["tool"], "kitegrid-cli");
        assert_eq!(doc["meta"]["command"], "halo");
        assert_eq!(doc["meta"]["params"]["edge"], true);
        assert_eq!(doc["result"][1], 2);
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/grid.json");
        let doc = document("grid", json!({}), json!({"tiles": []}));
        let written = write_json(&path, &doc).unwrap();
        assert!(written.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(&written).unwrap()).unwrap();
        assert_eq!(parsed["meta"]["command"], "grid");
    }
}
