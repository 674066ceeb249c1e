//! Reading problems from files and directories

use super::{LoadError, LoadResult, TriangleProblem};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load a single problem from a JSON file
pub fn load_problem<P: AsRef<Path>>(path: P) -> LoadResult<TriangleProblem> {
    let contents = read(path.as_ref())?;

    serde_json::from_str(&contents).map_err(|e| LoadError::ParseError(e.to_string()))
}

/// Load problems from a directory of `*.json` files or from one file
///
/// A directory is read in file-name order; files that fail to load are
/// skipped with a warning. A file may hold either a single problem or an
/// array of problems.
pub fn load_problems<P: AsRef<Path>>(path: P) -> LoadResult<Vec<TriangleProblem>> {
    let path = path.as_ref();

    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

fn load_file(path: &Path) -> LoadResult<Vec<TriangleProblem>> {
    let contents = read(path)?;

    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| LoadError::ParseError(e.to_string()))?;

    let problems: Result<Vec<TriangleProblem>, serde_json::Error> = if value.is_array() {
        serde_json::from_value(value)
    } else if value.is_object() {
        serde_json::from_value::<TriangleProblem>(value).map(|p| vec![p])
    } else {
        return Err(LoadError::InvalidFormat(format!(
            "{}: expected a problem object or array, found {}",
            path.display(),
            json_kind(&value)
        )));
    };

    let problems = problems.map_err(|e| LoadError::ParseError(e.to_string()))?;
    debug!(path = %path.display(), count = problems.len(), "loaded problems");

    Ok(problems)
}

fn load_dir(dir: &Path) -> LoadResult<Vec<TriangleProblem>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in fs::read_dir(dir)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", dir.display(), e)))?
    {
        let entry = entry.map_err(|e| LoadError::FileNotFound(e.to_string()))?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }

    paths.sort();

    let mut problems = Vec::new();
    for path in paths {
        match load_file(&path) {
            Ok(mut loaded) => problems.append(&mut loaded),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping problem file"),
        }
    }

    Ok(problems)
}

fn read(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", path.display(), e)))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
