//! Todo data file load/save.
//!
//! Loading is fail-soft: a missing, unreadable or invalid file is treated as
//! an empty collection so first use is never blocked. Saving is fail-hard: a
//! write failure is returned to the caller and must not be dropped.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::item::Todo;

const TODOS_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/todos/v1.schema.json"
));

/// Persistence seam for the repository.
pub trait TodoStore {
    /// Load the full collection. Never fails; problems yield an empty list.
    fn load(&self) -> Vec<Todo>;
    /// Replace the persisted collection with `todos`.
    fn save(&self, todos: &[Todo]) -> Result<()>;
}

/// Store backed by a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TodoStore for JsonFileStore {
    fn load(&self) -> Vec<Todo> {
        load_todos(&self.path)
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        write_todos(&self.path, todos)
    }
}

/// Load todos, treating any failure as an empty collection.
pub fn load_todos(path: &Path) -> Vec<Todo> {
    if !path.exists() {
        debug!(path = %path.display(), "todo file missing, starting empty");
        return Vec::new();
    }
    match read_todos(path) {
        Ok(todos) => {
            debug!(path = %path.display(), count = todos.len(), "todos loaded");
            todos
        }
        Err(err) => {
            warn!(path = %path.display(), error = %format!("{err:#}"), "ignoring unreadable todo file");
            Vec::new()
        }
    }
}

/// Strict load: read, parse, schema-check and deserialize.
pub fn read_todos(path: &Path) -> Result<Vec<Todo>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read todos {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse todos {}", path.display()))?;
    if value.is_null() {
        return Ok(Vec::new());
    }
    validate_schema(&value).with_context(|| format!("validate todos {}", path.display()))?;
    serde_json::from_value(value).with_context(|| format!("deserialize todos {}", path.display()))
}

/// Atomically replace the todo file (temp file + rename).
pub fn write_todos(path: &Path, todos: &[Todo]) -> Result<()> {
    debug!(path = %path.display(), count = todos.len(), "writing todos");
    let mut buf = serde_json::to_string_pretty(todos).context("serialize todos")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = temp_path(path);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp todos {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace todos {}", path.display()))?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn validate_schema(todos: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(TODOS_SCHEMA).context("parse todos schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(todos) {
        let messages = compiled
            .iter_errors(todos)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "todos schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
