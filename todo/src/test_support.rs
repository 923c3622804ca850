//! Test-only helpers: fixtures, an in-memory store and scratch directories.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tempfile::TempDir;

use crate::io::store::{TodoStore, load_todos, write_todos};
use crate::item::Todo;

/// Create a todo with explicit completion state.
pub fn todo(title: &str, body: &str, completed: bool) -> Todo {
    Todo {
        title: title.to_string(),
        body: body.to_string(),
        completed,
    }
}

/// Store that keeps the last saved collection in memory and counts saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RefCell<Vec<Todo>>,
    saves: Cell<usize>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: RefCell::new(todos),
            ..Self::default()
        }
    }

    /// Store whose every save fails, simulating a write error.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }
}

impl TodoStore for MemoryStore {
    fn load(&self) -> Vec<Todo> {
        self.snapshot()
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        if self.fail_saves {
            return Err(anyhow!("simulated write failure"));
        }
        *self.todos.borrow_mut() = todos.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Scratch working directory holding a `todos.json` for CLI tests.
pub struct TodoDir {
    temp: TempDir,
}

impl TodoDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn data_file(&self) -> PathBuf {
        self.temp.path().join("todos.json")
    }

    pub fn write_todos(&self, todos: &[Todo]) -> Result<()> {
        write_todos(&self.data_file(), todos)
    }

    pub fn read_todos(&self) -> Vec<Todo> {
        load_todos(&self.data_file())
    }
}
