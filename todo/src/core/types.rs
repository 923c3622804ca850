//! Shared types passed between the repository and the presentation surfaces.

use crate::item::Todo;

/// Kind of mutation that was applied to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added,
    Edited,
    Removed,
    Checked,
    Unchecked,
}

/// Result of a mutating operation.
///
/// Presentation (messages, menu redisplay) is decided by the caller; the
/// repository only reports what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The change was applied and persisted. `id` is the position the change
    /// targeted (for `Removed`, the position the item occupied before removal).
    Applied { change: Change, id: usize },
    /// The id was out of range or not a number. Nothing was mutated or saved.
    InvalidId,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }
}

/// A mutating request built by either surface (one-shot or interactive).
///
/// `id` is `None` when the user-supplied text did not parse as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add {
        title: String,
        body: String,
    },
    Edit {
        id: Option<i64>,
        title: String,
        body: String,
    },
    Remove {
        id: Option<i64>,
    },
    Check {
        id: Option<i64>,
    },
    Uncheck {
        id: Option<i64>,
    },
}

/// An item as reported by `list`, paired with its current positional id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedTodo<'a> {
    pub id: usize,
    pub todo: &'a Todo,
}
