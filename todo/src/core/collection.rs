//! Ordered todo collection where position is the identifier.
//!
//! Ids are zero-based positions evaluated against the collection at call
//! time. Removing an item shifts every later item down by one, so an id shown
//! to the user earlier may refer to a different item afterwards.

use crate::core::filter::Filter;
use crate::core::types::{Change, ListedTodo, Outcome};
use crate::item::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new(items: Vec<Todo>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Todo> {
        self.items.get(id)
    }

    /// Map a raw id to a position: valid iff `0 <= id < len`.
    pub fn resolve(&self, id: i64) -> Option<usize> {
        let index = usize::try_from(id).ok()?;
        (index < self.items.len()).then_some(index)
    }

    pub fn add(&mut self, title: String, body: String) -> Outcome {
        self.items.push(Todo::new(title, body));
        Outcome::Applied {
            change: Change::Added,
            id: self.items.len() - 1,
        }
    }

    /// Replace title and body, leaving `completed` untouched.
    pub fn edit(&mut self, id: i64, title: String, body: String) -> Outcome {
        let Some(index) = self.resolve(id) else {
            return Outcome::InvalidId;
        };
        let item = &mut self.items[index];
        item.title = title;
        item.body = body;
        Outcome::Applied {
            change: Change::Edited,
            id: index,
        }
    }

    pub fn remove(&mut self, id: i64) -> Outcome {
        let Some(index) = self.resolve(id) else {
            return Outcome::InvalidId;
        };
        self.items.remove(index);
        Outcome::Applied {
            change: Change::Removed,
            id: index,
        }
    }

    /// Set (not toggle) the completion flag. Redundant calls still apply.
    pub fn set_completed(&mut self, id: i64, completed: bool) -> Outcome {
        let Some(index) = self.resolve(id) else {
            return Outcome::InvalidId;
        };
        self.items[index].completed = completed;
        let change = if completed {
            Change::Checked
        } else {
            Change::Unchecked
        };
        Outcome::Applied { change, id: index }
    }

    /// Items matching `filter` (absent means all), in collection order.
    pub fn list(&self, filter: Option<Filter>) -> Vec<ListedTodo<'_>> {
        let filter = filter.unwrap_or_default();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, todo)| filter.matches(todo))
            .map(|(id, todo)| ListedTodo { id, todo })
            .collect()
    }
}

/// Parse user-supplied id text. Anything that is not an integer yields `None`.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
