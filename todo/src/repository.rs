//! Todo repository: the in-memory collection plus its durable store.
//!
//! Every mutation that applies is followed by a full save. Invalid ids leave
//! both memory and disk untouched.

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::collection::TodoList;
use crate::core::filter::Filter;
use crate::core::types::{ListedTodo, Outcome, Request};
use crate::io::store::TodoStore;
use crate::item::Todo;

pub struct TodoRepository<S: TodoStore> {
    list: TodoList,
    store: S,
}

impl<S: TodoStore> TodoRepository<S> {
    /// Load the collection from `store`. Load problems yield an empty list.
    pub fn open(store: S) -> Self {
        let list = TodoList::new(store.load());
        debug!(count = list.len(), "repository opened");
        Self { list, store }
    }

    pub fn todos(&self) -> &[Todo] {
        self.list.items()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, title: String, body: String) -> Result<Outcome> {
        let outcome = self.list.add(title, body);
        self.persist(outcome)
    }

    pub fn edit(&mut self, id: i64, title: String, body: String) -> Result<Outcome> {
        let outcome = self.list.edit(id, title, body);
        self.persist(outcome)
    }

    pub fn remove(&mut self, id: i64) -> Result<Outcome> {
        let outcome = self.list.remove(id);
        self.persist(outcome)
    }

    pub fn check(&mut self, id: i64) -> Result<Outcome> {
        let outcome = self.list.set_completed(id, true);
        self.persist(outcome)
    }

    pub fn uncheck(&mut self, id: i64) -> Result<Outcome> {
        let outcome = self.list.set_completed(id, false);
        self.persist(outcome)
    }

    pub fn list(&self, filter: Option<Filter>) -> Vec<ListedTodo<'_>> {
        self.list.list(filter)
    }

    /// Apply a request built by one of the surfaces.
    ///
    /// A `None` id (unparseable input) is reported as `Outcome::InvalidId`.
    pub fn apply(&mut self, request: Request) -> Result<Outcome> {
        match request {
            Request::Add { title, body } => self.add(title, body),
            Request::Edit { id, title, body } => match id {
                Some(id) => self.edit(id, title, body),
                None => Ok(self.reject()),
            },
            Request::Remove { id } => match id {
                Some(id) => self.remove(id),
                None => Ok(self.reject()),
            },
            Request::Check { id } => match id {
                Some(id) => self.check(id),
                None => Ok(self.reject()),
            },
            Request::Uncheck { id } => match id {
                Some(id) => self.uncheck(id),
                None => Ok(self.reject()),
            },
        }
    }

    fn reject(&self) -> Outcome {
        debug!(len = self.list.len(), "rejecting unparseable todo id");
        Outcome::InvalidId
    }

    fn persist(&self, outcome: Outcome) -> Result<Outcome> {
        match outcome {
            Outcome::Applied { change, id } => {
                debug!(?change, id, len = self.list.len(), "saving after change");
                self.store
                    .save(self.list.items())
                    .with_context(|| format!("save todos after {change:?} of id {id}"))?;
            }
            Outcome::InvalidId => {
                debug!(len = self.list.len(), "invalid todo id, nothing saved");
            }
        }
        Ok(outcome)
    }
}
