use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// New items always start unchecked.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            completed: false,
        }
    }
}
