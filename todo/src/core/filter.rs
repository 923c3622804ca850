//! List filters accepted by `todo list` and the interactive menu.

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};

use crate::item::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Checked,
    Unchecked,
}

impl Filter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Checked => todo.completed,
            Filter::Unchecked => !todo.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Checked => "checked",
            Filter::Unchecked => "unchecked",
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    /// Keywords are matched exactly (case-sensitive, no trimming).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "checked" => Ok(Filter::Checked),
            "unchecked" => Ok(Filter::Unchecked),
            other => Err(anyhow!("unknown list filter '{other}'")),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::todo;

    #[test]
    fn parses_fixed_vocabulary_only() {
        assert_eq!("all".parse::<Filter>().expect("all"), Filter::All);
        assert_eq!("checked".parse::<Filter>().expect("checked"), Filter::Checked);
        assert_eq!(
            "unchecked".parse::<Filter>().expect("unchecked"),
            Filter::Unchecked
        );
        assert!("Checked".parse::<Filter>().is_err());
        assert!(" all".parse::<Filter>().is_err());
        assert!("done".parse::<Filter>().is_err());
    }

    #[test]
    fn matches_by_completion() {
        let open = todo("a", "b", false);
        let done = todo("c", "d", true);
        assert!(Filter::All.matches(&open) && Filter::All.matches(&done));
        assert!(!Filter::Checked.matches(&open) && Filter::Checked.matches(&done));
        assert!(Filter::Unchecked.matches(&open) && !Filter::Unchecked.matches(&done));
    }
}
