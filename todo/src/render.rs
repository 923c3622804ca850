//! User-facing text: menu, list lines and outcome messages.

use crate::core::types::{Change, ListedTodo, Outcome};

pub const MENU: &str = "\nTodo List Menu:
1. Add Todo
2. Edit Todo
3. Remove Todo
4. Check Todo
5. Uncheck Todo
6. List All Todos
7. List Completed Todos
8. List Uncompleted Todos
9. Quit";

pub const CHOICE_PROMPT: &str = "Enter your choice (1-9): ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const INVALID_ID: &str = "Invalid todo ID. Please try again.";
pub const INVALID_FILTER: &str =
    "Invalid list filter. Please provide \"all\", \"checked\", or \"unchecked\".";
pub const INVALID_COMMAND: &str = "Invalid command. Please use \"add\", \"edit\", \"remove\", \"check\", \"uncheck\", or \"list\".";

pub fn outcome_message(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Applied { change, .. } => match change {
            Change::Added => "Todo added successfully.",
            Change::Edited => "Todo edited successfully.",
            Change::Removed => "Todo removed successfully.",
            Change::Checked => "Todo checked successfully.",
            Change::Unchecked => "Todo unchecked successfully.",
        },
        Outcome::InvalidId => INVALID_ID,
    }
}

/// `<id>. [X] <title> - <body>`
pub fn list_line(listed: &ListedTodo<'_>) -> String {
    let marker = if listed.todo.completed { 'X' } else { ' ' };
    format!(
        "{}. [{}] {} - {}",
        listed.id, marker, listed.todo.title, listed.todo.body
    )
}

/// Header plus one line per item. Starts with a blank line.
pub fn list_block(items: &[ListedTodo<'_>]) -> String {
    let mut out = String::from("\nTodo List:");
    for listed in items {
        out.push('\n');
        out.push_str(&list_line(listed));
    }
    out
}
