//! Interactive menu session (`todo` with no command).
//!
//! The menu is shown once at start and again after every operation, whether
//! it applied or was rejected for an invalid id. An unrecognized choice only
//! reprompts. Choice 9 or end of input ends the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::collection::parse_id;
use crate::core::filter::Filter;
use crate::core::types::Request;
use crate::io::console::Console;
use crate::io::store::TodoStore;
use crate::render::{CHOICE_PROMPT, INVALID_CHOICE, MENU, list_block, outcome_message};
use crate::repository::TodoRepository;

/// What the loop does after handling one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Redisplay,
    Reprompt,
    Quit,
}

/// Run the menu loop until the user quits or input ends.
pub fn run_session<S: TodoStore, R: BufRead, W: Write>(
    repo: &mut TodoRepository<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    info!(count = repo.todos().len(), "interactive session started");
    console.say(MENU)?;
    loop {
        let Some(choice) = console.ask(CHOICE_PROMPT)? else {
            debug!("input closed at menu prompt");
            break;
        };
        match handle_choice(repo, console, choice.trim())? {
            Flow::Redisplay => console.say(MENU)?,
            Flow::Reprompt => {}
            Flow::Quit => break,
        }
    }
    info!("interactive session ended");
    Ok(())
}

fn handle_choice<S: TodoStore, R: BufRead, W: Write>(
    repo: &mut TodoRepository<S>,
    console: &mut Console<R, W>,
    choice: &str,
) -> Result<Flow> {
    debug!(choice, "menu choice");
    let request = match choice {
        "1" => {
            let Some(title) = console.ask("Enter todo title: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(body) = console.ask("Enter todo body: ")? else {
                return Ok(Flow::Quit);
            };
            Request::Add { title, body }
        }
        "2" => {
            let Some(id) = console.ask("Enter todo ID to edit: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(title) = console.ask("Enter new todo title: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(body) = console.ask("Enter new todo body: ")? else {
                return Ok(Flow::Quit);
            };
            Request::Edit {
                id: parse_id(&id),
                title,
                body,
            }
        }
        "3" => match console.ask("Enter todo ID to remove: ")? {
            Some(id) => Request::Remove { id: parse_id(&id) },
            None => return Ok(Flow::Quit),
        },
        "4" => match console.ask("Enter todo ID to check: ")? {
            Some(id) => Request::Check { id: parse_id(&id) },
            None => return Ok(Flow::Quit),
        },
        "5" => match console.ask("Enter todo ID to uncheck: ")? {
            Some(id) => Request::Uncheck { id: parse_id(&id) },
            None => return Ok(Flow::Quit),
        },
        "6" => return show(repo, console, Filter::All),
        "7" => return show(repo, console, Filter::Checked),
        "8" => return show(repo, console, Filter::Unchecked),
        "9" => return Ok(Flow::Quit),
        _ => {
            console.say(INVALID_CHOICE)?;
            return Ok(Flow::Reprompt);
        }
    };
    let outcome = repo.apply(request)?;
    console.say(outcome_message(&outcome))?;
    Ok(Flow::Redisplay)
}

fn show<S: TodoStore, R: BufRead, W: Write>(
    repo: &TodoRepository<S>,
    console: &mut Console<R, W>,
    filter: Filter,
) -> Result<Flow> {
    console.say(&list_block(&repo.list(Some(filter))))?;
    Ok(Flow::Redisplay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Todo;
    use crate::test_support::{MemoryStore, todo};
    use std::io::Cursor;

    fn drive(items: Vec<Todo>, input: &str) -> (TodoRepository<MemoryStore>, String) {
        let mut repo = TodoRepository::open(MemoryStore::with_todos(items));
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        run_session(&mut repo, &mut console).expect("session");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        (repo, output)
    }

    fn menu_count(output: &str) -> usize {
        output.matches("Todo List Menu:").count()
    }

    #[test]
    fn quit_immediately_shows_menu_once() {
        let (repo, output) = drive(Vec::new(), "9\n");
        assert_eq!(menu_count(&output), 1);
        assert!(output.ends_with(CHOICE_PROMPT));
        assert_eq!(repo.store().saves(), 0);
    }

    #[test]
    fn add_check_and_list_checked() {
        let (repo, output) = drive(Vec::new(), "1\nBuy milk\n2%\n4\n0\n7\n9\n");

        assert_eq!(repo.todos(), &[todo("Buy milk", "2%", true)]);
        assert_eq!(repo.store().saves(), 2);
        assert!(output.contains("Enter todo title: Enter todo body: Todo added successfully.\n"));
        assert!(output.contains("Enter todo ID to check: Todo checked successfully.\n"));
        assert!(output.contains("\nTodo List:\n0. [X] Buy milk - 2%\n"));
        // initial + after add + after check + after list
        assert_eq!(menu_count(&output), 4);
    }

    #[test]
    fn invalid_choice_reprompts_without_menu() {
        let (_, output) = drive(Vec::new(), "0\nhello\n9\n");
        assert_eq!(output.matches(INVALID_CHOICE).count(), 2);
        assert_eq!(menu_count(&output), 1);
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 3);
    }

    #[test]
    fn invalid_id_reports_and_redisplays_menu() {
        let (repo, output) = drive(vec![todo("a", "b", false)], "3\n7\n5\nx\n9\n");
        assert_eq!(output.matches("Invalid todo ID. Please try again.").count(), 2);
        assert_eq!(menu_count(&output), 3);
        assert_eq!(repo.todos(), &[todo("a", "b", false)]);
        assert_eq!(repo.store().saves(), 0);
    }

    #[test]
    fn edit_prompts_for_id_title_and_body() {
        let (repo, output) = drive(vec![todo("a", "b", true)], "2\n0\nnew title\nnew body\n9\n");
        assert!(output.contains(
            "Enter todo ID to edit: Enter new todo title: Enter new todo body: Todo edited successfully.\n"
        ));
        assert_eq!(repo.todos(), &[todo("new title", "new body", true)]);
    }

    #[test]
    fn remove_then_list_all_renumbers() {
        let items = vec![
            todo("zero", "0", false),
            todo("one", "1", true),
            todo("two", "2", false),
        ];
        let (_, output) = drive(items, "3\n0\n6\n8\n9\n");
        assert!(output.contains("Todo removed successfully.\n"));
        assert!(output.contains("\nTodo List:\n0. [X] one - 1\n1. [ ] two - 2\n"));
        assert!(output.contains("\nTodo List:\n1. [ ] two - 2\n"));
    }

    #[test]
    fn end_of_input_mid_operation_abandons_it() {
        let (repo, output) = drive(Vec::new(), "1\nonly a title\n");
        assert!(repo.todos().is_empty());
        assert_eq!(repo.store().saves(), 0);
        assert!(output.ends_with("Enter todo body: "));
    }

    #[test]
    fn end_of_input_at_menu_ends_session() {
        let (_, output) = drive(Vec::new(), "");
        assert_eq!(menu_count(&output), 1);
    }

    #[test]
    fn choice_is_trimmed_but_answers_are_verbatim() {
        let (repo, _) = drive(Vec::new(), " 1 \n  spaced  \n\n9\n");
        assert_eq!(repo.todos(), &[todo("  spaced  ", "", false)]);
    }

    #[test]
    fn save_failure_aborts_session() {
        let mut repo = TodoRepository::open(MemoryStore::failing());
        let mut console = Console::new(Cursor::new("1\na\nb\n9\n".to_string()), Vec::new());
        assert!(run_session(&mut repo, &mut console).is_err());
    }
}
