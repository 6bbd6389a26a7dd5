//! Line-oriented terminal front end.
//!
//! Reads one command per line, turns it into [`PackingAction`]s and sends
//! them to the store. The screen is redrawn whenever a store subscriber
//! reports a state change.

use crate::actions::PackingAction;
use crate::reducer::PackingStore;
use crate::state::PackingState;
use crate::types::{ItemId, Quantity, QuantityError, SortMode, SortModeError};
use far_away_runtime::StoreError;
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use thiserror::Error;

/// Header printed when the shell starts
pub const LOGO: &str = "Far Away";

/// Command reference printed by `help`
pub const HELP: &str = "\
Commands:
  add [<qty>] <description>   add an item (quantity 1-20, default 1)
  desc <text>                 set the draft description
  qty <n>                     set the draft quantity
  submit                      add the draft as a new item
  toggle <id>                 pack or unpack an item
  delete <id>                 remove an item
  clear                       remove every item
  sort <mode>                 input, description or packed
  list                        show the list
  stats                       show the progress line
  json                        dump the state as JSON
  help                        show this help
  quit                        leave
";

/// Errors of the terminal shell
///
/// Everything except [`ShellError::Io`] is reported to the user and the
/// shell keeps reading commands.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The first word is not a known command
    #[error("Unknown command '{0}' (type 'help' for the list of commands)")]
    UnknownCommand(String),

    /// A required argument was not given
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        /// Command as typed
        command: &'static str,
        /// What is missing
        argument: &'static str,
    },

    /// The argument is not an item id
    #[error("'{input}' is not an item id")]
    BadId {
        /// Argument as typed
        input: String,
        /// Parse failure
        #[source]
        source: std::num::ParseIntError,
    },

    /// The argument is not a sort mode
    #[error(transparent)]
    BadSortMode(#[from] SortModeError),

    /// The argument is not a selectable quantity
    #[error(transparent)]
    BadQuantity(#[from] QuantityError),

    /// The store refused to finish processing a command
    #[error(transparent)]
    Store(#[from] StoreError),

    /// State could not be exported
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the draft (quantity optional) and submit it
    Add {
        /// Quantity typed before the description
        quantity: Option<Quantity>,
        /// Everything after the quantity
        description: String,
    },
    /// Set the draft description
    Describe(String),
    /// Set the draft quantity; validated by the form
    Quantity(String),
    /// Submit the draft
    Submit,
    /// Toggle an item
    Toggle(ItemId),
    /// Delete an item
    Delete(ItemId),
    /// Clear the list
    Clear,
    /// Change the ordering
    Sort(SortMode),
    /// Print the list
    List,
    /// Print the progress line
    Stats,
    /// Print the state as JSON
    Json,
    /// Print the command reference
    Help,
    /// Stop reading input
    Quit,
}

impl Command {
    /// Parses one input line
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] describing why the line is not a command.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(head, rest)| (head, rest.trim()));

        match head.to_ascii_lowercase().as_str() {
            "add" => Self::parse_add(rest),
            "desc" => Ok(Self::Describe(rest.to_string())),
            "qty" => Ok(Self::Quantity(required("qty", "a quantity", rest)?.to_string())),
            "submit" => Ok(Self::Submit),
            "toggle" => Ok(Self::Toggle(parse_id("toggle", rest)?)),
            "delete" => Ok(Self::Delete(parse_id("delete", rest)?)),
            "clear" => Ok(Self::Clear),
            "sort" => Ok(Self::Sort(required("sort", "a sort mode", rest)?.parse()?)),
            "list" => Ok(Self::List),
            "stats" => Ok(Self::Stats),
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ShellError::UnknownCommand(head.to_string())),
        }
    }

    /// A leading integer is the quantity, unless it is the only word
    fn parse_add(rest: &str) -> Result<Self, ShellError> {
        if let Some((first, description)) = rest.split_once(char::is_whitespace) {
            if first.parse::<i64>().is_ok() {
                return Ok(Self::Add {
                    quantity: Some(first.parse()?),
                    description: description.trim().to_string(),
                });
            }
        }

        Ok(Self::Add {
            quantity: None,
            description: rest.to_string(),
        })
    }

    /// Actions that carry out the command; empty for read-only commands
    #[must_use]
    pub fn into_actions(self) -> Vec<PackingAction> {
        match self {
            Self::Add {
                quantity,
                description,
            } => quantity
                .map(|quantity| PackingAction::SetQuantity {
                    raw: quantity.to_string(),
                })
                .into_iter()
                .chain([
                    PackingAction::SetDescription { text: description },
                    PackingAction::SubmitForm,
                ])
                .collect(),
            Self::Describe(text) => vec![PackingAction::SetDescription { text }],
            Self::Quantity(raw) => vec![PackingAction::SetQuantity { raw }],
            Self::Submit => vec![PackingAction::SubmitForm],
            Self::Toggle(id) => vec![PackingAction::TogglePacked { id }],
            Self::Delete(id) => vec![PackingAction::DeleteItem { id }],
            Self::Clear => vec![PackingAction::ClearList],
            Self::Sort(mode) => vec![PackingAction::SetSortMode { mode }],
            Self::List | Self::Stats | Self::Json | Self::Help | Self::Quit => Vec::new(),
        }
    }
}

fn required<'a>(command: &'static str, argument: &'static str, rest: &'a str) -> Result<&'a str, ShellError> {
    if rest.is_empty() {
        Err(ShellError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<ItemId, ShellError> {
    required(command, "an item id", rest)?
        .parse()
        .map_err(|source| ShellError::BadId {
            input: rest.to_string(),
            source,
        })
}

/// The list in display order, one item per line
#[must_use]
pub fn render_list(state: &PackingState) -> String {
    let mut out = format!("Packing list ({})\n", state.sort.label());
    let items = state.visible_items();

    if items.is_empty() {
        out.push_str("  (empty)\n");
    }
    for item in items {
        let mark = if item.packed { 'x' } else { ' ' };
        out.push_str(&format!(
            "  [{mark}] {} {}  #{}\n",
            item.quantity, item.description, item.id
        ));
    }
    out
}

/// The statistics footer
#[must_use]
pub fn render_stats(state: &PackingState) -> String {
    format!("{}\n", state.stats())
}

/// Full screen: list, draft status and footer
#[must_use]
pub fn render(state: &PackingState) -> String {
    let mut out = render_list(state);

    let form = &state.form;
    if !form.description().is_empty() || form.quantity() != Quantity::ONE {
        out.push_str(&format!("Draft: {} {}\n", form.quantity(), form.description()));
    }
    if let Some(error) = form.last_error() {
        out.push_str(&format!("! {error}\n"));
    }

    out.push_str(&render_stats(state));
    out
}

/// Runs the shell until `quit` or end of input
///
/// # Errors
///
/// Returns [`ShellError::Io`] if reading `input` or writing `output` fails.
/// Every other error is printed and the shell carries on.
pub fn run<R, W>(store: &mut PackingStore, input: R, output: &mut W) -> Result<(), ShellError>
where
    R: BufRead,
    W: Write,
{
    let changed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&changed);
    store.subscribe(move |_state: &PackingState| flag.set(true));

    writeln!(output, "{LOGO}\n")?;
    output.write_all(store.state(render).as_bytes())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => match execute(store, command, output) {
                Ok(()) => {},
                Err(error @ ShellError::Io(_)) => return Err(error),
                Err(error) => report(output, &error)?,
            },
            Err(error) => report(output, &error)?,
        }

        if changed.replace(false) {
            output.write_all(store.state(render).as_bytes())?;
        }
        output.flush()?;
    }

    tracing::debug!("Shell finished");
    Ok(())
}

fn execute<W: Write>(store: &mut PackingStore, command: Command, output: &mut W) -> Result<(), ShellError> {
    match command {
        Command::List => output.write_all(store.state(render_list).as_bytes())?,
        Command::Stats => output.write_all(store.state(render_stats).as_bytes())?,
        Command::Json => {
            let json = store.state(serde_json::to_string_pretty)?;
            writeln!(output, "{json}")?;
        },
        Command::Help => output.write_all(HELP.as_bytes())?,
        command => {
            store.send_all(command.into_actions())?;
        },
    }
    Ok(())
}

fn report<W: Write>(output: &mut W, error: &ShellError) -> io::Result<()> {
    tracing::debug!(%error, "Command failed");
    writeln!(output, "error: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::PackingList;
    use crate::reducer::{PackingEnvironment, PackingReducer};
    use far_away_testing::SequentialIds;
    use std::sync::Arc;

    fn store(state: PackingState) -> PackingStore {
        PackingStore::new(
            state,
            PackingReducer::new(),
            PackingEnvironment::new(Arc::new(SequentialIds::new())),
        )
    }

    fn run_script(store: &mut PackingStore, script: &str) -> String {
        let mut output = Vec::new();
        run(store, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parses_add_with_and_without_quantity() {
        assert_eq!(
            Command::parse("add 2 Passports").unwrap(),
            Command::Add {
                quantity: Quantity::new(2).ok(),
                description: "Passports".into()
            }
        );
        assert_eq!(
            Command::parse("ADD hiking boots").unwrap(),
            Command::Add {
                quantity: None,
                description: "hiking boots".into()
            }
        );
        assert_eq!(
            Command::parse("add 7").unwrap(),
            Command::Add {
                quantity: None,
                description: "7".into()
            }
        );
        assert!(matches!(
            Command::parse("add 40 socks"),
            Err(ShellError::BadQuantity(QuantityError::OutOfRange { value: 40 }))
        ));
    }

    #[test]
    fn parses_id_and_sort_arguments() {
        assert_eq!(Command::parse("toggle #3").unwrap(), Command::Toggle(ItemId::new(3)));
        assert_eq!(Command::parse("delete 4").unwrap(), Command::Delete(ItemId::new(4)));
        assert_eq!(
            Command::parse("sort description").unwrap(),
            Command::Sort(SortMode::Description)
        );
        assert!(matches!(Command::parse("toggle"), Err(ShellError::MissingArgument { .. })));
        assert!(matches!(Command::parse("delete socks"), Err(ShellError::BadId { .. })));
        assert!(matches!(Command::parse("sort size"), Err(ShellError::BadSortMode(_))));
        assert!(matches!(Command::parse("pack 1"), Err(ShellError::UnknownCommand(c)) if c == "pack"));
    }

    #[test]
    fn add_expands_to_form_actions() {
        let actions = Command::parse("add 3 Hats").unwrap().into_actions();
        assert_eq!(
            actions,
            vec![
                PackingAction::SetQuantity { raw: "3".into() },
                PackingAction::SetDescription { text: "Hats".into() },
                PackingAction::SubmitForm,
            ]
        );
        assert!(Command::Stats.into_actions().is_empty());
    }

    #[test]
    fn render_marks_packed_items() {
        let state = PackingState::with_list(PackingList::sample());
        let screen = render(&state);
        assert!(screen.contains("[ ] 2 Passports  #1"));
        assert!(screen.contains("[x] 12 Socks  #2"));
        assert!(screen.ends_with("You have 2 items on your list, and you already packed 1 (50%)\n"));
    }

    #[test]
    fn render_writes_every_line_of_the_screen() {
        let mut state = PackingState::with_list(PackingList::sample());
        state.form.set_description("Boots");
        let _ = state.form.set_quantity("99");
        assert_eq!(
            render(&state),
            "Packing list (sort by input order)\n\
             \x20 [ ] 2 Passports  #1\n\
             \x20 [x] 12 Socks  #2\n\
             Draft: 1 Boots\n\
             ! Quantity 99 is out of range (1-20)\n\
             You have 2 items on your list, and you already packed 1 (50%)\n"
        );
    }

    #[test]
    fn render_shows_draft_and_error() {
        let mut state = PackingState::new();
        state.form.set_description("Boots");
        let _ = state.form.set_quantity("zero");
        let screen = render(&state);
        assert!(screen.contains("(empty)"));
        assert!(screen.contains("Draft: 1 Boots"));
        assert!(screen.contains("! Quantity 'zero' is not a number"));
        assert!(screen.ends_with("You have nothing to pack\n"));
    }

    #[test]
    fn run_applies_commands_and_rerenders() {
        let mut store = store(PackingState::new());
        let output = run_script(&mut store, "add 2 Passports\nadd 12 Socks\ntoggle 2\nsort packed\nquit\nadd never\n");

        assert!(output.starts_with(LOGO));
        assert!(output.contains("You have 2 items on your list, and you already packed 1 (50%)"));

        let (count, sort) = store.state(|s| (s.list.len(), s.sort));
        assert_eq!(count, 2);
        assert_eq!(sort, SortMode::Packed);
    }

    #[test]
    fn run_reports_errors_and_keeps_going() {
        let mut store = store(PackingState::new());
        let output = run_script(&mut store, "fly away\nqty 99\nadd Socks\n");

        assert!(output.contains("error: Unknown command 'fly'"));
        assert!(output.contains("! Quantity 99 is out of range (1-20)"));
        assert_eq!(store.state(|s| s.list.len()), 1);
    }

    #[test]
    fn read_only_commands_do_not_rerender() {
        let mut store = store(PackingState::with_list(PackingList::sample()));
        let output = run_script(&mut store, "stats\njson\n");

        assert_eq!(output.matches("Packing list").count(), 1);
        assert!(output.contains("\"description\": \"Passports\""));
    }
}
