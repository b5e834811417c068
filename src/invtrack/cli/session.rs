//! Interactive, menu-driven front end.
//!
//! The session keeps an [`ItemId`] for the item being edited, never a
//! reference, so deleting it from the item menu leaves nothing dangling. Nothing
//! is written to disk except through the "Save" and "Export" entries (and the
//! separator setting). End of input behaves like choosing "Exit".

use super::print::render_item_line;
use invtrack::api::{CmdResult, ConfigAction, InvApi, ItemUpdate, MessageLevel, NewItem};
use invtrack::config::DELIMITER_KEY;
use invtrack::error::{InvError, Result};
use invtrack::inventory::ItemId;
use invtrack::store::DataStore;
use std::io::{BufRead, Write};

const RULE: &str = "--------------------------------------";

pub fn run<S, R, W>(api: &mut InvApi<S>, input: R, output: W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session { api, input, output };
    if session.start_menu()? == Flow::Continue {
        session.main_menu()?;
    }
    session.output.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

enum Choice {
    Number(u32),
    Invalid,
    Eof,
}

struct Session<'a, S: DataStore, R, W> {
    api: &'a mut InvApi<S>,
    input: R,
    output: W,
}

impl<S: DataStore, R: BufRead, W: Write> Session<'_, S, R, W> {
    fn start_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "What would you like to do?")?;
            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "1. New Inventory")?;
            writeln!(self.output, "2. Load Inventory")?;
            writeln!(self.output, "3. Settings")?;
            writeln!(self.output, "0. Exit")?;

            match self.read_choice()? {
                Choice::Eof | Choice::Number(0) => {
                    writeln!(self.output, "Exiting.")?;
                    return Ok(Flow::Quit);
                }
                Choice::Number(1) => {
                    let result = self.api.init();
                    self.report(result)?;
                    return Ok(Flow::Continue);
                }
                Choice::Number(2) => {
                    let result = self.api.load();
                    self.report(result)?;
                    return Ok(Flow::Continue);
                }
                Choice::Number(3) => {
                    if self.settings_menu()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn settings_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "Setting: What would you like to change?")?;
            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "1. Export CSV separator")?;
            writeln!(self.output, "\t- Default = (,)")?;
            writeln!(self.output, "0. Back")?;

            match self.read_choice()? {
                Choice::Eof => return Ok(Flow::Quit),
                Choice::Number(0) => {
                    writeln!(self.output, "Going back.")?;
                    return Ok(Flow::Continue);
                }
                Choice::Number(1) => {
                    let current = self.api.settings().delimiter;
                    writeln!(self.output, "Current separator = {}", current)?;
                    let Some(value) = self.prompt("New separator: ")? else {
                        return Ok(Flow::Quit);
                    };

                    let result = match self
                        .api
                        .config(ConfigAction::Set(DELIMITER_KEY.to_string(), value))
                    {
                        Ok(result) => result,
                        Err(e) => {
                            writeln!(self.output, "Error: {}", e)?;
                            continue;
                        }
                    };
                    let rejected = result.count(MessageLevel::Error) > 0;
                    self.write_messages(&result)?;
                    if rejected {
                        writeln!(self.output, "Invalid separator. Try again.")?;
                    } else {
                        return Ok(Flow::Continue);
                    }
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.write_items()?;
            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "What would you like to do?")?;
            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "1. Interact with an item")?;
            writeln!(self.output, "2. Add an item")?;
            writeln!(self.output, "3. Save inventory")?;
            writeln!(self.output, "4. Export inventory")?;
            writeln!(self.output, "0. Exit")?;
            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            let flow = match self.read_choice()? {
                Choice::Eof | Choice::Number(0) => Flow::Quit,
                Choice::Number(1) => self.select_item()?,
                Choice::Number(2) => self.add_item()?,
                Choice::Number(3) => {
                    let result = self.api.save();
                    self.report(result)?;
                    Flow::Continue
                }
                Choice::Number(4) => self.export()?,
                Choice::Number(_) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
                Choice::Invalid => {
                    writeln!(self.output, "Invalid input, please enter a number.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                if self.api.is_dirty() {
                    writeln!(
                        self.output,
                        "You have unsaved changes; they were not written to disk."
                    )?;
                }
                writeln!(self.output, "Exiting program. Goodbye!")?;
                return Ok(());
            }
        }
    }

    fn select_item(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Name of item: ")? else {
            return Ok(Flow::Quit);
        };
        match self.api.find_item(&name) {
            Some(id) => self.item_menu(id),
            None => {
                writeln!(self.output, "Item not found.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn item_menu(&mut self, id: ItemId) -> Result<Flow> {
        loop {
            let item = self.api.inventory().get(id)?.clone();

            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "{}", render_item_line(&item))?;
            writeln!(self.output, "What would you like to do with this item?")?;
            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "1. Change name")?;
            writeln!(self.output, "2. Change description")?;
            writeln!(self.output, "3. Change image path")?;
            writeln!(self.output, "4. Increment amount")?;
            writeln!(self.output, "5. Decrement amount")?;
            writeln!(self.output, "6. Delete item")?;
            writeln!(self.output, "0. Back")?;

            match self.read_choice()? {
                Choice::Eof => return Ok(Flow::Quit),
                Choice::Number(0) => {
                    writeln!(self.output, "Going back.")?;
                    return Ok(Flow::Continue);
                }
                Choice::Number(choice @ 1..=3) => {
                    let (label, current) = match choice {
                        1 => ("name", item.name()),
                        2 => ("description", item.description()),
                        _ => ("image path", item.image_path()),
                    };
                    writeln!(self.output, "Current {}: {}", label, current)?;
                    let Some(value) = self.prompt(&format!("New {}: ", label))? else {
                        return Ok(Flow::Quit);
                    };
                    let update = match choice {
                        1 => ItemUpdate::Rename(value),
                        2 => ItemUpdate::Description(value),
                        _ => ItemUpdate::ImagePath(value),
                    };
                    let result = self.api.update_item(id, update);
                    self.report(result)?;
                }
                Choice::Number(4) => {
                    writeln!(self.output, "Current count: {}", item.amount())?;
                    let result = self.api.increment(id);
                    self.report(result)?;
                }
                Choice::Number(5) => {
                    writeln!(self.output, "Current count: {}", item.amount())?;
                    let result = self.api.decrement(id);
                    self.report(result)?;
                }
                Choice::Number(6) => {
                    let result = self.api.delete_item(id);
                    self.report(result)?;
                    return Ok(Flow::Continue);
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn add_item(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter item name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(description) = self.prompt("Enter item description: ")? else {
            return Ok(Flow::Quit);
        };
        let amount = loop {
            let Some(raw) = self.prompt("Enter item amount: ")? else {
                return Ok(Flow::Quit);
            };
            match parse_amount(&raw) {
                Ok(amount) => break amount,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };
        let Some(image) = self.prompt("Enter item image path: ")? else {
            return Ok(Flow::Quit);
        };

        let item = NewItem::new(name)
            .description(description)
            .amount(amount)
            .image_path(image);
        let result = self.api.add_item(item);
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Name of export file: ")? else {
            return Ok(Flow::Quit);
        };
        let name = name.trim();
        let result = self
            .api
            .export(if name.is_empty() { None } else { Some(name) });
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn write_items(&mut self) -> Result<()> {
        if self.api.inventory().is_empty() {
            writeln!(self.output, "No items to display.")?;
            return Ok(());
        }
        let lines: Vec<String> = self.api.inventory().items().map(render_item_line).collect();
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Prints a command outcome. Failures are shown and the session continues.
    fn report(&mut self, result: Result<CmdResult>) -> Result<()> {
        match result {
            Ok(result) => self.write_messages(&result),
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                Ok(())
            }
        }
    }

    fn write_messages(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            writeln!(self.output, "{}", message.content)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_choice(&mut self) -> Result<Choice> {
        Ok(match self.read_line()? {
            None => Choice::Eof,
            Some(line) => match line.trim().parse() {
                Ok(n) => Choice::Number(n),
                Err(_) => Choice::Invalid,
            },
        })
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn parse_amount(raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        InvError::InvalidAmount(format!(
            "{:?} (enter a whole number of 0 or more)",
            raw.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use invtrack::api::InvPaths;
    use invtrack::config::InvConfig;
    use invtrack::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn paths(dir: &std::path::Path) -> InvPaths {
        InvPaths::new(dir.join("save"), "export")
    }

    fn drive(api: &mut InvApi<InMemoryStore>, script: &str) -> String {
        let mut output = Vec::new();
        run(api, Cursor::new(script.as_bytes()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn exit_from_start_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = InvApi::new(InMemoryStore::new(), paths(dir.path()), InvConfig::default());

        let out = drive(&mut api, "0\n");

        assert!(out.contains("1. New Inventory"));
        assert!(out.ends_with("Exiting.\n"));
    }

    #[test]
    fn new_inventory_then_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = InvApi::new(InMemoryStore::new(), paths(dir.path()), InvConfig::default());

        let out = drive(&mut api, "1\n3\n0\n");

        assert!(out.contains("Name: sample sign | Description: A sample sign, simple but effective | Amount: 1 | Image: images/sample.jpg"));
        assert!(out.contains("Items saved successfully to"));
        assert!(!out.contains("unsaved changes"));
        let saved = api
            .store()
            .contents(dir.path().join("save/inventory.csv"))
            .unwrap();
        assert_eq!(
            saved,
            "\"sample sign\",\"A sample sign, simple but effective\",1,\"images/sample.jpg\"\n"
        );
    }

    #[test]
    fn add_item_retries_bad_amount() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = InvApi::new(InMemoryStore::new(), paths(dir.path()), InvConfig::default());

        let out = drive(
            &mut api,
            "1\n2\nHammer\nClaw, steel\n-4\nthree\n3\nimg/h.png\n0\n",
        );

        assert_eq!(out.matches("Invalid amount").count(), 2);
        let id = api.find_item("hammer").unwrap();
        let item = api.inventory().get(id).unwrap();
        assert_eq!(item.amount(), 3);
        assert_eq!(item.description(), "Claw, steel");
        assert!(out.contains("unsaved changes"));
    }

    #[test]
    fn item_menu_edits_and_floors_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = InMemoryStore::new()
            .with_file(dir.path().join("save/inventory.csv"), "\"rope\",\"\",1,\"\"\n");
        let mut api = InvApi::new(store, paths(dir.path()), InvConfig::default());

        let out = drive(&mut api, "2\n1\nROPE\n5\n5\n1\nCord\n0\n0\n");

        assert!(out.contains("Cannot decrement below zero: rope"));
        let id = api.find_item("cord").unwrap();
        assert_eq!(api.inventory().get(id).unwrap().amount(), 0);
    }

    #[test]
    fn delete_returns_to_main_menu() {
        let dir = tempfile::tempdir().unwrap();
        let store = InMemoryStore::new().with_file(
            dir.path().join("save/inventory.csv"),
            "\"item 1\",\"\",0,\"\"\n\"item 2\",\"\",1,\"\"\n",
        );
        let mut api = InvApi::new(store, paths(dir.path()), InvConfig::default());

        let out = drive(&mut api, "2\n1\nitem 1\n6\n1\nitem 1\n0\n");

        assert!(out.contains("Item deleted: item 1"));
        assert!(out.contains("Item not found."));
        assert_eq!(api.inventory().len(), 1);
    }

    #[test]
    fn non_numeric_choice_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = InvApi::new(InMemoryStore::new(), paths(dir.path()), InvConfig::default());

        let out = drive(&mut api, "1\nabc\n9\n0\n");

        assert!(out.contains("Invalid input, please enter a number."));
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn separator_setting_rejects_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = InvApi::new(InMemoryStore::new(), paths(dir.path()), InvConfig::default());

        let out = drive(&mut api, "3\n1\n\"\n1\n'\n1\n;\n0\n");

        assert_eq!(out.matches("Invalid separator. Try again.").count(), 2);
        assert_eq!(api.settings().delimiter.as_char(), ';');
        let stored = std::fs::read_to_string(dir.path().join("save/settings.cfg")).unwrap();
        assert_eq!(stored, ";\n");
    }

    #[test]
    fn separator_write_failure_stays_in_settings() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the settings directory should be.
        std::fs::write(dir.path().join("save"), "").unwrap();
        let mut api = InvApi::new(InMemoryStore::new(), paths(dir.path()), InvConfig::default());

        let mut output = Vec::new();
        let outcome = run(&mut api, Cursor::new(&b"3\n1\n;\n0\n0\n"[..]), &mut output);
        let out = String::from_utf8(output).unwrap();

        assert!(outcome.is_ok());
        assert!(out.contains("Error: IO error"));
        assert!(out.contains("Going back."));
        assert!(out.ends_with("Exiting.\n"));
        assert_eq!(api.settings().delimiter.as_char(), ',');
    }

    #[test]
    fn export_uses_separator_and_keeps_session_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let config = InvConfig {
            delimiter: "|".parse().unwrap(),
        };
        let mut api = InvApi::new(InMemoryStore::new(), paths(dir.path()), config);

        let out = drive(&mut api, "1\n4\nspring\n0\n");

        assert!(out.contains("export/spring.csv"));
        assert!(api
            .store()
            .contents("export/spring.csv")
            .unwrap()
            .starts_with("\"sample sign\"|"));
        assert!(out.contains("unsaved changes"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = InvApi::new(InMemoryStore::new(), paths(dir.path()), InvConfig::default());

        let out = drive(&mut api, "1\n2\nhalf");

        assert!(out.ends_with("Exiting program. Goodbye!\n"));
    }

    #[test]
    fn parse_amount_rejects_negative() {
        assert!(matches!(parse_amount("-1"), Err(InvError::InvalidAmount(_))));
        assert_eq!(parse_amount(" 12 ").unwrap(), 12);
    }
}
