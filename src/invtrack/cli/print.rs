use colored::Colorize;
use invtrack::api::{CmdMessage, MessageLevel};
use invtrack::error::Result;
use invtrack::inventory::DisplayItem;
use invtrack::model::Item;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 6;
const NAME_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 8;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// One line per item: position, name, amount and a description preview.
pub(super) fn render_item_list(items: &[DisplayItem]) -> String {
    let mut output = String::new();
    let available = LINE_WIDTH.saturating_sub(INDEX_WIDTH + NAME_WIDTH + AMOUNT_WIDTH + 2);

    for di in items {
        let idx_str = format!("{:>width$}. ", di.position, width = INDEX_WIDTH - 2);
        let name = pad_to_width(&truncate_to_width(di.item.name(), NAME_WIDTH), NAME_WIDTH);
        let amount = format!("{:>width$}", di.item.amount(), width = AMOUNT_WIDTH);
        let amount_colored = if di.item.amount() == 0 {
            amount.red()
        } else {
            amount.normal()
        };

        output.push_str(&format!(
            "{}{}{}  {}\n",
            idx_str.yellow(),
            name,
            amount_colored,
            truncate_to_width(di.item.description(), available).dimmed()
        ));
    }

    output
}

/// Full view of one item.
pub(super) fn render_item_detail(di: &DisplayItem) -> String {
    let item = &di.item;
    let mut output = String::new();
    output.push_str(&format!(
        "{} {}\n",
        format!("{}.", di.position).yellow(),
        item.name().bold()
    ));
    output.push_str("--------------------------------\n");
    output.push_str(&format!("Amount:      {}\n", item.amount()));
    output.push_str(&format!("Image:       {}\n", item.image_path()));
    output.push_str(&format!("Description: {}\n", item.description()));
    output
}

/// The single-line form used by the interactive session.
pub(super) fn render_item_line(item: &Item) -> String {
    format!(
        "Name: {} | Description: {} | Amount: {} | Image: {}",
        item.name(),
        item.description(),
        item.amount(),
        item.image_path()
    )
}

pub(super) fn render_json(items: &[DisplayItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
