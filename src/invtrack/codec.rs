//! # Inventory Text Format
//!
//! Items are stored one per line as four delimiter-joined fields:
//!
//! ```text
//! "name","description",amount,"image path"
//! ```
//!
//! - The three string fields are **always** wrapped in double quotes, and any
//!   quote inside a field is doubled (`"` becomes `""`).
//! - `amount` is written as a bare decimal integer.
//! - Every record ends with `\n` and occupies exactly one line. Fields never
//!   contain line breaks ([`Item`] folds them into spaces). There is no header
//!   row.
//!
//! Writing is done by hand because the quoting rule is unconditional for
//! strings and forbidden for the amount, which no quote style of a generic CSV
//! writer expresses. Reading splits the input into lines first and hands each
//! line to the `csv` crate, which understands quoted delimiters and doubled
//! quotes. An unclosed quote therefore ends at its own line and cannot swallow
//! the records after it.
//!
//! Decoding never fails as a whole. A line with the wrong number of fields, a
//! non-numeric amount, or bytes that are not UTF-8 is skipped and reported as a
//! [`LoadWarning`]; the rest of the input is still decoded.

use crate::error::{InvError, Result};
use crate::model::Item;
use csv::{ReaderBuilder, StringRecord, Terminator, Trim};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_DELIMITER: char = ',';

const FIELD_COUNT: usize = 4;
const AMOUNT_FIELD: usize = 2;

/// A validated single-byte field separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub fn new(c: char) -> Result<Self> {
        let reason = match c {
            '"' | '\'' => Some("quote characters cannot separate fields"),
            '\n' | '\r' => Some("line terminators cannot separate fields"),
            '0'..='9' => Some("digits would be ambiguous next to the amount field"),
            c if !c.is_ascii() => Some("only single-byte ASCII characters are supported"),
            _ => None,
        };

        match reason {
            Some(reason) => Err(InvError::InvalidDelimiter(format!("{:?} ({})", c, reason))),
            None => Ok(Self(c as u8)),
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER as u8)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Delimiter {
    type Err = InvError;

    /// Accepts exactly one character. `\t` is accepted as a spelling of tab.
    fn from_str(s: &str) -> Result<Self> {
        if s == "\\t" {
            return Self::new('\t');
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            (None, _) => Err(InvError::InvalidDelimiter("empty value".to_string())),
            (Some(_), Some(_)) => Err(InvError::InvalidDelimiter(format!(
                "{:?} (must be a single character)",
                s
            ))),
        }
    }
}

/// A record that was skipped while decoding. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    FieldCount { line: u64, found: usize },
    InvalidAmount { line: u64, value: String },
    Unreadable { line: u64, reason: String },
}

impl LoadWarning {
    pub fn line(&self) -> u64 {
        match self {
            LoadWarning::FieldCount { line, .. }
            | LoadWarning::InvalidAmount { line, .. }
            | LoadWarning::Unreadable { line, .. } => *line,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::FieldCount { line, found } => write!(
                f,
                "Line {}: expected {} fields but found {}, skipped",
                line, FIELD_COUNT, found
            ),
            LoadWarning::InvalidAmount { line, value } => {
                write!(f, "Line {}: invalid amount {:?}, skipped", line, value)
            }
            LoadWarning::Unreadable { line, reason } => {
                write!(f, "Line {}: unreadable record ({}), skipped", line, reason)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub items: Vec<Item>,
    pub warnings: Vec<LoadWarning>,
}

/// Wraps a field in quotes, doubling any quote it contains.
pub fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len() + 2);
    escaped.push('"');
    for c in field.chars() {
        if c == '"' {
            escaped.push_str("\"\"");
        } else {
            escaped.push(c);
        }
    }
    escaped.push('"');
    escaped
}

/// Encodes one item without the trailing newline.
pub fn encode_item(item: &Item, delimiter: Delimiter) -> String {
    let sep = delimiter.as_char();
    format!(
        "{}{sep}{}{sep}{}{sep}{}",
        escape_field(item.name()),
        escape_field(item.description()),
        item.amount(),
        escape_field(item.image_path()),
    )
}

pub fn encode<'a, I>(items: I, delimiter: Delimiter) -> String
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut out = String::new();
    for item in items {
        out.push_str(&encode_item(item, delimiter));
        out.push('\n');
    }
    out
}

pub fn decode(input: impl AsRef<[u8]>, delimiter: Delimiter) -> Decoded {
    let mut decoded = Decoded::default();

    for (index, raw) in input.as_ref().split(|&b| b == b'\n').enumerate() {
        let line = raw.strip_suffix(b"\r").unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        match decode_line(line, index as u64 + 1, delimiter) {
            Ok(item) => decoded.items.push(item),
            Err(warning) => {
                debug!(%warning, "skipping inventory record");
                decoded.warnings.push(warning);
            }
        }
    }

    decoded
}

fn decode_line(
    line: &[u8],
    number: u64,
    delimiter: Delimiter,
) -> std::result::Result<Item, LoadWarning> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .terminator(Terminator::Any(b'\n'))
        .trim(Trim::None)
        .from_reader(line);

    match reader.records().next() {
        Some(Ok(record)) => parse_record(&record, number),
        Some(Err(err)) => Err(LoadWarning::Unreadable {
            line: number,
            reason: err.to_string(),
        }),
        None => Err(LoadWarning::FieldCount {
            line: number,
            found: 0,
        }),
    }
}

fn parse_record(record: &StringRecord, line: u64) -> std::result::Result<Item, LoadWarning> {
    if record.len() != FIELD_COUNT {
        return Err(LoadWarning::FieldCount {
            line,
            found: record.len(),
        });
    }

    let raw_amount = &record[AMOUNT_FIELD];
    let amount = raw_amount
        .trim()
        .parse::<u32>()
        .map_err(|_| LoadWarning::InvalidAmount {
            line,
            value: raw_amount.to_string(),
        })?;

    Ok(Item::new(&record[0], &record[1], amount, &record[3]))
}
