//! Property-based tests for the inventory text format.

use invtrack::codec::{decode, encode, Delimiter, LoadWarning};
use invtrack::model::Item;
use proptest::prelude::*;

/// Delimiters the format accepts, including whitespace and letters.
fn valid_delimiter_strategy() -> impl Strategy<Value = Delimiter> {
    prop::sample::select(vec![',', ';', '|', '\t', ' ', ':', '#', 'x', '\\'])
        .prop_map(|c| Delimiter::new(c).unwrap())
}

/// Field text with the characters that need care: delimiters, quotes, line
/// breaks, and the empty string. Line breaks are folded into spaces by
/// `Item::new`, so every encoded record stays on one line.
fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}".prop_map(|s| s),
        "[a-z]{0,5},[a-z]{0,5}".prop_map(|s| s),
        "[a-z]{0,5}\"[a-z]{0,5}\"[a-z]{0,5}".prop_map(|s| s),
        "[a-z]{0,5}\n[a-z]{0,5}".prop_map(|s| s),
        "[a-z]{0,5}\r\n[a-z]{0,5}".prop_map(|s| s),
        "[a-z;|: \t#x\\\\]{0,12}".prop_map(|s| s),
        Just(String::new()),
        Just("\"\"".to_string()),
        Just("Grüße, 世界".to_string()),
    ]
}

/// A line whose second field opens a quote that is never closed.
fn unclosed_quote_line_strategy() -> impl Strategy<Value = String> {
    (
        "[a-z ,;|0-9]{0,10}",
        prop_oneof![Just(""), Just(",1"), Just(",1,\"\""), Just(",1,\"img")],
    )
        .prop_map(|(text, tail)| format!("\"bad\",\"{}{}\n", text, tail))
}

/// A fully quoted line with three or five fields, each holding a quoted comma.
fn wrong_field_count_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,5}".prop_map(|s| format!("\"{s}\",\"a,b\",1\n")),
        "[a-z]{1,5}".prop_map(|s| format!("\"{s}\",\"a,b\",1,\"c,d\",\"e\"\n")),
    ]
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (field_strategy(), field_strategy(), any::<u32>(), field_strategy())
        .prop_map(|(name, description, amount, image)| Item::new(name, description, amount, image))
}

proptest! {
    #[test]
    fn round_trip_preserves_records(
        items in prop::collection::vec(item_strategy(), 0..12),
        delimiter in valid_delimiter_strategy(),
    ) {
        let text = encode(&items, delimiter);
        let decoded = decode(text.as_bytes(), delimiter);

        prop_assert!(decoded.warnings.is_empty(), "warnings: {:?}", decoded.warnings);
        prop_assert_eq!(decoded.items, items);
    }

    #[test]
    fn output_ends_after_closing_quote(
        items in prop::collection::vec(item_strategy(), 1..6),
        delimiter in valid_delimiter_strategy(),
    ) {
        let text = encode(&items, delimiter);
        prop_assert!(text.ends_with("\"\n"));
        prop_assert!(!text.starts_with(delimiter.as_char()));
    }

    #[test]
    fn quotes_are_doubled_inside_fields(
        left in "[a-z]{0,8}",
        right in "[a-z]{0,8}",
    ) {
        let description = format!("{}\"{}", left, right);
        let items = vec![Item::new("q", description.clone(), 1, "")];

        let text = encode(&items, Delimiter::default());
        let expected = format!("\"{}\"\"{}\"", left, right);
        prop_assert!(text.contains(&expected));

        let decoded = decode(text.as_bytes(), Delimiter::default());
        prop_assert_eq!(decoded.items[0].description(), description.as_str());
    }

    #[test]
    fn bad_amount_lines_are_skipped_not_fatal(
        good in prop::collection::vec(item_strategy(), 0..6),
        bad_amount in "[a-z]{1,6}|-[1-9][0-9]{0,4}",
        insert_at in 0usize..6,
    ) {
        let delimiter = Delimiter::default();
        let mut lines: Vec<String> = good
            .iter()
            .map(|item| encode(std::iter::once(item), delimiter))
            .collect();
        let at = insert_at.min(lines.len());
        lines.insert(at, format!("\"bad\",\"\",{},\"\"\n", bad_amount));

        let decoded = decode(lines.concat().as_bytes(), delimiter);

        prop_assert_eq!(decoded.items, good);
        prop_assert_eq!(decoded.warnings.len(), 1);
    }

    #[test]
    fn unclosed_quote_skips_only_its_own_line(
        good in prop::collection::vec(item_strategy(), 0..6),
        bad_line in unclosed_quote_line_strategy(),
        insert_at in 0usize..6,
    ) {
        let delimiter = Delimiter::default();
        let mut lines: Vec<String> = good
            .iter()
            .map(|item| encode(std::iter::once(item), delimiter))
            .collect();
        let at = insert_at.min(lines.len());
        lines.insert(at, bad_line);

        let decoded = decode(lines.concat().as_bytes(), delimiter);

        prop_assert_eq!(decoded.items, good);
        prop_assert_eq!(decoded.warnings.len(), 1);
        prop_assert_eq!(decoded.warnings[0].line(), at as u64 + 1);
    }

    #[test]
    fn wrong_field_count_skips_only_its_own_line(
        good in prop::collection::vec(item_strategy(), 0..6),
        bad_line in wrong_field_count_line_strategy(),
        insert_at in 0usize..6,
    ) {
        let delimiter = Delimiter::default();
        let mut lines: Vec<String> = good
            .iter()
            .map(|item| encode(std::iter::once(item), delimiter))
            .collect();
        let at = insert_at.min(lines.len());
        lines.insert(at, bad_line);

        let decoded = decode(lines.concat().as_bytes(), delimiter);

        prop_assert_eq!(decoded.items, good);
        prop_assert_eq!(decoded.warnings.len(), 1);
        let is_field_count = matches!(decoded.warnings[0], LoadWarning::FieldCount { .. });
        prop_assert!(is_field_count);
    }

    #[test]
    fn quote_characters_are_never_valid_delimiters(c in prop::sample::select(vec!['"', '\''])) {
        prop_assert!(Delimiter::new(c).is_err());
    }
}
