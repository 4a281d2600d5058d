//! Edge case tests for fila
//!
//! Boundary conditions of the splitting, extraction and ordering rules.

use fila::config::{DateOrder, ParseConfig};
use fila::core::{DropReason, FilterConfig, build_records, extract_number, process};
use fila::parser::{ChatParser, parse_chat, split_chat};

// =========================================================================
// Splitting
// =========================================================================

#[test]
fn test_crlf_line_endings() {
    let chat = "3/14/23, 12:05 - Ana: 3\r\n3/14/23, 12:06 - Bia: 4\r\n";
    let messages = parse_chat(chat).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body, "3");
}

#[test]
fn test_boundary_without_trailing_dash_is_not_a_boundary() {
    // "12:05 Ana" lacks " - ", so it stays in the previous body
    let chat = "3/14/23, 12:05 - Ana: 3\n3/14/23, 12:06 Bia: 4";
    let messages = parse_chat(chat).unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].body.contains("Bia: 4"));
}

#[test]
fn test_four_digit_year_not_matched() {
    let parsed = split_chat("3/14/2023, 12:05 - Ana: 3", DateOrder::MonthFirst).unwrap();
    assert_eq!(parsed.segments, 0);
}

#[test]
fn test_empty_segment_is_dropped_as_missing_sender() {
    let parsed = split_chat(
        "3/14/23, 12:05 - \n3/14/23, 12:06 - Ana: 2",
        DateOrder::MonthFirst,
    )
    .unwrap();
    assert_eq!(parsed.messages.len(), 1);
    assert_eq!(parsed.dropped[0].reason, DropReason::MissingSender);
    assert_eq!(parsed.dropped[0].text, "");
}

#[test]
fn test_unicode_sender_and_body() {
    let messages = parse_chat("3/14/23, 12:05 - João 🍽️: fila enorme, 6 pessoas").unwrap();
    assert_eq!(messages[0].sender, "João 🍽️");
    assert_eq!(extract_number(&messages[0].body), Some(6.0));
}

#[test]
fn test_empty_input() {
    let parser = ChatParser::with_config(ParseConfig::new());
    let parsed = parser.parse_str("").unwrap();
    assert_eq!(parsed.segments, 0);
    let err = process(parsed, &FilterConfig::new()).unwrap_err();
    assert!(err.is_no_messages());
}

// =========================================================================
// Extraction and filtering
// =========================================================================

#[test]
fn test_time_in_body_counts_as_number() {
    // The first number wins even when it is a clock time
    assert_eq!(extract_number("às 12:30 tinha 3"), Some(12.0));
}

#[test]
fn test_fullwidth_report_is_kept() {
    let messages = parse_chat("3/14/23, 12:00 - Ana: ３ pessoas").unwrap();
    let table = build_records(messages, &FilterConfig::new());
    assert_eq!(table.values(), vec![3.0]);
    assert!(table.dropped.is_empty());
}

#[test]
fn test_limit_boundary_values() {
    let messages = parse_chat(
        "3/14/23, 12:00 - Ana: 6,99\n\
         3/14/23, 12:01 - Ana: 7,0\n\
         3/14/23, 12:02 - Ana: 7",
    )
    .unwrap();
    let table = build_records(messages, &FilterConfig::new());
    assert_eq!(table.values(), vec![6.99]);
    assert_eq!(table.dropped.len(), 2);
}

#[test]
fn test_zero_is_kept() {
    let messages = parse_chat("3/14/23, 12:00 - Ana: 0 pessoas").unwrap();
    let table = build_records(messages, &FilterConfig::new());
    assert_eq!(table.values(), vec![0.0]);
}

// =========================================================================
// Ordering
// =========================================================================

#[test]
fn test_tuesday_sorts_before_wednesday_regardless_of_time() {
    // 3/14/23 Tuesday, 3/15/23 Wednesday
    let messages = parse_chat(
        "3/15/23, 06:00 - Ana: 1\n\
         3/14/23, 09:00 - Ana: 2\n\
         3/14/23, 08:00 - Ana: 3",
    )
    .unwrap();
    let table = build_records(messages, &FilterConfig::new());

    let order: Vec<_> = table
        .records
        .iter()
        .map(|r| (r.day_name.as_str(), r.time_of_day.format("%H:%M").to_string()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Tuesday", "08:00".to_string()),
            ("Tuesday", "09:00".to_string()),
            ("Wednesday", "06:00".to_string()),
        ]
    );
}

#[test]
fn test_same_slot_different_weeks_keep_input_order() {
    let messages = parse_chat(
        "3/14/23, 12:00 - Ana: 1\n\
         3/21/23, 12:00 - Ana: 2",
    )
    .unwrap();
    let table = build_records(messages, &FilterConfig::new());
    assert_eq!(table.values(), vec![1.0, 2.0]);
}
