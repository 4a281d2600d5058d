//! Property-based tests for fila.
//!
//! These tests generate random inputs to find edge cases.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use fila::ChatMessage;
use fila::core::{FilterConfig, build_records, extract_number};
use fila::parser::parse_chat;

/// Timestamps spread over two weeks of March 2023.
fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (13u32..27, 0u32..24, 0u32..60).prop_map(|(day, h, m)| {
        NaiveDate::from_ymd_opt(2023, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    })
}

/// Bodies drawn from typical queue reports and chatter.
fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "2".to_string(),
        "fila: 3,5 pessoas".to_string(),
        "6.9".to_string(),
        "7".to_string(),
        "12 pessoas!".to_string(),
        "ok".to_string(),
        "vazia".to_string(),
        "0".to_string(),
        "umas 4, talvez 5".to_string(),
        String::new(),
    ])
}

fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<ChatMessage>> {
    prop::collection::vec(
        (arb_timestamp(), arb_body()).prop_map(|(ts, body)| ChatMessage::new(ts, "Ana", body)),
        0..max_len,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // EXTRACTION PROPERTIES
    // ============================================

    /// "<int>,<frac>" reads as int.frac
    #[test]
    fn comma_is_decimal_separator(int in 0u32..1000, frac in 0u32..100) {
        let body = format!("fila: {int},{frac:02} pessoas");
        let expected: f64 = format!("{int}.{frac:02}").parse().unwrap();
        prop_assert_eq!(extract_number(&body), Some(expected));
    }

    /// Bodies without any decimal digit never yield a number
    #[test]
    fn no_digits_no_number(body in "[^\\p{Nd}]{0,30}") {
        prop_assert_eq!(extract_number(&body), None);
    }

    /// Fullwidth and Arabic-Indic digits read the same as ASCII ones
    #[test]
    fn unicode_digits_match_ascii(
        n in 0u32..100_000,
        zero in prop::sample::select(vec!['\u{FF10}', '\u{0660}', '\u{0966}']),
    ) {
        let shifted: String = n
            .to_string()
            .chars()
            .map(|c| char::from_u32(u32::from(zero) + c.to_digit(10).unwrap()).unwrap())
            .collect();
        let body = format!("fila: {shifted} pessoas");
        prop_assert_eq!(extract_number(&body), Some(f64::from(n)));
    }

    // ============================================
    // RECORD PROPERTIES
    // ============================================

    /// Kept plus dropped always accounts for every message
    #[test]
    fn build_accounts_for_every_message(messages in arb_messages(30)) {
        let total = messages.len();
        let table = build_records(messages, &FilterConfig::new());
        prop_assert_eq!(table.len() + table.dropped.len(), total);
    }

    /// No kept value reaches the limit
    #[test]
    fn kept_values_below_limit(messages in arb_messages(30), limit in 1.0f64..20.0) {
        let table = build_records(messages, &FilterConfig::new().with_max_value(limit));
        prop_assert!(table.records.iter().all(|r| r.value < limit));
    }

    /// Records come out ordered by weekday, then time of day
    #[test]
    fn records_sorted(messages in arb_messages(30)) {
        let table = build_records(messages, &FilterConfig::new());
        let keys: Vec<_> = table.records.iter().map(|r| r.sort_key()).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    // ============================================
    // SPLITTING PROPERTIES
    // ============================================

    /// N segments with a colon parse to N messages; segments without one vanish
    #[test]
    fn split_count_matches_colon_segments(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let chat: String = flags
            .iter()
            .enumerate()
            .map(|(i, &has_sender)| {
                let minute = i % 60;
                if has_sender {
                    format!("3/14/23, 12:{minute:02} - Ana: {i}\n")
                } else {
                    format!("3/14/23, 12:{minute:02} - aviso do sistema {i}\n")
                }
            })
            .collect();

        let expected = flags.iter().filter(|&&f| f).count();
        prop_assert_eq!(parse_chat(&chat).unwrap().len(), expected);
    }
}
