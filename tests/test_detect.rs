//! Import format detection tests.

mod common;

use mtg_ingest::{detect_format, ImportFormat};

#[test]
fn detects_each_format() {
    assert_eq!(detect_format("4 Lightning Bolt (LEA) 161"), ImportFormat::Arena);
    assert_eq!(detect_format("quantity,name\n4,Lightning Bolt"), ImportFormat::Csv);
    assert_eq!(detect_format("4 Lightning Bolt"), ImportFormat::Simple);
}

#[test]
fn detects_fixtures() {
    assert_eq!(detect_format(common::SIMPLE_LIST), ImportFormat::Simple);
    assert_eq!(detect_format(common::ARENA_EXPORT), ImportFormat::Arena);
    assert_eq!(detect_format(common::CSV_EXPORT), ImportFormat::Csv);
}

#[test]
fn csv_header_keyword_on_single_line() {
    assert_eq!(detect_format("Name,Set"), ImportFormat::Csv);
}

#[test]
fn comma_rows_without_header_keyword_need_two_lines() {
    assert_eq!(detect_format("4,Lightning Bolt\n2,Opt"), ImportFormat::Csv);
    assert_eq!(detect_format("4,Lightning Bolt"), ImportFormat::Simple);
}

#[test]
fn leading_blank_lines_are_ignored() {
    assert_eq!(detect_format("\n\n  qty,card\n1,Opt"), ImportFormat::Csv);
}

#[test]
fn arena_without_collector_number_is_simple() {
    assert_eq!(detect_format("1 Opt (XLN)"), ImportFormat::Simple);
}
