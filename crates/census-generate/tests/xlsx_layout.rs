use std::io::{Cursor, Read};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use zip::ZipArchive;

use census_core::{COLUMN_WIDTHS, CompositionPolicy, GenerationRequest, SHEET_NAME};
use census_generate::{BatchEngine, CancellationToken, GenerateOptions, MemorySink};

fn workbook_bytes() -> Vec<u8> {
    let now: NaiveDateTime = NaiveDate::from_ymd_opt(2026, 3, 9)
        .unwrap_or_default()
        .and_time(NaiveTime::from_hms_opt(7, 4, 0).unwrap_or_default());
    let request = GenerationRequest::new(1, 2, CompositionPolicy::EmployeeSpouse);
    let engine = BatchEngine::new(GenerateOptions {
        seed: Some(17),
        ..GenerateOptions::default()
    });
    let mut sink = MemorySink::new();
    engine
        .run(&request, now, &mut sink, &CancellationToken::new())
        .expect("run batch");
    sink.artifacts.remove(0).1
}

fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut part = archive.by_name(name).expect("workbook part");
    let mut content = String::new();
    part.read_to_string(&mut content).expect("read part");
    content
}

#[test]
fn workbook_has_single_named_sheet() {
    let mut archive = ZipArchive::new(Cursor::new(workbook_bytes())).expect("open xlsx");
    let workbook = read_part(&mut archive, "xl/workbook.xml");

    assert_eq!(workbook.matches("<sheet ").count(), 1);
    assert!(workbook.contains(&format!("<sheet name=\"{SHEET_NAME}\"")));
}

#[test]
fn sheet_carries_width_hints_for_leading_columns() {
    let mut archive = ZipArchive::new(Cursor::new(workbook_bytes())).expect("open xlsx");
    let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");

    let col = Regex::new(r#"<col min="(\d+)" max="(\d+)""#).expect("col regex");
    let mut covered = Vec::new();
    for caps in col.captures_iter(&sheet) {
        let min: usize = caps[1].parse().expect("min");
        let max: usize = caps[2].parse().expect("max");
        covered.extend(min..=max);
    }
    covered.sort_unstable();

    let expected: Vec<usize> = (1..=COLUMN_WIDTHS.len()).collect();
    assert_eq!(covered, expected);
}

#[test]
fn title_and_headers_are_written() {
    let mut archive = ZipArchive::new(Cursor::new(workbook_bytes())).expect("open xlsx");
    let strings = read_part(&mut archive, "xl/sharedStrings.xml");

    assert!(strings.contains("Presented to: Apex Global Solutions"));
    assert!(strings.contains("EE ID"));
    assert!(strings.contains("Renewal Group Plan Premium"));
    assert!(strings.contains("Spouse"));
}
