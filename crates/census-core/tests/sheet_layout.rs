use census_core::{COLUMN_HEADERS, COLUMN_WIDTHS, Cell, CensusTable, DATA_COLUMNS, SHEET_NAME};

#[test]
fn preamble_has_title_and_header() {
    let table = CensusTable::with_preamble("Apex Global Solutions");

    assert_eq!(table.rows.len(), CensusTable::PREAMBLE_ROWS);
    assert_eq!(table.sheet_name, SHEET_NAME);
    assert_eq!(table.column_widths.len(), 19);
    assert_eq!(table.rows[0], vec![Cell::Empty]);
    assert_eq!(
        table.rows[1],
        vec![
            Cell::Empty,
            Cell::Text("Presented to: Apex Global Solutions".to_string())
        ]
    );
    assert_eq!(table.rows[2], vec![Cell::Empty]);
    assert_eq!(table.rows[3], vec![Cell::Empty]);

    let header = &table.rows[4];
    assert_eq!(header.len(), DATA_COLUMNS + 1);
    assert!(header[0].is_empty());
    assert_eq!(header[1], Cell::Text("EE ID".to_string()));
    assert_eq!(
        header[DATA_COLUMNS],
        Cell::Text("Renewal Group Plan Premium".to_string())
    );
    assert!(table.data_rows().is_empty());
}

#[test]
fn widths_start_with_spacer_column() {
    assert_eq!(COLUMN_WIDTHS[0], 2);
    assert_eq!(COLUMN_WIDTHS[4], 30);
    assert_eq!(COLUMN_HEADERS[3], "Email");
}

#[test]
fn policy_serializes_as_kebab_id() {
    let value = serde_json::to_value(census_core::CompositionPolicy::EmployeeSpouseChild)
        .expect("serialize policy");
    assert_eq!(value, serde_json::json!("employee-spouse-child"));
}
