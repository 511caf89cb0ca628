use std::io::Write;

use sheetmap_ingest::{profile_columns, read_csv_sheet, read_csv_table};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file
}

#[test]
fn reads_sheet_with_samples() {
    let file = write_csv(
        "Loan Number,Loan Amount,Next Due Date\n\
         1001,450000,2025-04-01\n\
         1002,325000,2025-04-01\n\
         1003,,2025-05-01\n",
    );
    let sheet = read_csv_sheet(file.path()).expect("read sheet");
    assert_eq!(sheet.columns.len(), 3);
    assert_eq!(sheet.row_count, 3);
    assert_eq!(sheet.columns[0].header, "Loan Number");
    assert_eq!(sheet.columns[0].sample_values.len(), 3);
    // Blank cells are not collected as samples.
    assert_eq!(sheet.columns[1].sample_values.len(), 2);
}

#[test]
fn skips_report_banner_rows() {
    let file = write_csv(
        "Daily Remittance Report\n\
         loan_number,principal_balance,interest_rate\n\
         1001,448000.12,6.25\n",
    );
    let sheet = read_csv_sheet(file.path()).expect("read sheet");
    assert_eq!(sheet.columns[0].header, "loan_number");
    assert_eq!(sheet.row_count, 1);
}

#[test]
fn empty_file_yields_empty_sheet() {
    let file = write_csv("");
    let sheet = read_csv_sheet(file.path()).expect("read sheet");
    assert!(sheet.columns.is_empty());
    assert_eq!(sheet.row_count, 0);
}

#[test]
fn profiles_report_shape_problems() {
    let file = write_csv(
        "Loan Number,Empty,Loan Amount\n\
         01001,,\"450,000.00\"\n\
         01002,,\"325,000.00\"\n",
    );
    let table = read_csv_table(file.path()).expect("read table");
    let profiles = profile_columns(&table);
    assert!(profiles[1].is_empty);
    assert_eq!(profiles[2].numeric_as_text, 2);
    assert_eq!(profiles[0].non_null, 2);
}

#[test]
fn missing_file_is_an_error() {
    let result = read_csv_sheet(std::path::Path::new("/nonexistent/loans.csv"));
    assert!(result.is_err());
}
