use std::io::Write;

use sheetmap_ingest::load_catalog;

#[test]
fn loads_catalog_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp catalog");
    file.write_all(
        br#"{
            "tables": [
                {"name": "loans", "columns": [{"name": "loan_number", "sql_type": "text"}]},
                {"name": "loan_payments", "columns": []}
            ]
        }"#,
    )
    .expect("write temp catalog");

    let tables = load_catalog(file.path()).expect("load catalog");
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].name, "loans");
    assert_eq!(tables[0].columns[0].sql_type, "text");
}

#[test]
fn malformed_catalog_is_an_error() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp catalog");
    file.write_all(b"{ not json").expect("write temp catalog");
    let error = load_catalog(file.path()).expect_err("malformed catalog must fail");
    assert!(error.to_string().contains("parse catalog"));
}
