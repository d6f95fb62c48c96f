use penstock::csv_preview::{CsvError, CsvTable};

#[test]
fn test_parse_basic_csv() {
    let table = CsvTable::parse("inline", "node,elevation\n1,100.0\n2,95.5").unwrap();

    assert_eq!(table.header, vec!["node", "elevation"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["1", "100.0"]);
    assert_eq!(table.rows[1], vec!["2", "95.5"]);
}

#[test]
fn test_cells_kept_verbatim() {
    // No trimming, no coercion: whitespace and text survive untouched
    let table = CsvTable::parse("inline", "a, b\n 1 ,x y\n,").unwrap();

    assert_eq!(table.header, vec!["a", " b"]);
    assert_eq!(table.rows[0], vec![" 1 ", "x y"]);
    assert_eq!(table.rows[1], vec!["", ""]);
}

#[test]
fn test_ragged_rows_kept() {
    let table = CsvTable::parse("inline", "a,b\n1\n1,2,3").unwrap();

    assert_eq!(table.rows[0], vec!["1"]);
    assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    assert_eq!(table.column_count(), 3);
}

#[test]
fn test_blank_lines_dropped() {
    let table = CsvTable::parse("inline", "a,b\n\n1,2\n   \n3,4\n").unwrap();
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn test_empty_content_is_an_error() {
    let result = CsvTable::parse("inline", "");
    assert!(matches!(result, Err(CsvError::Empty(_))));

    let result = CsvTable::parse("inline", "\n  \n");
    assert!(matches!(result, Err(CsvError::Empty(_))));
}

#[test]
fn test_header_only_file() {
    let table = CsvTable::parse("inline", "a,b,c").unwrap();
    assert_eq!(table.header, vec!["a", "b", "c"]);
    assert!(table.rows.is_empty());
    assert_eq!(table.column_count(), 3);
}

#[test]
fn test_load_from_file() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("penstock_test_csv");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();

    let csv_path = temp_dir.join("network.csv");
    fs::write(&csv_path, "node,elevation\n1,100.0\n").unwrap();

    let table = CsvTable::load(&csv_path).unwrap();
    assert_eq!(table.source, csv_path.display().to_string());
    assert_eq!(table.header, vec!["node", "elevation"]);
    assert_eq!(table.rows, vec![vec!["1", "100.0"]]);

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let missing = std::env::temp_dir().join("penstock_test_csv_missing").join("nope.csv");
    let result = CsvTable::load(&missing);
    assert!(matches!(result, Err(CsvError::Read { .. })));
}
