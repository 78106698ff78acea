mod common;

use common::write_csv;
use dynplot::data::csv_source::{load_series, parse_reader, rows_to_series};
use dynplot::data::{Point, Value};
use dynplot::DynPlotError;

#[test]
fn header_and_typed_rows() {
    let parsed = parse_reader("x,y\n1,2\n3,4\n".as_bytes()).unwrap();
    assert_eq!(parsed.headers, vec!["x", "y"]);
    assert_eq!(
        rows_to_series(&parsed.rows).points(),
        &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
    );
}

#[test]
fn extra_columns_are_ignored_and_order_is_free() {
    let parsed = parse_reader("label,y,x\nfirst,10,1\nsecond,20,2\n".as_bytes()).unwrap();
    let series = rows_to_series(&parsed.rows);
    assert_eq!(series.points(), &[Point::new(1.0, 10.0), Point::new(2.0, 20.0)]);
}

#[test]
fn header_match_is_case_sensitive() {
    let parsed = parse_reader("X,Y\n1,2\n".as_bytes()).unwrap();
    let series = rows_to_series(&parsed.rows);
    assert_eq!(series.len(), 1);
    assert_eq!(series.get(0).unwrap().x, Value::Missing);
    assert_eq!(series.get(0).unwrap().y, Value::Missing);
}

#[test]
fn ragged_and_non_numeric_cells_degrade_to_values() {
    let parsed = parse_reader("x,y\n1,hello\n,3\n4,true\n5,6,7\n".as_bytes()).unwrap();
    let series = rows_to_series(&parsed.rows);
    assert_eq!(series.len(), 4);
    assert_eq!(series.get(0).unwrap().y, Value::Text("hello".into()));
    assert_eq!(series.get(1).unwrap().x, Value::Missing);
    assert_eq!(series.get(2).unwrap().y, Value::Bool(true));
    assert_eq!(series.get(3).unwrap(), &Point::new(5.0, 6.0));
}

#[test]
fn load_series_from_file() {
    let file = write_csv("x,y\r\n0.5,1e2\r\n-1,-2\r\n");
    let series = load_series(file.path()).unwrap();
    assert_eq!(series.points(), &[Point::new(0.5, 100.0), Point::new(-1.0, -2.0)]);
}

#[test]
fn empty_file_is_an_error() {
    let file = write_csv("");
    let err = load_series(file.path()).unwrap_err();
    assert!(matches!(err, DynPlotError::MissingHeader { .. }));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_series(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DynPlotError::FileOpen { .. }));
}

#[test]
fn invalid_utf8_in_other_column_keeps_xy() {
    let parsed = parse_reader(&b"x,y,label\n1,2,caf\xe9\n3,4,ok\n"[..]).unwrap();
    let series = rows_to_series(&parsed.rows);
    assert_eq!(series.points(), &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    assert_eq!(parsed.rows[0].get("label"), Value::Text("caf\u{fffd}".into()));
    assert_eq!(parsed.bad_rows, 0);
}

#[test]
fn invalid_utf8_in_header_does_not_fail_load() {
    let parsed = parse_reader(&b"x,y,caf\xe9\n1,2,a\n"[..]).unwrap();
    assert_eq!(parsed.headers.len(), 3);
    assert_eq!(rows_to_series(&parsed.rows).points(), &[Point::new(1.0, 2.0)]);
}

#[test]
fn blank_lines_are_skipped() {
    let parsed = parse_reader("x,y\n1,2\n\n3,4\n".as_bytes()).unwrap();
    assert_eq!(
        rows_to_series(&parsed.rows).points(),
        &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
    );
}
