use super::*;

#[test]
fn csv_header_is_kept_and_rows_are_parsed() {
    let ds = Dataset::from_csv_str("a,b,c\n1,2,3\n-4.5, 0 ,6e1\n").unwrap();
    assert_eq!(ds.header().unwrap(), ["a", "b", "c"]);
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.rows()[0], vec![1.0, 2.0, 3.0]);
    assert_eq!(ds.rows()[1], vec![-4.5, 0.0, 60.0]);
}

#[test]
fn csv_tolerates_crlf_and_blank_lines() {
    let ds = Dataset::from_csv_str("x,y\r\n\r\n1,2\r\n\r\n3,4\r\n").unwrap();
    assert_eq!(ds.rows(), &[vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn csv_rows_may_differ_in_length() {
    let ds = Dataset::from_csv_str("a,b,c\n1,2,3\n4\n").unwrap();
    assert_eq!(ds.rows()[1], vec![4.0]);
}

#[test]
fn csv_reports_line_and_column_of_bad_field() {
    let err = Dataset::from_csv_str("a,b\n1,2\n3,oops\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("data error:"), "{msg}");
    assert!(msg.contains("line 3, column 2"), "{msg}");

    let err = Dataset::from_csv_str("a\nNaN\n").unwrap_err();
    assert!(err.to_string().contains("not a finite number"));
}

#[test]
fn csv_empty_field_is_rejected() {
    // A trailing comma is a missing value, which is not supported.
    assert!(Dataset::from_csv_str("a,b\n1,\n").is_err());
}

#[test]
fn csv_quoted_comma_stays_one_field() {
    let err = Dataset::from_csv_str("a,b\n\"1,5\",2\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 2, column 1: '1,5' is not a number"), "{msg}");
}

#[test]
fn csv_quoted_numbers_and_headers_are_unwrapped() {
    let ds = Dataset::from_csv_str("\"x, y\",\"say \"\"z\"\"\"\n\"1.5\", \"-2\" \n").unwrap();
    assert_eq!(ds.header().unwrap(), ["x, y", "say \"z\""]);
    assert_eq!(ds.rows(), &[vec![1.5, -2.0]]);
}

#[test]
fn csv_malformed_quotes_are_rejected() {
    for text in ["a\n\"1\n", "a,b\n1,2\"3\n", "a\n\"1\"2\n"] {
        let err = Dataset::from_csv_str(text).unwrap_err();
        assert!(matches!(err, GlyphError::Data(_)), "{text:?}: {err}");
        assert!(err.to_string().contains("line 2"), "{text:?}: {err}");
    }
}

#[test]
fn csv_without_header_is_an_error() {
    assert!(Dataset::from_csv_str("").is_err());
    assert!(Dataset::from_csv_str("\n  \n").is_err());
}

#[test]
fn header_only_csv_is_an_empty_dataset() {
    let ds = Dataset::from_csv_str("a,b,c\n").unwrap();
    assert!(ds.is_empty());
}

#[test]
fn json_rows_are_parsed() {
    let ds = Dataset::from_json_str("[[1, -2.5], [0]]").unwrap();
    assert_eq!(ds.rows(), &[vec![1.0, -2.5], vec![0.0]]);
    assert!(ds.header().is_none());
    assert!(Dataset::from_json_str("{\"rows\": 1}").is_err());
}

#[test]
fn empty_rows_are_rejected_before_geometry() {
    let err = Dataset::new(vec![vec![1.0], vec![]]).unwrap_err();
    assert!(matches!(err, GlyphError::Validation(_)));
    assert!(err.to_string().contains("row 1"));
    assert!(Dataset::from_json_str("[[1], []]").is_err());
}

#[test]
fn non_finite_values_are_rejected() {
    assert!(Dataset::new(vec![vec![1.0, f64::INFINITY]]).is_err());
}

#[test]
fn from_path_dispatches_on_extension() {
    let dir = std::env::temp_dir().join(format!("starglyph_dataset_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let csv = dir.join("rows.csv");
    std::fs::write(&csv, "a,b\n1,2\n").unwrap();
    assert_eq!(Dataset::from_path(&csv).unwrap().rows(), &[vec![1.0, 2.0]]);

    let json = dir.join("rows.JSON");
    std::fs::write(&json, "[[3, 4]]").unwrap();
    assert_eq!(Dataset::from_path(&json).unwrap().rows(), &[vec![3.0, 4.0]]);

    assert!(Dataset::from_path(dir.join("missing.csv")).is_err());
}
