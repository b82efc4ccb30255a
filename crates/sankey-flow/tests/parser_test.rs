//! Tests for the sankey-flow parser module

use sankey_flow::dataset;
use sankey_flow::error::FlowError;
use sankey_flow::normalizer::normalize;
use sankey_flow::parser::parse_tsv;

#[test]
fn test_parse_header_and_rows() {
    let input = "source\ttarget\tvalue\nA\tB\t10\nB\tC\t5.5";

    let records = parse_tsv(input).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source, "A");
    assert_eq!(records[0].target, "B");
    assert_eq!(records[0].value, 10.0);
    assert_eq!(records[1].value, 5.5);
}

#[test]
fn test_columns_are_located_by_name() {
    let input = "value\ttarget\tsource\n7\tB\tA";

    let records = parse_tsv(input).unwrap();

    assert_eq!(records[0].source, "A");
    assert_eq!(records[0].target, "B");
    assert_eq!(records[0].value, 7.0);
}

#[test]
fn test_extra_columns_are_ignored() {
    let input = "source\tnote\ttarget\tvalue\nA\tignored\tB\t1";

    let records = parse_tsv(input).unwrap();

    assert_eq!(records[0].source, "A");
    assert_eq!(records[0].target, "B");
}

#[test]
fn test_blank_lines_are_skipped() {
    let input = "source\ttarget\tvalue\n\nA\tB\t1\n\n";

    let records = parse_tsv(input).unwrap();

    assert_eq!(records.len(), 1);
}

#[test]
fn test_empty_dataset_is_an_error() {
    assert!(matches!(
        parse_tsv("  \n \n"),
        Err(FlowError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_missing_column_is_an_error() {
    let err = parse_tsv("source\ttarget\nA\tB").unwrap_err();

    match err {
        FlowError::Parse { line, message } => {
            assert_eq!(line, 1);
            assert!(message.contains("value"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_short_row_is_an_error() {
    let err = parse_tsv("source\ttarget\tvalue\nA\tB").unwrap_err();

    assert!(matches!(err, FlowError::Parse { line: 2, .. }));
}

#[test]
fn test_non_numeric_value_is_an_error() {
    let err = parse_tsv("source\ttarget\tvalue\nA\tB\tlots").unwrap_err();

    match err {
        FlowError::Parse { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("lots"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_source_field_is_an_error() {
    let err = parse_tsv("source\ttarget\tvalue\n\tB\t1").unwrap_err();

    assert!(matches!(err, FlowError::Parse { line: 2, .. }));
}

#[test]
fn test_negative_value_is_an_error() {
    assert!(parse_tsv("source\ttarget\tvalue\nA\tB\t-4").unwrap_err().to_string().contains("negative"));
}

#[test]
fn test_error_reports_original_line_numbers() {
    // The bad row sits after a blank line; the reported number matches the
    // raw input, not the filtered view.
    let input = "source\ttarget\tvalue\nA\tB\t1\n\nA\tC\tbad";
    let err = parse_tsv(input).unwrap_err();

    assert!(matches!(err, FlowError::Parse { line: 4, .. }));
}

#[test]
fn test_builtin_dataset_parses_and_normalizes() {
    let records = dataset::plastic_waste_flows().unwrap();
    assert_eq!(records.len(), 8);

    let graph = normalize(&records).unwrap();
    assert_eq!(graph.nodes.len(), 9);
    assert_eq!(graph.links.len(), 8);
    assert_eq!(graph.nodes[0].name, "Total Plastic Production");
    graph.validate().unwrap();
}
