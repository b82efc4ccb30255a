//! Tests for the sankey-flow ASCII renderer module

use sankey_flow::normalizer::normalize;
use sankey_flow::renderer::SankeyGraphRenderer;
use sankey_flow::types::FlowRecord;

fn record(source: &str, target: &str, value: f64) -> FlowRecord {
    FlowRecord {
        source: source.to_string(),
        target: target.to_string(),
        value,
    }
}

#[test]
fn test_tree_contains_nodes_and_values() {
    let graph = normalize(&[
        record("A", "B", 10.0),
        record("B", "C", 5.0),
        record("A", "C", 3.0),
    ])
    .unwrap();

    let tree = graph.render_as_ascii_tree();

    assert!(tree.contains("3 nodes, 3 links"));
    assert!(tree.contains('A'));
    assert!(tree.contains("B (10)"));
    assert!(tree.contains("C (5)"));
    assert!(tree.contains("C (3)"));
}

#[test]
fn test_cyclic_graph_terminates() {
    let graph = normalize(&[record("X", "Y", 1.0), record("Y", "X", 2.0)]).unwrap();

    let tree = graph.render_as_ascii_tree();

    assert!(tree.contains("cycle"));
}

#[test]
fn test_empty_graph_renders() {
    let graph = normalize(&[]).unwrap();

    let tree = graph.render_as_ascii_tree();

    assert!(tree.contains("0 nodes, 0 links"));
}

#[test]
fn test_builtin_dataset_renders_from_its_single_root() {
    let records = sankey_flow::dataset::plastic_waste_flows().unwrap();
    let graph = normalize(&records).unwrap();

    let tree = graph.render_as_ascii_tree();

    assert!(tree.contains("Total Plastic Production"));
    assert!(tree.contains("Recycled"));
}
