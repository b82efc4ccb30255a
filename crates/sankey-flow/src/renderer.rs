//! ASCII tree rendering for sankey graphs
//!
//! This module renders a normalized graph as an ASCII tree, making it easy
//! to inspect the flow structure from a terminal before handing the data to
//! the web renderer. Positional layout stays the renderer's job; this is a
//! topological view only.

use crate::types::SankeyGraph;
use ascii_tree::Tree;

/// Trait for rendering a graph as an ASCII tree
pub trait SankeyGraphRenderer {
    /// Render the graph as an ASCII tree rooted at its source nodes
    fn render_as_ascii_tree(&self) -> String;
}

impl SankeyGraphRenderer for SankeyGraph {
    fn render_as_ascii_tree(&self) -> String {
        let mut has_incoming = vec![false; self.nodes.len()];
        for link in &self.links {
            if link.target < self.nodes.len() {
                has_incoming[link.target] = true;
            }
        }

        let mut roots: Vec<usize> = (0..self.nodes.len())
            .filter(|&index| !has_incoming[index])
            .collect();
        // A fully cyclic graph has no natural root; start from the first node.
        if roots.is_empty() && !self.nodes.is_empty() {
            roots.push(0);
        }

        let children: Vec<Tree> = roots
            .iter()
            .map(|&index| node_tree(self, index, self.nodes[index].name.clone(), &mut Vec::new()))
            .collect();

        let root_label = format!(
            "🌊 {} nodes, {} links",
            self.nodes.len(),
            self.links.len()
        );
        let tree = Tree::Node(root_label, children);

        let mut buffer = String::new();
        ascii_tree::write_tree(&mut buffer, &tree).unwrap();
        buffer
    }
}

fn node_tree(graph: &SankeyGraph, index: usize, label: String, path: &mut Vec<usize>) -> Tree {
    if path.contains(&index) {
        // Cycle guard: show the revisited node once and stop descending.
        return Tree::Leaf(vec![format!("{label} (cycle)")]);
    }

    path.push(index);
    let children: Vec<Tree> = graph
        .links
        .iter()
        .filter(|link| link.source == index && link.target < graph.nodes.len())
        .map(|link| {
            let target_label = format!("{} ({})", graph.nodes[link.target].name, link.value);
            node_tree(graph, link.target, target_label, path)
        })
        .collect();
    path.pop();

    if children.is_empty() {
        Tree::Leaf(vec![label])
    } else {
        Tree::Node(label, children)
    }
}
