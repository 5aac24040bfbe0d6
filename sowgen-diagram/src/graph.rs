//! Typed graph description and its DOT serializer.
//!
//! `to_dot` iterates clusters, nodes and edges in insertion order, so two
//! structurally equal descriptions serialize to byte-identical text.

/// One attribute pair, rendered as `key="value"`.
pub type Attr = (&'static str, String);

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: &'static str,
    pub label: String,
    pub attrs: Vec<Attr>,
}

impl Node {
    pub fn new(id: &'static str, label: impl Into<String>) -> Self {
        Self { id, label: label.into(), attrs: Vec::new() }
    }

    #[must_use]
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub index: usize,
    pub label: String,
    pub attrs: Vec<Attr>,
    pub nodes: Vec<Node>,
}

impl Cluster {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self { index, label: label.into(), attrs: Vec::new(), nodes: Vec::new() }
    }

    #[must_use]
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    #[must_use]
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: &'static str,
    pub to: &'static str,
    pub label: Option<String>,
    pub attrs: Vec<Attr>,
}

impl Edge {
    pub fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to, label: None, attrs: Vec::new() }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }
}

/// A directed graph with layered clusters, ready for DOT serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDescription {
    pub clusters: Vec<Cluster>,
    pub edges: Vec<Edge>,
}

impl GraphDescription {
    pub fn node_count(&self) -> usize {
        self.clusters.iter().map(|c| c.nodes.len()).sum()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Serializes to graphviz DOT text. Always syntactically valid for any
    /// description built through this module.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph G {\n");
        out.push_str("  rankdir=LR; compound=true; newrank=true; splines=ortho;\n");
        out.push_str("  nodesep=0.6; ranksep=1.2;\n");
        out.push_str(
            "  node [shape=rect, style=\"rounded,filled\", fontname=\"Arial Bold\", fontsize=10, margin=\"0.2,0.1\"];\n",
        );
        out.push_str(
            "  edge [fontname=\"Arial\", fontsize=9, color=\"#64748b\", fontcolor=\"#334155\"];\n",
        );

        for cluster in &self.clusters {
            out.push('\n');
            out.push_str(&format!("  subgraph cluster_{} {{\n", cluster.index));
            out.push_str(&format!("    label=\"{}\";", escape(&cluster.label)));
            for (key, value) in &cluster.attrs {
                out.push_str(&format!(" {key}=\"{}\";", escape(value)));
            }
            out.push('\n');
            for node in &cluster.nodes {
                out.push_str(&format!("    {} [label=\"{}\"", node.id, escape(&node.label)));
                for (key, value) in &node.attrs {
                    out.push_str(&format!(", {key}=\"{}\"", escape(value)));
                }
                out.push_str("];\n");
            }
            out.push_str("  }\n");
        }

        out.push('\n');
        for edge in &self.edges {
            out.push_str(&format!("  {} -> {}", edge.from, edge.to));
            let mut parts: Vec<String> = Vec::new();
            if let Some(label) = &edge.label {
                parts.push(format!("label=\"{}\"", escape(label)));
            }
            for (key, value) in &edge.attrs {
                parts.push(format!("{key}=\"{}\"", escape(value)));
            }
            if !parts.is_empty() {
                out.push_str(&format!(" [{}]", parts.join(", ")));
            }
            out.push_str(";\n");
        }

        out.push_str("}\n");
        out
    }
}

/// DOT string escaping: literal quotes and newlines inside labels.
fn escape(value: &str) -> String {
    value.replace('"', "\\\"").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_output_contains_clusters_nodes_and_edges() {
        let mut graph = GraphDescription::default();
        graph.clusters.push(
            Cluster::new(0, "Client / User Layer")
                .attr("style", "dashed,rounded")
                .node(Node::new("UI", "Interface\n(Web App)").attr("fillcolor", "#3b82f6")),
        );
        graph.edges.push(Edge::new("UI", "ORCH").label("1. Request"));

        let dot = graph.to_dot();
        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("subgraph cluster_0 {"));
        assert!(dot.contains("label=\"Client / User Layer\""));
        assert!(dot.contains("UI [label=\"Interface\\n(Web App)\", fillcolor=\"#3b82f6\"];"));
        assert!(dot.contains("UI -> ORCH [label=\"1. Request\"];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn quotes_in_labels_are_escaped() {
        let mut graph = GraphDescription::default();
        graph
            .clusters
            .push(Cluster::new(0, "layer").node(Node::new("N", "say \"hi\"")));
        assert!(graph.to_dot().contains("label=\"say \\\"hi\\\"\""));
    }

    #[test]
    fn counts_cover_all_clusters() {
        let mut graph = GraphDescription::default();
        graph.clusters.push(Cluster::new(0, "a").node(Node::new("A", "a")));
        graph.clusters.push(
            Cluster::new(1, "b").node(Node::new("B", "b")).node(Node::new("C", "c")),
        );
        graph.edges.push(Edge::new("A", "B"));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }
}
